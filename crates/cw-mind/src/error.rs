use thiserror::Error;

#[derive(Debug, Error)]
pub enum MindError {
    #[error("unknown action key: {0:?}")]
    UnknownAction(String),
}

pub type MindResult<T> = Result<T, MindError>;
