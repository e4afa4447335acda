//! World error type.
//!
//! Only caller mistakes surface here.  A move or birth blocked by the edge or
//! by a neighbour is a normal outcome, reported through
//! [`MoveOutcome`][crate::MoveOutcome] instead.

use thiserror::Error;

use cw_core::{CoreError, CritterId, Position};

#[derive(Debug, Error)]
pub enum WorldError {
    #[error("cannot place an unplaced critter at {position}: outside the {width}x{height} world")]
    OutOfBounds {
        position: Position,
        width:    u32,
        height:   u32,
    },

    #[error("{0} has no position")]
    NotPlaced(CritterId),

    #[error("{0} does not exist in this world")]
    UnknownCritter(CritterId),

    #[error("critter id space exhausted")]
    ArenaFull,

    #[error("world invariant violated: {0}")]
    Inconsistent(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type WorldResult<T> = Result<T, WorldError>;
