use crate::writer::SessionState;
use quire_types::{ObjNum, ValueKind};
use thiserror::Error;

/// Everything that can abort a write session.
///
/// None of these are recoverable: once a call has failed, the session is
/// poisoned and the bytes written so far must be discarded.
#[derive(Error, Debug)]
pub enum WriteError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown value kind '{kind}' at offset {offset}")]
    UnknownValueKind { offset: u64, kind: ValueKind },

    #[error("Number {value} at offset {offset} has no finite encoding")]
    NonFiniteNumber { offset: u64, value: f64 },

    #[error("Object number 0 is reserved for the free-list head")]
    ReservedObjectNumber,

    #[error("Object {obj_num} at offset {offset} does not fit a 10-digit cross-reference field")]
    OffsetOutOfRange { obj_num: ObjNum, offset: u64 },

    #[error("Cannot {operation} while the session is {state}")]
    Sequence { operation: &'static str, state: SessionState },
}
