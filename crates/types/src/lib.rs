//! Object model shared by the quire crates.
//!
//! - [`Value`], [`Dict`] and [`Array`]: the values an object graph is made of
//! - [`ObjectRecord`]: one indirect object with an optional stream payload
//! - [`ObjectId`]: object/generation number pairs

pub mod ids;
pub mod object;
pub mod value;

pub use ids::{GenNum, ObjNum, ObjectId};
pub use object::ObjectRecord;
pub use value::{Array, Dict, Value, ValueKind};
