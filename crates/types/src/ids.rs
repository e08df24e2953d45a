//! Identifiers for indirect objects.
//!
//! An indirect object is addressed by its object number together with a
//! generation number. Object numbers are allocated by the producer, never
//! by the writer.

use std::fmt;

/// Object number of an indirect object. Zero is reserved for the head of
/// the free list.
pub type ObjNum = u32;

/// Generation number of an indirect object.
pub type GenNum = u16;

/// The (object number, generation number) pair naming one indirect object.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct ObjectId {
    pub num: ObjNum,
    pub generation: GenNum,
}

impl ObjectId {
    /// Creates an identifier for `num` at the given generation.
    pub const fn new(num: ObjNum, generation: GenNum) -> Self {
        Self { num, generation }
    }

    /// Creates an identifier for the first use of `num` (generation 0).
    pub const fn first(num: ObjNum) -> Self {
        Self { num, generation: 0 }
    }
}

impl From<(ObjNum, GenNum)> for ObjectId {
    fn from((num, generation): (ObjNum, GenNum)) -> Self {
        Self { num, generation }
    }
}

impl From<ObjectId> for (ObjNum, GenNum) {
    fn from(id: ObjectId) -> Self {
        (id.num, id.generation)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.num, self.generation)
    }
}
