//! The cross-reference table: object number to byte offset.
//!
//! The table always holds the free-list head, object 0 at generation 65535.
//! Objects are never deleted during a session, so the head is the only
//! free entry and links to itself.

use crate::error::WriteError;
use quire_types::{GenNum, ObjNum};
use std::collections::BTreeMap;
use std::collections::btree_map;
use std::iter::Peekable;

/// Generation number carried by the free-list head.
pub const FREE_HEAD_GENERATION: GenNum = 65535;

/// Largest offset that fits the ten-digit position field.
pub const MAX_OFFSET: u64 = 9_999_999_999;

/// Length of one encoded table record, line break included.
pub const RECORD_LEN: usize = 20;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum EntryState {
    Used,
    Free,
}

impl EntryState {
    fn flag(self) -> u8 {
        match self {
            EntryState::Used => b'n',
            EntryState::Free => b'f',
        }
    }
}

/// One row of the table.
///
/// For used entries `pos` is the byte offset of the object header; for
/// free entries it is the number of the next free object.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct XrefEntry {
    pub obj_num: ObjNum,
    pub generation: GenNum,
    pub pos: u64,
    pub state: EntryState,
}

impl XrefEntry {
    pub fn used(obj_num: ObjNum, generation: GenNum, offset: u64) -> Self {
        Self { obj_num, generation, pos: offset, state: EntryState::Used }
    }

    pub fn free(obj_num: ObjNum, generation: GenNum, next_free: ObjNum) -> Self {
        Self { obj_num, generation, pos: next_free as u64, state: EntryState::Free }
    }

    /// Renders the fixed 20-byte record: `oooooooooo ggggg n \n`.
    pub fn encode(&self) -> Result<[u8; RECORD_LEN], WriteError> {
        if self.pos > MAX_OFFSET {
            return Err(WriteError::OffsetOutOfRange { obj_num: self.obj_num, offset: self.pos });
        }

        let mut record = *b"0000000000 00000 n \n";
        fill_digits(&mut record[0..10], self.pos);
        fill_digits(&mut record[11..16], self.generation as u64);
        record[17] = self.state.flag();
        Ok(record)
    }
}

fn fill_digits(field: &mut [u8], mut value: u64) {
    for slot in field.iter_mut().rev() {
        *slot = b'0' + (value % 10) as u8;
        value /= 10;
    }
}

/// Registry of every object written in a session, ordered by object number.
#[derive(Debug, Clone)]
pub struct XrefTable {
    entries: BTreeMap<ObjNum, XrefEntry>,
}

impl Default for XrefTable {
    fn default() -> Self {
        Self::new()
    }
}

impl XrefTable {
    /// Creates a table holding only the free-list head.
    pub fn new() -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(0, XrefEntry::free(0, FREE_HEAD_GENERATION, 0));
        Self { entries }
    }

    /// Records an entry, returning the one it replaced.
    ///
    /// Callers must not pass object 0; the writer rejects it before it
    /// gets here.
    pub(crate) fn insert(&mut self, entry: XrefEntry) -> Option<XrefEntry> {
        self.entries.insert(entry.obj_num, entry)
    }

    pub fn get(&self, obj_num: ObjNum) -> Option<&XrefEntry> {
        self.entries.get(&obj_num)
    }

    /// Number of entries, the free-list head included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: the free-list head is never removed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Highest object number registered so far.
    pub fn max_obj_num(&self) -> ObjNum {
        self.entries.keys().next_back().copied().unwrap_or(0)
    }

    /// Entries in ascending object-number order.
    pub fn iter(&self) -> impl Iterator<Item = &XrefEntry> {
        self.entries.values()
    }

    /// Splits the table into maximal runs of consecutive object numbers.
    pub fn subsections(&self) -> Subsections<'_> {
        Subsections { iter: self.entries.values().peekable() }
    }
}

/// A run of entries with consecutive object numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct Subsection {
    start: ObjNum,
    entries: Vec<XrefEntry>,
}

impl Subsection {
    pub fn start(&self) -> ObjNum {
        self.start
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[XrefEntry] {
        &self.entries
    }
}

/// Iterator returned by [`XrefTable::subsections`].
pub struct Subsections<'a> {
    iter: Peekable<btree_map::Values<'a, ObjNum, XrefEntry>>,
}

impl Iterator for Subsections<'_> {
    type Item = Subsection;

    fn next(&mut self) -> Option<Subsection> {
        let first = *self.iter.next()?;
        let mut entries = vec![first];
        let mut prev = first.obj_num;

        while let Some(next) = self.iter.next_if(|e| prev.checked_add(1) == Some(e.obj_num)) {
            prev = next.obj_num;
            entries.push(*next);
        }

        Some(Subsection { start: first.obj_num, entries })
    }
}
