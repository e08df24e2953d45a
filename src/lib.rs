//! Byte-exact serialization of page-description documents.
//!
//! The workspace is split into:
//! - `quire-types`: the value model and indirect object records
//! - `quire-writer`: the append-only writer, cross-reference table and trailer
//! - `quire-metadata`: the document information dictionary
//!
//! This crate ties them together with [`Document`], which runs one complete
//! write session over a finished set of objects.

pub mod blank;
pub mod document;
pub mod error;

pub use document::Document;
pub use error::QuireError;

pub use quire_metadata::DocumentInfo;
pub use quire_types::{Array, Dict, GenNum, ObjNum, ObjectId, ObjectRecord, Value, ValueKind, dict};
pub use quire_writer::{FileIdSource, SessionState, WriteError, Writer, WriterConfig, XrefTable};
