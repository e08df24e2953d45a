//! Append-only writer for the classic page-description file layout:
//! a header, indirect objects at tracked offsets, a cross-reference table
//! and a trailer.
//!
//! ```
//! use quire_types::{dict, ObjectId, ObjectRecord, Value};
//! use quire_writer::{Writer, WriterConfig};
//!
//! let mut writer = Writer::with_config(Vec::new(), WriterConfig::new().with_seed(7));
//! writer.write_header(1, 4)?;
//! writer.write_object(&ObjectRecord::new((1, 0), dict! {
//!     "Type" => Value::name("Catalog"),
//!     "Pages" => Value::link(2, 0),
//! }))?;
//! writer.write_object(&ObjectRecord::new((2, 0), dict! {
//!     "Type" => Value::name("Pages"),
//!     "Count" => 0,
//! }))?;
//! writer.write_xref_table()?;
//! writer.write_trailer(ObjectId::first(1), None)?;
//! let bytes = writer.finish()?;
//! assert!(bytes.ends_with(b"%%EOF\n"));
//! # Ok::<(), quire_writer::WriteError>(())
//! ```

mod config;
mod error;
pub mod numfmt;
mod sink;
pub mod xref;
mod writer;

pub use config::{FILE_ID_LEN, FileIdSource, WriterConfig};
pub use error::WriteError;
pub use sink::CountingSink;
pub use writer::{SessionState, Writer};
pub use xref::{EntryState, Subsection, XrefEntry, XrefTable};
