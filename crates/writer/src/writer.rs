//! One document write session.
//!
//! A [`Writer`] owns its sink and its cross-reference table for the whole
//! session. The calls must come in order: the header, any number of
//! objects (comments may be interleaved), the cross-reference table, the
//! trailer. Every other order is rejected, and the first error of any kind
//! poisons the session for good.

use crate::config::WriterConfig;
use crate::error::WriteError;
use crate::numfmt::NumBuf;
use crate::sink::CountingSink;
use crate::xref::{MAX_OFFSET, RECORD_LEN, XrefEntry, XrefTable};
use log::{debug, trace, warn};
use quire_types::{Array, Dict, ObjectId, ObjectRecord, Value};
use std::fmt;
use std::io::Write;

/// Binary-marker comment that follows the version line, so that naive
/// tools treat the file as binary.
const BINARY_MARKER: &[u8] = b"%\xE2\xE3\xCF\xD3\n";

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Where a session stands in the required call order.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SessionState {
    /// Nothing written yet.
    Fresh,
    /// Header written; objects and comments may follow.
    Open,
    /// Cross-reference table written; only the trailer may follow.
    XrefWritten,
    /// Trailer written; the document is complete.
    Finished,
    /// A call failed; the output must be discarded.
    Failed,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SessionState::Fresh => "fresh",
            SessionState::Open => "open",
            SessionState::XrefWritten => "past the cross-reference table",
            SessionState::Finished => "finished",
            SessionState::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Serializes a document to an append-only sink.
pub struct Writer<W: Write> {
    sink: CountingSink<W>,
    xref: XrefTable,
    xref_offset: Option<u64>,
    state: SessionState,
    config: WriterConfig,
    num: NumBuf,
}

impl<W: Write> Writer<W> {
    pub fn new(sink: W) -> Self {
        Self::with_config(sink, WriterConfig::default())
    }

    pub fn with_config(sink: W, config: WriterConfig) -> Self {
        Self {
            sink: CountingSink::new(sink),
            xref: XrefTable::new(),
            xref_offset: None,
            state: SessionState::Fresh,
            config,
            num: NumBuf::new(),
        }
    }

    /// Current byte offset of the sink.
    pub fn offset(&self) -> u64 {
        self.sink.offset()
    }

    pub fn xref(&self) -> &XrefTable {
        &self.xref
    }

    /// Offset of the `xref` keyword, once the table has been written.
    pub fn xref_offset(&self) -> Option<u64> {
        self.xref_offset
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Writes the version line and the binary-marker comment.
    pub fn write_header(&mut self, major: u8, minor: u8) -> Result<(), WriteError> {
        self.require("write the header", SessionState::Fresh)?;
        self.guarded(|w| {
            w.sink.write_all(b"%PDF-")?;
            w.put_u64(major as u64)?;
            w.sink.write_all(b".")?;
            w.put_u64(minor as u64)?;
            w.sink.write_all(b"\n")?;
            w.sink.write_all(BINARY_MARKER)?;
            w.state = SessionState::Open;
            debug!("Wrote header for version {}.{}", major, minor);
            Ok(())
        })
    }

    /// Writes a comment, prefixing every line of `text` with `%`.
    ///
    /// `\r\n`, `\r` and `\n` all count as line breaks.
    pub fn write_comment(&mut self, text: &str) -> Result<(), WriteError> {
        self.require("write a comment", SessionState::Open)?;
        self.guarded(|w| {
            w.sink.write_all(b"\n%")?;
            let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
            for (i, line) in normalized.split('\n').enumerate() {
                if i > 0 {
                    w.sink.write_all(b"\n%")?;
                }
                w.sink.write_all(line.as_bytes())?;
            }
            w.sink.write_all(b"\n")?;
            Ok(())
        })
    }

    /// Writes one indirect object and records its offset.
    ///
    /// Writing the same object number twice keeps only the latest offset.
    pub fn write_object(&mut self, record: &ObjectRecord) -> Result<(), WriteError> {
        self.require("write an object", SessionState::Open)?;
        self.guarded(|w| {
            if record.obj_num() == 0 {
                return Err(WriteError::ReservedObjectNumber);
            }

            w.sink.write_all(b"\n")?;
            let pos = w.sink.offset();
            if pos > MAX_OFFSET {
                return Err(WriteError::OffsetOutOfRange { obj_num: record.obj_num(), offset: pos });
            }

            let entry = XrefEntry::used(record.obj_num(), record.gen_num(), pos);
            if let Some(previous) = w.xref.insert(entry) {
                warn!(
                    "Object {} written twice (offsets {} and {}); keeping the latest",
                    record.obj_num(),
                    previous.pos,
                    pos
                );
            }

            w.put_u64(record.obj_num() as u64)?;
            w.sink.write_all(b" ")?;
            w.put_u64(record.gen_num() as u64)?;
            w.sink.write_all(b" obj\n")?;
            w.write_value(record.value())?;

            if let Some(payload) = record.stream_payload() {
                w.sink.write_all(b"\nstream\n")?;
                w.sink.write_all(payload)?;
                w.sink.write_all(b"\nendstream")?;
            }

            w.sink.write_all(b"\nendobj\n")?;
            trace!("Wrote object {} at offset {}", record.id(), pos);
            Ok(())
        })
    }

    /// Writes the cross-reference table, one subsection per run of
    /// consecutive object numbers.
    pub fn write_xref_table(&mut self) -> Result<(), WriteError> {
        self.require("write the cross-reference table", SessionState::Open)?;
        self.guarded(|w| {
            let start = w.sink.offset();
            w.sink.write_all(b"xref\n")?;

            let sections: Vec<_> = w.xref.subsections().collect();
            for section in &sections {
                w.put_u64(section.start() as u64)?;
                w.sink.write_all(b" ")?;
                w.put_u64(section.count() as u64)?;
                w.sink.write_all(b"\n")?;

                let mut records = Vec::with_capacity(section.count() * RECORD_LEN);
                for entry in section.entries() {
                    records.extend_from_slice(&entry.encode()?);
                }
                w.sink.write_all(&records)?;
            }

            w.xref_offset = Some(start);
            w.state = SessionState::XrefWritten;
            debug!(
                "Wrote cross-reference table at offset {} ({} entries, {} subsections)",
                start,
                w.xref.len(),
                sections.len()
            );
            Ok(())
        })
    }

    /// Writes the standard trailer: `/Size`, `/Root`, the optional `/Info`
    /// and a freshly generated `/ID` whose two halves are identical.
    pub fn write_trailer(&mut self, root: ObjectId, info: Option<ObjectId>) -> Result<(), WriteError> {
        self.require("write the trailer", SessionState::XrefWritten)?;

        let id = Value::hex(self.config.file_id.generate().to_vec());
        let mut trailer = Dict::new()
            .with("Size", self.xref.max_obj_num() as u64 + 1)
            .with("Root", root)
            .with("ID", Array::new().with(id.clone()).with(id));
        if let Some(info) = info {
            trailer.insert("Info", info);
        }

        self.write_trailer_dict(&trailer)
    }

    /// Writes a caller-built trailer dictionary, then `startxref` and the
    /// end-of-file marker.
    pub fn write_trailer_dict(&mut self, trailer: &Dict) -> Result<(), WriteError> {
        self.require("write the trailer", SessionState::XrefWritten)?;
        self.guarded(|w| {
            let xref_offset = w.xref_offset.ok_or(WriteError::Sequence {
                operation: "write the trailer",
                state: w.state,
            })?;

            w.sink.write_all(b"\ntrailer\n")?;
            w.write_dict(trailer)?;
            w.sink.write_all(b"\nstartxref\n")?;
            w.put_u64(xref_offset)?;
            w.sink.write_all(b"\n%%EOF\n")?;

            w.state = SessionState::Finished;
            debug!("Wrote trailer; document is {} bytes", w.sink.offset());
            Ok(())
        })
    }

    /// Flushes the sink and hands it back. Only a finished session can be
    /// closed this way.
    pub fn finish(mut self) -> Result<W, WriteError> {
        self.require("finish the document", SessionState::Finished)?;
        self.sink.flush()?;
        Ok(self.sink.into_inner())
    }

    fn require(&mut self, operation: &'static str, expected: SessionState) -> Result<(), WriteError> {
        if self.state == expected {
            return Ok(());
        }
        let state = self.state;
        self.state = SessionState::Failed;
        Err(WriteError::Sequence { operation, state })
    }

    /// Runs `op`, poisoning the session if it fails.
    fn guarded<T>(&mut self, op: impl FnOnce(&mut Self) -> Result<T, WriteError>) -> Result<T, WriteError> {
        let result = op(self);
        if result.is_err() {
            self.state = SessionState::Failed;
        }
        result
    }

    fn put_u64(&mut self, value: u64) -> Result<(), WriteError> {
        let digits = self.num.format_u64(value);
        self.sink.write_all(digits)?;
        Ok(())
    }

    fn put_f64(&mut self, value: f64) -> Result<(), WriteError> {
        if !value.is_finite() {
            return Err(WriteError::NonFiniteNumber { offset: self.sink.offset(), value });
        }
        let digits = self.num.format_f64(value);
        self.sink.write_all(digits)?;
        Ok(())
    }

    fn write_value(&mut self, value: &Value) -> Result<(), WriteError> {
        match value {
            Value::Null => self.sink.write_all(b"null")?,
            Value::Bool(true) => self.sink.write_all(b"true")?,
            Value::Bool(false) => self.sink.write_all(b"false")?,
            Value::Number(n) => self.put_f64(*n)?,
            Value::Name(name) => self.write_name(name)?,
            Value::LiteralString(bytes) => self.write_literal(bytes)?,
            Value::HexString(bytes) => self.write_hex(bytes)?,
            Value::Array(array) => {
                self.sink.write_all(b"[")?;
                for item in array {
                    self.write_value(item)?;
                    self.sink.write_all(b" ")?;
                }
                self.sink.write_all(b"]")?;
            }
            Value::Dict(dict) => self.write_dict(dict)?,
            Value::Link(id) => {
                self.put_u64(id.num as u64)?;
                self.sink.write_all(b" ")?;
                self.put_u64(id.generation as u64)?;
                self.sink.write_all(b" R")?;
            }
            other => {
                return Err(WriteError::UnknownValueKind { offset: self.sink.offset(), kind: other.kind() });
            }
        }
        Ok(())
    }

    fn write_dict(&mut self, dict: &Dict) -> Result<(), WriteError> {
        self.sink.write_all(b"<<\n")?;
        for (key, value) in dict {
            self.write_name(key)?;
            self.sink.write_all(b" ")?;
            self.write_value(value)?;
            self.sink.write_all(b"\n")?;
        }
        self.sink.write_all(b">>")?;
        Ok(())
    }

    fn write_name(&mut self, name: &str) -> Result<(), WriteError> {
        self.sink.write_all(b"/")?;
        let bytes = name.as_bytes();
        if bytes.iter().all(|&b| is_regular(b)) {
            self.sink.write_all(bytes)?;
            return Ok(());
        }

        let mut escaped = Vec::with_capacity(bytes.len() * 3);
        for &b in bytes {
            if is_regular(b) {
                escaped.push(b);
            } else {
                escaped.extend_from_slice(&[b'#', HEX_DIGITS[(b >> 4) as usize], HEX_DIGITS[(b & 0x0F) as usize]]);
            }
        }
        self.sink.write_all(&escaped)?;
        Ok(())
    }

    fn write_literal(&mut self, bytes: &[u8]) -> Result<(), WriteError> {
        self.sink.write_all(b"(")?;
        if !bytes.iter().any(|&b| matches!(b, b'(' | b')' | b'\\')) {
            self.sink.write_all(bytes)?;
        } else {
            let mut escaped = Vec::with_capacity(bytes.len() + 8);
            for &b in bytes {
                if matches!(b, b'(' | b')' | b'\\') {
                    escaped.push(b'\\');
                }
                escaped.push(b);
            }
            self.sink.write_all(&escaped)?;
        }
        self.sink.write_all(b")")?;
        Ok(())
    }

    fn write_hex(&mut self, bytes: &[u8]) -> Result<(), WriteError> {
        let mut encoded = Vec::with_capacity(bytes.len() * 2 + 2);
        encoded.push(b'<');
        for &b in bytes {
            encoded.push(HEX_DIGITS[(b >> 4) as usize]);
            encoded.push(HEX_DIGITS[(b & 0x0F) as usize]);
        }
        encoded.push(b'>');
        self.sink.write_all(&encoded)?;
        Ok(())
    }
}

/// Printable bytes that may appear in a name without `#xx` escaping.
fn is_regular(b: u8) -> bool {
    matches!(b, b'!'..=b'~')
        && !matches!(b, b'(' | b')' | b'<' | b'>' | b'[' | b']' | b'{' | b'}' | b'/' | b'%' | b'#')
}
