use crate::error::QuireError;
use log::info;
use quire_metadata::DocumentInfo;
use quire_types::{ObjectId, ObjectRecord};
use quire_writer::{Writer, WriterConfig};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// A finished set of objects, ready to be written in one session.
///
/// Object numbers are assigned by whoever builds the document; this type
/// only decides the order in which the writer sees them.
#[derive(Debug, Clone)]
pub struct Document {
    version: (u8, u8),
    objects: Vec<ObjectRecord>,
    root: ObjectId,
    info: Option<(ObjectId, DocumentInfo)>,
}

impl Document {
    /// Creates an empty version 1.4 document whose catalog is `root`.
    pub fn new(root: impl Into<ObjectId>) -> Self {
        Self { version: (1, 4), objects: Vec::new(), root: root.into(), info: None }
    }

    pub fn with_version(mut self, major: u8, minor: u8) -> Self {
        self.version = (major, minor);
        self
    }

    pub fn with_object(mut self, record: ObjectRecord) -> Self {
        self.objects.push(record);
        self
    }

    pub fn push(&mut self, record: ObjectRecord) {
        self.objects.push(record);
    }

    /// Attaches an information dictionary, written as object `id`.
    pub fn with_info(mut self, id: impl Into<ObjectId>, info: DocumentInfo) -> Self {
        self.info = Some((id.into(), info));
        self
    }

    pub fn version(&self) -> (u8, u8) {
        self.version
    }

    pub fn objects(&self) -> &[ObjectRecord] {
        &self.objects
    }

    pub fn root(&self) -> ObjectId {
        self.root
    }

    /// Runs one complete write session against `sink` and returns it.
    pub fn write_to<W: Write>(&self, sink: W, config: &WriterConfig) -> Result<W, QuireError> {
        let mut writer = Writer::with_config(sink, config.clone());
        writer.write_header(self.version.0, self.version.1)?;

        for record in &self.objects {
            writer.write_object(record)?;
        }

        let info_id = match &self.info {
            Some((id, info)) => {
                writer.write_object(&info.to_object(*id))?;
                Some(*id)
            }
            None => None,
        };

        writer.write_xref_table()?;
        writer.write_trailer(self.root, info_id)?;

        info!(
            "Wrote {} objects ({} bytes)",
            writer.xref().len() - 1,
            writer.offset()
        );
        Ok(writer.finish()?)
    }

    pub fn to_bytes(&self, config: &WriterConfig) -> Result<Vec<u8>, QuireError> {
        self.write_to(Vec::new(), config)
    }

    /// Writes the document to `path`, replacing any existing file.
    pub fn save(&self, path: impl AsRef<Path>, config: &WriterConfig) -> Result<(), QuireError> {
        let file = File::create(path.as_ref())?;
        let mut out = self.write_to(BufWriter::new(file), config)?;
        out.flush()?;
        Ok(())
    }
}
