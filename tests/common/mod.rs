pub mod fixtures;
pub mod pdf_assertions;

use lopdf::Document as LopdfDocument;
use quire::{Document, QuireError, WriterConfig};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around written bytes with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    /// Parse written bytes back with an independent reader
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    /// Get the number of pages the reader finds
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// The written bytes as (lossy) text
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }

    /// Save the file for manual debugging
    #[allow(dead_code)]
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

/// Config with a fixed file identifier so output is reproducible
pub fn seeded_config() -> WriterConfig {
    WriterConfig::new().with_seed(0x5EED)
}

/// Write a document in memory and parse it back
pub fn generate(document: &Document) -> Result<GeneratedPdf, QuireError> {
    init_logger();
    let bytes = document.to_bytes(&seeded_config())?;
    GeneratedPdf::from_bytes(bytes).map_err(|e| QuireError::Usage(e.to_string()))
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
