use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Length in bytes of each half of the trailer `/ID` array.
pub const FILE_ID_LEN: usize = 16;

/// Where the trailer's file identifier comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FileIdSource {
    /// Fresh random bytes for every document.
    #[default]
    Random,
    /// Bytes drawn from a generator seeded with the given value, for
    /// reproducible output.
    Seeded(u64),
    /// Exactly these bytes.
    Fixed([u8; FILE_ID_LEN]),
}

impl FileIdSource {
    pub fn generate(&self) -> [u8; FILE_ID_LEN] {
        let mut id = [0u8; FILE_ID_LEN];
        match self {
            FileIdSource::Random => rand::rng().fill(&mut id),
            FileIdSource::Seeded(seed) => StdRng::seed_from_u64(*seed).fill(&mut id),
            FileIdSource::Fixed(bytes) => id = *bytes,
        }
        id
    }
}

/// Settings for one write session.
#[derive(Debug, Clone, Default)]
pub struct WriterConfig {
    pub file_id: FileIdSource,
}

impl WriterConfig {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_file_id(mut self, source: FileIdSource) -> Self {
        self.file_id = source;
        self
    }

    /// Shorthand for a seeded file identifier.
    pub fn with_seed(self, seed: u64) -> Self {
        self.with_file_id(FileIdSource::Seeded(seed))
    }
}
