pub mod common_config;
pub mod file_entry;
pub mod report;
pub mod decompress;

pub use common_config::{GunzipConfig, CONFIG};
pub use file_entry::ManifestEntry;
pub use report::{BatchReport, EntryOutcome, EntryReport};
pub use decompress::{decompress_entry, decompress_manifest, gunzip_bytes, survey_manifest};
