//! Getting test cases in (JSON array files) and out (a zip of generated
//! test scripts).

pub mod exporter;
pub mod importer;

pub use exporter::{archive_name, build_archive, TestArchive};
pub use importer::parse_tests;
