//! Locating version constants in historical ART sources

pub mod extractor;
pub mod locator;

pub use extractor::{ExtractionRule, SourceFormat, VersionExtractor};
pub use locator::{locate, probe, LocatedFile, Probe, SourceLayout};
