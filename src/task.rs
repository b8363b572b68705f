use std::fmt;

use crate::analyzer::{SourceLayout, VersionExtractor};
use crate::error::Result;

/// Which binary-format version is being mapped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanTask {
    Oat,
    Vdex,
}

impl ScanTask {
    pub fn default_output(&self) -> &'static str {
        match self {
            ScanTask::Oat => "oat_versions.json",
            ScanTask::Vdex => "vdex_versions.json",
        }
    }

    pub fn layout(&self) -> SourceLayout {
        match self {
            ScanTask::Oat => SourceLayout::oat(),
            ScanTask::Vdex => SourceLayout::vdex(),
        }
    }

    pub fn extractor(&self) -> Result<VersionExtractor> {
        match self {
            ScanTask::Oat => VersionExtractor::oat(),
            ScanTask::Vdex => VersionExtractor::vdex(),
        }
    }
}

impl fmt::Display for ScanTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanTask::Oat => write!(f, "oat"),
            ScanTask::Vdex => write!(f, "vdex"),
        }
    }
}
