use regex::Regex;
use tracing::trace;

use crate::error::Result;

/// `static constexpr std::array<uint8_t, 4> kOatVersion { { '1', '7', '0', '\0' } };`
const OAT_CURRENT: &str = r"kOatVersion\s*\{\s*\{(.*?)\}\s*\};";
/// `static constexpr uint8_t kOatVersion[] = { '0', '6', '4', '\0' };`
const OAT_LEGACY: &str = r"kOatVersion\[\]\s*=\s*\{(.*?)\};";
/// `static constexpr uint8_t kVerifierDepsVersion[] = { '0', '0', '5', '\0' };`
const VDEX_CURRENT: &str = r"kVerifierDepsVersion\[\]\s*=\s*\{(.*?)\};";
/// `static constexpr uint8_t kVdexVersion[] = { '0', '1', '9', '\0' };`
const VDEX_LEGACY: &str = r"kVdexVersion\[\]\s*=\s*\{(.*?)\};";

/// Leading three character literals of an initializer payload.
const CHAR_TRIPLE: &str = r"^'([^']*)'\s*,\s*'([^']*)'\s*,\s*'([^']*)'";

/// Generation of source syntax a rule targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Current,
    Legacy,
}

/// A pattern whose first capture group is the braced initializer payload
#[derive(Debug, Clone)]
pub struct ExtractionRule {
    pub format: SourceFormat,
    pattern: Regex,
}

impl ExtractionRule {
    pub fn new(format: SourceFormat, pattern: &str) -> Result<Self> {
        Ok(ExtractionRule {
            format,
            pattern: Regex::new(pattern)?,
        })
    }

    fn payload<'a>(&self, source: &'a str) -> Option<&'a str> {
        let captures = self.pattern.captures(source)?;
        Some(captures.get(1)?.as_str().trim())
    }
}

/// Pulls a three-digit version constant out of C++ source text.
///
/// Rules are tried in order. A rule whose payload is not a valid digit
/// triple does not stop the search; the next rule is tried.
#[derive(Debug, Clone)]
pub struct VersionExtractor {
    rules: Vec<ExtractionRule>,
    triple: Regex,
}

impl VersionExtractor {
    pub fn new(rules: Vec<ExtractionRule>) -> Result<Self> {
        Ok(VersionExtractor {
            rules,
            triple: Regex::new(CHAR_TRIPLE)?,
        })
    }

    /// Extractor for `kOatVersion` in `oat.h` / `oat.cc`
    pub fn oat() -> Result<Self> {
        Self::new(vec![
            ExtractionRule::new(SourceFormat::Current, OAT_CURRENT)?,
            ExtractionRule::new(SourceFormat::Legacy, OAT_LEGACY)?,
        ])
    }

    /// Extractor for the vdex verifier-deps version in `vdex_file.h`
    pub fn vdex() -> Result<Self> {
        Self::new(vec![
            ExtractionRule::new(SourceFormat::Current, VDEX_CURRENT)?,
            ExtractionRule::new(SourceFormat::Legacy, VDEX_LEGACY)?,
        ])
    }

    /// Returns the version as a three-character digit string, e.g. "064"
    pub fn extract(&self, source: &str) -> Option<String> {
        self.extract_with_format(source).map(|(_, version)| version)
    }

    /// Like [VersionExtractor::extract], also reporting which rule matched
    pub fn extract_with_format(&self, source: &str) -> Option<(SourceFormat, String)> {
        for rule in &self.rules {
            let Some(payload) = rule.payload(source) else {
                continue;
            };

            match self.parse_triple(payload) {
                Some(version) => return Some((rule.format, version)),
                None => trace!(format = ?rule.format, payload, "initializer is not a digit triple"),
            }
        }

        None
    }

    /// Concatenates `'a', 'b', 'c'` into "abc".
    ///
    /// Every literal must hold exactly one ASCII digit.
    pub fn parse_triple(&self, payload: &str) -> Option<String> {
        let captures = self.triple.captures(payload)?;

        let mut version = String::with_capacity(3);
        for index in 1..=3 {
            let literal = captures.get(index)?.as_str();
            let mut chars = literal.chars();
            match (chars.next(), chars.next()) {
                (Some(digit), None) if digit.is_ascii_digit() => version.push(digit),
                _ => return None,
            }
        }

        Some(version)
    }
}
