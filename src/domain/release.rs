use semver::Version;
use std::cmp::Ordering;

/// Comparable form of a dotted release identifier such as "4.4" or "10.0.0".
///
/// Two- and three-component numeric releases are padded to a semantic version
/// ("10.0" -> 10.0.0). Equal versions fall back to component count and then
/// the raw text, so "10.0" sorts right before "10.0.0". Anything that is not a
/// dotted numeric sorts after every numeric release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseVersion {
    raw: String,
    key: Option<(Version, usize)>,
}

impl ReleaseVersion {
    pub fn parse(release: &str) -> Self {
        ReleaseVersion {
            raw: release.to_string(),
            key: numeric_key(release),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

fn numeric_key(release: &str) -> Option<(Version, usize)> {
    let parts = release
        .split('.')
        .map(|part| part.parse::<u64>().ok())
        .collect::<Option<Vec<u64>>>()?;

    match parts.as_slice() {
        [major] => Some((Version::new(*major, 0, 0), 1)),
        [major, minor] => Some((Version::new(*major, *minor, 0), 2)),
        [major, minor, patch] => Some((Version::new(*major, *minor, *patch), 3)),
        _ => None,
    }
}

impl Ord for ReleaseVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        match (&self.key, &other.key) {
            (Some(a), Some(b)) => a.cmp(b).then_with(|| self.raw.cmp(&other.raw)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.raw.cmp(&other.raw),
        }
    }
}

impl PartialOrd for ReleaseVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Numeric-aware comparison of two release strings
pub fn compare_releases(a: &str, b: &str) -> Ordering {
    ReleaseVersion::parse(a).cmp(&ReleaseVersion::parse(b))
}
