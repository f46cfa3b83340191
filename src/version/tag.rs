//! Release tags and their version ordering

use std::cmp::Ordering;
use std::sync::LazyLock;

use regex::Regex;
use semver::Version;

/// Matches the leading `v<major>[.<minor>[.<patch>]]` of a tag name.
/// Anything after the last matched field is ignored.
static TAG_VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^v(\d+)(?:\.(\d+)(?:\.(\d+))?)?").unwrap());

/// A release tag as reported by the version-control tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    /// Raw tag name (e.g., "v1.2.3"), not necessarily well formed
    pub name: String,
    /// Short tagger date (YYYY-MM-DD)
    pub date: String,
}

impl Tag {
    pub fn new(name: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            date: date.into(),
        }
    }

    pub fn version(&self) -> TagVersion {
        TagVersion::parse(&self.name)
    }
}

/// Parsed form of a tag name
///
/// `Unparsed` orders below every `Release`, so a tag that is not a version
/// never wins over one that is, not even over `v0.0.0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagVersion {
    Release(Version),
    Unparsed,
}

impl TagVersion {
    /// Parse a tag name of the form `v<major>.<minor>.<patch>`.
    ///
    /// Missing trailing fields default to zero:
    /// - "v1.2.3" -> Release(1.2.3)
    /// - "v1.2" -> Release(1.2.0)
    /// - "v1.2.3-rc1" -> Release(1.2.3)
    /// - "1.2.3", "latest", "" -> Unparsed
    pub fn parse(name: &str) -> Self {
        let Some(caps) = TAG_VERSION_RE.captures(name) else {
            return TagVersion::Unparsed;
        };
        let field = |i: usize| -> Option<u64> {
            match caps.get(i) {
                Some(m) => m.as_str().parse().ok(),
                None => Some(0),
            }
        };

        match (field(1), field(2), field(3)) {
            (Some(major), Some(minor), Some(patch)) => {
                TagVersion::Release(Version::new(major, minor, patch))
            }
            // digits overflowing u64
            _ => TagVersion::Unparsed,
        }
    }

    /// Numeric (major, minor, patch) triple; `Unparsed` is all zeros
    pub fn triple(&self) -> (u64, u64, u64) {
        match self {
            TagVersion::Release(v) => (v.major, v.minor, v.patch),
            TagVersion::Unparsed => (0, 0, 0),
        }
    }
}

impl Ord for TagVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (TagVersion::Release(_), TagVersion::Release(_)) => self.triple().cmp(&other.triple()),
            (TagVersion::Release(_), TagVersion::Unparsed) => Ordering::Greater,
            (TagVersion::Unparsed, TagVersion::Release(_)) => Ordering::Less,
            (TagVersion::Unparsed, TagVersion::Unparsed) => Ordering::Equal,
        }
    }
}

impl PartialOrd for TagVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Sort tags newest first. Tags with equal versions keep their input order.
pub fn sort_newest_first(tags: &mut [Tag]) {
    tags.sort_by_cached_key(|tag| std::cmp::Reverse(tag.version()));
}

/// Returns the tag with the highest version, or None for an empty list
pub fn latest(mut tags: Vec<Tag>) -> Option<Tag> {
    sort_newest_first(&mut tags);
    tags.into_iter().next()
}
