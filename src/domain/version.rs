use std::fmt;

/// Semantic version representation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    /// Create a new version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parse a version from a tag string (e.g., "v1.2.3" -> Version(1,2,3))
    ///
    /// Parsing is lenient and never fails: the leading `v` is optional, and any
    /// missing or non-numeric component becomes 0.
    ///
    /// ```
    /// # use auto_tag::domain::Version;
    /// assert_eq!(Version::parse("v1.2.3"), Version::new(1, 2, 3));
    /// assert_eq!(Version::parse("1.2"), Version::new(1, 2, 0));
    /// assert_eq!(Version::parse(""), Version::new(0, 0, 0));
    /// ```
    pub fn parse(tag: &str) -> Self {
        let clean_tag = tag.strip_prefix('v').unwrap_or(tag);
        let mut parts = clean_tag.split('.').map(parse_component);

        Version {
            major: parts.next().unwrap_or(0),
            minor: parts.next().unwrap_or(0),
            patch: parts.next().unwrap_or(0),
        }
    }

    /// Bump version according to bump type
    pub fn bump(&self, bump_type: BumpType) -> Self {
        match bump_type {
            BumpType::Major => Version::new(self.major.saturating_add(1), 0, 0),
            BumpType::Minor => Version::new(self.major, self.minor.saturating_add(1), 0),
            BumpType::Patch => Version::new(self.major, self.minor, self.patch.saturating_add(1)),
        }
    }
}

/// Leading ASCII digits of a segment, or 0 when there are none.
fn parse_component(segment: &str) -> u64 {
    let trimmed = segment.trim_start();
    let digits_end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());

    trimmed[..digits_end].parse().unwrap_or(0)
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Version bump type decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BumpType {
    Patch,
    Minor,
    Major,
}

impl BumpType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BumpType::Major => "major",
            BumpType::Minor => "minor",
            BumpType::Patch => "patch",
        }
    }
}

impl fmt::Display for BumpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
