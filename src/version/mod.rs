//! Version handling
//!
//! A [`Version`] is a dotted numeric version string of one to four
//! components: major, minor, build and revision. Every version keeps two
//! string forms:
//!
//! - the *raw* string, exactly as supplied to the parser
//! - the *friendly* string, with trailing zero components stripped
//!
//! Equality and ordering are defined on the friendly string; see the
//! ordering note on [`Version`].
//!
//! # Modules
//!
//! - [`directory`]: scanning directory entry names for versions
//! - [`error`]: version parse errors

pub mod directory;
pub mod error;

pub use directory::VersionDirectory;
pub use error::VersionError;

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::OnceLock;

/// A dotted numeric version with up to four components.
///
/// Absent trailing components are distinct from explicit zeros for the
/// optional accessors, but resolve to 0 for the `int_*` accessors and for
/// the friendly string: `1.2.0.0` and `1.2` share the friendly string
/// `"1.2"` and compare equal.
///
/// # Ordering
///
/// Versions compare by lexicographic comparison of their friendly strings,
/// not by numeric tuple comparison, so `"9"` orders after `"10"`. This
/// mirrors long-standing observed behavior and is kept deliberately; see
/// DESIGN.md.
#[derive(Debug, Clone)]
pub struct Version {
    raw: String,
    components: [Option<i64>; 4],
    friendly: OnceLock<String>,
}

impl Version {
    /// Parses a version from its string form.
    ///
    /// The string must consist of one to four dot-separated integer
    /// components; trailing components may be omitted.
    pub fn parse(source: &str) -> Result<Self, VersionError> {
        let parts: Vec<&str> = source.split('.').collect();

        if parts.len() > 4 {
            return Err(VersionError::ComponentCount(parts.len()));
        }

        let mut components = [None; 4];
        for (slot, part) in components.iter_mut().zip(&parts) {
            let value = part
                .parse::<i64>()
                .map_err(|_| VersionError::NonNumeric((*part).to_string()))?;
            *slot = Some(value);
        }

        Ok(Self {
            raw: source.to_string(),
            components,
            friendly: OnceLock::new(),
        })
    }

    /// The major component, if present in the raw string.
    pub fn major(&self) -> Option<i64> {
        self.components[0]
    }

    /// The minor component, if present in the raw string.
    pub fn minor(&self) -> Option<i64> {
        self.components[1]
    }

    /// The build component, if present in the raw string.
    pub fn build(&self) -> Option<i64> {
        self.components[2]
    }

    /// The revision component, if present in the raw string.
    pub fn revision(&self) -> Option<i64> {
        self.components[3]
    }

    /// The major component, defaulting to 0.
    pub fn int_major(&self) -> i64 {
        self.components[0].unwrap_or(0)
    }

    /// The minor component, defaulting to 0.
    pub fn int_minor(&self) -> i64 {
        self.components[1].unwrap_or(0)
    }

    /// The build component, defaulting to 0.
    pub fn int_build(&self) -> i64 {
        self.components[2].unwrap_or(0)
    }

    /// The revision component, defaulting to 0.
    pub fn int_revision(&self) -> i64 {
        self.components[3].unwrap_or(0)
    }

    /// The version string exactly as supplied to the parser.
    pub fn raw_str(&self) -> &str {
        &self.raw
    }

    /// The friendly form of the version: the resolved components joined
    /// with dots, with trailing zero components stripped. At least one
    /// component always remains, so `0.0.0.0` becomes `"0"`.
    ///
    /// The result is computed on first use and memoized.
    pub fn friendly_str(&self) -> &str {
        self.friendly.get_or_init(|| {
            let resolved = [
                self.int_major(),
                self.int_minor(),
                self.int_build(),
                self.int_revision(),
            ];

            let mut len = resolved.len();
            while len > 1 && resolved[len - 1] == 0 {
                len -= 1;
            }

            resolved[..len]
                .iter()
                .map(i64::to_string)
                .collect::<Vec<_>>()
                .join(".")
        })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.friendly_str())
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Version {
    type Error = VersionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.friendly_str() == other.friendly_str()
    }
}

impl Eq for Version {}

impl PartialEq<str> for Version {
    fn eq(&self, other: &str) -> bool {
        Version::parse(other).is_ok_and(|parsed| parsed == *self)
    }
}

impl PartialEq<&str> for Version {
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.friendly_str().cmp(other.friendly_str())
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.friendly_str().hash(state);
    }
}
