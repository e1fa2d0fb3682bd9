//! # NuGet Versions
//!
//! Version values and version ranges as NuGet understands them.
//!
//! A NuGet version is a superset of a semantic version: it carries up to four
//! numeric components (`major.minor.patch.revision`), an optional release label
//! and optional build metadata. Components that are left out parse as zero, so
//! `"4.5"` and `"4.5.0.0"` denote the same version.
//!
//! Release labels and metadata reuse the validated [`semver::Prerelease`] and
//! [`semver::BuildMetadata`] types, which also give labels their precedence
//! rules: a release version always orders above any of its prereleases.
//!
//! Build metadata never takes part in equality, hashing or ordering.
//!
//! ## Example
//!
//! ```
//! use nuversion::{Version, VersionRange};
//!
//! let version: Version = "4.5.1".parse().unwrap();
//! assert_eq!(version, Version::new(4, 5, 1));
//!
//! let range: VersionRange = "[4.0, 5.0)".parse().unwrap();
//! assert!(range.satisfies(&version));
//! ```

#![deny(missing_docs)]

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use lazy_regex::{Lazy, Regex};
use semver::{BuildMetadata, Prerelease};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use self::range::{FloatBehavior, FloatRange, VersionRange};

mod range;

//================================================================================================
// Statics
//================================================================================================

static VERSION_REGEX: Lazy<Regex> = lazy_regex::lazy_regex!(
    r#"^(?P<major>\d+)(?:\.(?P<minor>\d+))?(?:\.(?P<patch>\d+))?(?:\.(?P<revision>\d+))?(?:-(?P<release>[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?(?:\+(?P<metadata>[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?$"#
);

//================================================================================================
// Types
//================================================================================================

/// Errors produced while parsing versions and version ranges.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input was empty or only whitespace.
    #[error("A version string cannot be empty")]
    Empty,
    /// The input does not follow the `major[.minor[.patch[.revision]]][-label][+metadata]` form.
    #[error("Invalid version string: '{0}'")]
    Invalid(String),
    /// A numeric component does not fit in 64 bits.
    #[error("Version component out of range in: '{0}'")]
    Overflow(String),
    /// The release label or the metadata was rejected.
    #[error("Invalid version label '{label}': {reason}")]
    Label {
        /// The offending label.
        label: String,
        /// Why it was rejected.
        reason: String,
    },
    /// The input is not a valid version range.
    #[error("Invalid version range: '{0}'")]
    InvalidRange(String),
}

/// A NuGet version.
///
/// Equality, hashing and ordering consider the four numeric components and the
/// release label; build metadata is carried along but ignored.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    revision: u64,
    release: Prerelease,
    metadata: BuildMetadata,
}

//================================================================================================
// Impls
//================================================================================================

impl Version {
    /// The unspecified version, `0.0.0`.
    pub const EMPTY: Version = Version::new(0, 0, 0);

    /// Creates a release version with a zero revision.
    #[must_use]
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version::with_revision(major, minor, patch, 0)
    }

    /// Creates a release version from all four numeric components.
    #[must_use]
    pub const fn with_revision(major: u64, minor: u64, patch: u64, revision: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            revision,
            release: Prerelease::EMPTY,
            metadata: BuildMetadata::EMPTY,
        }
    }

    /// Returns a copy of this version carrying the given release label.
    ///
    /// # Errors
    ///
    /// Fails when the label is not a valid dot-separated list of alphanumeric identifiers.
    pub fn with_release(mut self, label: &str) -> Result<Self, Error> {
        self.release = Prerelease::new(label).map_err(|e| Error::Label {
            label: label.into(),
            reason: e.to_string(),
        })?;
        Ok(self)
    }

    /// Returns a copy of this version carrying the given build metadata.
    ///
    /// # Errors
    ///
    /// Fails when the metadata is not a valid dot-separated list of alphanumeric identifiers.
    pub fn with_metadata(mut self, metadata: &str) -> Result<Self, Error> {
        self.metadata = BuildMetadata::new(metadata).map_err(|e| Error::Label {
            label: metadata.into(),
            reason: e.to_string(),
        })?;
        Ok(self)
    }

    /// Parses a version string, tolerating surrounding whitespace.
    ///
    /// # Errors
    ///
    /// See [`Error`] for the individual failure cases.
    pub fn parse(s: &str) -> Result<Self, Error> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::Empty);
        }

        let caps = VERSION_REGEX
            .captures(s)
            .ok_or_else(|| Error::Invalid(s.into()))?;

        let component = |name: &str| -> Result<u64, Error> {
            caps.name(name).map_or(Ok(0), |m| {
                m.as_str().parse().map_err(|_| Error::Overflow(s.into()))
            })
        };

        let mut version = Version::with_revision(
            component("major")?,
            component("minor")?,
            component("patch")?,
            component("revision")?,
        );

        if let Some(release) = caps.name("release") {
            version = version.with_release(release.as_str())?;
        }
        if let Some(metadata) = caps.name("metadata") {
            version = version.with_metadata(metadata.as_str())?;
        }

        Ok(version)
    }

    /// The major component.
    pub fn major(&self) -> u64 {
        self.major
    }

    /// The minor component.
    pub fn minor(&self) -> u64 {
        self.minor
    }

    /// The patch component.
    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// The fourth numeric component.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// The release label, empty for release versions.
    pub fn release(&self) -> &str {
        self.release.as_str()
    }

    /// The build metadata, empty when absent.
    pub fn metadata(&self) -> &str {
        self.metadata.as_str()
    }

    /// Whether this version carries a release label.
    pub fn is_prerelease(&self) -> bool {
        !self.release.is_empty()
    }

    /// Whether this version carries build metadata.
    pub fn has_metadata(&self) -> bool {
        !self.metadata.is_empty()
    }

    /// Whether every numeric component is zero and no label or metadata is present.
    pub fn is_empty(&self) -> bool {
        self.major == 0
            && self.minor == 0
            && self.patch == 0
            && self.revision == 0
            && self.release.is_empty()
            && self.metadata.is_empty()
    }

    /// The same version with the release label and metadata removed.
    #[must_use]
    pub fn release_version(&self) -> Self {
        Version::with_revision(self.major, self.minor, self.patch, self.revision)
    }

    fn numbers(&self) -> (u64, u64, u64, u64) {
        (self.major, self.minor, self.patch, self.revision)
    }
}

impl Default for Version {
    fn default() -> Self {
        Version::EMPTY
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.numbers() == other.numbers() && self.release == other.release
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.numbers().hash(state);
        self.release.hash(state);
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.numbers()
            .cmp(&other.numbers())
            .then_with(|| self.release.cmp(&other.release))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if self.revision > 0 {
            write!(f, ".{}", self.revision)?;
        }
        if !self.release.is_empty() {
            write!(f, "-{}", self.release)?;
        }
        if !self.metadata.is_empty() {
            write!(f, "+{}", self.metadata)?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

impl TryFrom<&str> for Version {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Version::parse(s)
    }
}

impl TryFrom<String> for Version {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Version::parse(&s)
    }
}

impl From<Version> for String {
    fn from(v: Version) -> Self {
        v.to_string()
    }
}

impl From<semver::Version> for Version {
    fn from(v: semver::Version) -> Self {
        Version {
            major: v.major,
            minor: v.minor,
            patch: v.patch,
            revision: 0,
            release: v.pre,
            metadata: v.build,
        }
    }
}

//================================================================================================
// Tests
//================================================================================================
