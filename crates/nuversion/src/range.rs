//! Version ranges in NuGet interval notation, including floating ranges.
//!
//! Accepted forms:
//!
//! | input            | meaning                                  |
//! |------------------|------------------------------------------|
//! | `1.0`            | `1.0 <= v`                               |
//! | `[1.0]`          | `v == 1.0`                               |
//! | `[1.0,2.0)`      | `1.0 <= v < 2.0`                         |
//! | `(,2.0]`         | `v <= 2.0`                               |
//! | `(1.0,)`         | `1.0 < v`                                |
//! | `*`              | highest stable version                   |
//! | `1.*`, `1.2.*`   | highest stable version with that prefix  |
//! | `1.0.0-beta*`    | highest `1.0.0` prerelease labelled `beta…` |
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Error, Version};

/// Which part of a version a floating range lets vary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FloatBehavior {
    /// Only the release label floats, e.g. `1.0.0-beta*`.
    Prerelease,
    /// The fourth component floats, e.g. `1.0.0.*`.
    Revision,
    /// The patch component floats, e.g. `1.0.*`.
    Patch,
    /// The minor component floats, e.g. `1.*`.
    Minor,
    /// Everything floats: `*`.
    Major,
}

/// The floating part of a [`VersionRange`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FloatRange {
    behavior: FloatBehavior,
    min_version: Version,
    release_prefix: String,
}

/// A set of versions delimited by optional lower and upper bounds.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VersionRange {
    min: Option<Version>,
    min_inclusive: bool,
    max: Option<Version>,
    max_inclusive: bool,
    float: Option<FloatRange>,
}

impl FloatRange {
    /// What floats.
    pub fn behavior(&self) -> FloatBehavior {
        self.behavior
    }

    /// The fixed components, zero-padded.
    pub fn min_version(&self) -> &Version {
        &self.min_version
    }

    /// The fixed start of the release label for prerelease floats.
    pub fn release_prefix(&self) -> &str {
        &self.release_prefix
    }

    /// Whether `version` has the shape this float asks for.
    pub fn matches(&self, version: &Version) -> bool {
        let min = &self.min_version;
        match self.behavior {
            FloatBehavior::Prerelease => {
                version.numbers() == min.numbers()
                    && version
                        .release()
                        .to_ascii_lowercase()
                        .starts_with(&self.release_prefix.to_ascii_lowercase())
            },
            _ if version.is_prerelease() => false,
            FloatBehavior::Major => true,
            FloatBehavior::Minor => version.major() == min.major(),
            FloatBehavior::Patch => {
                (version.major(), version.minor()) == (min.major(), min.minor())
            },
            FloatBehavior::Revision => {
                (version.major(), version.minor(), version.patch())
                    == (min.major(), min.minor(), min.patch())
            },
        }
    }

    fn parse(s: &str) -> Result<Self, Error> {
        let invalid = || Error::InvalidRange(s.into());

        if s == "*" {
            return Ok(FloatRange {
                behavior: FloatBehavior::Major,
                min_version: Version::EMPTY,
                release_prefix: String::new(),
            });
        }

        if let Some((numbers, label)) = s.split_once('-') {
            let prefix = label.strip_suffix('*').ok_or_else(invalid)?;
            if prefix.contains('*') || numbers.contains('*') {
                return Err(invalid());
            }
            let base = Version::parse(numbers).map_err(|_| invalid())?;
            // the lower bound is the lowest label that still carries the prefix
            let lowest = match prefix.trim_end_matches('.') {
                "" => "0",
                trimmed => trimmed,
            };
            let min_version = base.with_release(lowest).map_err(|_| invalid())?;
            return Ok(FloatRange {
                behavior: FloatBehavior::Prerelease,
                min_version,
                release_prefix: prefix.into(),
            });
        }

        let numbers = s.strip_suffix(".*").ok_or_else(invalid)?;
        let behavior = match numbers.split('.').count() {
            1 => FloatBehavior::Minor,
            2 => FloatBehavior::Patch,
            3 => FloatBehavior::Revision,
            _ => return Err(invalid()),
        };
        if numbers.contains('*') {
            return Err(invalid());
        }
        let min_version = Version::parse(numbers).map_err(|_| invalid())?;
        if min_version.is_prerelease() || min_version.has_metadata() {
            return Err(invalid());
        }

        Ok(FloatRange {
            behavior,
            min_version,
            release_prefix: String::new(),
        })
    }
}

impl fmt::Display for FloatRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = &self.min_version;
        match self.behavior {
            FloatBehavior::Major => f.write_str("*"),
            FloatBehavior::Minor => write!(f, "{}.*", v.major()),
            FloatBehavior::Patch => write!(f, "{}.{}.*", v.major(), v.minor()),
            FloatBehavior::Revision => {
                write!(f, "{}.{}.{}.*", v.major(), v.minor(), v.patch())
            },
            FloatBehavior::Prerelease => {
                write!(
                    f,
                    "{}-{}*",
                    v.release_version(),
                    self.release_prefix
                )
            },
        }
    }
}

impl VersionRange {
    /// The range containing every version.
    pub fn all() -> Self {
        VersionRange {
            min: None,
            min_inclusive: false,
            max: None,
            max_inclusive: false,
            float: None,
        }
    }

    /// `version <= v`
    pub fn at_least(version: Version) -> Self {
        VersionRange {
            min: Some(version),
            min_inclusive: true,
            ..VersionRange::all()
        }
    }

    /// `v == version`
    pub fn exact(version: Version) -> Self {
        VersionRange {
            min: Some(version.clone()),
            min_inclusive: true,
            max: Some(version),
            max_inclusive: true,
            float: None,
        }
    }

    /// Builds a range from explicit bounds.
    ///
    /// # Errors
    ///
    /// Fails when the bounds describe an empty set.
    pub fn between(
        min: Option<Version>,
        min_inclusive: bool,
        max: Option<Version>,
        max_inclusive: bool,
    ) -> Result<Self, Error> {
        if let (Some(lo), Some(hi)) = (&min, &max) {
            let empty = lo > hi || (lo == hi && !(min_inclusive && max_inclusive));
            if empty {
                return Err(Error::InvalidRange(format!(
                    "{}{lo}, {hi}{}",
                    if min_inclusive { '[' } else { '(' },
                    if max_inclusive { ']' } else { ')' },
                )));
            }
        }
        Ok(VersionRange {
            min_inclusive: min_inclusive && min.is_some(),
            max_inclusive: max_inclusive && max.is_some(),
            min,
            max,
            float: None,
        })
    }

    /// Parses a range in interval, floating or bare-version notation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] for anything that is not one of the accepted forms.
    pub fn parse(s: &str) -> Result<Self, Error> {
        let s = s.trim();
        let invalid = || Error::InvalidRange(s.into());

        if s.is_empty() {
            return Err(invalid());
        }

        let open = s.chars().next();
        if matches!(open, Some('[' | '(')) {
            let min_inclusive = open == Some('[');
            let max_inclusive = match s.chars().last() {
                Some(']') => true,
                Some(')') => false,
                _ => return Err(invalid()),
            };
            let inner = s
                .get(1..s.len() - 1)
                .ok_or_else(invalid)?
                .trim();

            let Some((lo, hi)) = inner.split_once(',') else {
                // a single bracketed version only makes sense as `[x]`
                if !(min_inclusive && max_inclusive) {
                    return Err(invalid());
                }
                return Version::parse(inner)
                    .map(VersionRange::exact)
                    .map_err(|_| invalid());
            };

            let bound = |part: &str| -> Result<Option<Version>, Error> {
                match part.trim() {
                    "" => Ok(None),
                    p => Version::parse(p).map(Some).map_err(|_| invalid()),
                }
            };
            let (min, max) = (bound(lo)?, bound(hi)?);
            if min.is_none() && max.is_none() {
                return Err(invalid());
            }
            return VersionRange::between(min, min_inclusive, max, max_inclusive)
                .map_err(|_| invalid());
        }

        if s.contains('*') {
            let float = FloatRange::parse(s)?;
            return Ok(VersionRange {
                min: Some(float.min_version.clone()),
                min_inclusive: true,
                max: None,
                max_inclusive: false,
                float: Some(float),
            });
        }

        Version::parse(s)
            .map(VersionRange::at_least)
            .map_err(|_| invalid())
    }

    /// The lower bound, if any.
    pub fn min(&self) -> Option<&Version> {
        self.min.as_ref()
    }

    /// The upper bound, if any.
    pub fn max(&self) -> Option<&Version> {
        self.max.as_ref()
    }

    /// Whether the lower bound is part of the range.
    pub fn is_min_inclusive(&self) -> bool {
        self.min_inclusive
    }

    /// Whether the upper bound is part of the range.
    pub fn is_max_inclusive(&self) -> bool {
        self.max_inclusive
    }

    /// The floating part, if the range floats.
    pub fn float(&self) -> Option<&FloatRange> {
        self.float.as_ref()
    }

    /// Whether the range floats.
    pub fn is_floating(&self) -> bool {
        self.float.is_some()
    }

    /// Whether `version` lies within the bounds.
    pub fn satisfies(&self, version: &Version) -> bool {
        let above = match &self.min {
            None => true,
            Some(min) if self.min_inclusive => version >= min,
            Some(min) => version > min,
        };
        let below = match &self.max {
            None => true,
            Some(max) if self.max_inclusive => version <= max,
            Some(max) => version < max,
        };
        above && below
    }

    /// Picks the version a package reference with this range resolves to.
    ///
    /// Floating ranges pick the highest candidate matching the float; other
    /// ranges pick the lowest candidate within bounds.
    pub fn find_best_match<'a, I>(&self, versions: I) -> Option<&'a Version>
    where
        I: IntoIterator<Item = &'a Version>,
    {
        let candidates = versions.into_iter().filter(|v| self.satisfies(v));
        match &self.float {
            Some(float) => candidates.filter(|v| float.matches(v)).max(),
            None => candidates.min(),
        }
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(float) = &self.float {
            return write!(f, "[{float}, )");
        }
        if let (Some(lo), Some(hi), true, true) =
            (&self.min, &self.max, self.min_inclusive, self.max_inclusive)
        {
            if lo == hi {
                return write!(f, "[{lo}]");
            }
        }
        f.write_str(if self.min_inclusive { "[" } else { "(" })?;
        if let Some(lo) = &self.min {
            write!(f, "{lo}")?;
        }
        f.write_str(", ")?;
        if let Some(hi) = &self.max {
            write!(f, "{hi}")?;
        }
        f.write_str(if self.max_inclusive { "]" } else { ")" })
    }
}

impl FromStr for VersionRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VersionRange::parse(s)
    }
}

impl TryFrom<String> for VersionRange {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        VersionRange::parse(&s)
    }
}

impl From<VersionRange> for String {
    fn from(r: VersionRange) -> Self {
        r.to_string()
    }
}
