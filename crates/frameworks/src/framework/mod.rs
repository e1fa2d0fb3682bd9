//! # Framework Values
//!
//! A [`Framework`] is the normalized identity behind every framework string: an identifier, a
//! version and, depending on the era, either a legacy profile or an operating-system platform.
//!
//! Frameworks built on `.NETCoreApp` 5.0 or later are "net5-era". Those keep a platform
//! (`windows`, `android`, ...) and drop any profile; every other framework keeps its profile and
//! drops any platform. At most one of the two is ever meaningful.
#[cfg(test)]
mod tests;

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use nuversion::Version;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};

use crate::identifiers::{AGNOSTIC, ANY, NET_CORE_APP, PORTABLE, UNSUPPORTED};
use crate::{Error, NameProvider};

//================================================================================================
// Types
//================================================================================================

/// Discriminates the special frameworks from ordinary ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameworkKind {
    /// A concrete framework such as `net45`.
    Specific,
    /// Matches every framework.
    Any,
    /// Framework-independent content.
    Agnostic,
    /// A framework whose identity could not be determined.
    Unsupported,
}

/// A normalized target framework.
///
/// Equality compares the identifier, profile and platform case-insensitively along with both
/// versions. An [`FrameworkKind::Unsupported`] framework is never equal to anything, itself
/// included, so `Framework` implements [`PartialEq`] but not [`Eq`].
#[derive(Clone)]
pub struct Framework {
    identifier: String,
    version: Version,
    profile: String,
    platform: String,
    platform_version: Version,
    net5_era: bool,
    moniker: OnceLock<String>,
}

/// Case-normalized identity of a framework, suitable for sets and maps.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct FrameworkKey {
    identifier: String,
    version: Version,
    profile: String,
    platform: String,
    platform_version: Version,
}

//================================================================================================
// Impls
//================================================================================================

impl Framework {
    /// Creates a framework without profile or platform.
    pub fn new(identifier: impl Into<String>, version: Version) -> Self {
        Framework::build(
            identifier.into(),
            version,
            String::new(),
            String::new(),
            Version::EMPTY,
        )
    }

    /// Creates a framework carrying a legacy profile.
    ///
    /// The profile is discarded for net5-era frameworks.
    pub fn with_profile(
        identifier: impl Into<String>,
        version: Version,
        profile: impl Into<String>,
    ) -> Self {
        Framework::build(
            identifier.into(),
            version,
            profile.into(),
            String::new(),
            Version::EMPTY,
        )
    }

    /// Creates a framework targeting an operating-system platform.
    ///
    /// The platform is discarded unless the framework is net5-era.
    pub fn with_platform(
        identifier: impl Into<String>,
        version: Version,
        platform: impl Into<String>,
        platform_version: Version,
    ) -> Self {
        Framework::build(
            identifier.into(),
            version,
            String::new(),
            platform.into(),
            platform_version,
        )
    }

    fn build(
        identifier: String,
        version: Version,
        profile: String,
        platform: String,
        platform_version: Version,
    ) -> Self {
        let net5_era = identifier.eq_ignore_ascii_case(NET_CORE_APP) && version.major() >= 5;
        let (profile, platform, platform_version) = if net5_era {
            (String::new(), platform, platform_version)
        } else {
            (profile, String::new(), Version::EMPTY)
        };

        Framework {
            identifier,
            version,
            profile,
            platform,
            platform_version,
            net5_era,
            moniker: OnceLock::new(),
        }
    }

    /// The canonical identifier, e.g. `.NETFramework`.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// The framework version; [`Version::EMPTY`] when unspecified.
    pub fn version(&self) -> &Version {
        &self.version
    }

    /// The legacy profile, empty when absent.
    pub fn profile(&self) -> &str {
        &self.profile
    }

    /// The operating-system platform of a net5-era framework, empty when absent.
    pub fn platform(&self) -> &str {
        &self.platform
    }

    /// The platform version; [`Version::EMPTY`] when unspecified.
    pub fn platform_version(&self) -> &Version {
        &self.platform_version
    }

    /// Whether this is `.NETCoreApp` 5.0 or later.
    pub fn is_net5_era(&self) -> bool {
        self.net5_era
    }

    /// Whether a profile is present.
    pub fn has_profile(&self) -> bool {
        !self.profile.is_empty()
    }

    /// Whether a platform is present.
    pub fn has_platform(&self) -> bool {
        !self.platform.is_empty()
    }

    /// Whether this is a portable class library framework (`.NETPortable` before 5.0).
    pub fn is_pcl(&self) -> bool {
        self.identifier.eq_ignore_ascii_case(PORTABLE) && self.version.major() < 5
    }

    /// Which kind of framework this is.
    pub fn kind(&self) -> FrameworkKind {
        let id = self.identifier.as_str();
        if id.eq_ignore_ascii_case(ANY) {
            FrameworkKind::Any
        } else if id.eq_ignore_ascii_case(AGNOSTIC) {
            FrameworkKind::Agnostic
        } else if id.eq_ignore_ascii_case(UNSUPPORTED) {
            FrameworkKind::Unsupported
        } else {
            FrameworkKind::Specific
        }
    }

    /// Whether this is neither `any`, `agnostic` nor `unsupported`.
    pub fn is_specific(&self) -> bool {
        self.kind() == FrameworkKind::Specific
    }

    /// Whether this is the `any` framework.
    pub fn is_any(&self) -> bool {
        self.kind() == FrameworkKind::Any
    }

    /// Whether this is the `agnostic` framework.
    pub fn is_agnostic(&self) -> bool {
        self.kind() == FrameworkKind::Agnostic
    }

    /// Whether this is the `unsupported` framework.
    pub fn is_unsupported(&self) -> bool {
        self.kind() == FrameworkKind::Unsupported
    }

    /// The full moniker, e.g. `.NETFramework,Version=v4.5`, rendered with the shared provider.
    ///
    /// The rendering is computed on first use and cached.
    pub fn moniker(&self) -> &str {
        self.moniker
            .get_or_init(|| self.moniker_with(NameProvider::shared()))
    }

    /// The short folder name, e.g. `net45`, rendered with the shared provider.
    ///
    /// # Errors
    ///
    /// See [`Framework::short_folder_name_with`].
    pub fn short_folder_name(&self) -> Result<String, Error> {
        self.short_folder_name_with(NameProvider::shared())
    }

    pub(crate) fn key(&self) -> FrameworkKey {
        FrameworkKey {
            identifier: self.identifier.to_ascii_lowercase(),
            version: self.version.clone(),
            profile: self.profile.to_ascii_lowercase(),
            platform: self.platform.to_ascii_lowercase(),
            platform_version: self.platform_version.clone(),
        }
    }

    /// Whether identifier and profile match, ignoring versions.
    pub(crate) fn same_name(&self, other: &Framework) -> bool {
        self.identifier.eq_ignore_ascii_case(&other.identifier)
            && self.profile.eq_ignore_ascii_case(&other.profile)
    }
}

impl PartialEq for Framework {
    fn eq(&self, other: &Self) -> bool {
        !self.is_unsupported()
            && self.version == other.version
            && self.platform_version == other.platform_version
            && self.identifier.eq_ignore_ascii_case(&other.identifier)
            && self.profile.eq_ignore_ascii_case(&other.profile)
            && self.platform.eq_ignore_ascii_case(&other.platform)
    }
}

impl fmt::Debug for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Framework")
            .field("identifier", &self.identifier)
            .field("version", &self.version)
            .field("profile", &self.profile)
            .field("platform", &self.platform)
            .field("platform_version", &self.platform_version)
            .finish()
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.moniker())
    }
}

impl FromStr for Framework {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse(s)
    }
}

impl TryFrom<&str> for Framework {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        crate::parse(s)
    }
}

impl Serialize for Framework {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let name = self.short_folder_name().map_err(ser::Error::custom)?;
        serializer.serialize_str(&name)
    }
}

impl<'de> Deserialize<'de> for Framework {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        crate::parse(&token).map_err(de::Error::custom)
    }
}
