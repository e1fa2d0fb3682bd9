//! # Framework Parsing
//!
//! Two encodings are accepted:
//!
//! - **short folder names** as found in packages: `net45`, `netstandard2.0`, `net40-client`,
//!   `net8.0-windows10.0.19041`, `portable-net45+win8`;
//! - **full monikers** as found in project files: `.NETFramework,Version=v4.5,Profile=Client`.
//!
//! Any token containing a comma is read as a moniker. Short names are tried, in order, as a
//! special token (`any`), a deprecated bare version (`45`), a common framework, and finally
//! through the general `identifier[version][-suffix]` grammar.
#[cfg(test)]
mod tests;

use lazy_regex::{Lazy, Regex};
use nom::IResult;
use nom::bytes::complete::{take_while, take_while1};
use nom::character::complete::{alpha1, char};
use nom::combinator::{all_consuming, opt, rest};
use nom::sequence::{preceded, tuple};
use nuversion::Version;

use crate::common::{common_framework, deprecated_framework, special_framework};
use crate::identifiers::{NET, NET_CORE_APP, PORTABLE, PROFILE_PREFIX};
use crate::provider::profile_number;
use crate::{Error, Framework, NameProvider};

//================================================================================================
// Statics
//================================================================================================

static SUFFIX_REGEX: Lazy<Regex> = lazy_regex::lazy_regex!(r"^[A-Za-z0-9.+\-]+$");

//================================================================================================
// Types
//================================================================================================

/// A parsed `Identifier,Version=vX.Y[,Profile=Z]` moniker.
#[derive(Debug, PartialEq, Eq)]
struct FrameworkName<'a> {
    identifier: &'a str,
    version: Version,
    profile: &'a str,
}

//================================================================================================
// Impls
//================================================================================================

impl<'a> FrameworkName<'a> {
    fn parse(moniker: &'a str) -> Result<Self, Error> {
        let malformed = || Error::MalformedToken(moniker.into());

        let mut parts = moniker.split(',').map(str::trim);
        let identifier = parts.next().filter(|id| !id.is_empty()).ok_or_else(malformed)?;

        let mut version = None;
        let mut profile = "";
        for part in parts {
            let (key, value) = part.split_once('=').ok_or_else(malformed)?;
            match key.trim().to_ascii_lowercase().as_str() {
                "version" => {
                    let value = value.trim();
                    let digits = value
                        .strip_prefix(['v', 'V'])
                        .unwrap_or(value);
                    let parsed = Version::parse(digits)
                        .map_err(|_| Error::InvalidVersionFragment(value.into()))?;
                    version = Some(parsed);
                },
                "profile" => profile = value.trim(),
                _ => return Err(malformed()),
            }
        }

        Ok(FrameworkName {
            identifier,
            version: version.ok_or_else(malformed)?,
            profile,
        })
    }
}

//================================================================================================
// Functions
//================================================================================================

/// Parses a short folder name or a full moniker with the shared [`NameProvider`].
///
/// # Errors
///
/// Any [`Error`] describing why the token is not a framework.
pub fn parse(token: &str) -> Result<Framework, Error> {
    parse_with(token, NameProvider::shared())
}

/// Parses a short folder name or a full moniker with an explicit [`NameProvider`].
///
/// # Errors
///
/// Any [`Error`] describing why the token is not a framework.
pub fn parse_with(token: &str, provider: &NameProvider) -> Result<Framework, Error> {
    let token = token.trim();
    tracing::trace!(token, "parsing framework");

    if token.contains(',') {
        return parse_moniker(token, provider);
    }

    if let Some(fw) = special_framework(token)
        .or_else(|| deprecated_framework(token))
        .or_else(|| common_framework(&token.to_ascii_lowercase()))
    {
        return Ok(fw.clone());
    }

    parse_folder_name(token, provider)
}

fn parse_moniker(token: &str, provider: &NameProvider) -> Result<Framework, Error> {
    let name = FrameworkName::parse(token)?;
    // monikers carry full identifiers; short names such as `net` are kept as written
    let identifier = provider
        .identifier_synonym(name.identifier)
        .unwrap_or(name.identifier);

    Ok(Framework::with_profile(
        identifier,
        name.version,
        name.profile,
    ))
}

/// Splits `identifier[version][-suffix]`.
fn split_folder_name(token: &str) -> IResult<&str, (&str, &str, Option<&str>)> {
    all_consuming(tuple((
        take_while1(|c: char| c.is_ascii_alphabetic() || c == '.'),
        take_while(|c: char| c.is_ascii_digit() || c == '.'),
        opt(preceded(char('-'), rest)),
    )))(token)
}

/// Splits a net5-era platform suffix such as `windows10.0`.
fn split_platform(suffix: &str) -> IResult<&str, (&str, &str)> {
    all_consuming(tuple((
        alpha1,
        take_while(|c: char| c.is_ascii_digit() || c == '.'),
    )))(suffix)
}

fn parse_folder_name(token: &str, provider: &NameProvider) -> Result<Framework, Error> {
    let (_, (raw_identifier, raw_version, suffix)) =
        split_folder_name(token).map_err(|_| Error::MalformedToken(token.into()))?;

    let suffix = match suffix {
        Some("") => return Err(Error::MalformedToken(token.into())),
        Some(s) if !SUFFIX_REGEX.is_match(s) => {
            return Err(Error::InvalidProfileCharacters(s.into()));
        },
        other => other,
    };

    let mut identifier =
        provider
            .identifier(raw_identifier)
            .ok_or_else(|| Error::UnknownIdentifier {
                identifier: raw_identifier.into(),
                token: token.into(),
            })?;

    let version = if raw_version.is_empty() {
        Version::EMPTY
    } else {
        provider.version(raw_version)?
    };

    // `net5.0` and later name .NET (Core), not the .NET Framework
    if identifier.eq_ignore_ascii_case(NET) && version.major() >= 5 {
        identifier = NET_CORE_APP;
    }

    let Some(suffix) = suffix else {
        return Ok(Framework::new(identifier, version));
    };

    if identifier.eq_ignore_ascii_case(NET_CORE_APP) && version.major() >= 5 {
        let (_, (platform, raw_platform_version)) =
            split_platform(suffix).map_err(|_| Error::MalformedToken(token.into()))?;
        let platform_version = if raw_platform_version.is_empty() {
            Version::EMPTY
        } else {
            provider.platform_version(raw_platform_version)?
        };
        return Ok(Framework::with_platform(
            identifier,
            version,
            platform,
            platform_version,
        ));
    }

    let profile = if identifier.eq_ignore_ascii_case(PORTABLE) {
        portable_profile(suffix, provider)?
    } else {
        provider
            .profile(identifier, suffix)
            .unwrap_or(suffix)
            .to_owned()
    };

    Ok(Framework::with_profile(identifier, version, profile))
}

/// Normalizes a portable suffix to `ProfileN` where possible.
fn portable_profile(suffix: &str, provider: &NameProvider) -> Result<String, Error> {
    if let Some(number) = profile_number(suffix) {
        return Ok(format!("{PROFILE_PREFIX}{number}"));
    }

    let frameworks = provider.portable_frameworks(suffix)?;
    Ok(match provider.portable_profile(&frameworks) {
        Some(number) => format!("{PROFILE_PREFIX}{number}"),
        None => suffix.to_owned(),
    })
}
