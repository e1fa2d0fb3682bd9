//! Conversion between framework version fragments and [`Version`] values.
//!
//! Short folder names encode versions either compactly (`451` for 4.5.1) or with dots
//! (`4.5.1`). Platform versions (`windows10.0`) always use dots.
use lazy_regex::{Lazy, Regex};
use nuversion::Version;

use crate::Error;

//================================================================================================
// Statics
//================================================================================================

static DOTTED: Lazy<Regex> = lazy_regex::lazy_regex!(r"^\d+(?:\.\d+){0,3}$");
static COMPACT: Lazy<Regex> = lazy_regex::lazy_regex!(r"^\d+$");

/// Digits a compact fragment contributes at most: one per version component.
const COMPACT_DIGITS: usize = 4;

//================================================================================================
// Functions
//================================================================================================

/// Parses a compact (`451`) or dotted (`4.5.1`) version fragment.
pub(crate) fn parse_fragment(fragment: &str) -> Result<Version, Error> {
    let invalid = || Error::InvalidVersionFragment(fragment.into());

    if fragment.contains('.') {
        return parse_dotted(fragment);
    }
    if !COMPACT.is_match(fragment) {
        return Err(invalid());
    }

    let mut digits: Vec<char> = fragment.chars().take(COMPACT_DIGITS).collect();
    while digits.len() < 2 {
        digits.push('0');
    }
    let dotted = digits
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(".");

    Version::parse(&dotted).map_err(|_| invalid())
}

/// Parses a platform version; a lone major version gets a zero minor.
pub(crate) fn parse_platform_fragment(fragment: &str) -> Result<Version, Error> {
    if fragment.contains('.') {
        parse_dotted(fragment)
    } else {
        parse_dotted(&format!("{fragment}.0"))
    }
}

fn parse_dotted(fragment: &str) -> Result<Version, Error> {
    if !DOTTED.is_match(fragment) {
        return Err(Error::InvalidVersionFragment(fragment.into()));
    }
    Version::parse(fragment).map_err(|_| Error::InvalidVersionFragment(fragment.into()))
}

/// Renders a version the way short folder names carry it.
///
/// Dots are used when `decimal` is set or a component exceeds a single digit; otherwise the
/// digits are concatenated. Trailing zero components past the minor are dropped, and
/// `single_digit` frameworks also drop a zero minor (`win8`, `sl4`).
pub(crate) fn render(version: &Version, decimal: bool, single_digit: bool) -> String {
    let mut parts = vec![
        version.major(),
        version.minor(),
        version.patch(),
        version.revision(),
    ];
    let dotted = decimal || parts.iter().any(|&p| p > 9);

    while parts.len() > 2 && parts.last() == Some(&0) {
        parts.pop();
    }

    if dotted {
        return join(&parts, ".");
    }
    if single_digit && parts.len() == 2 && parts[1] == 0 {
        parts.pop();
    }
    join(&parts, "")
}

/// Renders `major.minor[.patch[.revision]]`, the form used by monikers.
pub(crate) fn display(version: &Version) -> String {
    let mut out = format!("{}.{}", version.major(), version.minor());
    if version.patch() > 0 || version.revision() > 0 {
        out.push_str(&format!(".{}", version.patch()));
        if version.revision() > 0 {
            out.push_str(&format!(".{}", version.revision()));
        }
    }
    out
}

fn join(parts: &[u64], sep: &str) -> String {
    parts
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(sep)
}

//================================================================================================
// Tests
//================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_fragments_expand_per_digit() -> Result<(), Error> {
        assert_eq!(parse_fragment("451")?, Version::new(4, 5, 1));
        assert_eq!(parse_fragment("8")?, Version::new(8, 0, 0));
        assert_eq!(parse_fragment("45")?, Version::new(4, 5, 0));
        assert_eq!(parse_fragment("45123")?, Version::with_revision(4, 5, 1, 2));
        Ok(())
    }

    #[test]
    fn dotted_fragments() -> Result<(), Error> {
        assert_eq!(parse_fragment("10.0")?, Version::new(10, 0, 0));
        assert_eq!(parse_fragment("4.5.1")?, Version::new(4, 5, 1));
        assert_eq!(
            parse_fragment("4."),
            Err(Error::InvalidVersionFragment("4.".into()))
        );
        assert_eq!(
            parse_fragment("1.2.3.4.5"),
            Err(Error::InvalidVersionFragment("1.2.3.4.5".into()))
        );
        assert_eq!(parse_fragment(""), Err(Error::InvalidVersionFragment("".into())));
        Ok(())
    }

    #[test]
    fn platform_fragments_gain_a_minor() -> Result<(), Error> {
        assert_eq!(parse_platform_fragment("31")?, Version::new(31, 0, 0));
        assert_eq!(
            parse_platform_fragment("10.0.19041")?,
            Version::new(10, 0, 19041)
        );
        Ok(())
    }

    #[test]
    fn render_forms() {
        insta::assert_snapshot!(render(&Version::new(4, 5, 0), false, false), @"45");
        insta::assert_snapshot!(render(&Version::new(4, 0, 3), false, false), @"403");
        insta::assert_snapshot!(render(&Version::new(4, 0, 0), false, false), @"40");
        insta::assert_snapshot!(render(&Version::new(8, 0, 0), false, true), @"8");
        insta::assert_snapshot!(render(&Version::new(8, 1, 0), false, true), @"81");
        insta::assert_snapshot!(render(&Version::new(2, 0, 0), true, false), @"2.0");
        insta::assert_snapshot!(render(&Version::new(10, 0, 0), false, true), @"10.0");
        insta::assert_snapshot!(render(&Version::with_revision(4, 5, 0, 1), true, false), @"4.5.0.1");
    }

    #[test]
    fn display_omits_zero_patch() {
        assert_eq!(display(&Version::new(4, 5, 0)), "4.5");
        assert_eq!(display(&Version::new(4, 5, 2)), "4.5.2");
        assert_eq!(display(&Version::with_revision(4, 5, 0, 3)), "4.5.0.3");
    }
}
