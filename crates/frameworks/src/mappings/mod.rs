//! # Framework Mapping Tables
//!
//! The data the [`NameProvider`](crate::NameProvider) indexes. Every table is an ordered list:
//! when two entries share a key the earlier one wins, and portable profiles are matched in the
//! order they are declared.
//!
//! Custom tables implement [`FrameworkMappings`] or [`PortableFrameworkMappings`]. Each method
//! defaults to an empty table, so a source only needs to provide what it adds.
use std::sync::LazyLock;

use nuversion::Version;

pub use self::portable::DefaultPortableFrameworkMappings;
use crate::Framework;
use crate::common;
use crate::identifiers::*;

mod portable;

//================================================================================================
// Types
//================================================================================================

/// A profile rewrite scoped to the identifier that owns the profile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileMapping {
    /// The identifier the mapping applies to.
    pub identifier: String,
    /// The profile being mapped.
    pub from: String,
    /// The profile it maps to.
    pub to: String,
}

/// A source of framework naming and equivalence data.
pub trait FrameworkMappings: Send + Sync {
    /// Alternate spellings mapped to canonical identifiers.
    fn identifier_synonyms(&self) -> &[(String, String)] {
        &[]
    }

    /// Canonical identifiers paired with their short names.
    fn identifier_short_names(&self) -> &[(String, String)] {
        &[]
    }

    /// Short profile names (`from`) and the profiles they stand for (`to`).
    fn profile_short_names(&self) -> &[ProfileMapping] {
        &[]
    }

    /// Pairs of frameworks that are interchangeable.
    fn equivalent_frameworks(&self) -> &[(Framework, Framework)] {
        &[]
    }

    /// Pairs of profiles that are interchangeable for the same identifier.
    fn equivalent_profiles(&self) -> &[ProfileMapping] {
        &[]
    }

    /// Frameworks rewritten before rendering a short folder name.
    fn short_name_replacements(&self) -> &[(Framework, Framework)] {
        &[]
    }

    /// Frameworks rewritten before rendering a full moniker.
    fn full_name_replacements(&self) -> &[(Framework, Framework)] {
        &[]
    }

    /// Identifiers whose short names always carry dotted versions (`netstandard2.0`).
    fn decimal_point_frameworks(&self) -> &[String] {
        &[]
    }

    /// Identifiers whose short names drop a zero minor version (`win8`).
    fn single_digit_version_frameworks(&self) -> &[String] {
        &[]
    }
}

/// A source of portable class library profiles.
pub trait PortableFrameworkMappings: Send + Sync {
    /// Profile numbers with the frameworks each one requires, in match order.
    fn profile_frameworks(&self) -> &[(u32, Vec<Framework>)] {
        &[]
    }

    /// Profile numbers with the frameworks each one supports without requiring them.
    fn profile_optional_frameworks(&self) -> &[(u32, Vec<Framework>)] {
        &[]
    }
}

/// The framework mappings that ship with the crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultFrameworkMappings;

//================================================================================================
// Statics
//================================================================================================

static SYNONYMS: LazyLock<Vec<(String, String)>> = LazyLock::new(|| {
    owned(&[
        ("NETFramework", NET),
        (".NET", NET),
        ("NETCore", NET_CORE),
        ("NETPortable", PORTABLE),
        ("asp.net", ASP_NET),
        ("asp.netcore", ASP_NET_CORE),
        ("Xamarin.PlayStationThree", XAMARIN_PLAYSTATION_3),
        ("XamarinPlayStationThree", XAMARIN_PLAYSTATION_3),
        ("Xamarin.PlayStationFour", XAMARIN_PLAYSTATION_4),
        ("XamarinPlayStationFour", XAMARIN_PLAYSTATION_4),
        ("XamarinPlayStationVita", XAMARIN_PLAYSTATION_VITA),
    ])
});

static SHORT_NAMES: LazyLock<Vec<(String, String)>> = LazyLock::new(|| {
    owned(&[
        (NET_CORE_APP, "netcoreapp"),
        (NET_STANDARD_APP, "netstandardapp"),
        (NET_STANDARD, "netstandard"),
        (NET_PLATFORM, "dotnet"),
        (NET, "net"),
        (NET_MICRO, "netmf"),
        (SILVERLIGHT, "sl"),
        (PORTABLE, "portable"),
        (WINDOWS_PHONE, "wp"),
        (WINDOWS_PHONE_APP, "wpa"),
        (WINDOWS, "win"),
        (ASP_NET, "aspnet"),
        (ASP_NET_CORE, "aspnetcore"),
        (NATIVE, "native"),
        (MONO_ANDROID, "monoandroid"),
        (MONO_TOUCH, "monotouch"),
        (MONO_MAC, "monomac"),
        (XAMARIN_IOS, "xamarinios"),
        (XAMARIN_MAC, "xamarinmac"),
        (XAMARIN_PLAYSTATION_3, "xamarinpsthree"),
        (XAMARIN_PLAYSTATION_4, "xamarinpsfour"),
        (XAMARIN_PLAYSTATION_VITA, "xamarinpsvita"),
        (XAMARIN_WATCH_OS, "xamarinwatchos"),
        (XAMARIN_TV_OS, "xamarintvos"),
        (XAMARIN_XBOX_360, "xamarinxboxthreesixty"),
        (XAMARIN_XBOX_ONE, "xamarinxboxone"),
        (DNX, "dnx"),
        (DNX_CORE, "dnxcore"),
        (NET_CORE, "netcore"),
        (WIN_RT, "winrt"),
        (UAP, "uap"),
        (TIZEN, "tizen"),
        (NET_NANO, "netnano"),
    ])
});

static PROFILE_SHORT_NAMES: LazyLock<Vec<ProfileMapping>> = LazyLock::new(|| {
    profiles(&[
        (NET, "Client", "Client"),
        (NET, "CF", "CompactFramework"),
        (NET, "Full", ""),
        (SILVERLIGHT, "WP", "WindowsPhone"),
        (SILVERLIGHT, "WP71", "WindowsPhone71"),
    ])
});

static EQUIVALENT_FRAMEWORKS: LazyLock<Vec<(Framework, Framework)>> = LazyLock::new(|| {
    let sl = |major, minor, profile: &str| {
        Framework::with_profile(SILVERLIGHT, Version::new(major, minor, 0), profile)
    };
    let wp71 = Framework::new(WINDOWS_PHONE, Version::new(7, 1, 0));

    vec![
        (common::UAP.clone(), common::UAP10.clone()),
        // Windows 8 and its store frameworks
        (common::WIN.clone(), common::WIN8.clone()),
        (common::WIN8.clone(), common::NETCORE45.clone()),
        (common::NETCORE45.clone(), common::WINRT45.clone()),
        (common::NETCORE.clone(), common::NETCORE45.clone()),
        (common::WINRT.clone(), common::WINRT45.clone()),
        (common::WIN81.clone(), common::NETCORE451.clone()),
        // Windows Phone Silverlight
        (common::WP.clone(), common::WP7.clone()),
        (common::WP7.clone(), sl(3, 0, "WindowsPhone")),
        (wp71, sl(4, 0, "WindowsPhone71")),
        (common::WP8.clone(), sl(8, 0, "WindowsPhone")),
        (common::WP81.clone(), sl(8, 1, "WindowsPhone")),
        (common::WPA.clone(), common::WPA81.clone()),
        (common::TIZEN.clone(), common::TIZEN3.clone()),
        // ASP.NET
        (common::DNX.clone(), common::DNX45.clone()),
        (common::DNXCORE.clone(), common::DNXCORE50.clone()),
        (common::DNX45.clone(), common::ASPNET50.clone()),
        (common::DNXCORE50.clone(), common::ASPNETCORE50.clone()),
        (common::ASPNET.clone(), common::ASPNET50.clone()),
        (common::ASPNETCORE.clone(), common::ASPNETCORE50.clone()),
        (common::DOTNET.clone(), common::DOTNET50.clone()),
    ]
});

static EQUIVALENT_PROFILES: LazyLock<Vec<ProfileMapping>> = LazyLock::new(|| {
    profiles(&[
        (NET, "Client", ""),
        (NET, "Full", ""),
        (SILVERLIGHT, "WindowsPhone71", "WindowsPhone"),
        (WINDOWS_PHONE, "WindowsPhone71", "WindowsPhone"),
    ])
});

static SHORT_NAME_REPLACEMENTS: LazyLock<Vec<(Framework, Framework)>> =
    LazyLock::new(|| vec![(common::DOTNET50.clone(), common::DOTNET.clone())]);

static FULL_NAME_REPLACEMENTS: LazyLock<Vec<(Framework, Framework)>> =
    LazyLock::new(|| vec![(common::DOTNET.clone(), common::DOTNET50.clone())]);

static DECIMAL_POINT_FRAMEWORKS: LazyLock<Vec<String>> = LazyLock::new(|| {
    [
        NET_CORE_APP,
        NET_STANDARD,
        NET_STANDARD_APP,
        NET_PLATFORM,
        NET_NANO,
        TIZEN,
    ]
    .map(String::from)
    .to_vec()
});

static SINGLE_DIGIT_VERSION_FRAMEWORKS: LazyLock<Vec<String>> = LazyLock::new(|| {
    [WINDOWS, WINDOWS_PHONE, SILVERLIGHT]
        .map(String::from)
        .to_vec()
});

//================================================================================================
// Impls
//================================================================================================

impl FrameworkMappings for DefaultFrameworkMappings {
    fn identifier_synonyms(&self) -> &[(String, String)] {
        &SYNONYMS
    }

    fn identifier_short_names(&self) -> &[(String, String)] {
        &SHORT_NAMES
    }

    fn profile_short_names(&self) -> &[ProfileMapping] {
        &PROFILE_SHORT_NAMES
    }

    fn equivalent_frameworks(&self) -> &[(Framework, Framework)] {
        &EQUIVALENT_FRAMEWORKS
    }

    fn equivalent_profiles(&self) -> &[ProfileMapping] {
        &EQUIVALENT_PROFILES
    }

    fn short_name_replacements(&self) -> &[(Framework, Framework)] {
        &SHORT_NAME_REPLACEMENTS
    }

    fn full_name_replacements(&self) -> &[(Framework, Framework)] {
        &FULL_NAME_REPLACEMENTS
    }

    fn decimal_point_frameworks(&self) -> &[String] {
        &DECIMAL_POINT_FRAMEWORKS
    }

    fn single_digit_version_frameworks(&self) -> &[String] {
        &SINGLE_DIGIT_VERSION_FRAMEWORKS
    }
}

//================================================================================================
// Functions
//================================================================================================

fn owned(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|&(a, b)| (a.to_owned(), b.to_owned()))
        .collect()
}

fn profiles(entries: &[(&str, &str, &str)]) -> Vec<ProfileMapping> {
    entries
        .iter()
        .map(|&(identifier, from, to)| ProfileMapping {
            identifier: identifier.into(),
            from: from.into(),
            to: to.into(),
        })
        .collect()
}
