//! Tests for framework parsing and its round trip through the formatter.
use super::*;
use crate::common::{COMMON_TOKENS, NET4, NET45, NET80, NETSTANDARD20};
use crate::identifiers::{SILVERLIGHT, WINDOWS};

fn short(token: &str) -> Result<String, Error> {
    parse(token)?.short_folder_name()
}

#[test]
fn short_folder_names() -> anyhow::Result<()> {
    let net8 = parse("net8.0")?;
    assert_eq!(net8.identifier(), NET_CORE_APP);
    assert_eq!(net8.version(), &Version::new(8, 0, 0));

    assert_eq!(parse("netstandard2.0")?, *NETSTANDARD20);
    assert_eq!(parse("net451")?.version(), &Version::new(4, 5, 1));
    assert_eq!(parse("win81")?.identifier(), WINDOWS);
    assert_eq!(parse("  net45  ")?, *NET45);
    Ok(())
}

#[test]
fn case_insensitive() -> anyhow::Result<()> {
    assert_eq!(parse("NET8.0")?, parse("net8.0")?);
    assert_eq!(parse("NetStandard2.0")?, *NETSTANDARD20);
    assert_eq!(parse("NET40-CLIENT")?.profile(), "Client");
    Ok(())
}

#[test]
fn special_tokens() -> anyhow::Result<()> {
    for token in ["any", "Any", "ANY"] {
        assert!(parse(token)?.is_any());
    }
    assert!(parse("Agnostic")?.is_agnostic());

    let a = parse("unsupported")?;
    let b = parse("UNSUPPORTED")?;
    assert!(a.is_unsupported());
    assert_ne!(a, b);
    Ok(())
}

#[test]
fn deprecated_shortcuts() -> anyhow::Result<()> {
    assert_eq!(parse("45")?, parse("net45")?);
    assert_eq!(parse("4.5")?, *NET45);
    assert_eq!(parse("40")?, *NET4);
    assert_eq!(parse("3.5")?, parse("net35")?);
    assert_eq!(parse("20")?, parse("net20")?);
    Ok(())
}

#[test]
fn common_tokens_agree_with_the_general_parser() -> anyhow::Result<()> {
    let provider = NameProvider::shared();
    for token in COMMON_TOKENS {
        let fast = common_framework(token).map(Clone::clone);
        let general = parse_folder_name(token, provider)?;
        assert_eq!(fast.as_ref(), Some(&general), "{token}");
    }
    Ok(())
}

#[test]
fn net5_era_platforms() -> anyhow::Result<()> {
    let fw = parse("net8.0-windows10.0.19041")?;
    assert!(fw.is_net5_era());
    assert_eq!(fw.platform(), "windows");
    assert_eq!(fw.platform_version(), &Version::new(10, 0, 19041));
    assert!(!fw.has_profile());

    let android = parse("net6.0-android31")?;
    assert_eq!(android.platform_version(), &Version::new(31, 0, 0));

    let bare = parse("net7.0-ios")?;
    assert_eq!(bare.platform(), "ios");
    assert!(bare.platform_version().is_empty());
    Ok(())
}

#[test]
fn net_five_and_later_is_core() -> anyhow::Result<()> {
    assert_eq!(parse("net5.0")?.identifier(), NET_CORE_APP);
    assert_eq!(parse("net50")?.identifier(), NET_CORE_APP);
    assert_eq!(parse("net48")?.identifier(), NET);
    Ok(())
}

#[test]
fn profiles() -> anyhow::Result<()> {
    assert_eq!(parse("net40-client")?.profile(), "Client");
    assert_eq!(parse("net35-cf")?.profile(), "CompactFramework");
    assert_eq!(parse("net45-full")?, *NET45);
    assert_eq!(parse("sl4-wp71")?.profile(), "WindowsPhone71");
    assert_eq!(parse("sl4-wp71")?.identifier(), SILVERLIGHT);
    // unmapped profiles are kept as written
    assert_eq!(parse("netcoreapp3.1-custom")?.profile(), "custom");
    Ok(())
}

#[test]
fn portable_profiles() -> anyhow::Result<()> {
    assert_eq!(parse("portable-net45+win8")?.profile(), "Profile7");
    assert_eq!(parse("portable-Profile259")?.profile(), "Profile259");
    assert_eq!(parse("portable-profile5")?.profile(), "Profile5");
    assert_eq!(
        parse("portable-net45+win8+monoandroid10")?.profile(),
        "Profile7"
    );
    // no profile matches, so the list is kept as written
    assert_eq!(parse("portable-net45+sl3")?.profile(), "net45+sl3");
    Ok(())
}

#[test]
fn monikers() -> anyhow::Result<()> {
    assert_eq!(parse(".NETFramework,Version=v4.5")?, *NET45);
    assert_eq!(parse(".NETCoreApp, Version=8.0")?, *NET80);

    let client = parse(".NETFramework,Version=v4.0,Profile=Client")?;
    assert_eq!(client.profile(), "Client");
    assert_eq!(client.short_folder_name()?, "net40-client");

    let synonym = parse("NETFramework,Version=v4.5")?;
    assert_eq!(synonym.identifier(), NET);

    let unknown = parse("Made.Up,Version=v1.0")?;
    assert_eq!(unknown.identifier(), "Made.Up");

    // only synonyms are resolved, short names stay as written
    assert_eq!(parse("net,Version=v4.5")?.identifier(), "net");
    Ok(())
}

#[test]
fn signed_profile_numbers_are_not_profiles() -> anyhow::Result<()> {
    let fw = parse(".NETPortable,Version=v0.0,Profile=Profile+7")?;
    assert_eq!(fw.profile(), "Profile+7");
    assert!(matches!(
        fw.short_folder_name(),
        Err(Error::UnknownIdentifier { .. })
    ));
    Ok(())
}

#[test]
fn moniker_errors() {
    assert_eq!(
        parse(".NETFramework,Profile=Client"),
        Err(Error::MalformedToken(".NETFramework,Profile=Client".into()))
    );
    assert_eq!(
        parse(".NETFramework,Version=vx"),
        Err(Error::InvalidVersionFragment("vx".into()))
    );
    assert_eq!(
        parse(".NETFramework,Version=v4.5,Color=Blue"),
        Err(Error::MalformedToken(".NETFramework,Version=v4.5,Color=Blue".into()))
    );
    assert_eq!(
        parse(",Version=v4.5"),
        Err(Error::MalformedToken(",Version=v4.5".into()))
    );
}

#[test]
fn token_errors() {
    assert_eq!(parse("net45-"), Err(Error::MalformedToken("net45-".into())));
    assert_eq!(parse("451"), Err(Error::MalformedToken("451".into())));
    assert_eq!(parse(""), Err(Error::MalformedToken("".into())));
    assert_eq!(parse("net45x"), Err(Error::MalformedToken("net45x".into())));
    assert_eq!(
        parse("net45-cl!ent"),
        Err(Error::InvalidProfileCharacters("cl!ent".into()))
    );
    assert_eq!(
        parse("foo45"),
        Err(Error::UnknownIdentifier {
            identifier: "foo".into(),
            token: "foo45".into()
        })
    );
    assert_eq!(
        parse("net4.5."),
        Err(Error::InvalidVersionFragment("4.5.".into()))
    );
    assert_eq!(
        parse("portable-Profile+7"),
        Err(Error::UnknownIdentifier {
            identifier: "Profile".into(),
            token: "Profile".into()
        })
    );
    assert_eq!(
        parse("net8.0-win-x64"),
        Err(Error::MalformedToken("net8.0-win-x64".into()))
    );
}

#[test]
fn round_trip() -> anyhow::Result<()> {
    for token in [
        "net8.0",
        "net10.0",
        "net45",
        "net403",
        "net4001",
        "net40-client",
        "netstandard1.6",
        "netcoreapp3.1",
        "net8.0-windows10.0.19041",
        "net6.0-android31.0",
        "win8",
        "win10.0",
        "wp81",
        "sl5",
        "uap10.0",
        "tizen4.0",
        "monoandroid10",
        "xamarinios10",
        "netnano1.0",
        "dotnet",
        "native",
        "any",
        "portable-net45+win8",
    ] {
        let fw = parse(token)?;
        let rendered = fw.short_folder_name()?;
        assert_eq!(rendered, token);
        assert_eq!(parse(&rendered)?, fw, "{token}");
    }
    Ok(())
}

#[test]
fn rendering_normalizes() -> anyhow::Result<()> {
    insta::assert_snapshot!(short("NET4.5")?, @"net45");
    insta::assert_snapshot!(short("netcoreapp5.0")?, @"net5.0");
    insta::assert_snapshot!(short("win8.0")?, @"win8");
    insta::assert_snapshot!(short("netstandard2")?, @"netstandard2.0");
    insta::assert_snapshot!(short("dotnet5.0")?, @"dotnet");
    insta::assert_snapshot!(short("sl4-windowsphone71")?, @"sl4-wp71");
    insta::assert_snapshot!(short("portable-win8+net45+wpa81")?, @"portable-net45+win8+wpa81");
    insta::assert_snapshot!(short("portable-Profile259")?, @"portable-net45+win8+wp8+wpa81");
    insta::assert_snapshot!(short("Made.Up,Version=v1.0")?, @"madeup10");
    Ok(())
}

#[test]
fn rendering_errors() {
    let missing = Framework::with_profile(PORTABLE, Version::EMPTY, "Profile9999");
    assert_eq!(
        missing.short_folder_name(),
        Err(Error::UnresolvablePortableProfile {
            profile: "Profile9999".into(),
            moniker: ".NETPortable,Version=v0.0,Profile=Profile9999".into(),
        })
    );

    let empty = Framework::new(PORTABLE, Version::EMPTY);
    assert!(matches!(
        empty.short_folder_name(),
        Err(Error::UnresolvablePortableProfile { .. })
    ));

    let unnamed = Framework::new("...", Version::new(1, 0, 0));
    assert_eq!(
        unnamed.short_folder_name(),
        Err(Error::NoShortNameMapping("...".into()))
    );
}

#[test]
fn moniker_rendering() -> anyhow::Result<()> {
    insta::assert_snapshot!(parse("net45")?.moniker(), @".NETFramework,Version=v4.5");
    insta::assert_snapshot!(parse("net452")?.moniker(), @".NETFramework,Version=v4.5.2");
    insta::assert_snapshot!(parse("net4001")?.moniker(), @".NETFramework,Version=v4.0.0.1");
    insta::assert_snapshot!(parse("dotnet")?.moniker(), @".NETPlatform,Version=v5.0");
    insta::assert_snapshot!(parse("any")?.moniker(), @"Any,Version=v0.0");
    insta::assert_snapshot!(
        parse("portable-net45+win8")?.moniker(),
        @".NETPortable,Version=v0.0,Profile=Profile7"
    );
    insta::assert_snapshot!(
        parse("net40-client")?.moniker(),
        @".NETFramework,Version=v4.0,Profile=Client"
    );
    Ok(())
}

#[test]
fn platform_monikers() -> anyhow::Result<()> {
    let fw = parse("net8.0-windows10.0.19041")?;
    assert_eq!(
        fw.platform_moniker().as_deref(),
        Some("windows,Version=10.0.19041")
    );
    assert_eq!(parse("net45")?.platform_moniker(), None);
    Ok(())
}

#[test]
fn explicit_provider() -> anyhow::Result<()> {
    let provider = NameProvider::default();
    let fw = parse_with("netstandard2.1", &provider)?;
    assert_eq!(fw.short_folder_name_with(&provider)?, "netstandard2.1");
    assert_eq!(fw.moniker_with(&provider), ".NETStandard,Version=v2.1");
    Ok(())
}
