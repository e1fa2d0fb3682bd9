//! Tests for name resolution, equivalence and portable profile inference.
use super::*;
use crate::common::*;
use crate::identifiers::{self, NET, SILVERLIGHT, WINDOWS};
use crate::mappings::ProfileMapping;

fn provider() -> &'static NameProvider {
    NameProvider::shared()
}

fn frameworks(tokens: &[&str]) -> Vec<Framework> {
    tokens
        .iter()
        .filter_map(|t| crate::parse(t).ok())
        .collect()
}

#[test]
fn identifiers_resolve_through_synonyms_and_short_names() {
    let p = provider();
    assert_eq!(p.identifier("net"), Some(NET));
    assert_eq!(p.identifier("NETFramework"), Some(NET));
    assert_eq!(p.identifier(".netframework"), Some(NET));
    assert_eq!(p.identifier("WIN"), Some(WINDOWS));
    assert_eq!(p.identifier("xamarin.playstationthree"), Some(identifiers::XAMARIN_PLAYSTATION_3));
    assert_eq!(p.identifier("nope"), None);
}

#[test]
fn short_identifiers() {
    let p = provider();
    assert_eq!(p.short_identifier(".NETStandard"), Some("netstandard"));
    assert_eq!(p.short_identifier("Xamarin.Xbox360"), Some("xamarinxboxthreesixty"));
    assert_eq!(p.short_identifier("Made.Up"), None);
}

#[test]
fn profiles_are_scoped_by_identifier() {
    let p = provider();
    assert_eq!(p.profile(NET, "client"), Some("Client"));
    assert_eq!(p.profile(NET, "CF"), Some("CompactFramework"));
    assert_eq!(p.profile(SILVERLIGHT, "wp"), Some("WindowsPhone"));
    assert_eq!(p.profile(SILVERLIGHT, "client"), None);
    assert_eq!(p.profile(NET, "wp"), None);
    assert_eq!(p.short_profile(SILVERLIGHT, "WindowsPhone71"), Some("WP71"));
}

#[test]
fn first_mapping_wins() {
    struct Override;
    impl FrameworkMappings for Override {
        fn profile_short_names(&self) -> &[ProfileMapping] {
            static MAPPINGS: LazyLock<Vec<ProfileMapping>> = LazyLock::new(|| {
                vec![ProfileMapping {
                    identifier: NET.into(),
                    from: "Client".into(),
                    to: "Kiosk".into(),
                }]
            });
            &MAPPINGS
        }
    }

    let p = NameProvider::new(
        &[&Override, &DefaultFrameworkMappings],
        &[&DefaultPortableFrameworkMappings],
    );
    assert_eq!(p.profile(NET, "client"), Some("Kiosk"));
    assert_eq!(p.profile(NET, "cf"), Some("CompactFramework"));
}

#[test]
fn version_fragments() -> anyhow::Result<()> {
    let p = provider();
    assert_eq!(p.version("451")?, Version::new(4, 5, 1));
    assert_eq!(p.version("8")?, Version::new(8, 0, 0));
    assert_eq!(p.platform_version("10")?, Version::new(10, 0, 0));
    assert!(p.version("").is_err());
    Ok(())
}

#[test]
fn version_strings() {
    let p = provider();
    insta::assert_snapshot!(p.version_string(NET, &Version::new(4, 5, 1)), @"451");
    insta::assert_snapshot!(p.version_string(WINDOWS, &Version::new(8, 0, 0)), @"8");
    insta::assert_snapshot!(p.version_string(".NETStandard", &Version::new(2, 0, 0)), @"2.0");
    insta::assert_snapshot!(p.version_string(".NETCoreApp", &Version::new(3, 1, 0)), @"3.1");
}

#[test]
fn equivalence_closure() {
    let mut names: Vec<String> = provider()
        .all_equivalent_frameworks(&WIN8)
        .iter()
        .map(|fw| fw.moniker().to_owned())
        .collect();
    names.sort();
    insta::assert_snapshot!(
        names.join(" | "),
        @".NETCore,Version=v0.0 | .NETCore,Version=v4.5 | WinRT,Version=v0.0 | WinRT,Version=v4.5 | Windows,Version=v0.0 | Windows,Version=v8.0"
    );
}

#[test]
fn equivalence_includes_profile_variants() {
    let client = Framework::with_profile(NET, Version::new(4, 0, 0), "Client");
    let all = provider().all_equivalent_frameworks(&client);
    assert!(all.contains(&NET4));
    assert_eq!(provider().equivalent_frameworks(&client), &[] as &[Framework]);
}

#[test]
fn one_hop_equivalents() {
    let direct = provider().equivalent_frameworks(&WP7);
    assert_eq!(direct.len(), 2);
    assert!(direct.contains(&WP));
}

#[test]
fn replacements() {
    let p = provider();
    assert_eq!(p.short_name_replacement(&DOTNET50), Some(&*DOTNET));
    assert_eq!(p.full_name_replacement(&DOTNET), Some(&*DOTNET50));
    assert_eq!(p.full_name_replacement(&NET45), None);
}

#[test]
fn portable_profile_inference() {
    let p = provider();
    assert_eq!(p.portable_profile(&frameworks(&["net4", "win8"])), Some(5));
    assert_eq!(p.portable_profile(&frameworks(&["net45", "win8", "wpa81"])), Some(111));
    assert_eq!(p.portable_profile(&frameworks(&["win8", "net45"])), Some(7));
    assert_eq!(p.portable_profile(&frameworks(&["net45", "win8", "wpa81", "wp8"])), Some(259));
    assert_eq!(p.portable_profile(&frameworks(&["net45"])), None);
    assert_eq!(p.portable_profile(&[]), None);
}

#[test]
fn inference_ignores_optional_frameworks() {
    let p = provider();
    let with_xamarin = frameworks(&["net45", "win8", "monoandroid10", "xamarinios10"]);
    assert_eq!(p.portable_profile(&with_xamarin), Some(7));
}

#[test]
fn inference_counts_equivalents_once() {
    let p = provider();
    assert_eq!(p.portable_profile(&frameworks(&["net4", "win", "win8"])), Some(5));
    assert_eq!(p.portable_profile(&frameworks(&["net45", "netcore45"])), Some(7));
}

#[test]
fn portable_frameworks_lists() -> anyhow::Result<()> {
    let p = provider();
    let list = p.portable_frameworks("net45+win8")?;
    assert_eq!(list, [NET45.clone(), WIN8.clone()]);

    assert_eq!(
        p.portable_frameworks("net45+sl4-wp"),
        Err(Error::NestedPortableProfile("sl4-wp".into()))
    );
    Ok(())
}

#[test]
fn portable_frameworks_by_number() -> anyhow::Result<()> {
    let p = provider();
    let required = p.portable_frameworks_with_include("Profile7", false)?;
    assert_eq!(required, [NET45.clone(), WIN8.clone()]);

    let all = p.portable_frameworks_with_include("profile7", true)?;
    assert_eq!(all.len(), 2 + p.optional_frameworks(7).len());
    assert!(all.contains(&MONOANDROID));

    assert!(p.portable_frameworks_with_include("Profile9999", true)?.is_empty());
    assert!(p.optional_frameworks(2).is_empty());
    Ok(())
}

#[test]
fn oversized_profiles_are_skipped() {
    struct Huge;
    impl PortableFrameworkMappings for Huge {
        fn profile_frameworks(&self) -> &[(u32, Vec<Framework>)] {
            static HUGE: LazyLock<Vec<(u32, Vec<Framework>)>> = LazyLock::new(|| {
                let members = (1..=9)
                    .map(|major| Framework::new(NET, Version::new(major, 0, 0)))
                    .collect();
                vec![(1000, members)]
            });
            &HUGE
        }
    }

    let p = NameProvider::new(&[&DefaultFrameworkMappings], &[&Huge]);
    let members = p.profile_frameworks(1000).to_vec();
    assert_eq!(members.len(), 9);
    assert_eq!(p.portable_profile(&members), None);
}

#[test]
fn profile_numbers() {
    assert_eq!(profile_number("Profile259"), Some(259));
    assert_eq!(profile_number("PROFILE7"), Some(7));
    assert_eq!(profile_number("Profile"), None);
    assert_eq!(profile_number("net45+win8"), None);
    assert_eq!(profile_number("Profile+7"), None);
    assert_eq!(profile_number("Profile-7"), None);
    assert_eq!(profile_number("Profile 7"), None);
}

#[test]
fn shared_is_initialized_once() {
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(|| NameProvider::shared() as *const NameProvider as usize))
        .collect();
    let addresses: Vec<usize> = handles
        .into_iter()
        .map(|h| h.join().expect("thread panicked"))
        .collect();
    let first = NameProvider::shared();
    for address in addresses {
        assert!(std::ptr::eq(address as *const NameProvider, first));
    }
}

#[test]
fn colliding_short_names_keep_the_first() {
    struct Renamed;
    impl FrameworkMappings for Renamed {
        fn identifier_short_names(&self) -> &[(String, String)] {
            static NAMES: LazyLock<Vec<(String, String)>> =
                LazyLock::new(|| vec![(NET.into(), "netfx".into())]);
            &NAMES
        }
    }

    let p = NameProvider::new(
        &[&Renamed, &DefaultFrameworkMappings],
        &[&DefaultPortableFrameworkMappings],
    );
    assert_eq!(p.short_identifier(NET), Some("netfx"));
    assert_eq!(p.identifier("netfx"), Some(NET));
    assert_eq!(p.identifier("net"), None);
}

#[test]
fn synonyms_exclude_short_names() {
    let p = provider();
    assert_eq!(p.identifier_synonym("NETFramework"), Some(NET));
    assert_eq!(p.identifier_synonym(".netframework"), Some(NET));
    assert_eq!(p.identifier_synonym("net"), None);
}
