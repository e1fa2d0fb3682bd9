//! Tests for framework construction, equality and serialization.
use serde::{Deserialize, Serialize};
use toml_edit::de::from_str;

use super::*;
use crate::common::{NET45, NET80, UNSUPPORTED_FRAMEWORK};
use crate::identifiers::{NET, NET_CORE_APP, WINDOWS};

#[test]
fn net5_era_keeps_platform() {
    let fw = Framework::with_platform(
        NET_CORE_APP,
        Version::new(8, 0, 0),
        "windows",
        Version::new(10, 0, 0),
    );
    assert!(fw.is_net5_era());
    assert_eq!(fw.platform(), "windows");
    assert_eq!(fw.platform_version(), &Version::new(10, 0, 0));
}

#[test]
fn earlier_frameworks_drop_platform() {
    let fw = Framework::with_platform(NET, Version::new(8, 0, 0), "windows", Version::new(10, 0, 0));
    assert!(!fw.is_net5_era());
    assert_eq!(fw.platform(), "");
    assert!(fw.platform_version().is_empty());

    let core31 =
        Framework::with_platform(NET_CORE_APP, Version::new(3, 1, 0), "windows", Version::EMPTY);
    assert!(!core31.is_net5_era());
    assert!(!core31.has_platform());
}

#[test]
fn net5_era_drops_profile() {
    let fw = Framework::with_profile(NET_CORE_APP, Version::new(6, 0, 0), "Client");
    assert!(!fw.has_profile());
}

#[test]
fn equality_ignores_case() {
    let a = Framework::with_profile(".netframework", Version::new(4, 0, 0), "client");
    let b = Framework::with_profile(NET, Version::new(4, 0, 0), "Client");
    assert_eq!(a, b);
    assert_eq!(a.key(), b.key());
    assert_ne!(a, Framework::new(NET, Version::new(4, 0, 0)));
}

#[test]
fn unsupported_is_never_equal() {
    let a = Framework::new("Unsupported", Version::EMPTY);
    assert_ne!(a, a.clone());
    assert_ne!(*UNSUPPORTED_FRAMEWORK, *UNSUPPORTED_FRAMEWORK);
    assert!(a.is_unsupported());
}

#[test]
fn kinds() {
    let kinds: Vec<FrameworkKind> = ["any", "AGNOSTIC", "Unsupported", "Windows"]
        .into_iter()
        .map(|id| Framework::new(id, Version::EMPTY).kind())
        .collect();
    assert_eq!(
        kinds,
        [
            FrameworkKind::Any,
            FrameworkKind::Agnostic,
            FrameworkKind::Unsupported,
            FrameworkKind::Specific
        ]
    );
    assert!(Framework::new(WINDOWS, Version::new(8, 0, 0)).is_specific());
}

#[test]
fn pcl_detection() {
    let pcl = Framework::with_profile(PORTABLE, Version::EMPTY, "Profile7");
    assert!(pcl.is_pcl());
    assert!(!Framework::new(PORTABLE, Version::new(5, 0, 0)).is_pcl());
}

#[test]
fn display_is_the_moniker() {
    assert_eq!(NET45.to_string(), ".NETFramework,Version=v4.5");
    assert_eq!(NET80.to_string(), ".NETCoreApp,Version=v8.0");
}

#[test]
fn debug_skips_cache() {
    let fw = Framework::new(NET, Version::new(4, 5, 0));
    let _ = fw.moniker();
    let debug = format!("{fw:?}");
    assert!(debug.starts_with(r#"Framework { identifier: ".NETFramework""#));
    assert!(!debug.contains("moniker"));
}

#[derive(Debug, Serialize, Deserialize)]
struct Target {
    framework: Framework,
    supports: Vec<Framework>,
}

#[test]
fn serde_uses_short_folder_names() -> anyhow::Result<()> {
    let target: Target = from_str(
        r#"
        framework = ".NETFramework,Version=v4.5"
        supports = ["netstandard2.0", "net8.0-windows"]
        "#,
    )?;
    assert_eq!(target.framework, *NET45);
    assert_eq!(target.supports[1].platform(), "windows");

    let json = serde_json::to_string(&target)?;
    insta::assert_snapshot!(
        json,
        @r#"{"framework":"net45","supports":["netstandard2.0","net8.0-windows"]}"#
    );

    let reread: Target = from_str(&toml_edit::ser::to_string(&target)?)?;
    assert_eq!(reread.supports, target.supports);
    Ok(())
}

#[test]
fn serde_rejects_unknown_frameworks() {
    let res: Result<Target, _> = from_str(r#"framework = "bogus1.0"
supports = []"#);
    assert!(res.is_err());
}
