//! Well-known framework values and the exact-token tables consulted before general parsing.
use std::sync::LazyLock;

use nuversion::Version;

use crate::Framework;
use crate::identifiers::*;

//================================================================================================
// Statics
//================================================================================================

macro_rules! well_known {
    ($($name:ident: $id:expr, [$($part:expr),*];)*) => {
        $(
            #[doc = concat!("The well-known `", stringify!($name), "` framework.")]
            pub static $name: LazyLock<Framework> = LazyLock::new(|| make($id, &[$($part),*]));
        )*
    };
}

well_known! {
    ANY_FRAMEWORK: ANY, [];
    AGNOSTIC_FRAMEWORK: AGNOSTIC, [];
    UNSUPPORTED_FRAMEWORK: UNSUPPORTED, [];

    NET11: NET, [1, 1];
    NET2: NET, [2, 0];
    NET35: NET, [3, 5];
    NET4: NET, [4, 0];
    NET403: NET, [4, 0, 3];
    NET45: NET, [4, 5];
    NET451: NET, [4, 5, 1];
    NET452: NET, [4, 5, 2];
    NET46: NET, [4, 6];
    NET461: NET, [4, 6, 1];
    NET462: NET, [4, 6, 2];
    NET47: NET, [4, 7];
    NET471: NET, [4, 7, 1];
    NET472: NET, [4, 7, 2];
    NET48: NET, [4, 8];
    NET481: NET, [4, 8, 1];

    NET50: NET_CORE_APP, [5, 0];
    NET60: NET_CORE_APP, [6, 0];
    NET70: NET_CORE_APP, [7, 0];
    NET80: NET_CORE_APP, [8, 0];
    NET90: NET_CORE_APP, [9, 0];
    NET100: NET_CORE_APP, [10, 0];

    NETCORE: NET_CORE, [];
    NETCORE45: NET_CORE, [4, 5];
    NETCORE451: NET_CORE, [4, 5, 1];
    WINRT: WIN_RT, [];
    WINRT45: WIN_RT, [4, 5];

    WIN: WINDOWS, [];
    WIN8: WINDOWS, [8, 0];
    WIN81: WINDOWS, [8, 1];
    WIN10: WINDOWS, [10, 0];

    SL4: SILVERLIGHT, [4, 0];
    SL5: SILVERLIGHT, [5, 0];

    WP: WINDOWS_PHONE, [];
    WP7: WINDOWS_PHONE, [7, 0];
    WP75: WINDOWS_PHONE, [7, 5];
    WP8: WINDOWS_PHONE, [8, 0];
    WP81: WINDOWS_PHONE, [8, 1];
    WPA: WINDOWS_PHONE_APP, [];
    WPA81: WINDOWS_PHONE_APP, [8, 1];

    UAP: crate::identifiers::UAP, [];
    UAP10: crate::identifiers::UAP, [10, 0];

    NETSTANDARD: NET_STANDARD, [];
    NETSTANDARD10: NET_STANDARD, [1, 0];
    NETSTANDARD11: NET_STANDARD, [1, 1];
    NETSTANDARD12: NET_STANDARD, [1, 2];
    NETSTANDARD13: NET_STANDARD, [1, 3];
    NETSTANDARD14: NET_STANDARD, [1, 4];
    NETSTANDARD15: NET_STANDARD, [1, 5];
    NETSTANDARD16: NET_STANDARD, [1, 6];
    NETSTANDARD17: NET_STANDARD, [1, 7];
    NETSTANDARD20: NET_STANDARD, [2, 0];
    NETSTANDARD21: NET_STANDARD, [2, 1];

    NETCOREAPP10: NET_CORE_APP, [1, 0];
    NETCOREAPP11: NET_CORE_APP, [1, 1];
    NETCOREAPP20: NET_CORE_APP, [2, 0];
    NETCOREAPP21: NET_CORE_APP, [2, 1];
    NETCOREAPP22: NET_CORE_APP, [2, 2];
    NETCOREAPP30: NET_CORE_APP, [3, 0];
    NETCOREAPP31: NET_CORE_APP, [3, 1];

    DOTNET: NET_PLATFORM, [];
    DOTNET50: NET_PLATFORM, [5, 0];

    DNX: crate::identifiers::DNX, [];
    DNX45: crate::identifiers::DNX, [4, 5];
    DNXCORE: DNX_CORE, [];
    DNXCORE50: DNX_CORE, [5, 0];
    ASPNET: ASP_NET, [];
    ASPNET50: ASP_NET, [5, 0];
    ASPNETCORE: ASP_NET_CORE, [];
    ASPNETCORE50: ASP_NET_CORE, [5, 0];

    TIZEN: crate::identifiers::TIZEN, [];
    TIZEN3: crate::identifiers::TIZEN, [3, 0];
    TIZEN4: crate::identifiers::TIZEN, [4, 0];
    TIZEN6: crate::identifiers::TIZEN, [6, 0];

    MONOANDROID: MONO_ANDROID, [];
    MONOANDROID10: MONO_ANDROID, [1, 0];
    MONOTOUCH: MONO_TOUCH, [];
    MONOTOUCH10: MONO_TOUCH, [1, 0];
    MONOMAC: MONO_MAC, [];
    XAMARINIOS: XAMARIN_IOS, [];
    XAMARINIOS10: XAMARIN_IOS, [1, 0];
    XAMARINMAC: XAMARIN_MAC, [];
    XAMARINMAC20: XAMARIN_MAC, [2, 0];
    XAMARINPSTHREE: XAMARIN_PLAYSTATION_3, [];
    XAMARINPSFOUR: XAMARIN_PLAYSTATION_4, [];
    XAMARINPSVITA: XAMARIN_PLAYSTATION_VITA, [];
    XAMARINWATCHOS: XAMARIN_WATCH_OS, [];
    XAMARINTVOS: XAMARIN_TV_OS, [];
    XAMARINXBOXTHREESIXTY: XAMARIN_XBOX_360, [];
    XAMARINXBOXONE: XAMARIN_XBOX_ONE, [];

    NATIVE_FRAMEWORK: NATIVE, [];
}

//================================================================================================
// Functions
//================================================================================================

fn make(identifier: &str, parts: &[u64]) -> Framework {
    let part = |i: usize| parts.get(i).copied().unwrap_or(0);
    Framework::new(
        identifier,
        Version::with_revision(part(0), part(1), part(2), part(3)),
    )
}

/// Resolves the special tokens `any`, `agnostic` and `unsupported`, ignoring case.
pub fn special_framework(token: &str) -> Option<&'static Framework> {
    let lower = token.to_ascii_lowercase();
    let fw = match lower.as_str() {
        "any" => &ANY_FRAMEWORK,
        "agnostic" => &AGNOSTIC_FRAMEWORK,
        "unsupported" => &UNSUPPORTED_FRAMEWORK,
        _ => return None,
    };
    Some(LazyLock::force(fw))
}

/// Resolves the bare version tokens older packages used in place of a framework name.
pub fn deprecated_framework(token: &str) -> Option<&'static Framework> {
    let fw = match token {
        "45" | "4.5" => &NET45,
        "40" | "4.0" => &NET4,
        "35" | "3.5" => &NET35,
        "20" | "2.0" => &NET2,
        _ => return None,
    };
    Some(LazyLock::force(fw))
}

/// Resolves frequently used short folder names without running the general parser.
///
/// The token must already be lower-cased.
pub fn common_framework(token: &str) -> Option<&'static Framework> {
    let fw = match token {
        "net20" => &NET2,
        "net35" => &NET35,
        "net40" => &NET4,
        "net403" => &NET403,
        "net45" => &NET45,
        "net451" => &NET451,
        "net452" => &NET452,
        "net46" => &NET46,
        "net461" => &NET461,
        "net462" => &NET462,
        "net47" => &NET47,
        "net471" => &NET471,
        "net472" => &NET472,
        "net48" => &NET48,
        "net481" => &NET481,
        "net5.0" => &NET50,
        "net6.0" => &NET60,
        "net7.0" => &NET70,
        "net8.0" => &NET80,
        "net9.0" => &NET90,
        "net10.0" => &NET100,
        "netcore45" => &NETCORE45,
        "netcore451" => &NETCORE451,
        "win8" => &WIN8,
        "win81" => &WIN81,
        "win10.0" => &WIN10,
        "sl4" => &SL4,
        "sl5" => &SL5,
        "wp7" => &WP7,
        "wp75" => &WP75,
        "wp8" => &WP8,
        "wp81" => &WP81,
        "wpa81" => &WPA81,
        "uap10.0" => &UAP10,
        "netstandard" => &NETSTANDARD,
        "netstandard1.0" => &NETSTANDARD10,
        "netstandard1.1" => &NETSTANDARD11,
        "netstandard1.2" => &NETSTANDARD12,
        "netstandard1.3" => &NETSTANDARD13,
        "netstandard1.4" => &NETSTANDARD14,
        "netstandard1.5" => &NETSTANDARD15,
        "netstandard1.6" => &NETSTANDARD16,
        "netstandard1.7" => &NETSTANDARD17,
        "netstandard2.0" => &NETSTANDARD20,
        "netstandard2.1" => &NETSTANDARD21,
        "netcoreapp1.0" => &NETCOREAPP10,
        "netcoreapp1.1" => &NETCOREAPP11,
        "netcoreapp2.0" => &NETCOREAPP20,
        "netcoreapp2.1" => &NETCOREAPP21,
        "netcoreapp2.2" => &NETCOREAPP22,
        "netcoreapp3.0" => &NETCOREAPP30,
        "netcoreapp3.1" => &NETCOREAPP31,
        "dotnet" => &DOTNET,
        "tizen3" => &TIZEN3,
        "tizen4" => &TIZEN4,
        "monoandroid10" => &MONOANDROID10,
        "monotouch10" => &MONOTOUCH10,
        "xamarinios10" => &XAMARINIOS10,
        "native" => &NATIVE_FRAMEWORK,
        _ => return None,
    };
    Some(LazyLock::force(fw))
}

/// Every token [`common_framework`] answers for.
#[cfg(test)]
pub(crate) const COMMON_TOKENS: &[&str] = &[
    "net20",
    "net35",
    "net40",
    "net403",
    "net45",
    "net451",
    "net452",
    "net46",
    "net461",
    "net462",
    "net47",
    "net471",
    "net472",
    "net48",
    "net481",
    "net5.0",
    "net6.0",
    "net7.0",
    "net8.0",
    "net9.0",
    "net10.0",
    "netcore45",
    "netcore451",
    "win8",
    "win81",
    "win10.0",
    "sl4",
    "sl5",
    "wp7",
    "wp75",
    "wp8",
    "wp81",
    "wpa81",
    "uap10.0",
    "netstandard",
    "netstandard1.0",
    "netstandard1.1",
    "netstandard1.2",
    "netstandard1.3",
    "netstandard1.4",
    "netstandard1.5",
    "netstandard1.6",
    "netstandard1.7",
    "netstandard2.0",
    "netstandard2.1",
    "netcoreapp1.0",
    "netcoreapp1.1",
    "netcoreapp2.0",
    "netcoreapp2.1",
    "netcoreapp2.2",
    "netcoreapp3.0",
    "netcoreapp3.1",
    "dotnet",
    "tizen3",
    "tizen4",
    "monoandroid10",
    "monotouch10",
    "xamarinios10",
    "native",
];
