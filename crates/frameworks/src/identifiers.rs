//! Canonical framework identifiers, profile names and package folder names.

/// `.NETFramework`, short name `net`.
pub const NET: &str = ".NETFramework";
/// `.NETCore`, the Windows Store framework, short name `netcore`.
pub const NET_CORE: &str = ".NETCore";
/// `.NETCoreApp`, short name `netcoreapp` (`net` from version 5 on).
pub const NET_CORE_APP: &str = ".NETCoreApp";
/// `.NETStandard`, short name `netstandard`.
pub const NET_STANDARD: &str = ".NETStandard";
/// `.NETStandardApp`, short name `netstandardapp`.
pub const NET_STANDARD_APP: &str = ".NETStandardApp";
/// `.NETPlatform`, short name `dotnet`.
pub const NET_PLATFORM: &str = ".NETPlatform";
/// `.NETMicroFramework`, short name `netmf`.
pub const NET_MICRO: &str = ".NETMicroFramework";
/// `.NETnanoFramework`, short name `netnano`.
pub const NET_NANO: &str = ".NETnanoFramework";
/// `.NETPortable`, short name `portable`.
pub const PORTABLE: &str = ".NETPortable";
/// `Silverlight`, short name `sl`.
pub const SILVERLIGHT: &str = "Silverlight";
/// `WindowsPhone`, short name `wp`.
pub const WINDOWS_PHONE: &str = "WindowsPhone";
/// `WindowsPhoneApp`, short name `wpa`.
pub const WINDOWS_PHONE_APP: &str = "WindowsPhoneApp";
/// `Windows`, short name `win`.
pub const WINDOWS: &str = "Windows";
/// `ASP.NET`, short name `aspnet`.
pub const ASP_NET: &str = "ASP.NET";
/// `ASP.NETCore`, short name `aspnetcore`.
pub const ASP_NET_CORE: &str = "ASP.NETCore";
/// `native`
pub const NATIVE: &str = "native";
/// `MonoAndroid`
pub const MONO_ANDROID: &str = "MonoAndroid";
/// `MonoTouch`
pub const MONO_TOUCH: &str = "MonoTouch";
/// `MonoMac`
pub const MONO_MAC: &str = "MonoMac";
/// `Xamarin.iOS`, short name `xamarinios`.
pub const XAMARIN_IOS: &str = "Xamarin.iOS";
/// `Xamarin.Mac`, short name `xamarinmac`.
pub const XAMARIN_MAC: &str = "Xamarin.Mac";
/// `Xamarin.PlayStation3`, short name `xamarinpsthree`.
pub const XAMARIN_PLAYSTATION_3: &str = "Xamarin.PlayStation3";
/// `Xamarin.PlayStation4`, short name `xamarinpsfour`.
pub const XAMARIN_PLAYSTATION_4: &str = "Xamarin.PlayStation4";
/// `Xamarin.PlayStationVita`, short name `xamarinpsvita`.
pub const XAMARIN_PLAYSTATION_VITA: &str = "Xamarin.PlayStationVita";
/// `Xamarin.WatchOS`, short name `xamarinwatchos`.
pub const XAMARIN_WATCH_OS: &str = "Xamarin.WatchOS";
/// `Xamarin.TVOS`, short name `xamarintvos`.
pub const XAMARIN_TV_OS: &str = "Xamarin.TVOS";
/// `Xamarin.Xbox360`, short name `xamarinxboxthreesixty`.
pub const XAMARIN_XBOX_360: &str = "Xamarin.Xbox360";
/// `Xamarin.XboxOne`, short name `xamarinxboxone`.
pub const XAMARIN_XBOX_ONE: &str = "Xamarin.XboxOne";
/// `DNX`
pub const DNX: &str = "DNX";
/// `DNXCore`
pub const DNX_CORE: &str = "DNXCore";
/// `WinRT`
pub const WIN_RT: &str = "WinRT";
/// `UAP`
pub const UAP: &str = "UAP";
/// `Tizen`
pub const TIZEN: &str = "Tizen";

/// Matches every framework.
pub const ANY: &str = "Any";
/// Content that does not target any framework.
pub const AGNOSTIC: &str = "Agnostic";
/// The identity of a framework that could not be determined.
pub const UNSUPPORTED: &str = "Unsupported";

/// Prefix of numbered portable profiles, as in `Profile259`.
pub const PROFILE_PREFIX: &str = "Profile";

/// Package root folders whose first sub-folder names a framework.
pub const KNOWN_FOLDERS: &[&str] = &[
    "content",
    "lib",
    "build",
    "buildTransitive",
    "tools",
    "contentFiles",
    "native",
    "runtimes",
    "ref",
    "analyzers",
    "src",
];
