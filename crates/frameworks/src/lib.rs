//! # Target Frameworks
//!
//! The `frameworks` crate resolves .NET target-framework monikers (TFMs). It turns the short
//! folder names found in packages (`net8.0`, `netstandard2.0`, `portable-net45+win8`) and the
//! long monikers found in project files (`.NETFramework,Version=v4.5`) into one normalized
//! [`Framework`] value, and renders that value back into either encoding.
//!
//! ## Key Concepts
//!
//! **Frameworks** are immutable values made of an identifier, a version and either a legacy
//! profile or, for .NET 5 and later, an operating-system platform. Three special frameworks
//! exist: `any`, `agnostic` and `unsupported`. They are told apart by [`FrameworkKind`], never
//! by identity.
//!
//! **Mappings** are ordered tables describing identifier synonyms, short names, profile names,
//! equivalences and portable profiles. The defaults ship with the crate; custom tables can be
//! supplied through the [`FrameworkMappings`] and [`PortableFrameworkMappings`] traits.
//!
//! **The name provider** ([`NameProvider`]) indexes the mapping tables once and answers every
//! lookup the parser and formatter need. A process-wide instance is available through
//! [`NameProvider::shared`]; the `*_with` entry points accept an explicit one instead.
//!
//! ## Architecture
//!
//! - [`identifiers`] - canonical identifier, profile and folder constants.
//! - [`common`] - well-known framework values and the fast-path lookup tables.
//! - [`mappings`] - the mapping traits and their default data.
//! - [`provider`] - the name provider, including portable-profile inference.
//! - [`folder`] - resolution of package-relative paths such as `lib/net45/a.dll`.
//!
//! ## Basic Usage
//!
//! ```
//! use frameworks::Framework;
//!
//! let framework = frameworks::parse("net8.0-windows10.0.19041").unwrap();
//! assert_eq!(framework.identifier(), ".NETCoreApp");
//! assert_eq!(framework.platform(), "windows");
//! assert_eq!(framework.moniker(), ".NETCoreApp,Version=v8.0");
//! assert_eq!(
//!     framework.short_folder_name().unwrap(),
//!     "net8.0-windows10.0.19041"
//! );
//!
//! let pcl: Framework = "portable-net45+win8+monoandroid10".parse().unwrap();
//! assert_eq!(pcl.profile(), "Profile7");
//! assert_eq!(pcl.short_folder_name().unwrap(), "portable-net45+win8");
//! ```

#![deny(missing_docs)]

pub use self::error::Error;
pub use self::folder::{FolderMatch, parse_folder_path, parse_folder_path_with};
pub use self::framework::{Framework, FrameworkKind};
pub use self::mappings::{
    DefaultFrameworkMappings, DefaultPortableFrameworkMappings, FrameworkMappings,
    PortableFrameworkMappings, ProfileMapping,
};
pub use self::parse::{parse, parse_with};
pub use self::provider::NameProvider;
pub use nuversion::Version;

pub mod common;
mod error;
pub mod folder;
mod format;
mod framework;
pub mod identifiers;
pub mod mappings;
mod parse;
pub mod provider;
mod version;
