use thiserror::Error;

/// Errors raised while parsing or rendering frameworks.
///
/// Every failure is local and deterministic: the same input always produces the same error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The token cannot be split into identifier, version and suffix.
    #[error("Malformed framework token: '{0}'")]
    MalformedToken(String),
    /// The identifier is neither a known synonym nor a known short name.
    #[error("Unknown framework identifier '{identifier}' in '{token}'")]
    UnknownIdentifier {
        /// The unresolved identifier.
        identifier: String,
        /// The full token it was read from.
        token: String,
    },
    /// The version part is neither a compact digit run nor a dotted version.
    #[error("Invalid framework version: '{0}'")]
    InvalidVersionFragment(String),
    /// The profile or platform suffix contains characters outside `[A-Za-z0-9.+-]`.
    #[error("Invalid characters in framework suffix: '{0}'")]
    InvalidProfileCharacters(String),
    /// A portable framework's profile does not name any frameworks.
    #[error("The portable profile '{profile}' of '{moniker}' does not resolve to any frameworks")]
    UnresolvablePortableProfile {
        /// The profile that failed to resolve.
        profile: String,
        /// The moniker of the framework carrying it.
        moniker: String,
    },
    /// No short name is known for the identifier and none can be derived from it.
    #[error("No short name can be derived for the framework identifier '{0}'")]
    NoShortNameMapping(String),
    /// A member of a portable framework list carries a profile of its own.
    #[error("Frameworks inside a portable profile cannot have profiles: '{0}'")]
    NestedPortableProfile(String),
    /// A strictly parsed folder does not name a specific framework.
    #[error("The folder '{0}' does not name a specific framework")]
    NotSpecific(String),
}
