//! # Name Provider
//!
//! The [`NameProvider`] indexes one or more mapping sources and answers every naming question
//! the parser and the formatter ask: canonical identifiers, short names, profile names, version
//! fragments, equivalences, rewrites and portable profiles.
//!
//! A provider is read-only once built. [`NameProvider::shared`] hands out a process-wide
//! instance built from the default mappings on first use; code that needs different tables
//! builds its own with [`NameProvider::new`] and passes it to the `*_with` entry points.
#[cfg(test)]
mod tests;

mod portable;

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use bimap::BiMap;
use nuversion::Version;

use crate::framework::FrameworkKey;
use crate::identifiers::PROFILE_PREFIX;
use crate::mappings::{
    DefaultFrameworkMappings, DefaultPortableFrameworkMappings, FrameworkMappings,
    PortableFrameworkMappings,
};
use crate::{Error, Framework, version};

//================================================================================================
// Statics
//================================================================================================

static SHARED: LazyLock<NameProvider> = LazyLock::new(NameProvider::default);

//================================================================================================
// Types
//================================================================================================

/// Resolves framework names against a fixed set of mapping tables.
///
/// All string lookups ignore case.
pub struct NameProvider {
    /// lower-cased synonym or identifier -> canonical identifier
    synonyms: HashMap<String, String>,
    /// lower-cased identifier <-> lower-cased short name
    short_names: BiMap<String, String>,
    /// (identifier, short profile) -> profile
    profiles: HashMap<(String, String), String>,
    /// (identifier, profile) -> short profile
    short_profiles: HashMap<(String, String), String>,
    equivalents: HashMap<FrameworkKey, Vec<Framework>>,
    /// (identifier, profile) -> equivalent profiles
    equivalent_profiles: HashMap<(String, String), Vec<String>>,
    short_replacements: HashMap<FrameworkKey, Framework>,
    full_replacements: HashMap<FrameworkKey, Framework>,
    decimal: HashSet<String>,
    single_digit: HashSet<String>,
    portable: Vec<(u32, Vec<Framework>)>,
    optional: HashMap<u32, Vec<Framework>>,
    permutations: HashMap<u32, Vec<HashSet<FrameworkKey>>>,
}

//================================================================================================
// Impls
//================================================================================================

impl NameProvider {
    /// Builds a provider from the given sources.
    ///
    /// Sources are merged in order; for a key defined more than once the first definition wins.
    pub fn new(
        mappings: &[&dyn FrameworkMappings],
        portable: &[&dyn PortableFrameworkMappings],
    ) -> Self {
        let mut provider = NameProvider {
            synonyms: HashMap::new(),
            short_names: BiMap::new(),
            profiles: HashMap::new(),
            short_profiles: HashMap::new(),
            equivalents: HashMap::new(),
            equivalent_profiles: HashMap::new(),
            short_replacements: HashMap::new(),
            full_replacements: HashMap::new(),
            decimal: HashSet::new(),
            single_digit: HashSet::new(),
            portable: Vec::new(),
            optional: HashMap::new(),
            permutations: HashMap::new(),
        };

        for source in mappings {
            provider.add_mappings(*source);
        }
        for source in portable {
            provider.add_portable_mappings(*source);
        }
        provider.compute_permutations();

        tracing::debug!(
            identifiers = provider.synonyms.len(),
            profiles = provider.portable.len(),
            "built framework name provider"
        );

        provider
    }

    /// The process-wide provider built from the default mappings.
    pub fn shared() -> &'static NameProvider {
        &SHARED
    }

    fn add_mappings(&mut self, source: &dyn FrameworkMappings) {
        for (synonym, identifier) in source.identifier_synonyms() {
            self.add_identifier(identifier);
            self.synonyms
                .entry(synonym.to_ascii_lowercase())
                .or_insert_with(|| identifier.clone());
        }

        for (identifier, short) in source.identifier_short_names() {
            self.add_identifier(identifier);
            if let Err((identifier, short)) = self
                .short_names
                .insert_no_overwrite(identifier.to_ascii_lowercase(), short.to_ascii_lowercase())
            {
                tracing::debug!(%identifier, %short, "short name already mapped, keeping the first");
            }
        }

        for mapping in source.profile_short_names() {
            let id = mapping.identifier.to_ascii_lowercase();
            self.profiles
                .entry((id.clone(), mapping.from.to_ascii_lowercase()))
                .or_insert_with(|| mapping.to.clone());
            self.short_profiles
                .entry((id, mapping.to.to_ascii_lowercase()))
                .or_insert_with(|| mapping.from.clone());
        }

        for (a, b) in source.equivalent_frameworks() {
            self.add_equivalent(a, b);
            self.add_equivalent(b, a);
        }

        for mapping in source.equivalent_profiles() {
            let id = mapping.identifier.to_ascii_lowercase();
            for (from, to) in [(&mapping.from, &mapping.to), (&mapping.to, &mapping.from)] {
                let entry = self
                    .equivalent_profiles
                    .entry((id.clone(), from.to_ascii_lowercase()))
                    .or_default();
                if !entry.iter().any(|p| p.eq_ignore_ascii_case(to)) {
                    entry.push(to.clone());
                }
            }
        }

        for (from, to) in source.short_name_replacements() {
            self.short_replacements
                .entry(from.key())
                .or_insert_with(|| to.clone());
        }
        for (from, to) in source.full_name_replacements() {
            self.full_replacements
                .entry(from.key())
                .or_insert_with(|| to.clone());
        }

        self.decimal.extend(
            source
                .decimal_point_frameworks()
                .iter()
                .map(|id| id.to_ascii_lowercase()),
        );
        self.single_digit.extend(
            source
                .single_digit_version_frameworks()
                .iter()
                .map(|id| id.to_ascii_lowercase()),
        );
    }

    fn add_identifier(&mut self, identifier: &str) {
        self.synonyms
            .entry(identifier.to_ascii_lowercase())
            .or_insert_with(|| identifier.to_owned());
    }

    fn add_equivalent(&mut self, from: &Framework, to: &Framework) {
        let entry = self.equivalents.entry(from.key()).or_default();
        if !entry.iter().any(|fw| fw.key() == to.key()) {
            entry.push(to.clone());
        }
    }

    fn add_portable_mappings(&mut self, source: &dyn PortableFrameworkMappings) {
        for (number, frameworks) in source.profile_frameworks() {
            if !self.portable.iter().any(|(n, _)| n == number) {
                self.portable.push((*number, frameworks.clone()));
            }
        }
        for (number, frameworks) in source.profile_optional_frameworks() {
            self.optional
                .entry(*number)
                .or_insert_with(|| frameworks.clone());
        }
    }

    /// Resolves a synonym, identifier or short name to the canonical identifier.
    pub fn identifier(&self, token: &str) -> Option<&str> {
        let lower = token.to_ascii_lowercase();
        if let Some(identifier) = self.synonyms.get(&lower) {
            return Some(identifier.as_str());
        }
        self.short_names
            .get_by_right(&lower)
            .and_then(|id| self.synonyms.get(id))
            .map(String::as_str)
    }

    /// Resolves a full identifier or one of its synonyms, but not a short name.
    pub fn identifier_synonym(&self, token: &str) -> Option<&str> {
        self.synonyms
            .get(&token.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// The short name of an identifier, e.g. `net` for `.NETFramework`.
    pub fn short_identifier(&self, identifier: &str) -> Option<&str> {
        self.short_names
            .get_by_left(&identifier.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Expands a short profile name of the given identifier, e.g. `client` for `.NETFramework`.
    pub fn profile(&self, identifier: &str, short: &str) -> Option<&str> {
        self.profiles
            .get(&(identifier.to_ascii_lowercase(), short.to_ascii_lowercase()))
            .map(String::as_str)
    }

    /// The short name of a profile of the given identifier.
    pub fn short_profile(&self, identifier: &str, profile: &str) -> Option<&str> {
        self.short_profiles
            .get(&(identifier.to_ascii_lowercase(), profile.to_ascii_lowercase()))
            .map(String::as_str)
    }

    /// Parses a compact (`451`) or dotted (`4.5.1`) version fragment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidVersionFragment`] for empty or malformed fragments.
    pub fn version(&self, fragment: &str) -> Result<Version, Error> {
        version::parse_fragment(fragment)
    }

    /// Parses a dotted platform version; `10` reads as `10.0`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidVersionFragment`] for empty or malformed fragments.
    pub fn platform_version(&self, fragment: &str) -> Result<Version, Error> {
        version::parse_platform_fragment(fragment)
    }

    /// Renders a version the way short folder names of `identifier` carry it.
    pub fn version_string(&self, identifier: &str, version: &Version) -> String {
        let id = identifier.to_ascii_lowercase();
        version::render(
            version,
            self.decimal.contains(&id),
            self.single_digit.contains(&id),
        )
    }

    /// Frameworks one equivalence hop away from `framework`.
    pub fn equivalent_frameworks(&self, framework: &Framework) -> &[Framework] {
        self.equivalents
            .get(&framework.key())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Every framework equivalent to `framework`, itself included.
    ///
    /// Follows equivalence pairs transitively and adds the variants reachable through
    /// equivalent profiles.
    pub fn all_equivalent_frameworks(&self, framework: &Framework) -> Vec<Framework> {
        let mut seen = HashSet::new();
        let mut result = Vec::new();
        let mut queue = vec![framework.clone()];

        while let Some(current) = queue.pop() {
            if !seen.insert(current.key()) {
                continue;
            }
            queue.extend(self.equivalent_frameworks(&current).iter().cloned());
            queue.extend(self.profile_variants(&current));
            result.push(current);
        }

        result
    }

    fn profile_variants(&self, framework: &Framework) -> Vec<Framework> {
        let key = (
            framework.identifier().to_ascii_lowercase(),
            framework.profile().to_ascii_lowercase(),
        );
        self.equivalent_profiles
            .get(&key)
            .into_iter()
            .flatten()
            .map(|profile| {
                Framework::with_profile(
                    framework.identifier(),
                    framework.version().clone(),
                    profile.as_str(),
                )
            })
            .collect()
    }

    /// The framework a short folder name is rendered from in place of `framework`.
    pub fn short_name_replacement(&self, framework: &Framework) -> Option<&Framework> {
        self.short_replacements.get(&framework.key())
    }

    /// The framework a moniker is rendered from in place of `framework`.
    pub fn full_name_replacement(&self, framework: &Framework) -> Option<&Framework> {
        self.full_replacements.get(&framework.key())
    }

    /// Frameworks a portable profile supports without requiring them.
    pub fn optional_frameworks(&self, profile: u32) -> &[Framework] {
        self.optional
            .get(&profile)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Frameworks a portable profile requires, in declaration order.
    pub fn profile_frameworks(&self, profile: u32) -> &[Framework] {
        self.portable
            .iter()
            .find(|(n, _)| *n == profile)
            .map(|(_, frameworks)| frameworks.as_slice())
            .unwrap_or_default()
    }

    /// Parses a `+` separated framework list such as `net45+win8`.
    ///
    /// # Errors
    ///
    /// Fails when a member does not parse or carries a profile of its own.
    pub fn portable_frameworks(&self, list: &str) -> Result<Vec<Framework>, Error> {
        list.split('+')
            .map(|token| {
                let framework = crate::parse_with(token, self)?;
                if framework.has_profile() {
                    return Err(Error::NestedPortableProfile(token.into()));
                }
                Ok(framework)
            })
            .collect()
    }

    /// The frameworks behind a portable profile given as `ProfileN` or as a `+` list.
    ///
    /// Numbered profiles include their optional frameworks when `include_optional` is set. An
    /// unknown profile number yields no frameworks.
    ///
    /// # Errors
    ///
    /// Fails when a list member does not parse or carries a profile of its own.
    pub fn portable_frameworks_with_include(
        &self,
        profile: &str,
        include_optional: bool,
    ) -> Result<Vec<Framework>, Error> {
        match profile_number(profile) {
            Some(number) => {
                let mut frameworks = self.profile_frameworks(number).to_vec();
                if include_optional {
                    frameworks.extend(self.optional_frameworks(number).iter().cloned());
                }
                Ok(frameworks)
            },
            None => self.portable_frameworks(profile),
        }
    }
}

impl Default for NameProvider {
    fn default() -> Self {
        NameProvider::new(
            &[&DefaultFrameworkMappings],
            &[&DefaultPortableFrameworkMappings],
        )
    }
}

//================================================================================================
// Functions
//================================================================================================

/// Reads the number out of a `ProfileN` name, ignoring case.
pub(crate) fn profile_number(profile: &str) -> Option<u32> {
    let prefix = profile.get(..PROFILE_PREFIX.len())?;
    if !prefix.eq_ignore_ascii_case(PROFILE_PREFIX) {
        return None;
    }
    let digits = &profile[PROFILE_PREFIX.len()..];
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
