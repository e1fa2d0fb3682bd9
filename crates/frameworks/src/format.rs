//! Rendering of frameworks as short folder names and full monikers.
use crate::{Error, Framework, NameProvider, version};

/// Short identifier shared by every net5-era framework.
const NET5_SHORT_NAME: &str = "net";

impl Framework {
    /// Renders the short folder name, e.g. `net45`, `netstandard2.0` or `portable-net45+win8`.
    ///
    /// # Errors
    ///
    /// - [`Error::NoShortNameMapping`] when the identifier has no short name and contains no
    ///   letters or digits to derive one from.
    /// - [`Error::UnresolvablePortableProfile`] when a portable framework's profile names no
    ///   frameworks.
    pub fn short_folder_name_with(&self, provider: &NameProvider) -> Result<String, Error> {
        if !self.is_specific() {
            return Ok(self.identifier().to_ascii_lowercase());
        }

        let fw = provider.short_name_replacement(self).unwrap_or(self);

        let mut name = if fw.is_net5_era() {
            NET5_SHORT_NAME.to_owned()
        } else {
            match provider.short_identifier(fw.identifier()) {
                Some(short) => short.to_owned(),
                None => sanitize(fw.identifier())?,
            }
        };

        if !fw.version().is_empty() {
            name.push_str(&provider.version_string(fw.identifier(), fw.version()));
        }

        if fw.is_pcl() {
            let frameworks = if fw.has_profile() {
                provider.portable_frameworks_with_include(fw.profile(), false)?
            } else {
                Vec::new()
            };
            if frameworks.is_empty() {
                return Err(Error::UnresolvablePortableProfile {
                    profile: fw.profile().into(),
                    moniker: fw.moniker_with(provider),
                });
            }
            let mut members = frameworks
                .iter()
                .map(|member| member.short_folder_name_with(provider))
                .collect::<Result<Vec<_>, _>>()?;
            members.sort();
            name.push('-');
            name.push_str(&members.join("+"));
        } else if fw.is_net5_era() {
            if fw.has_platform() {
                name.push('-');
                name.push_str(fw.platform());
                if !fw.platform_version().is_empty() {
                    name.push_str(&version::display(fw.platform_version()));
                }
            }
        } else if fw.has_profile() {
            name.push('-');
            name.push_str(
                provider
                    .short_profile(fw.identifier(), fw.profile())
                    .unwrap_or(fw.profile()),
            );
        }

        Ok(name.to_lowercase())
    }

    /// Renders the full moniker, e.g. `.NETFramework,Version=v4.5,Profile=Client`.
    ///
    /// Unlike [`Framework::moniker`] the result is not cached.
    pub fn moniker_with(&self, provider: &NameProvider) -> String {
        let fw = provider.full_name_replacement(self).unwrap_or(self);

        if !fw.is_specific() {
            return format!("{},Version=v0.0", fw.identifier());
        }

        let mut moniker = format!(
            "{},Version=v{}",
            fw.identifier(),
            version::display(fw.version())
        );
        if fw.has_profile() {
            moniker.push_str(",Profile=");
            moniker.push_str(fw.profile());
        }
        moniker
    }

    /// Renders `platform,Version=X.Y` for a net5-era framework targeting a platform.
    pub fn platform_moniker(&self) -> Option<String> {
        if !self.is_net5_era() || !self.has_platform() {
            return None;
        }
        Some(format!(
            "{},Version={}",
            self.platform(),
            version::display(self.platform_version())
        ))
    }
}

fn sanitize(identifier: &str) -> Result<String, Error> {
    let short: String = identifier
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect();
    if short.is_empty() {
        return Err(Error::NoShortNameMapping(identifier.into()));
    }
    Ok(short)
}
