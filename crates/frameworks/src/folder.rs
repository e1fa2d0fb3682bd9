//! # Package Folder Resolution
//!
//! Files in a package are grouped by framework through their folder layout: the first folder
//! below a known root names the framework the file targets.
//!
//! ```text
//! lib/net45/Foo.dll           -> net45, "Foo.dll"
//! build/netstandard2.0/a.tgt  -> netstandard2.0, "a.tgt"
//! lib/Foo.dll                 -> no framework, "Foo.dll"
//! content/images/logo.png     -> no framework, "images/logo.png"
//! ```
use crate::identifiers::KNOWN_FOLDERS;
use crate::{Error, Framework, NameProvider};

/// The outcome of resolving a package-relative path.
#[derive(Clone, Debug, PartialEq)]
pub struct FolderMatch {
    /// The framework named by the path, if any.
    pub framework: Option<Framework>,
    /// The remainder of the path below the framework folder, or below the root when no
    /// framework was found.
    pub effective_path: String,
}

/// Resolves `path` against the [`KNOWN_FOLDERS`] with the shared [`NameProvider`].
///
/// # Errors
///
/// See [`parse_folder_path_with`].
pub fn parse_folder_path(path: &str, strict: bool) -> Result<FolderMatch, Error> {
    parse_folder_path_with(path, strict, KNOWN_FOLDERS, NameProvider::shared())
}

/// Resolves `path` against the given root folders.
///
/// Both `/` and `\` separate folders and roots match regardless of case. When the folder
/// below the root is not a specific framework it is treated as ordinary content, unless
/// `strict` is set.
///
/// # Errors
///
/// Only in strict mode: the parse error of the framework folder, or [`Error::NotSpecific`]
/// when it names `any`, `agnostic` or `unsupported`.
pub fn parse_folder_path_with<S: AsRef<str>>(
    path: &str,
    strict: bool,
    roots: &[S],
    provider: &NameProvider,
) -> Result<FolderMatch, Error> {
    let normalized = path.replace('\\', "/");
    let normalized = normalized.trim_start_matches('/');

    let unmatched = |effective: &str| FolderMatch {
        framework: None,
        effective_path: effective.to_owned(),
    };

    let Some((root, below_root)) = normalized.split_once('/') else {
        return Ok(unmatched(normalized));
    };
    if !roots
        .iter()
        .any(|known| known.as_ref().eq_ignore_ascii_case(root))
    {
        return Ok(unmatched(normalized));
    }

    // a file directly below the root does not name a framework
    let Some((folder, rest)) = below_root.split_once('/') else {
        return Ok(unmatched(below_root));
    };

    match crate::parse_with(folder, provider) {
        Ok(framework) if framework.is_specific() => {
            tracing::trace!(path, framework = %framework, "resolved framework folder");
            Ok(FolderMatch {
                framework: Some(framework),
                effective_path: rest.to_owned(),
            })
        },
        Ok(_) if strict => Err(Error::NotSpecific(folder.into())),
        Err(e) if strict => Err(e),
        Ok(_) | Err(_) => Ok(unmatched(below_root)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{NET45, NETSTANDARD20};

    #[test]
    fn resolves_framework_folders() -> anyhow::Result<()> {
        let found = parse_folder_path("lib/net45/Foo.dll", false)?;
        assert_eq!(found.framework.as_ref(), Some(&*NET45));
        assert_eq!(found.effective_path, "Foo.dll");

        let found = parse_folder_path(r"Build\NetStandard2.0\sub\a.targets", true)?;
        assert_eq!(found.framework.as_ref(), Some(&*NETSTANDARD20));
        assert_eq!(found.effective_path, "sub/a.targets");
        Ok(())
    }

    #[test]
    fn files_below_the_root_have_no_framework() -> anyhow::Result<()> {
        let found = parse_folder_path("lib/Foo.dll", true)?;
        assert_eq!(found.framework, None);
        assert_eq!(found.effective_path, "Foo.dll");
        Ok(())
    }

    #[test]
    fn unknown_roots_are_not_resolved() -> anyhow::Result<()> {
        let found = parse_folder_path("docs/net45/readme.md", true)?;
        assert_eq!(found.framework, None);
        assert_eq!(found.effective_path, "docs/net45/readme.md");
        Ok(())
    }

    #[test]
    fn content_folders_are_lenient() -> anyhow::Result<()> {
        let found = parse_folder_path("content/images/logo.png", false)?;
        assert_eq!(found.framework, None);
        assert_eq!(found.effective_path, "images/logo.png");

        let found = parse_folder_path("lib/any/Foo.dll", false)?;
        assert_eq!(found.framework, None);
        assert_eq!(found.effective_path, "any/Foo.dll");
        Ok(())
    }

    #[test]
    fn strict_mode_rejects_non_frameworks() {
        assert_eq!(
            parse_folder_path("lib/any/Foo.dll", true),
            Err(Error::NotSpecific("any".into()))
        );
        assert!(matches!(
            parse_folder_path("content/images/logo.png", true),
            Err(Error::UnknownIdentifier { .. })
        ));
    }

    #[test]
    fn custom_roots() -> anyhow::Result<()> {
        let found =
            parse_folder_path_with("pkg/net8.0/a.dll", true, &["pkg"], NameProvider::shared())?;
        assert_eq!(
            found.framework.map(|fw| fw.moniker().to_owned()).as_deref(),
            Some(".NETCoreApp,Version=v8.0")
        );
        Ok(())
    }
}
