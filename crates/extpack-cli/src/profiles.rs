//! Built-in packaging profiles.
//!
//! These mirror what the extension's release process has always shipped:
//! a per-browser package with the variant manifest swapped in under the
//! canonical name, and a source archive with a wider exclusion set.

use anyhow::{Context, Result};
use clap::ValueEnum;
use extpack_core::PackageSpec;
use std::path::{Path, PathBuf};

/// Canonical manifest name inside every package.
pub const MANIFEST_DEST: &str = "manifest.json";

/// Browser targets a package can be built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Variant {
    Chrome,
    Firefox,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Chrome, Variant::Firefox];

    /// Label used in the archive file name.
    pub fn label(self) -> &'static str {
        match self {
            Variant::Chrome => "Chrome",
            Variant::Firefox => "Firefox",
        }
    }

    /// On-disk manifest file this variant ships.
    pub fn manifest(self) -> &'static str {
        match self {
            Variant::Chrome => "manifest.json",
            Variant::Firefox => "manifest_firefox.json",
        }
    }
}

/// `{product}_{Label}_v{version}.zip`
pub fn archive_name(product: &str, label: &str, version: &str) -> String {
    format!("{product}_{label}_v{version}.zip")
}

/// Extension-package profile for one browser variant.
pub fn build_spec(
    root: &Path,
    out_dir: &Path,
    product: &str,
    version: &str,
    variant: Variant,
) -> PackageSpec {
    PackageSpec {
        root: root.to_path_buf(),
        include_paths: ["src", "assets", "libs", "LICENSE"]
            .into_iter()
            .map(PathBuf::from)
            .collect(),
        exclude_dirs: ["__pycache__", ".git", "release", "github"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        exclude_hidden_dirs: false,
        exclude_file_patterns: vec!["*.pyc".to_string()],
        manifest_source: Some(variant.manifest().into()),
        manifest_dest_name: MANIFEST_DEST.to_string(),
        output_path: out_dir.join(archive_name(product, variant.label(), version)),
    }
}

/// Source-distribution profile: the whole root tree minus VCS metadata,
/// caches, editor directories, docs, prior archives, and dotfiles.
pub fn source_spec(root: &Path, out_dir: &Path, product: &str, version: &str) -> PackageSpec {
    PackageSpec {
        root: root.to_path_buf(),
        include_paths: vec![root.to_path_buf()],
        exclude_dirs: [
            ".git",
            "__pycache__",
            "release",
            "github",
            "docs",
            "node_modules",
            ".idea",
            ".vscode",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
        exclude_hidden_dirs: true,
        exclude_file_patterns: vec![
            "*.zip".to_string(),
            "*.pyc".to_string(),
            "*.md".to_string(),
            ".gitignore".to_string(),
        ],
        manifest_source: None,
        manifest_dest_name: MANIFEST_DEST.to_string(),
        output_path: out_dir.join(archive_name(product, "Source", version)),
    }
}

/// Default product name: the root directory's own name.
pub fn product_name(root: &Path) -> Result<String> {
    let root = root
        .canonicalize()
        .with_context(|| format!("cannot resolve project root '{}'", root.display()))?;
    root.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .context("project root has no directory name; pass --product")
}

/// Default version: the `version` field of the manifest under `root`.
pub fn manifest_version(root: &Path) -> Result<String> {
    let path = root.join(MANIFEST_DEST);
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("cannot read '{}'; pass --version", path.display()))?;
    let manifest: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("'{}' is not valid JSON", path.display()))?;
    manifest["version"]
        .as_str()
        .map(str::to_string)
        .with_context(|| format!("'{}' has no version field; pass --version", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn archive_names_follow_the_release_pattern() {
        assert_eq!(
            archive_name("EraseMeta", "Chrome", "1.2"),
            "EraseMeta_Chrome_v1.2.zip"
        );
        assert_eq!(
            archive_name("EraseMeta", "Source", "1.2"),
            "EraseMeta_Source_v1.2.zip"
        );
    }

    #[test]
    fn firefox_variant_swaps_its_own_manifest() {
        let spec = build_spec(
            Path::new("/proj"),
            Path::new("/proj/release"),
            "Ext",
            "1.0",
            Variant::Firefox,
        );
        assert_eq!(spec.manifest_source, Some(PathBuf::from("manifest_firefox.json")));
        assert_eq!(spec.manifest_dest_name, "manifest.json");
        assert_eq!(
            spec.output_path,
            PathBuf::from("/proj/release/Ext_Firefox_v1.0.zip")
        );
    }

    #[test]
    fn source_profile_excludes_hidden_dirs_and_archives() {
        let spec = source_spec(Path::new("/proj"), Path::new("/proj"), "Ext", "1.0");
        assert!(spec.exclude_hidden_dirs);
        assert!(spec.exclude_file_patterns.contains(&"*.zip".to_string()));
        assert!(spec.exclude_dirs.contains("node_modules"));
    }

    #[test]
    fn manifest_version_reads_the_version_field() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(
            tmp.path().join("manifest.json"),
            r#"{"manifest_version": 3, "name": "Ext", "version": "1.2"}"#,
        )
        .unwrap();
        assert_eq!(manifest_version(tmp.path()).unwrap(), "1.2");
    }
}
