use crate::profiles::Variant;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "extpack",
    version,
    about = "Packaging toolkit for browser extensions — per-browser zips, source archives, and icon sets"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build one extension package per browser variant
    Build(BuildArgs),
    /// Build a source-distribution archive of the whole project
    Source(SourceArgs),
    /// Render the extension icon set from a logo bitmap
    Icons(IconsArgs),
}

#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    /// Project root containing the manifests and source directories
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Directory the archives are written to (defaults to the project root)
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Product name used in archive file names (defaults to the root directory name)
    #[arg(long)]
    pub product: Option<String>,

    /// Version used in archive file names (defaults to the manifest's `version` field)
    #[arg(long)]
    pub version: Option<String>,

    /// Package only these variants (default: all)
    #[arg(long, value_enum)]
    pub variant: Vec<Variant>,

    /// Load the packaging spec from a YAML file instead of the built-in profile
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct SourceArgs {
    /// Project root to package
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Directory the archive is written to (defaults to the project root)
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Product name used in the archive file name (defaults to the root directory name)
    #[arg(long)]
    pub product: Option<String>,

    /// Version used in the archive file name (defaults to the manifest's `version` field)
    #[arg(long)]
    pub version: Option<String>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct IconsArgs {
    /// Logo bitmap to process
    pub source: PathBuf,

    /// Directory the icons are written to
    #[arg(long, default_value = ".")]
    pub out: PathBuf,

    /// Channel value above which a pixel counts as background
    #[arg(long, default_value_t = extpack_icons::DEFAULT_THRESHOLD)]
    pub threshold: u8,
}
