//! Archive assembly for browser-extension packages.
//!
//! The assembler takes an explicit [`PackageSpec`] (inclusion list,
//! exclusion rules, optional manifest swap, output path), walks the
//! declared roots with in-place pruning, and writes the surviving files
//! into a deflate-compressed zip under root-relative archive paths.
//!
//! # Modules
//!
//! - [`spec`]: the per-invocation packaging configuration
//! - [`exclude`]: compiled exclusion predicates
//! - [`walk`]: pruned recursive directory traversal
//! - [`assemble`]: the archive writer itself
//!
//! # Example
//!
//! ```no_run
//! use extpack_core::{Assembler, PackageSpec};
//! use std::path::PathBuf;
//!
//! let spec = PackageSpec {
//!     root: PathBuf::from("."),
//!     include_paths: vec![PathBuf::from("src"), PathBuf::from("LICENSE")],
//!     exclude_dirs: ["__pycache__".into(), ".git".into()].into(),
//!     exclude_hidden_dirs: false,
//!     exclude_file_patterns: vec!["*.pyc".into()],
//!     manifest_source: Some(PathBuf::from("manifest_firefox.json")),
//!     manifest_dest_name: "manifest.json".into(),
//!     output_path: PathBuf::from("pkg_firefox.zip"),
//! };
//! let report = Assembler::new(&spec).unwrap().run().unwrap();
//! println!("{} entries, {} skipped", report.entries.len(), report.skipped.len());
//! ```

pub mod assemble;
pub mod error;
pub mod exclude;
pub mod spec;
pub mod walk;

pub use assemble::{AssembleReport, Assembler};
pub use error::PackError;
pub use exclude::ExcludeRules;
pub use spec::PackageSpec;
