//! The archive assembler.
//!
//! Queues the manifest swap first, then every include path in declared
//! order, then writes the queue to a deflate zip in one pass. Missing
//! optional inputs degrade to a warning and are recorded in the report;
//! anything else is fatal and the partially-written archive is removed
//! before the error propagates.

use crate::error::PackError;
use crate::exclude::ExcludeRules;
use crate::spec::PackageSpec;
use crate::walk::{relative_to, walk_dir};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Component, Path, PathBuf};
use tracing::{info, warn};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// One (source on disk, destination inside the archive) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    pub source: PathBuf,
    pub dest: String,
}

/// Outcome of one assembly run.
#[derive(Debug, Clone, Default)]
pub struct AssembleReport {
    /// Destination paths written, in archive order.
    pub entries: Vec<String>,
    /// Declared inputs that did not exist on disk and were skipped.
    pub skipped: Vec<PathBuf>,
}

/// Assembles one archive from a [`PackageSpec`].
pub struct Assembler<'a> {
    spec: &'a PackageSpec,
    rules: ExcludeRules,
}

impl<'a> Assembler<'a> {
    /// Compile the spec's exclusion rules. Fails on an invalid pattern.
    pub fn new(spec: &'a PackageSpec) -> Result<Self, PackError> {
        let rules = ExcludeRules::compile(
            &spec.exclude_dirs,
            spec.exclude_hidden_dirs,
            &spec.exclude_file_patterns,
        )?;
        Ok(Self { spec, rules })
    }

    /// Run the full assembly: queue, then write.
    pub fn run(&self) -> Result<AssembleReport, PackError> {
        let mut report = AssembleReport::default();
        let entries = self.collect(&mut report)?;

        info!(
            archive = %self.spec.output_path.display(),
            entries = entries.len(),
            "writing archive"
        );
        if let Err(e) = write_archive(&self.spec.output_path, &entries) {
            // Never leave a corrupt package behind.
            let _ = std::fs::remove_file(&self.spec.output_path);
            return Err(e);
        }

        report.entries = entries.into_iter().map(|e| e.dest).collect();
        Ok(report)
    }

    /// Build the entry queue: manifest swap first, then include paths in
    /// declared order. Fails fast on a destination collision.
    fn collect(&self, report: &mut AssembleReport) -> Result<Vec<ArchiveEntry>, PackError> {
        let mut queue: Vec<ArchiveEntry> = Vec::new();
        let mut seen: BTreeMap<String, PathBuf> = BTreeMap::new();

        if let Some(manifest) = &self.spec.manifest_source {
            let source = self.spec.resolve(manifest);
            if source.is_file() {
                push_entry(
                    &mut queue,
                    &mut seen,
                    source,
                    self.spec.manifest_dest_name.clone(),
                )?;
            } else {
                warn!(manifest = %source.display(), "manifest variant not found, skipping");
                report.skipped.push(manifest.clone());
            }
        }

        for include in &self.spec.include_paths {
            let source = self.spec.resolve(include);
            if source.is_file() {
                let dest = archive_path(&relative_to(&source, &self.spec.root)?);
                push_entry(&mut queue, &mut seen, source, dest)?;
            } else if source.is_dir() {
                for walked in walk_dir(&source, &self.spec.root, &self.rules)? {
                    let dest = archive_path(&walked.relative);
                    push_entry(&mut queue, &mut seen, walked.source, dest)?;
                }
            } else {
                warn!(path = %source.display(), "include path not found, skipping");
                report.skipped.push(include.clone());
            }
        }

        Ok(queue)
    }
}

fn push_entry(
    queue: &mut Vec<ArchiveEntry>,
    seen: &mut BTreeMap<String, PathBuf>,
    source: PathBuf,
    dest: String,
) -> Result<(), PackError> {
    if let Some(first) = seen.get(&dest) {
        return Err(PackError::DuplicateEntry {
            dest,
            first: first.clone(),
            second: source,
        });
    }
    seen.insert(dest.clone(), source.clone());
    queue.push(ArchiveEntry { source, dest });
    Ok(())
}

/// Archive-internal path with `/` separators regardless of platform.
fn archive_path(relative: &Path) -> String {
    let mut out = String::new();
    for component in relative.components() {
        if let Component::Normal(part) = component {
            if !out.is_empty() {
                out.push('/');
            }
            out.push_str(&part.to_string_lossy());
        }
    }
    out
}

fn write_archive(output: &Path, entries: &[ArchiveEntry]) -> Result<(), PackError> {
    let file = File::create(output).map_err(|e| PackError::Output {
        path: output.to_path_buf(),
        message: e.to_string(),
    })?;
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .unix_permissions(0o644);

    for entry in entries {
        zip.start_file(entry.dest.as_str(), options)
            .map_err(|e| PackError::Output {
                path: output.to_path_buf(),
                message: e.to_string(),
            })?;
        let mut input = File::open(&entry.source).map_err(|e| PackError::io(&entry.source, e))?;
        io::copy(&mut input, &mut zip).map_err(|e| PackError::io(&entry.source, e))?;
    }

    let mut file = zip.finish().map_err(|e| PackError::Output {
        path: output.to_path_buf(),
        message: e.to_string(),
    })?;
    file.flush().map_err(|e| PackError::io(output, e))?;
    Ok(())
}
