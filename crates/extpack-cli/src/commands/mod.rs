pub mod build;
pub mod icons;
pub mod source;

use crate::args::{Cli, Command};
use crate::exit_codes;
use anyhow::Result;
use extpack_core::{Assembler, PackageSpec};

pub fn dispatch(cli: Cli) -> Result<i32> {
    match cli.cmd {
        Command::Build(args) => build::run(&args)?,
        Command::Source(args) => source::run(&args)?,
        Command::Icons(args) => icons::run(&args)?,
    }
    Ok(exit_codes::SUCCESS)
}

/// Run one assembly and report it. Skipped optional inputs have already
/// been warned about by the assembler and do not fail the run.
pub(crate) fn assemble(spec: &PackageSpec) -> Result<()> {
    println!("Creating {}...", spec.output_path.display());
    let report = Assembler::new(spec)?.run()?;
    println!(
        "Done: {} ({} entries, {} skipped)",
        spec.output_path.display(),
        report.entries.len(),
        report.skipped.len()
    );
    Ok(())
}
