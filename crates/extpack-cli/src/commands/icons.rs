use crate::args::IconsArgs;
use anyhow::{Context, Result};
use extpack_icons::IconRenderer;

pub fn run(args: &IconsArgs) -> Result<()> {
    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("cannot create output directory '{}'", args.out.display()))?;

    let renderer = IconRenderer::new().with_threshold(args.threshold);
    let written = renderer.render(&args.source, &args.out)?;
    for path in &written {
        println!("Saved {}", path.display());
    }
    Ok(())
}
