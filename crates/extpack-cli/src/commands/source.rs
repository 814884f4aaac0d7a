use crate::args::SourceArgs;
use crate::profiles;
use anyhow::Result;

pub fn run(args: &SourceArgs) -> Result<()> {
    let out_dir = args.out.as_deref().unwrap_or(&args.root);
    let product = match &args.product {
        Some(p) => p.clone(),
        None => profiles::product_name(&args.root)?,
    };
    let version = match &args.version {
        Some(v) => v.clone(),
        None => profiles::manifest_version(&args.root)?,
    };

    let spec = profiles::source_spec(&args.root, out_dir, &product, &version);
    super::assemble(&spec)
}
