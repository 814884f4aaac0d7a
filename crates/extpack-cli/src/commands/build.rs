use crate::args::BuildArgs;
use crate::profiles::{self, Variant};
use anyhow::Result;
use extpack_core::PackageSpec;

pub fn run(args: &BuildArgs) -> Result<()> {
    if let Some(config) = &args.config {
        let spec = PackageSpec::load(config)?;
        return super::assemble(&spec);
    }

    let out_dir = args.out.as_deref().unwrap_or(&args.root);
    let product = match &args.product {
        Some(p) => p.clone(),
        None => profiles::product_name(&args.root)?,
    };
    let version = match &args.version {
        Some(v) => v.clone(),
        None => profiles::manifest_version(&args.root)?,
    };
    let variants: &[Variant] = if args.variant.is_empty() {
        &Variant::ALL
    } else {
        &args.variant
    };

    for &variant in variants {
        let spec = profiles::build_spec(&args.root, out_dir, &product, &version, variant);
        super::assemble(&spec)?;
    }
    Ok(())
}
