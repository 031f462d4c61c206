use anyhow::Result;
use clap::Parser;
use extension_icons::{convert, manifest};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "convert-icon",
    about = "Resize a source image into the extension's manifest icon sizes"
)]
struct Args {
    /// Path to the source image (PNG recommended).
    #[clap(value_name = "INPUT")]
    input: PathBuf,

    /// Output directory.
    #[clap(short, long, value_name = "DIR", default_value = manifest::DEFAULT_OUTPUT_DIR)]
    output: PathBuf,

    /// Custom icon sizes to generate. When set, only these sizes are generated.
    #[clap(short, long, value_delimiter = ',', value_name = "SIZES")]
    sizes: Option<Vec<u32>>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let sizes = args
        .sizes
        .unwrap_or_else(|| manifest::MANIFEST_SIZES.to_vec());

    convert::convert_icon(&args.input, &args.output, &sizes)
}
