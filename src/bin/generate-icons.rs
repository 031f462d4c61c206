use anyhow::Result;
use clap::Parser;
use extension_icons::{generate, manifest};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "generate-icons",
    about = "Draw placeholder extension icons (red circle with a white slash)"
)]
struct Args {
    /// Output directory.
    #[clap(short, long, value_name = "DIR", default_value = manifest::DEFAULT_OUTPUT_DIR)]
    output: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    generate::generate_icons(&args.output)
}
