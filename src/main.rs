use anyhow::Result;
use clap::Parser;
use launcher_icons::{density::DEFAULT_RES_DIR, icon_gen};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "launcher-icons",
    about = "Generate placeholder Android launcher icons for every mipmap density"
)]
struct Args {
    /// Android resource directory holding the mipmap-* folders.
    #[clap(short, long, value_name = "DIR", default_value = DEFAULT_RES_DIR)]
    output: PathBuf,

    /// Label drawn on every icon
    #[clap(long, value_name = "TEXT", default_value = icon_gen::DEFAULT_LABEL)]
    text: String,

    /// Make the corners of ic_launcher_round.png transparent
    #[clap(long)]
    round_mask: bool,

    /// Write the flat 72x72 fallback icon into every density instead of rendering
    #[clap(long, conflicts_with_all = ["text", "round_mask"])]
    restore: bool,

    /// Only print the final confirmation
    #[clap(short, long)]
    quiet: bool,
}

impl From<Args> for icon_gen::Args {
    fn from(args: Args) -> Self {
        Self {
            output: args.output,
            text: args.text,
            round_mask: args.round_mask,
            restore: args.restore,
            quiet: args.quiet,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    icon_gen::generate_icons(args.into())
}
