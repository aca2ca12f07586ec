//! Droplet icon generator
//!
//! Writes `icon16.png`, `icon48.png` and `icon128.png` (blue square, white
//! droplet) into `icons/` next to the crate. Every knob is optional.
//!
//! Example:
//!   cargo run -- --sizes 16,32,48,128 --background "#222222" --out-dir build/icons

use std::path::PathBuf;
use anyhow::{Context, Result};
use clap::Parser;
use log::warn;
use droplet_icons::{write_batch, Color, IconConfig};

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate droplet browser-extension icons", long_about = None)]
struct Args {
    /// Output directory. Defaults to icons/ in the crate source tree, a path fixed
    /// at build time, so installed binaries should pass this explicitly
    #[arg(long)] out_dir: Option<PathBuf>,
    /// Comma separated edge lengths in pixels
    #[arg(long, value_delimiter = ',')] sizes: Option<Vec<u32>>,
    #[arg(long)] background: Option<Color>,
    #[arg(long)] foreground: Option<Color>,
    /// RON file with any of `sizes`, `background`, `foreground`
    #[arg(long)] config: Option<PathBuf>,
}

fn default_out_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("icons")
}

fn resolve(args: Args) -> Result<(IconConfig, PathBuf)> {
    let mut cfg = match &args.config {
        Some(path) => IconConfig::load_from_file(path).with_context(|| format!("load config {path:?}"))?,
        None => IconConfig::default(),
    };
    if let Some(sizes) = args.sizes { cfg.sizes = sizes; }
    if let Some(bg) = args.background { cfg.background = bg; }
    if let Some(fg) = args.foreground { cfg.foreground = fg; }
    Ok((cfg, args.out_dir.unwrap_or_else(default_out_dir)))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let (cfg, out_dir) = resolve(Args::parse())?;
    for w in cfg.validate() { warn!("{w}"); }
    write_batch(&cfg, &out_dir).with_context(|| format!("generate icons in {}", out_dir.display()))?;
    Ok(())
}
