//! Batch writer: one `icon<size>.png` per configured size.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::info;

use crate::{
    config::IconConfig,
    error::{IconError, Result},
    render::render,
};

pub fn icon_file_name(size: u32) -> String {
    format!("icon{size}.png")
}

/// Render every size in `cfg` into `out_dir`, creating it if needed.
///
/// Existing `icon<size>.png` files are overwritten; anything else in the
/// directory is left alone. Stops at the first failure without removing
/// icons already written. Returns the written paths in order.
pub fn write_batch(cfg: &IconConfig, out_dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir).map_err(|source| IconError::CreateDir { path: out_dir.to_path_buf(), source })?;
    let mut written = Vec::with_capacity(cfg.sizes.len());
    for &size in &cfg.sizes {
        let img = render(size, cfg.background, cfg.foreground)?;
        let path = out_dir.join(icon_file_name(size));
        img.save(&path).map_err(|source| IconError::Write { path: path.clone(), source })?;
        info!("Generated {}", path.display());
        written.push(path);
    }
    Ok(written)
}

/// [`write_batch`] with the default colors.
pub fn write_all(sizes: &[u32], out_dir: &Path) -> Result<Vec<PathBuf>> {
    let cfg = IconConfig { sizes: sizes.to_vec(), ..IconConfig::default() };
    write_batch(&cfg, out_dir)
}
