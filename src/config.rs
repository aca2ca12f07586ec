use serde::Deserialize;
use std::{collections::HashSet, fs, path::Path};

use crate::{
    color::{Color, DEFAULT_BACKGROUND, DEFAULT_FOREGROUND},
    error::{IconError, Result},
};

/// Browser-extension icon sizes produced when nothing else is configured.
pub const DEFAULT_SIZES: [u32; 3] = [16, 48, 128];

/// Sizes above this are allowed but almost certainly a typo.
const LARGE_SIZE_WARN: u32 = 4096;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct IconConfig {
    /// Edge lengths in pixels, written in this order.
    pub sizes: Vec<u32>,
    pub background: Color,
    pub foreground: Color,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            background: DEFAULT_BACKGROUND,
            foreground: DEFAULT_FOREGROUND,
        }
    }
}

impl IconConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let err = |message: String| IconError::Config { path: path.to_path_buf(), message };
        let data = fs::read_to_string(path).map_err(|e| err(format!("read config: {e}")))?;
        ron::from_str(&data).map_err(|e| err(format!("parse RON: {e}")))
    }

    /// Non-fatal problems worth telling the user about. Zero sizes still fail at render time.
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.sizes.is_empty() {
            w.push("sizes is empty; no icons will be written".into());
        }
        let mut seen = HashSet::new();
        for &s in &self.sizes {
            if s == 0 {
                w.push("size 0 present; rendering will fail".into());
            } else if s > LARGE_SIZE_WARN {
                w.push(format!("very large icon size {s}px"));
            }
            if !seen.insert(s) {
                w.push(format!("size {s} listed more than once; icon{s}.png is rewritten"));
            }
        }
        if !self.background.is_opaque() {
            w.push(format!("background {} is not opaque", self.background));
        }
        if self.background == self.foreground {
            w.push(format!("background and foreground are both {}; droplet invisible", self.background));
        }
        w
    }
}
