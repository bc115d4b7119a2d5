//! Android display-density buckets and the launcher icon layout inside `res/`.
//!
//! Each bucket maps to a `mipmap-*` resource folder holding the square and the
//! round launcher icon at the bucket's pixel size.

use std::path::{Path, PathBuf};

/// Default resource directory, relative to the project root.
pub const DEFAULT_RES_DIR: &str = "android/app/src/main/res";

/// File name of the square launcher icon.
pub const SQUARE_ICON: &str = "ic_launcher.png";

/// File name of the round launcher icon.
pub const ROUND_ICON: &str = "ic_launcher_round.png";

/// A single density bucket
///
/// `size` is both the width and the height of the icons written for the bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Density {
    /// Resource folder name (e.g. "mipmap-hdpi")
    pub label: &'static str,

    /// Edge length of the icon in pixels
    pub size: u32,
}

/// Launcher icon densities, smallest first.
pub const DENSITIES: &[Density] = &[
    Density::new("mipmap-mdpi", 48),
    Density::new("mipmap-hdpi", 72),
    Density::new("mipmap-xhdpi", 96),
    Density::new("mipmap-xxhdpi", 144),
    Density::new("mipmap-xxxhdpi", 192),
];

impl Density {
    pub const fn new(label: &'static str, size: u32) -> Self {
        Self { label, size }
    }

    /// Folder holding this density's icons under `res_dir`
    pub fn folder(&self, res_dir: &Path) -> PathBuf {
        res_dir.join(self.label)
    }

    pub fn square_icon_path(&self, res_dir: &Path) -> PathBuf {
        self.folder(res_dir).join(SQUARE_ICON)
    }

    pub fn round_icon_path(&self, res_dir: &Path) -> PathBuf {
        self.folder(res_dir).join(ROUND_ICON)
    }
}

/// Look up a density by its folder label
pub fn find(label: &str) -> Option<Density> {
    DENSITIES.iter().copied().find(|d| d.label == label)
}
