//! The icon asset table and generation routine.

use std::fs;
use std::path::{Path, PathBuf};

use crate::encoder::{encode, Result};
use crate::Rgb;

/// Fill color shared by all generated icons.
pub const ICON_COLOR: Rgb = Rgb::new(0x42, 0x85, 0xF4);

/// One icon asset: dimensions, fill color and output file name.
#[derive(Debug, Clone, Copy)]
pub struct IconSpec {
    pub width: u32,
    pub height: u32,
    pub color: Rgb,
    pub file_name: &'static str,
}

/// The generated set, in the conventional browser-extension sizes. File
/// names encode the pixel dimensions.
pub const ICONS: [IconSpec; 3] = [
    IconSpec {
        width: 16,
        height: 16,
        color: ICON_COLOR,
        file_name: "icon16.png",
    },
    IconSpec {
        width: 48,
        height: 48,
        color: ICON_COLOR,
        file_name: "icon48.png",
    },
    IconSpec {
        width: 128,
        height: 128,
        color: ICON_COLOR,
        file_name: "icon128.png",
    },
];

/// Writes every icon in [`ICONS`] into `out_dir`, creating the directory
/// if it is missing. Returns the written paths in table order.
///
/// Each file is encoded fully in memory and written with a single
/// `fs::write`; no partial file is ever left behind. Existing files are
/// overwritten. The first failure aborts the run.
pub fn generate(out_dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)?;

    let mut written = Vec::with_capacity(ICONS.len());
    for icon in &ICONS {
        let data = encode(icon.width, icon.height, icon.color)?;
        let path = out_dir.join(icon.file_name);
        fs::write(&path, &data)?;
        written.push(path);
    }
    Ok(written)
}
