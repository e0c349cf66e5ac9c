use std::path::Path;

use icongen::{generate, Result, ICONS};

/// Output directory for the generated assets, relative to the working
/// directory.
const OUT_DIR: &str = "icons";

fn main() -> Result {
    let written = generate(Path::new(OUT_DIR))?;

    for (icon, path) in ICONS.iter().zip(&written) {
        println!("Generated {} ({}x{})", path.display(), icon.width, icon.height);
    }
    println!("Icons generated.");

    Ok(())
}
