//! First-run materialization of the shipped configuration and theme files.
//!
//! The defaults are embedded in the binary; `materialize` copies them into
//! the user config directory. Existing files are never overwritten, so a
//! re-run of `--init` cannot clobber user edits.

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::config::{config_dir, config_file_path, theme_dir};

/// Shipped configuration template, with a placeholder API key.
pub const CONFIG_TEMPLATE: &str = include_str!("../assets/config.toml");

/// Shipped themes, written into the user theme directory on first run.
pub const THEMES: &[(&str, &str)] = &[
    ("sunny_dynamic", include_str!("../assets/themes/sunny_dynamic.toml")),
    ("minimal", include_str!("../assets/themes/minimal.toml")),
    ("cyberpunk", include_str!("../assets/themes/cyberpunk.toml")),
];

/// Create the config directory layout and write every missing default file.
///
/// Postcondition: a configuration document and at least the default theme
/// document exist at the expected user-writable paths.
pub fn materialize() -> Result<()> {
    materialize_at(&config_dir()?, &config_file_path()?, &theme_dir()?)
}

fn materialize_at(config_dir: &Path, config_file: &Path, theme_dir: &Path) -> Result<()> {
    fs::create_dir_all(config_dir)
        .with_context(|| format!("Failed to create config directory: {}", config_dir.display()))?;
    fs::create_dir_all(theme_dir)
        .with_context(|| format!("Failed to create theme directory: {}", theme_dir.display()))?;

    write_if_absent(config_file, CONFIG_TEMPLATE)?;

    for (name, contents) in THEMES {
        write_if_absent(&theme_dir.join(format!("{name}.toml")), contents)?;
    }

    Ok(())
}

fn write_if_absent(path: &Path, contents: &str) -> Result<()> {
    if path.exists() {
        return Ok(());
    }
    fs::write(path, contents)
        .with_context(|| format!("Failed to write default file: {}", path.display()))
}
