use crate::config::Config;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

fn resolve_path(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => Config::default_path(),
    }
}

pub fn show(explicit: Option<&Path>) -> Result<()> {
    let path = resolve_path(explicit)?;
    let config = Config::load_from(&path)?;

    if path.exists() {
        println!("# {}", path.display());
    } else {
        println!("# {} (not found, showing defaults)", path.display());
    }
    print!("{}", config.to_toml()?);

    Ok(())
}

pub fn init(explicit: Option<&Path>, force: bool) -> Result<()> {
    let path = resolve_path(explicit)?;

    if path.exists() && !force {
        anyhow::bail!(
            "Config already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    Config::default()
        .save_to(&path)
        .with_context(|| format!("Failed to initialize config at {}", path.display()))?;
    println!("Wrote default config to {}", path.display());

    Ok(())
}
