use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::shared::config::{resolve_path, Config};

/// Create the uploads directory (profile pictures) if it does not exist yet
pub fn ensure_uploads_dir(config: &Config) -> Result<PathBuf> {
    let dir = resolve_path(&config.uploads.dir);
    let profiles = dir.join("profiles");

    if !profiles.exists() {
        std::fs::create_dir_all(&profiles)
            .with_context(|| format!("cannot create uploads directory {}", profiles.display()))?;
        tracing::info!("Created uploads directory: {}", profiles.display());
    }

    Ok(dir)
}
