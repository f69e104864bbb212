use std::env;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

/// Copies the workspace config.toml next to the built binary so that
/// `load_config` finds it when the server is started from target/.
fn main() -> Result<(), Box<dyn Error>> {
    println!("cargo:rerun-if-changed=../../config.toml");

    let source = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config.toml");
    if !source.exists() {
        println!("cargo:warning=config.toml not found at {}, using default config", source.display());
        return Ok(());
    }

    let Some(target_dir) = profile_dir()? else {
        println!("cargo:warning=target profile directory not found, config.toml not copied");
        return Ok(());
    };

    fs::copy(&source, target_dir.join("config.toml"))
        .map_err(|e| format!("copy {} -> {}: {}", source.display(), target_dir.display(), e))?;
    Ok(())
}

/// target/<profile>, found by walking up from OUT_DIR (target/<profile>/build/<pkg>/out)
fn profile_dir() -> Result<Option<PathBuf>, env::VarError> {
    let out_dir = PathBuf::from(env::var("OUT_DIR")?);
    let profile = env::var("PROFILE")?;
    Ok(out_dir
        .ancestors()
        .find(|p| p.ends_with(&profile))
        .map(Path::to_path_buf))
}
