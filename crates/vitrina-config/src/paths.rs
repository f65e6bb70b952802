use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
  #[error("toml error: {0}")]
  Toml(#[from] toml::de::Error),
  #[error("directories error: could not determine home directory")]
  Directories,
  #[error("other: {0}")]
  Other(String),
}

#[derive(Debug, Clone)]
pub struct VitrinaPaths {
  pub base_dir: PathBuf,
  pub config_dir: PathBuf,
}

impl VitrinaPaths {
  /// Rutas del sistema, o bajo `VITRINA_BASE_DIR` si está definida (modo portable).
  pub fn new() -> Result<Self, ConfigError> {
    let paths = if let Ok(env_base) = std::env::var("VITRINA_BASE_DIR") {
      Self::at(env_base)
    } else {
      let proj_dirs = ProjectDirs::from("com", "vitrina", "vitrina").ok_or(ConfigError::Directories)?;
      Self {
        base_dir: proj_dirs.config_dir().to_path_buf(),
        config_dir: proj_dirs.config_dir().to_path_buf(),
      }
    };

    std::fs::create_dir_all(&paths.config_dir)?;

    Ok(paths)
  }

  /// Layout portable bajo un directorio base. No toca el disco.
  pub fn at(base: impl AsRef<Path>) -> Self {
    let base = base.as_ref().to_path_buf();
    Self { config_dir: base.join("config"), base_dir: base }
  }

  pub fn config_file(&self) -> PathBuf {
    self.config_dir.join("vitrina.toml")
  }
}
