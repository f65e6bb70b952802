use crate::io::atomic_write_str;
use crate::paths::{ConfigError, VitrinaPaths};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::ErrorKind;

/// Escritura con toml_edit para preservar los comentarios del usuario.
use toml_edit::{DocumentMut, Item};

pub trait ConfigBackend {
  /// Lee una sección. `Ok(None)` si el archivo o la sección no existen.
  fn load_section_opt<T: DeserializeOwned>(&self, section: &str) -> Result<Option<T>, ConfigError>;

  fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError>;

  fn load_section<T: DeserializeOwned>(&self, section: &str) -> Result<T, ConfigError> {
    self
      .load_section_opt(section)?
      .ok_or_else(|| ConfigError::Other(format!("missing section [{section}]")))
  }

  fn load_section_with_default<T>(&self, section: &str) -> Result<T, ConfigError>
  where
    T: DeserializeOwned + Default,
  {
    Ok(self.load_section_opt(section)?.unwrap_or_default())
  }
}

#[derive(Debug, Clone)]
pub struct TomlConfigBackend {
  paths: VitrinaPaths,
}

impl TomlConfigBackend {
  pub fn new(paths: VitrinaPaths) -> Self {
    Self { paths }
  }

  pub fn paths(&self) -> &VitrinaPaths {
    &self.paths
  }
}

impl ConfigBackend for TomlConfigBackend {
  fn load_section_opt<T: DeserializeOwned>(&self, section: &str) -> Result<Option<T>, ConfigError> {
    let path = self.paths.config_file();
    let content = match fs::read_to_string(&path) {
      Ok(c) => c,
      Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
      Err(e) => return Err(e.into()),
    };

    let table: toml::Table = toml::from_str(&content)?;

    let Some(value) = table.get(section) else {
      return Ok(None);
    };

    let t: T = value
      .clone()
      .try_into()
      .map_err(|e| ConfigError::Other(format!("decode section [{section}]: {e}")))?;

    Ok(Some(t))
  }

  fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError> {
    let path = self.paths.config_file();

    // 1) Leer el documento actual o empezar uno vacío.
    let mut doc: DocumentMut = match fs::read_to_string(&path) {
      Ok(content) => content
        .parse::<DocumentMut>()
        .map_err(|e| ConfigError::Other(format!("parse toml_edit doc: {e}")))?,
      Err(e) if e.kind() == ErrorKind::NotFound => DocumentMut::new(),
      Err(e) => return Err(e.into()),
    };

    // 2) Serializar la sección con `toml` (serde). Sale sin cabecera:
    //      "foo = 1\nbar = 2\n"
    let section_str = toml::to_string(value)
      .map_err(|e| ConfigError::Other(format!("encode section [{section}]: {e}")))?;

    // 3) Convertirla en `Item` para insertarla bajo su cabecera.
    let section_item: Item = section_str
      .parse::<DocumentMut>()
      .map_err(|e| ConfigError::Other(format!("parse section as doc: {e}")))?
      .into_item();

    // 4) Reemplazar solo esta sección; el resto del archivo queda intacto.
    doc[section] = section_item;

    atomic_write_str(&path, &doc.to_string())?;

    Ok(())
  }
}
