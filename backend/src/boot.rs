use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{error, info};
use vitrina_core::domain::ContentModel;

/// Fatal failures while loading the content document. Nothing is rendered
/// after any of these.
#[derive(Debug, Error)]
pub enum BootError {
  #[error("cannot read content document {path}: {source}")]
  Read {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("malformed content document: {0}")]
  Parse(#[from] serde_json::Error),

  #[error("content document is empty")]
  Empty,
}

/// Parses an in-memory content document.
pub fn parse_content(raw: &str) -> Result<ContentModel, BootError> {
  if raw.trim().is_empty() {
    return Err(BootError::Empty);
  }
  Ok(serde_json::from_str(raw)?)
}

/// Reads and parses the content document at `path`. Failures are logged here
/// so every caller gets the diagnostic.
pub fn load_content(path: &Path) -> Result<ContentModel, BootError> {
  let result = std::fs::read_to_string(path)
    .map_err(|source| BootError::Read { path: path.to_path_buf(), source })
    .and_then(|raw| parse_content(&raw));

  match &result {
    Ok(content) => info!(path = %path.display(), releases = content.releases.len(), "content loaded"),
    Err(e) => error!(path = %path.display(), error = %e, "content boot failed"),
  }
  result
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  #[test]
  fn empty_and_blank_documents_are_rejected() {
    assert!(matches!(parse_content(""), Err(BootError::Empty)));
    assert!(matches!(parse_content(" \n\t"), Err(BootError::Empty)));
  }

  #[test]
  fn malformed_json_is_a_parse_error() {
    assert!(matches!(parse_content("{\"artist\": "), Err(BootError::Parse(_))));
  }

  #[test]
  fn missing_file_is_a_read_error() {
    let tmp = tempdir().unwrap();
    let err = load_content(&tmp.path().join("content.json")).unwrap_err();
    assert!(matches!(err, BootError::Read { .. }));
  }

  #[test]
  fn minimal_document_loads() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("content.json");
    std::fs::write(&path, r#"{"artist": {"name": "Nadia Vega"}}"#).unwrap();

    let content = load_content(&path).unwrap();
    assert_eq!(content.artist.name, "Nadia Vega");
    assert!(content.releases.is_empty());
  }
}
