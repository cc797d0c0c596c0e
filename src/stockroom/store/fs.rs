use super::{DocumentStore, Fields, Snapshot};
use crate::error::{CatalogError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

const DOC_EXT: &str = "json";

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn collection_dir(&self, collection: &str) -> Result<PathBuf> {
        Ok(self.root.join(escape_id(collection)?))
    }

    fn document_path(&self, collection: &str, id: &str) -> Result<PathBuf> {
        let file = format!("{}.{}", escape_id(id)?, DOC_EXT);
        Ok(self.collection_dir(collection)?.join(file))
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(CatalogError::Io)?;
        }
        Ok(())
    }

    fn read_document(&self, path: &Path) -> Result<Option<Fields>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(CatalogError::Io)?;
        let fields: Fields =
            serde_json::from_str(&content).map_err(CatalogError::Serialization)?;
        Ok(Some(fields))
    }

    fn write_document(&self, collection: &str, id: &str, fields: &Fields) -> Result<()> {
        let dir = self.collection_dir(collection)?;
        self.ensure_dir(&dir)?;

        let path = self.document_path(collection, id)?;
        let content = serde_json::to_string_pretty(fields).map_err(CatalogError::Serialization)?;

        // Write beside the target then rename, so readers never see half a document
        let tmp_file = dir.join(format!(".doc-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(CatalogError::Io)?;
        commit_tmp(&tmp_file, &path)
    }
}

impl DocumentStore for FileStore {
    fn get(&self, collection: &str, id: &str) -> Result<Option<Fields>> {
        debug!(collection, id, "get document");
        let path = self.document_path(collection, id)?;
        self.read_document(&path)
    }

    fn set(&mut self, collection: &str, id: &str, fields: Fields) -> Result<()> {
        debug!(collection, id, "set document");
        self.write_document(collection, id, &fields)
    }

    fn update(&mut self, collection: &str, id: &str, fields: Fields) -> Result<()> {
        debug!(collection, id, "update document");
        let path = self.document_path(collection, id)?;
        let mut existing =
            self.read_document(&path)?
                .ok_or_else(|| CatalogError::DocumentNotFound {
                    collection: collection.to_string(),
                    id: id.to_string(),
                })?;
        existing.extend(fields);
        self.write_document(collection, id, &existing)
    }

    fn list_all(&self, collection: &str) -> Result<Vec<Snapshot>> {
        debug!(collection, "list documents");
        let dir = self.collection_dir(collection)?;
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut snapshots = Vec::new();
        for entry in fs::read_dir(&dir).map_err(CatalogError::Io)? {
            let path = entry.map_err(CatalogError::Io)?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(DOC_EXT) {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if stem.starts_with('.') {
                continue;
            }
            let id = unescape_id(stem)?;
            if let Some(data) = self.read_document(&path)? {
                snapshots.push(Snapshot { id, data });
            }
        }

        snapshots.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(snapshots)
    }
}

/// Moves a finished tmp file over its target, removing it if the move fails.
fn commit_tmp(tmp_file: &Path, target: &Path) -> Result<()> {
    fs::rename(tmp_file, target).map_err(|e| {
        let _ = fs::remove_file(tmp_file);
        CatalogError::Io(e)
    })
}

/// Maps a document id onto a safe file name: ASCII letters, digits, `-` and `_`
/// pass through, every other byte becomes `%XX`.
pub fn escape_id(id: &str) -> Result<String> {
    if id.is_empty() {
        return Err(CatalogError::Store("Document id cannot be empty".to_string()));
    }
    let mut out = String::with_capacity(id.len());
    for byte in id.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_' {
            out.push(byte as char);
        } else {
            out.push_str(&format!("%{:02X}", byte));
        }
    }
    Ok(out)
}

pub fn unescape_id(name: &str) -> Result<String> {
    let invalid = || CatalogError::Store(format!("Malformed document file name: {}", name));
    let bytes = name.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = name.get(i + 1..i + 3).ok_or_else(invalid)?;
            out.push(u8::from_str_radix(hex, 16).map_err(|_| invalid())?);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(out).map_err(|_| invalid())
}
