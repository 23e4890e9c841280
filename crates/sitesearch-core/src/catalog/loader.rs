//! Reads content collections from JSON on disk.
//!
//! Two layouts are accepted:
//! - a single file holding an object keyed by collection name
//!   (`{"projects": [...], "team": [...]}`)
//! - a directory of `<collection>.json` files, each holding an array
//!
//! Individual entries that do not deserialize are skipped with a warning so
//! one sparse or hand-edited record never hides the rest of the catalog.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use super::CatalogSource;
use crate::error::{Error, Result};
use crate::types::ContentKind;

/// Load a catalog from a file or a directory of collection files.
pub fn load_catalog(path: &Path) -> Result<CatalogSource> {
    if path.is_dir() {
        load_dir(path)
    } else if path.is_file() {
        load_file(path)
    } else {
        Err(Error::NotFound(path.display().to_string()))
    }
}

/// Load a single JSON object keyed by collection name.
pub fn load_file(path: &Path) -> Result<CatalogSource> {
    let raw = read(path)?;
    let collections: serde_json::Map<String, Value> =
        serde_json::from_str(&raw).map_err(|source| Error::Json { path: path.to_path_buf(), source })?;
    let mut source = CatalogSource::default();
    for (name, value) in collections {
        let kind = match name.parse::<ContentKind>() {
            Ok(kind) => kind,
            Err(_) => {
                warn!(collection = %name, file = %path.display(), "skipping unknown collection");
                continue;
            }
        };
        let Value::Array(entries) = value else {
            warn!(collection = %name, file = %path.display(), "collection is not an array; skipping");
            continue;
        };
        push_entries(&mut source, kind, entries, path);
    }
    debug!(entries = source.len(), file = %path.display(), "loaded catalog file");
    Ok(source)
}

/// Load every `<collection>.json` file under `dir`, in sorted path order.
pub fn load_dir(dir: &Path) -> Result<CatalogSource> {
    let mut source = CatalogSource::default();
    for path in list_json_files(dir) {
        let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
        let kind = match stem.parse::<ContentKind>() {
            Ok(kind) => kind,
            Err(_) => {
                warn!(file = %path.display(), "file name is not a collection name; skipping");
                continue;
            }
        };
        let raw = read(&path)?;
        let value: Value =
            serde_json::from_str(&raw).map_err(|source| Error::Json { path: path.clone(), source })?;
        let Value::Array(entries) = value else {
            warn!(collection = %kind.collection_name(), file = %path.display(), "collection is not an array; skipping");
            continue;
        };
        push_entries(&mut source, kind, entries, &path);
    }
    debug!(entries = source.len(), dir = %dir.display(), "loaded catalog directory");
    Ok(source)
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::Io { path: path.to_path_buf(), source })
}

fn list_json_files(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| p.extension().and_then(|s| s.to_str()) == Some("json"))
        .collect();
    files.sort();
    files
}

fn push_entries(source: &mut CatalogSource, kind: ContentKind, entries: Vec<Value>, path: &Path) {
    match kind {
        ContentKind::Gallery => source.gallery.extend(parse_entries(entries, kind, path)),
        ContentKind::Team => source.team.extend(parse_entries(entries, kind, path)),
        ContentKind::Content => source.content.extend(parse_entries(entries, kind, path)),
        ContentKind::Service => source.services.extend(parse_entries(entries, kind, path)),
        ContentKind::About => source.about.extend(parse_entries(entries, kind, path)),
        ContentKind::Project => source.projects.extend(parse_entries(entries, kind, path)),
    }
}

fn parse_entries<T: DeserializeOwned>(entries: Vec<Value>, kind: ContentKind, path: &Path) -> Vec<T> {
    entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value(entry) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                warn!(%kind, index, file = %path.display(), error = %e, "skipping malformed entry");
                None
            }
        })
        .collect()
}
