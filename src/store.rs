//! Comic library document store.
//!
//! The filesystem is the database: the library root holds one directory per
//! comic, named by the comic's id. Each directory contains a `comic.json`
//! document with the metadata, the row-major panel artifacts, and the cover
//! thumbnail:
//!
//! ```text
//! comics/
//! ├── config.toml                  # Library configuration (optional)
//! ├── 20260805T101530123Z/
//! │   ├── comic.json               # Title, rating, favorite flag, timestamps
//! │   ├── cover.jpg                # Copy of the first panel
//! │   ├── panel-000.jpg            # Panels in row-major order
//! │   ├── panel-001.jpg
//! │   └── ...
//! └── 20260807T183002847Z/
//!     └── ...
//! ```
//!
//! ## Document keys
//!
//! Ids are derived from the creation instant (UTC, millisecond precision),
//! so a plain descending sort on the id lists the library newest-first. A
//! same-millisecond collision gets a numeric suffix.
//!
//! ## Duplicate detection
//!
//! Every document records the SHA-256 of the source page bytes. Importing a
//! page whose hash already exists in the library is rejected unless forced,
//! so re-running an import doesn't silently create twins.

use crate::segment::SegmentationResult;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the metadata document within a comic directory.
const COMIC_DOC: &str = "comic.json";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("comic not found: {0}")]
    NotFound(String),
    #[error("page already imported as comic {0}")]
    Duplicate(String),
    #[error("rating must be 1-5 (got {0})")]
    RatingOutOfRange(u8),
}

/// One comic's metadata document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comic {
    /// Unique key; also the comic's directory name under the library root.
    pub id: String,
    pub title: String,
    /// Publication date as entered by the user, free-form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publish_date: Option<String>,
    pub is_favorite: bool,
    /// 1-5 stars; 0 means unrated.
    pub rating: u8,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
    /// SHA-256 of the imported page bytes, for duplicate detection.
    pub source_hash: String,
    /// Panel artifact filenames relative to the comic directory, row-major.
    pub panels: Vec<String>,
    /// Cover artifact filename relative to the comic directory. Absent when
    /// the panel sequence was empty; callers display a placeholder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
}

/// Metadata for a comic about to be imported.
#[derive(Debug, Clone)]
pub struct NewComic {
    pub title: String,
    pub publish_date: Option<String>,
}

/// A comic library rooted at a directory.
pub struct Library {
    root: PathBuf,
}

impl Library {
    /// Open (creating if needed) the library at `root`.
    pub fn open(root: &Path) -> Result<Self, StoreError> {
        fs::create_dir_all(root)?;
        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    /// Absolute path of a comic's directory.
    pub fn comic_dir(&self, id: &str) -> PathBuf {
        self.root.join(id)
    }

    /// Persist a segmented page as a new comic.
    ///
    /// Writes the panel artifacts and cover verbatim, then the metadata
    /// document. With `force` a page whose hash is already in the library
    /// is imported anyway.
    pub fn import(
        &self,
        new: NewComic,
        page_bytes: &[u8],
        result: &SegmentationResult,
        extension: &str,
        force: bool,
    ) -> Result<Comic, StoreError> {
        let source_hash = hash_bytes(page_bytes);
        if !force
            && let Some(existing) = self.find_by_hash(&source_hash)?
        {
            return Err(StoreError::Duplicate(existing.id));
        }

        let id = self.claim_id();
        let dir = self.comic_dir(&id);
        fs::create_dir_all(&dir)?;

        let mut panels = Vec::with_capacity(result.panels.len());
        for panel in &result.panels {
            let name = format!("panel-{:03}.{extension}", panel.index);
            fs::write(dir.join(&name), &panel.bytes)?;
            panels.push(name);
        }

        let cover = match result.cover() {
            Some(bytes) => {
                let name = format!("cover.{extension}");
                fs::write(dir.join(&name), bytes)?;
                Some(name)
            }
            None => None,
        };

        let comic = Comic {
            id,
            title: new.title,
            publish_date: new.publish_date,
            is_favorite: false,
            rating: 0,
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            source_hash,
            panels,
            cover,
        };
        self.save(&comic)?;
        Ok(comic)
    }

    /// Load one comic by id.
    pub fn get(&self, id: &str) -> Result<Comic, StoreError> {
        let doc_path = self.comic_dir(id).join(COMIC_DOC);
        if !doc_path.exists() {
            return Err(StoreError::NotFound(id.to_string()));
        }
        let content = fs::read_to_string(doc_path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// All comics, newest first.
    pub fn list(&self) -> Result<Vec<Comic>, StoreError> {
        let mut comics = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            let doc_path = entry.path().join(COMIC_DOC);
            if !doc_path.exists() {
                // Not a comic directory (config.toml, stray files).
                continue;
            }
            let content = fs::read_to_string(doc_path)?;
            comics.push(serde_json::from_str::<Comic>(&content)?);
        }
        // Ids embed the creation instant, so id order is chronological.
        comics.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(comics)
    }

    /// Favorited comics, newest first.
    pub fn favorites(&self) -> Result<Vec<Comic>, StoreError> {
        Ok(self.list()?.into_iter().filter(|c| c.is_favorite).collect())
    }

    /// Set or clear the favorite flag.
    pub fn set_favorite(&self, id: &str, is_favorite: bool) -> Result<Comic, StoreError> {
        let mut comic = self.get(id)?;
        comic.is_favorite = is_favorite;
        self.save(&comic)?;
        Ok(comic)
    }

    /// Set the star rating (1-5).
    pub fn set_rating(&self, id: &str, rating: u8) -> Result<Comic, StoreError> {
        if !(1..=5).contains(&rating) {
            return Err(StoreError::RatingOutOfRange(rating));
        }
        let mut comic = self.get(id)?;
        comic.rating = rating;
        self.save(&comic)?;
        Ok(comic)
    }

    /// Replace the title.
    pub fn set_title(&self, id: &str, title: &str) -> Result<Comic, StoreError> {
        let mut comic = self.get(id)?;
        comic.title = title.to_string();
        self.save(&comic)?;
        Ok(comic)
    }

    /// Delete a comic and all its artifacts.
    pub fn remove(&self, id: &str) -> Result<(), StoreError> {
        let dir = self.comic_dir(id);
        if !dir.join(COMIC_DOC).exists() {
            return Err(StoreError::NotFound(id.to_string()));
        }
        fs::remove_dir_all(dir)?;
        Ok(())
    }

    fn save(&self, comic: &Comic) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(comic)?;
        fs::write(self.comic_dir(&comic.id).join(COMIC_DOC), json)?;
        Ok(())
    }

    fn find_by_hash(&self, source_hash: &str) -> Result<Option<Comic>, StoreError> {
        Ok(self
            .list()?
            .into_iter()
            .find(|c| c.source_hash == source_hash))
    }

    /// Generate an id from the current instant, suffixing on collision.
    fn claim_id(&self) -> String {
        let base = Utc::now().format("%Y%m%dT%H%M%S%3fZ").to_string();
        let mut id = base.clone();
        let mut n = 0;
        while self.comic_dir(&id).exists() {
            n += 1;
            id = format!("{base}-{n}");
        }
        id
    }
}

/// Hex-encoded SHA-256 of a byte slice.
fn hash_bytes(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::{Panel, Rect};
    use tempfile::TempDir;

    fn fake_result(panel_count: usize) -> SegmentationResult {
        let panels = (0..panel_count)
            .map(|index| Panel {
                index,
                bytes: vec![index as u8; 8],
                source_rect: Rect {
                    x: 0,
                    y: index as u32 * 10,
                    width: 10,
                    height: 10,
                },
            })
            .collect();
        SegmentationResult { panels }
    }

    fn new_comic(title: &str) -> NewComic {
        NewComic {
            title: title.to_string(),
            publish_date: None,
        }
    }

    // =========================================================================
    // Import and round-trip
    // =========================================================================

    #[test]
    fn import_writes_artifacts_and_document() {
        let tmp = TempDir::new().unwrap();
        let library = Library::open(tmp.path()).unwrap();

        let comic = library
            .import(new_comic("Dawn Patrol"), b"page-bytes", &fake_result(6), "jpg", false)
            .unwrap();

        assert_eq!(comic.title, "Dawn Patrol");
        assert_eq!(comic.panels.len(), 6);
        assert_eq!(comic.cover.as_deref(), Some("cover.jpg"));

        let dir = library.comic_dir(&comic.id);
        assert!(dir.join("comic.json").exists());
        assert!(dir.join("cover.jpg").exists());
        for name in &comic.panels {
            assert!(dir.join(name).exists());
        }

        // Cover bytes are the first panel's bytes, verbatim.
        assert_eq!(
            fs::read(dir.join("cover.jpg")).unwrap(),
            fs::read(dir.join("panel-000.jpg")).unwrap(),
        );
    }

    #[test]
    fn get_round_trips_the_document() {
        let tmp = TempDir::new().unwrap();
        let library = Library::open(tmp.path()).unwrap();

        let imported = library
            .import(
                NewComic {
                    title: "Moon Saga".to_string(),
                    publish_date: Some("1986-09".to_string()),
                },
                b"abc",
                &fake_result(6),
                "jpg",
                false,
            )
            .unwrap();

        let loaded = library.get(&imported.id).unwrap();
        assert_eq!(loaded.title, "Moon Saga");
        assert_eq!(loaded.publish_date.as_deref(), Some("1986-09"));
        assert_eq!(loaded.rating, 0);
        assert!(!loaded.is_favorite);
        assert_eq!(loaded.source_hash, imported.source_hash);
    }

    #[test]
    fn get_unknown_id_errors() {
        let tmp = TempDir::new().unwrap();
        let library = Library::open(tmp.path()).unwrap();
        assert!(matches!(
            library.get("nope"),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn import_empty_result_has_no_cover() {
        let tmp = TempDir::new().unwrap();
        let library = Library::open(tmp.path()).unwrap();

        let comic = library
            .import(new_comic("Blank"), b"x", &fake_result(0), "jpg", false)
            .unwrap();

        assert!(comic.cover.is_none());
        assert!(comic.panels.is_empty());
    }

    // =========================================================================
    // Listing order
    // =========================================================================

    #[test]
    fn list_is_newest_first() {
        let tmp = TempDir::new().unwrap();
        let library = Library::open(tmp.path()).unwrap();

        let first = library
            .import(new_comic("First"), b"a", &fake_result(2), "jpg", false)
            .unwrap();
        let second = library
            .import(new_comic("Second"), b"b", &fake_result(2), "jpg", false)
            .unwrap();

        let ids: Vec<String> = library.list().unwrap().into_iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![second.id, first.id]);
    }

    #[test]
    fn list_skips_non_comic_entries() {
        let tmp = TempDir::new().unwrap();
        let library = Library::open(tmp.path()).unwrap();
        fs::write(tmp.path().join("config.toml"), "[segmentation]\n").unwrap();
        fs::create_dir(tmp.path().join("stray")).unwrap();

        library
            .import(new_comic("Only"), b"a", &fake_result(2), "jpg", false)
            .unwrap();

        assert_eq!(library.list().unwrap().len(), 1);
    }

    // =========================================================================
    // Updates
    // =========================================================================

    #[test]
    fn favorite_flag_persists() {
        let tmp = TempDir::new().unwrap();
        let library = Library::open(tmp.path()).unwrap();
        let comic = library
            .import(new_comic("Fav"), b"a", &fake_result(2), "jpg", false)
            .unwrap();

        library.set_favorite(&comic.id, true).unwrap();
        assert!(library.get(&comic.id).unwrap().is_favorite);
        assert_eq!(library.favorites().unwrap().len(), 1);

        library.set_favorite(&comic.id, false).unwrap();
        assert!(library.favorites().unwrap().is_empty());
    }

    #[test]
    fn rating_persists_and_validates() {
        let tmp = TempDir::new().unwrap();
        let library = Library::open(tmp.path()).unwrap();
        let comic = library
            .import(new_comic("Rated"), b"a", &fake_result(2), "jpg", false)
            .unwrap();

        library.set_rating(&comic.id, 4).unwrap();
        assert_eq!(library.get(&comic.id).unwrap().rating, 4);

        assert!(matches!(
            library.set_rating(&comic.id, 0),
            Err(StoreError::RatingOutOfRange(0))
        ));
        assert!(matches!(
            library.set_rating(&comic.id, 6),
            Err(StoreError::RatingOutOfRange(6))
        ));
    }

    #[test]
    fn title_update_persists() {
        let tmp = TempDir::new().unwrap();
        let library = Library::open(tmp.path()).unwrap();
        let comic = library
            .import(new_comic("Draft"), b"a", &fake_result(2), "jpg", false)
            .unwrap();

        library.set_title(&comic.id, "Final Cut").unwrap();
        assert_eq!(library.get(&comic.id).unwrap().title, "Final Cut");
    }

    #[test]
    fn remove_deletes_the_directory() {
        let tmp = TempDir::new().unwrap();
        let library = Library::open(tmp.path()).unwrap();
        let comic = library
            .import(new_comic("Gone"), b"a", &fake_result(2), "jpg", false)
            .unwrap();

        library.remove(&comic.id).unwrap();
        assert!(!library.comic_dir(&comic.id).exists());
        assert!(matches!(
            library.remove(&comic.id),
            Err(StoreError::NotFound(_))
        ));
    }

    // =========================================================================
    // Duplicate detection
    // =========================================================================

    #[test]
    fn duplicate_page_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let library = Library::open(tmp.path()).unwrap();
        let original = library
            .import(new_comic("Original"), b"same-page", &fake_result(2), "jpg", false)
            .unwrap();

        let result = library.import(
            new_comic("Copy"),
            b"same-page",
            &fake_result(2),
            "jpg",
            false,
        );
        assert!(matches!(result, Err(StoreError::Duplicate(id)) if id == original.id));
    }

    #[test]
    fn force_overrides_duplicate_detection() {
        let tmp = TempDir::new().unwrap();
        let library = Library::open(tmp.path()).unwrap();
        library
            .import(new_comic("Original"), b"same-page", &fake_result(2), "jpg", false)
            .unwrap();
        library
            .import(new_comic("Copy"), b"same-page", &fake_result(2), "jpg", true)
            .unwrap();

        assert_eq!(library.list().unwrap().len(), 2);
    }
}
