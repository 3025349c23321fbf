use std::collections::HashSet;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::Serialize;

use crate::error::FitError;

/// File extension of stored icons.
pub const ICON_EXTENSION: &str = "png";

/// Whether an icon can be reused from disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconStatus {
    /// An icon file already exists and may be loaded as-is.
    Cached,
    /// The icon has to be rendered.
    Pending,
}

/// One asset in a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IconEntry {
    /// Asset identifier, also the icon file stem.
    pub id: String,
    /// Where the icon is (or will be) stored.
    pub path: PathBuf,
    /// Cached or pending.
    pub status: IconStatus,
}

/// Plan for producing the icons of a set of assets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IconBatch {
    root: PathBuf,
    entries: Vec<IconEntry>,
}

impl IconBatch {
    /// Decide, per asset id, whether its icon is on disk under `root`.
    ///
    /// With `regenerate` every icon is pending regardless of the disk.
    /// Input order is kept; repeated ids and ids that are not plain file
    /// stems are dropped.
    pub fn plan<I, S>(
        root: impl Into<PathBuf>,
        ids: I,
        regenerate: bool,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let root = root.into();
        let mut seen = HashSet::new();
        let mut entries = Vec::new();

        for id in ids {
            let id = id.as_ref();
            if !is_valid_id(id) {
                warn!("skipping asset id {id:?}: not usable as a file name");
                continue;
            }
            if !seen.insert(id.to_owned()) {
                continue;
            }
            let path = icon_path(&root, id);
            let status = if !regenerate && path.is_file() {
                IconStatus::Cached
            } else {
                IconStatus::Pending
            };
            entries.push(IconEntry {
                id: id.to_owned(),
                path,
                status,
            });
        }

        let batch = Self { root, entries };
        info!(
            "icon batch in {}: {} cached, {} to render",
            batch.root.display(),
            batch.cached().count(),
            batch.pending().count()
        );
        batch
    }

    /// Icon directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// All entries in input order.
    #[must_use]
    pub fn entries(&self) -> &[IconEntry] {
        &self.entries
    }

    /// Entries that need rendering.
    pub fn pending(&self) -> impl Iterator<Item = &IconEntry> {
        self.with_status(IconStatus::Pending)
    }

    /// Entries whose icon can be loaded from disk.
    pub fn cached(&self) -> impl Iterator<Item = &IconEntry> {
        self.with_status(IconStatus::Cached)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the batch has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn with_status(
        &self,
        status: IconStatus,
    ) -> impl Iterator<Item = &IconEntry> {
        self.entries.iter().filter(move |e| e.status == status)
    }
}

/// Path of the icon for asset `id` under `root`.
#[must_use]
pub fn icon_path(root: &Path, id: &str) -> PathBuf {
    root.join(format!("{id}.{ICON_EXTENSION}"))
}

fn is_valid_id(id: &str) -> bool {
    !id.is_empty()
        && id != "."
        && id != ".."
        && !id.contains(['/', '\\'])
}

/// Delete every file directly inside `root`, creating `root` if missing.
///
/// Subdirectories are left alone. Files that cannot be removed are logged
/// and skipped. Returns how many files were deleted.
pub fn clear_icon_dir(root: &Path) -> Result<usize, FitError> {
    std::fs::create_dir_all(root)?;
    let entries = std::fs::read_dir(root)?.map(|e| e.map(|e| e.path()));
    let deleted = delete_files(entries);
    info!("cleared {deleted} icons from {}", root.display());
    Ok(deleted)
}

/// Remove the regular files among `entries`, logging and skipping entries
/// that could not be read or removed.
fn delete_files<I>(entries: I) -> usize
where
    I: IntoIterator<Item = std::io::Result<PathBuf>>,
{
    let mut deleted = 0;
    for entry in entries {
        let path = match entry {
            Ok(path) => path,
            Err(e) => {
                warn!("could not read icon directory entry: {e}");
                continue;
            }
        };
        if !path.is_file() {
            continue;
        }
        match std::fs::remove_file(&path) {
            Ok(()) => deleted += 1,
            Err(e) => warn!("could not delete {}: {e}", path.display()),
        }
    }
    deleted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn existing_icons_are_cached() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a1.png"), b"png").unwrap();

        let batch = IconBatch::plan(dir.path(), ["a1", "b2", "a1"], false);
        assert_eq!(batch.len(), 2);
        assert_eq!(batch.entries()[0].status, IconStatus::Cached);
        assert_eq!(batch.entries()[1].status, IconStatus::Pending);
        assert_eq!(batch.entries()[1].path, dir.path().join("b2.png"));
        assert_eq!(batch.pending().count(), 1);
        assert_eq!(batch.cached().next().unwrap().id, "a1");
    }

    #[test]
    fn regenerate_ignores_cache() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a1.png"), b"png").unwrap();
        let batch = IconBatch::plan(dir.path(), vec!["a1".to_owned()], true);
        assert_eq!(batch.pending().count(), 1);
        assert_eq!(batch.cached().count(), 0);
    }

    #[test]
    fn unsafe_ids_are_skipped() {
        let ids = ["", "..", "../x", "a\\b", "ok"];
        let batch = IconBatch::plan("icons", ids, false);
        assert_eq!(batch.len(), 1);
        assert_eq!(batch.entries()[0].id, "ok");
        assert_eq!(batch.root(), Path::new("icons"));
    }

    #[test]
    fn dotted_ids_keep_their_stem() {
        assert_eq!(
            icon_path(Path::new("icons"), "crate.v2"),
            Path::new("icons").join("crate.v2.png")
        );
    }

    #[test]
    fn clearing_removes_files_only() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("icons");
        assert_eq!(clear_icon_dir(&root).unwrap(), 0);
        assert!(root.is_dir());

        std::fs::write(root.join("a.png"), b"1").unwrap();
        std::fs::write(root.join("b.png"), b"2").unwrap();
        std::fs::create_dir(root.join("nested")).unwrap();
        assert_eq!(clear_icon_dir(&root).unwrap(), 2);
        assert!(root.join("nested").is_dir());
        let batch = IconBatch::plan(&root, ["a"], false);
        assert!(batch.cached().next().is_none());
    }

    #[test]
    fn unreadable_entries_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let icon = dir.path().join("a.png");
        std::fs::write(&icon, b"1").unwrap();

        let entries = vec![
            Err(std::io::Error::other("entry vanished")),
            Ok(icon.clone()),
            Ok(dir.path().join("missing.png")),
        ];
        assert_eq!(delete_files(entries), 1);
        assert!(!icon.exists());
    }
}
