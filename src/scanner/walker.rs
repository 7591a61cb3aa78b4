use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::error::{Result, SweepError};

use super::item::{sort_by_size, Item};

/// How often (in visited entries) the progress callback fires.
const PROGRESS_INTERVAL: u64 = 512;

/// Result of a scan: every file and every folder below the root, each list
/// sorted largest first.
#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    /// Canonical root that was scanned
    pub root: PathBuf,
    /// All non-directory entries
    pub files: Vec<Item>,
    /// All directories below the root, with recursive sizes
    pub folders: Vec<Item>,
}

/// Why an entry was left out of the result. Never surfaced, only traced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SkipReason {
    /// Listing or stat of the entry failed
    WalkEntry,
    /// Something below the folder could not be read, so its total is unknown
    DirectorySize,
}

/// Running total for a folder while the walk is in progress.
struct FolderTally {
    path: PathBuf,
    size: u64,
    failed: bool,
}

/// Scan `root` and return the ranked files and folders.
///
/// Entries whose name starts with `.` are ignored and hidden directories are
/// not descended into. Only failure to open the root itself is an error.
pub fn scan(root: &Path) -> Result<ScanResult> {
    scan_with_progress(root, |_| {})
}

/// Like [`scan`], calling `on_progress` with the number of entries visited
/// so far every few hundred entries and once at the end.
pub fn scan_with_progress<F>(root: &Path, mut on_progress: F) -> Result<ScanResult>
where
    F: FnMut(u64),
{
    let root = root.canonicalize().map_err(|e| SweepError::ScanIo {
        path: root.to_path_buf(),
        source: e,
    })?;

    tracing::info!(root = %root.display(), "Scanning directory");

    let mut files = Vec::new();
    let mut folders: Vec<FolderTally> = Vec::new();
    let mut folder_index: HashMap<PathBuf, usize> = HashMap::new();
    let mut visited = 0u64;

    let walker = WalkDir::new(&root)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e));

    for result in walker {
        let entry = match result {
            Ok(e) => e,
            Err(err) => {
                if err.depth() == 0 {
                    return Err(SweepError::ScanIo {
                        path: root,
                        source: io::Error::from(err),
                    });
                }
                if let Some(path) = err.path() {
                    trace_skip(path, SkipReason::WalkEntry, &err);
                    mark_failed(path, &root, &folder_index, &mut folders);
                }
                continue;
            }
        };

        visited += 1;
        if visited % PROGRESS_INTERVAL == 0 {
            on_progress(visited);
        }

        let path = entry.path();

        if entry.file_type().is_dir() {
            // The root is the frame of reference, not an item.
            if entry.depth() > 0 {
                folder_index.insert(path.to_path_buf(), folders.len());
                folders.push(FolderTally {
                    path: path.to_path_buf(),
                    size: 0,
                    failed: false,
                });
            }
            continue;
        }

        match entry.metadata() {
            Ok(metadata) => {
                let size = metadata.len();
                add_to_ancestors(path, size, &root, &folder_index, &mut folders);
                files.push(Item::new(path.to_path_buf(), size));
            }
            Err(err) => {
                trace_skip(path, SkipReason::WalkEntry, &err);
                mark_failed(path, &root, &folder_index, &mut folders);
            }
        }
    }

    on_progress(visited);

    let mut folders: Vec<Item> = folders
        .into_iter()
        .filter_map(|tally| {
            if tally.failed {
                trace_skip(&tally.path, SkipReason::DirectorySize, &"unreadable descendant");
                None
            } else {
                Some(Item::new(tally.path, tally.size))
            }
        })
        .collect();

    sort_by_size(&mut files);
    sort_by_size(&mut folders);

    tracing::info!(
        files = files.len(),
        folders = folders.len(),
        visited,
        "Scan complete"
    );

    Ok(ScanResult {
        root,
        files,
        folders,
    })
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

/// Add a file's size to every folder between it and the root.
fn add_to_ancestors(
    path: &Path,
    size: u64,
    root: &Path,
    index: &HashMap<PathBuf, usize>,
    folders: &mut [FolderTally],
) {
    for ancestor in path.ancestors().skip(1) {
        if ancestor == root {
            break;
        }
        if let Some(&idx) = index.get(ancestor) {
            folders[idx].size += size;
        }
    }
}

/// Mark `path` (if it is a known folder) and every folder above it as failed.
fn mark_failed(
    path: &Path,
    root: &Path,
    index: &HashMap<PathBuf, usize>,
    folders: &mut [FolderTally],
) {
    for ancestor in path.ancestors() {
        if ancestor == root {
            break;
        }
        if let Some(&idx) = index.get(ancestor) {
            folders[idx].failed = true;
        }
    }
}

fn trace_skip(path: &Path, reason: SkipReason, err: &dyn std::fmt::Display) {
    tracing::trace!(path = %path.display(), ?reason, error = %err, "Skipping entry");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(path: &Path, len: usize) {
        File::create(path)
            .unwrap()
            .write_all(&vec![b'x'; len])
            .unwrap();
    }

    fn create_test_structure() -> TempDir {
        let dir = TempDir::new().unwrap();
        let root = dir.path();

        write_file(&root.join("file1.txt"), 5);
        write_file(&root.join("file2.txt"), 6);

        fs::create_dir(root.join("subdir")).unwrap();
        write_file(&root.join("subdir/nested.txt"), 14);

        write_file(&root.join(".hidden"), 6);

        dir
    }

    #[test]
    fn test_scan_basic() {
        let dir = create_test_structure();
        let result = scan(dir.path()).unwrap();

        assert_eq!(result.files.len(), 3);
        assert_eq!(result.folders.len(), 1);
        assert_eq!(result.root, dir.path().canonicalize().unwrap());
    }

    #[test]
    fn test_scan_excludes_hidden() {
        let dir = create_test_structure();
        let result = scan(dir.path()).unwrap();

        assert!(!result.files.iter().any(|f| f.name() == ".hidden"));
    }

    #[test]
    fn test_scan_files_sorted_by_size() {
        let dir = TempDir::new().unwrap();
        write_file(&dir.path().join("a"), 10);
        write_file(&dir.path().join("b"), 30);
        write_file(&dir.path().join("c"), 20);

        let result = scan(dir.path()).unwrap();

        let names: Vec<String> = result.files.iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["b", "c", "a"]);
        let sizes: Vec<u64> = result.files.iter().map(|f| f.size).collect();
        assert_eq!(sizes, vec![30, 20, 10]);
        assert!(result.folders.is_empty());
    }

    #[test]
    fn test_scan_folder_sizes_are_recursive() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("outer/inner")).unwrap();
        write_file(&root.join("outer/one.bin"), 100);
        write_file(&root.join("outer/inner/two.bin"), 200);

        let result = scan(root).unwrap();

        let outer = result.folders.iter().find(|f| f.name() == "outer").unwrap();
        let inner = result.folders.iter().find(|f| f.name() == "inner").unwrap();
        assert_eq!(outer.size, 300);
        assert_eq!(inner.size, 200);
        assert_eq!(result.folders[0].name(), "outer");
    }

    #[test]
    fn test_scan_hidden_directory_not_counted() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("d/.git")).unwrap();
        write_file(&root.join("d/file"), 100);
        write_file(&root.join("d/.git/object"), 500);

        let result = scan(root).unwrap();

        assert_eq!(result.folders.len(), 1);
        assert_eq!(result.folders[0].name(), "d");
        assert_eq!(result.folders[0].size, 100);
        assert!(!result.files.iter().any(|f| f.name() == "object"));
    }

    #[test]
    fn test_scan_nonexistent_path() {
        let result = scan(Path::new("/nonexistent/path/12345"));
        assert!(matches!(result, Err(SweepError::ScanIo { .. })));
    }

    #[test]
    fn test_scan_root_that_is_a_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("single.dat");
        write_file(&file, 42);

        let result = scan(&file).unwrap();

        assert_eq!(result.files.len(), 1);
        assert_eq!(result.files[0].size, 42);
        assert!(result.folders.is_empty());
    }

    #[test]
    fn test_scan_reports_progress() {
        let dir = create_test_structure();
        let mut last = 0;
        scan_with_progress(dir.path(), |n| last = n).unwrap();
        // root, file1, file2, subdir, nested
        assert_eq!(last, 5);
    }

    #[test]
    fn test_add_to_ancestors_stops_at_root() {
        let root = Path::new("/r");
        let mut index = HashMap::new();
        index.insert(PathBuf::from("/r/a"), 0);
        index.insert(PathBuf::from("/r/a/b"), 1);
        let mut folders = vec![
            FolderTally { path: PathBuf::from("/r/a"), size: 0, failed: false },
            FolderTally { path: PathBuf::from("/r/a/b"), size: 0, failed: false },
        ];

        add_to_ancestors(Path::new("/r/a/b/f"), 7, root, &index, &mut folders);
        add_to_ancestors(Path::new("/r/a/g"), 3, root, &index, &mut folders);

        assert_eq!(folders[0].size, 10);
        assert_eq!(folders[1].size, 7);
    }

    #[test]
    fn test_mark_failed_propagates_upwards() {
        let root = Path::new("/r");
        let mut index = HashMap::new();
        index.insert(PathBuf::from("/r/a"), 0);
        index.insert(PathBuf::from("/r/a/b"), 1);
        index.insert(PathBuf::from("/r/c"), 2);
        let mut folders = vec![
            FolderTally { path: PathBuf::from("/r/a"), size: 0, failed: false },
            FolderTally { path: PathBuf::from("/r/a/b"), size: 0, failed: false },
            FolderTally { path: PathBuf::from("/r/c"), size: 0, failed: false },
        ];

        mark_failed(Path::new("/r/a/b"), root, &index, &mut folders);

        assert!(folders[0].failed);
        assert!(folders[1].failed);
        assert!(!folders[2].failed);
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_folder_is_omitted() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("parent/locked")).unwrap();
        fs::create_dir(root.join("open")).unwrap();
        write_file(&root.join("parent/locked/f"), 10);
        write_file(&root.join("open/g"), 20);

        let locked = root.join("parent/locked");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Privileged users can still read the folder; nothing to check then.
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let result = scan(root).unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        let names: Vec<String> = result.folders.iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["open"]);
    }
}
