use std::cmp::Reverse;
use std::path::{Path, PathBuf};

/// A file or folder found by the scanner.
///
/// For folders `size` is the sum of all non-hidden files below it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Absolute path, also the identity of the item
    pub path: PathBuf,

    /// Size in bytes
    pub size: u64,

    /// Marked for deletion
    pub is_selected: bool,
}

impl Item {
    pub fn new(path: PathBuf, size: u64) -> Self {
        Self {
            path,
            size,
            is_selected: false,
        }
    }

    /// Last path component, lossily converted for display.
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// Parent directory relative to `root`, `.` for direct children of the root.
    pub fn parent_relative_to(&self, root: &Path) -> String {
        let parent = match self.path.parent() {
            Some(p) => p,
            None => return self.path.display().to_string(),
        };
        match parent.strip_prefix(root) {
            Ok(rel) if rel.as_os_str().is_empty() => ".".to_string(),
            Ok(rel) => rel.display().to_string(),
            Err(_) => parent.display().to_string(),
        }
    }
}

/// Sort items largest first. The sort is stable, so equal sizes keep scan order.
pub fn sort_by_size(items: &mut [Item]) {
    items.sort_by_key(|item| Reverse(item.size));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_creation() {
        let item = Item::new(PathBuf::from("/data/movie.mkv"), 4096);
        assert_eq!(item.size, 4096);
        assert!(!item.is_selected);
        assert_eq!(item.name(), "movie.mkv");
    }

    #[test]
    fn test_parent_relative_to_root() {
        let root = Path::new("/data");
        let direct = Item::new(PathBuf::from("/data/a.txt"), 1);
        let nested = Item::new(PathBuf::from("/data/x/y/b.txt"), 1);
        let outside = Item::new(PathBuf::from("/other/c.txt"), 1);

        assert_eq!(direct.parent_relative_to(root), ".");
        assert_eq!(nested.parent_relative_to(root), "x/y");
        assert_eq!(outside.parent_relative_to(root), "/other");
    }

    #[test]
    fn test_sort_by_size_descending() {
        let mut items = vec![
            Item::new(PathBuf::from("/a"), 10),
            Item::new(PathBuf::from("/b"), 30),
            Item::new(PathBuf::from("/c"), 20),
        ];
        sort_by_size(&mut items);
        let sizes: Vec<u64> = items.iter().map(|i| i.size).collect();
        assert_eq!(sizes, vec![30, 20, 10]);
    }

    #[test]
    fn test_sort_keeps_ties_in_order() {
        let mut items = vec![
            Item::new(PathBuf::from("/first"), 5),
            Item::new(PathBuf::from("/second"), 5),
        ];
        sort_by_size(&mut items);
        assert_eq!(items[0].path, PathBuf::from("/first"));
    }
}
