//! Session state for the TUI.

use std::collections::HashSet;
use std::path::PathBuf;

use crate::error::SweepError;
use crate::scanner::{Item, ScanResult};

use super::delete::Remover;

/// Rows taken by title, header, banner and help line.
pub const CHROME_ROWS: u16 = 4;

/// Viewport assumed until the first resize event arrives.
pub const DEFAULT_WIDTH: u16 = 100;
pub const DEFAULT_HEIGHT: u16 = 10;

/// Which collection is displayed and operated on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// All non-directory entries.
    #[default]
    Files,
    /// All directories with their recursive sizes.
    Folders,
}

impl View {
    /// The other view.
    pub fn toggle(self) -> Self {
        match self {
            View::Files => View::Folders,
            View::Folders => View::Files,
        }
    }

    /// Name shown in the title bar.
    pub fn label(self) -> &'static str {
        match self {
            View::Files => "FILES",
            View::Folders => "FOLDERS",
        }
    }
}

/// Complete state of an interactive session.
///
/// All transitions go through [`super::event::update`]; rendering only reads it.
#[derive(Debug)]
pub struct Session {
    /// Root the items were scanned from.
    pub root: PathBuf,

    /// Files, largest first.
    pub files: Vec<Item>,

    /// Folders, largest first.
    pub folders: Vec<Item>,

    /// Active view.
    pub view: View,

    /// Index of the highlighted item in the active collection.
    pub cursor: usize,

    /// Index of the first visible row.
    pub offset: usize,

    /// Waiting for the operator to confirm deletion.
    pub confirming_delete: bool,

    /// Last deletion failure; while set only the error is shown.
    pub last_error: Option<SweepError>,

    /// Viewport width in columns.
    pub width: u16,

    /// Viewport height in rows.
    pub height: u16,

    /// Session should end.
    pub should_quit: bool,
}

impl Session {
    /// Start a session over a finished scan.
    pub fn new(scan: ScanResult) -> Self {
        Self {
            root: scan.root,
            files: scan.files,
            folders: scan.folders,
            view: View::default(),
            cursor: 0,
            offset: 0,
            confirming_delete: false,
            last_error: None,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            should_quit: false,
        }
    }

    /// The active collection.
    pub fn items(&self) -> &[Item] {
        match self.view {
            View::Files => &self.files,
            View::Folders => &self.folders,
        }
    }

    fn items_mut(&mut self) -> &mut Vec<Item> {
        match self.view {
            View::Files => &mut self.files,
            View::Folders => &mut self.folders,
        }
    }

    /// Item under the cursor, if any.
    pub fn current_item(&self) -> Option<&Item> {
        self.items().get(self.cursor)
    }

    /// Number of selected items in the active collection.
    pub fn selected_count(&self) -> usize {
        self.items().iter().filter(|i| i.is_selected).count()
    }

    /// Item rows that fit the viewport, at least one.
    pub fn visible_rows(&self) -> usize {
        usize::from(self.height.saturating_sub(CHROME_ROWS)).max(1)
    }

    /// Largest offset that still fills the window.
    pub fn max_offset(&self) -> usize {
        self.items().len().saturating_sub(self.visible_rows())
    }

    fn last_index(&self) -> usize {
        self.items().len().saturating_sub(1)
    }

    /// Record a new viewport size. Cursor and offset are left alone.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    pub fn move_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            if self.cursor < self.offset {
                self.offset = self.cursor;
            }
        }
        self.clamp_window();
    }

    pub fn move_down(&mut self) {
        let rows = self.visible_rows();
        if self.cursor < self.last_index() {
            self.cursor += 1;
            if self.cursor >= self.offset + rows {
                self.offset = self.cursor + 1 - rows;
            }
        }
        self.clamp_window();
    }

    pub fn page_up(&mut self) {
        let rows = self.visible_rows();
        self.offset = self.offset.saturating_sub(rows);
        self.cursor = self.cursor.saturating_sub(rows);
        self.clamp_window();
    }

    pub fn page_down(&mut self) {
        let rows = self.visible_rows();
        self.offset = (self.offset + rows).min(self.max_offset());
        self.cursor = (self.cursor + rows).min(self.last_index());
        self.clamp_window();
    }

    pub fn jump_home(&mut self) {
        self.cursor = 0;
        self.offset = 0;
    }

    pub fn jump_end(&mut self) {
        let last = self.last_index();
        self.cursor = last;
        self.offset = (last + 1).saturating_sub(self.visible_rows());
        self.clamp_window();
    }

    /// Toggle between files and folders, starting again at the top.
    pub fn switch_view(&mut self) {
        self.view = self.view.toggle();
        self.cursor = 0;
        self.offset = 0;
    }

    /// Flip the selection mark of the item under the cursor.
    pub fn toggle_select(&mut self) {
        let cursor = self.cursor;
        if let Some(item) = self.items_mut().get_mut(cursor) {
            item.is_selected = !item.is_selected;
        }
    }

    pub fn request_delete(&mut self) {
        self.confirming_delete = true;
    }

    pub fn cancel_delete(&mut self) {
        self.confirming_delete = false;
    }

    pub fn dismiss_error(&mut self) {
        self.last_error = None;
    }

    /// Remove every selected item of the active collection, in display order.
    ///
    /// Stops at the first failure, which is kept in `last_error`; items after
    /// it stay selected and in place. Removing a folder also drops everything
    /// beneath it from both collections.
    pub fn confirm_delete<R: Remover + ?Sized>(&mut self, remover: &R) {
        if !self.confirming_delete {
            return;
        }
        self.confirming_delete = false;

        let view = self.view;
        let mut removed: Vec<PathBuf> = Vec::new();
        let mut failure = None;

        for item in self.items_mut().iter_mut().filter(|i| i.is_selected) {
            // Already gone with a removed ancestor folder
            if removed.iter().any(|r| item.path.starts_with(r)) {
                item.is_selected = false;
                removed.push(item.path.clone());
                continue;
            }
            match remover.remove(&item.path, view) {
                Ok(()) => {
                    item.is_selected = false;
                    removed.push(item.path.clone());
                }
                Err(source) => {
                    failure = Some(SweepError::Delete {
                        path: item.path.clone(),
                        source,
                    });
                    break;
                }
            }
        }

        self.drop_removed(&removed, view);
        self.last_error = failure;
        self.clamp_window();
    }

    fn drop_removed(&mut self, removed: &[PathBuf], view: View) {
        if removed.is_empty() {
            return;
        }
        match view {
            View::Files => {
                let gone: HashSet<&PathBuf> = removed.iter().collect();
                self.files.retain(|i| !gone.contains(&i.path));
            }
            View::Folders => {
                let under_removed = |item: &Item| removed.iter().any(|r| item.path.starts_with(r));
                self.files.retain(|i| !under_removed(i));
                self.folders.retain(|i| !under_removed(i));
            }
        }
    }

    /// Restore `offset <= cursor < offset + visible_rows` within the active
    /// collection for the current viewport.
    pub fn clamp_window(&mut self) {
        if self.items().is_empty() {
            self.cursor = 0;
            self.offset = 0;
            return;
        }
        let rows = self.visible_rows();
        self.cursor = self.cursor.min(self.last_index());
        self.offset = self.offset.min(self.max_offset()).min(self.cursor);
        if self.cursor >= self.offset + rows {
            self.offset = self.cursor + 1 - rows;
        }
    }
}
