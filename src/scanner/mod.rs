mod item;
mod size;
mod walker;

pub use item::{sort_by_size, Item};
pub use size::format_size;
pub use walker::{scan, scan_with_progress, ScanResult};
