//! File I/O and output naming.

mod fs;
mod naming;

pub use fs::{MetaError, copy_dir_all, read_json, write_html};
pub use naming::{note_dir_name, sanitize_component};
