//! Model catalog loading and lookup.

mod file;
mod paths;
mod types;

pub use file::load_catalog;
pub use paths::{config_dir, default_catalog_path};
pub use types::{Catalog, FieldValue, Number};
