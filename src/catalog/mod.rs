mod loader;

pub use loader::{REQUIRED_COLUMNS, load_catalog, load_catalog_from_reader};
