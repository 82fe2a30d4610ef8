//! Tool and film-sheet catalog: the closed item set inventories must cover

pub mod defaults;
pub mod load;
pub mod types;

pub use defaults::DEFAULT_SHEET_THRESHOLD;
pub use load::{global_catalog_path, load_catalog, load_catalog_from, project_catalog_path};
pub use types::{Catalog, CatalogError, ToolSpec};
