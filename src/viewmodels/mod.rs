pub mod catalog_viewmodel;

pub use catalog_viewmodel::{derive_catalog, filter_products, CatalogView};
