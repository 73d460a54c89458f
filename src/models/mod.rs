pub mod product;
pub mod sort;
pub mod category;

pub use product::{Product, Rating};
pub use sort::SortOrder;
pub use category::{CategoryTab, CATEGORY_TABS};
