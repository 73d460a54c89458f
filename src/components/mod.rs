pub mod app;
pub mod app_navigation;
pub mod category_filter;
pub mod empty_state;
pub mod link;
pub mod loading;
pub mod product_card;
pub mod product_list;
pub mod sort_by;
pub mod toggle_favourite;

pub use app::App;
pub use app_navigation::{AppNavigation, SearchBar};
pub use category_filter::CategoryFilterTabs;
pub use empty_state::EmptyState;
pub use link::Link;
pub use loading::{AppLoading, ProductCardSkeleton, ProductDetailSkeleton, ProductListSkeleton};
pub use product_card::ProductCard;
pub use product_list::ProductList;
pub use sort_by::SortBy;
pub use toggle_favourite::ToggleFavourite;
