pub mod store_context;
pub mod query_context;
pub mod use_products;
pub mod use_catalog;
pub mod use_debounce;
pub mod use_route;

pub use store_context::{use_store, StoreHandle, StoreProvider};
pub use query_context::{use_query_client, QueryClientHandle, QueryProvider};
pub use use_products::{use_product, use_products};
pub use use_catalog::use_catalog;
pub use use_debounce::use_debounced_callback;
pub use use_route::{use_route, RouteHandle, RouteProvider};
