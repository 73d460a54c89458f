pub mod error;
pub mod product_source;
pub mod api_client;
pub mod mock_api;
pub mod query_client;

pub use error::ApiError;
pub use product_source::{CatalogSource, ProductSource};
pub use api_client::ApiClient;
pub use mock_api::MockProductSource;
pub use query_client::{QueryClient, QueryKey, QueryOptions, QueryState, Sleep, TimerSleep};
