pub mod home_view;
pub mod favourites_view;
pub mod product_view;
pub mod not_found_view;

pub use home_view::HomeView;
pub use favourites_view::FavouritesView;
pub use product_view::ProductView;
pub use not_found_view::NotFoundView;
