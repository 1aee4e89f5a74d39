pub mod add_favorite_service;
pub mod check_favorites_service;
pub mod list_favorites_service;
pub mod remove_favorite_service;

pub use add_favorite_service::AddFavoriteService;
pub use check_favorites_service::CheckFavoritesService;
pub use list_favorites_service::ListFavoritesService;
pub use remove_favorite_service::RemoveFavoriteService;
