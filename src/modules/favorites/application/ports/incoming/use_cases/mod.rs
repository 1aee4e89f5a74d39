mod add_favorite;
mod check_favorites;
mod list_favorites;
mod remove_favorite;

pub use add_favorite::{AddFavoriteError, AddFavoriteUseCase};
pub use check_favorites::{CheckFavoritesError, CheckFavoritesUseCase};
pub use list_favorites::{ListFavoritesError, ListFavoritesUseCase};
pub use remove_favorite::{RemoveFavoriteError, RemoveFavoriteUseCase};
