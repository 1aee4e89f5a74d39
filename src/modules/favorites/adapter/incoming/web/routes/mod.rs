mod add_favorite;
mod check_favorites;
mod list_favorites;
mod remove_favorite;

pub use add_favorite::*;
pub use check_favorites::*;
pub use list_favorites::*;
pub use remove_favorite::*;
