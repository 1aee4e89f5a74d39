pub mod user_favorites;
