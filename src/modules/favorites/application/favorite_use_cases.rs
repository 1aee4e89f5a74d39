use std::sync::Arc;

use crate::favorites::application::ports::incoming::use_cases::{
    AddFavoriteUseCase, CheckFavoritesUseCase, ListFavoritesUseCase, RemoveFavoriteUseCase,
};

#[derive(Clone)]
pub struct FavoriteUseCases {
    pub add: Arc<dyn AddFavoriteUseCase + Send + Sync>,
    pub remove: Arc<dyn RemoveFavoriteUseCase + Send + Sync>,
    pub list: Arc<dyn ListFavoritesUseCase + Send + Sync>,
    pub check: Arc<dyn CheckFavoritesUseCase + Send + Sync>,
}
