use std::sync::Arc;

use crate::models::resource::Resource;
use crate::repositories::{FavoriteRepository, RepoError};

/// Employee ↔ well-being-resource bookmarks. The link/unlink results keep
/// the boolean contract of the surrounding CRUD surface; only genuine
/// storage faults become errors.
pub struct FavoritesService {
    favorites: Arc<dyn FavoriteRepository>,
}

impl FavoritesService {
    pub fn new(favorites: Arc<dyn FavoriteRepository>) -> Self {
        Self { favorites }
    }

    /// `false` means the pair already existed; nothing is written twice.
    pub async fn add_favorite(
        &self,
        employee_id: i64,
        resource_id: i64,
    ) -> Result<bool, RepoError> {
        match self.favorites.link(employee_id, resource_id).await {
            Ok(()) => Ok(true),
            Err(RepoError::Duplicate) => Ok(false),
            Err(other) => Err(other),
        }
    }

    /// `false` means no such pair was linked.
    pub async fn remove_favorite(
        &self,
        employee_id: i64,
        resource_id: i64,
    ) -> Result<bool, RepoError> {
        self.favorites.unlink(employee_id, resource_id).await
    }

    /// Favorited resources ordered by name.
    pub async fn list_favorites(&self, employee_id: i64) -> Result<Vec<Resource>, RepoError> {
        self.favorites.list_for_employee(employee_id).await
    }
}
