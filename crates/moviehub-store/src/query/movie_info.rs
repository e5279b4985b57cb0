//! Movie info repository.

use std::future::Future;

use crate::model::{MovieInfo, NewMovieInfo};
use crate::{StoreClient, StoreResult};

/// Repository for movie info documents.
pub trait MovieInfoRepository {
    /// Stores a new movie info under a freshly assigned identifier.
    fn create_movie_info(
        &self,
        new_movie_info: NewMovieInfo,
    ) -> impl Future<Output = StoreResult<MovieInfo>> + Send;

    /// Finds a movie info by its identifier.
    fn find_movie_info_by_id(
        &self,
        movie_info_id: &str,
    ) -> impl Future<Output = StoreResult<Option<MovieInfo>>> + Send;

    /// Lists movie infos in insertion order, optionally restricted to one release year.
    fn list_movie_infos(
        &self,
        year: Option<i32>,
    ) -> impl Future<Output = StoreResult<Vec<MovieInfo>>> + Send;

    /// Replaces every field except the identifier.
    ///
    /// Fails with [`StoreError::NotFound`](crate::StoreError::NotFound) if the
    /// movie info does not exist.
    fn update_movie_info(
        &self,
        movie_info_id: &str,
        updates: NewMovieInfo,
    ) -> impl Future<Output = StoreResult<MovieInfo>> + Send;

    /// Permanently deletes a movie info.
    fn delete_movie_info(
        &self,
        movie_info_id: &str,
    ) -> impl Future<Output = StoreResult<()>> + Send;
}

impl MovieInfoRepository for StoreClient {
    async fn create_movie_info(&self, new_movie_info: NewMovieInfo) -> StoreResult<MovieInfo> {
        self.insert_with(|id| MovieInfo::from_new(id, new_movie_info))
            .await
    }

    async fn find_movie_info_by_id(&self, movie_info_id: &str) -> StoreResult<Option<MovieInfo>> {
        self.find(movie_info_id).await
    }

    async fn list_movie_infos(&self, year: Option<i32>) -> StoreResult<Vec<MovieInfo>> {
        self.find_all(|movie_info: &MovieInfo| year.is_none_or(|year| movie_info.year == year))
            .await
    }

    async fn update_movie_info(
        &self,
        movie_info_id: &str,
        updates: NewMovieInfo,
    ) -> StoreResult<MovieInfo> {
        self.replace(MovieInfo::from_new(movie_info_id, updates))
            .await
    }

    async fn delete_movie_info(&self, movie_info_id: &str) -> StoreResult<()> {
        self.remove::<MovieInfo>(movie_info_id).await?;
        Ok(())
    }
}
