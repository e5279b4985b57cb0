//! Review repository.

use std::future::Future;

use crate::model::{NewReview, Review};
use crate::{StoreClient, StoreResult};

/// Repository for review documents.
pub trait ReviewRepository {
    /// Stores a new review under a freshly assigned identifier.
    fn create_review(
        &self,
        new_review: NewReview,
    ) -> impl Future<Output = StoreResult<Review>> + Send;

    /// Finds a review by its identifier.
    fn find_review_by_id(
        &self,
        review_id: &str,
    ) -> impl Future<Output = StoreResult<Option<Review>>> + Send;

    /// Lists reviews in insertion order, optionally restricted to one movie info.
    fn list_reviews(
        &self,
        movie_info_id: Option<&str>,
    ) -> impl Future<Output = StoreResult<Vec<Review>>> + Send;

    /// Replaces every field except the identifier.
    fn update_review(
        &self,
        review_id: &str,
        updates: NewReview,
    ) -> impl Future<Output = StoreResult<Review>> + Send;

    /// Permanently deletes a review.
    fn delete_review(&self, review_id: &str) -> impl Future<Output = StoreResult<()>> + Send;
}

impl ReviewRepository for StoreClient {
    async fn create_review(&self, new_review: NewReview) -> StoreResult<Review> {
        self.insert_with(|id| Review::from_new(id, new_review))
            .await
    }

    async fn find_review_by_id(&self, review_id: &str) -> StoreResult<Option<Review>> {
        self.find(review_id).await
    }

    async fn list_reviews(&self, movie_info_id: Option<&str>) -> StoreResult<Vec<Review>> {
        self.find_all(|review: &Review| {
            movie_info_id.is_none_or(|movie_info_id| review.movie_info_id == movie_info_id)
        })
        .await
    }

    async fn update_review(&self, review_id: &str, updates: NewReview) -> StoreResult<Review> {
        self.replace(Review::from_new(review_id, updates)).await
    }

    async fn delete_review(&self, review_id: &str) -> StoreResult<()> {
        self.remove::<Review>(review_id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StoreConfig;

    fn new_review(movie_info_id: &str, rating: f64) -> NewReview {
        NewReview {
            movie_info_id: movie_info_id.to_owned(),
            comment: "Awesome Movie".to_owned(),
            rating,
        }
    }

    #[tokio::test]
    async fn list_filters_by_movie_info_in_insertion_order() -> anyhow::Result<()> {
        let client = StoreClient::new(StoreConfig::default());
        let first = client.create_review(new_review("1", 9.0)).await?;
        client.create_review(new_review("2", 8.0)).await?;
        let third = client.create_review(new_review("1", 7.0)).await?;

        let all = client.list_reviews(None).await?;
        assert_eq!(all.len(), 3);

        let filtered = client.list_reviews(Some("1")).await?;
        let ids: Vec<_> = filtered.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, [first.id.as_str(), third.id.as_str()]);

        assert!(client.list_reviews(Some("3")).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn update_and_delete_round_trip() -> anyhow::Result<()> {
        let client = StoreClient::new(StoreConfig::default());
        let created = client.create_review(new_review("1", 9.0)).await?;

        let updated = client
            .update_review(&created.id, new_review("1", 6.5))
            .await?;
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.rating, 6.5);
        assert_eq!(client.find_review_by_id(&created.id).await?, Some(updated));

        client.delete_review(&created.id).await?;
        assert_eq!(client.find_review_by_id(&created.id).await?, None);
        assert!(
            client
                .delete_review(&created.id)
                .await
                .is_err_and(|e| e.is_not_found())
        );
        Ok(())
    }
}
