//! Review management handlers for CRUD operations.

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use moviehub_store::StoreClient;
use moviehub_store::model::Review;
use moviehub_store::query::ReviewRepository;

use crate::extract::{Json, Path, Query, ValidateJson};
use crate::handler::request::{ReviewFilter, ReviewPathParams, ReviewResource};
use crate::handler::{Error, ErrorKind, Result};
use crate::service::ServiceState;

/// Tracing target for review operations.
const TRACING_TARGET: &str = "moviehub_server::handler::reviews";

/// Returns all reviews, optionally restricted to a single movie info.
#[tracing::instrument(skip_all, fields(movie_info_id = ?filter.movie_info_id))]
async fn list_reviews(
    State(store): State<StoreClient>,
    Query(filter): Query<ReviewFilter>,
) -> Result<(StatusCode, Json<Vec<ReviewResource>>)> {
    tracing::debug!(target: TRACING_TARGET, "Listing reviews");

    let reviews = store.list_reviews(filter.movie_info_id.as_deref()).await?;

    tracing::debug!(
        target: TRACING_TARGET,
        review_count = reviews.len(),
        "Reviews listed",
    );

    let response = reviews.into_iter().map(ReviewResource::from_model).collect();
    Ok((StatusCode::OK, Json(response)))
}

/// Returns a review by its identifier.
#[tracing::instrument(skip_all, fields(review_id = %path_params.id))]
async fn get_review(
    State(store): State<StoreClient>,
    Path(path_params): Path<ReviewPathParams>,
) -> Result<(StatusCode, Json<ReviewResource>)> {
    tracing::debug!(target: TRACING_TARGET, "Reading review");

    let review = find_review(&store, &path_params.id).await?;
    Ok((StatusCode::OK, Json(ReviewResource::from_model(review))))
}

/// Creates a new review.
///
/// The referenced movie info is not checked; it may live in another service.
#[tracing::instrument(skip_all)]
async fn post_review(
    State(store): State<StoreClient>,
    ValidateJson(request): ValidateJson<ReviewResource>,
) -> Result<(StatusCode, Json<ReviewResource>)> {
    tracing::debug!(target: TRACING_TARGET, "Creating review");

    let review = store.create_review(request.into_new_model()).await?;

    tracing::info!(
        target: TRACING_TARGET,
        review_id = %review.id,
        movie_info_id = %review.movie_info_id,
        "Review created",
    );

    Ok((StatusCode::CREATED, Json(ReviewResource::from_model(review))))
}

/// Replaces every field of an existing review except its identifier.
#[tracing::instrument(skip_all, fields(review_id = %path_params.id))]
async fn update_review(
    State(store): State<StoreClient>,
    Path(path_params): Path<ReviewPathParams>,
    ValidateJson(request): ValidateJson<ReviewResource>,
) -> Result<(StatusCode, Json<ReviewResource>)> {
    tracing::debug!(target: TRACING_TARGET, "Updating review");

    let _ = find_review(&store, &path_params.id).await?;

    let review = store
        .update_review(&path_params.id, request.into_new_model())
        .await
        .map_err(|error| {
            if error.is_not_found() {
                not_found(&path_params.id)
            } else {
                error.into()
            }
        })?;

    tracing::info!(target: TRACING_TARGET, "Review updated");

    Ok((StatusCode::OK, Json(ReviewResource::from_model(review))))
}

/// Deletes a review by its identifier.
#[tracing::instrument(skip_all, fields(review_id = %path_params.id))]
async fn delete_review(
    State(store): State<StoreClient>,
    Path(path_params): Path<ReviewPathParams>,
) -> Result<StatusCode> {
    tracing::debug!(target: TRACING_TARGET, "Deleting review");

    let _ = find_review(&store, &path_params.id).await?;

    store
        .delete_review(&path_params.id)
        .await
        .map_err(|error| {
            if error.is_not_found() {
                not_found(&path_params.id)
            } else {
                error.into()
            }
        })?;

    tracing::info!(target: TRACING_TARGET, "Review deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// Finds a review by ID or returns NotFound error.
async fn find_review(store: &StoreClient, review_id: &str) -> Result<Review> {
    store
        .find_review_by_id(review_id)
        .await?
        .ok_or_else(|| not_found(review_id))
}

fn not_found(review_id: &str) -> Error<'static> {
    tracing::debug!(target: TRACING_TARGET, review_id, "Review not found");

    ErrorKind::NotFound
        .with_message(format!("Review not found for the given id {review_id}"))
        .with_resource("review")
}

/// Returns a [`Router`] with all review routes.
pub fn routes() -> Router<ServiceState> {
    Router::new()
        .route("/v1/reviews", get(list_reviews).post(post_review))
        .route(
            "/v1/reviews/{id}",
            get(get_review).put(update_review).delete(delete_review),
        )
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{Value, json};

    use super::*;
    use crate::handler::test::create_test_server_for;
    use crate::service::ServiceKind;

    fn review(movie_info_id: &str, rating: f64) -> Value {
        json!({
            "id": null,
            "movieInfoId": movie_info_id,
            "comment": "Awesome Movie",
            "rating": rating,
        })
    }

    async fn create(server: &TestServer, body: &Value) -> ReviewResource {
        let response = server.post("/v1/reviews").json(body).await;
        response.assert_status(StatusCode::CREATED);
        response.json::<ReviewResource>()
    }

    #[tokio::test]
    async fn create_review() -> anyhow::Result<()> {
        let (server, _) = create_test_server_for(ServiceKind::MovieReview)?;

        let created = create(&server, &review("1", 9.0)).await;

        assert!(created.id.is_some());
        assert_eq!(created.movie_info_id.as_deref(), Some("1"));
        assert_eq!(created.comment, "Awesome Movie");
        assert_eq!(created.rating, 9.0);
        Ok(())
    }

    #[tokio::test]
    async fn create_review_validation() -> anyhow::Result<()> {
        let (server, store) = create_test_server_for(ServiceKind::MovieReview)?;

        let body = json!({
            "id": null,
            "movieInfoId": null,
            "comment": "Awesome Movie",
            "rating": -9.0,
        });

        let response = server.post("/v1/reviews").json(&body).await;
        response.assert_status_bad_request();
        response.assert_text("must be greater than or equal to 0, must not be blank");
        assert_eq!(store.status().await.reviews, 0);
        Ok(())
    }

    #[tokio::test]
    async fn zero_rating_is_accepted() -> anyhow::Result<()> {
        let (server, _) = create_test_server_for(ServiceKind::MovieReview)?;

        let created = create(&server, &review("1", 0.0)).await;
        assert_eq!(created.rating, 0.0);
        Ok(())
    }

    #[tokio::test]
    async fn list_and_filter_by_movie_info() -> anyhow::Result<()> {
        let (server, _) = create_test_server_for(ServiceKind::MovieReview)?;
        let _ = create(&server, &review("1", 9.0)).await;
        let _ = create(&server, &review("2", 7.5)).await;
        let _ = create(&server, &review("1", 8.0)).await;

        let all = server.get("/v1/reviews").await;
        all.assert_status_ok();
        assert_eq!(all.json::<Vec<ReviewResource>>().len(), 3);

        let filtered = server
            .get("/v1/reviews")
            .add_query_param("movieInfoId", "1")
            .await
            .json::<Vec<ReviewResource>>();
        let ratings: Vec<_> = filtered.iter().map(|r| r.rating).collect();
        assert_eq!(ratings, [9.0, 8.0]);

        let none = server
            .get("/v1/reviews")
            .add_query_param("movieInfoId", "unknown")
            .await
            .json::<Vec<ReviewResource>>();
        assert!(none.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn get_by_id() -> anyhow::Result<()> {
        let (server, _) = create_test_server_for(ServiceKind::MovieReview)?;
        let created = create(&server, &review("1", 9.0)).await;
        let id = created.id.clone().unwrap_or_default();

        let response = server.get(&format!("/v1/reviews/{id}")).await;
        response.assert_status_ok();
        assert_eq!(response.json::<ReviewResource>(), created);

        let response = server.get("/v1/reviews/abc").await;
        response.assert_status_not_found();
        response.assert_text("Review not found for the given id abc");
        Ok(())
    }

    #[tokio::test]
    async fn update_review() -> anyhow::Result<()> {
        let (server, _) = create_test_server_for(ServiceKind::MovieReview)?;
        let created = create(&server, &review("1", 9.0)).await;
        let id = created.id.clone().unwrap_or_default();

        let mut body = review("1", 8.0);
        body["comment"] = json!("Not an Awesome Movie");

        let response = server.put(&format!("/v1/reviews/{id}")).json(&body).await;
        response.assert_status_ok();
        let updated = response.json::<ReviewResource>();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.comment, "Not an Awesome Movie");
        assert_eq!(updated.rating, 8.0);

        let response = server.put("/v1/reviews/abc").json(&body).await;
        response.assert_status_not_found();
        response.assert_text("Review not found for the given id abc");

        let response = server
            .put(&format!("/v1/reviews/{id}"))
            .json(&review(" ", 8.0))
            .await;
        response.assert_status_bad_request();
        response.assert_text("must not be blank");
        Ok(())
    }

    #[tokio::test]
    async fn delete_review() -> anyhow::Result<()> {
        let (server, _) = create_test_server_for(ServiceKind::MovieReview)?;
        let created = create(&server, &review("1", 9.0)).await;
        let id = created.id.unwrap_or_default();

        server
            .delete(&format!("/v1/reviews/{id}"))
            .await
            .assert_status(StatusCode::NO_CONTENT);

        let response = server.delete(&format!("/v1/reviews/{id}")).await;
        response.assert_status_not_found();
        response.assert_text(format!("Review not found for the given id {id}"));

        let remaining = server.get("/v1/reviews").await.json::<Vec<ReviewResource>>();
        assert!(remaining.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn closed_store_is_internal_error() -> anyhow::Result<()> {
        let (server, store) = create_test_server_for(ServiceKind::MovieReview)?;
        store.close();

        let response = server.post("/v1/reviews").json(&review("1", 9.0)).await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        response.assert_text("An internal server error occurred. Please try again later");
        Ok(())
    }
}
