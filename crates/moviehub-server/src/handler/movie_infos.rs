//! Movie info management handlers for CRUD operations.

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use moviehub_store::StoreClient;
use moviehub_store::model::MovieInfo;
use moviehub_store::query::MovieInfoRepository;

use crate::extract::{Json, Path, Query, ValidateJson};
use crate::handler::request::{MovieInfoFilter, MovieInfoPathParams, MovieInfoResource};
use crate::handler::{Error, ErrorKind, Result};
use crate::service::ServiceState;

/// Tracing target for movie info operations.
const TRACING_TARGET: &str = "moviehub_server::handler::movie_infos";

/// Returns all movie infos, optionally filtered by release year.
#[tracing::instrument(skip_all, fields(year = ?filter.year))]
async fn list_movie_infos(
    State(store): State<StoreClient>,
    Query(filter): Query<MovieInfoFilter>,
) -> Result<(StatusCode, Json<Vec<MovieInfoResource>>)> {
    tracing::debug!(target: TRACING_TARGET, "Listing movie infos");

    let movie_infos = store.list_movie_infos(filter.year).await?;

    tracing::debug!(
        target: TRACING_TARGET,
        movie_info_count = movie_infos.len(),
        "Movie infos listed",
    );

    let response = movie_infos
        .into_iter()
        .map(MovieInfoResource::from_model)
        .collect();

    Ok((StatusCode::OK, Json(response)))
}

/// Returns a movie info by its identifier.
#[tracing::instrument(skip_all, fields(movie_info_id = %path_params.id))]
async fn get_movie_info(
    State(store): State<StoreClient>,
    Path(path_params): Path<MovieInfoPathParams>,
) -> Result<(StatusCode, Json<MovieInfoResource>)> {
    tracing::debug!(target: TRACING_TARGET, "Reading movie info");

    let movie_info = find_movie_info(&store, &path_params.id).await?;

    Ok((StatusCode::OK, Json(MovieInfoResource::from_model(movie_info))))
}

/// Creates a new movie info; any client-supplied identifier is ignored.
#[tracing::instrument(skip_all)]
async fn post_movie_info(
    State(store): State<StoreClient>,
    ValidateJson(request): ValidateJson<MovieInfoResource>,
) -> Result<(StatusCode, Json<MovieInfoResource>)> {
    tracing::debug!(target: TRACING_TARGET, "Creating movie info");

    let movie_info = store.create_movie_info(request.into_new_model()).await?;

    tracing::info!(
        target: TRACING_TARGET,
        movie_info_id = %movie_info.id,
        "Movie info created",
    );

    Ok((
        StatusCode::CREATED,
        Json(MovieInfoResource::from_model(movie_info)),
    ))
}

/// Replaces every field of an existing movie info except its identifier.
#[tracing::instrument(skip_all, fields(movie_info_id = %path_params.id))]
async fn update_movie_info(
    State(store): State<StoreClient>,
    Path(path_params): Path<MovieInfoPathParams>,
    ValidateJson(request): ValidateJson<MovieInfoResource>,
) -> Result<(StatusCode, Json<MovieInfoResource>)> {
    tracing::debug!(target: TRACING_TARGET, "Updating movie info");

    let _ = find_movie_info(&store, &path_params.id).await?;

    let movie_info = store
        .update_movie_info(&path_params.id, request.into_new_model())
        .await
        .map_err(|error| {
            if error.is_not_found() {
                not_found(&path_params.id)
            } else {
                error.into()
            }
        })?;

    tracing::info!(target: TRACING_TARGET, "Movie info updated");

    Ok((StatusCode::OK, Json(MovieInfoResource::from_model(movie_info))))
}

/// Deletes a movie info by its identifier.
#[tracing::instrument(skip_all, fields(movie_info_id = %path_params.id))]
async fn delete_movie_info(
    State(store): State<StoreClient>,
    Path(path_params): Path<MovieInfoPathParams>,
) -> Result<StatusCode> {
    tracing::debug!(target: TRACING_TARGET, "Deleting movie info");

    let _ = find_movie_info(&store, &path_params.id).await?;

    store
        .delete_movie_info(&path_params.id)
        .await
        .map_err(|error| {
            if error.is_not_found() {
                not_found(&path_params.id)
            } else {
                error.into()
            }
        })?;

    tracing::info!(target: TRACING_TARGET, "Movie info deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// Finds a movie info by ID or returns NotFound error.
async fn find_movie_info(store: &StoreClient, movie_info_id: &str) -> Result<MovieInfo> {
    store
        .find_movie_info_by_id(movie_info_id)
        .await?
        .ok_or_else(|| not_found(movie_info_id))
}

fn not_found(movie_info_id: &str) -> Error<'static> {
    tracing::debug!(target: TRACING_TARGET, movie_info_id, "Movie info not found");

    ErrorKind::NotFound
        .with_message(format!("MovieInfo not found for the given id {movie_info_id}"))
        .with_resource("movie_info")
}

/// Returns a [`Router`] with all movie info routes.
pub fn routes() -> Router<ServiceState> {
    Router::new()
        .route(
            "/v1/movieinfos",
            get(list_movie_infos).post(post_movie_info),
        )
        .route(
            "/v1/movieinfos/{id}",
            get(get_movie_info)
                .put(update_movie_info)
                .delete(delete_movie_info),
        )
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use super::*;
    use crate::handler::test::create_test_server_for;
    use crate::service::ServiceKind;

    fn nobody() -> serde_json::Value {
        json!({
            "id": null,
            "name": "Nobody",
            "year": 2021,
            "cast": ["Bob Odenkirk"],
            "releaseDate": "2021-03-26",
        })
    }

    fn john_wick() -> serde_json::Value {
        json!({
            "id": null,
            "name": "John Wick",
            "year": 2014,
            "cast": ["Keanu Reeves"],
            "releaseDate": "2014-10-24",
        })
    }

    async fn create(server: &axum_test::TestServer, body: &serde_json::Value) -> MovieInfoResource {
        let response = server.post("/v1/movieinfos").json(body).await;
        response.assert_status(StatusCode::CREATED);
        response.json::<MovieInfoResource>()
    }

    #[tokio::test]
    async fn create_movie_info() -> anyhow::Result<()> {
        let (server, _) = create_test_server_for(ServiceKind::MovieInfo)?;

        let created = create(&server, &nobody()).await;

        assert!(created.id.is_some());
        assert_eq!(created.name.as_deref(), Some("Nobody"));
        assert_eq!(created.year, 2021);
        assert_eq!(created.cast, ["Bob Odenkirk"]);
        assert_eq!(created.release_date, Some(jiff::civil::date(2021, 3, 26)));
        Ok(())
    }

    #[tokio::test]
    async fn create_ignores_client_supplied_id() -> anyhow::Result<()> {
        let (server, _) = create_test_server_for(ServiceKind::MovieInfo)?;

        let mut body = nobody();
        body["id"] = json!("abc");
        let created = create(&server, &body).await;

        assert!(created.id.is_some());
        assert_ne!(created.id.as_deref(), Some("abc"));
        server.get("/v1/movieinfos/abc").await.assert_status_not_found();
        Ok(())
    }

    #[tokio::test]
    async fn create_movie_info_validation() -> anyhow::Result<()> {
        let (server, store) = create_test_server_for(ServiceKind::MovieInfo)?;

        let body = json!({
            "id": null,
            "name": "",
            "year": -9999,
            "cast": ["", "Connie Nielsen"],
            "releaseDate": "2021-04-13",
        });

        let response = server.post("/v1/movieinfos").json(&body).await;
        response.assert_status_bad_request();
        response.assert_text("must be greater than 0,must not be blank,must not be blank");
        assert_eq!(store.status().await.movie_infos, 0);
        Ok(())
    }

    #[tokio::test]
    async fn null_cast_and_missing_year_are_validation_errors() -> anyhow::Result<()> {
        let (server, store) = create_test_server_for(ServiceKind::MovieInfo)?;

        let body = json!({
            "name": "Nobody",
            "cast": null,
            "releaseDate": "2021-03-26",
        });

        let response = server.post("/v1/movieinfos").json(&body).await;
        response.assert_status_bad_request();
        response.assert_text("must be greater than 0");
        assert_eq!(store.status().await.movie_infos, 0);
        Ok(())
    }

    #[tokio::test]
    async fn missing_release_date_is_accepted() -> anyhow::Result<()> {
        let (server, _) = create_test_server_for(ServiceKind::MovieInfo)?;

        let mut body = nobody();
        if let Some(fields) = body.as_object_mut() {
            fields.remove("releaseDate");
        }
        let created = create(&server, &body).await;

        assert_eq!(created.release_date, None);
        let response = server
            .get(&format!("/v1/movieinfos/{}", created.id.unwrap_or_default()))
            .await;
        response.assert_status_ok();
        assert_eq!(response.json::<serde_json::Value>()["releaseDate"], json!(null));
        Ok(())
    }

    #[tokio::test]
    async fn malformed_body_is_bad_request() -> anyhow::Result<()> {
        let (server, _) = create_test_server_for(ServiceKind::MovieInfo)?;

        let mut body = nobody();
        body["year"] = json!("two thousand");

        let response = server.post("/v1/movieinfos").json(&body).await;
        response.assert_status_bad_request();
        assert!(response.text().starts_with("Invalid request data format"));
        Ok(())
    }

    #[tokio::test]
    async fn list_and_filter_by_year() -> anyhow::Result<()> {
        let (server, _) = create_test_server_for(ServiceKind::MovieInfo)?;
        let _ = create(&server, &nobody()).await;
        let _ = create(&server, &john_wick()).await;

        let all = server.get("/v1/movieinfos").await;
        all.assert_status_ok();
        let names: Vec<_> = all
            .json::<Vec<MovieInfoResource>>()
            .into_iter()
            .filter_map(|m| m.name)
            .collect();
        assert_eq!(names, ["Nobody", "John Wick"]);

        let filtered = server
            .get("/v1/movieinfos")
            .add_query_param("year", 2014)
            .await
            .json::<Vec<MovieInfoResource>>();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name.as_deref(), Some("John Wick"));

        server
            .get("/v1/movieinfos")
            .add_query_param("year", "latest")
            .await
            .assert_status_bad_request();
        Ok(())
    }

    #[tokio::test]
    async fn get_by_id() -> anyhow::Result<()> {
        let (server, _) = create_test_server_for(ServiceKind::MovieInfo)?;
        let created = create(&server, &nobody()).await;
        let id = created.id.clone().unwrap_or_default();

        let response = server.get(&format!("/v1/movieinfos/{id}")).await;
        response.assert_status_ok();
        assert_eq!(response.json::<MovieInfoResource>(), created);

        let response = server.get("/v1/movieinfos/def").await;
        response.assert_status_not_found();
        response.assert_text("MovieInfo not found for the given id def");
        Ok(())
    }

    #[tokio::test]
    async fn update_movie_info() -> anyhow::Result<()> {
        let (server, _) = create_test_server_for(ServiceKind::MovieInfo)?;
        let created = create(&server, &nobody()).await;
        let id = created.id.clone().unwrap_or_default();

        let mut body = nobody();
        body["name"] = json!("Nobody 2");
        body["id"] = json!("ignored");

        let response = server.put(&format!("/v1/movieinfos/{id}")).json(&body).await;
        response.assert_status_ok();
        let updated = response.json::<MovieInfoResource>();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name.as_deref(), Some("Nobody 2"));

        let response = server.put("/v1/movieinfos/def").json(&nobody()).await;
        response.assert_status_not_found();
        response.assert_text("MovieInfo not found for the given id def");

        let mut invalid = nobody();
        invalid["name"] = json!("  ");
        let response = server.put(&format!("/v1/movieinfos/{id}")).json(&invalid).await;
        response.assert_status_bad_request();
        response.assert_text("must not be blank");
        Ok(())
    }

    #[tokio::test]
    async fn delete_movie_info() -> anyhow::Result<()> {
        let (server, _) = create_test_server_for(ServiceKind::MovieInfo)?;
        let created = create(&server, &nobody()).await;
        let id = created.id.unwrap_or_default();

        server
            .delete(&format!("/v1/movieinfos/{id}"))
            .await
            .assert_status(StatusCode::NO_CONTENT);

        server
            .get(&format!("/v1/movieinfos/{id}"))
            .await
            .assert_status_not_found();

        let response = server.delete(&format!("/v1/movieinfos/{id}")).await;
        response.assert_status_not_found();
        response.assert_text(format!("MovieInfo not found for the given id {id}"));
        Ok(())
    }

    #[tokio::test]
    async fn closed_store_is_internal_error() -> anyhow::Result<()> {
        let (server, store) = create_test_server_for(ServiceKind::MovieInfo)?;
        store.close();

        let response = server.get("/v1/movieinfos").await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        response.assert_text("An internal server error occurred. Please try again later");

        let response = server.post("/v1/movieinfos").json(&nobody()).await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!response.text().contains("closed"));
        Ok(())
    }
}
