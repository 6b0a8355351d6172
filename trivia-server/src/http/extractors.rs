//! Custom Axum extractors
//!
//! Same as the stock `Json`, `Query` and `Path` extractors, but rejections
//! come back as [`ApiError`] so they render the JSON error envelope.

use std::convert::Infallible;

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;
use trivia_core::models::{Pagination, PaginationParams};

use super::error::ApiError;

/// JSON body. Well-formed JSON of the wrong shape is 422, anything else 400.
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(JsonRejection::JsonDataError(e)) => Err(ApiError::Unprocessable {
                reason: e.body_text(),
            }),
            Err(rejection) => Err(ApiError::BadRequest {
                reason: rejection.body_text(),
            }),
        }
    }
}

/// `?page=N`. Missing, non-integer or unreadable values mean the first page.
pub struct Page(pub Pagination);

impl<S> FromRequestParts<S> for Page
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let params = match Query::<PaginationParams>::from_request_parts(parts, state).await {
            Ok(Query(params)) => params,
            Err(e) => {
                tracing::debug!("Ignoring page query: {}", e.body_text());
                PaginationParams::default()
            }
        };

        Ok(Self(Pagination::from(params)))
    }
}

/// Integer id from the path. A non-integer segment does not match the
/// route, so it is a 404.
pub struct RowId(pub i32);

impl<S> FromRequestParts<S> for RowId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::BadRequest {
                reason: e.body_text(),
            })?;

        raw.parse::<i32>().map(Self).map_err(|_| ApiError::NotFound {
            resource: "route",
            id: raw,
        })
    }
}
