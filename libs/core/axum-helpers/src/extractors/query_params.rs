//! Query string extractor with structured rejections.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

/// Query string extractor.
///
/// A query string that does not deserialize into `T` (for example a
/// repeated single-valued parameter) is rejected with 400 `BAD_REQUEST`
/// in the standard error body instead of axum's plain-text rejection.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::QueryParams;
///
/// async fn list(QueryParams(filter): QueryParams<ProductFilter>) -> String {
///     format!("{:?}", filter.category)
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryParams<T>(pub T);

impl<T, S> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()).into_response())?;

        Ok(QueryParams(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorResponse;
    use axum::{Router, body::Body, http::Request, http::StatusCode, routing::get};
    use http_body_util::BodyExt;
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize)]
    struct Filter {
        category: Option<String>,
    }

    async fn echo(QueryParams(filter): QueryParams<Filter>) -> String {
        filter.category.unwrap_or_default()
    }

    fn app() -> Router {
        Router::new().route("/items", get(echo))
    }

    #[tokio::test]
    async fn test_parses_query() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/items?category=Pants&page=2")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"Pants");
    }

    #[tokio::test]
    async fn test_duplicate_parameter_returns_error_body() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/items?category=Pants&category=Shoes")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.error, "BAD_REQUEST");
        assert!(body.message.contains("category"));
    }
}
