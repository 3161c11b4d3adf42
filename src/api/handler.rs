//! Route handlers for the screenshot proxy.

use crate::api::{require_params, ErrorResponse, FileBody, FileRef};
use crate::upstream::{jpeg_data_uri, ScreenshotClient};
use crate::{Error, Result};
use axum::extract::{Query, State};
use axum::http::{header, Method};
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::collections::HashMap;
use std::sync::Arc;

/// `GET /api/url-to-image`
///
/// Validates the `url` query parameter, fetches a JPEG thumbnail of the
/// named page from the upstream API and returns it inlined as a data URI:
/// `{"file":{"url":"data:image/jpeg;base64,..."}}`.
pub async fn url_to_image(
    State(client): State<Arc<ScreenshotClient>>,
    Query(query): Query<HashMap<String, String>>,
) -> std::result::Result<Json<FileBody>, ErrorResponse> {
    get(&client, &query)
        .await
        .map(Json)
        .map_err(|e| ErrorResponse::from_error(&e))
}

async fn get(client: &ScreenshotClient, query: &HashMap<String, String>) -> Result<FileBody> {
    require_params(&["url"], query, "Missing required parameter")?;

    let url = &query["url"];
    let bytes = client.fetch_thumbnail(url).await?;

    Ok(FileBody {
        file: FileRef {
            url: jpeg_data_uri(&bytes),
        },
    })
}

/// Method fallback for the route: anything but `GET` is answered with 405
/// and an `Allow` header naming the accepted method.
pub async fn method_not_allowed(method: Method) -> Response {
    let body = ErrorResponse::from_error(&Error::MethodNotAllowed(method.to_string()));

    ([(header::ALLOW, "GET")], body).into_response()
}
