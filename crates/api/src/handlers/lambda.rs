//! API Gateway adapter.
//!
//! Converts `lambda_http` requests into [`ApiRequest`] and the resulting
//! [`ApiResponse`] back into an HTTP response. The Lambda runtime only ever
//! sees a successful response unless the response itself cannot be built.

use anyhow::Context;
use lambda_http::{Body, Error, Request, RequestExt, Response};
use users_core::response::ApiResponse;
use users_core::storage::UserRepository;

use super::users::{handle_request, ApiRequest};
use super::AppError;

/// Name of the API Gateway path parameter holding the user id.
pub const PATH_ID_PARAM: &str = "Id";

/// Lambda entry point for a single API Gateway invocation.
pub async fn function_handler(
    repo: &dyn UserRepository,
    event: Request,
) -> Result<Response<Body>, Error> {
    let response = match api_request(&event) {
        Ok(request) => handle_request(repo, request).await,
        Err(err) => AppError(err).into_response(),
    };

    into_http_response(response)
}

/// Extracts method, `Id` path parameter and body from the event.
fn api_request(event: &Request) -> anyhow::Result<ApiRequest> {
    let path_id = event
        .path_parameters_ref()
        .and_then(|params| params.first(PATH_ID_PARAM))
        .map(str::to_string);

    let body = match event.body() {
        Body::Text(text) => Some(text.clone()),
        Body::Binary(bytes) => Some(
            String::from_utf8(bytes.clone()).context("request body is not valid UTF-8")?,
        ),
        _ => None,
    };

    Ok(ApiRequest {
        method: Some(event.method().as_str().to_string()),
        path_id,
        body,
    })
}

fn into_http_response(response: ApiResponse) -> Result<Response<Body>, Error> {
    let mut builder = Response::builder().status(response.status_code);
    for (name, value) in &response.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }

    let resp = builder
        .body(Body::Text(response.body))
        .map_err(Box::new)?;
    Ok(resp)
}
