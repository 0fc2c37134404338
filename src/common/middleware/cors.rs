use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Request, State},
    http::{
        HeaderMap, HeaderValue, Method, StatusCode,
        header::{
            ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_HEADERS,
            ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN, ORIGIN, VARY,
        },
    },
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::{debug, warn};

use crate::common::{app_state::AppState, error::ServerError, services::util::extract_header};

static ALLOWED_METHODS: &str = "GET, POST";
static ALLOWED_HEADERS: &str = "content-type";

/// Grants cross-origin access to the single configured frontend origin.
pub async fn cors_mw(
    State(state): State<Arc<AppState>>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, ServerError> {
    let origin = extract_header(ORIGIN.as_str(), req.headers());
    let allowed = origin
        .as_deref()
        .is_some_and(|o| o == state.get_allowed_origin());

    if req.method() == Method::OPTIONS {
        if !allowed {
            warn!("Rejected preflight from origin: {:?}", origin);
            return Err(ServerError::Api(
                StatusCode::FORBIDDEN,
                "Origin not allowed".into(),
            ));
        }

        debug!("Answering preflight for {}", state.get_allowed_origin());
        let mut response = StatusCode::NO_CONTENT.into_response();
        apply_cors_headers(response.headers_mut(), state.get_allowed_origin())?;
        return Ok(response);
    }

    let mut response = next.run(req).await;
    if allowed {
        apply_cors_headers(response.headers_mut(), state.get_allowed_origin())?;
    }

    Ok(response)
}

fn apply_cors_headers(headers: &mut HeaderMap, origin: &str) -> Result<(), ServerError> {
    let origin = HeaderValue::from_str(origin)
        .map_err(|e| ServerError::Internal(format!("Invalid allowed origin: {}", e)))?;

    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, origin);
    headers.insert(
        ACCESS_CONTROL_ALLOW_CREDENTIALS,
        HeaderValue::from_static("true"),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOWED_METHODS),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOWED_HEADERS),
    );
    headers.insert(VARY, HeaderValue::from_static("origin"));

    Ok(())
}
