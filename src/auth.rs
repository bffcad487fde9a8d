use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::http::header;
use actix_web::{web, FromRequest, HttpRequest};

use crate::errors::AppError;

/// Shared-secret administrative capability. Every console route extracts an
/// `AdminActor`, so a request without the capability is rejected before any
/// workflow code runs.
pub struct AdminAuth {
    token: String,
}

impl AdminAuth {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

/// Proof that the request carries the administrative capability.
#[derive(Debug)]
pub struct AdminActor;

impl FromRequest for AdminActor {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authorize(req))
    }
}

fn authorize(req: &HttpRequest) -> Result<AdminActor, AppError> {
    let Some(auth) = req.app_data::<web::Data<AdminAuth>>() else {
        return Err(AppError::Internal(
            "admin auth is not configured".to_string(),
        ));
    };

    let presented = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));

    match presented {
        Some(token) if token == auth.token => Ok(AdminActor),
        _ => Err(AppError::Forbidden),
    }
}

#[cfg(test)]
mod tests {
    use actix_web::test::TestRequest;

    use super::*;

    fn request_with(header_value: Option<&str>) -> HttpRequest {
        let mut req = TestRequest::default().app_data(web::Data::new(AdminAuth::new("secret")));
        if let Some(value) = header_value {
            req = req.insert_header((header::AUTHORIZATION, value));
        }
        req.to_http_request()
    }

    #[test]
    fn matching_bearer_token_is_accepted() {
        assert!(authorize(&request_with(Some("Bearer secret"))).is_ok());
    }

    #[test]
    fn wrong_token_is_forbidden() {
        let err = authorize(&request_with(Some("Bearer wrong"))).unwrap_err();
        assert!(matches!(err, AppError::Forbidden));
    }

    #[test]
    fn missing_header_is_forbidden() {
        let err = authorize(&request_with(None)).unwrap_err();
        assert!(matches!(err, AppError::Forbidden));
    }

    #[test]
    fn non_bearer_scheme_is_forbidden() {
        let err = authorize(&request_with(Some("Basic secret"))).unwrap_err();
        assert!(matches!(err, AppError::Forbidden));
    }

    #[test]
    fn unconfigured_auth_is_an_internal_error() {
        let req = TestRequest::default().to_http_request();
        let err = authorize(&req).unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
    }
}
