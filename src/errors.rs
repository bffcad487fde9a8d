use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use thiserror::Error;

use crate::domain::errors::WorkflowError;
use crate::domain::status::OrderStatus;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("cannot move order from {from} to {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    #[error("Order not found")]
    NotFound,

    #[error("Administrator access required")]
    Forbidden,

    #[error("Order was modified by another admin, reload and retry")]
    Conflict,

    #[error("Order store unavailable")]
    StoreUnavailable,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<WorkflowError> for AppError {
    fn from(e: WorkflowError) -> Self {
        match e {
            WorkflowError::InvalidTransition { from, to } => {
                AppError::InvalidTransition { from, to }
            }
            WorkflowError::NotFound => AppError::NotFound,
            WorkflowError::Forbidden => AppError::Forbidden,
            WorkflowError::Conflict { .. } => AppError::Conflict,
            WorkflowError::StoreUnavailable(msg) => {
                log::warn!("order store unavailable: {msg}");
                AppError::StoreUnavailable
            }
            WorkflowError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidTransition { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::Conflict => StatusCode::CONFLICT,
            AppError::StoreUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            // Never leak internal detail to the client.
            AppError::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        };
        HttpResponse::build(self.status_code()).json(serde_json::json!({ "error": message }))
    }
}

#[cfg(test)]
mod tests {
    use actix_web::ResponseError;

    use super::*;

    #[test]
    fn invalid_transition_returns_422() {
        let err = AppError::InvalidTransition {
            from: OrderStatus::Complete,
            to: OrderStatus::Pending,
        };
        assert_eq!(
            err.error_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn not_found_returns_404() {
        assert_eq!(AppError::NotFound.error_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn forbidden_returns_403() {
        assert_eq!(AppError::Forbidden.error_response().status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn conflict_returns_409() {
        assert_eq!(AppError::Conflict.error_response().status(), StatusCode::CONFLICT);
    }

    #[test]
    fn store_unavailable_returns_503() {
        assert_eq!(
            AppError::StoreUnavailable.error_response().status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn internal_detail_is_not_leaked() {
        let err = AppError::Internal("connection string with password".to_string());
        assert_eq!(
            err.error_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        // The Display impl carries detail for logs, the HTTP body must not.
        assert!(err.to_string().contains("password"));
    }

    #[test]
    fn invalid_transition_display_names_both_statuses() {
        let err = AppError::InvalidTransition {
            from: OrderStatus::Delivered,
            to: OrderStatus::Shipping,
        };
        assert_eq!(err.to_string(), "cannot move order from delivered to shipping");
    }

    #[test]
    fn workflow_conflict_maps_to_conflict() {
        let err: AppError = WorkflowError::Conflict {
            actual: OrderStatus::Shipping,
        }
        .into();
        assert!(matches!(err, AppError::Conflict));
    }

    #[test]
    fn workflow_invalid_transition_keeps_both_sides() {
        let err: AppError = WorkflowError::InvalidTransition {
            from: OrderStatus::Pending,
            to: OrderStatus::Complete,
        }
        .into();
        match err {
            AppError::InvalidTransition { from, to } => {
                assert_eq!(from, OrderStatus::Pending);
                assert_eq!(to, OrderStatus::Complete);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
