use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    errors::{AppError, AppResult},
    infra::app_state::AppState,
    mailing_list::Enrollment,
};

pub const INVALID_EMAIL_MESSAGE: &str = "Valid email is required";

#[derive(Debug, Deserialize)]
pub struct SubscribeRequest {
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SubscribeResponse {
    pub message: &'static str,
}

/// POST /api/subscribe
///
/// The only validation is that the address contains an `@`; the mailing
/// list provider does the rest.
pub async fn subscribe_handler(
    State(state): State<AppState>,
    payload: Result<Json<SubscribeRequest>, JsonRejection>,
) -> AppResult<Json<SubscribeResponse>> {
    let email = match payload {
        Ok(Json(SubscribeRequest { email: Some(email) }))
            if email.contains('@') =>
        {
            email
        }
        Ok(_) => return Err(AppError::bad_request(INVALID_EMAIL_MESSAGE)),
        Err(rejection) => {
            debug!("Unreadable subscribe body: {}", rejection);
            return Err(AppError::bad_request(INVALID_EMAIL_MESSAGE));
        }
    };

    let enrollment = state.mailing_list.subscribe(&email).await?;
    if enrollment == Enrollment::Subscribed {
        info!("New newsletter subscriber");
    }

    Ok(Json(SubscribeResponse {
        message: enrollment.message(),
    }))
}

/// Any method other than POST. OPTIONS never gets here; the CORS layer
/// answers it.
pub async fn method_not_allowed() -> AppError {
    AppError::method_not_allowed()
}
