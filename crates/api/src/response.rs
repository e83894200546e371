//! Shared response envelope for API handlers.
//!
//! Every response, success or failure, uses the same shape:
//! `{ "success": bool, "data"?: T, "message"?: string,
//!    "error"?: { "message", "code" }, "status": u16 }`.
//! Use [`Envelope::ok`] / [`Envelope::created`] instead of ad-hoc
//! `serde_json::json!` blobs so handlers stay type-safe and consistent.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Standard success envelope wrapping a serializable payload.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub status: u16,
}

impl<T: Serialize> Envelope<T> {
    /// 200 OK with a payload.
    pub fn ok(data: T) -> (StatusCode, Json<Self>) {
        Self::with_status(StatusCode::OK, data)
    }

    /// 201 Created with a payload.
    pub fn created(data: T) -> (StatusCode, Json<Self>) {
        Self::with_status(StatusCode::CREATED, data)
    }

    fn with_status(status: StatusCode, data: T) -> (StatusCode, Json<Self>) {
        (
            status,
            Json(Self {
                success: true,
                data,
                message: None,
                status: status.as_u16(),
            }),
        )
    }
}

/// Success envelope with no payload (deletes).
#[derive(Debug, Serialize)]
pub struct MessageEnvelope {
    pub success: bool,
    pub message: String,
    pub status: u16,
}

impl MessageEnvelope {
    pub fn ok(message: impl Into<String>) -> Response {
        (
            StatusCode::OK,
            Json(Self {
                success: true,
                message: message.into(),
                status: StatusCode::OK.as_u16(),
            }),
        )
            .into_response()
    }
}
