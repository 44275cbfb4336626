//! HTTP request handlers for the technician payments API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::calculation::{build_payment_listing, build_payment_records};
use crate::error::EngineError;
use crate::models::PaymentReport;

use super::request::{PaymentListQuery, TechnicianHoursRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/technicians/payments", post(payments_handler))
        .route("/technicians/report", post(report_handler))
        .route("/rate-schedule", get(rate_schedule_handler))
        .with_state(state)
}

/// Handler for POST /technicians/payments.
///
/// Lists each technician's hours, orders and rounded payment, optionally
/// filtered by the `name` query parameter.
async fn payments_handler(
    State(state): State<AppState>,
    Query(query): Query<PaymentListQuery>,
    payload: Result<Json<TechnicianHoursRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        name_filter = %query.name,
        "Processing payment listing request"
    );

    let request = match parse_payload(payload, correlation_id) {
        Ok(request) => request,
        Err(api_error) => return api_error.into_response(),
    };

    let start_time = Instant::now();
    match build_payment_listing(state.schedule(), &request.technicians, &query.name) {
        Ok(listing) => {
            info!(
                correlation_id = %correlation_id,
                technicians_count = request.technicians.len(),
                listed_count = listing.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Payment listing completed successfully"
            );
            (StatusCode::OK, Json(listing)).into_response()
        }
        Err(err) => engine_error_response(err, correlation_id),
    }
}

/// Handler for POST /technicians/report.
///
/// Returns the average payment, the technicians paid below it, and the
/// lowest- and highest-paid technicians.
async fn report_handler(
    State(state): State<AppState>,
    payload: Result<Json<TechnicianHoursRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payment report request");

    let request = match parse_payload(payload, correlation_id) {
        Ok(request) => request,
        Err(api_error) => return api_error.into_response(),
    };

    let start_time = Instant::now();
    match build_payment_records(state.schedule(), &request.technicians) {
        Ok(records) => {
            let report = PaymentReport::from_records(&records);
            info!(
                correlation_id = %correlation_id,
                technicians_count = records.len(),
                below_average_count = report.below_average.len(),
                average_payment = %report.average_payment,
                duration_us = start_time.elapsed().as_micros(),
                "Payment report completed successfully"
            );
            (StatusCode::OK, Json(report.summary())).into_response()
        }
        Err(err) => engine_error_response(err, correlation_id),
    }
}

/// Handler for GET /rate-schedule.
async fn rate_schedule_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.schedule().clone())
}

/// Unwraps a JSON body, translating extractor rejections into API errors.
fn parse_payload(
    payload: Result<Json<TechnicianHoursRequest>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<TechnicianHoursRequest, ApiErrorResponse> {
    let rejection = match payload {
        Ok(Json(request)) => return Ok(request),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's description of the problem
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    Err(ApiErrorResponse::bad_request(error))
}

/// Logs an engine failure at the severity it deserves and converts it to a response.
fn engine_error_response(err: EngineError, correlation_id: Uuid) -> Response {
    match &err {
        EngineError::InvalidInput { .. } => {
            warn!(correlation_id = %correlation_id, error = %err, "Rejected technician hours");
        }
        _ => {
            error!(correlation_id = %correlation_id, error = %err, "Payment calculation failed");
        }
    }
    ApiErrorResponse::from(err).into_response()
}
