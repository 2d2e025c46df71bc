//! HTTP request handlers for the Benefits Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::{Local, NaiveDate};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_paycheck, calculate_paycheck_with_audit};
use crate::error::EngineError;
use crate::models::{DependentId, Employee, EmployeeId};

use super::request::{CreateDependentRequest, CreateEmployeeRequest, PaycheckQuery};
use super::response::{ApiError, ApiErrorResponse, DependentResponse, EmployeeResponse};
use super::state::AppState;

/// Creates the API router with all endpoints under `/api/v1`.
pub fn create_router(state: AppState) -> Router {
    let routes = Router::new()
        .route(
            "/employees",
            get(list_employees_handler).post(create_employee_handler),
        )
        .route("/employees/:id", get(get_employee_handler))
        .route("/employees/:id/paycheck", get(paycheck_handler))
        .route("/employees/:id/paycheck/audit", get(paycheck_audit_handler))
        .route(
            "/dependents",
            get(list_dependents_handler).post(create_dependent_handler),
        )
        .route("/dependents/:id", get(get_dependent_handler));

    Router::new().nest("/api/v1", routes).with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn engine_error_response(correlation_id: Uuid, error: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %error,
        "Request rejected"
    );
    ApiErrorResponse::from(error).into_response()
}

fn json_rejection_error(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's message, including the field name
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
    ApiErrorResponse::bad_request(error).into_response()
}

fn path_rejection_error(correlation_id: Uuid, rejection: PathRejection) -> Response {
    let body_text = rejection.body_text();
    warn!(
        correlation_id = %correlation_id,
        error = %body_text,
        "Invalid path parameter"
    );
    ApiErrorResponse::bad_request(ApiError::invalid_path(body_text)).into_response()
}

/// Handler for GET /employees.
async fn list_employees_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();

    let employees: Vec<EmployeeResponse> = state
        .store()
        .list_employees()
        .await
        .into_iter()
        .map(Into::into)
        .collect();

    info!(
        correlation_id = %correlation_id,
        count = employees.len(),
        "Listed employees"
    );
    json_response(StatusCode::OK, employees)
}

/// Handler for GET /employees/:id.
async fn get_employee_handler(
    State(state): State<AppState>,
    path: Result<Path<EmployeeId>, PathRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let id = match path {
        Ok(Path(id)) => id,
        Err(rejection) => return path_rejection_error(correlation_id, rejection),
    };

    match state.store().get_employee(id).await {
        Ok(employee) => {
            info!(correlation_id = %correlation_id, employee_id = id, "Fetched employee");
            json_response(StatusCode::OK, EmployeeResponse::from(employee))
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Resolves the employee and reference date shared by both paycheck routes.
///
/// Ages are computed on `asOf` when given, otherwise on today's local date.
async fn resolve_paycheck_input(
    state: &AppState,
    correlation_id: Uuid,
    path: Result<Path<EmployeeId>, PathRejection>,
    query: Result<Query<PaycheckQuery>, QueryRejection>,
) -> Result<(Employee, NaiveDate), Response> {
    let id = match path {
        Ok(Path(id)) => id,
        Err(rejection) => return Err(path_rejection_error(correlation_id, rejection)),
    };

    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => {
            let body_text = rejection.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "Invalid paycheck query"
            );
            return Err(
                ApiErrorResponse::bad_request(ApiError::invalid_query(body_text)).into_response(),
            );
        }
    };
    let as_of = query.as_of.unwrap_or_else(|| Local::now().date_naive());

    match state.store().get_employee(id).await {
        Ok(employee) => Ok((employee, as_of)),
        Err(err) => Err(engine_error_response(correlation_id, err)),
    }
}

/// Handler for GET /employees/:id/paycheck.
async fn paycheck_handler(
    State(state): State<AppState>,
    path: Result<Path<EmployeeId>, PathRejection>,
    query: Result<Query<PaycheckQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing paycheck request");

    let (employee, as_of) = match resolve_paycheck_input(&state, correlation_id, path, query).await
    {
        Ok(input) => input,
        Err(response) => return response,
    };

    // One snapshot for the whole calculation
    let settings = state.settings();

    let start_time = Instant::now();
    let breakdown = calculate_paycheck(&employee, &settings, as_of);
    let duration = start_time.elapsed();

    info!(
        correlation_id = %correlation_id,
        employee_id = employee.id,
        as_of = %as_of,
        dependents_count = employee.dependents.len(),
        gross_pay = %breakdown.gross_pay,
        net_pay = %breakdown.net_pay,
        duration_us = duration.as_micros(),
        "Paycheck calculated successfully"
    );
    json_response(StatusCode::OK, breakdown)
}

/// Handler for GET /employees/:id/paycheck/audit.
///
/// Returns the breakdown together with every rule decision behind it.
async fn paycheck_audit_handler(
    State(state): State<AppState>,
    path: Result<Path<EmployeeId>, PathRejection>,
    query: Result<Query<PaycheckQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing paycheck audit request");

    let (employee, as_of) = match resolve_paycheck_input(&state, correlation_id, path, query).await
    {
        Ok(input) => input,
        Err(response) => return response,
    };

    let calculation = calculate_paycheck_with_audit(&employee, &state.settings(), as_of);

    info!(
        correlation_id = %correlation_id,
        employee_id = employee.id,
        as_of = %as_of,
        audit_steps = calculation.audit_steps.len(),
        "Paycheck audit produced"
    );
    json_response(StatusCode::OK, calculation)
}

/// Handler for POST /employees.
async fn create_employee_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateEmployeeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing create employee request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_error(correlation_id, rejection),
    };

    match state.store().create_employee(request.into()).await {
        Ok(employee) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = employee.id,
                dependents_count = employee.dependents.len(),
                "Employee created"
            );
            json_response(StatusCode::CREATED, EmployeeResponse::from(employee))
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for GET /dependents.
async fn list_dependents_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();

    let dependents: Vec<DependentResponse> = state
        .store()
        .list_dependents()
        .await
        .into_iter()
        .map(Into::into)
        .collect();

    info!(
        correlation_id = %correlation_id,
        count = dependents.len(),
        "Listed dependents"
    );
    json_response(StatusCode::OK, dependents)
}

/// Handler for GET /dependents/:id.
async fn get_dependent_handler(
    State(state): State<AppState>,
    path: Result<Path<DependentId>, PathRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let id = match path {
        Ok(Path(id)) => id,
        Err(rejection) => return path_rejection_error(correlation_id, rejection),
    };

    match state.store().get_dependent(id).await {
        Ok(dependent) => {
            info!(correlation_id = %correlation_id, dependent_id = id, "Fetched dependent");
            json_response(StatusCode::OK, DependentResponse::from(dependent))
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for POST /dependents.
async fn create_dependent_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateDependentRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing create dependent request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_error(correlation_id, rejection),
    };

    match state.store().add_dependent(request.into()).await {
        Ok(dependent) => {
            info!(
                correlation_id = %correlation_id,
                dependent_id = dependent.id,
                employee_id = dependent.employee_id,
                relationship = ?dependent.relationship,
                "Dependent added"
            );
            json_response(StatusCode::CREATED, DependentResponse::from(dependent))
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}
