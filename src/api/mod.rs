//! HTTP API module for the Benefits Engine.
//!
//! This module exposes employees, dependents, and per-paycheck benefits
//! deductions as a REST API under `/api/v1`.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CreateDependentRequest, CreateEmployeeRequest, PaycheckQuery};
pub use response::{ApiError, ApiErrorResponse, DependentResponse, EmployeeResponse};
pub use state::AppState;
