//! Benefits Engine
//!
//! This crate computes the per-paycheck benefits deductions for an employee
//! and their dependents, applies the single spouse-or-partner eligibility
//! rule when dependents are admitted, and serves both over an HTTP API.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
pub mod validation;
