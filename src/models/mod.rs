//! Core data models for the Benefits Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod dependent;
mod employee;
mod paycheck;

pub use dependent::{Dependent, DependentId, NewDependent, Relationship};
pub use employee::{Employee, EmployeeId, NewEmployee};
pub use paycheck::{AuditStep, PaycheckBreakdown, PaycheckCalculation};
