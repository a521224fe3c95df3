//! Paycheck Deduction Engine
//!
//! This crate computes an employee's annual benefit deductions from their
//! salary and dependents and derives the per-paycheck salary, deductions
//! and net pay over the 26 pay periods of a year. It also serves the
//! figures over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod store;
