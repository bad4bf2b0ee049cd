//! Procedure records and the mock search backend.
//!
//! Provides the record model, the synthetic dataset generator, and the
//! delayed search stub that stands in for a real document backend.

pub mod generator;
pub mod models;

pub use generator::{CATEGORIES, MANAGERS, execute_search, generate_procedures};
pub use models::{Procedure, ProcedureStatus};
