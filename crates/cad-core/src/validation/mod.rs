//! Declarative validation for the registration form.
//!
//! Pure and side-effect free: rules map a raw string to a verdict, and the
//! schema applies each field's rules in declared order with the first
//! failure winning.

pub mod schema;

pub use schema::{validate_all, validate_field, ValidationOutcome};
