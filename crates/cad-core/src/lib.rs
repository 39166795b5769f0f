//! # cad-core
//!
//! Core domain models and business logic for the Cadastro signup flow.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod form;
pub mod ports;
pub mod signup;
pub mod validation;

// Re-export commonly used types at the crate root
pub use form::{FieldKey, FieldValues, FieldView, FormState, RegistrationPayload, SubmitStatus};
pub use signup::{SignupAction, SignupEvent, SignupStateMachine};
pub use validation::{validate_all, validate_field, ValidationOutcome};
