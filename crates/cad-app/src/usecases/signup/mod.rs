//! Signup use cases.

mod controller;

pub use controller::SignupController;
