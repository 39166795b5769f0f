//! # cad-app
//!
//! Application layer for the Cadastro signup flow: use cases that connect
//! the domain core to infrastructure ports.

pub mod usecases;

pub use usecases::signup::SignupController;
