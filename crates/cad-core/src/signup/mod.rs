//! Signup domain module.
//!
//! This module defines the registration submission state machine types.

pub mod action;
pub mod event;
pub mod state_machine;

pub use action::SignupAction;
pub use event::SignupEvent;
pub use state_machine::{SignupStateMachine, FAILURE_NOTICE, SUCCESS_NOTICE};
