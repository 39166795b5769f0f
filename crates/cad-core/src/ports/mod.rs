//! Port interfaces for the application layer
//!
//! Ports define the contract between the signup logic and its external
//! collaborators. The core depends only on these signatures; transport,
//! toasts, and screen transitions live behind infrastructure
//! implementations.

pub mod errors;
pub mod navigation;
pub mod notification;
pub mod registration;

pub use errors::RegistrationError;
pub use navigation::{Destination, NavigationPort};
pub use notification::NotificationPort;
pub use registration::RegistrationPort;
