//! HTTP request handlers

pub mod calls;
pub mod cdr;
pub mod health;
pub mod subscribers;

pub use calls::configure as configure_calls;
pub use cdr::configure as configure_cdr;
pub use health::configure as configure_health;
pub use subscribers::configure as configure_subscribers;
