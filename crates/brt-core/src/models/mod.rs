//! Domain models for the BRT billing API
//!
//! This module contains all the core domain models used throughout the application.

pub mod call;
pub mod cdr;
pub mod msisdn;
pub mod subscriber;

pub use call::CallRecord;
pub use cdr::CdrRecord;
pub use subscriber::Subscriber;
