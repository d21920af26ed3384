//! Data Transfer Objects (DTOs) for API requests and responses

pub mod call;
pub mod cdr;
pub mod common;
pub mod subscriber;

pub use call::*;
pub use cdr::*;
pub use common::*;
pub use subscriber::*;
