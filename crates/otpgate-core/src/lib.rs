//! Ambient pieces shared by every otpgate service: error bodies, health
//! check, request ids and tracing setup.

pub mod error;
pub mod health;
pub mod middleware;
pub mod tracing;
