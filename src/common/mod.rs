pub mod app_state;
pub mod error;
pub mod middleware;
pub mod services;
pub mod validation;
