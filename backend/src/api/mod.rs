//! Operations behind the HTTP routes.

pub mod annotation;
pub mod health;
pub mod search;
