//! Backend API Wrappers
//!
//! Frontend bindings to the site's private API, organized by domain.

mod validation;

pub use validation::*;
