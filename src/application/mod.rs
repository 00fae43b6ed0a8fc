//! Application layer - Conversion use case
//! 
//! This layer contains:
//! - Services: display-name resolution, reply/forward annotation, composition
//! - Errors: failures at the edges of the conversion core

pub mod errors;
pub mod services;
