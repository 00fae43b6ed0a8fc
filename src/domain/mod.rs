//! Domain layer - Core bridge types with no platform dependencies
//! 
//! This layer contains:
//! - Entities: Actors, inbound messages, composed output, bridge identity
//! - Traits: Abstractions over the target platform (rendering, member lookup)

pub mod entities;
pub mod traits;
