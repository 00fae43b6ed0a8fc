//! Domain traits - Abstractions over the Discord side of the bridge

pub mod target;

pub use target::{MemberLookup, TargetClient, TextRenderer};
