//! Application services

pub mod converter;
pub mod display_name;
pub mod forward;
pub mod reply;

pub use converter::{ConversionSettings, MessageConverter};
pub use display_name::DisplayNameResolver;
pub use forward::annotate_forward;
pub use reply::{ReplyAnnotation, ReplyAnnotator};
