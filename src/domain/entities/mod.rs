//! Domain entities - Read-only inputs and the single conversion output

pub mod actor;
pub mod bridge;
pub mod composed;
pub mod message;

pub use actor::{Actor, Channel, User};
pub use bridge::{BotIdentity, Bridge, MemberId};
pub use composed::{ComposedMessage, ConversionResult};
pub use message::{Chat, ChatKind, EntityKind, InboundMessage, TextEntity};
