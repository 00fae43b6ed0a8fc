use crate::domain::entities::{Bridge, MemberId, TextEntity};

/// Converts Telegram text plus formatting entities into target markup
pub trait TextRenderer: Send + Sync {
    /// Render `text` for the channel paired by `bridge`. Absent text renders
    /// as an empty string.
    fn render_text(&self, text: Option<&str>, entities: &[TextEntity], bridge: &Bridge) -> String;
}

/// Resolves a Discord display name to a member
pub trait MemberLookup: Send + Sync {
    fn find_member(&self, display_name: &str) -> Option<MemberId>;
}

/// Everything the converter needs from the Discord side
pub trait TargetClient: TextRenderer + MemberLookup {}

impl<T: TextRenderer + MemberLookup + ?Sized> TargetClient for T {}
