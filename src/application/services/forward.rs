use super::DisplayNameResolver;
use crate::domain::entities::{Actor, Chat};

/// Wrap `from_name` with the original author of a forwarded message.
///
/// The forwarded actor doubles as its own chat context, so a forwarded
/// channel post is labelled by the channel title and a forwarded user post by
/// the user rule.
pub fn annotate_forward(source: &Actor, from_name: &str, resolver: &DisplayNameResolver) -> String {
    let forward_from = resolver.resolve(Some(source), &Chat::from(source));
    format!("{} (forwarded by {})", forward_from, from_name)
}
