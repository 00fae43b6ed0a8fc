use std::collections::HashMap;

use crate::domain::entities::MemberId;
use crate::domain::traits::MemberLookup;

/// Discord members of the bridged channel, keyed by display name
#[derive(Debug, Clone, Default)]
pub struct MemberDirectory {
    members: HashMap<String, MemberId>,
}

impl MemberDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, display_name: impl Into<String>, id: MemberId) {
        self.members.insert(display_name.into(), id);
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, MemberId)> for MemberDirectory {
    fn from_iter<I: IntoIterator<Item = (S, MemberId)>>(iter: I) -> Self {
        Self {
            members: iter.into_iter().map(|(name, id)| (name.into(), id)).collect(),
        }
    }
}

impl MemberLookup for MemberDirectory {
    /// Exact display-name match
    fn find_member(&self, display_name: &str) -> Option<MemberId> {
        self.members.get(display_name).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_only() {
        let directory: MemberDirectory = [("Alice", MemberId(42))].into_iter().collect();
        assert_eq!(directory.find_member("Alice"), Some(MemberId(42)));
        assert_eq!(directory.find_member("alice"), None);
        assert_eq!(directory.len(), 1);
    }
}
