//! Variant Guard
//!
//! Single chokepoint turning a reply with the wrong `variant` into a reported
//! protocol error.

use std::fmt;

use crate::error::IpcError;
use crate::notify::Notifier;

/// Tag, or set of tags, a caller accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    One(&'static str),
    AnyOf(&'static [&'static str]),
}

impl Expected {
    pub fn matches(&self, received: &str) -> bool {
        match self {
            Self::One(tag) => *tag == received,
            Self::AnyOf(tags) => tags.contains(&received),
        }
    }
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One(tag) => f.write_str(tag),
            Self::AnyOf(tags) => f.write_str(&tags.join(",")),
        }
    }
}

/// Returns true when `received` is acceptable. Otherwise reports one
/// unexpected-variant error and returns false; the caller must abort.
pub fn expect_variant(expected: Expected, received: &str, notifier: &Notifier) -> bool {
    if expected.matches(received) {
        return true;
    }
    notifier.error(&IpcError::UnexpectedVariant {
        expected: expected.to_string(),
        received: received.to_string(),
    });
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::harness;

    #[test]
    fn test_single_tag() {
        let (_, sink, ipc) = harness();
        assert!(expect_variant(Expected::One("saved"), "saved", ipc.notifier()));
        assert!(sink.notices().is_empty());
    }

    #[test]
    fn test_tag_set() {
        let (_, sink, ipc) = harness();
        let expected = Expected::AnyOf(&["addedVariant", "addedOption"]);
        assert!(expect_variant(expected, "addedOption", ipc.notifier()));
        assert!(!expect_variant(expected, "addedMeal", ipc.notifier()));
        assert_eq!(sink.notices().len(), 1);
    }

    #[test]
    fn test_mismatch_reports_once_with_both_tags() {
        let (_, sink, ipc) = harness();
        assert!(!expect_variant(Expected::One("saved"), "closedDataset", ipc.notifier()));

        let notices = sink.notices();
        assert_eq!(notices.len(), 1);
        let detail = notices[0].detail.clone().unwrap();
        assert!(detail.contains("\"saved\""));
        assert!(detail.contains("\"closedDataset\""));
    }

    #[test]
    fn test_missing_tag_never_matches() {
        let (_, sink, ipc) = harness();
        assert!(!expect_variant(Expected::One("saved"), "", ipc.notifier()));
        assert_eq!(sink.notices().len(), 1);
    }
}
