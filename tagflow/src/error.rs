use thiserror::Error;

/// Errors returned when an interaction targets a tag that cannot take it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TagError {
    /// The index does not name a present tag, usually because the tag list
    /// was replaced after the caller captured the index.
    #[error("Tag index {index} out of range ({count} tags)")]
    IndexOutOfRange { index: usize, count: usize },

    /// The tag exists but no activation handler was attached to it.
    #[error("Tag {0} is not activatable")]
    NotActivatable(usize),
}
