pub mod twitter;

use async_trait::async_trait;

use crate::error::FetchError;

/// One reply to the post being drawn from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub author_id: String,
    pub text: String,
}

impl Participant {
    pub fn new(author_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            author_id: author_id.into(),
            text: text.into(),
        }
    }
}

/// Source of the replies to a post.
///
/// Every reply is returned as its own [`Participant`], including repeat
/// replies from one author.
#[async_trait]
pub trait ReplyFetcher: Send + Sync {
    async fn fetch_replies(&self, post_id: &str) -> Result<Vec<Participant>, FetchError>;
}
