/// Identifier of the post whose replies are drawn from.
///
/// Built from whatever the user pasted; the id is not checked for shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostReference {
    pub id: String,
}

impl PostReference {
    pub fn from_url(url: &str) -> Self {
        Self {
            id: extract_post_id(url).to_string(),
        }
    }
}

/// Return the last `/`-delimited segment of a post URL.
///
/// No parsing happens here: `https://x.com/user/status/123/` yields `""` and
/// `https://x.com/user/status/123?s=20` yields `"123?s=20"`. A bad id is left
/// for the reply lookup to reject.
pub fn extract_post_id(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or_default()
}
