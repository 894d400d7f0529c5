use super::{Participant, ReplyFetcher};
use crate::config::TwitterConfig;
use crate::error::FetchError;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Bounds accepted by the recent-search endpoint for `max_results`.
const MIN_PAGE_SIZE: u32 = 10;
const MAX_PAGE_SIZE: u32 = 100;

/// Looks up replies through the Twitter v2 recent-search endpoint.
///
/// Only the first page is read, so a post with more replies than
/// `page_size` is drawn from a partial population.
pub struct TwitterReplyFetcher {
    bearer_token: Option<String>,
    api_base: String,
    page_size: u32,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    data: Vec<ApiTweet>,
}

#[derive(Debug, Deserialize)]
struct ApiTweet {
    #[allow(dead_code)]
    id: String,
    text: String,
    author_id: String,
}

impl TwitterReplyFetcher {
    pub fn new(config: &TwitterConfig, bearer_token: Option<String>) -> Self {
        let page_size = config.page_size.clamp(MIN_PAGE_SIZE, MAX_PAGE_SIZE);
        if page_size != config.page_size {
            warn!(
                "page_size {} outside {}..={}, using {}",
                config.page_size, MIN_PAGE_SIZE, MAX_PAGE_SIZE, page_size
            );
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("replydraw/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            bearer_token,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            page_size,
            client,
        }
    }

    fn search_url(&self, post_id: &str) -> String {
        let query = format!("conversation_id:{}", post_id);
        format!(
            "{}/2/tweets/search/recent?query={}&max_results={}&tweet.fields=author_id",
            self.api_base,
            urlencoding::encode(&query),
            self.page_size,
        )
    }
}

#[async_trait]
impl ReplyFetcher for TwitterReplyFetcher {
    async fn fetch_replies(&self, post_id: &str) -> Result<Vec<Participant>, FetchError> {
        let token = self
            .bearer_token
            .as_deref()
            .ok_or(FetchError::MissingCredentials)?;

        let url = self.search_url(post_id);
        debug!("Searching replies: {}", url);

        let response = self.client.get(&url).bearer_auth(token).send().await?;
        let status = response.status();
        let body = response.text().await?;

        match status {
            s if s.is_success() => {}
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(FetchError::Unauthorized {
                    status: status.as_u16(),
                });
            }
            StatusCode::TOO_MANY_REQUESTS => return Err(FetchError::RateLimited),
            StatusCode::BAD_REQUEST => return Err(FetchError::InvalidQuery(body)),
            _ => {
                return Err(FetchError::Upstream {
                    status: status.as_u16(),
                    body,
                });
            }
        }

        let parsed: SearchResponse = serde_json::from_str(&body)
            .map_err(|e| FetchError::MalformedResponse(e.to_string()))?;

        let participants: Vec<Participant> = parsed
            .data
            .into_iter()
            .map(|t| Participant {
                author_id: t.author_id,
                text: t.text,
            })
            .collect();

        info!(
            "Fetched {} replies for post {}",
            participants.len(),
            post_id
        );

        Ok(participants)
    }
}
