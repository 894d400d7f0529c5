use std::sync::Arc;

use axum::{extract::State, response::Html, Form};
use serde::Deserialize;
use tracing::{info, warn};

use super::page::{self, Flash};
use super::AppState;
use crate::draw::{collect_participants, select_winner};
use crate::error::FetchErrorKind;
use crate::message::DrawMessage;

#[derive(Debug, Deserialize)]
pub struct DrawForm {
    #[serde(default)]
    pub tweet_url: String,
}

pub async fn index_handler() -> Html<String> {
    Html(page::render("", None))
}

pub async fn draw_handler(
    State(state): State<Arc<AppState>>,
    Form(form): Form<DrawForm>,
) -> Html<String> {
    let tweet_url = form.tweet_url.trim();
    let message = draw_message(&state, tweet_url).await;

    let flash = if message.is_error() {
        Flash::Error(message.to_string())
    } else {
        Flash::Info(message.to_string())
    };

    Html(page::render(tweet_url, Some(&flash)))
}

async fn draw_message(state: &AppState, tweet_url: &str) -> DrawMessage {
    // A blank field has no post to look up.
    if tweet_url.is_empty() {
        return DrawMessage::Error(FetchErrorKind::InvalidPost);
    }

    let fetched = collect_participants(state.fetcher.as_ref(), tweet_url).await;

    match fetched {
        Ok(replies) => {
            info!("Drawing from {} replies to {}", replies.len(), tweet_url);
            DrawMessage::from(select_winner(replies, &mut rand::rng()))
        }
        Err(e) => {
            warn!("Reply lookup for {} failed: {}", tweet_url, e);
            DrawMessage::from(&e)
        }
    }
}
