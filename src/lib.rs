//! Pick a random winner from the replies to a tweet.
//!
//! The flow is linear: [`post::extract_post_id`] turns the pasted URL into
//! a post id, a [`replies::ReplyFetcher`] returns the replies, and
//! [`draw::select_winner`] draws one of them. The [`web`] module wraps this
//! in a one-page form.

pub mod config;
pub mod draw;
pub mod error;
pub mod message;
pub mod post;
pub mod replies;
pub mod web;

pub use draw::{select_winner, SelectionResult};
pub use error::{FetchError, FetchErrorKind};
pub use post::{extract_post_id, PostReference};
pub use replies::{Participant, ReplyFetcher};
