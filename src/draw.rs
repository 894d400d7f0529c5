use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::FetchError;
use crate::post::PostReference;
use crate::replies::{Participant, ReplyFetcher};

/// Outcome of one draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionResult {
    Winner(Participant),
    NoParticipants,
}

/// Pick one participant, each with probability `1/n`.
///
/// The generator is supplied by the caller; pass a seeded one to make a
/// draw reproducible.
pub fn select_winner<R>(mut participants: Vec<Participant>, rng: &mut R) -> SelectionResult
where
    R: Rng + ?Sized,
{
    if participants.is_empty() {
        return SelectionResult::NoParticipants;
    }

    let index = rng.random_range(0..participants.len());
    debug!("Drew index {} of {}", index, participants.len());

    SelectionResult::Winner(participants.swap_remove(index))
}

/// Resolve a post URL and fetch its replies in their original order.
pub async fn collect_participants<F>(
    fetcher: &F,
    post_url: &str,
) -> Result<Vec<Participant>, FetchError>
where
    F: ReplyFetcher + ?Sized,
{
    let post = PostReference::from_url(post_url);
    debug!("Resolved {} to post id {:?}", post_url, post.id);
    fetcher.fetch_replies(&post.id).await
}

/// Fetch the replies to `post_url` and draw once.
///
/// With a seed the draw is reproducible for the same reply order; without
/// one it uses the thread-local generator.
pub async fn run_draw(
    fetcher: &dyn ReplyFetcher,
    post_url: &str,
    seed: Option<u64>,
) -> Result<SelectionResult, FetchError> {
    let replies = collect_participants(fetcher, post_url).await?;

    Ok(match seed {
        Some(seed) => select_winner(replies, &mut StdRng::seed_from_u64(seed)),
        None => select_winner(replies, &mut rand::rng()),
    })
}
