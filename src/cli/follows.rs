//! `pawfeed follows` subcommands.

use super::Session;
use super::args::FollowsCommand;
use crate::error::{PawfeedError, Result};

/// Execute a follows subcommand.
///
/// # Errors
///
/// Network errors from the backend, or a self-follow.
pub async fn execute(cmd: FollowsCommand, session: &Session) -> Result<()> {
    let api = session.api()?;

    match cmd {
        FollowsCommand::Add {
            follower_id,
            following_id,
        } => {
            if follower_id == following_id {
                return Err(PawfeedError::InvalidArgument(
                    "a user cannot follow themselves".to_string(),
                ));
            }
            session.emit(&api.follow(follower_id, following_id).await?)
        }
        FollowsCommand::Remove {
            follower_id,
            following_id,
        } => session.emit(&api.unfollow(follower_id, following_id).await?),
        FollowsCommand::Followers { user_id } => session.emit(&api.followers(user_id).await?),
        FollowsCommand::Following { user_id } => session.emit(&api.following(user_id).await?),
    }
}
