//! `pawfeed likes` subcommands.

use super::Session;
use super::args::LikesCommand;
use crate::core::models::NewLike;
use crate::error::Result;

/// Execute a likes subcommand.
///
/// # Errors
///
/// Network errors from the backend.
pub async fn execute(cmd: LikesCommand, session: &Session) -> Result<()> {
    let api = session.api()?;

    match cmd {
        LikesCommand::Add { post_id, user_id } => {
            let like = NewLike { post_id, user_id };
            session.emit(&api.like(&like).await?)
        }
        LikesCommand::Remove { post_id, user_id } => {
            session.emit(&api.unlike(post_id, user_id).await?)
        }
        LikesCommand::List { post_id } => session.emit(&api.likes(post_id).await?),
    }
}
