//! `pawfeed comments` subcommands.

use super::Session;
use super::args::CommentsCommand;
use crate::core::models::NewComment;
use crate::error::Result;

/// Execute a comments subcommand.
///
/// # Errors
///
/// Network errors from the backend, or an invalid payload.
pub async fn execute(cmd: CommentsCommand, session: &Session) -> Result<()> {
    let api = session.api()?;

    match cmd {
        CommentsCommand::Add(payload) => {
            let comment: NewComment = payload.parse()?;
            session.emit(&api.add_comment(&comment).await?)
        }
        CommentsCommand::List { post_id } => session.emit(&api.comments(post_id).await?),
        CommentsCommand::Delete { id } => session.emit(&api.delete_comment(id).await?),
    }
}
