//! `pawfeed posts` subcommands.

use super::Session;
use super::args::PostsCommand;
use crate::core::models::{NewPost, PageRequest};
use crate::error::{PawfeedError, Result};

/// Execute a posts subcommand.
///
/// # Errors
///
/// Network errors from the backend, an invalid payload, or a zero page size.
/// The page number is forwarded as given.
pub async fn execute(cmd: PostsCommand, session: &Session) -> Result<()> {
    let api = session.api()?;

    match cmd {
        PostsCommand::List { page, size } => {
            if size == 0 {
                return Err(PawfeedError::InvalidArgument(
                    "--size must be at least 1".to_string(),
                ));
            }
            session.emit(&api.posts(PageRequest::new(page, size)).await?)
        }
        PostsCommand::Get { id } => session.emit(&api.post(id).await?),
        PostsCommand::ByUser { user_id } => session.emit(&api.posts_by_user(user_id).await?),
        PostsCommand::Create(payload) => {
            let post: NewPost = payload.parse()?;
            session.emit(&api.create_post(&post).await?)
        }
        PostsCommand::Watch { id } => session.emit(&api.watch_post(id).await?),
        PostsCommand::Report { id } => session.emit(&api.report_post(id).await?),
        PostsCommand::Delete { id } => session.emit(&api.delete_post(id).await?),
    }
}
