//! `pawfeed users` subcommands.

use super::Session;
use super::args::UsersCommand;
use crate::core::models::NewUser;
use crate::error::Result;

/// Execute a users subcommand.
///
/// # Errors
///
/// Network errors from the backend, or an invalid payload.
pub async fn execute(cmd: UsersCommand, session: &Session) -> Result<()> {
    let api = session.api()?;

    match cmd {
        UsersCommand::Check { uid } => session.emit(&api.check_user(&uid).await?),
        UsersCommand::Create(payload) => {
            let user: NewUser = payload.parse()?;
            session.emit(&api.create_user(&user).await?)
        }
        UsersCommand::Get { id: Some(id), .. } => session.emit(&api.user_by_id(id).await?),
        UsersCommand::Get { uid, .. } => {
            // clap guarantees one of --id / --uid.
            let uid = uid.unwrap_or_default();
            session.emit(&api.user_by_uid(&uid).await?)
        }
        UsersCommand::List => session.emit(&api.all_users().await?),
        UsersCommand::Report { id } => session.emit(&api.report_user(id).await?),
        UsersCommand::Token { id, token } => {
            session.emit(&api.update_notification_token(id, &token).await?)
        }
    }
}
