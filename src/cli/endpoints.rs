//! `pawfeed endpoints`: list the endpoint registry.

use serde::Serialize;

use super::Session;
use crate::core::endpoint::Endpoint;
use crate::error::{PawfeedError, Result};
use crate::render::{Palette, Render};

/// One registry row.
#[derive(Debug, Clone, Serialize)]
pub struct EndpointInfo {
    pub name: &'static str,
    pub method: &'static str,
    pub path: String,
    pub query: &'static [&'static str],
}

impl From<Endpoint> for EndpointInfo {
    fn from(endpoint: Endpoint) -> Self {
        Self {
            name: endpoint.name(),
            method: endpoint.method().as_str(),
            path: endpoint.template().into_owned(),
            query: endpoint.query_params(),
        }
    }
}

impl Render for EndpointInfo {
    fn human(&self, palette: &Palette) -> String {
        let query = if self.query.is_empty() {
            String::new()
        } else {
            format!(" ?{}", self.query.join("&"))
        };
        format!(
            "{:<7} {}{}  {}",
            palette.heading(self.method),
            self.path,
            palette.muted(&query),
            palette.accent(self.name)
        )
    }
}

/// All registered endpoints in registry order.
#[must_use]
pub fn listing() -> Vec<EndpointInfo> {
    Endpoint::ALL.iter().copied().map(EndpointInfo::from).collect()
}

/// Look up one endpoint by name.
///
/// # Errors
///
/// Returns [`PawfeedError::InvalidArgument`] for an unknown name.
pub fn lookup(name: &str) -> Result<EndpointInfo> {
    Endpoint::from_name(name)
        .map(EndpointInfo::from)
        .ok_or_else(|| {
            PawfeedError::InvalidArgument(format!(
                "unknown endpoint '{name}' (run `pawfeed endpoints` for the list)"
            ))
        })
}

/// Print the registry, or a single entry when `name` is given.
///
/// # Errors
///
/// Unknown endpoint name, or JSON serialization failure.
pub fn execute(name: Option<&str>, session: &Session) -> Result<()> {
    match name {
        Some(name) => session.emit(&lookup(name)?),
        None => session.emit(&listing()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_covers_registry() {
        let rows = listing();
        assert_eq!(rows.len(), Endpoint::ALL.len());
        let by_user = rows.iter().find(|r| r.name == "posts-by-user").unwrap();
        assert_eq!(by_user.path, "api/post/user/{userId}");
        assert_eq!(by_user.method, "GET");
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(lookup("unlike-post").unwrap().method, "DELETE");
        assert!(matches!(
            lookup("fetch-treats"),
            Err(PawfeedError::InvalidArgument(_))
        ));
    }

    #[test]
    fn human_row_lists_query_params() {
        let row = EndpointInfo::from(Endpoint::AllPosts);
        let line = row.human(&Palette::plain());
        assert!(line.starts_with("GET     api/post/all ?page&size"));
        assert!(line.ends_with("all-posts"));
    }
}
