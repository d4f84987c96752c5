//! Endpoint registry.
//!
//! Static mapping from logical backend operation to its HTTP method and path.
//! The set is closed: an operation that is not listed here cannot be named,
//! so there is no runtime "unknown endpoint" failure.

use std::borrow::Cow;
use std::fmt;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// Upper-case method name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    /// Whether a request body is sent for this method.
    #[must_use]
    pub const fn carries_body(self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Self::GET,
            HttpMethod::Post => Self::POST,
            HttpMethod::Put => Self::PUT,
            HttpMethod::Delete => Self::DELETE,
        }
    }
}

/// A named backend operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    // Users
    CheckUserAvailability,
    CreateUser,
    UserByUid,
    UserById,
    AllUsers,
    ReportUser,
    UpdateNotificationToken,

    // Images
    UploadImage,

    // Posts
    CreatePost,
    PostById,
    /// Posts authored by the given user id (path parameter).
    PostsByUser(i64),
    AllPosts,
    AddWatcher,
    ReportPost,
    DeletePost,

    // Comments
    AddComment,
    AllComments,
    DeleteComment,

    // Likes
    LikePost,
    UnlikePost,
    AllLikes,

    // Follows
    Follow,
    Unfollow,
    Followers,
    Following,
}

impl Endpoint {
    /// Every registered operation. `PostsByUser` appears with a placeholder id.
    pub const ALL: &'static [Self] = &[
        Self::CheckUserAvailability,
        Self::CreateUser,
        Self::UserByUid,
        Self::UserById,
        Self::AllUsers,
        Self::ReportUser,
        Self::UpdateNotificationToken,
        Self::UploadImage,
        Self::CreatePost,
        Self::PostById,
        Self::PostsByUser(0),
        Self::AllPosts,
        Self::AddWatcher,
        Self::ReportPost,
        Self::DeletePost,
        Self::AddComment,
        Self::AllComments,
        Self::DeleteComment,
        Self::LikePost,
        Self::UnlikePost,
        Self::AllLikes,
        Self::Follow,
        Self::Unfollow,
        Self::Followers,
        Self::Following,
    ];

    /// Stable kebab-case name of the operation.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::CheckUserAvailability => "check-user-availability",
            Self::CreateUser => "create-user",
            Self::UserByUid => "user-by-uid",
            Self::UserById => "user-by-id",
            Self::AllUsers => "all-users",
            Self::ReportUser => "report-user",
            Self::UpdateNotificationToken => "update-notification-token",
            Self::UploadImage => "upload-image",
            Self::CreatePost => "create-post",
            Self::PostById => "post-by-id",
            Self::PostsByUser(_) => "posts-by-user",
            Self::AllPosts => "all-posts",
            Self::AddWatcher => "add-watcher",
            Self::ReportPost => "report-post",
            Self::DeletePost => "delete-post",
            Self::AddComment => "add-comment",
            Self::AllComments => "all-comments",
            Self::DeleteComment => "delete-comment",
            Self::LikePost => "like-post",
            Self::UnlikePost => "unlike-post",
            Self::AllLikes => "all-likes",
            Self::Follow => "follow",
            Self::Unfollow => "unfollow",
            Self::Followers => "followers",
            Self::Following => "following",
        }
    }

    /// Look up an operation by its [`name`](Self::name).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|e| e.name() == name)
    }

    /// HTTP method the backend expects.
    #[must_use]
    pub const fn method(self) -> HttpMethod {
        match self {
            Self::CheckUserAvailability
            | Self::UserByUid
            | Self::UserById
            | Self::AllUsers
            | Self::PostById
            | Self::PostsByUser(_)
            | Self::AllPosts
            | Self::AllComments
            | Self::AllLikes
            | Self::Followers
            | Self::Following => HttpMethod::Get,
            Self::CreateUser
            | Self::CreatePost
            | Self::AddWatcher
            | Self::AddComment
            | Self::LikePost
            | Self::Follow
            | Self::Unfollow => HttpMethod::Post,
            Self::ReportUser
            | Self::UpdateNotificationToken
            | Self::UploadImage
            | Self::ReportPost => HttpMethod::Put,
            Self::DeletePost | Self::DeleteComment | Self::UnlikePost => HttpMethod::Delete,
        }
    }

    /// Path relative to the base URL, with path parameters substituted.
    #[must_use]
    pub fn path(self) -> Cow<'static, str> {
        let fixed = match self {
            Self::PostsByUser(user_id) => return Cow::Owned(format!("api/post/user/{user_id}")),
            Self::CheckUserAvailability => "api/user/check",
            Self::CreateUser | Self::UserById => "api/user",
            Self::UserByUid => "api/user/uid",
            Self::AllUsers => "api/user/all",
            Self::ReportUser => "api/user/report",
            Self::UpdateNotificationToken => "api/user/token",
            Self::UploadImage => "api/image/upload",
            Self::CreatePost | Self::PostById | Self::DeletePost => "api/post",
            Self::AllPosts => "api/post/all",
            Self::AddWatcher => "api/post/watch",
            Self::ReportPost => "api/post/report",
            Self::AddComment | Self::DeleteComment => "api/comment",
            Self::AllComments => "api/comment/all",
            Self::LikePost | Self::UnlikePost => "api/like",
            Self::AllLikes => "api/like/all",
            Self::Follow => "api/follow",
            Self::Unfollow => "api/follow/remove",
            Self::Followers => "api/follow/followers",
            Self::Following => "api/follow/following",
        };
        Cow::Borrowed(fixed)
    }

    /// Path template as documented, with `{userId}` left unsubstituted.
    #[must_use]
    pub fn template(self) -> Cow<'static, str> {
        match self {
            Self::PostsByUser(_) => Cow::Borrowed("api/post/user/{userId}"),
            other => other.path(),
        }
    }

    /// Query parameter names the operation expects.
    #[must_use]
    pub const fn query_params(self) -> &'static [&'static str] {
        match self {
            Self::CheckUserAvailability | Self::UserByUid => &["uid"],
            Self::UserById | Self::ReportUser | Self::Followers | Self::Following => &["userId"],
            Self::UpdateNotificationToken => &["token", "userId"],
            Self::PostById
            | Self::AddWatcher
            | Self::ReportPost
            | Self::DeletePost
            | Self::AllComments
            | Self::AllLikes => &["postId"],
            Self::AllPosts => &["page", "size"],
            Self::DeleteComment => &["commentId"],
            Self::UnlikePost => &["postId", "userId"],
            Self::Follow | Self::Unfollow => &["followerId", "followingId"],
            Self::CreateUser
            | Self::AllUsers
            | Self::UploadImage
            | Self::CreatePost
            | Self::PostsByUser(_)
            | Self::AddComment
            | Self::LikePost => &[],
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method(), self.path())
    }
}
