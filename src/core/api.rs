//! Typed facade over the social backend.
//!
//! One method per backend operation. Each builds a descriptor from the
//! endpoint registry, runs it through [`ApiClient`], and returns exactly one
//! result. Operations without a structured response return the backend's
//! plain-text acknowledgement.

use image::DynamicImage;

use crate::core::endpoint::Endpoint;
use crate::core::http::{ApiClient, ApiConfig};
use crate::core::models::{
    Comment, FollowUser, Like, NewComment, NewLike, NewPost, NewUser, PageRequest, PagedPosts,
    Post, User,
};
use crate::core::request::RequestBuilder;
use crate::core::upload;
use crate::error::NetworkError;

type ApiResult<T> = Result<T, NetworkError>;

/// Client for every backend operation.
#[derive(Debug, Clone)]
pub struct SocialApi {
    client: ApiClient,
}

impl SocialApi {
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Build the underlying client from `config`.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be constructed.
    pub fn from_config(config: ApiConfig) -> ApiResult<Self> {
        ApiClient::new(config).map(Self::new)
    }

    #[must_use]
    pub const fn client(&self) -> &ApiClient {
        &self.client
    }

    fn request(&self, endpoint: Endpoint) -> RequestBuilder {
        RequestBuilder::endpoint(self.client.config(), endpoint)
    }

    // -------------------------------------------------------------------------
    // Users
    // -------------------------------------------------------------------------

    /// Whether an account already exists for `uid`.
    ///
    /// # Errors
    ///
    /// Any [`NetworkError`]; [`NetworkError::Decoding`] if the reply is not a boolean.
    pub async fn check_user(&self, uid: &str) -> ApiResult<bool> {
        let req = self
            .request(Endpoint::CheckUserAvailability)
            .query("uid", uid)
            .build()?;
        self.client.send(req).await
    }

    /// Register a new account.
    ///
    /// # Errors
    ///
    /// Any [`NetworkError`]; [`NetworkError::Decoding`] if the reply is not a user.
    pub async fn create_user(&self, user: &NewUser) -> ApiResult<User> {
        let req = self.request(Endpoint::CreateUser).json_body(user).build()?;
        self.client.send(req).await
    }

    /// Look a user up by auth uid.
    ///
    /// # Errors
    ///
    /// [`NetworkError::Server`] with the backend's message when no user matches.
    pub async fn user_by_uid(&self, uid: &str) -> ApiResult<User> {
        let req = self.request(Endpoint::UserByUid).query("uid", uid).build()?;
        self.client.send(req).await
    }

    /// # Errors
    ///
    /// [`NetworkError::Server`] with the backend's message when no user matches.
    pub async fn user_by_id(&self, user_id: i64) -> ApiResult<User> {
        let req = self
            .request(Endpoint::UserById)
            .query("userId", user_id)
            .build()?;
        self.client.send(req).await
    }

    /// # Errors
    ///
    /// Any [`NetworkError`]; [`NetworkError::Decoding`] if the reply is not a user list.
    pub async fn all_users(&self) -> ApiResult<Vec<User>> {
        let req = self.request(Endpoint::AllUsers).build()?;
        self.client.send(req).await
    }

    /// Flag a user for moderation.
    ///
    /// # Errors
    ///
    /// [`NetworkError::Server`] on a non-2xx status, or a transport error.
    /// An empty 2xx body is [`NetworkError::Unknown`].
    pub async fn report_user(&self, user_id: i64) -> ApiResult<String> {
        let req = self
            .request(Endpoint::ReportUser)
            .query("userId", user_id)
            .build()?;
        self.client.send_text(req).await
    }

    /// # Errors
    ///
    /// [`NetworkError::Server`] on a non-2xx status, or a transport error.
    /// An empty 2xx body is [`NetworkError::Unknown`].
    pub async fn update_notification_token(&self, user_id: i64, token: &str) -> ApiResult<String> {
        let req = self
            .request(Endpoint::UpdateNotificationToken)
            .query("token", token)
            .query("userId", user_id)
            .build()?;
        self.client.send_text(req).await
    }

    // -------------------------------------------------------------------------
    // Images
    // -------------------------------------------------------------------------

    /// Upload an image and return its stored URL.
    ///
    /// # Errors
    ///
    /// [`NetworkError::Unknown`] if the image cannot be encoded as JPEG, otherwise
    /// the usual transport and status errors.
    pub async fn upload_image(&self, image: &DynamicImage) -> ApiResult<String> {
        upload::upload_image(&self.client, image).await
    }

    // -------------------------------------------------------------------------
    // Posts
    // -------------------------------------------------------------------------

    /// # Errors
    ///
    /// Any [`NetworkError`]; [`NetworkError::Decoding`] if the reply is not a post.
    pub async fn create_post(&self, post: &NewPost) -> ApiResult<Post> {
        let req = self.request(Endpoint::CreatePost).json_body(post).build()?;
        self.client.send(req).await
    }

    /// # Errors
    ///
    /// [`NetworkError::Server`] if the post does not exist.
    pub async fn post(&self, post_id: i64) -> ApiResult<Post> {
        let req = self
            .request(Endpoint::PostById)
            .query("postId", post_id)
            .build()?;
        self.client.send(req).await
    }

    /// Every post by `user_id`.
    ///
    /// # Errors
    ///
    /// Any [`NetworkError`]; [`NetworkError::Decoding`] if the reply is not a post list.
    pub async fn posts_by_user(&self, user_id: i64) -> ApiResult<Vec<Post>> {
        let req = self.request(Endpoint::PostsByUser(user_id)).build()?;
        self.client.send(req).await
    }

    /// One page of the global feed.
    ///
    /// # Errors
    ///
    /// Any [`NetworkError`]; [`NetworkError::Decoding`] if the reply is not a paged post list.
    pub async fn posts(&self, page: PageRequest) -> ApiResult<PagedPosts> {
        let req = self
            .request(Endpoint::AllPosts)
            .query("page", page.page)
            .query("size", page.size)
            .build()?;
        self.client.send(req).await
    }

    /// Subscribe to notifications for a post.
    ///
    /// # Errors
    ///
    /// [`NetworkError::Server`] on a non-2xx status, or a transport error.
    /// An empty 2xx body is [`NetworkError::Unknown`].
    pub async fn watch_post(&self, post_id: i64) -> ApiResult<String> {
        let req = self
            .request(Endpoint::AddWatcher)
            .query("postId", post_id)
            .build()?;
        self.client.send_text(req).await
    }

    /// # Errors
    ///
    /// [`NetworkError::Server`] on a non-2xx status, or a transport error.
    /// An empty 2xx body is [`NetworkError::Unknown`].
    pub async fn report_post(&self, post_id: i64) -> ApiResult<String> {
        let req = self
            .request(Endpoint::ReportPost)
            .query("postId", post_id)
            .build()?;
        self.client.send_text(req).await
    }

    /// # Errors
    ///
    /// [`NetworkError::Server`] on a non-2xx status, or a transport error.
    /// An empty 2xx body is [`NetworkError::Unknown`].
    pub async fn delete_post(&self, post_id: i64) -> ApiResult<String> {
        let req = self
            .request(Endpoint::DeletePost)
            .query("postId", post_id)
            .build()?;
        self.client.send_text(req).await
    }

    // -------------------------------------------------------------------------
    // Comments
    // -------------------------------------------------------------------------

    /// # Errors
    ///
    /// Any [`NetworkError`]; [`NetworkError::Decoding`] if the reply is not a comment.
    pub async fn add_comment(&self, comment: &NewComment) -> ApiResult<Comment> {
        let req = self.request(Endpoint::AddComment).json_body(comment).build()?;
        self.client.send(req).await
    }

    /// # Errors
    ///
    /// Any [`NetworkError`].
    pub async fn comments(&self, post_id: i64) -> ApiResult<Vec<Comment>> {
        let req = self
            .request(Endpoint::AllComments)
            .query("postId", post_id)
            .build()?;
        self.client.send(req).await
    }

    /// # Errors
    ///
    /// [`NetworkError::Server`] on a non-2xx status, or a transport error.
    /// An empty 2xx body is [`NetworkError::Unknown`].
    pub async fn delete_comment(&self, comment_id: i64) -> ApiResult<String> {
        let req = self
            .request(Endpoint::DeleteComment)
            .query("commentId", comment_id)
            .build()?;
        self.client.send_text(req).await
    }

    // -------------------------------------------------------------------------
    // Likes
    // -------------------------------------------------------------------------

    /// # Errors
    ///
    /// Any [`NetworkError`]; [`NetworkError::Decoding`] if the reply is not a like.
    pub async fn like(&self, like: &NewLike) -> ApiResult<Like> {
        let req = self.request(Endpoint::LikePost).json_body(like).build()?;
        self.client.send(req).await
    }

    /// # Errors
    ///
    /// [`NetworkError::Server`] on a non-2xx status, or a transport error.
    /// An empty 2xx body is [`NetworkError::Unknown`].
    pub async fn unlike(&self, post_id: i64, user_id: i64) -> ApiResult<String> {
        let req = self
            .request(Endpoint::UnlikePost)
            .query("postId", post_id)
            .query("userId", user_id)
            .build()?;
        self.client.send_text(req).await
    }

    /// # Errors
    ///
    /// Any [`NetworkError`].
    pub async fn likes(&self, post_id: i64) -> ApiResult<Vec<Like>> {
        let req = self
            .request(Endpoint::AllLikes)
            .query("postId", post_id)
            .build()?;
        self.client.send(req).await
    }

    // -------------------------------------------------------------------------
    // Follows
    // -------------------------------------------------------------------------

    /// Make `follower_id` follow `following_id`.
    ///
    /// # Errors
    ///
    /// [`NetworkError::Server`] on a non-2xx status, or a transport error.
    /// An empty 2xx body is [`NetworkError::Unknown`].
    pub async fn follow(&self, follower_id: i64, following_id: i64) -> ApiResult<String> {
        self.follow_edge(Endpoint::Follow, follower_id, following_id)
            .await
    }

    /// # Errors
    ///
    /// Same as [`Self::follow`].
    pub async fn unfollow(&self, follower_id: i64, following_id: i64) -> ApiResult<String> {
        self.follow_edge(Endpoint::Unfollow, follower_id, following_id)
            .await
    }

    async fn follow_edge(
        &self,
        endpoint: Endpoint,
        follower_id: i64,
        following_id: i64,
    ) -> ApiResult<String> {
        let req = self
            .request(endpoint)
            .query("followerId", follower_id)
            .query("followingId", following_id)
            .build()?;
        self.client.send_text(req).await
    }

    /// # Errors
    ///
    /// Any [`NetworkError`].
    pub async fn followers(&self, user_id: i64) -> ApiResult<Vec<FollowUser>> {
        let req = self
            .request(Endpoint::Followers)
            .query("userId", user_id)
            .build()?;
        self.client.send(req).await
    }

    /// # Errors
    ///
    /// Any [`NetworkError`].
    pub async fn following(&self, user_id: i64) -> ApiResult<Vec<FollowUser>> {
        let req = self
            .request(Endpoint::Following)
            .query("userId", user_id)
            .build()?;
        self.client.send(req).await
    }
}
