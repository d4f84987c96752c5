//! Request layer: endpoint registry, request builder, transport pipeline,
//! upload variant, and the typed API built on top of them.

pub mod api;
pub mod endpoint;
pub mod http;
pub mod logging;
pub mod models;
pub mod request;
pub mod upload;

pub use api::SocialApi;
pub use endpoint::{Endpoint, HttpMethod};
pub use http::{ApiClient, ApiConfig, JsonDecoder, KeyDecodingStrategy, RawResponse};
pub use models::{
    Comment, FollowUser, Like, NewComment, NewLike, NewPost, NewUser, PageRequest, PagedPosts,
    Post, User,
};
pub use request::{FilePart, RequestBody, RequestBuilder, RequestDescriptor};
