pub mod client;

pub use client::{OAuthClient, OAUTH_SCOPE};
