//! Pages
//!
//! Top-level page components for each route.

pub mod chat;
pub mod create_user;
pub mod login;

pub use chat::MainChat;
pub use create_user::CreateUser;
pub use login::Login;
