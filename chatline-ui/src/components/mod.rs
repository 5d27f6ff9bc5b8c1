//! UI Components
//!
//! Reusable Leptos components for the chat views.

pub mod channel_list;
pub mod message_pane;
pub mod nav;

pub use channel_list::ChannelList;
pub use message_pane::MessagePane;
pub use nav::Nav;
