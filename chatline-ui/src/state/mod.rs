//! State Management
//!
//! Channel, message and session state shared by the views. `channels` and
//! `messages` hold plain data with no signals so they test natively.

pub mod channels;
pub mod messages;
pub mod session;
