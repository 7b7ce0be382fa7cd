//! HTTP request handlers.

pub mod chat;
pub mod export;
pub mod session;
