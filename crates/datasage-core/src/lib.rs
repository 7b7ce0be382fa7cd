//! Business logic for the Datasage tutor-chat pipeline.
//!
//! Components are wired together by the application layer: the
//! [`service::ChatService`] orchestrates one submission end-to-end through
//! the [`store::MessageStore`] and [`provider::CompletionProvider`] traits,
//! whose concrete implementations live in `datasage-infra`.

pub mod export;
pub mod history;
pub mod prompt;
pub mod provider;
pub mod service;
pub mod session;
pub mod store;

#[cfg(test)]
pub(crate) mod test_support;
