//! Shared domain types for Datasage.
//!
//! This crate contains the core domain types used across the Datasage
//! tutor-chat service: chat turns, sessions, prompt shapes, configuration,
//! and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod llm;
