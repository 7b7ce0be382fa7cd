//! Infrastructure implementations for Datasage.
//!
//! Concrete backends for the traits defined in `datasage-core`: the SQLite
//! message store, the Gemini completion provider, the environment-variable
//! secret provider, and the config file loader.

pub mod config;
pub mod llm;
pub mod secret;
pub mod sqlite;
