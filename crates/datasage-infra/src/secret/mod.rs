//! Secret resolution for the upstream credential.

pub mod env;

pub use env::EnvSecretProvider;
