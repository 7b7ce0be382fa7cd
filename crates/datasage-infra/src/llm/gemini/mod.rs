//! Gemini completion provider (Google Generative Language API).

mod client;
mod types;

pub use client::GeminiProvider;
