//! Recognition layer for snaptex.
//!
//! Holds the credential/config loading ([`config`]) and the Gemini
//! `generateContent` client ([`client`]) that converts a clipboard image into
//! LaTeX math markup. One request per pipeline invocation, no retries, no
//! streaming.

pub mod client;
pub mod config;

pub use client::{RecognitionClient, RecognitionError};
pub use config::{ConfigError, RecognitionConfig, API_KEY_VAR, DEFAULT_MODEL};
