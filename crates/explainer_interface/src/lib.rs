//! Trait definitions for Explainer completion providers.
//!
//! This crate provides the seam between the AI client and concrete LLM
//! backends, so the client can be exercised against scripted drivers.

mod traits;

pub use traits::CompletionDriver;
