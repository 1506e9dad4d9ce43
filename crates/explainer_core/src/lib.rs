//! Core data types for the Explainer pipeline.
//!
//! This crate provides the stage artifacts (scripts and blueprints), the fixed
//! visual style profile, the completion request types shared by every
//! provider, and the layered configuration.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod blueprint;
mod config;
mod credential;
mod kind;
mod message;
mod request;
mod role;
mod scene;
mod script;
mod style;

pub use blueprint::Blueprint;
pub use config::{
    AuthFailurePolicy, ExplainerConfig, OutputSettings, PipelineSettings, ProviderSettings,
    TimingSettings,
};
pub use credential::ApiCredential;
pub use kind::RequestKind;
pub use message::{Message, MessageBuilder};
pub use request::{CompletionRequest, CompletionResponse, ResponseFormat};
pub use role::Role;
pub use scene::{BlueprintScene, BlueprintSceneBuilder, BlueprintSceneBuilderError, ScriptScene};
pub use script::Script;
pub use style::{FIXED_STYLE_PROFILE, StyleProfile};
