//! Core data types for the Scheherazade story generation library.
//!
//! This crate provides the foundation data types shared by every other crate
//! in the workspace: the provider-agnostic request/response model and the
//! story-domain value types.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod input;
mod media;
mod message;
mod modality;
mod output;
mod request;
mod role;
mod story;
mod style;
mod tone;

pub use input::Input;
pub use media::{DataUriError, MediaSource};
pub use message::{Message, MessageBuilder};
pub use modality::Modality;
pub use output::Output;
pub use request::{
    GenerateRequest, GenerateRequestBuilder, GenerateResponse, ImageOutputConfig,
    ImageOutputConfigBuilder,
};
pub use role::Role;
pub use story::{AppStatus, StoryPart};
pub use style::{EmptyStyleSet, StyleSet};
pub use tone::{EmptyToneSet, ToneSet};
