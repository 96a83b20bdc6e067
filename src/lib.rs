pub mod app;
pub mod core;
pub mod debug;
pub mod error;
pub mod fade;

// Curated re-exports
pub use core::config::{DemoConfig, FadeConfig, MissingTargetPolicy};
pub use core::system::system_order::FadeSet;
pub use error::FadeError;
pub use fade::{
    FadeCommandsExt, FadeFinished, FadeGroup, FadeHandle, FadeKind, FadeOutcome, FadeParams,
    FadePlugin, FadeRegistry, FadeTargetId, FadeWorldExt, OnFadeComplete,
};
