pub mod config;

pub use config::{DemoConfig, FadeConfig, MissingTargetPolicy, WindowConfig};
