pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, CliConfig};
pub use crate::core::{
    engine::{RunReport, TransformEngine},
    marker::OutputMarker,
    pipeline::ScriptPipeline,
};
pub use domain::model::{Document, TransformKind};
pub use utils::error::{Result, ScriptError};
