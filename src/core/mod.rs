pub mod engine;
pub mod marker;
pub mod pipeline;
pub mod transform;

pub use crate::domain::model::{Document, TransformKind};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
