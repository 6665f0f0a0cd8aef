// Application layer: wires storage, pipeline and engine for one script run.

pub mod script;

pub use script::{report_failure, run};
