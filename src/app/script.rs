use crate::config::{cli::LocalStorage, CliConfig};
use crate::core::engine::{RunReport, TransformEngine};
use crate::core::pipeline::ScriptPipeline;
use crate::core::ConfigProvider;
use crate::utils::error::{Result, ScriptError};
use crate::utils::validation::Validate;

/// Validates the configuration and performs one read-transform-write run.
pub async fn run(config: CliConfig) -> Result<RunReport> {
    config.validate()?;
    tracing::debug!("CLI config: {:?}", config);

    let kind = config.transform_kind();
    let pipeline = ScriptPipeline::new(LocalStorage::default(), config);
    let engine = TransformEngine::new(pipeline, kind);

    engine.run().await
}

/// Logs and prints a failed run, returning the process exit status.
pub fn report_failure(e: &ScriptError) -> i32 {
    tracing::error!(
        "Run failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::debug!("Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("error: {}", e.user_friendly_message());
    eprintln!("hint: {}", e.recovery_suggestion());

    e.exit_code()
}
