use crate::core::marker::OutputMarker;
use crate::core::Pipeline;
use crate::domain::model::TransformKind;
use crate::utils::error::Result;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub kind: TransformKind,
    pub output_path: PathBuf,
    pub lines_read: usize,
    pub lines_written: usize,
}

impl RunReport {
    /// The status line to print, for kinds that announce their output.
    pub fn marker(&self) -> Option<OutputMarker> {
        self.kind
            .emits_marker()
            .then(|| OutputMarker::new(self.output_path.display().to_string()))
    }
}

pub struct TransformEngine<P: Pipeline> {
    pipeline: P,
    kind: TransformKind,
}

impl<P: Pipeline> TransformEngine<P> {
    pub fn new(pipeline: P, kind: TransformKind) -> Self {
        Self { pipeline, kind }
    }

    pub async fn run(&self) -> Result<RunReport> {
        tracing::info!("Starting {}", self.kind);

        let source = self.pipeline.extract().await?;
        let lines_read = source.line_count();
        tracing::info!("Read {} lines", lines_read);

        let transformed = self.pipeline.transform(source).await?;
        let lines_written = transformed.line_count();

        let output_path = self.pipeline.load(transformed).await?;
        tracing::info!("Wrote {} lines to {}", lines_written, output_path.display());

        Ok(RunReport {
            kind: self.kind,
            output_path,
            lines_read,
            lines_written,
        })
    }
}
