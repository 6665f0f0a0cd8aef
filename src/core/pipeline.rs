use crate::core::transform::{apply_document, transformer_for};
use crate::core::{ConfigProvider, Document, Pipeline, Storage};
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

pub struct ScriptPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> ScriptPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for ScriptPipeline<S, C> {
    async fn extract(&self) -> Result<Document> {
        let path = self.config.input_path();
        tracing::debug!("Reading source: {}", path.display());

        let text = self.storage.read_text(path).await?;
        Ok(Document::from_text(&text))
    }

    async fn transform(&self, document: Document) -> Result<Document> {
        let kind = self.config.transform_kind();
        tracing::debug!("Applying {} to {} lines", kind, document.line_count());

        let transform = transformer_for(kind);
        Ok(apply_document(transform.as_ref(), &document))
    }

    async fn load(&self, document: Document) -> Result<PathBuf> {
        let out_path = self.config.output_path();
        tracing::debug!("Writing destination: {}", out_path.display());

        self.storage.write_document(out_path, &document).await?;
        Ok(out_path.to_path_buf())
    }
}
