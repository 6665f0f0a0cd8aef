use crate::domain::model::{Document, TransformKind};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

pub trait Storage: Send + Sync {
    fn read_text(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
    fn write_document(
        &self,
        path: &Path,
        document: &Document,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &Path;
    fn output_path(&self) -> &Path;
    fn transform_kind(&self) -> TransformKind;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Document>;
    async fn transform(&self, document: Document) -> Result<Document>;
    async fn load(&self, document: Document) -> Result<PathBuf>;
}
