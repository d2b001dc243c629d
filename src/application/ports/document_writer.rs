use crate::domain::{Document, FileFormat};

pub trait DocumentWriter: Send + Sync {
    fn render(&self, document: &Document, format: FileFormat) -> Result<Vec<u8>, WriterError>;
}

#[derive(Debug, thiserror::Error)]
pub enum WriterError {
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),
    #[error("render failed: {0}")]
    RenderFailed(String),
}
