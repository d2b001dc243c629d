use std::collections::HashMap;
use std::sync::Arc;

use crate::application::ports::{DocumentWriter, WriterError};
use crate::domain::{Document, FileFormat};

/// Routes each render to the writer registered for the output format.
pub struct CompositeWriter {
    writers: HashMap<FileFormat, Arc<dyn DocumentWriter>>,
}

impl CompositeWriter {
    pub fn new(writers: Vec<(FileFormat, Arc<dyn DocumentWriter>)>) -> Self {
        Self {
            writers: writers.into_iter().collect(),
        }
    }
}

impl DocumentWriter for CompositeWriter {
    fn render(&self, document: &Document, format: FileFormat) -> Result<Vec<u8>, WriterError> {
        let writer = self
            .writers
            .get(&format)
            .ok_or_else(|| WriterError::UnsupportedFormat(format.to_string()))?;

        writer.render(document, format)
    }
}
