mod composite_writer;
mod pdf_writer;
mod text_writer;

pub use composite_writer::CompositeWriter;
pub use pdf_writer::PdfDocumentWriter;
pub use text_writer::TextDocumentWriter;
