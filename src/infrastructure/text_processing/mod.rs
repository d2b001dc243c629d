mod composite_parser;
mod pdf_parser;
mod plain_text_parser;
mod segmenter;
mod text_sanitizer;

pub use composite_parser::CompositeParser;
pub use pdf_parser::PdfParser;
pub use plain_text_parser::PlainTextParser;
pub use segmenter::segment_page;
pub use text_sanitizer::sanitize_extracted_text;
