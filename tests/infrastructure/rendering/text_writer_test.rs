use doctran::application::ports::{DocumentWriter, WriterError};
use doctran::domain::{ContentUnit, Document, FileFormat, Page};
use doctran::infrastructure::rendering::TextDocumentWriter;

fn translated_document() -> Document {
    let mut greeting = ContentUnit::text("Hello");
    greeting.apply_translation("Hallo", true);

    let mut table = ContentUnit::table(vec![
        vec!["Name".to_string(), "Age".to_string()],
        vec!["Alice".to_string()],
    ]);
    table.apply_translation("Name | Alter\nAlice", true);

    let mut failed = ContentUnit::text("Keep me");
    failed.apply_translation("backend unavailable", false);

    Document::new(vec![
        Page::new(1, vec![greeting, table]),
        Page::new(3, vec![failed]),
    ])
}

fn render(format: FileFormat) -> String {
    let bytes = TextDocumentWriter::new()
        .render(&translated_document(), format)
        .unwrap();
    String::from_utf8(bytes).unwrap()
}

#[test]
fn given_translated_document_when_rendering_markdown_then_pages_have_headings() {
    let output = render(FileFormat::Markdown);

    assert!(output.starts_with("## Page 1\n\nHallo\n"));
    assert!(output.contains("## Page 3\n\nKeep me\n"));
}

#[test]
fn given_table_unit_when_rendering_markdown_then_rows_are_padded_to_width() {
    let output = render(FileFormat::Markdown);

    assert!(output.contains("| Name | Alter |\n| --- | --- |\n| Alice |  |\n"));
}

#[test]
fn given_failed_unit_when_rendering_then_original_is_written() {
    let output = render(FileFormat::Text);

    assert!(output.contains("Keep me"));
    assert!(!output.contains("backend unavailable"));
}

#[test]
fn given_translated_document_when_rendering_text_then_pages_are_form_feed_separated() {
    let output = render(FileFormat::Text);

    assert_eq!(output, "Hallo\n\nName | Alter\nAlice\n\x0CKeep me");
}

#[test]
fn given_pdf_format_when_rendering_text_then_format_is_unsupported() {
    let result = TextDocumentWriter::new().render(&translated_document(), FileFormat::Pdf);

    assert!(matches!(result, Err(WriterError::UnsupportedFormat(f)) if f == "pdf"));
}
