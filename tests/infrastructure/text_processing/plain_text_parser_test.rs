use std::num::NonZeroUsize;

use doctran::application::ports::{DocumentParser, ParserError};
use doctran::domain::MediaType;
use doctran::infrastructure::text_processing::PlainTextParser;

#[tokio::test]
async fn given_form_feed_pages_when_parsing_then_pages_are_numbered_in_order() {
    let data = "one\x0Ctwo\x0Cthree";

    let document = PlainTextParser
        .parse(data.as_bytes(), MediaType::Text, None)
        .await
        .unwrap();

    let numbers: Vec<u32> = document.pages.iter().map(|p| p.number).collect();
    assert_eq!(numbers, vec![1, 2, 3]);
    assert_eq!(document.unit_count(), 3);
}

#[tokio::test]
async fn given_page_limit_when_parsing_then_only_leading_pages_are_read() {
    let data = "one\x0Ctwo\x0Cthree";

    let document = PlainTextParser
        .parse(data.as_bytes(), MediaType::Text, NonZeroUsize::new(2))
        .await
        .unwrap();

    assert_eq!(document.pages.len(), 2);
    assert_eq!(document.pages[1].number, 2);
}

#[tokio::test]
async fn given_invalid_utf8_when_parsing_then_returns_malformed() {
    let result = PlainTextParser
        .parse(&[0xc3, 0x28], MediaType::Text, None)
        .await;

    assert!(matches!(result, Err(ParserError::Malformed(_))));
}

#[tokio::test]
async fn given_blank_input_when_parsing_then_returns_no_content() {
    let result = PlainTextParser
        .parse(b" \n\x0C\n ", MediaType::Text, None)
        .await;

    assert!(matches!(result, Err(ParserError::NoContent)));
}

#[tokio::test]
async fn given_pdf_media_type_when_parsing_then_returns_unsupported() {
    let result = PlainTextParser.parse(b"%PDF", MediaType::Pdf, None).await;

    assert!(matches!(result, Err(ParserError::UnsupportedMediaType(_))));
}
