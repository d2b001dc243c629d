use std::str::FromStr;

use doctran::domain::{FileFormat, JobId, JobState, MediaType};

#[test]
fn given_pdf_mime_when_parsing_then_returns_pdf_media_type() {
    assert_eq!(MediaType::from_mime("application/pdf"), Some(MediaType::Pdf));
}

#[test]
fn given_text_mime_with_charset_when_parsing_then_returns_text_media_type() {
    assert_eq!(
        MediaType::from_mime("text/plain; charset=utf-8"),
        Some(MediaType::Text)
    );
}

#[test]
fn given_unknown_mime_when_parsing_then_returns_none() {
    assert_eq!(MediaType::from_mime("image/png"), None);
}

#[test]
fn given_format_aliases_when_parsing_then_map_to_same_format() {
    assert_eq!(FileFormat::from_str("Markdown"), Ok(FileFormat::Markdown));
    assert_eq!(FileFormat::from_str("md"), Ok(FileFormat::Markdown));
    assert_eq!(FileFormat::from_str("TXT"), Ok(FileFormat::Text));
}

#[test]
fn given_pdf_output_format_when_parsing_then_returns_pdf() {
    let format = FileFormat::from_str("PDF").unwrap();

    assert_eq!(format, FileFormat::Pdf);
    assert_eq!(format.extension(), "pdf");
    assert_eq!(format.as_mime(), "application/pdf");
}

#[test]
fn given_unknown_output_format_when_parsing_then_returns_error() {
    assert!(FileFormat::from_str("docx").is_err());
}

#[test]
fn given_job_state_when_round_tripping_wire_name_then_matches() {
    for state in [
        JobState::Uploaded,
        JobState::Processing,
        JobState::Completed,
        JobState::Failed,
    ] {
        assert_eq!(JobState::from_str(state.as_str()), Ok(state));
    }
}

#[test]
fn given_states_when_checking_terminal_then_only_completed_and_failed_are_terminal() {
    assert!(!JobState::Uploaded.is_terminal());
    assert!(!JobState::Processing.is_terminal());
    assert!(JobState::Completed.is_terminal());
    assert!(JobState::Failed.is_terminal());
}

#[test]
fn given_job_id_when_displayed_and_parsed_then_is_equal() {
    let id = JobId::new();
    let parsed: JobId = id.to_string().parse().unwrap();

    assert_eq!(parsed, id);
}

#[test]
fn given_garbage_when_parsing_job_id_then_returns_error() {
    assert!("not-a-uuid".parse::<JobId>().is_err());
}
