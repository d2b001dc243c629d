use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use doctran::application::ports::{ModelError, ModelReply, StagingStore, TranslationModel};
use doctran::application::services::{PipelineError, PipelineRequest};
use doctran::domain::{
    FileFormat, MediaType, StoragePath, Table, TranslationOptions, UnitContent,
};
use doctran::infrastructure::storage::LocalStagingStore;

use crate::helpers::{
    CountingModel, create_pipeline, five_page_document, mixed_three_page_document, pages,
    prompt_content,
};

fn create_store() -> (tempfile::TempDir, Arc<LocalStagingStore>) {
    let dir = tempfile::TempDir::new().unwrap();
    let store = Arc::new(LocalStagingStore::new(dir.path().to_path_buf()).unwrap());
    (dir, store)
}

async fn stage(store: &LocalStagingStore, name: &str, content: &str) -> StoragePath {
    let path = StoragePath::from_raw(name);
    store
        .put(&path, Bytes::from(content.to_string()))
        .await
        .unwrap();
    path
}

fn request(source: StoragePath, options: TranslationOptions, persist: bool) -> PipelineRequest {
    PipelineRequest {
        source,
        media_type: MediaType::Text,
        options,
        persist,
    }
}

#[tokio::test]
async fn given_mixed_document_with_one_failing_unit_when_processing_then_only_that_unit_fails() {
    let (_dir, store) = create_store();
    let source = stage(&store, "mixed.txt", &mixed_three_page_document()).await;
    let model = Arc::new(CountingModel::failing_on("FAIL"));
    let pipeline = create_pipeline(model.clone(), store.clone(), Duration::from_secs(1), 1);

    let output = pipeline
        .process(&request(
            source,
            TranslationOptions::new("German", FileFormat::Markdown),
            true,
        ))
        .await
        .unwrap();

    let document = &output.document;
    let numbers: Vec<u32> = document.pages.iter().map(|p| p.number).collect();
    assert_eq!(numbers, vec![1, 2, 3]);
    assert_eq!(document.failed_units(), vec![(2, 0)]);

    let failed = &document.pages[1].units[0];
    assert_eq!(
        failed.original,
        UnitContent::Text("FAIL this paragraph".to_string())
    );
    assert!(failed.translation.is_none());

    assert_eq!(
        document.pages[0].units[0].translation,
        Some(UnitContent::Text("HELLO WORLD".to_string()))
    );
    assert_eq!(
        document.pages[0].units[1].translation,
        Some(UnitContent::Table(Table::new(vec![
            vec!["NAME".to_string(), "AGE".to_string()],
            vec!["ALICE".to_string(), "30".to_string()],
        ])))
    );
    assert_eq!(
        document.pages[1].units[1].translation,
        Some(UnitContent::Other("* * *".to_string()))
    );
    assert_eq!(
        document.pages[2].units[0].translation,
        Some(UnitContent::Text("GOODBYE".to_string()))
    );
    assert_eq!(output.counts.translated, 4);
    assert_eq!(output.counts.failed, 1);
    assert_eq!(model.calls(), 5);
}

#[tokio::test]
async fn given_page_limit_two_when_processing_five_pages_then_only_first_two_are_translated() {
    let (_dir, store) = create_store();
    let source = stage(&store, "five.txt", &five_page_document()).await;
    let model = Arc::new(CountingModel::new());
    let pipeline = create_pipeline(model.clone(), store.clone(), Duration::from_secs(1), 1);

    let options = TranslationOptions::new("German", FileFormat::Text)
        .with_page_limit(std::num::NonZeroUsize::new(2).unwrap());
    let output = pipeline
        .process(&request(source, options, false))
        .await
        .unwrap();

    let numbers: Vec<u32> = output.document.pages.iter().map(|p| p.number).collect();
    assert_eq!(numbers, vec![1, 2]);
    assert_eq!(model.calls(), 2);
}

#[tokio::test]
async fn given_persist_when_processing_then_output_is_written_next_to_source() {
    let (_dir, store) = create_store();
    let source = stage(&store, "doc.txt", "Hello").await;
    let pipeline = create_pipeline(
        Arc::new(CountingModel::new()),
        store.clone(),
        Duration::from_secs(1),
        1,
    );

    let output = pipeline
        .process(&request(
            source,
            TranslationOptions::new("German", FileFormat::Markdown),
            true,
        ))
        .await
        .unwrap();

    let path = output.output.unwrap();
    assert_eq!(path.as_str(), "doc_translated.md");
    let written = String::from_utf8(store.fetch(&path).await.unwrap()).unwrap();
    assert!(written.contains("## Page 1"));
    assert!(written.contains("HELLO"));
}

#[tokio::test]
async fn given_no_persist_when_processing_then_nothing_is_written() {
    let (_dir, store) = create_store();
    let source = stage(&store, "doc.txt", "Hello").await;
    let pipeline = create_pipeline(
        Arc::new(CountingModel::new()),
        store.clone(),
        Duration::from_secs(1),
        1,
    );

    let output = pipeline
        .process(&request(
            source,
            TranslationOptions::new("German", FileFormat::Markdown),
            false,
        ))
        .await
        .unwrap();

    assert!(output.output.is_none());
    assert!(
        store
            .fetch(&StoragePath::from_raw("doc_translated.md"))
            .await
            .is_err()
    );
}

/// Earlier units answer slower, so completion order is the reverse of
/// input order.
struct ReverseLatencyModel;

#[async_trait::async_trait]
impl TranslationModel for ReverseLatencyModel {
    async fn complete(&self, prompt: &str) -> Result<ModelReply, ModelError> {
        let content = prompt_content(prompt);
        let index: u64 = content.trim_start_matches("unit ").parse().unwrap_or(0);
        tokio::time::sleep(Duration::from_millis(80 - index * 15)).await;
        Ok(ModelReply::success(content.to_uppercase()))
    }
}

#[tokio::test]
async fn given_parallel_units_when_processing_then_output_order_matches_input() {
    let (_dir, store) = create_store();
    let source = stage(
        &store,
        "order.txt",
        "unit 0\n\nunit 1\n\nunit 2\n\nunit 3\n\nunit 4",
    )
    .await;
    let pipeline = create_pipeline(
        Arc::new(ReverseLatencyModel),
        store.clone(),
        Duration::from_secs(1),
        5,
    );

    let output = pipeline
        .process(&request(
            source,
            TranslationOptions::new("German", FileFormat::Text),
            false,
        ))
        .await
        .unwrap();

    let translated: Vec<String> = output.document.pages[0]
        .units
        .iter()
        .map(|u| u.effective().to_string())
        .collect();
    assert_eq!(
        translated,
        vec!["UNIT 0", "UNIT 1", "UNIT 2", "UNIT 3", "UNIT 4"]
    );
}

#[tokio::test]
async fn given_missing_source_when_processing_then_returns_source_error() {
    let (_dir, store) = create_store();
    let pipeline = create_pipeline(
        Arc::new(CountingModel::new()),
        store.clone(),
        Duration::from_secs(1),
        1,
    );

    let result = pipeline
        .process(&request(
            StoragePath::from_raw("missing.txt"),
            TranslationOptions::new("German", FileFormat::Text),
            true,
        ))
        .await;

    assert!(matches!(result, Err(PipelineError::Source(_))));
}

#[tokio::test]
async fn given_invalid_utf8_when_processing_then_returns_parse_error() {
    let (_dir, store) = create_store();
    let source = StoragePath::from_raw("broken.txt");
    store
        .put(&source, Bytes::from_static(&[0xff, 0xfe, 0xfd]))
        .await
        .unwrap();
    let pipeline = create_pipeline(
        Arc::new(CountingModel::new()),
        store.clone(),
        Duration::from_secs(1),
        1,
    );

    let result = pipeline
        .process(&request(
            source,
            TranslationOptions::new("German", FileFormat::Text),
            true,
        ))
        .await;

    assert!(matches!(result, Err(PipelineError::Parse(_))));
}

#[tokio::test]
async fn given_blank_pages_when_processing_then_page_numbers_follow_source() {
    let (_dir, store) = create_store();
    let source = stage(&store, "gaps.txt", &pages(&["first", "   ", "third"])).await;
    let pipeline = create_pipeline(
        Arc::new(CountingModel::new()),
        store.clone(),
        Duration::from_secs(1),
        1,
    );

    let output = pipeline
        .process(&request(
            source,
            TranslationOptions::new("German", FileFormat::Text),
            false,
        ))
        .await
        .unwrap();

    let numbers: Vec<u32> = output.document.pages.iter().map(|p| p.number).collect();
    assert_eq!(numbers, vec![1, 3]);
}
