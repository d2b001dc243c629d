use std::sync::Arc;
use std::time::Duration;

use doctran::application::ports::{ModelError, ModelReply, TranslationModel};
use doctran::application::services::ContentUnitTranslator;
use doctran::domain::{ContentUnit, TranslationStatus, UnitContent};

use crate::helpers::CountingModel;

struct RefusingModel;

#[async_trait::async_trait]
impl TranslationModel for RefusingModel {
    async fn complete(&self, _prompt: &str) -> Result<ModelReply, ModelError> {
        Ok(ModelReply::refused("policy"))
    }
}

fn translator(model: Arc<dyn TranslationModel>, timeout: Duration) -> ContentUnitTranslator {
    ContentUnitTranslator::new(model, timeout)
}

#[tokio::test]
async fn given_working_backend_when_translating_then_unit_is_translated() {
    let translator = translator(Arc::new(CountingModel::new()), Duration::from_secs(1));
    let mut unit = ContentUnit::text("hello");

    let (text, ok) = translator.translate(&mut unit, "German", None).await;

    assert!(ok);
    assert_eq!(text, "HELLO");
    assert_eq!(unit.status, TranslationStatus::Translated);
    assert_eq!(unit.translation, Some(UnitContent::Text("HELLO".to_string())));
}

#[tokio::test]
async fn given_backend_error_when_translating_then_unit_is_marked_failed() {
    let translator = translator(
        Arc::new(CountingModel::failing_on("hello")),
        Duration::from_secs(1),
    );
    let mut unit = ContentUnit::text("hello");

    let (text, ok) = translator.translate(&mut unit, "German", None).await;

    assert!(!ok);
    assert_eq!(text, "hello");
    assert!(unit.is_failed());
    assert_eq!(unit.original, UnitContent::Text("hello".to_string()));
}

#[tokio::test]
async fn given_refusal_when_translating_then_unit_is_marked_failed() {
    let translator = translator(Arc::new(RefusingModel), Duration::from_secs(1));
    let mut unit = ContentUnit::text("hello");

    let (_, ok) = translator.translate(&mut unit, "German", None).await;

    assert!(!ok);
    assert!(matches!(unit.status, TranslationStatus::Failed(ref reason) if reason.contains("policy")));
}

#[tokio::test]
async fn given_slow_backend_when_timeout_expires_then_unit_is_marked_failed() {
    let translator = translator(
        Arc::new(CountingModel::with_delay(Duration::from_millis(500))),
        Duration::from_millis(20),
    );
    let mut unit = ContentUnit::text("hello");

    let (_, ok) = translator.translate(&mut unit, "German", None).await;

    assert!(!ok);
    assert!(matches!(unit.status, TranslationStatus::Failed(ref reason) if reason.contains("timed out")));
}

struct PipeOnlyModel;

#[async_trait::async_trait]
impl TranslationModel for PipeOnlyModel {
    async fn complete(&self, _prompt: &str) -> Result<ModelReply, ModelError> {
        Ok(ModelReply::success("| |"))
    }
}

#[tokio::test]
async fn given_table_reply_without_cells_when_translating_then_unit_is_marked_failed() {
    let translator = translator(Arc::new(PipeOnlyModel), Duration::from_secs(1));
    let mut unit = ContentUnit::table(vec![vec!["Name".into(), "Age".into()]]);

    let (text, ok) = translator.translate(&mut unit, "German", None).await;

    assert!(!ok);
    assert_eq!(text, "Name | Age");
    assert!(unit.is_failed());
}
