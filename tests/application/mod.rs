mod document_pipeline_test;
mod unit_translator_test;
