use doctran::domain::{
    ContentUnit, Document, Page, Table, TranslationStatus, UnitContent, UnitKind,
};

#[test]
fn given_pipe_rows_when_parsing_table_then_cells_are_trimmed() {
    let table = Table::parse("| Name | Age |\n|---|---|\n| Alice | 30 |");

    assert_eq!(
        table.rows,
        vec![
            vec!["Name".to_string(), "Age".to_string()],
            vec!["Alice".to_string(), "30".to_string()],
        ]
    );
    assert_eq!(table.column_count(), 2);
}

#[test]
fn given_table_unit_when_translation_succeeds_then_translation_keeps_table_shape() {
    let mut unit = ContentUnit::table(vec![vec!["Name".into(), "Age".into()]]);

    unit.apply_translation("Nom | Âge", true);

    assert_eq!(unit.status, TranslationStatus::Translated);
    assert_eq!(
        unit.translation,
        Some(UnitContent::Table(Table::new(vec![vec![
            "Nom".to_string(),
            "Âge".to_string()
        ]])))
    );
}

#[test]
fn given_text_unit_when_translation_fails_then_original_is_preserved() {
    let mut unit = ContentUnit::text("Hello");

    unit.apply_translation("timed out", false);

    assert!(unit.is_failed());
    assert_eq!(unit.translation, None);
    assert_eq!(unit.original, UnitContent::Text("Hello".to_string()));
    assert_eq!(unit.effective(), &UnitContent::Text("Hello".to_string()));
}

#[test]
fn given_units_of_each_kind_when_reading_kind_then_matches_variant() {
    assert_eq!(ContentUnit::text("a").kind(), UnitKind::Text);
    assert_eq!(ContentUnit::table(vec![]).kind(), UnitKind::Table);
    assert_eq!(ContentUnit::other("---").kind(), UnitKind::Other);
}

#[test]
fn given_document_with_failed_unit_when_listing_failures_then_reports_page_and_index() {
    let mut failed = ContentUnit::text("b");
    failed.apply_translation("refused", false);
    let mut translated = ContentUnit::text("a");
    translated.apply_translation("A", true);

    let document = Document::new(vec![
        Page::new(1, vec![translated]),
        Page::new(2, vec![ContentUnit::text("c"), failed]),
    ]);

    assert_eq!(document.failed_units(), vec![(2, 1)]);
    let counts = document.counts();
    assert_eq!(counts.translated, 1);
    assert_eq!(counts.failed, 1);
    assert_eq!(counts.pending, 1);
    assert_eq!(document.unit_count(), 3);
}

#[test]
fn given_placeholder_data_row_when_parsing_table_then_row_is_kept() {
    let table = Table::parse("Item | Qty\nApple | 3\n- | -\nPear | 1");

    assert_eq!(table.rows.len(), 4);
    assert_eq!(table.rows[2], vec!["-".to_string(), "-".to_string()]);
}

#[test]
fn given_separator_row_away_from_header_when_parsing_table_then_row_is_data() {
    let table = Table::parse("A | B\n1 | 2\n--- | ---");

    assert_eq!(table.rows.len(), 3);
}

#[test]
fn given_aligned_separator_below_header_when_parsing_table_then_it_is_dropped() {
    let table = Table::parse("A | B\n:--- | ---:\n1 | 2");

    assert_eq!(
        table.rows,
        vec![
            vec!["A".to_string(), "B".to_string()],
            vec!["1".to_string(), "2".to_string()],
        ]
    );
}

#[test]
fn given_table_unit_when_reply_holds_no_cells_then_unit_fails_and_keeps_original() {
    let mut unit = ContentUnit::table(vec![vec!["A".into(), "B".into()]]);

    unit.apply_translation("|\n|", true);

    assert!(unit.is_failed());
    assert_eq!(unit.translation, None);
    assert_eq!(
        unit.effective(),
        &UnitContent::Table(Table::new(vec![vec!["A".to_string(), "B".to_string()]]))
    );
}
