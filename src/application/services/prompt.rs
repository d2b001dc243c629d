use crate::domain::{ContentUnit, UnitKind};

/// Builds the backend prompt for one unit. The instruction depends only on
/// the unit kind; the unit content is appended verbatim.
pub fn build_prompt(unit: &ContentUnit, target_language: &str, style: Option<&str>) -> String {
    let mut prompt = instruction(unit.kind(), target_language);

    if let Some(style) = style.map(str::trim).filter(|s| !s.is_empty()) {
        prompt.push_str(&format!("\nUse a {} style.", style));
    }

    prompt.push_str("\nReply with the translation only.\n\n");
    prompt.push_str(&unit.original.to_string());
    prompt
}

fn instruction(kind: UnitKind, target_language: &str) -> String {
    match kind {
        UnitKind::Text => format!("Translate the following text into {}.", target_language),
        UnitKind::Table => format!(
            "Translate the following table into {}. Keep the layout: one row per line, \
             cells separated by ' | ', and the same number of rows and columns.",
            target_language
        ),
        UnitKind::Other => format!(
            "Translate the following content into {}. Keep any markup, numbers and symbols unchanged.",
            target_language
        ),
    }
}
