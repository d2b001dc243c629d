use std::fmt;

/// Ordered pages of a parsed source document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub pages: Vec<Page>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// 1-based page number in the source document.
    pub number: u32,
    pub units: Vec<ContentUnit>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitKind {
    Text,
    Table,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UnitContent {
    Text(String),
    Table(Table),
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationStatus {
    Pending,
    Translated,
    Failed(String),
}

/// Smallest translatable piece of a page.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentUnit {
    pub original: UnitContent,
    pub translation: Option<UnitContent>,
    pub status: TranslationStatus,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnitCounts {
    pub translated: usize,
    pub failed: usize,
    pub pending: usize,
}

impl Document {
    pub fn new(pages: Vec<Page>) -> Self {
        Self { pages }
    }

    pub fn units(&self) -> impl Iterator<Item = &ContentUnit> {
        self.pages.iter().flat_map(|p| p.units.iter())
    }

    pub fn unit_count(&self) -> usize {
        self.pages.iter().map(|p| p.units.len()).sum()
    }

    /// `(page number, unit index)` of every unit whose translation failed.
    pub fn failed_units(&self) -> Vec<(u32, usize)> {
        self.pages
            .iter()
            .flat_map(|page| {
                page.units
                    .iter()
                    .enumerate()
                    .filter(|(_, unit)| unit.is_failed())
                    .map(move |(idx, _)| (page.number, idx))
            })
            .collect()
    }

    pub fn counts(&self) -> UnitCounts {
        self.units()
            .fold(UnitCounts::default(), |mut counts, unit| {
                match unit.status {
                    TranslationStatus::Pending => counts.pending += 1,
                    TranslationStatus::Translated => counts.translated += 1,
                    TranslationStatus::Failed(_) => counts.failed += 1,
                }
                counts
            })
    }
}

impl Page {
    pub fn new(number: u32, units: Vec<ContentUnit>) -> Self {
        Self { number, units }
    }
}

impl Table {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Parses pipe-separated rows, one per line, skipping blank lines. A
    /// Markdown separator (`---|:---:`) is dropped only directly below the
    /// header; anywhere else it is data.
    pub fn parse(text: &str) -> Self {
        let rows = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(split_row)
            .enumerate()
            .filter(|(i, cells)| !(*i == 1 && is_separator_row(cells)))
            .map(|(_, cells)| cells)
            .collect();
        Self { rows }
    }

    /// True when no cell holds any text.
    pub fn is_empty(&self) -> bool {
        self.rows.iter().flatten().all(|cell| cell.is_empty())
    }
}

fn split_row(line: &str) -> Vec<String> {
    line.trim_matches('|')
        .split('|')
        .map(|cell| cell.trim().to_string())
        .collect()
}

fn is_separator_row(cells: &[String]) -> bool {
    cells.iter().all(|cell| {
        let dashes = cell.strip_prefix(':').unwrap_or(cell);
        let dashes = dashes.strip_suffix(':').unwrap_or(dashes);
        dashes.len() >= 3 && dashes.chars().all(|c| c == '-')
    })
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", row.join(" | "))?;
        }
        Ok(())
    }
}

impl UnitContent {
    pub fn kind(&self) -> UnitKind {
        match self {
            UnitContent::Text(_) => UnitKind::Text,
            UnitContent::Table(_) => UnitKind::Table,
            UnitContent::Other(_) => UnitKind::Other,
        }
    }

    /// Rebuilds content of the given kind from model output.
    pub fn from_text(kind: UnitKind, text: &str) -> Self {
        match kind {
            UnitKind::Text => UnitContent::Text(text.trim().to_string()),
            UnitKind::Table => UnitContent::Table(Table::parse(text)),
            UnitKind::Other => UnitContent::Other(text.trim().to_string()),
        }
    }
}

impl fmt::Display for UnitContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitContent::Text(text) | UnitContent::Other(text) => f.write_str(text),
            UnitContent::Table(table) => write!(f, "{}", table),
        }
    }
}

impl ContentUnit {
    pub fn new(original: UnitContent) -> Self {
        Self {
            original,
            translation: None,
            status: TranslationStatus::Pending,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::new(UnitContent::Text(text.into()))
    }

    pub fn table(rows: Vec<Vec<String>>) -> Self {
        Self::new(UnitContent::Table(Table::new(rows)))
    }

    pub fn other(content: impl Into<String>) -> Self {
        Self::new(UnitContent::Other(content.into()))
    }

    pub fn kind(&self) -> UnitKind {
        self.original.kind()
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.status, TranslationStatus::Failed(_))
    }

    /// Records a backend result on the unit. A failed result leaves the
    /// original untouched and drops any earlier translation.
    pub fn apply_translation(&mut self, text: &str, ok: bool) {
        if ok {
            match UnitContent::from_text(self.kind(), text) {
                UnitContent::Table(table) if table.is_empty() => {
                    self.translation = None;
                    self.status = TranslationStatus::Failed("reply held no table rows".to_string());
                }
                translation => {
                    self.translation = Some(translation);
                    self.status = TranslationStatus::Translated;
                }
            }
        } else {
            self.translation = None;
            self.status = TranslationStatus::Failed(text.to_string());
        }
    }

    /// The translation when present, the original otherwise.
    pub fn effective(&self) -> &UnitContent {
        self.translation.as_ref().unwrap_or(&self.original)
    }
}
