use std::fmt;
use std::str::FromStr;

/// Output format of a translated document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileFormat {
    Markdown,
    Text,
    Pdf,
}

impl FileFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileFormat::Markdown => "markdown",
            FileFormat::Text => "text",
            FileFormat::Pdf => "pdf",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            FileFormat::Markdown => "md",
            FileFormat::Text => "txt",
            FileFormat::Pdf => "pdf",
        }
    }

    pub fn as_mime(&self) -> &'static str {
        match self {
            FileFormat::Markdown => "text/markdown; charset=utf-8",
            FileFormat::Text => "text/plain; charset=utf-8",
            FileFormat::Pdf => "application/pdf",
        }
    }
}

impl FromStr for FileFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "markdown" | "md" => Ok(FileFormat::Markdown),
            "text" | "txt" => Ok(FileFormat::Text),
            "pdf" => Ok(FileFormat::Pdf),
            other => Err(format!(
                "Unsupported file format: {}. Expected: markdown, text or pdf",
                other
            )),
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
