use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Textual fields a record can expose to search.
/// Each record kind maps them onto its own columns (a booking's `code` is the
/// confirmation code, a bus assignment's `code` is the plate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
    Id,
    Code,
    Name,
    Email,
    Notes,
}

impl SearchField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchField::Id => "id",
            SearchField::Code => "code",
            SearchField::Name => "name",
            SearchField::Email => "email",
            SearchField::Notes => "notes",
        }
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "id" => Some(Self::Id),
            "code" => Some(Self::Code),
            "name" => Some(Self::Name),
            "email" => Some(Self::Email),
            "notes" => Some(Self::Notes),
            _ => None,
        }
    }

    /// Fields used when neither the caller nor the config names any.
    pub fn defaults() -> Vec<SearchField> {
        vec![SearchField::Code, SearchField::Name, SearchField::Email]
    }
}
