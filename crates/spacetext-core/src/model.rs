use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Who may read a document on the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Access {
    Public,
    Private,
    Organization,
    #[serde(other)]
    Unknown,
}

impl Access {
    pub fn is_public(&self) -> bool {
        matches!(self, Access::Public)
    }
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Access::Public => write!(f, "public"),
            Access::Private => write!(f, "private"),
            Access::Organization => write!(f, "organization"),
            Access::Unknown => write!(f, "unknown"),
        }
    }
}

/// A document as returned by the DocumentCloud API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Search results carry the id as a string, document detail as a number.
    #[serde(deserialize_with = "number_or_string")]
    pub id: u64,
    #[serde(default)]
    pub title: String,
    pub slug: String,
    pub access: Access,
    /// Crunched `WIDTHxHEIGHT` list, one entry per page.
    #[serde(default)]
    pub page_spec: String,
    /// ISO 639-2 code, e.g. "eng".
    pub language: String,
    /// Base URL of the asset host, e.g. "https://s3.documentcloud.org/".
    pub asset_url: String,
}

impl Document {
    /// Public URL of the document's PDF.
    pub fn pdf_url(&self) -> String {
        let base = self.asset_url.trim_end_matches('/');
        format!("{}/documents/{}/{}.pdf", base, self.id, self.slug)
    }
}

fn number_or_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Number(u64),
        Text(String),
    }

    match Id::deserialize(deserializer)? {
        Id::Number(n) => Ok(n),
        Id::Text(s) => s.parse().map_err(serde::de::Error::custom),
    }
}

/// Size of one page in source pixel units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageDimensions {
    pub width: f64,
    pub height: f64,
}

/// A single word with its box as fractions of the page size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub text: String,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Text and word positions for one page, in the shape the platform accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageRecord {
    /// Zero-based page index.
    pub page_number: usize,
    pub text: String,
    /// OCR engine tag, e.g. "ocrspace1".
    pub ocr: String,
    pub positions: Vec<Position>,
}

/// Body of the PATCH that writes OCR results back to a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagesUpdate {
    pub pages: Vec<PageRecord>,
}
