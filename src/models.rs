//! Core data types: dapp records, URL fields, and report rows.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use strum_macros::{EnumIter, EnumString, IntoStaticStr};

/// A URL-bearing field on a dapp record.
///
/// Variants are declared in report order; `UrlField::iter()` yields them in
/// the order a record's fields are checked.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr, clap::ValueEnum,
)]
#[strum(serialize_all = "lowercase")]
pub enum UrlField {
    Url,
    Github,
    Wiki,
    Blog,
    Twitter,
    Facebook,
    Slack,
    Gitter,
    Logo,
}

impl UrlField {
    /// Document key for this field.
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for UrlField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One dapp record as read from the store.
///
/// Only the slug, status and URL fields are read. A field holding anything
/// other than a string (null, number, nested document) is treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DappRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub github: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub wiki: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub blog: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub twitter: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub facebook: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub slack: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub gitter: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub logo: Option<String>,
}

impl DappRecord {
    /// Returns the value of `field` if it is present and non-empty.
    pub fn get(&self, field: UrlField) -> Option<&str> {
        let value = match field {
            UrlField::Url => &self.url,
            UrlField::Github => &self.github,
            UrlField::Wiki => &self.wiki,
            UrlField::Blog => &self.blog,
            UrlField::Twitter => &self.twitter,
            UrlField::Facebook => &self.facebook,
            UrlField::Slack => &self.slack,
            UrlField::Gitter => &self.gitter,
            UrlField::Logo => &self.logo,
        };
        value.as_deref().filter(|v| !v.is_empty())
    }

    /// Slug for report rows; empty when the record has none.
    pub fn slug_or_empty(&self) -> &str {
        self.slug.as_deref().unwrap_or_default()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MaybeString {
    Str(String),
    Other(IgnoredAny),
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<MaybeString>::deserialize(deserializer)? {
        Some(MaybeString::Str(s)) => Some(s),
        Some(MaybeString::Other(_)) | None => None,
    })
}

/// One line of the failure report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureRow {
    pub dapp: String,
    pub field: String,
    pub url: String,
    pub http_code: String,
    pub error: String,
    pub message: String,
}

impl FailureRow {
    /// Columns in header order.
    pub fn as_record(&self) -> [&str; 6] {
        [
            &self.dapp,
            &self.field,
            &self.url,
            &self.http_code,
            &self.error,
            &self.message,
        ]
    }

    /// Tab-joined form written to the operator stream.
    pub fn to_tab_line(&self) -> String {
        self.as_record().join("\t")
    }
}
