//! Disclosure data structures.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::utils::{date, resolve_url};

/// One table row as it appears on a listing page, after text cleaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    pub code: String,
    pub company_name: String,
    pub title: String,
    /// Link target exactly as found in the title cell
    pub href: String,
    /// Compact local time, e.g. `25/08/01 13:41`
    pub time_str: String,
}

/// A disclosure ready for filtering and publishing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DisclosureRecord {
    /// Instrument code (e.g. `7203`, `159A`)
    pub code: String,

    /// Company display name
    pub company_name: String,

    /// Disclosure title
    pub title: String,

    /// Link as published, rooted paths made absolute; also the dedup key and feed GUID
    pub link: String,

    /// Publish time in the feed timezone
    pub published_at: DateTime<FixedOffset>,
}

impl DisclosureRecord {
    /// Build a record from a row, resolving its link against `origin`.
    ///
    /// An unparseable time string falls back to the current time in `tz`.
    pub fn from_row(row: RawRow, origin: &Url, tz: FixedOffset) -> Self {
        let link = resolve_url(origin, &row.href);
        let published_at = date::parse_or_now(&row.time_str, tz);

        Self {
            code: row.code,
            company_name: row.company_name,
            title: row.title,
            link,
            published_at,
        }
    }

    /// Feed entry title: `【company (code)】title`.
    pub fn headline(&self) -> String {
        format!("【{} ({})】{}", self.company_name, self.code, self.title)
    }

    /// Format record for display using a template.
    ///
    /// Supported placeholders: `{title}`, `{company}`, `{code}`, `{link}`
    pub fn format(&self, template: &str) -> String {
        template
            .replace("{title}", &self.title)
            .replace("{company}", &self.company_name)
            .replace("{code}", &self.code)
            .replace("{link}", &self.link)
    }
}
