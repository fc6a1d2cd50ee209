//! Application configuration structures.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP and crawling behavior settings
    #[serde(default)]
    pub crawler: CrawlerConfig,

    /// Row text cleaning settings
    #[serde(default)]
    pub extract: CleaningConfig,

    /// Exclusion table
    #[serde(default)]
    pub filter: FilterConfig,

    /// Feed metadata and publishing policy
    #[serde(default)]
    pub feed: FeedConfig,

    /// Output and state file locations
    #[serde(default)]
    pub paths: PathsConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration, falling back to defaults when the file is absent.
    ///
    /// A file that exists but cannot be read or parsed is a configuration
    /// error rather than a silent fallback.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            log::warn!("Config file {} not found. Using defaults.", path.display());
            return Ok(Self::default());
        }
        Self::load(path).map_err(|e| AppError::config(format!("{}: {}", path.display(), e)))
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.crawler.user_agent.trim().is_empty() {
            return Err(AppError::validation("crawler.user_agent is empty"));
        }
        if self.crawler.timeout_secs == 0 {
            return Err(AppError::validation("crawler.timeout_secs must be > 0"));
        }
        if self.crawler.max_pages == 0 {
            return Err(AppError::validation("crawler.max_pages must be > 0"));
        }
        self.crawler.base_url()?;
        if self.feed.max_items == 0 {
            return Err(AppError::validation("feed.max_items must be > 0"));
        }
        if self.feed.title.trim().is_empty() {
            return Err(AppError::validation("feed.title is empty"));
        }
        self.feed.timezone()?;
        if self.paths.output_feed.as_os_str().is_empty() {
            return Err(AppError::validation("paths.output_feed is empty"));
        }
        if self.paths.state_file.as_os_str().is_empty() {
            return Err(AppError::validation("paths.state_file is empty"));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            crawler: CrawlerConfig::default(),
            extract: CleaningConfig::default(),
            filter: FilterConfig::default(),
            feed: FeedConfig::default(),
            paths: PathsConfig::default(),
        }
    }
}

/// What the crawl does when a page has no disclosure table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MissingTablePolicy {
    /// Log the page and continue with the next one
    #[default]
    Skip,
    /// End the crawl at this page
    Stop,
}

/// HTTP client and crawling behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlerConfig {
    /// Listing URL; page 1 is fetched bare, later pages with `?page=N`
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Delay between page requests in milliseconds
    #[serde(default = "defaults::request_delay")]
    pub request_delay_ms: u64,

    /// Highest page index to visit
    #[serde(default = "defaults::max_pages")]
    pub max_pages: u32,

    #[serde(default)]
    pub on_missing_table: MissingTablePolicy,
}

impl CrawlerConfig {
    /// Parsed listing URL.
    pub fn base_url(&self) -> Result<Url> {
        Ok(Url::parse(&self.base_url)?)
    }
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
            request_delay_ms: defaults::request_delay(),
            max_pages: defaults::max_pages(),
            on_missing_table: MissingTablePolicy::default(),
        }
    }
}

/// Text cleaning applied to extracted cells.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleaningConfig {
    /// Artifact tokens removed from titles (e.g. the "pdf" icon label)
    #[serde(default = "defaults::title_remove_patterns")]
    pub title_remove_patterns: Vec<String>,
}

impl CleaningConfig {
    /// Clean a title string.
    pub fn clean_title(&self, text: &str) -> String {
        let mut result = text.to_string();
        for pattern in self.title_remove_patterns.iter().filter(|p| !p.is_empty()) {
            result = result.replace(pattern.as_str(), "");
        }

        Self::normalize_whitespace(&result)
    }

    /// Clean a plain cell value.
    pub fn clean_cell(&self, text: &str) -> String {
        Self::normalize_whitespace(text)
    }

    fn normalize_whitespace(s: &str) -> String {
        s.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

impl Default for CleaningConfig {
    fn default() -> Self {
        Self {
            title_remove_patterns: defaults::title_remove_patterns(),
        }
    }
}

/// Exclusion table settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Title keywords
    #[serde(default = "defaults::exclude_keywords")]
    pub keywords: Vec<String>,

    /// Instrument codes
    #[serde(default = "defaults::exclude_codes")]
    pub codes: Vec<String>,

    /// Also test the code column for an exact match
    #[serde(default = "defaults::enabled")]
    pub match_codes: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            keywords: defaults::exclude_keywords(),
            codes: defaults::exclude_codes(),
            match_codes: true,
        }
    }
}

/// Which links are added to the seen set after publishing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SeenPolicy {
    /// Every record that survived filtering this run
    #[default]
    All,
    /// Only records that made it into the feed
    Retained,
}

/// Feed metadata and publishing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    #[serde(default = "defaults::feed_title")]
    pub title: String,

    #[serde(default = "defaults::base_url")]
    pub link: String,

    #[serde(default = "defaults::feed_description")]
    pub description: String,

    #[serde(default = "defaults::language")]
    pub language: String,

    /// Maximum number of entries in the feed
    #[serde(default = "defaults::max_items")]
    pub max_items: usize,

    /// Fixed publish timezone, as minutes east of UTC
    #[serde(default = "defaults::utc_offset_minutes")]
    pub utc_offset_minutes: i32,

    /// Item description template.
    ///
    /// Supported placeholders: `{title}`, `{company}`, `{code}`, `{link}`
    #[serde(default = "defaults::item_description")]
    pub item_description: String,

    #[serde(default)]
    pub mark_seen: SeenPolicy,
}

impl FeedConfig {
    /// The fixed publish timezone.
    pub fn timezone(&self) -> Result<FixedOffset> {
        FixedOffset::east_opt(self.utc_offset_minutes.saturating_mul(60)).ok_or_else(|| {
            AppError::validation(format!(
                "feed.utc_offset_minutes out of range: {}",
                self.utc_offset_minutes
            ))
        })
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            title: defaults::feed_title(),
            link: defaults::base_url(),
            description: defaults::feed_description(),
            language: defaults::language(),
            max_items: defaults::max_items(),
            utc_offset_minutes: defaults::utc_offset_minutes(),
            item_description: defaults::item_description(),
            mark_seen: SeenPolicy::default(),
        }
    }
}

/// File locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// RSS document, replaced on every run
    #[serde(default = "defaults::output_feed")]
    pub output_feed: PathBuf,

    /// JSON array of links already surfaced
    #[serde(default = "defaults::state_file")]
    pub state_file: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            output_feed: defaults::output_feed(),
            state_file: defaults::state_file(),
        }
    }
}

mod defaults {
    use std::path::PathBuf;

    use crate::models::exclusions;

    // Crawler defaults
    pub fn base_url() -> String {
        "https://kabutan.jp/disclosures/".into()
    }
    pub fn user_agent() -> String {
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36".into()
    }
    pub fn timeout() -> u64 {
        10
    }
    pub fn request_delay() -> u64 {
        1000
    }
    pub fn max_pages() -> u32 {
        100
    }

    // Extraction defaults
    pub fn title_remove_patterns() -> Vec<String> {
        vec!["pdf".into()]
    }

    // Filter defaults
    pub fn exclude_keywords() -> Vec<String> {
        exclusions::KEYWORDS.iter().map(|s| s.to_string()).collect()
    }
    pub fn exclude_codes() -> Vec<String> {
        exclusions::CODES.iter().map(|s| s.to_string()).collect()
    }
    pub fn enabled() -> bool {
        true
    }

    // Feed defaults
    pub fn feed_title() -> String {
        "株探 - 適時開示情報".into()
    }
    pub fn feed_description() -> String {
        "株探の適時開示情報から特定キーワードを除外したRSSフィードです。".into()
    }
    pub fn language() -> String {
        "ja".into()
    }
    pub fn max_items() -> usize {
        2000
    }
    pub fn utc_offset_minutes() -> i32 {
        9 * 60
    }
    pub fn item_description() -> String {
        "適時開示：{title}".into()
    }

    // Path defaults
    pub fn output_feed() -> PathBuf {
        PathBuf::from("kabutan_tdnet.xml")
    }
    pub fn state_file() -> PathBuf {
        PathBuf::from("processed_links.json")
    }
}
