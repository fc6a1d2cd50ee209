// src/services/rss.rs

//! RSS 2.0 serialization of a feed document.

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::error::{AppError, Result};
use crate::models::{FeedDocument, FeedEntry};

const GENERATOR: &str = concat!(env!("CARGO_PKG_NAME"), " ", env!("CARGO_PKG_VERSION"));

/// Serialize a feed document as an indented RSS 2.0 XML document.
pub fn render(doc: &FeedDocument) -> Result<Vec<u8>> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    write_event(&mut writer, Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut rss = BytesStart::new("rss");
    rss.push_attribute(("version", "2.0"));
    write_event(&mut writer, Event::Start(rss))?;
    write_event(&mut writer, Event::Start(BytesStart::new("channel")))?;

    write_text_element(&mut writer, "title", &doc.title)?;
    write_text_element(&mut writer, "link", &doc.link)?;
    write_text_element(&mut writer, "description", &doc.description)?;
    write_text_element(&mut writer, "language", &doc.language)?;
    write_text_element(&mut writer, "lastBuildDate", &doc.built_at.to_rfc2822())?;
    write_text_element(&mut writer, "generator", GENERATOR)?;

    for entry in &doc.entries {
        write_item(&mut writer, entry)?;
    }

    write_event(&mut writer, Event::End(BytesEnd::new("channel")))?;
    write_event(&mut writer, Event::End(BytesEnd::new("rss")))?;

    let mut out = writer.into_inner();
    out.push(b'\n');
    Ok(out)
}

fn write_item(w: &mut Writer<Vec<u8>>, entry: &FeedEntry) -> Result<()> {
    write_event(w, Event::Start(BytesStart::new("item")))?;
    write_text_element(w, "title", &entry.title)?;
    write_text_element(w, "link", &entry.link)?;
    write_text_element(w, "description", &entry.description)?;

    let mut guid = BytesStart::new("guid");
    guid.push_attribute(("isPermaLink", "true"));
    write_event(w, Event::Start(guid))?;
    write_event(w, Event::Text(BytesText::new(&sanitize_text(&entry.guid))))?;
    write_event(w, Event::End(BytesEnd::new("guid")))?;

    write_text_element(w, "pubDate", &entry.published_at.to_rfc2822())?;
    write_event(w, Event::End(BytesEnd::new("item")))
}

fn write_text_element(w: &mut Writer<Vec<u8>>, name: &str, text: &str) -> Result<()> {
    write_event(w, Event::Start(BytesStart::new(name)))?;
    write_event(w, Event::Text(BytesText::new(&sanitize_text(text))))?;
    write_event(w, Event::End(BytesEnd::new(name)))
}

fn write_event(w: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<()> {
    w.write_event(event).map_err(AppError::feed)
}

/// Strip control characters that are invalid in XML 1.0 (tab, LF and CR stay).
fn sanitize_text(input: &str) -> String {
    input
        .chars()
        .filter(|&c| matches!(c, '\t' | '\n' | '\r') || c >= ' ')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};

    fn sample_doc(entries: Vec<FeedEntry>) -> FeedDocument {
        let tz = FixedOffset::east_opt(9 * 3600).unwrap();
        FeedDocument {
            title: "株探 - 適時開示情報".to_string(),
            link: "https://kabutan.jp/disclosures/".to_string(),
            description: "テスト".to_string(),
            language: "ja".to_string(),
            built_at: tz.with_ymd_and_hms(2025, 8, 11, 15, 0, 0).unwrap(),
            entries,
        }
    }

    fn sample_entry(title: &str) -> FeedEntry {
        let tz = FixedOffset::east_opt(9 * 3600).unwrap();
        FeedEntry {
            title: title.to_string(),
            link: "https://kabutan.jp/disclosures/123".to_string(),
            description: "適時開示：決算".to_string(),
            published_at: tz.with_ymd_and_hms(2025, 8, 11, 13, 41, 0).unwrap(),
            guid: "https://kabutan.jp/disclosures/123".to_string(),
        }
    }

    #[test]
    fn test_channel_metadata() {
        let xml = String::from_utf8(render(&sample_doc(vec![])).unwrap()).unwrap();

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<rss version=\"2.0\">"));
        assert!(xml.contains("<title>株探 - 適時開示情報</title>"));
        assert!(xml.contains("<language>ja</language>"));
        assert!(xml.contains("<lastBuildDate>Mon, 11 Aug 2025 15:00:00 +0900</lastBuildDate>"));
        assert!(xml.contains(&format!(
            "<generator>disclosure-feed {}</generator>",
            env!("CARGO_PKG_VERSION")
        )));
        assert!(!xml.contains("<item>"));
    }

    #[test]
    fn test_item_fields() {
        let doc = sample_doc(vec![sample_entry("【トヨタ自動車 (7203)】決算")]);
        let xml = String::from_utf8(render(&doc).unwrap()).unwrap();

        assert!(xml.contains("<title>【トヨタ自動車 (7203)】決算</title>"));
        assert!(xml.contains(
            "<guid isPermaLink=\"true\">https://kabutan.jp/disclosures/123</guid>"
        ));
        assert!(xml.contains("<pubDate>Mon, 11 Aug 2025 13:41:00 +0900</pubDate>"));
    }

    #[test]
    fn test_markup_in_text_is_escaped() {
        let doc = sample_doc(vec![sample_entry("A&B <株>")]);
        let xml = String::from_utf8(render(&doc).unwrap()).unwrap();
        assert!(xml.contains("<title>A&amp;B &lt;株&gt;</title>"));
    }

    #[test]
    fn test_sanitize_text_drops_control_chars() {
        assert_eq!(sanitize_text("a\u{0}b\u{1b}c\td"), "abc\td");
    }
}
