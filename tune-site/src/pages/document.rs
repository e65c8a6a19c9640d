//! Page document with addressable containers
//!
//! A page shell is plain HTML. Containers are found by attribute:
//! `data-content="<slot>"` for content sections and `id="<id>"` for the
//! shared component placeholders. Values may be single or double quoted.
//! Writing a container replaces its inner markup, matching nested elements
//! of the same tag name.

use crate::render::{Html, Text};

/// Content section markers a page shell may provide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    LatestRelease,
    Tracks,
    Albums,
    Singles,
    Beats,
    Packs,
    Products,
    Featured,
    Collabs,
    ArtistImage,
    Bio,
    Stats,
    PlatformLinks,
}

impl Slot {
    pub fn marker(self) -> &'static str {
        match self {
            Slot::LatestRelease => "latest-release",
            Slot::Tracks => "tracks",
            Slot::Albums => "albums",
            Slot::Singles => "singles",
            Slot::Beats => "beats",
            Slot::Packs => "packs",
            Slot::Products => "products",
            Slot::Featured => "featured",
            Slot::Collabs => "collabs",
            Slot::ArtistImage => "artist-image",
            Slot::Bio => "bio",
            Slot::Stats => "stats",
            Slot::PlatformLinks => "platform-links",
        }
    }
}

const SLOT_ATTR: &str = "data-content";
const ID_ATTR: &str = "id";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    html: String,
}

impl Document {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.html
    }

    pub fn into_string(self) -> String {
        self.html
    }

    pub(crate) fn replace(&mut self, html: String) {
        self.html = html;
    }

    pub fn has_slot(&self, slot: Slot) -> bool {
        inner_bounds(&self.html, SLOT_ATTR, slot.marker()).is_some()
    }

    pub fn has_id(&self, id: &str) -> bool {
        inner_bounds(&self.html, ID_ATTR, id).is_some()
    }

    /// Replace the content of a section; `false` when the shell has no such container
    pub fn fill(&mut self, slot: Slot, fragment: &Html) -> bool {
        self.write_inner(SLOT_ATTR, slot.marker(), fragment.as_str())
    }

    pub fn fill_id(&mut self, id: &str, fragment: &Html) -> bool {
        self.write_inner(ID_ATTR, id, fragment.as_str())
    }

    pub fn set_text_by_id(&mut self, id: &str, text: &str) -> bool {
        self.write_inner(ID_ATTR, id, &Text(text).to_string())
    }

    /// Current inner markup of a section
    pub fn slot_content(&self, slot: Slot) -> Option<&str> {
        inner_bounds(&self.html, SLOT_ATTR, slot.marker()).map(|(start, end)| &self.html[start..end])
    }

    pub fn id_content(&self, id: &str) -> Option<&str> {
        inner_bounds(&self.html, ID_ATTR, id).map(|(start, end)| &self.html[start..end])
    }

    fn write_inner(&mut self, name: &str, value: &str, markup: &str) -> bool {
        match inner_bounds(&self.html, name, value) {
            Some((start, end)) => {
                self.html.replace_range(start..end, markup);
                true
            }
            None => false,
        }
    }
}

/// Byte range of the inner content of the first element with `name` set to `value`
fn inner_bounds(html: &str, name: &str, value: &str) -> Option<(usize, usize)> {
    let double = format!(r#"{}="{}""#, name, value);
    let single = format!("{}='{}'", name, value);
    let found = [locate(html, &double), locate(html, &single)]
        .into_iter()
        .flatten()
        .min_by_key(|&(_, attr_pos)| attr_pos);
    let (tag_start, attr_pos) = found?;
    element_inner(html, tag_start, attr_pos)
}

/// Opening `<` and attribute offset of the first tag containing `attribute`
fn locate(html: &str, attribute: &str) -> Option<(usize, usize)> {
    let mut search_from = 0;
    loop {
        let pos = search_from + html[search_from..].find(attribute)?;
        search_from = pos + attribute.len();

        let preceded_by_space = html[..pos]
            .chars()
            .next_back()
            .map_or(false, char::is_whitespace);
        if !preceded_by_space {
            continue;
        }

        let tag_start = match html[..pos].rfind('<') {
            Some(start) => start,
            None => continue,
        };
        if html[tag_start..pos].contains('>') {
            continue;
        }
        return Some((tag_start, pos));
    }
}

/// Inner range of the element opened at `tag_start`, matching nested same-name tags
fn element_inner(html: &str, tag_start: usize, attr_pos: usize) -> Option<(usize, usize)> {
    let open_end = attr_pos + html[attr_pos..].find('>')? + 1;
    if html[..open_end].ends_with("/>") {
        return None;
    }

    let name: String = html[tag_start + 1..]
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect();
    if name.is_empty() {
        return None;
    }

    let open_pattern = format!("<{}", name);
    let close_pattern = format!("</{}", name);
    let mut depth = 1usize;
    let mut cursor = open_end;

    loop {
        let close = cursor + find_tag(&html[cursor..], &close_pattern)?;

        let mut scan = cursor;
        while let Some(offset) = find_tag(&html[scan..close], &open_pattern) {
            depth += 1;
            scan += offset + open_pattern.len();
        }

        depth -= 1;
        if depth == 0 {
            return Some((open_end, close));
        }
        cursor = close + close_pattern.len();
    }
}

/// Find `<name` / `</name` followed by a tag boundary, so `<div` never matches `<divider`
fn find_tag(haystack: &str, pattern: &str) -> Option<usize> {
    let mut from = 0;
    while let Some(offset) = haystack[from..].find(pattern) {
        let at = from + offset;
        let next = haystack[at + pattern.len()..].chars().next();
        if matches!(next, None | Some('>') | Some('/')) || next.map_or(false, char::is_whitespace) {
            return Some(at);
        }
        from = at + pattern.len();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHELL: &str = r#"<main>
<div class="grid" data-content="albums"><p>Loading</p></div>
<section data-content="singles"><div><div>nested</div></div><span>x</span></section>
<div id="footer-placeholder"></div>
</main>"#;

    #[test]
    fn test_fill_replaces_inner_content() {
        let mut doc = Document::new(SHELL);
        assert!(doc.fill(Slot::Albums, &Html::trusted("<article>A</article>")));
        assert_eq!(doc.slot_content(Slot::Albums), Some("<article>A</article>"));
        assert!(!doc.as_str().contains("Loading"));
    }

    #[test]
    fn test_fill_handles_nested_same_tag() {
        let doc = Document::new(r#"<div data-content="bio"><div><div>a</div></div>b</div><div>after</div>"#);
        assert_eq!(doc.slot_content(Slot::Bio), Some("<div><div>a</div></div>b"));
    }

    #[test]
    fn test_missing_container_is_skipped() {
        let mut doc = Document::new(SHELL);
        assert!(!doc.has_slot(Slot::Beats));
        assert!(!doc.fill(Slot::Beats, &Html::trusted("<p>x</p>")));
        assert_eq!(doc.as_str(), SHELL);
    }

    #[test]
    fn test_id_lookup_ignores_data_id() {
        let mut doc = Document::new(r#"<p data-id="copyright-year">no</p><span id="copyright-year">1999</span>"#);
        assert!(doc.set_text_by_id("copyright-year", "2026"));
        assert_eq!(
            doc.as_str(),
            r#"<p data-id="copyright-year">no</p><span id="copyright-year">2026</span>"#
        );
    }

    #[test]
    fn test_single_quoted_markers() {
        let mut doc = Document::new("<div data-content='bio'>old</div><span id='copyright-year'>1999</span>");
        assert!(doc.fill(Slot::Bio, &Html::trusted("<p>new</p>")));
        assert!(doc.set_text_by_id("copyright-year", "2026"));
        assert_eq!(
            doc.as_str(),
            "<div data-content='bio'><p>new</p></div><span id='copyright-year'>2026</span>"
        );
    }

    #[test]
    fn test_earliest_marker_wins_across_quote_styles() {
        let doc = Document::new(r#"<p data-content='bio'>first</p><p data-content="bio">second</p>"#);
        assert_eq!(doc.slot_content(Slot::Bio), Some("first"));
    }

    #[test]
    fn test_div_does_not_match_divider() {
        let doc = Document::new(r#"<div data-content="bio"><divider></divider>x</div>"#);
        assert_eq!(doc.slot_content(Slot::Bio), Some("<divider></divider>x"));
    }

    #[test]
    fn test_fill_section_after_other_slot() {
        let mut doc = Document::new(SHELL);
        assert!(doc.fill(Slot::Singles, &Html::trusted("S")));
        assert_eq!(doc.slot_content(Slot::Singles), Some("S"));
        assert!(doc.has_id("footer-placeholder"));
    }
}
