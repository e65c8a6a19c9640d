//! Reveal-on-scroll registration
//!
//! Elements carrying `data-animate` are registered by adding the
//! `animate-on-scroll` class. Elements that already have the class are left
//! alone, so the pass can run again after more content is written and only
//! picks up the new elements.

use super::document::Document;

pub const REVEAL_MARKER: &str = "data-animate";
pub const REVEAL_CLASS: &str = "animate-on-scroll";

/// Register every unregistered reveal target; returns how many were new
pub fn register_reveal_targets(doc: &mut Document) -> usize {
    let html = doc.as_str();
    let mut out = String::with_capacity(html.len() + 256);
    let mut registered = 0;
    let mut cursor = 0;

    while let Some((start, end)) = next_marked_tag(html, cursor) {
        out.push_str(&html[cursor..start]);
        let tag = &html[start..end];
        match mark_tag(tag) {
            Some(marked) => {
                out.push_str(&marked);
                registered += 1;
            }
            None => out.push_str(tag),
        }
        cursor = end;
    }

    if registered > 0 {
        out.push_str(&html[cursor..]);
        doc.replace(out);
    }
    registered
}

/// Number of elements already registered
pub fn registered_count(doc: &Document) -> usize {
    let html = doc.as_str();
    let mut count = 0;
    let mut cursor = 0;
    while let Some((start, end)) = next_marked_tag(html, cursor) {
        if mark_tag(&html[start..end]).is_none() {
            count += 1;
        }
        cursor = end;
    }
    count
}

/// Bounds of the next opening tag at or after `from` that has the marker attribute
fn next_marked_tag(html: &str, from: usize) -> Option<(usize, usize)> {
    let mut search = from;
    loop {
        let pos = search + html[search..].find(REVEAL_MARKER)?;
        search = pos + REVEAL_MARKER.len();

        let before_ok = html[..pos]
            .chars()
            .next_back()
            .map_or(false, char::is_whitespace);
        let after_ok = matches!(
            html[search..].chars().next(),
            Some(' ' | '\t' | '\n' | '\r' | '>' | '/' | '=')
        );
        if !before_ok || !after_ok {
            continue;
        }

        let start = match html[..pos].rfind('<') {
            Some(start) if start >= from => start,
            _ => continue,
        };
        if html[start..pos].contains('>') {
            continue;
        }

        let end = pos + html[pos..].find('>')? + 1;
        return Some((start, end));
    }
}

/// Tag with the reveal class added, or `None` when it is already there
fn mark_tag(tag: &str) -> Option<String> {
    let mut marked = String::with_capacity(tag.len() + REVEAL_CLASS.len() + 10);

    match find_class(tag) {
        Some(ClassAttr::Value { start, end }) => {
            let value = &tag[start..end];
            if value.split_whitespace().any(|c| c == REVEAL_CLASS) {
                return None;
            }

            let separator = if value.trim().is_empty() { "" } else { " " };
            let quoted = matches!(tag.as_bytes()[start - 1], b'"' | b'\'');
            if quoted {
                marked.push_str(&tag[..end]);
                marked.push_str(separator);
                marked.push_str(REVEAL_CLASS);
                marked.push_str(&tag[end..]);
            } else {
                // Unquoted values cannot hold a second class
                marked.push_str(&tag[..start]);
                marked.push('"');
                marked.push_str(value);
                marked.push_str(separator);
                marked.push_str(REVEAL_CLASS);
                marked.push('"');
                marked.push_str(&tag[end..]);
            }
        }
        Some(ClassAttr::Bare(at)) => {
            marked.push_str(&tag[..at]);
            marked.push_str(&format!(r#"="{}""#, REVEAL_CLASS));
            marked.push_str(&tag[at..]);
        }
        None => {
            let name_end = 1 + tag[1..]
                .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-'))
                .unwrap_or(tag.len() - 1);
            marked.push_str(&tag[..name_end]);
            marked.push_str(&format!(r#" class="{}""#, REVEAL_CLASS));
            marked.push_str(&tag[name_end..]);
        }
    }
    Some(marked)
}

/// Where the `class` attribute sits inside an opening tag
enum ClassAttr {
    /// `class` with no value; offset just past the name
    Bare(usize),
    /// Byte range of the value, quotes excluded
    Value { start: usize, end: usize },
}

/// Scan the attributes of an opening tag for `class`, in any quoting style
fn find_class(tag: &str) -> Option<ClassAttr> {
    let bytes = tag.as_bytes();
    let len = bytes.len();
    let is_space = |b: u8| b.is_ascii_whitespace();

    let mut i = 1;
    while i < len && !is_space(bytes[i]) && !matches!(bytes[i], b'>' | b'/') {
        i += 1;
    }

    loop {
        while i < len && (is_space(bytes[i]) || bytes[i] == b'/') {
            i += 1;
        }
        if i >= len || bytes[i] == b'>' {
            return None;
        }

        let name_start = i;
        while i < len && !is_space(bytes[i]) && !matches!(bytes[i], b'=' | b'>' | b'/') {
            i += 1;
        }
        let is_class = tag[name_start..i].eq_ignore_ascii_case("class");
        let name_end = i;

        let mut j = i;
        while j < len && is_space(bytes[j]) {
            j += 1;
        }
        if j >= len || bytes[j] != b'=' {
            if is_class {
                return Some(ClassAttr::Bare(name_end));
            }
            continue;
        }

        j += 1;
        while j < len && is_space(bytes[j]) {
            j += 1;
        }
        let (start, end, next) = match bytes.get(j) {
            Some(&quote) if quote == b'"' || quote == b'\'' => {
                let start = j + 1;
                let end = start + tag[start..].find(quote as char)?;
                (start, end, end + 1)
            }
            _ => {
                let mut end = j;
                while end < len && !is_space(bytes[end]) && bytes[end] != b'>' {
                    end += 1;
                }
                (j, end, end)
            }
        };

        if is_class {
            return Some(ClassAttr::Value { start, end });
        }
        i = next;
    }
}
