// src/core/html.rs
//
// Tolerant tag scanning for the two page shapes we read. No DOM: we find
// `<tag …>…</tag>` blocks case-insensitively and slice between them.

pub fn to_lower(s: &str) -> String {
    // ASCII-only lowering keeps byte offsets aligned with the original text.
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// All `<tag …>…</tag>` blocks in `s`, in document order. Not nesting-aware:
/// a block ends at the first matching close tag, and scanning resumes after it.
pub fn tag_blocks<'a>(s: &'a str, tag: &str) -> Vec<&'a str> {
    scan_blocks(s, tag, false)
}

/// Like `tag_blocks`, but every opening tag starts a block, including ones
/// inside an earlier block. For lookups by class / id.
fn every_block<'a>(s: &'a str, tag: &str) -> Vec<&'a str> {
    scan_blocks(s, tag, true)
}

fn scan_blocks<'a>(s: &'a str, tag: &str, overlapping: bool) -> Vec<&'a str> {
    let lc = to_lower(s);
    let open = format!("<{}", to_lower(tag));
    let close = format!("</{}>", to_lower(tag));
    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some(rel) = lc[pos..].find(&open) {
        let start = pos + rel;
        let after = start + open.len();
        // `<tr` must not match `<track`
        match lc.as_bytes().get(after) {
            Some(b) if b.is_ascii_whitespace() || *b == b'>' || *b == b'/' => {}
            _ => {
                pos = after;
                continue;
            }
        }
        let Some(end_rel) = lc[after..].find(&close) else { break };
        let end = after + end_rel + close.len();
        out.push(&s[start..end]);
        pos = if overlapping { after } else { end };
    }
    out
}

/// `<table … id="wanted" …>…</table>` by id attribute.
pub fn table_by_id<'a>(doc: &'a str, id: &str) -> Option<&'a str> {
    every_block(doc, "table")
        .into_iter()
        .find(|t| attr(opener(t), "id").as_deref() == Some(id))
}

/// Text of the first element whose opener has `class` containing `class_name`.
pub fn text_of_class(doc: &str, tag: &str, class_name: &str) -> Option<String> {
    every_block(doc, tag)
        .into_iter()
        .find(|b| has_class(b, class_name))
        .map(|b| strip_tags(inner_after_open_tag(b)))
        .filter(|t| !t.is_empty())
}

/// The opening tag of a block (`<td class="x">`), without its content.
pub fn opener(block: &str) -> &str {
    let end = block.find('>').map(|i| i + 1).unwrap_or(block.len());
    &block[..end]
}

/// Attribute value from an opening tag. Handles "", '' and unquoted values.
pub fn attr(opener: &str, name: &str) -> Option<String> {
    let lc = to_lower(opener);
    let needle = format!("{}=", to_lower(name));
    let mut search = 0usize;
    while let Some(rel) = lc[search..].find(&needle) {
        let at = search + rel;
        // Must be a whole attribute name (`data-id=` must not match `id=`).
        let boundary = at == 0 || lc.as_bytes()[at - 1].is_ascii_whitespace();
        if !boundary {
            search = at + needle.len();
            continue;
        }
        let val = &opener[at + needle.len()..];
        let (quote, start_off) = match val.as_bytes().first() {
            Some(b'"') => (Some('"'), 1),
            Some(b'\'') => (Some('\''), 1),
            _ => (None, 0),
        };
        let end = match quote {
            Some(q) => val[start_off..].find(q).map(|e| start_off + e).unwrap_or(val.len()),
            None => val
                .find(|c: char| c.is_ascii_whitespace() || c == '>')
                .unwrap_or(val.len()),
        };
        return Some(val[start_off..end].to_string());
    }
    None
}

pub fn has_class(block: &str, class_name: &str) -> bool {
    attr(opener(block), "class")
        .map(|c| c.split_ascii_whitespace().any(|k| k.eq_ignore_ascii_case(class_name)))
        .unwrap_or(false)
}

pub fn inner_after_open_tag(block: &str) -> &str {
    if let Some(oe) = block.find('>') {
        if let Some(cs) = block.rfind('<') {
            if cs > oe {
                return &block[oe + 1..cs];
            }
        }
    }
    ""
}

/// Drop tags, decode the common entities, collapse whitespace.
pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    super::sanitize::normalize_ws(&super::sanitize::normalize_entities(&out))
}

/// Escape text for safe interpolation into HTML (content and quoted attributes).
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attr_variants() {
        let o = r#"<td class="time" data-t='2025-01-05 15:00:00' id=tr1_55>"#;
        assert_eq!(attr(o, "class").as_deref(), Some("time"));
        assert_eq!(attr(o, "data-t").as_deref(), Some("2025-01-05 15:00:00"));
        assert_eq!(attr(o, "id").as_deref(), Some("tr1_55"));
        assert_eq!(attr(o, "href"), None);
    }

    #[test]
    fn attr_does_not_match_suffix_names() {
        let o = r#"<tr data-id="9" id="tr1_1">"#;
        assert_eq!(attr(o, "id").as_deref(), Some("tr1_1"));
    }

    #[test]
    fn class_lookup_and_text() {
        let doc = r#"<div><span class="x home-name">Celta&nbsp;Vigo</span><span class="away-name"> <b>Betis</b> </span></div>"#;
        assert_eq!(text_of_class(doc, "span", "home-name").as_deref(), Some("Celta Vigo"));
        assert_eq!(text_of_class(doc, "span", "away-name").as_deref(), Some("Betis"));
        assert_eq!(text_of_class(doc, "span", "missing"), None);
    }

    #[test]
    fn table_lookup_is_case_insensitive() {
        let doc = r#"<TABLE id="a"><tr><td>1</td></tr></TABLE><table id="table_v2"><tr><td>2</td></tr></table>"#;
        let t = table_by_id(doc, "table_v2").unwrap();
        assert!(t.contains("<td>2</td>"));
        assert!(table_by_id(doc, "table_v9").is_none());
    }

    #[test]
    fn blocks_respect_tag_boundaries() {
        let doc = "<tr id=a><td>1</td></tr><track></track><TR><td>2</td></TR>";
        let rows = tag_blocks(doc, "tr");
        assert_eq!(rows.len(), 2);
        assert_eq!(strip_tags(rows[1]), "2");
    }

    #[test]
    fn class_lookup_sees_nested_elements() {
        let doc = r#"<div class="header"><b>x</b><div class="final-score">2-2</div></div>"#;
        assert_eq!(text_of_class(doc, "div", "final-score").as_deref(), Some("2-2"));
    }

    #[test]
    fn escape() {
        assert_eq!(escape_html(r#"<a href="x">R&B's</a>"#), "&lt;a href=&quot;x&quot;&gt;R&amp;B&#39;s&lt;/a&gt;");
    }
}
