//! ASCII emoticon recognition.
//!
//! Emoticons must stand alone: preceded by the start of text or whitespace,
//! and followed by the end of text, whitespace or one of `| ? . , !`.
//! Two extra rules cut false positives. An emoticon closing a paren is
//! skipped when an unclosed `(` precedes it since the last match, and is
//! only picked up afterwards if a full parenthetical surrounds it. `8)` at
//! the start of a line is skipped once the text has shown `6)` or `7)`,
//! since that is a numbered list.

use std::collections::HashMap;

use emojify_catalog::Catalog;
use emojify_common::EmojiResult;
use regex::Regex;

/// Matcher over the catalog's emoticon table.
#[derive(Debug, Clone)]
pub struct EmoticonIndex {
    pattern: Option<Regex>,
    names: HashMap<String, String>,
}

impl EmoticonIndex {
    /// Build the matcher. With `html_escaped`, emoticons are matched in their
    /// entity-escaped form (`&lt;3`).
    pub fn build(catalog: &Catalog, html_escaped: bool) -> EmojiResult<Self> {
        let names: HashMap<String, String> = catalog
            .emoticons()
            .iter()
            .map(|(emoticon, name)| {
                let key = if html_escaped {
                    escape_entities(emoticon)
                } else {
                    emoticon.clone()
                };
                (key, name.clone())
            })
            .collect();

        let pattern = if names.is_empty() {
            None
        } else {
            let alternation = longest_first_alternation(names.keys());
            Some(Regex::new(&format!(
                r"(^|\s)({alternation})(?:$|[\s|?.,!])"
            ))?)
        };

        tracing::debug!(emoticons = names.len(), "Built emoticon index");
        Ok(Self { pattern, names })
    }

    /// Replace emoticons with `:name:` text.
    ///
    /// `canonical` maps a table short name to the canonical short name of the
    /// emoji it currently resolves to; emoticons it rejects are left as is.
    pub fn replace_with_colons<F>(&self, text: &str, canonical: F) -> String
    where
        F: Fn(&str) -> Option<String>,
    {
        let Some(pattern) = &self.pattern else {
            return text.to_string();
        };
        let colon_name = |emoticon: &str| {
            self.names
                .get(emoticon)
                .and_then(|name| canonical(name))
        };

        let mut out = String::with_capacity(text.len());
        let mut copied = 0;
        let mut search_from = 0;
        let mut prev_end = 0;
        let mut with_parens: Vec<&str> = Vec::new();

        while let Some(caps) = pattern.captures_at(text, search_from) {
            let (Some(lead), Some(emo)) = (caps.get(1), caps.get(2)) else {
                break;
            };
            let (start, end) = (lead.start(), emo.end());
            let emoticon = emo.as_str();
            let since_prev = &text[prev_end..start];
            prev_end = end;
            search_from = end;

            let has_open = emoticon.contains('(');
            let has_close = emoticon.contains(')');
            if (has_open || has_close) && !with_parens.contains(&emoticon) {
                with_parens.push(emoticon);
            }

            if has_close && !has_open && since_prev.contains('(') && !since_prev.contains(')') {
                continue;
            }

            if &text[start..end] == "\n8)" {
                let before = &text[..start];
                if before.contains("6)") || before.contains("7)") {
                    continue;
                }
            }

            let Some(name) = colon_name(emoticon) else {
                continue;
            };
            out.push_str(&text[copied..start]);
            out.push_str(lead.as_str());
            out.push(':');
            out.push_str(&name);
            out.push(':');
            copied = end;
        }
        out.push_str(&text[copied..]);

        if with_parens.is_empty() {
            return out;
        }

        // Second pass: emoticons inside a complete parenthetical.
        let alternation = longest_first_alternation(with_parens.iter().copied());
        let parenthetical = match Regex::new(&format!(r"(\(.+)({alternation})(.+\))")) {
            Ok(re) => re,
            Err(err) => {
                tracing::warn!(error = %err, "Failed to build parenthetical emoticon pattern");
                return out;
            }
        };
        parenthetical
            .replace_all(&out, |caps: &regex::Captures<'_>| {
                colon_name(&caps[2]).map_or_else(
                    || caps[0].to_string(),
                    |name| format!("{}:{name}:{}", &caps[1], &caps[3]),
                )
            })
            .into_owned()
    }
}

/// Regex alternation of literals, longest first.
fn longest_first_alternation<I, S>(literals: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut literals: Vec<String> = literals
        .into_iter()
        .map(|s| s.as_ref().to_string())
        .collect();
    literals.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    literals
        .iter()
        .map(|s| regex::escape(s))
        .collect::<Vec<_>>()
        .join("|")
}

fn escape_entities(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
