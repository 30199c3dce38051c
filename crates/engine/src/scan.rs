//! Fallible regex replacement.

use emojify_common::EmojiResult;
use regex::{Captures, Regex};

/// Like [`Regex::replace_all`], but the replacement may fail and abort the scan.
pub(crate) fn try_replace_all<F>(re: &Regex, text: &str, mut replace: F) -> EmojiResult<String>
where
    F: FnMut(&Captures<'_>) -> EmojiResult<String>,
{
    let mut out = String::with_capacity(text.len());
    let mut pos = 0;

    for caps in re.captures_iter(text) {
        let Some(m) = caps.get(0) else { continue };
        out.push_str(&text[pos..m.start()]);
        out.push_str(&replace(&caps)?);
        pos = m.end();
    }

    out.push_str(&text[pos..]);
    Ok(out)
}
