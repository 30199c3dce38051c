//! Unicode emoji sequence recognition.
//!
//! All known encodings are compiled into one alternation, longest first, so
//! that a ZWJ sequence wins over the single emoji it starts with. A trailing
//! skin-tone modifier is captured separately.

use std::collections::HashMap;

use emojify_catalog::{Catalog, SkinTone};
use emojify_common::EmojiResult;
use regex::{Captures, Regex, RegexBuilder};

use crate::render::{Glyph, Modifier, Renderer};
use crate::scan::try_replace_all;
use crate::variation;

const PATTERN_SIZE_LIMIT: usize = 64 << 20;

/// What an encoding stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Target {
    Entry(String),
    Variation { base: String, tone: SkinTone },
}

/// Matcher over every unified encoding in the catalog.
#[derive(Debug, Clone)]
pub struct UnifiedIndex {
    pattern: Option<Regex>,
    targets: HashMap<String, Target>,
}

impl UnifiedIndex {
    /// Build the matcher from every entry and variation encoding.
    pub fn build(catalog: &Catalog) -> EmojiResult<Self> {
        let mut targets = HashMap::new();
        for entry in catalog.entries() {
            for form in &entry.unified {
                targets
                    .entry(form.clone())
                    .or_insert_with(|| Target::Entry(entry.idx.clone()));
            }
        }
        for var in catalog.variations() {
            for form in &var.unified {
                targets.entry(form.clone()).or_insert_with(|| Target::Variation {
                    base: var.base.clone(),
                    tone: var.tone,
                });
            }
        }

        let pattern = if targets.is_empty() {
            None
        } else {
            let mut forms: Vec<&str> = targets.keys().map(String::as_str).collect();
            forms.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
            let alternation = forms
                .iter()
                .map(|form| regex::escape(form))
                .collect::<Vec<_>>()
                .join("|");
            Some(
                RegexBuilder::new(&format!("({alternation})([\u{1F3FB}-\u{1F3FF}])?"))
                    .size_limit(PATTERN_SIZE_LIMIT)
                    .build()?,
            )
        };

        tracing::debug!(forms = targets.len(), "Built unified index");
        Ok(Self { pattern, targets })
    }

    /// Replace known sequences in `text` with rendered emoji.
    pub(crate) fn replace(
        &self,
        text: &str,
        catalog: &Catalog,
        renderer: &Renderer<'_>,
    ) -> EmojiResult<String> {
        match &self.pattern {
            Some(pattern) => {
                try_replace_all(pattern, text, |caps| self.replace_match(caps, catalog, renderer))
            }
            None => Ok(text.to_string()),
        }
    }

    #[allow(clippy::unwrap_used)] // Capture groups 0 and 1 always participate
    fn replace_match(
        &self,
        caps: &Captures<'_>,
        catalog: &Catalog,
        renderer: &Renderer<'_>,
    ) -> EmojiResult<String> {
        let whole = caps.get(0).unwrap().as_str();
        let form = caps.get(1).unwrap().as_str();
        let trailing = caps.get(2).map(|m| m.as_str());

        let Some(target) = self.targets.get(form) else {
            return Ok(whole.to_string());
        };

        let (entry_idx, tone, tone_actual) = match target {
            Target::Entry(idx) => {
                let tone = trailing.and_then(|t| t.chars().next()).and_then(SkinTone::from_char);
                (idx.as_str(), tone, trailing)
            }
            Target::Variation { base, tone } => (base.as_str(), Some(*tone), None),
        };
        let Some(entry) = catalog.entry(entry_idx) else {
            return Ok(whole.to_string());
        };

        let mut glyph = Glyph::new(entry);
        let mut leftover = match target {
            Target::Variation { .. } => trailing,
            Target::Entry(_) => None,
        };
        if let Some(tone) = tone {
            match catalog.entry(tone.idx()) {
                Some(tone_entry) => {
                    glyph = glyph.with_modifier(Modifier {
                        variation: variation::resolve(catalog, entry_idx, tone),
                        entry: tone_entry,
                        actual: tone_actual,
                        wrapper: "",
                    });
                }
                None if tone_actual.is_some() => leftover = tone_actual,
                None => {}
            }
        }

        let mut out = renderer.render(&glyph)?;
        // A second modifier after an already toned sequence stands on its own.
        if let Some(extra) = leftover {
            let standalone = extra
                .chars()
                .next()
                .and_then(SkinTone::from_char)
                .and_then(|t| catalog.entry(t.idx()));
            match standalone {
                Some(tone_entry) => out.push_str(&renderer.render(&Glyph::new(tone_entry))?),
                None => out.push_str(extra),
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn index() -> UnifiedIndex {
        UnifiedIndex::build(&Catalog::bundled().unwrap()).unwrap()
    }

    fn first_match(text: &str) -> (String, Option<String>) {
        let index = index();
        let caps = index.pattern.as_ref().unwrap().captures(text).unwrap();
        (
            caps[1].to_string(),
            caps.get(2).map(|m| m.as_str().to_string()),
        )
    }

    #[test]
    fn test_longest_sequence_wins() {
        let family = "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F466}";
        assert_eq!(first_match(family).0, family);
    }

    #[test]
    fn test_trailing_tone_captured() {
        // the append-style variation is itself a known encoding
        let (form, tone) = first_match("\u{1F44D}\u{1F3FB}");
        assert_eq!(form, "\u{1F44D}\u{1F3FB}");
        assert_eq!(tone, None);

        // the zap has no variations, so the tone is a separate capture
        let (form, tone) = first_match("\u{26A1}\u{FE0F}\u{1F3FC}");
        assert_eq!(form, "\u{26A1}\u{FE0F}");
        assert_eq!(tone.as_deref(), Some("\u{1F3FC}"));
    }

    #[test]
    fn test_targets() {
        let index = index();
        assert_eq!(
            index.targets.get("\u{1F44D}"),
            Some(&Target::Entry("1f44d".to_string()))
        );
        assert_eq!(
            index.targets.get("\u{1F646}\u{1F3FE}\u{200D}\u{2640}\u{FE0F}"),
            Some(&Target::Variation {
                base: "1f646-200d-2640-fe0f".to_string(),
                tone: SkinTone::Tone5
            })
        );
        assert_eq!(
            index.targets.get("\u{1F46A}"),
            Some(&Target::Entry("1f468-200d-1f469-200d-1f466".to_string()))
        );
    }

    #[test]
    fn test_shared_encoding_goes_to_first_base() {
        let json = r#"{
            "emoji": [
                {"idx": "1f600", "unified": ["1F600"], "short_names": ["a"], "sheet_x": 0, "sheet_y": 0, "mask": 1},
                {"idx": "1f601", "unified": ["1F601"], "short_names": ["b"], "sheet_x": 0, "sheet_y": 1, "mask": 1}
            ],
            "variations": {
                "1f601": {"1f3fb": {"idx": "1f601-1f3fb", "unified": ["1F600-1F3FB"], "sheet_x": 1, "sheet_y": 1, "mask": 1}},
                "1f600": {"1f3fb": {"idx": "1f600-1f3fb", "unified": ["1F600-1F3FB"], "sheet_x": 1, "sheet_y": 0, "mask": 1}}
            }
        }"#;
        let catalog = Catalog::from_json(json).unwrap();
        for _ in 0..8 {
            let index = UnifiedIndex::build(&catalog).unwrap();
            assert_eq!(
                index.targets.get("\u{1F600}\u{1F3FB}"),
                Some(&Target::Variation {
                    base: "1f600".to_string(),
                    tone: SkinTone::Tone2
                })
            );
        }
    }

    #[test]
    fn test_keycap_is_escaped() {
        let (form, _) = first_match("press #\u{FE0F}\u{20E3} now");
        assert_eq!(form, "#\u{FE0F}\u{20E3}");
    }

    #[test]
    fn test_empty_catalog_has_no_pattern() {
        let catalog = Catalog::from_json(r#"{"emoji": []}"#).unwrap();
        assert!(UnifiedIndex::build(&catalog).unwrap().pattern.is_none());
    }
}
