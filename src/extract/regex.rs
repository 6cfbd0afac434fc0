use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use super::Extractor;
use crate::config::Extraction;
use crate::model::{Card, GradeRow, Report, Subject, GRADE_PLACEHOLDER};

// Blunt tag removal; deliberately not a parser. Attributes, malformed tags
// and nesting get no special handling.
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<.*?>").unwrap());

static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?s)<div class="top-year">(.*?)</div>"#).unwrap());

static SUBJECT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<div class="subject-btn">([^<]+)</div>"#).unwrap());

static CARD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"(?s)<div class="sub-box">\s*"#,
        r#"<div class="sub-title">(?P<title>[^<]+)</div>\s*"#,
        r#"<div class="sub-diff">(?P<diff>[^<]+)</div>\s*"#,
        r#"<div class="cut-area">(?P<cut>.*?)</div>"#,
    ))
    .unwrap()
});

static BR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").unwrap());

static GRADE_LABEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)등급\s*(.*)").unwrap());

pub struct RegexExtractor {
    normalize_unicode: bool,
}

impl RegexExtractor {
    pub fn new(cfg: &Extraction) -> Self {
        Self {
            normalize_unicode: cfg.normalize_unicode,
        }
    }

    /// Strip tags, trim, and optionally NFKC-normalize a captured fragment.
    fn clean(&self, fragment: &str) -> String {
        let stripped = TAG_RE.replace_all(fragment, "");
        let trimmed = stripped.trim();
        if self.normalize_unicode {
            trimmed.nfkc().collect()
        } else {
            trimmed.to_string()
        }
    }

    /// One cut-area line, "label: value". Lines that clean to empty or carry
    /// no colon contribute nothing.
    fn parse_grade_line(&self, line: &str) -> Option<GradeRow> {
        let line = self.clean(line);
        let (label, value) = line.split_once(':')?;
        let (label, value) = (label.trim(), value.trim());

        let row = match GRADE_LABEL_RE.captures(label) {
            Some(caps) => {
                let desc = caps[2].trim();
                GradeRow {
                    grade: caps[1].to_string(),
                    desc: if desc.is_empty() {
                        GRADE_PLACEHOLDER.to_string()
                    } else {
                        desc.to_string()
                    },
                    value: value.to_string(),
                }
            }
            // Labels without a leading digit group ("원점수") are kept whole;
            // the renderer substitutes the placeholder for the empty desc.
            None => GradeRow {
                grade: label.to_string(),
                desc: String::new(),
                value: value.to_string(),
            },
        };
        Some(row)
    }

    /// Everything up to and including the first colon is the "난이도:" label.
    fn difficulty(&self, fragment: &str) -> String {
        let text = self.clean(fragment);
        match text.split_once(':') {
            Some((_, rest)) => rest.trim().to_string(),
            None => text,
        }
    }

    fn cards_in(&self, scope: &str) -> Vec<Card> {
        let mut cards = Vec::new();
        for caps in CARD_RE.captures_iter(scope) {
            let grades: Vec<GradeRow> = BR_RE
                .split(&caps["cut"])
                .filter_map(|line| self.parse_grade_line(line))
                .collect();
            // Placeholder boxes with no usable rows are not retained.
            if grades.is_empty() {
                continue;
            }
            cards.push(Card {
                title: self.clean(&caps["title"]),
                difficulty: self.difficulty(&caps["diff"]),
                grades,
            });
        }
        cards
    }
}

impl Extractor for RegexExtractor {
    fn extract(&self, html: &str, fallback_heading: &str) -> Report {
        let heading = HEADING_RE
            .captures(html)
            .map(|caps| self.clean(&caps[1]))
            .unwrap_or_else(|| fallback_heading.to_string());

        // A subject's scope is the raw slice between its marker and the next
        // one (or end of document). Positional only; no containment checks.
        let markers: Vec<(String, usize, usize)> = SUBJECT_RE
            .captures_iter(html)
            .map(|caps| {
                let whole = caps.get(0).unwrap();
                (self.clean(&caps[1]), whole.start(), whole.end())
            })
            .collect();

        let mut subjects = Vec::new();
        for (idx, (name, _, scope_start)) in markers.iter().enumerate() {
            let scope_end = markers.get(idx + 1).map_or(html.len(), |next| next.1);
            let cards = self.cards_in(&html[*scope_start..scope_end]);
            if !cards.is_empty() {
                subjects.push(Subject {
                    name: name.clone(),
                    cards,
                });
            }
        }

        Report { heading, subjects }
    }
}
