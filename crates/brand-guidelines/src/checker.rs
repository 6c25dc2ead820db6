/// Rule-matching engine for the editorial style guide.
///
/// The checker is pure given (content, rule set): no I/O, no mutation of the
/// rules, deterministic violations for identical input. Regex patterns are
/// compiled once when the checker is built; a pattern that fails to compile
/// is skipped with a warning log so a misconfigured rule degrades to one
/// fewer scan instead of failing the whole check.
use regex::{Regex, RegexBuilder};
use tracing::warn;

use crate::model::{CheckReport, SectionContent, Severity, Violation};
use crate::ruleset::RuleSet;

const RULE_BRAND: &str = "Brand Terminology";
const RULE_INCLUSIVE: &str = "Inclusive Language";
const RULE_PUNCTUATION: &str = "Punctuation";
const RULE_ABBREVIATIONS: &str = "Abbreviations";
const RULE_NUMBERS: &str = "Numbers";
const RULE_GLOSSARY: &str = "Glossary";
const RULE_TONE: &str = "Tone";

struct CompiledPattern {
    regex: Regex,
    issue: String,
    suggestion: String,
}

struct CompiledCorrection {
    regex: Regex,
    replacement: String,
}

struct CompiledHyphenation {
    regex: Regex,
    unhyphenated: String,
    hyphenated: String,
}

pub struct Checker {
    rules: RuleSet,
    punctuation: Vec<CompiledPattern>,
    overclaims: Vec<CompiledPattern>,
    numbers: Vec<CompiledPattern>,
    abbreviations: Vec<CompiledCorrection>,
    hyphenations: Vec<CompiledHyphenation>,
}

impl Checker {
    pub fn new(rules: RuleSet) -> Self {
        let punctuation = compile_patterns(&rules.punctuation.violation_patterns, false);
        let overclaims = compile_patterns(&rules.tone.avoid_patterns, true);
        let numbers = compile_patterns(&rules.numbers.incorrect_patterns, true);

        let abbreviations = rules
            .abbreviations
            .corrections
            .iter()
            .filter_map(|c| {
                compile(&c.pattern, false).map(|regex| CompiledCorrection {
                    regex,
                    replacement: c.replacement.clone(),
                })
            })
            .collect();

        let hyphenations = rules
            .punctuation
            .hyphenations
            .iter()
            .filter_map(|h| {
                let pattern = format!(r"\b{}\b", regex::escape(&h.unhyphenated));
                compile(&pattern, true).map(|regex| CompiledHyphenation {
                    regex,
                    unhyphenated: h.unhyphenated.clone(),
                    hyphenated: h.hyphenated.clone(),
                })
            })
            .collect();

        Self {
            rules,
            punctuation,
            overclaims,
            numbers,
            abbreviations,
            hyphenations,
        }
    }

    /// Build a checker over the bundled style guide.
    pub fn with_builtin_rules() -> Self {
        Self::new(RuleSet::builtin())
    }

    /// Check one typed newsletter section.
    pub fn check_section(&self, section: &SectionContent) -> CheckReport {
        self.check_text(&section.text_fields().join(" "))
    }

    /// Check an arbitrary JSON content object by collecting its string
    /// leaves into one evaluation buffer. Non-string leaves are skipped.
    pub fn check_json(&self, content: &serde_json::Value) -> CheckReport {
        let mut fields = Vec::new();
        collect_text_leaves(content, &mut fields);
        self.check_text(&fields.join(" "))
    }

    /// Check a block of text against every configured scan.
    pub fn check_text(&self, text: &str) -> CheckReport {
        let lower = text.to_lowercase();
        let mut issues = Vec::new();
        let mut warnings = Vec::new();

        // Forbidden brand terms: one error per term found, with the
        // preferred replacement when the substitution map has one.
        for term in &self.rules.brand.forbidden_terms {
            if lower.contains(&term.to_lowercase()) {
                let suggestion = match self.rules.brand.preferred_terms.get(term) {
                    Some(preferred) => format!("Use '{preferred}' instead"),
                    None => "Use approved terminology instead".to_string(),
                };
                issues.push(Violation {
                    severity: Severity::Error,
                    rule: RULE_BRAND.to_string(),
                    issue: format!("Forbidden term found: '{term}'"),
                    suggestion,
                });
            }
        }

        // Incorrectly formatted references to the canonical site.
        for bad in &self.rules.brand.website.forbidden {
            if lower.contains(&bad.to_lowercase()) {
                issues.push(Violation {
                    severity: Severity::Error,
                    rule: RULE_BRAND.to_string(),
                    issue: format!("Incorrect website reference: '{bad}'"),
                    suggestion: format!("Use {}", self.rules.brand.website.canonical),
                });
            }
        }

        // Required hyphenations. The violation fires only when the
        // hyphenated form is absent, so mixed usage is still flagged once
        // the correct spelling disappears entirely.
        for h in &self.hyphenations {
            if h.regex.is_match(text) && !lower.contains(&h.hyphenated.to_lowercase()) {
                issues.push(Violation {
                    severity: Severity::Error,
                    rule: RULE_PUNCTUATION.to_string(),
                    issue: format!("'{}' should be hyphenated", h.unhyphenated),
                    suggestion: format!("Use '{}'", h.hyphenated),
                });
            }
        }

        // Gendered language: stylistic, so warnings only.
        for term in &self.rules.tone.gendered_terms {
            if lower.contains(&term.to_lowercase()) {
                let suggestion = match self.rules.tone.corrections.get(term) {
                    Some(neutral) => format!("Consider using: {neutral}"),
                    None => "Use gender-neutral language".to_string(),
                };
                warnings.push(Violation {
                    severity: Severity::Warning,
                    rule: RULE_INCLUSIVE.to_string(),
                    issue: format!("Gendered term found: '{term}'"),
                    suggestion,
                });
            }
        }

        scan_patterns(&self.punctuation, text, RULE_PUNCTUATION, &mut warnings);
        scan_patterns(&self.overclaims, text, RULE_TONE, &mut warnings);
        scan_patterns(&self.numbers, text, RULE_NUMBERS, &mut warnings);

        for c in &self.abbreviations {
            if let Some(found) = c.regex.find(text) {
                warnings.push(Violation {
                    severity: Severity::Warning,
                    rule: RULE_ABBREVIATIONS.to_string(),
                    issue: format!("Abbreviation with periods: '{}'", found.as_str()),
                    suggestion: format!("Use '{}'", c.replacement),
                });
            }
        }

        for (preferred, variants) in &self.rules.glossary.correct_terms {
            for variant in variants {
                if lower.contains(&variant.to_lowercase()) {
                    warnings.push(Violation {
                        severity: Severity::Warning,
                        rule: RULE_GLOSSARY.to_string(),
                        issue: format!("Non-glossary spelling: '{variant}'"),
                        suggestion: format!("Use '{preferred}'"),
                    });
                    break;
                }
            }
        }

        CheckReport::new(issues, warnings)
    }
}

fn compile(pattern: &str, case_insensitive: bool) -> Option<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(case_insensitive)
        .build()
        .inspect_err(|e| warn!(error = %e, pattern, "invalid rule pattern, skipping"))
        .ok()
}

fn compile_patterns(
    patterns: &[crate::ruleset::PatternRule],
    case_insensitive: bool,
) -> Vec<CompiledPattern> {
    patterns
        .iter()
        .filter_map(|p| {
            compile(&p.pattern, case_insensitive).map(|regex| CompiledPattern {
                regex,
                issue: p.issue.clone(),
                suggestion: p.suggestion.clone(),
            })
        })
        .collect()
}

/// One warning per matched pattern (not per occurrence), quoting the first
/// offending substring.
fn scan_patterns(
    patterns: &[CompiledPattern],
    text: &str,
    rule: &str,
    warnings: &mut Vec<Violation>,
) {
    for p in patterns {
        if let Some(found) = p.regex.find(text) {
            let issue = if p.issue.is_empty() {
                format!("Pattern violation: '{}'", found.as_str())
            } else {
                format!("{}: '{}'", p.issue, found.as_str())
            };
            warnings.push(Violation {
                severity: Severity::Warning,
                rule: rule.to_string(),
                issue,
                suggestion: p.suggestion.clone(),
            });
        }
    }
}

fn collect_text_leaves<'a>(value: &'a serde_json::Value, out: &mut Vec<&'a str>) {
    match value {
        serde_json::Value::String(s) => out.push(s),
        serde_json::Value::Array(items) => {
            for item in items {
                collect_text_leaves(item, out);
            }
        }
        serde_json::Value::Object(map) => {
            for item in map.values() {
                collect_text_leaves(item, out);
            }
        }
        _ => {}
    }
}
