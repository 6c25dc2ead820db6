/// Serde data model for the editorial style guide.
///
/// The rule set is configuration, not code: it is loaded once from a JSON
/// file (or the bundled default transcribed from the BriteCo editorial style
/// guide) and treated as read-only during checking. Every category is
/// optional — a rules file that omits a category simply produces a checker
/// that runs fewer scans.
use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::GuidelineError;

const BUILTIN_RULES: &str = include_str!("../rules/brand_guidelines.json");

/// A regex-backed violation pattern with its report text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternRule {
    pub pattern: String,
    pub issue: String,
    pub suggestion: String,
}

/// A regex-backed correction (pattern that should be replaced verbatim).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CorrectionRule {
    pub pattern: String,
    pub replacement: String,
}

/// A compound term that must always be hyphenated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HyphenationRule {
    pub unhyphenated: String,
    pub hyphenated: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WebsiteRule {
    /// Incorrectly formatted references to the canonical site
    pub forbidden: Vec<String>,
    /// Approved way to reference the site, used as the suggestion
    pub canonical: String,
}

/// Brand-identity rules. Violations here are errors and gate publication.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandRules {
    pub rules: Vec<String>,
    pub forbidden_terms: Vec<String>,
    /// wrong term -> preferred replacement
    pub preferred_terms: BTreeMap<String, String>,
    pub website: WebsiteRule,
}

/// Tone rules: inclusive language and promissory-claim patterns. Stylistic,
/// so violations are warnings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ToneRules {
    pub rules: Vec<String>,
    pub gendered_terms: Vec<String>,
    /// gendered term -> neutral replacement
    pub corrections: BTreeMap<String, String>,
    pub avoid_patterns: Vec<PatternRule>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PunctuationRules {
    pub rules: Vec<String>,
    pub violation_patterns: Vec<PatternRule>,
    /// Required hyphenations; violations are errors
    pub hyphenations: Vec<HyphenationRule>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AbbreviationRules {
    pub rules: Vec<String>,
    pub corrections: Vec<CorrectionRule>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberRules {
    pub rules: Vec<String>,
    pub incorrect_patterns: Vec<PatternRule>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GlossaryRules {
    /// preferred term -> incorrect variants to flag
    pub correct_terms: BTreeMap<String, Vec<String>>,
}

/// Correct/incorrect example pairs, carried for documentation and editor
/// reference; they do not drive matching.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryExamples {
    pub correct: Vec<String>,
    pub incorrect: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSet {
    pub brand: BrandRules,
    pub tone: ToneRules,
    pub punctuation: PunctuationRules,
    pub abbreviations: AbbreviationRules,
    pub numbers: NumberRules,
    pub glossary: GlossaryRules,
    pub examples: BTreeMap<String, CategoryExamples>,
}

impl RuleSet {
    /// The bundled style guide rules.
    pub fn builtin() -> Self {
        serde_json::from_str(BUILTIN_RULES).expect("bundled rules parse")
    }

    /// Load a rule set from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, GuidelineError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| GuidelineError::RulesIo {
            path: path.display().to_string(),
            source: e,
        })?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_rules_parse() {
        let rules = RuleSet::builtin();
        assert!(rules.brand.forbidden_terms.contains(&"insurance company".to_string()));
        assert!(rules.tone.gendered_terms.contains(&"bride and groom".to_string()));
        assert!(!rules.punctuation.violation_patterns.is_empty());
        assert!(!rules.punctuation.hyphenations.is_empty());
    }

    #[test]
    fn test_partial_rules_file_fills_defaults() {
        let rules: RuleSet = serde_json::from_str(
            r#"{"brand": {"forbidden_terms": ["cheap venue"]}}"#,
        )
        .unwrap();
        assert_eq!(rules.brand.forbidden_terms, vec!["cheap venue".to_string()]);
        assert!(rules.tone.gendered_terms.is_empty());
        assert!(rules.glossary.correct_terms.is_empty());
    }
}
