use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Two-tier severity: errors are brand-identity-breaking and gate
/// publication; warnings are style preferences surfaced for human judgment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// A single detected breach of a guideline rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Violation {
    pub severity: Severity,
    /// Human-readable rule name, e.g. "Brand Terminology", "Inclusive Language"
    pub rule: String,
    /// What was found, with the offending substring when applicable
    pub issue: String,
    /// Corrective text
    pub suggestion: String,
}

/// Aggregated check result for one piece of content. Warnings never affect
/// `passed`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckReport {
    pub passed: bool,
    pub total_issues: usize,
    pub total_warnings: usize,
    pub issues: Vec<Violation>,
    pub warnings: Vec<Violation>,
    pub checked_at: DateTime<Utc>,
}

impl CheckReport {
    pub fn new(issues: Vec<Violation>, warnings: Vec<Violation>) -> Self {
        Self {
            passed: issues.is_empty(),
            total_issues: issues.len(),
            total_warnings: warnings.len(),
            issues,
            warnings,
            checked_at: Utc::now(),
        }
    }
}

/// One newsletter section, discriminated by `section_type`.
///
/// Each variant carries the fixed field set of its section kind, replacing
/// the ad hoc payloads the drafting services emit with a schema the checker
/// and the editorial UI can rely on. Fields default to empty so partially
/// drafted sections still check.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "section_type", rename_all = "snake_case")]
pub enum SectionContent {
    News {
        #[serde(default)]
        title: String,
        #[serde(default)]
        short_version: String,
        #[serde(default)]
        whats_happening: String,
        #[serde(default)]
        why_it_matters: String,
    },
    Tip {
        #[serde(default)]
        title: String,
        #[serde(default)]
        subtitle: String,
        #[serde(default)]
        content: String,
        #[serde(default)]
        cta: String,
    },
    Trend {
        #[serde(default)]
        title: String,
        #[serde(default)]
        subtitle: String,
        #[serde(default)]
        content: String,
        #[serde(default)]
        cta: String,
    },
}

impl SectionContent {
    pub fn kind(&self) -> &'static str {
        match self {
            SectionContent::News { .. } => "news",
            SectionContent::Tip { .. } => "tip",
            SectionContent::Trend { .. } => "trend",
        }
    }

    /// All text fields of the section, in display order.
    pub fn text_fields(&self) -> Vec<&str> {
        match self {
            SectionContent::News {
                title,
                short_version,
                whats_happening,
                why_it_matters,
            } => vec![title, short_version, whats_happening, why_it_matters],
            SectionContent::Tip {
                title,
                subtitle,
                content,
                cta,
            }
            | SectionContent::Trend {
                title,
                subtitle,
                content,
                cta,
            } => vec![title, subtitle, content, cta],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_discriminator_round_trip() {
        let json = r#"{
            "section_type": "tip",
            "title": "Lighting on a Budget",
            "subtitle": "Three fixes before peak season",
            "content": "Swap halogens for warm LEDs.",
            "cta": "Read More"
        }"#;
        let section: SectionContent = serde_json::from_str(json).unwrap();
        assert_eq!(section.kind(), "tip");
        assert_eq!(section.text_fields().len(), 4);
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let section: SectionContent =
            serde_json::from_str(r#"{"section_type": "news", "title": "Venue permits"}"#).unwrap();
        assert_eq!(section.kind(), "news");
        assert_eq!(section.text_fields(), vec!["Venue permits", "", "", ""]);
    }

    #[test]
    fn test_report_passes_only_without_errors() {
        let warning = Violation {
            severity: Severity::Warning,
            rule: "Punctuation".to_string(),
            issue: "Possible missing serial comma".to_string(),
            suggestion: "Use serial commas in lists".to_string(),
        };
        let report = CheckReport::new(vec![], vec![warning.clone()]);
        assert!(report.passed);
        assert_eq!(report.total_warnings, 1);

        let error = Violation {
            severity: Severity::Error,
            ..warning
        };
        let report = CheckReport::new(vec![error], vec![]);
        assert!(!report.passed);
        assert_eq!(report.total_issues, 1);
    }
}
