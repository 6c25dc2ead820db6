#[derive(Debug, thiserror::Error)]
pub enum GuidelineError {
    #[error("rules file error at {path}: {source}")]
    RulesIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("rules parse error: {0}")]
    RulesParse(#[from] serde_json::Error),
}
