use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("source code too large ({0} bytes), potential DoS risk")]
    SourceTooLarge(usize),

    #[error("failed to configure parser: {0}")]
    ParserSetup(String),

    #[error("failed to parse source code - syntax may be invalid")]
    ParseFailed,

    #[error("no structural analysis for this source kind: {0}")]
    UnsupportedKind(&'static str),
}
