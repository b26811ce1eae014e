use std::borrow::Cow;

/// Facade-level failures: startup font loading.
#[fhub_derive::fhub_error]
pub enum FontHubError {
    #[error("Font directory error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("{source}{}", format_context(.context))]
    Ingest { source: fhub_ingest::IngestError, context: Option<Cow<'static, str>> },
}
