use crate::decoder::DecodeError;
use crate::surface::SurfaceError;
use std::borrow::Cow;

/// Ingestion outcomes reported to the user. `Display` is the user-facing message.
#[fhub_derive::fhub_error]
pub enum IngestError {
    /// `allowed` is the configured extension list as shown to the user, e.g. `TTF`.
    #[error("Only {allowed} files are allowed{}", format_context(.context))]
    UnsupportedFileType { file_name: String, allowed: String, context: Option<Cow<'static, str>> },

    #[error("Font file is too large ({size} bytes, limit {limit}){}", format_context(.context))]
    FileTooLarge { size: u64, limit: u64, context: Option<Cow<'static, str>> },

    #[error("Error loading font: {source}{}", format_context(.context))]
    Decode { source: DecodeError, context: Option<Cow<'static, str>> },

    #[error("A font named \"{name}\" already exists{}", format_context(.context))]
    DuplicateName { name: String, context: Option<Cow<'static, str>> },

    #[error("Font could not be activated{}: {source}", format_context(.context))]
    Surface { source: SurfaceError, context: Option<Cow<'static, str>> },

    #[error("Internal ingest error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl IngestError {
    /// Validation and conflict errors leave nothing behind; decode and surface failures
    /// are worth a closer look in the logs.
    #[must_use]
    pub const fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedFileType { .. } | Self::FileTooLarge { .. } | Self::DuplicateName { .. }
        )
    }
}
