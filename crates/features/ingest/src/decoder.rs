use std::borrow::Cow;
use std::future::Future;
use std::sync::Arc;
use ttf_parser::{Face, name_id};

/// Why a font binary could not be decoded.
#[fhub_derive::fhub_error]
pub enum DecodeError {
    #[error("{reason}{}", format_context(.context))]
    Malformed { reason: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("decoder task failed{}: {source}", format_context(.context))]
    Task { source: tokio::task::JoinError, context: Option<Cow<'static, str>> },
}

/// What the ingestion flow needs from a decoded face.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedFace {
    /// Typographic family, else legacy family. `None` when the font names neither.
    pub family: Option<String>,
    pub glyph_count: u16,
    pub units_per_em: u16,
}

/// Turns raw font bytes into a [`DecodedFace`].
///
/// The only suspension point of ingestion. Implementations must not touch the registry.
pub trait FontDecoder: Send + Sync {
    fn decode(&self, data: Arc<[u8]>) -> impl Future<Output = Result<DecodedFace, DecodeError>> + Send;
}

/// `ttf-parser` decoder; parsing runs on the blocking pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct TtfDecoder;

impl FontDecoder for TtfDecoder {
    async fn decode(&self, data: Arc<[u8]>) -> Result<DecodedFace, DecodeError> {
        tokio::task::spawn_blocking(move || parse_face(&data)).await.context("Font decoder task")?
    }
}

/// Parses the first face in `data`.
///
/// # Errors
/// [`DecodeError::Malformed`] carrying the parser's reason.
pub fn parse_face(data: &[u8]) -> Result<DecodedFace, DecodeError> {
    let face = Face::parse(data, 0)
        .map_err(|e| DecodeError::Malformed { reason: e.to_string().into(), context: None })?;

    let family = family_name(&face, name_id::TYPOGRAPHIC_FAMILY)
        .or_else(|| family_name(&face, name_id::FAMILY));

    Ok(DecodedFace { family, glyph_count: face.number_of_glyphs(), units_per_em: face.units_per_em() })
}

fn family_name(face: &Face<'_>, id: u16) -> Option<String> {
    face.names()
        .into_iter()
        .filter(|name| name.name_id == id && name.is_unicode())
        .find_map(|name| name.to_string())
        .map(|name| name.trim().to_owned())
        .filter(|name| !name.is_empty())
}
