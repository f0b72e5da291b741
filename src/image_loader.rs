//! Image loading from URI-style sources
//!
//! This module resolves an image reference to an RGBA raster. A reference may
//! be any of:
//!
//! - a plain filesystem path (`photos/shirt.jpg`)
//! - a `file://` URL
//! - a `data:` URL carrying the encoded image inline
//! - an `http://` or `https://` URL
//!
//! Decoding goes through the `image` crate, so every format it was built with
//! (PNG, JPEG, GIF first frame, WebP, BMP) is accepted. Any failure to fetch or
//! decode is reported as [`ExtractError::LoadError`]. There is a single attempt
//! and no internal timeout.

use base64::Engine;
use image::RgbaImage;
use std::path::PathBuf;
use tracing::debug;
use url::Url;

use crate::error::{ExtractError, Result};

/// A parsed image reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Local file
    Path(PathBuf),
    /// Remote resource fetched over HTTP(S)
    Remote(Url),
    /// Inline payload from a `data:` URL
    Inline {
        media_type: Option<String>,
        bytes: Vec<u8>,
    },
}

impl ImageSource {
    /// Parse an image reference
    ///
    /// Strings that are not absolute URLs are treated as filesystem paths.
    ///
    /// # Errors
    ///
    /// Returns `ExtractError::LoadError` for malformed `data:` URLs, `file://`
    /// URLs without a local path, and URL schemes that cannot be fetched.
    pub fn parse(reference: &str) -> Result<ImageSource> {
        let trimmed = reference.trim();
        if trimmed.is_empty() {
            return Err(ExtractError::load_message("Empty image reference"));
        }

        if let Some(rest) = strip_prefix_ignore_case(trimmed, "data:") {
            return parse_data_url(rest);
        }

        let url = match Url::parse(trimmed) {
            Ok(url) => url,
            Err(_) => return Ok(ImageSource::Path(PathBuf::from(trimmed))),
        };

        match url.scheme() {
            "http" | "https" => Ok(ImageSource::Remote(url)),
            "file" => url.to_file_path().map(ImageSource::Path).map_err(|_| {
                ExtractError::load_message(format!("file URL has no local path: {}", trimmed))
            }),
            // Windows drive letters parse as one-letter schemes
            scheme if scheme.len() == 1 => Ok(ImageSource::Path(PathBuf::from(trimmed))),
            scheme => Err(ExtractError::load_message(format!(
                "Unsupported URL scheme '{}' in {}",
                scheme, trimmed
            ))),
        }
    }

    /// Short description for logs, without inline payloads
    pub fn describe(&self) -> String {
        match self {
            ImageSource::Path(path) => path.display().to_string(),
            ImageSource::Remote(url) => url.to_string(),
            ImageSource::Inline { media_type, bytes } => format!(
                "data:{} ({} bytes)",
                media_type.as_deref().unwrap_or("application/octet-stream"),
                bytes.len()
            ),
        }
    }
}

fn strip_prefix_ignore_case<'a>(value: &'a str, prefix: &str) -> Option<&'a str> {
    let head = value.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        Some(&value[prefix.len()..])
    } else {
        None
    }
}

/// Parse the part of a data URL after `data:`
fn parse_data_url(rest: &str) -> Result<ImageSource> {
    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| ExtractError::load_message("Malformed data URL: missing ','"))?;

    let mut params = header.split(';');
    let media_type = params
        .next()
        .filter(|m| !m.is_empty())
        .map(|m| m.to_ascii_lowercase());
    let is_base64 = params.any(|p| p.eq_ignore_ascii_case("base64"));

    let bytes = if is_base64 {
        let compact: String = payload.chars().filter(|c| !c.is_ascii_whitespace()).collect();
        base64::engine::general_purpose::STANDARD
            .decode(compact)
            .map_err(|e| ExtractError::load("Invalid base64 payload in data URL", e))?
    } else {
        payload.as_bytes().to_vec()
    };

    Ok(ImageSource::Inline { media_type, bytes })
}

/// Fetches and decodes images
///
/// Holds the HTTP client so that connections are pooled between calls.
#[derive(Debug, Clone, Default)]
pub struct ImageLoader {
    client: reqwest::Client,
}

impl ImageLoader {
    /// Create a loader with a default HTTP client
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a loader that fetches remote images with `client`
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Fetch and decode the image referenced by `reference`
    ///
    /// # Errors
    ///
    /// Returns `ExtractError::LoadError` if the reference is malformed, the
    /// resource cannot be read (missing file, HTTP error status, transport
    /// failure) or the bytes are not a decodable image.
    pub async fn load(&self, reference: &str) -> Result<RgbaImage> {
        let source = ImageSource::parse(reference)?;
        let bytes = self.fetch(&source).await?;
        decode_rgba(&bytes, &source)
    }

    /// Read the raw encoded bytes for a source
    pub async fn fetch(&self, source: &ImageSource) -> Result<Vec<u8>> {
        match source {
            ImageSource::Path(path) => {
                debug!(path = %path.display(), "reading image file");
                tokio::fs::read(path).await.map_err(|e| {
                    ExtractError::load(format!("Failed to read image file: {}", path.display()), e)
                })
            }
            ImageSource::Remote(url) => {
                debug!(%url, "fetching remote image");
                let response = self
                    .client
                    .get(url.clone())
                    .send()
                    .await
                    .map_err(|e| ExtractError::load(format!("Failed to fetch {}", url), e))?
                    .error_for_status()
                    .map_err(|e| ExtractError::load(format!("Failed to fetch {}", url), e))?;
                let body = response
                    .bytes()
                    .await
                    .map_err(|e| ExtractError::load(format!("Failed to read body of {}", url), e))?;
                Ok(body.to_vec())
            }
            ImageSource::Inline { bytes, .. } => Ok(bytes.clone()),
        }
    }
}

/// Decode encoded image bytes into an RGBA raster
///
/// Animated formats yield their first frame.
pub fn decode_rgba(bytes: &[u8], source: &ImageSource) -> Result<RgbaImage> {
    if bytes.is_empty() {
        return Err(ExtractError::load_message(format!(
            "Image is empty: {}",
            source.describe()
        )));
    }

    let image = image::load_from_memory(bytes).map_err(|e| {
        ExtractError::load(format!("Failed to decode image: {}", source.describe()), e)
    })?;

    debug!(
        width = image.width(),
        height = image.height(),
        source = %source.describe(),
        "decoded image"
    );

    Ok(image.to_rgba8())
}
