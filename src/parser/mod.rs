// Hotels endpoint client.
// Public API:
//   - HttpHotelSource: one GET against the configured endpoint
//   - interpret_response(status, body): status check + "array or nothing" decoding
//   - HotelRecord and friends (see record.rs): lenient typed view of one item
//   - resolve_image_source(src, base): bundled asset or http(s) url, nothing else
//   - fetch_image(source): download or read one card image as RGBA8 (SVG rasterized)
//
// Example:
// let source = HttpHotelSource::new(DEFAULT_API_URL)?;
// let hotels = source.fetch_hotels().await?;

use lazy_static::lazy_static;
use reqwest::StatusCode;
use resvg::usvg;
use serde_json::Value;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;
use url::Url;

mod record;
#[cfg(test)]
pub(crate) mod test_server;

pub use record::{Category, GalleryEntry, HotelRecord};

pub const DEFAULT_API_URL: &str = "https://d8aeba5b-65e8-48d5-8a78-a74f53ec2e9c.mock.pstmn.io/hotels";

/// Directory of the bundled image assets, relative to the working directory.
pub const ASSET_DIR: &str = "Imgs";

const MAX_IMAGE_BYTES: usize = 16 * 1024 * 1024;
const SVG_RASTER_SIZE: f32 = 256.0;

const USER_AGENT: &str = concat!("hotel-grid/", env!("CARGO_PKG_VERSION"));

lazy_static! {
    // Shared by image downloads; the hotel source builds its own client.
    static ref CLIENT: reqwest::Client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .expect("reqwest client");
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed with status {status}")]
    Http { status: u16 },

    #[error("response is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("invalid endpoint url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Source of the hotel collection: a single fixed endpoint.
#[derive(Debug, Clone)]
pub struct HttpHotelSource {
    client: reqwest::Client,
    url: Url,
}

impl HttpHotelSource {
    pub fn new(url: &str) -> Result<Self, FetchError> {
        Ok(Self {
            url: Url::parse(url)?,
            client: reqwest::Client::builder().user_agent(USER_AGENT).build()?,
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Fetch the raw hotel records. Exactly one request, no retry.
    /// A non-array JSON body yields an empty list.
    pub async fn fetch_hotels(&self) -> Result<Vec<Value>, FetchError> {
        log::debug!("fetch_hotels: GET {}", self.url);
        let resp = self.client.get(self.url.clone()).send().await?;
        let status = resp.status();
        let body = resp.bytes().await?;
        let hotels = interpret_response(status, &body)?;
        log::info!(
            "fetch_hotels: status={} items={}",
            status.as_u16(),
            hotels.len()
        );
        Ok(hotels)
    }
}

/// Turn a raw response into the list of records.
pub fn interpret_response(status: StatusCode, body: &[u8]) -> Result<Vec<Value>, FetchError> {
    if !status.is_success() {
        return Err(FetchError::Http {
            status: status.as_u16(),
        });
    }
    match serde_json::from_slice::<Value>(body)? {
        Value::Array(items) => Ok(items),
        other => {
            log::warn!("fetch_hotels: expected a JSON array, got {}", json_kind(&other));
            Ok(Vec::new())
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Where a card image is loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Bundled file under [`ASSET_DIR`].
    Asset(PathBuf),
    /// Anything coming from the endpoint data, fetched over http(s).
    Remote(Url),
}

/// Resolve an image `src` from a card.
///
/// Only relative paths inside [`ASSET_DIR`] are read from disk. Other relative
/// uris are joined onto `base` (the hotels endpoint). Absolute paths and
/// non-http schemes are rejected.
pub fn resolve_image_source(src: &str, base: Option<&Url>) -> Result<ImageSource, String> {
    let src = src.trim();
    if let Some(path) = asset_path(src) {
        return Ok(ImageSource::Asset(path));
    }
    if src.starts_with('/') || src.starts_with('\\') {
        return Err(format!("absolute path not allowed: {src}"));
    }

    let url = match Url::parse(src) {
        Ok(url) => url,
        Err(url::ParseError::RelativeUrlWithoutBase) => base
            .ok_or_else(|| format!("relative uri without base: {src}"))?
            .join(src)
            .map_err(|e| format!("bad uri {src}: {e}"))?,
        Err(e) => return Err(format!("bad uri {src}: {e}")),
    };
    match url.scheme() {
        "http" | "https" => Ok(ImageSource::Remote(url)),
        other => Err(format!("scheme {other} not allowed: {src}")),
    }
}

fn asset_path(src: &str) -> Option<PathBuf> {
    let path = Path::new(src);
    let mut components = path.components();
    let first_is_asset_dir =
        matches!(components.next(), Some(Component::Normal(dir)) if dir == ASSET_DIR);
    let rest_is_plain = components.clone().next().is_some()
        && components.all(|c| matches!(c, Component::Normal(_)));
    (first_is_asset_dir && rest_is_plain).then(|| path.to_path_buf())
}

/// Load one card image and return RGBA8 bytes + size.
pub async fn fetch_image(source: &ImageSource) -> Result<(usize, usize, Vec<u8>), String> {
    let (bytes, name) = match source {
        ImageSource::Asset(path) => {
            let bytes = tokio::fs::read(path)
                .await
                .map_err(|e| format!("read error for {}: {}", path.display(), e))?;
            (bytes, path.to_string_lossy().into_owned())
        }
        ImageSource::Remote(url) => (download_image(url).await?, url.to_string()),
    };

    tokio::task::spawn_blocking(move || decode_image(&name, &bytes))
        .await
        .map_err(|e| format!("decode task failed: {}", e))?
}

async fn download_image(url: &Url) -> Result<Vec<u8>, String> {
    let mut resp = CLIENT
        .get(url.clone())
        .header("Accept", "image/svg+xml,image/jpeg,image/png,image/gif,image/webp")
        .send()
        .await
        .map_err(|e| format!("request error for {}: {}", url, e))?;
    let status = resp.status();
    if !status.is_success() {
        return Err(format!("http status {} for {}", status.as_u16(), url));
    }

    let mut bytes = Vec::new();
    while let Some(chunk) = resp
        .chunk()
        .await
        .map_err(|e| format!("body read error for {}: {}", url, e))?
    {
        if bytes.len() + chunk.len() > MAX_IMAGE_BYTES {
            return Err(format!("image larger than {MAX_IMAGE_BYTES} bytes: {url}"));
        }
        bytes.extend_from_slice(&chunk);
    }
    Ok(bytes)
}

fn looks_like_svg(name: &str, bytes: &[u8]) -> bool {
    let by_name = Path::new(name.split(['?', '#']).next().unwrap_or_default())
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("svg"));
    let head = String::from_utf8_lossy(&bytes[..bytes.len().min(256)]);
    let head = head.trim_start();
    by_name || head.starts_with("<svg") || (head.starts_with("<?xml") && head.contains("<svg"))
}

fn decode_image(name: &str, bytes: &[u8]) -> Result<(usize, usize, Vec<u8>), String> {
    if looks_like_svg(name, bytes) {
        return rasterize_svg(name, bytes);
    }
    let img = image::load_from_memory(bytes)
        .map_err(|e| format!("decode error for {}: {}", name, e))?;
    let rgba8 = img.to_rgba8();
    let (w, h) = rgba8.dimensions();
    Ok((w as usize, h as usize, rgba8.into_raw()))
}

/// Render an SVG so its longer side is [`SVG_RASTER_SIZE`] pixels.
fn rasterize_svg(name: &str, bytes: &[u8]) -> Result<(usize, usize, Vec<u8>), String> {
    let tree = usvg::Tree::from_data(bytes, &usvg::Options::default())
        .map_err(|e| format!("svg error for {}: {}", name, e))?;
    let size = tree.size();
    if size.width() <= 0.0 || size.height() <= 0.0 {
        return Err(format!("svg error for {}: empty dimensions", name));
    }

    let scale = SVG_RASTER_SIZE / size.width().max(size.height());
    let w = (size.width() * scale).round().max(1.0) as u32;
    let h = (size.height() * scale).round().max(1.0) as u32;
    let mut pixmap = tiny_skia::Pixmap::new(w, h)
        .ok_or_else(|| format!("svg error for {}: cannot allocate {w}x{h}", name))?;
    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    // tiny-skia stores premultiplied alpha; egui textures take straight alpha.
    let rgba = pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect();
    Ok((w as usize, h as usize, rgba))
}
