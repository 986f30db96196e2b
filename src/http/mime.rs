//! MIME type detection based on file extensions.

use std::path::Path;

/// Media type used when the extension is unknown.
pub const FALLBACK_MEDIA_TYPE: &str = "application/octet-stream";

/// Looks up the media type for a file extension (case-insensitive).
///
/// Returns `None` for unknown or missing extensions.
///
/// # Examples
/// ```
/// use webroot::http::mime::lookup;
/// assert_eq!(lookup(Some("css")), Some("text/css"));
/// assert_eq!(lookup(Some("PNG")), Some("image/png"));
/// assert_eq!(lookup(None), None);
/// ```
pub fn lookup(extension: Option<&str>) -> Option<&'static str> {
    let ext = extension?.to_ascii_lowercase();
    let media_type = match ext.as_str() {
        // Text
        "html" | "htm" => "text/html",
        "css" => "text/css",
        "txt" => "text/plain",
        "md" => "text/markdown",
        "csv" => "text/csv",
        "xml" => "application/xml",

        // Scripts and data
        "js" | "mjs" => "text/javascript",
        "json" => "application/json",
        "wasm" => "application/wasm",

        // Images
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "ico" => "image/vnd.microsoft.icon",
        "webp" => "image/webp",

        // Video
        "mp4" => "video/mp4",
        "webm" => "video/webm",

        // Audio
        "mp3" => "audio/mpeg",
        "wav" => "audio/x-wav",
        "ogg" => "audio/ogg",

        // Fonts
        "woff" => "font/woff",
        "woff2" => "font/woff2",
        "ttf" => "font/ttf",
        "otf" => "font/otf",

        // Documents and archives
        "pdf" => "application/pdf",
        "zip" => "application/zip",
        "gz" => "application/gzip",
        "tar" => "application/x-tar",

        _ => return None,
    };
    Some(media_type)
}

/// Media type for a file on disk, falling back to [`FALLBACK_MEDIA_TYPE`].
pub fn media_type_for(path: &Path) -> &'static str {
    lookup(path.extension().and_then(|e| e.to_str())).unwrap_or(FALLBACK_MEDIA_TYPE)
}
