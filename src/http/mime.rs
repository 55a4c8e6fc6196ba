//! MIME type lookup.
//!
//! Fixed extension → Content-Type table, consulted read-only.

/// Get the Content-Type for a file extension.
///
/// Matching is case-insensitive; unmapped or missing extensions fall back
/// to the generic binary type.
pub fn content_type_for(extension: Option<&str>) -> &'static str {
    let Some(ext) = extension else {
        return "application/octet-stream";
    };

    match ext.to_ascii_lowercase().as_str() {
        "html" => "text/html; charset=utf-8",
        "js" | "mjs" => "text/javascript; charset=utf-8",
        "json" => "application/json; charset=utf-8",
        "css" => "text/css; charset=utf-8",
        "svg" => "image/svg+xml",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "ico" => "image/x-icon",
        "txt" => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_types() {
        assert_eq!(content_type_for(Some("html")), "text/html; charset=utf-8");
        assert_eq!(content_type_for(Some("css")), "text/css; charset=utf-8");
        assert_eq!(content_type_for(Some("js")), "text/javascript; charset=utf-8");
        assert_eq!(content_type_for(Some("mjs")), "text/javascript; charset=utf-8");
        assert_eq!(content_type_for(Some("json")), "application/json; charset=utf-8");
        assert_eq!(content_type_for(Some("png")), "image/png");
        assert_eq!(content_type_for(Some("jpeg")), "image/jpeg");
        assert_eq!(content_type_for(Some("ico")), "image/x-icon");
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(content_type_for(Some("HTML")), "text/html; charset=utf-8");
        assert_eq!(content_type_for(Some("Jpg")), "image/jpeg");
    }

    #[test]
    fn test_unknown_extension() {
        assert_eq!(content_type_for(Some("bin")), "application/octet-stream");
        assert_eq!(content_type_for(Some("xyz")), "application/octet-stream");
        assert_eq!(content_type_for(None), "application/octet-stream");
    }
}
