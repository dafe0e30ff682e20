//! MIME type detection utilities

/// Guess MIME by inspecting bytes (magic numbers)
pub fn guess_mime_from_bytes(bytes: &[u8]) -> Option<String> {
    infer::get(bytes).map(|k| k.mime_type().to_string())
}

/// Guess MIME by file name (extension-based)
pub fn guess_mime_from_path(path: &str) -> Option<String> {
    mime_guess::from_path(path)
        .first_raw()
        .map(|s| s.to_string())
}

/// Combined guess: declared type first, then bytes, then extension,
/// otherwise octet-stream
pub fn guess_mime(declared: Option<&str>, bytes: &[u8], file_name: Option<&str>) -> String {
    if let Some(d) = declared.map(str::trim).filter(|d| !d.is_empty()) {
        return d.to_ascii_lowercase();
    }
    if let Some(m) = guess_mime_from_bytes(bytes) {
        return m;
    }
    if let Some(p) = file_name
        && let Some(m) = guess_mime_from_path(p)
    {
        return m;
    }
    "application/octet-stream".to_string()
}

/// Whether a MIME type denotes content that is already plain text.
pub fn is_text_like(mime: &str) -> bool {
    let essence = mime.split(';').next().unwrap_or(mime).trim();
    essence.starts_with("text/")
        || matches!(
            essence,
            "application/json" | "application/xml" | "application/x-yaml" | "application/yaml"
        )
        || essence.ends_with("+json")
        || essence.ends_with("+xml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declared_type_wins() {
        assert_eq!(guess_mime(Some("Text/Plain"), b"%PDF-1.7", None), "text/plain");
    }

    #[test]
    fn sniffs_pdf_magic() {
        assert_eq!(guess_mime(None, b"%PDF-1.7\n...", None), "application/pdf");
    }

    #[test]
    fn falls_back_to_extension_then_octet_stream() {
        assert_eq!(guess_mime(None, b"hello", Some("notes.txt")), "text/plain");
        assert_eq!(guess_mime(None, b"hello", None), "application/octet-stream");
    }

    #[test]
    fn text_like_types() {
        assert!(is_text_like("text/plain; charset=utf-8"));
        assert!(is_text_like("application/json"));
        assert!(is_text_like("application/ld+json"));
        assert!(!is_text_like("application/pdf"));
        assert!(!is_text_like(
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        ));
    }
}
