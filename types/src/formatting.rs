//! Centralized text formatting utilities.
//!
//! Identifier derivation, card fallbacks and media URLs all go through this
//! module so the views and the creation flow agree on the same rules.

/// Directory the backend stores uploaded media in, also its public mount path.
const MEDIA_DIR: &str = "midia_launcher";

/// Derive a collection identifier from its display name.
///
/// Lowercases the name and collapses every run of whitespace into a single
/// `-`. Leading and trailing whitespace is dropped. The result is stable under
/// repeated application.
///
/// # Examples
/// ```
/// use salsi_types::formatting::derive_collection_id;
/// assert_eq!(derive_collection_id("Jogos de Terror"), "jogos-de-terror");
/// assert_eq!(derive_collection_id("  A   B "), "a-b");
/// ```
pub fn derive_collection_id(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// Extract up to 2 uppercase initials from a name for placeholder covers.
///
/// # Examples
/// ```
/// use salsi_types::formatting::initials;
/// assert_eq!(initials("hollow knight"), "HK");
/// assert_eq!(initials("Chess"), "C");
/// ```
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|w| w.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase()
}

/// Resolve a stored cover path into a URL the browser can load.
///
/// - `http://` / `https://` URLs are returned unchanged
/// - Paths containing the media directory are re-rooted onto `base_url`
/// - Any other relative path is joined onto `base_url`
///
/// Windows separators are normalized first since the backend records
/// filesystem paths verbatim.
///
/// # Examples
/// ```
/// use salsi_types::formatting::media_url;
/// assert_eq!(
///     media_url("http://127.0.0.1:8000", r"C:\app\backend\midia_launcher\1_capa.webp").as_deref(),
///     Some("http://127.0.0.1:8000/midia_launcher/1_capa.webp"),
/// );
/// assert_eq!(media_url("http://127.0.0.1:8000", ""), None);
/// ```
pub fn media_url(base_url: &str, path: &str) -> Option<String> {
    let path = path.trim();
    if path.is_empty() {
        return None;
    }
    if path.starts_with("http://") || path.starts_with("https://") {
        return Some(path.to_string());
    }

    let normalized = path.replace('\\', "/");
    let relative = match normalized.find(&format!("{MEDIA_DIR}/")) {
        Some(idx) => &normalized[idx..],
        None => normalized.trim_start_matches('/'),
    };

    Some(format!("{}/{}", base_url.trim_end_matches('/'), relative))
}
