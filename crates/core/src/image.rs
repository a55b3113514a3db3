//! Image reference normalization for card artwork.
//!
//! All helpers are total string transforms: bad input falls back to the
//! placeholder image rather than failing.

//
// ─── CONSTANTS ─────────────────────────────────────────────────────────────────
//

pub const PLACEHOLDER_IMAGE: &str = "/placeholder-card.jpg";
pub const CARD_BACK_IMAGE: &str = "/cardback.jpg";

pub const DEFAULT_IMAGE_WIDTH: u32 = 300;

const STORAGE_BUCKET_PREFIX: &str = "https://firebasestorage.googleapis.com";
const RAW_MEDIA_PARAM: &str = "alt=media";
const CDN_HOST: &str = "res.cloudinary.com";
const CDN_UPLOAD_MARKER: &str = "upload/";
const CDN_WIDTH_MARKER: &str = "upload/w_";

/// Artwork pinned by exact card name; wins over whatever the record holds.
pub const SPECIAL_CARD_URLS: [(&str, &str); 2] = [
    (
        "El Loco",
        "https://res.cloudinary.com/die8wz4ag/image/upload/w_300,f_auto,q_auto/v1747796437/a22_mbkkkq.jpg",
    ),
    (
        "El Mago",
        "https://res.cloudinary.com/die8wz4ag/image/upload/w_300,f_auto,q_auto/v1747796434/a01_rxlbr2.jpg",
    ),
];

//
// ─── URL REWRITING ─────────────────────────────────────────────────────────────
//

/// Rewrites an image reference into a delivery URL.
///
/// - missing or empty input: [`PLACEHOLDER_IMAGE`]
/// - storage-bucket URL: ensures the raw-media query parameter
/// - CDN URL without a width transform: inserts `w_{width},f_auto,q_auto/`
///   right after the first `upload/`
/// - anything else: returned trimmed
///
/// Only the raw input is checked for emptiness, so whitespace-only input
/// comes back as `""`.
#[must_use]
pub fn optimize_image_url(url: Option<&str>, width: u32) -> String {
    optimize_image_url_or(url, width, PLACEHOLDER_IMAGE)
}

/// Same as [`optimize_image_url`] with a caller-chosen placeholder.
#[must_use]
pub fn optimize_image_url_or(url: Option<&str>, width: u32, placeholder: &str) -> String {
    let cleaned = match url {
        Some(s) if !s.is_empty() => s.trim(),
        _ => return placeholder.to_owned(),
    };

    if cleaned.starts_with(STORAGE_BUCKET_PREFIX) {
        if cleaned.contains(RAW_MEDIA_PARAM) {
            return cleaned.to_owned();
        }
        let sep = if cleaned.contains('?') { '&' } else { '?' };
        return format!("{cleaned}{sep}{RAW_MEDIA_PARAM}");
    }

    if cleaned.contains(CDN_HOST) && !cleaned.contains(CDN_WIDTH_MARKER) {
        return cleaned.replacen(
            CDN_UPLOAD_MARKER,
            &format!("{CDN_UPLOAD_MARKER}w_{width},f_auto,q_auto/"),
            1,
        );
    }

    cleaned.to_owned()
}

#[must_use]
pub fn special_card_url(name: &str) -> Option<&'static str> {
    SPECIAL_CARD_URLS
        .iter()
        .find(|(card, _)| *card == name)
        .map(|(_, url)| *url)
}

/// Override table first, then [`optimize_image_url`] on the fallback.
#[must_use]
pub fn optimized_card_url(name: &str, fallback: Option<&str>, width: u32) -> String {
    special_card_url(name).map_or_else(|| optimize_image_url(fallback, width), str::to_owned)
}

/// Inline `onerror` handler that swaps a broken image for `fallback`.
///
/// The URL is interpolated verbatim; callers must only pass trusted values.
#[must_use]
pub fn error_fallback_directive(fallback: Option<&str>) -> String {
    let fallback = fallback.unwrap_or(PLACEHOLDER_IMAGE);
    format!("this.onerror=null; this.src='{fallback}'; this.classList.add('error-image');")
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_empty_input_yields_placeholder() {
        assert_eq!(optimize_image_url(None, 300), PLACEHOLDER_IMAGE);
        assert_eq!(optimize_image_url(Some(""), 300), PLACEHOLDER_IMAGE);
        assert_eq!(optimize_image_url_or(None, 300, "/x.png"), "/x.png");
    }

    #[test]
    fn whitespace_only_input_is_trimmed_to_empty() {
        assert_eq!(optimize_image_url(Some("   "), 300), "");
        assert_eq!(optimize_image_url_or(Some("\t\n"), 300, "/x.png"), "");
    }

    #[test]
    fn cdn_url_gets_transform_once() {
        let raw = "https://res.cloudinary.com/x/image/upload/v1/foo.jpg";
        let once = optimize_image_url(Some(raw), 300);
        assert_eq!(
            once,
            "https://res.cloudinary.com/x/image/upload/w_300,f_auto,q_auto/v1/foo.jpg"
        );
        assert_eq!(optimize_image_url(Some(&once), 300), once);
    }

    #[test]
    fn cdn_url_honours_width() {
        let out = optimize_image_url(Some(" https://res.cloudinary.com/a/upload/b.png "), 640);
        assert_eq!(out, "https://res.cloudinary.com/a/upload/w_640,f_auto,q_auto/b.png");
    }

    #[test]
    fn storage_url_gets_raw_media_param() {
        let base = "https://firebasestorage.googleapis.com/v0/b/app/o/card.jpg";
        assert_eq!(
            optimize_image_url(Some(base), 300),
            format!("{base}?alt=media")
        );
        let with_query = format!("{base}?token=abc");
        assert_eq!(
            optimize_image_url(Some(&with_query), 300),
            format!("{with_query}&alt=media")
        );
        let done = format!("{base}?alt=media&token=abc");
        assert_eq!(optimize_image_url(Some(&done), 300), done);
    }

    #[test]
    fn other_urls_are_only_trimmed() {
        assert_eq!(
            optimize_image_url(Some("  /local/card.jpg\n"), 300),
            "/local/card.jpg"
        );
    }

    #[test]
    fn override_table_wins() {
        let url = optimized_card_url("El Loco", Some("https://example.com/x.jpg"), 900);
        assert!(url.ends_with("a22_mbkkkq.jpg"));
        assert!(url.contains("w_300"));
        assert_eq!(
            optimized_card_url("La Luna", Some("https://example.com/x.jpg"), 900),
            "https://example.com/x.jpg"
        );
        assert_eq!(optimized_card_url("La Luna", None, 300), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn error_directive_embeds_fallback() {
        assert_eq!(
            error_fallback_directive(None),
            "this.onerror=null; this.src='/placeholder-card.jpg'; this.classList.add('error-image');"
        );
        assert!(error_fallback_directive(Some("/b.jpg")).contains("this.src='/b.jpg'"));
    }
}
