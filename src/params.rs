//! String conventions of the HTTP boundary.
//!
//! The `hex_` token codec lets `#RRGGBB` colors travel in query strings
//! without percent-encoding the `#`. These helpers belong strictly to the
//! boundary; the synthesizer never sees encoded tokens.

use base64::Engine as Base64Engine;

use crate::Palette;

/// Encode a color token for use as a query-parameter value: a leading `#`
/// becomes the `hex_` prefix, anything else passes through unchanged.
pub fn color_to_param(color: &str) -> String {
    match color.strip_prefix('#') {
        Some(rest) => format!("hex_{rest}"),
        None => color.to_string(),
    }
}

/// Decode a query-parameter value back into a color token. Exact inverse of
/// [`color_to_param`] for `#`-prefixed inputs.
pub fn param_to_color(param: &str) -> String {
    match param.strip_prefix("hex_") {
        Some(rest) => format!("#{rest}"),
        None => param.to_string(),
    }
}

/// Build the sharable endpoint link for a palette and canvas: repeated
/// `colors=` pairs in palette order, then `width` and `height`.
pub fn api_url(base: &str, palette: &Palette, width: f64, height: f64) -> String {
    let mut query = url::form_urlencoded::Serializer::new(String::new());
    for color in palette.colors() {
        query.append_pair("colors", &color_to_param(color));
    }
    query.append_pair("width", &crate::synth::fmt_number(width));
    query.append_pair("height", &crate::synth::fmt_number(height));
    format!("{}?{}", base.trim_end_matches('/'), query.finish())
}

/// Download filename for a generated document: `gradient-{unix-ms}.svg`.
pub fn download_filename(unix_ms: u128) -> String {
    format!("gradient-{unix_ms}.svg")
}

/// Package a document as a `data:` URI for inline embedding.
pub fn data_uri(svg: &str) -> String {
    let b64 = base64::engine::general_purpose::STANDARD.encode(svg.as_bytes());
    format!("data:image/svg+xml;base64,{b64}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_codec_round_trip() {
        for c in ["#112233", "#FFA50F", "#aAbBcC", "#000000"] {
            assert_eq!(param_to_color(&color_to_param(c)), c);
        }
    }

    #[test]
    fn test_named_colors_pass_through() {
        assert_eq!(color_to_param("tomato"), "tomato");
        assert_eq!(param_to_color("tomato"), "tomato");
    }

    #[test]
    fn test_hex_prefix_decodes() {
        assert_eq!(param_to_color("hex_5135FF"), "#5135FF");
        assert_eq!(color_to_param("#5135FF"), "hex_5135FF");
    }

    #[test]
    fn test_api_url_shape() {
        let palette = Palette::new(vec!["#112233".into(), "cyan".into()]).unwrap();
        let link = api_url("http://localhost:8000/api", &palette, 800.0, 200.0);
        assert_eq!(
            link,
            "http://localhost:8000/api?colors=hex_112233&colors=cyan&width=800&height=200"
        );
    }

    #[test]
    fn test_download_filename() {
        assert_eq!(download_filename(1700000000000), "gradient-1700000000000.svg");
    }

    #[test]
    fn test_data_uri_prefix() {
        let uri = data_uri("<svg/>");
        assert!(uri.starts_with("data:image/svg+xml;base64,"));
        let b64 = &uri["data:image/svg+xml;base64,".len()..];
        use base64::Engine as _;
        let decoded = base64::engine::general_purpose::STANDARD
            .decode(b64)
            .unwrap();
        assert_eq!(decoded, b"<svg/>");
    }
}
