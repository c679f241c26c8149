//! Query-string decoding that keeps repeated keys (`status=a&status=b`).

use mockdesk_core::query::QueryParams;

/// Split and percent-decode a raw query string. `+` decodes to a space.
pub fn parse_query(raw: Option<&str>) -> QueryParams {
    let pairs = raw
        .unwrap_or_default()
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode(key), decode(value))
        })
        .collect();
    QueryParams::new(pairs)
}

fn decode(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    String::from_utf8_lossy(&urlencoding::decode_binary(spaced.as_bytes())).into_owned()
}
