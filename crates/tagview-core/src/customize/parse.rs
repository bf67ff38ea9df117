// ── Customization value parser ──
//
// Raw store values arrive in a small grammar:
//
//   {key=value;key=value}    parameter bag
//   {url:<url>}              image reference
//   {<anything with "://">}  image reference
//   http(s)://...            bare image reference
//   anything else            opaque scalar
//
// Parsing never errors -- unrecognized formats degrade to scalar.

use crate::customize::params::{ParamValue, WidgetParams};

/// Result of parsing one raw customization value.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedValue {
    /// The trimmed raw input, kept for diagnostics and scalar use.
    pub raw: String,
    pub kind: ParsedKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParsedKind {
    /// Image reference. `url` is `None` when the reference was present but
    /// empty (e.g. `{url:}`).
    Image { url: Option<String> },
    /// Brace-wrapped `key=value` bag.
    Params(WidgetParams),
    /// Anything else: the trimmed raw string stands for itself.
    Scalar,
}

impl ParsedValue {
    pub fn params(&self) -> Option<&WidgetParams> {
        match &self.kind {
            ParsedKind::Params(p) => Some(p),
            _ => None,
        }
    }

    pub fn image_url(&self) -> Option<&str> {
        match &self.kind {
            ParsedKind::Image { url } => url.as_deref(),
            _ => None,
        }
    }

    pub fn is_image(&self) -> bool {
        matches!(self.kind, ParsedKind::Image { .. })
    }
}

/// Parse a raw store value. Classification priority: image, parameter bag,
/// scalar. Total -- no input reaches an error path.
pub fn parse_value(raw: &str) -> ParsedValue {
    let trimmed = raw.trim();

    if let Some(url) = extract_image_url(trimmed) {
        let url = if url.is_empty() { None } else { Some(url) };
        return ParsedValue {
            raw: trimmed.to_owned(),
            kind: ParsedKind::Image { url },
        };
    }

    if let Some(inner) = braced_interior(trimmed) {
        return ParsedValue {
            raw: trimmed.to_owned(),
            kind: ParsedKind::Params(parse_params(inner)),
        };
    }

    ParsedValue {
        raw: trimmed.to_owned(),
        kind: ParsedKind::Scalar,
    }
}

/// Widget-key predicate: every key names a widget except the reserved
/// control/styling prefixes `is` and `color` (case-insensitive).
pub fn is_widget_key(key: &str) -> bool {
    let normalized = key.trim().to_lowercase();
    !(normalized.starts_with("is") || normalized.starts_with("color"))
}

// ── Internals ──────────────────────────────────────────────────────

/// The trimmed interior of a `{...}` wrapper, if the value has one.
fn braced_interior(trimmed: &str) -> Option<&str> {
    if trimmed.len() >= 2 && trimmed.starts_with('{') && trimmed.ends_with('}') {
        Some(trimmed[1..trimmed.len() - 1].trim())
    } else {
        None
    }
}

/// Pull an image URL out of the value, in its three spellings. `Some("")`
/// means "an image reference with nothing in it" and is distinct from
/// `None` ("not an image at all").
fn extract_image_url(trimmed: &str) -> Option<String> {
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        return Some(trimmed.to_owned());
    }
    if let Some(inner) = braced_interior(trimmed) {
        if let Some(rest) = inner.strip_prefix("url:") {
            return Some(rest.to_owned());
        }
        if inner.contains("://") {
            return Some(inner.to_owned());
        }
    }
    None
}

/// Parse a `;`-separated `key=value` interior into a bag. Keys lower-case
/// and trim; values try float, then boolean literal, then raw string.
/// Pairs without `=` or with empty keys are skipped silently.
fn parse_params(inner: &str) -> WidgetParams {
    let mut params = WidgetParams::new();

    for pair in inner.split(';').map(str::trim).filter(|p| !p.is_empty()) {
        let Some(eq) = pair.find('=') else { continue };
        let key = pair[..eq].trim().to_lowercase();
        let val = pair[eq + 1..].trim();
        if key.is_empty() {
            continue;
        }

        if let Some(n) = parse_float_loose(val) {
            params.insert(key, ParamValue::Number(n));
        } else if val.eq_ignore_ascii_case("true") {
            params.insert(key, ParamValue::Bool(true));
        } else if val.eq_ignore_ascii_case("false") {
            params.insert(key, ParamValue::Bool(false));
        } else {
            params.insert(key, ParamValue::Text(val.to_owned()));
        }
    }

    params
}

/// Longest-prefix float parse, matching the permissive numeric coercion the
/// store grammar has always used: `"10px"` parses as `10`, `"1.5e3 rpm"` as
/// `1500`. Returns `None` when no leading numeric prefix exists.
pub(crate) fn parse_float_loose(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();

    let mut i = 0;
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i = 1;
    }
    while i < bytes.len() {
        match bytes[i] {
            b'0'..=b'9' => {
                seen_digit = true;
                i += 1;
                end = i;
            }
            b'.' if !seen_dot => {
                seen_dot = true;
                i += 1;
            }
            b'e' | b'E' if seen_digit => {
                // Exponent counts only when digits follow (optional sign).
                let mut j = i + 1;
                if matches!(bytes.get(j), Some(b'+' | b'-')) {
                    j += 1;
                }
                if matches!(bytes.get(j), Some(b'0'..=b'9')) {
                    i = j;
                    seen_dot = true; // no dot allowed after the exponent
                } else {
                    break;
                }
            }
            _ => break,
        }
    }

    if !seen_digit {
        return None;
    }
    s[..end].parse().ok()
}
