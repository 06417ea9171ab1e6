/*!
 * Encoding detection and decoding for subtitle files.
 *
 * Subtitle files in the wild arrive in a handful of encodings, mostly
 * depending on which Windows tool authored them. This module decodes raw
 * bytes through an explicit, ordered list of fallback tiers:
 *
 * 1. UTF-8 with a leading BOM stripped
 * 2. UTF-16 (endianness taken from the BOM when present, LE otherwise),
 *    guarded by a control-character sanity check
 * 3. UTF-8 without BOM handling
 * 4. windows-1252, the permissive last resort
 *
 * Every tier except the last is exact-decode-or-fail: no replacement
 * characters are ever introduced silently. The windows-1252 tier maps all
 * 256 byte values and therefore always succeeds.
 */

use encoding_rs::{UTF_8, UTF_16BE, UTF_16LE, WINDOWS_1252};
use log::debug;

use crate::errors::DecodeError;

/// UTF-8 byte order mark
const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// UTF-16 little-endian byte order mark
const UTF16LE_BOM: [u8; 2] = [0xFF, 0xFE];

/// UTF-16 big-endian byte order mark
const UTF16BE_BOM: [u8; 2] = [0xFE, 0xFF];

/// Number of leading characters inspected by the UTF-16 sanity check
const UTF16_SANITY_WINDOW: usize = 100;

/// Default fraction of control characters above which a UTF-16 decode is
/// rejected as a false positive. The heuristic is approximate; the value is
/// tunable through [`ResolveOptions`].
pub const DEFAULT_UTF16_CONTROL_RATIO: f64 = 0.5;

/// Options controlling the decode fallback chain
#[derive(Debug, Clone)]
pub struct ResolveOptions {
    /// Control-character fraction above which a UTF-16 decode is rejected
    pub utf16_control_ratio: f64,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            utf16_control_ratio: DEFAULT_UTF16_CONTROL_RATIO,
        }
    }
}

/// Decoded text together with the label of the tier that produced it
#[derive(Debug, Clone)]
pub struct Decoded {
    /// The decoded Unicode text
    pub text: String,
    /// Label of the encoding that produced the text
    pub encoding: &'static str,
}

/// One entry of the fallback chain: a label plus an exact-decode attempt
/// that returns `None` when the bytes are not valid for that tier.
struct Tier {
    label: &'static str,
    decode: fn(&[u8], &ResolveOptions) -> Option<Decoded>,
}

/// The ordered fallback chain. Tiers are attempted front to back and the
/// first success wins.
const TIERS: &[Tier] = &[
    Tier {
        label: "utf-8",
        decode: decode_utf8_bom,
    },
    Tier {
        label: "utf-16",
        decode: decode_utf16,
    },
    Tier {
        label: "utf-8 (raw)",
        decode: decode_utf8_raw,
    },
    Tier {
        label: "windows-1252",
        decode: decode_windows_1252,
    },
];

/// Decode raw subtitle bytes using the default options
pub fn resolve(bytes: &[u8]) -> Result<Decoded, DecodeError> {
    resolve_with(bytes, &ResolveOptions::default())
}

/// Decode raw subtitle bytes using the given options
pub fn resolve_with(bytes: &[u8], options: &ResolveOptions) -> Result<Decoded, DecodeError> {
    resolve_tiers(bytes, options, TIERS)
}

/// Walk an ordered tier list and return the first successful decode
fn resolve_tiers(
    bytes: &[u8],
    options: &ResolveOptions,
    tiers: &[Tier],
) -> Result<Decoded, DecodeError> {
    let mut attempted = Vec::with_capacity(tiers.len());

    for tier in tiers {
        attempted.push(tier.label.to_string());
        if let Some(decoded) = (tier.decode)(bytes, options) {
            debug!("Decoded {} bytes as {}", bytes.len(), decoded.encoding);
            return Ok(decoded);
        }
    }

    Err(DecodeError::new(attempted))
}

/// Tier 1: strict UTF-8 with a leading BOM stripped
fn decode_utf8_bom(bytes: &[u8], _options: &ResolveOptions) -> Option<Decoded> {
    let stripped = bytes.strip_prefix(&UTF8_BOM[..]).unwrap_or(bytes);
    UTF_8
        .decode_without_bom_handling_and_without_replacement(stripped)
        .map(|text| Decoded {
            text: text.into_owned(),
            encoding: "utf-8",
        })
}

/// Tier 2: strict UTF-16, endianness from the BOM when one is present.
///
/// A byte sequence that merely happens to decode without error is not
/// necessarily UTF-16, so the decoded text must also pass a sanity check:
/// a non-empty result whose leading characters are overwhelmingly control
/// characters is rejected and the chain moves on.
fn decode_utf16(bytes: &[u8], options: &ResolveOptions) -> Option<Decoded> {
    let (encoding, payload, label) = if bytes.starts_with(&UTF16LE_BOM) {
        (UTF_16LE, &bytes[2..], "utf-16le")
    } else if bytes.starts_with(&UTF16BE_BOM) {
        (UTF_16BE, &bytes[2..], "utf-16be")
    } else {
        (UTF_16LE, bytes, "utf-16le")
    };

    let text = encoding
        .decode_without_bom_handling_and_without_replacement(payload)?
        .into_owned();

    if !passes_utf16_sanity(&text, options.utf16_control_ratio) {
        debug!("Rejecting {} decode: control-character noise", label);
        return None;
    }

    Some(Decoded {
        text,
        encoding: label,
    })
}

/// Tier 3: strict UTF-8 without any BOM handling
fn decode_utf8_raw(bytes: &[u8], _options: &ResolveOptions) -> Option<Decoded> {
    UTF_8
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|text| Decoded {
            text: text.into_owned(),
            encoding: "utf-8",
        })
}

/// Tier 4: windows-1252, the explicitly lossy last resort.
///
/// All 256 byte values are defined in windows-1252, so this tier cannot
/// fail. encoding_rs follows the WHATWG encoding standard, where
/// windows-1252 is the superset that serves for Latin-1 content.
fn decode_windows_1252(bytes: &[u8], _options: &ResolveOptions) -> Option<Decoded> {
    let (text, _had_errors) = WINDOWS_1252.decode_without_bom_handling(bytes);
    Some(Decoded {
        text: text.into_owned(),
        encoding: "windows-1252",
    })
}

/// Check whether a UTF-16 decode looks like real text.
///
/// Rejects the empty string and any window whose control-character fraction
/// exceeds `max_ratio`. Tab, CR and LF are ordinary whitespace in subtitle
/// files and do not count as noise.
fn passes_utf16_sanity(text: &str, max_ratio: f64) -> bool {
    if text.is_empty() {
        return false;
    }

    let window: Vec<char> = text.chars().take(UTF16_SANITY_WINDOW).collect();
    let controls = window
        .iter()
        .filter(|c| c.is_control() && !matches!(**c, '\t' | '\n' | '\r'))
        .count();

    (controls as f64 / window.len() as f64) <= max_ratio
}
