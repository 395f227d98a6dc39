use base64::{
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
    Engine as _,
};

use crate::error::DecodeError;

const UTF8_BOM: &str = "\u{feff}";

/// Prefixes some providers put in front of the payload. Only the first
/// match is stripped.
const DATA_URL_PREFIXES: [&str; 5] = [
    "data:application/octet-stream;base64,",
    "data:text/plain;base64,",
    "data:application/x-yaml;base64,",
    "data:;base64,",
    "base64,",
];

const PADDED: GeneralPurposeConfig = GeneralPurposeConfig::new()
    .with_decode_allow_trailing_bits(true)
    .with_decode_padding_mode(DecodePaddingMode::RequireCanonical);

const UNPADDED: GeneralPurposeConfig = GeneralPurposeConfig::new()
    .with_encode_padding(false)
    .with_decode_allow_trailing_bits(true)
    .with_decode_padding_mode(DecodePaddingMode::RequireNone);

/// Decoding variants in the order they are tried.
const SUBSCRIPTION_ENGINES: [GeneralPurpose; 4] = [
    GeneralPurpose::new(&alphabet::STANDARD, PADDED),
    GeneralPurpose::new(&alphabet::STANDARD, UNPADDED),
    GeneralPurpose::new(&alphabet::URL_SAFE, PADDED),
    GeneralPurpose::new(&alphabet::URL_SAFE, UNPADDED),
];

/// Strip a BOM, a known data URL prefix and all space, tab, CR and LF
/// characters from a subscription body.
fn clean_subscription(input: &str) -> String {
    let mut content = input.strip_prefix(UTF8_BOM).unwrap_or(input);

    if let Some(rest) = DATA_URL_PREFIXES
        .iter()
        .find_map(|prefix| content.strip_prefix(prefix))
    {
        content = rest;
    }

    content
        .trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '\t' | '\n' | '\r'))
        .collect()
}

/// Decodes a subscription body that is expected to be Base64.
///
/// The standard and URL-safe alphabets are both accepted, with or without
/// padding. Line breaks and spaces anywhere in the payload are ignored.
///
/// # Returns
/// The decoded text, or [`DecodeError::NotBase64`] carrying the error of the
/// standard padded attempt when no variant accepts the input.
pub fn decode_subscription(input: &str) -> Result<String, DecodeError> {
    let cleaned = clean_subscription(input);

    let mut first_error = None;
    for engine in &SUBSCRIPTION_ENGINES {
        match engine.decode(&cleaned) {
            Ok(decoded) => return Ok(String::from_utf8_lossy(&decoded).into_owned()),
            Err(e) => {
                first_error.get_or_insert(e);
            }
        }
    }

    // The engine list is never empty, so an error was recorded above.
    Err(DecodeError::NotBase64(
        first_error.unwrap_or(base64::DecodeError::InvalidPadding),
    ))
}
