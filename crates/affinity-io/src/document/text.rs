/// Decode raw bytes as UTF-8, falling back to Latin-1.
///
/// Latin-1 maps every byte to the code point of the same value, so the
/// fallback cannot fail. A leading UTF-8 byte-order mark is dropped.
pub(crate) fn decode_text(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => match text.strip_prefix('\u{feff}') {
            Some(rest) => rest.to_string(),
            None => text,
        },
        Err(e) => {
            tracing::debug!(
                valid_up_to = e.utf8_error().valid_up_to(),
                "document is not valid UTF-8; decoding as Latin-1"
            );
            e.into_bytes().into_iter().map(char::from).collect()
        }
    }
}
