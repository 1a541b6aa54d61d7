/// Encode text as UTF-8 bytes.
pub fn text_to_bytes(text: &str) -> Vec<u8> {
    text.as_bytes().to_vec()
}

/// Decode UTF-8 bytes as text.  Malformed sequences are replaced with U+FFFD rather than
/// producing an error.
pub fn bytes_to_text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
