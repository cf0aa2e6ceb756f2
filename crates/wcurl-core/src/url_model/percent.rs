//! Selective percent-decoding for derived filenames.

/// Decodes `%XY` sequences in `input`.
///
/// A sequence is left as-is when `decode` is false or when it encodes a
/// control byte (`0x00..=0x1F`), so filenames never gain unprintable
/// characters. Malformed sequences pass through literally; only the `%`
/// is consumed, so a valid pair right after it is still decoded. Decoded
/// bytes that are not valid UTF-8 are replaced with U+FFFD.
pub fn percent_decode(input: &str, decode: bool) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            if let Some(value) = hex_pair(bytes.get(i + 1..i + 3)) {
                if decode && value > 0x1F {
                    out.push(value);
                } else {
                    out.extend_from_slice(&bytes[i..i + 3]);
                }
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_pair(pair: Option<&[u8]>) -> Option<u8> {
    match pair? {
        [high, low] => Some(hex_digit(*high)? << 4 | hex_digit(*low)?),
        _ => None,
    }
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
