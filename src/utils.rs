//! Small formatting helpers shared by the platform backends.

use std::net::Ipv4Addr;

/// Format an IPv4 address stored as a little-endian `u32` word
/// (lowest byte is the first octet), as console network services report it.
pub fn format_ipv4_le(word: u32) -> String {
    Ipv4Addr::from(word.to_le_bytes()).to_string()
}

/// Decode a packed language code (ASCII bytes, little-endian, NUL padded)
/// into a locale string such as `"en-US"`. Returns `None` if the code is
/// empty or not valid ASCII.
pub fn decode_language_code(code: u64) -> Option<String> {
    let bytes = code.to_le_bytes();
    let len = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    let name = &bytes[..len];

    if name.is_empty() || !name.is_ascii() {
        return None;
    }
    std::str::from_utf8(name).ok().map(str::to_owned)
}

/// Pack a locale string into a language code word. Inverse of
/// [`decode_language_code`]; strings longer than 8 bytes are truncated.
pub fn encode_language_code(locale: &str) -> u64 {
    let mut bytes = [0u8; 8];
    for (dst, src) in bytes.iter_mut().zip(locale.bytes()) {
        *dst = src;
    }
    u64::from_le_bytes(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ipv4_lowest_byte_is_first_octet() {
        assert_eq!(format_ipv4_le(0x0101_A8C0), "192.168.1.1");
        assert_eq!(format_ipv4_le(0), "0.0.0.0");
    }

    #[test]
    fn language_code_is_nul_trimmed() {
        let code = encode_language_code("en-GB");
        assert_eq!(decode_language_code(code).as_deref(), Some("en-GB"));
        assert_eq!(decode_language_code(encode_language_code("ja")).as_deref(), Some("ja"));
    }

    #[test]
    fn empty_or_binary_language_code_is_rejected() {
        assert_eq!(decode_language_code(0), None);
        assert_eq!(decode_language_code(u64::from_le_bytes([0xff, 0xfe, 0, 0, 0, 0, 0, 0])), None);
    }
}
