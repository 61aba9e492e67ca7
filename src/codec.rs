use std::borrow::Cow;

use base64::{Engine, engine::general_purpose};

use crate::error::DecodeError;

/// Prefix of the message returned by [`decode_base64_message`] on failure.
pub const DECODE_ERROR_PREFIX: &str = "解码错误";

/// Base64 encode helper
pub fn encode_base64(input: &str) -> String {
    log::debug!("Encoding {} bytes to base64", input.len());
    general_purpose::STANDARD.encode(input.as_bytes())
}

/// Base64 decode helper.
///
/// ASCII whitespace is dropped first so wrapped (MIME style) input decodes the
/// same as a single line. Padding must be canonical.
pub fn decode_base64(input: &str) -> Result<String, DecodeError> {
    log::debug!("Decoding base64 input: {input}");
    let compact = strip_whitespace(input);

    let bytes = general_purpose::STANDARD.decode(compact.as_bytes())?;
    let text = String::from_utf8(bytes)?;
    Ok(text)
}

/// Decode and fold any failure into a readable message instead of an error.
pub fn decode_base64_message(input: &str) -> String {
    match decode_base64(input) {
        Ok(text) => text,
        Err(e) => {
            log::debug!("Base64 decode failed: {e}");
            format!("{DECODE_ERROR_PREFIX}: {e}")
        }
    }
}

fn strip_whitespace(input: &str) -> Cow<'_, str> {
    if input.bytes().any(|b| b.is_ascii_whitespace()) {
        Cow::Owned(
            input
                .chars()
                .filter(|c| !c.is_ascii_whitespace())
                .collect(),
        )
    } else {
        Cow::Borrowed(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_known_values() {
        assert_eq!(encode_base64("hello"), "aGVsbG8=");
        assert_eq!(decode_base64("aGVsbG8=").unwrap(), "hello");
        assert_eq!(encode_base64("foobar"), "Zm9vYmFy");
        assert_eq!(encode_base64("fo"), "Zm8=");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(encode_base64(""), "");
        assert_eq!(decode_base64("").unwrap(), "");
    }

    #[test]
    fn test_encode_is_deterministic() {
        let s = "The quick brown fox jumps over the lazy dog";
        assert_eq!(encode_base64(s), encode_base64(s));
    }

    #[test]
    fn test_encoded_length_is_padded_to_four() {
        for n in 0..32 {
            let s = "x".repeat(n);
            assert_eq!(encode_base64(&s).len() % 4, 0, "Failed for length: {n}");
        }
    }

    #[test]
    fn test_round_trip_unicode() {
        let test_cases = [
            "",
            "a",
            "你好，世界",
            "解码结果",
            "emoji \u{1F600} and \u{2603}",
            "line\nbreaks\tand\0nul",
        ];

        for input in test_cases {
            let encoded = encode_base64(input);
            assert_eq!(
                decode_base64(&encoded).unwrap(),
                input,
                "Round-trip failed for input {input:?}"
            );
        }
    }

    #[test]
    fn test_round_trip_random_strings() {
        let mut rng = StdRng::seed_from_u64(42);

        for size in [1usize, 7, 64, 513, 4096] {
            let input: String = (0..size).map(|_| rng.r#gen::<char>()).collect();
            let encoded = encode_base64(&input);
            assert_eq!(decode_base64(&encoded).unwrap(), input, "Failed for size: {size}");
        }
    }

    #[test]
    fn test_decode_invalid_characters() {
        let invalid_inputs = ["!!!not-base64!!!", "aGVs$G8=", "aGVsbG8", "abcd====", "a"];

        for input in invalid_inputs {
            let result = decode_base64(input);
            assert!(
                matches!(result, Err(DecodeError::InvalidBase64(_))),
                "Invalid input '{input}' should be rejected as base64"
            );
        }
    }

    #[test]
    fn test_decode_non_utf8_bytes() {
        // "/w==" is the single byte 0xFF
        let result = decode_base64("/w==");
        assert!(matches!(result, Err(DecodeError::InvalidUtf8(_))));
    }

    #[test]
    fn test_decode_ignores_line_wraps() {
        assert_eq!(decode_base64("aGVs\nbG8=").unwrap(), "hello");
        assert_eq!(decode_base64("  aGVsbG8=\r\n").unwrap(), "hello");
    }

    #[test]
    fn test_decode_message_success_and_failure() {
        assert_eq!(decode_base64_message("aGVsbG8="), "hello");

        let msg = decode_base64_message("!!!not-base64!!!");
        assert!(msg.starts_with("解码错误: "), "unexpected message: {msg}");

        let msg = decode_base64_message("/w==");
        assert!(msg.starts_with("解码错误: "), "unexpected message: {msg}");
        assert!(msg.contains("UTF-8"));
    }
}
