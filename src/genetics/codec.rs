//! Fixed-width sign-magnitude integer codec.
//!
//! Every integer is rendered as a 5-bit code: one sign bit (`1` for negative)
//! followed by four magnitude bits, most significant first. A sequence of
//! integers is the plain concatenation of their codes.

use crate::error::{NetError, Result};

/// Bits per encoded integer (sign + magnitude)
pub const CODE_WIDTH: usize = 5;

/// Bits used for the magnitude
pub const MAGNITUDE_BITS: usize = 4;

/// Largest magnitude representable in `MAGNITUDE_BITS`
pub const MAX_MAGNITUDE: i32 = (1 << MAGNITUDE_BITS) - 1;

/// Smallest encodable value
pub const MIN_VALUE: i32 = -MAX_MAGNITUDE;

/// Largest encodable value
pub const MAX_VALUE: i32 = MAX_MAGNITUDE;

/// Check that a value fits in the codec domain `[-15, 15]`
#[inline]
pub fn check_range(value: i32) -> Result<i32> {
    if (MIN_VALUE..=MAX_VALUE).contains(&value) {
        Ok(value)
    } else {
        Err(NetError::OutOfRange {
            value: i64::from(value),
            min: MIN_VALUE,
            max: MAX_VALUE,
        })
    }
}

/// Append the code for `value` to `out`
fn push_code(out: &mut String, value: i32) -> Result<()> {
    check_range(value)?;

    out.push(if value < 0 { '1' } else { '0' });
    let magnitude = value.unsigned_abs();
    for bit in (0..MAGNITUDE_BITS).rev() {
        out.push(if (magnitude >> bit) & 1 == 1 { '1' } else { '0' });
    }
    Ok(())
}

/// Encode one integer as a 5-character code
pub fn encode_int(value: i32) -> Result<String> {
    let mut code = String::with_capacity(CODE_WIDTH);
    push_code(&mut code, value)?;
    Ok(code)
}

/// Decode one 5-character code
pub fn decode_int(code: &str) -> Result<i32> {
    let bytes = code.as_bytes();
    if bytes.len() != CODE_WIDTH {
        return Err(NetError::MalformedBitstring(format!(
            "code must be {} bits, got {}",
            CODE_WIDTH,
            bytes.len()
        )));
    }
    decode_bits(bytes, 0)
}

/// Decode the code that starts at bit `offset` of the full bitstring.
/// `offset` only feeds the error messages.
fn decode_bits(bits: &[u8], offset: usize) -> Result<i32> {
    let mut magnitude = 0i32;
    for (i, &bit) in bits[1..].iter().enumerate() {
        magnitude = (magnitude << 1) | bit_value(bit, offset + 1 + i)?;
    }

    let negative = bit_value(bits[0], offset)? == 1;
    if negative && magnitude == 0 {
        // 10000 would decode to 0 and re-encode as 00000
        return Err(NetError::MalformedBitstring(format!(
            "negative zero at bit {}",
            offset
        )));
    }

    Ok(if negative { -magnitude } else { magnitude })
}

#[inline]
fn bit_value(bit: u8, position: usize) -> Result<i32> {
    match bit {
        b'0' => Ok(0),
        b'1' => Ok(1),
        other => Err(NetError::MalformedBitstring(format!(
            "unexpected character {:?} at bit {}",
            char::from(other),
            position
        ))),
    }
}

/// Encode a sequence of integers into one concatenated bitstring
pub fn encode_sequence(values: &[i32]) -> Result<String> {
    let mut out = String::with_capacity(values.len() * CODE_WIDTH);
    for &value in values {
        push_code(&mut out, value)?;
    }
    Ok(out)
}

/// Decode a bitstring into its integers, preserving order
pub fn decode_sequence(bitstring: &str) -> Result<Vec<i32>> {
    let bytes = bitstring.as_bytes();
    if bytes.len() % CODE_WIDTH != 0 {
        return Err(NetError::MalformedBitstring(format!(
            "length {} is not a multiple of {}",
            bytes.len(),
            CODE_WIDTH
        )));
    }

    bytes
        .chunks_exact(CODE_WIDTH)
        .enumerate()
        .map(|(i, chunk)| decode_bits(chunk, i * CODE_WIDTH))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_known_codes() {
        assert_eq!(encode_int(0).unwrap(), "00000");
        assert_eq!(encode_int(1).unwrap(), "00001");
        assert_eq!(encode_int(-1).unwrap(), "10001");
        assert_eq!(encode_int(10).unwrap(), "01010");
        assert_eq!(encode_int(-10).unwrap(), "11010");
        assert_eq!(encode_int(15).unwrap(), "01111");
        assert_eq!(encode_int(-15).unwrap(), "11111");
    }

    #[test]
    fn test_msb_first_weights() {
        // The bit next to the sign carries weight 8
        assert_eq!(decode_int("01000").unwrap(), 8);
        assert_eq!(decode_int("00001").unwrap(), 1);
        assert_eq!(decode_int("10110").unwrap(), -6);
    }

    #[test]
    fn test_int_roundtrip_full_domain() {
        for v in MIN_VALUE..=MAX_VALUE {
            let code = encode_int(v).unwrap();
            assert_eq!(code.len(), CODE_WIDTH);
            assert_eq!(decode_int(&code).unwrap(), v);
        }
    }

    #[test]
    fn test_out_of_range() {
        assert!(matches!(
            encode_int(16),
            Err(NetError::OutOfRange { value: 16, .. })
        ));
        assert!(matches!(
            encode_int(-16),
            Err(NetError::OutOfRange { value: -16, .. })
        ));
        assert!(encode_sequence(&[1, 2, 99]).is_err());
    }

    #[test]
    fn test_sequence_layout() {
        let bits = encode_sequence(&[1, -2, 0]).unwrap();
        assert_eq!(bits, "000011001000000");
        assert_eq!(decode_sequence(&bits).unwrap(), vec![1, -2, 0]);
        assert_eq!(encode_sequence(&[]).unwrap(), "");
        assert!(decode_sequence("").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_inputs() {
        assert!(matches!(
            decode_sequence("0000"),
            Err(NetError::MalformedBitstring(_))
        ));
        assert!(matches!(
            decode_sequence("00002"),
            Err(NetError::MalformedBitstring(_))
        ));
        assert!(matches!(
            decode_int("000001"),
            Err(NetError::MalformedBitstring(_))
        ));
        assert!(matches!(
            decode_int("10000"),
            Err(NetError::MalformedBitstring(_))
        ));
    }

    #[test]
    fn test_check_range() {
        assert_eq!(check_range(-15).unwrap(), -15);
        assert_eq!(check_range(15).unwrap(), 15);
        assert!(check_range(i32::MIN).is_err());
    }
}
