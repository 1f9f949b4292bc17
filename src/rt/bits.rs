//! Bit-level packing and unpacking for CAN payloads.
//!
//! Two traversal orders exist in DBC:
//! - **Intel** (little-endian, `@1`): bit positions advance linearly from the
//!   start bit; bit `i` of the raw value lives at absolute bit `start + i`.
//! - **Motorola** (big-endian, `@0`): the start bit is the MSB of the field
//!   and the walk follows DBC's sawtooth numbering: within a byte the bit
//!   index decreases, and at bit 0 it jumps 15 positions forward into the
//!   next byte. A plain byte-order flip is *not* equivalent.

/// Extracts `length` bits starting at `start_bit` as an unsigned raw value.
///
/// Bytes beyond the end of `data` read as zero; classic CAN caps frames at
/// 8 bytes and decode never validates the supplied length (accepted
/// non-goal).
pub fn extract_bits(data: &[u8], start_bit: u32, length: u32, little_endian: bool) -> u64 {
    debug_assert!(length >= 1 && length <= 64);
    let mut raw: u64 = 0;
    if little_endian {
        for i in 0..length {
            let abs_bit = start_bit + i;
            let byte_index = (abs_bit / 8) as usize;
            let bit_index = abs_bit % 8;
            let bit = (data.get(byte_index).copied().unwrap_or(0) >> bit_index) & 0x1;
            raw |= (bit as u64) << i;
        }
    } else {
        let mut abs_bit = start_bit;
        for _ in 0..length {
            let byte_index = (abs_bit / 8) as usize;
            let bit_index = abs_bit % 8;
            let bit = (data.get(byte_index).copied().unwrap_or(0) >> bit_index) & 0x1;
            raw = (raw << 1) | bit as u64;
            if bit_index == 0 {
                abs_bit += 15;
            } else {
                abs_bit -= 1;
            }
        }
    }
    raw
}

/// Sign-extends a `length`-bit raw value to `i64`.
pub fn sign_extend(raw: u64, length: u32) -> i64 {
    if length > 0 && length < 64 && (raw >> (length - 1)) & 0x1 == 1 {
        (raw | (!0u64) << length) as i64
    } else {
        raw as i64
    }
}

/// Writes the low `length` bits of `raw` into `buf` starting at `start_bit`,
/// preserving every untouched bit of partially-occupied bytes.
pub fn insert_bits(buf: &mut [u8], start_bit: u32, length: u32, little_endian: bool, raw: u64) {
    debug_assert!(length >= 1 && length <= 64);
    if little_endian {
        for i in 0..length {
            let abs_bit = start_bit + i;
            let byte_index = (abs_bit / 8) as usize;
            let bit_index = abs_bit % 8;
            let bit = ((raw >> i) & 0x1) as u8;
            if let Some(b) = buf.get_mut(byte_index) {
                *b = (*b & !(1 << bit_index)) | (bit << bit_index);
            }
        }
    } else {
        let mut abs_bit = start_bit;
        for i in 0..length {
            let byte_index = (abs_bit / 8) as usize;
            let bit_index = abs_bit % 8;
            let bit = ((raw >> (length - 1 - i)) & 0x1) as u8;
            if let Some(b) = buf.get_mut(byte_index) {
                *b = (*b & !(1 << bit_index)) | (bit << bit_index);
            }
            if bit_index == 0 {
                abs_bit += 15;
            } else {
                abs_bit -= 1;
            }
        }
    }
}

/// Clamps a signed raw value to the representable range of `length` bits and
/// masks it down for insertion.
pub fn clamp_signed(raw: i64, length: u32) -> u64 {
    let (min, max) = if length >= 64 {
        (i64::MIN, i64::MAX)
    } else {
        (-(1i64 << (length - 1)), (1i64 << (length - 1)) - 1)
    };
    let clamped = raw.clamp(min, max);
    let mask = if length >= 64 { !0u64 } else { (1u64 << length) - 1 };
    (clamped as u64) & mask
}

/// Clamps an unsigned raw value to the representable range of `length` bits.
pub fn clamp_unsigned(raw: u64, length: u32) -> u64 {
    let max = if length >= 64 { !0u64 } else { (1u64 << length) - 1 };
    raw.min(max)
}

/// Converts a physical value back to a raw field value: divide out
/// scale/offset, round half away from zero, clamp to the representable
/// signed/unsigned range for `length` bits.
pub fn to_raw(value: f64, scale: f64, offset: f64, length: u32, is_signed: bool) -> u64 {
    let raw_d = (value - offset) / scale;
    let rounded = if raw_d >= 0.0 {
        (raw_d + 0.5).floor()
    } else {
        (raw_d - 0.5).ceil()
    };
    if is_signed {
        clamp_signed(rounded as i64, length)
    } else if rounded < 0.0 {
        0
    } else {
        clamp_unsigned(rounded as u64, length)
    }
}
