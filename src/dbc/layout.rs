use crate::types::errors::LayoutError;

/// Verify that `(start_bit, length)` fits within the frame defined by `dlc`.
///
/// DBC assumptions:
/// - Intel: the field occupies bits `[start, start + len - 1]` on a linear
///   `0..(8*bytes-1)` plane.
/// - Motorola: map the DBC start bit (the MSB of the field) to the linear
///   index `lin = (start & !7) + (7 - (start & 7))`; the sawtooth walk then
///   covers `[lin .. lin + len - 1]` on the same plane.
pub fn check_signal_fits(
    dlc: u32,
    start_bit: u32,
    length: u32,
    little_endian: bool,
) -> Result<(), LayoutError> {
    let bytes: usize = match dlc {
        0..=8 => dlc as usize,
        9 => 12,
        10 => 16,
        11 => 20,
        12 => 24,
        13 => 32,
        14 => 48,
        15 => 64,
        _ => return Err(LayoutError::InvalidDlc { dlc }),
    };
    if length == 0 {
        return Err(LayoutError::ZeroBitLength);
    }
    let total_bits = bytes * 8;

    if little_endian {
        let start = start_bit as usize;
        let end = start + length as usize - 1;
        if end < total_bits {
            Ok(())
        } else {
            Err(LayoutError::IntelOutOfBounds {
                end,
                total_bits,
                dlc,
            })
        }
    } else {
        let s = start_bit as usize;
        let linearized_start = (s & !7) + (7 - (s & 7));
        let linearized_end = linearized_start + length as usize - 1;

        if linearized_start >= total_bits {
            return Err(LayoutError::MotorolaStartOutOfBounds {
                start: linearized_start,
                total_bits,
                dlc,
            });
        }
        if linearized_end >= total_bits {
            return Err(LayoutError::MotorolaEndOutOfBounds {
                end: linearized_end,
                total_bits,
                dlc,
            });
        }
        Ok(())
    }
}
