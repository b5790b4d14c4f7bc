//! Bit counting and byte mirroring on fixed-width unsigned integers.

/// Counts set bits by testing the low bit and shifting until zero.
pub fn count_bits(mut value: u32) -> i32 {
    let mut count = 0;
    while value != 0 {
        count += (value & 1) as i32;
        value >>= 1;
    }
    count
}

/// Mirrors the bit order of `b`: bit 0 becomes bit 7 and so on.
///
/// Three swap stages: nibbles, then 2-bit pairs, then single bits.
pub fn reverse_bits(mut b: u8) -> u8 {
    b = ((b & 0xF0) >> 4) | ((b & 0x0F) << 4);
    b = ((b & 0xCC) >> 2) | ((b & 0x33) << 2);
    b = ((b & 0xAA) >> 1) | ((b & 0x55) << 1);
    b
}

#[cfg(test)]
mod tests {
    use super::{count_bits, reverse_bits};

    #[test]
    fn count_bits_agrees_with_count_ones() {
        for value in [0u32, 1, 2, 3, 0x8000_0000, 0xDEAD_BEEF, 0x5555_5555, u32::MAX] {
            assert_eq!(count_bits(value), value.count_ones() as i32, "{value:#x}");
        }
    }

    #[test]
    fn reverse_bits_agrees_with_std() {
        for b in 0..=u8::MAX {
            assert_eq!(reverse_bits(b), b.reverse_bits(), "{b:#010b}");
        }
    }
}
