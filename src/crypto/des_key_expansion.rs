use super::des_tables::{PC1, PC2, SHIFT_BITS};
use super::key_expansion::KeyExpansion;

const HALF_WIDTH: u32 = 28;
const HALF_MASK: u64 = (1 << HALF_WIDTH) - 1;

/// Rotates the low 28 bits of `half` left by `by`, ignoring bits above
/// bit 27 of the input. 28 is not a machine word width, so the wrap is
/// done by hand instead of `u32::rotate_left`. `by` must not exceed 28.
pub fn rotate_left_28(half: u64, by: u32) -> u64 {
    debug_assert!(by <= HALF_WIDTH, "rotation amount exceeds the 28-bit width");
    let half = half & HALF_MASK;
    ((half << by) | (half >> (HALF_WIDTH - by))) & HALF_MASK
}

/// The DES key schedule: PC-1 selection, sixteen accumulating rotations of
/// the C and D halves, PC-2 selection per round.
pub struct DesKeyExpansion;

impl KeyExpansion for DesKeyExpansion {
    fn generate_round_keys(&self, key: u64) -> Vec<u64> {
        let selected = PC1.permute(key);
        let mut c = (selected >> HALF_WIDTH) & HALF_MASK;
        let mut d = selected & HALF_MASK;

        let mut round_keys = Vec::with_capacity(SHIFT_BITS.len());
        for &shift in SHIFT_BITS.iter() {
            c = rotate_left_28(c, shift);
            d = rotate_left_28(d, shift);
            round_keys.push(PC2.permute((c << HALF_WIDTH) | d));
        }
        round_keys
    }
}
