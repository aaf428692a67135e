use super::des_tables::{E, P, S_BOXES};
use super::encryption_transformation::EncryptionTransformation;

/// The DES round function: expansion, round-key mixing, S-box substitution,
/// final permutation.
pub struct DesTransformation;

impl EncryptionTransformation for DesTransformation {
    fn transform(&self, half_block: u32, round_key: u64) -> u32 {
        let mixed = E.permute(half_block as u64) ^ round_key;

        // Eight 6-bit groups, group 0 the most significant. Row is the
        // outer bit pair (b0, b5), column the middle four (b1..b4).
        let mut substituted = 0u32;
        for (group, sbox) in S_BOXES.iter().enumerate() {
            let six = ((mixed >> (42 - 6 * group as u32)) & 0x3F) as usize;
            let row = ((six >> 4) & 0b10) | (six & 0b01);
            let column = (six >> 1) & 0xF;
            substituted = (substituted << 4) | sbox[row][column] as u32;
        }

        P.permute(substituted as u64) as u32
    }
}
