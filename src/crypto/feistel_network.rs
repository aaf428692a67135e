use std::sync::Arc;

use super::encryption_transformation::EncryptionTransformation;

/// A balanced Feistel network over 64-bit blocks split into 32-bit halves.
///
/// Decryption never inverts the round transformation. Both directions run
/// the same loop; the only difference is the order the round keys are
/// consumed in.
pub struct FeistelNetwork {
    num_rounds: usize,
    transformation: Arc<dyn EncryptionTransformation + Send + Sync>,
}

impl FeistelNetwork {
    pub fn new(
        num_rounds: usize,
        transformation: Arc<dyn EncryptionTransformation + Send + Sync>,
    ) -> Self {
        FeistelNetwork {
            num_rounds,
            transformation,
        }
    }

    pub fn num_rounds(&self) -> usize {
        self.num_rounds
    }

    pub fn encrypt_with_round_keys(&self, block: u64, round_keys: &[u64]) -> u64 {
        assert_eq!(
            round_keys.len(),
            self.num_rounds,
            "round key count must match the network's round count"
        );
        self.run_rounds(block, round_keys.iter().copied())
    }

    pub fn decrypt_with_round_keys(&self, block: u64, round_keys: &[u64]) -> u64 {
        assert_eq!(
            round_keys.len(),
            self.num_rounds,
            "round key count must match the network's round count"
        );
        self.run_rounds(block, round_keys.iter().rev().copied())
    }

    fn run_rounds(&self, block: u64, round_keys: impl Iterator<Item = u64>) -> u64 {
        let mut left = (block >> 32) as u32;
        let mut right = block as u32;

        for round_key in round_keys {
            let new_right = left ^ self.transformation.transform(right, round_key);
            left = right;
            right = new_right;
        }

        // The halves recombine swapped, which is what lets the same loop
        // with reversed keys act as the inverse.
        ((right as u64) << 32) | (left as u64)
    }
}
