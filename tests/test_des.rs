use std::sync::Arc;

use feistel_des::crypto::cipher_errors::CipherError;
use feistel_des::crypto::cipher_traits::{CipherAlgorithm, SymmetricCipher};
use feistel_des::crypto::des::{DES, decrypt, encrypt};
use feistel_des::crypto::des_key_expansion::DesKeyExpansion;
use feistel_des::crypto::des_transformation::DesTransformation;

#[cfg(test)]
mod tests {
    use super::*;

    const BLOCK: u64 = 0x0123_4567_89AB_CDEF;
    const KEY: u64 = 0x1334_5779_9BBC_DFF1;

    #[test]
    fn test_byte_interface_round_trip() {
        let key = hex_literal::hex!("13 34 57 79 9B BC DF F1");
        let plaintext = hex_literal::hex!("01 23 45 67 89 AB CD EF");

        let mut des = DES::new(Arc::new(DesKeyExpansion), Arc::new(DesTransformation));
        des.set_key(&key).unwrap();

        let ciphertext = des.encrypt(&plaintext).unwrap();
        assert_eq!(ciphertext.len(), 8);
        assert_ne!(ciphertext, plaintext.to_vec());

        let decrypted = des.decrypt(&ciphertext).unwrap();
        assert_eq!(decrypted, plaintext.to_vec());
    }

    #[test]
    fn test_round_trip_scenarios() {
        let scenarios = [
            (0u64, 0u64),
            (u64::MAX, u64::MAX),
            (BLOCK, BLOCK),
            (BLOCK, KEY),
            (0, 1),
            (0xDEAD_BEEF_0123_4567, BLOCK),
        ];
        for (block, key) in scenarios {
            let ciphertext = encrypt(block, key);
            assert_ne!(ciphertext, block, "block {block:016X} key {key:016X}");
            assert_eq!(
                decrypt(ciphertext, key),
                block,
                "block {block:016X} key {key:016X}"
            );
        }
    }

    #[test]
    fn test_encryption_is_deterministic() {
        assert_eq!(encrypt(BLOCK, KEY), encrypt(BLOCK, KEY));
    }

    #[test]
    fn test_key_sensitivity() {
        let pairs = [
            (KEY, KEY ^ (1 << 62)),
            (KEY, KEY ^ 2),
            (0, 1 << 1),
            (BLOCK, BLOCK ^ (1 << 33)),
        ];
        for (k1, k2) in pairs {
            assert_ne!(encrypt(BLOCK, k1), encrypt(BLOCK, k2), "{k1:016X} vs {k2:016X}");
        }
    }

    #[test]
    fn test_parity_bits_are_ignored() {
        // the low bit of every key byte is dropped by the key selection
        let parity_mask = 0x0101_0101_0101_0101;
        assert_eq!(encrypt(BLOCK, KEY), encrypt(BLOCK, KEY ^ parity_mask));
    }

    #[test]
    fn test_plaintext_avalanche() {
        for (block, key) in [(BLOCK, KEY), (0u64, 0u64)] {
            let base = encrypt(block, key);
            for bit in 0..64 {
                let flipped = encrypt(block ^ (1 << bit), key);
                let changed = (base ^ flipped).count_ones();
                assert!(changed > 8, "bit {bit}: only {changed} bits changed");
            }
        }
    }

    #[test]
    fn test_key_avalanche() {
        for (block, key) in [(BLOCK, KEY), (0u64, 0u64)] {
            let base = encrypt(block, key);
            for bit in (0..64).filter(|bit| bit % 8 != 0) {
                let flipped = encrypt(block, key ^ (1 << bit));
                let changed = (base ^ flipped).count_ones();
                assert!(changed > 8, "key bit {bit}: only {changed} bits changed");
            }
        }
    }

    #[test]
    fn test_invalid_width_is_rejected() {
        let mut des = DES::with_key(KEY);
        assert_eq!(
            des.encrypt(&[0u8; 7]),
            Err(CipherError::InvalidInputWidth {
                expected_bits: 64,
                actual_bits: 56,
            })
        );
        assert_eq!(
            des.decrypt(&[0u8; 9]),
            Err(CipherError::InvalidInputWidth {
                expected_bits: 64,
                actual_bits: 72,
            })
        );
        assert_eq!(
            des.set_key(&[]),
            Err(CipherError::InvalidInputWidth {
                expected_bits: 64,
                actual_bits: 0,
            })
        );
    }

    #[test]
    fn test_width_error_reports_large_slices() {
        let des = DES::with_key(KEY);
        assert_eq!(
            des.encrypt(&[0u8; 16]),
            Err(CipherError::InvalidInputWidth {
                expected_bits: 64,
                actual_bits: 128,
            })
        );

        // the bit count of a 2^29-byte slice no longer fits in u32
        let huge = vec![0u8; 1 << 29];
        assert_eq!(
            des.encrypt(&huge),
            Err(CipherError::InvalidInputWidth {
                expected_bits: 64,
                actual_bits: u32::MAX,
            })
        );
    }

    #[test]
    fn test_free_functions_match_a_keyed_instance() {
        let cipher = DES::with_key(KEY);
        assert_eq!(encrypt(BLOCK, KEY), cipher.encrypt_block(BLOCK));
        let ciphertext = cipher.encrypt_block(BLOCK);
        assert_eq!(decrypt(ciphertext, KEY), cipher.decrypt_block(ciphertext));
    }

    #[test]
    fn test_rekeying_replaces_the_schedule() {
        let mut cipher = DES::with_key(KEY);
        let first = cipher.encrypt_block(BLOCK);

        cipher.set_key_u64(KEY ^ 2);
        assert_ne!(cipher.encrypt_block(BLOCK), first);

        cipher.set_key_u64(KEY);
        assert_eq!(cipher.encrypt_block(BLOCK), first);
    }

    #[test]
    fn test_shared_instance_serves_parallel_callers() {
        use rayon::prelude::*;

        let cipher = DES::with_key(BLOCK);
        (0..512u64).into_par_iter().for_each(|i| {
            let block = i.wrapping_mul(0x9E37_79B9_7F4A_7C15);
            let ciphertext = cipher.encrypt_block(block);
            assert_eq!(cipher.decrypt_block(ciphertext), block);
        });
    }

    #[test]
    fn test_random_round_trips() {
        use rand::RngCore;

        let mut rng = rand::rng();
        for _ in 0..100 {
            let block = rng.next_u64();
            let key = rng.next_u64();
            assert_eq!(decrypt(encrypt(block, key), key), block);
        }
    }

    #[test]
    #[should_panic(expected = "round key count")]
    fn test_block_operation_before_keying_panics() {
        let des = DES::new(Arc::new(DesKeyExpansion), Arc::new(DesTransformation));
        des.encrypt_block(BLOCK);
    }
}
