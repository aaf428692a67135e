use std::sync::Arc;

use super::cipher_errors::CipherError;
use super::cipher_traits::{CipherAlgorithm, SymmetricCipher};
use super::des_key_expansion::DesKeyExpansion;
use super::des_tables::{FP, IP};
use super::des_transformation::DesTransformation;
use super::encryption_transformation::EncryptionTransformation;
use super::feistel_network::FeistelNetwork;
use super::key_expansion::KeyExpansion;

pub const NUM_ROUNDS: usize = 16;
pub const BLOCK_BITS: u32 = 64;
pub const KEY_BITS: u32 = 64;

/// A DES-style cipher: initial permutation, a 16-round Feistel network,
/// final permutation. The key schedule and round transformation are
/// injected, the round keys are derived once per key and cached.
///
/// Block operations take `&self`, so one keyed instance can serve any
/// number of concurrent callers. Re-keying needs `&mut self`.
pub struct DES {
    feistel_network: FeistelNetwork,
    key_expansion: Arc<dyn KeyExpansion + Send + Sync>,
    round_keys: Vec<u64>,
}

impl DES {
    /// An unkeyed cipher from its two components. A key must be set before
    /// the first block operation.
    pub fn new(
        key_expansion: Arc<dyn KeyExpansion + Send + Sync>,
        transformation: Arc<dyn EncryptionTransformation + Send + Sync>,
    ) -> Self {
        DES {
            feistel_network: FeistelNetwork::new(NUM_ROUNDS, transformation),
            key_expansion,
            round_keys: Vec::new(),
        }
    }

    /// The standard composition, keyed and ready to use.
    pub fn with_key(key: u64) -> Self {
        let mut cipher = DES::new(Arc::new(DesKeyExpansion), Arc::new(DesTransformation));
        cipher.set_key_u64(key);
        cipher
    }

    pub fn set_key_u64(&mut self, key: u64) {
        self.round_keys = self.key_expansion.generate_round_keys(key);
    }

    pub fn encrypt_block(&self, block: u64) -> u64 {
        let permuted = IP.permute(block);
        let preoutput = self
            .feistel_network
            .encrypt_with_round_keys(permuted, &self.round_keys);
        FP.permute(preoutput)
    }

    pub fn decrypt_block(&self, block: u64) -> u64 {
        let permuted = IP.permute(block);
        let preoutput = self
            .feistel_network
            .decrypt_with_round_keys(permuted, &self.round_keys);
        FP.permute(preoutput)
    }
}

fn word_from_bytes(data: &[u8], expected_bits: u32) -> Result<u64, CipherError> {
    let bytes: [u8; 8] = data.try_into().map_err(|_| CipherError::InvalidInputWidth {
        expected_bits,
        // the reported bit count saturates for slices longer than u32 bits
        actual_bits: u32::try_from(data.len().saturating_mul(8)).unwrap_or(u32::MAX),
    })?;
    Ok(u64::from_be_bytes(bytes))
}

impl CipherAlgorithm for DES {
    fn encrypt(&self, data: &[u8]) -> Result<Vec<u8>, CipherError> {
        let block = word_from_bytes(data, BLOCK_BITS)?;
        Ok(self.encrypt_block(block).to_be_bytes().to_vec())
    }

    fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>, CipherError> {
        let block = word_from_bytes(data, BLOCK_BITS)?;
        Ok(self.decrypt_block(block).to_be_bytes().to_vec())
    }
}

impl SymmetricCipher for DES {
    fn set_key(&mut self, key: &[u8]) -> Result<(), CipherError> {
        let key = word_from_bytes(key, KEY_BITS)?;
        self.set_key_u64(key);
        Ok(())
    }
}

/// Encrypts one block, deriving the key schedule for this call. Callers
/// encrypting many blocks under one key should hold a [`DES`] instead.
pub fn encrypt(block: u64, key: u64) -> u64 {
    DES::with_key(key).encrypt_block(block)
}

/// Inverse of [`encrypt`] under the same key.
pub fn decrypt(block: u64, key: u64) -> u64 {
    DES::with_key(key).decrypt_block(block)
}
