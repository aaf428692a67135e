pub mod crypto;

pub use crypto::bit_permutation::PermutationTable;
pub use crypto::cipher_errors::CipherError;
pub use crypto::cipher_traits::{CipherAlgorithm, SymmetricCipher};
pub use crypto::des::{DES, decrypt, encrypt};
pub use crypto::encryption_transformation::EncryptionTransformation;
pub use crypto::feistel_network::FeistelNetwork;
pub use crypto::key_expansion::KeyExpansion;
