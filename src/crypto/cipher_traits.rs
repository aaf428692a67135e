use super::cipher_errors::CipherError;

/// A block cipher over big-endian byte slices.
pub trait CipherAlgorithm {
    fn encrypt(&self, data: &[u8]) -> Result<Vec<u8>, CipherError>;
    fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>, CipherError>;
}

/// A cipher whose key can be (re)set after construction.
pub trait SymmetricCipher: CipherAlgorithm {
    fn set_key(&mut self, key: &[u8]) -> Result<(), CipherError>;
}
