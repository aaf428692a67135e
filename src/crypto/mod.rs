pub mod feistel_network;
pub mod des;
pub mod key_expansion;
pub mod encryption_transformation;
pub mod cipher_traits;
pub mod cipher_errors;
pub mod bit_permutation;
pub mod des_tables;
pub mod des_transformation;
pub mod des_key_expansion;
