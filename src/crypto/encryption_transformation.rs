/// The round function of a Feistel network.
pub trait EncryptionTransformation {
    /// Maps one half-block under a round key. Never inverted: the network
    /// undoes it by XOR, so any function of `(half_block, round_key)` works.
    fn transform(&self, half_block: u32, round_key: u64) -> u32;
}
