/// Derives the per-round subkeys from a master key.
pub trait KeyExpansion {
    /// Returns one subkey per round, in encryption order.
    fn generate_round_keys(&self, key: u64) -> Vec<u64>;
}
