use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CipherError {
    /// A byte-level entry point received data of the wrong width.
    #[error("invalid input width: expected {expected_bits} bits, got {actual_bits}")]
    InvalidInputWidth { expected_bits: u32, actual_bits: u32 },

    /// A permutation table references a bit outside its declared input.
    #[error(
        "invalid permutation table {table}: entry {entry} at position {position} \
         is outside 1..={input_width}"
    )]
    InvalidTable {
        table: &'static str,
        position: usize,
        entry: usize,
        input_width: u32,
    },
}
