use super::cipher_errors::CipherError;

/// A fixed bit-selection table over right-aligned values.
///
/// Entries are 1-based bit indices counted from the most significant bit of
/// the `input_width`-bit input. Output bit `i` (again counted from the most
/// significant bit, width `entries.len()`) is input bit `entries[i] - 1`.
/// Repeated entries expand, omitted entries compress, so the same type
/// covers IP/FP, E, P and the key-selection tables.
///
/// A table can only be obtained through validation, so `permute` never has
/// to range-check per call.
#[derive(Debug, Clone, Copy)]
pub struct PermutationTable {
    name: &'static str,
    input_width: u32,
    entries: &'static [usize],
}

impl PermutationTable {
    /// Checks every entry against `1..=input_width` and wraps the table.
    pub const fn validate(
        name: &'static str,
        input_width: u32,
        entries: &'static [usize],
    ) -> Result<Self, CipherError> {
        assert!(input_width >= 1 && input_width <= 64);
        assert!(entries.len() >= 1 && entries.len() <= 64);
        let mut position = 0;
        while position < entries.len() {
            let entry = entries[position];
            if entry < 1 || entry > input_width as usize {
                return Err(CipherError::InvalidTable {
                    table: name,
                    position,
                    entry,
                    input_width,
                });
            }
            position += 1;
        }
        Ok(Self {
            name,
            input_width,
            entries,
        })
    }

    /// Constructor for the built-in tables. Evaluated in `static` context,
    /// so a malformed table fails the build instead of a call.
    pub const fn new(name: &'static str, input_width: u32, entries: &'static [usize]) -> Self {
        match Self::validate(name, input_width, entries) {
            Ok(table) => table,
            Err(_) => panic!("malformed built-in permutation table"),
        }
    }

    /// Reorders `input` according to the table. Bits above `input_width`
    /// are ignored; the result is right-aligned at `output_width` bits.
    pub fn permute(&self, input: u64) -> u64 {
        let last = self.entries.len() as u32 - 1;
        let mut output = 0u64;
        for (position, &entry) in self.entries.iter().enumerate() {
            let bit = (input >> (self.input_width - entry as u32)) & 1;
            output |= bit << (last - position as u32);
        }
        output
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn input_width(&self) -> u32 {
        self.input_width
    }

    pub fn output_width(&self) -> u32 {
        self.entries.len() as u32
    }

    pub fn entries(&self) -> &'static [usize] {
        self.entries
    }
}
