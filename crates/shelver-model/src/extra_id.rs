//! Bounded letter counter for collision disambiguation.

use crate::error::NameError;
use crate::record::HierarchyKey;

/// Issues `'a'`, `'b'`, `'c'`, ... in order, one per call.
///
/// One counter lives per collision group. The counter refuses to wrap past
/// `'z'`: the original rule never defined behavior beyond 26 colliding
/// records, so running out is reported as an error.
#[derive(Debug, Default)]
pub struct ExtraIdCounter {
    issued: u8,
}

impl ExtraIdCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next id for the given group key.
    pub fn next_id(&mut self, key: &HierarchyKey) -> Result<char, NameError> {
        if self.issued >= 26 {
            return Err(NameError::ExtraIdExhausted {
                key: key.to_string(),
            });
        }
        let id = char::from(b'a' + self.issued);
        self.issued += 1;
        Ok(id)
    }
}
