// Per-query correction-position parameters.

use crate::CorrectError;

/// Which correction operations are permitted for one query, and at which
/// single typed-input position each applies.
///
/// `None` disables that correction kind for the query. The engine performs no
/// search over positions itself: the caller selects candidate positions and
/// issues one query per choice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CorrectionParams {
    /// The typing missed a dictionary character at this input position.
    pub skip_pos: Option<usize>,
    /// The typed character at this position is spurious.
    pub excessive_pos: Option<usize>,
    /// The typed characters at this position and the next are swapped.
    pub transposed_pos: Option<usize>,
    /// The typed character at this position is a stray press of a key next
    /// to the space bar.
    pub space_proximity_pos: Option<usize>,
    /// A space is missing at this position; the input is two words.
    pub missing_space_pos: Option<usize>,
}

impl CorrectionParams {
    /// No corrections: exact and adjacent-key matching only.
    pub fn exact() -> Self {
        Self::default()
    }

    pub fn skip(pos: usize) -> Self {
        Self { skip_pos: Some(pos), ..Self::default() }
    }

    pub fn excessive(pos: usize) -> Self {
        Self { excessive_pos: Some(pos), ..Self::default() }
    }

    pub fn transposed(pos: usize) -> Self {
        Self { transposed_pos: Some(pos), ..Self::default() }
    }

    pub fn space_proximity(pos: usize) -> Self {
        Self { space_proximity_pos: Some(pos), ..Self::default() }
    }

    pub fn missing_space(pos: usize) -> Self {
        Self { missing_space_pos: Some(pos), ..Self::default() }
    }

    fn configured(&self) -> [Option<usize>; 5] {
        [
            self.skip_pos,
            self.excessive_pos,
            self.transposed_pos,
            self.space_proximity_pos,
            self.missing_space_pos,
        ]
    }

    /// Check the parameters against the typed-input length: every configured
    /// position must address a typed character, a transposition additionally
    /// needs a successor to swap with, and positions are mutually exclusive
    /// across kinds.
    pub(crate) fn validate(&self, input_length: usize) -> Result<(), CorrectError> {
        let positions = self.configured();
        for pos in positions.into_iter().flatten() {
            if pos >= input_length {
                return Err(CorrectError::PositionOutOfRange { pos, len: input_length });
            }
        }
        if let Some(pos) = self.transposed_pos {
            if pos + 1 >= input_length {
                return Err(CorrectError::PositionOutOfRange { pos, len: input_length });
            }
        }
        for (i, a) in positions.iter().enumerate() {
            for b in &positions[i + 1..] {
                if let (Some(a), Some(b)) = (a, b) {
                    if a == b {
                        return Err(CorrectError::OverlappingPositions { pos: *a });
                    }
                }
            }
        }
        Ok(())
    }
}
