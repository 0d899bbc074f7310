pub mod connection;
pub mod name;

/// Why a single record could not be scored. The record is dropped from that query only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ScoreError {
	#[error("Score {score} overflowed while adding weight {weight}.")]
	Overflow { score: u32, weight: u32 },
}

/// Additive score with checked arithmetic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScoreAccumulator(u32);
impl ScoreAccumulator {
	pub fn add(&mut self, weight: u32) -> Result<(), ScoreError> {
		self.0 = self.0.checked_add(weight).ok_or(ScoreError::Overflow { score: self.0, weight })?;

		Ok(())
	}

	pub fn add_if(&mut self, condition: bool, weight: u32) -> Result<(), ScoreError> {
		if condition {
			self.add(weight)?;
		}

		Ok(())
	}

	pub fn total(self) -> u32 {
		self.0
	}
}

#[cfg(test)]
mod tests {
	use super::{ScoreAccumulator, ScoreError};

	#[test]
	fn accumulates_only_true_conditions() {
		let mut score = ScoreAccumulator::default();

		score.add_if(true, 10).expect("No overflow.");
		score.add_if(false, 8).expect("No overflow.");
		score.add(5).expect("No overflow.");

		assert_eq!(score.total(), 15);
	}

	#[test]
	fn overflow_is_reported() {
		let mut score = ScoreAccumulator::default();

		score.add(u32::MAX).expect("No overflow yet.");

		assert_eq!(score.add(1), Err(ScoreError::Overflow { score: u32::MAX, weight: 1 }));
		assert_eq!(score.total(), u32::MAX);
	}
}
