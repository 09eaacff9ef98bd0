use rand::{Rng, RngCore};

/// Source of uniformly distributed integers used for every random choice
/// made by a chain.
///
/// Any `rand` generator is a `RandomSource`, so seeding a `StdRng` gives
/// reproducible output. Plain closures can be used through `DrawFn`.
pub trait RandomSource {
	/// Draws an integer in `min..max` (`min` inclusive, `max` exclusive).
	///
	/// Callers always pass `min < max`.
	fn draw(&mut self, min: usize, max: usize) -> usize;
}

impl<R: RngCore> RandomSource for R {
	fn draw(&mut self, min: usize, max: usize) -> usize {
		self.random_range(min..max)
	}
}

/// Adapts a `(min, max_exclusive) -> value` closure into a `RandomSource`.
///
/// Mostly useful in tests, to script the exact draws a chain sees.
pub struct DrawFn<F>(pub F);

impl<F: FnMut(usize, usize) -> usize> RandomSource for DrawFn<F> {
	fn draw(&mut self, min: usize, max: usize) -> usize {
		(self.0)(min, max)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	#[test]
	fn rng_draws_stay_in_range() {
		let mut rng = StdRng::seed_from_u64(7);
		for _ in 0..1000 {
			let value = rng.draw(3, 9);
			assert!((3..9).contains(&value));
		}
	}

	#[test]
	fn seeded_draws_are_reproducible() {
		let mut a = StdRng::seed_from_u64(42);
		let mut b = StdRng::seed_from_u64(42);
		let first: Vec<usize> = (0..32).map(|_| a.draw(0, 100)).collect();
		let second: Vec<usize> = (0..32).map(|_| b.draw(0, 100)).collect();
		assert_eq!(first, second);
	}

	#[test]
	fn draw_fn_forwards_bounds() {
		let mut seen = Vec::new();
		let mut source = DrawFn(|min: usize, max: usize| {
			seen.push((min, max));
			max - 1
		});
		assert_eq!(source.draw(0, 4), 3);
		assert_eq!(source.draw(2, 3), 2);
		drop(source);
		assert_eq!(seen, vec![(0, 4), (2, 3)]);
	}
}
