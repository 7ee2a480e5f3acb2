/*!
# Utilities

Small helper traits shared by generators and statistics.
You probably do not need to interact with this module directly.
*/

use num::{One, Zero};

use crate::error::{GraphError, Result};

/// Helper trait for probabilities
pub trait Probability {
    /// Returns *true* if the probability is valid (ie. between `0` and `1`)
    fn is_valid_probability(&self) -> bool;
}

impl<P> Probability for P
where
    P: Zero + One + PartialOrd,
{
    fn is_valid_probability(&self) -> bool {
        Self::zero().le(self) && Self::one().ge(self)
    }
}

/// Returns `Err(InvalidParameter)` if `p` is not a probability
pub(crate) fn check_probability(name: &'static str, p: f64) -> Result<()> {
    if p.is_valid_probability() {
        Ok(())
    } else {
        Err(GraphError::invalid_parameter(
            name,
            format!("{p} is not a probability in [0, 1]"),
        ))
    }
}

/// Returns the binomial coefficient `C(n, k)` as a float, `0` if `k > n`.
///
/// Every intermediate value is itself a binomial coefficient, so results below `2^53` are exact.
/// Larger results lose precision and overflow to infinity instead of panicking.
pub(crate) fn binomial_coefficient(n: usize, k: usize) -> f64 {
    if k > n {
        return 0.0;
    }

    let k = k.min(n - k);
    (0..k).fold(1.0, |acc, i| acc * (n - i) as f64 / (i + 1) as f64)
}
