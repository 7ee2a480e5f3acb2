/*!
Differentially private k-star statistics based on the **Laplace mechanism**.

A statistic with sensitivity `Δ` (the maximal change when a single edge is added or removed) is
released as `value + Lap(Δ / ε)`, which is `ε`-differentially private.

- [`PrivateStatistics::noisy_k_star_count`] perturbs the exact count once (central model)
  with noise calibrated to `C(n - 1, k - 1)`.
- [`PrivateStatistics::private_k_star_count`] lets every vertex perturb its own contribution
  (local model). Degrees are truncated to `max_degree`, which bounds the sensitivity of a single
  report by `C(max_degree, k - 1)`.
*/

use rand::Rng;
use rand_distr::{Distribution, Exp};
use tracing::{debug, instrument};

use super::*;
use crate::utils::binomial_coefficient;

/// Draws a sample of the Laplace distribution centered at `0` with the given `scale`.
///
/// The sample is the difference of two independent exponentially distributed samples with rate `1 / scale`.
/// A scale of `0` deterministically returns `0`.
/// Fails with `InvalidParameter` if `scale` is negative or not finite.
///
/// # Examples
/// ```
/// use graphstats::algo::laplace_noise;
/// use rand::SeedableRng;
///
/// let rng = &mut rand::rngs::StdRng::seed_from_u64(1);
/// assert_eq!(laplace_noise(rng, 0.0).unwrap(), 0.0);
/// assert!(laplace_noise(rng, 2.0).unwrap().is_finite());
/// assert!(laplace_noise(rng, -1.0).is_err());
/// ```
pub fn laplace_noise<R: Rng>(rng: &mut R, scale: f64) -> Result<f64> {
    if !scale.is_finite() || scale < 0.0 {
        return Err(GraphError::invalid_parameter(
            "scale",
            format!("Laplace scale must be finite and non-negative, got {scale}"),
        ));
    }
    if scale == 0.0 {
        return Ok(0.0);
    }

    let exp = Exp::new(1.0 / scale)
        .map_err(|err| GraphError::invalid_parameter("scale", err.to_string()))?;
    Ok(exp.sample(rng) - exp.sample(rng))
}

/// Checks the privacy parameters shared by all mechanisms
fn check_mechanism(k: NumVertices, epsilon: f64) -> Result<()> {
    if k < 1 {
        return Err(GraphError::invalid_parameter(
            "k",
            "a k-star has at least one leaf",
        ));
    }
    if !epsilon.is_finite() || epsilon <= 0.0 {
        return Err(GraphError::invalid_parameter(
            "epsilon",
            format!("privacy budget must be finite and positive, got {epsilon}"),
        ));
    }
    Ok(())
}

/// Differentially private estimates of k-star counts.
pub trait PrivateStatistics: Motifs {
    /// Returns the k-star subgraph count perturbed with Laplace noise of scale `C(n - 1, k - 1) / epsilon`.
    ///
    /// Fails with `InvalidParameter` if `k < 1` or `epsilon` is not finite and positive.
    fn noisy_k_star_count<R: Rng>(&self, rng: &mut R, k: NumVertices, epsilon: f64) -> Result<f64>;

    /// Returns the sum of per-vertex reports `C(min(deg(v), max_degree), k) + Lap(C(max_degree, k - 1) / epsilon)`.
    ///
    /// Fails with `InvalidParameter` if `k < 1`, `max_degree < 1`, or `epsilon` is not finite and positive.
    ///
    /// # Examples
    /// ```
    /// use graphstats::{prelude::*, gens::*, algo::*};
    /// use rand::SeedableRng;
    ///
    /// let rng = &mut rand::rngs::StdRng::seed_from_u64(1);
    /// let mut g: Graph = Graph::from_vertices(0..50);
    /// g.make_regular(3).unwrap();
    ///
    /// let exact = g.k_star_subgraph_count(2);
    /// let estimate = g.private_k_star_count(rng, 2, 1.0, 4).unwrap();
    /// assert!((estimate - exact).abs() < 200.0);
    /// ```
    fn private_k_star_count<R: Rng>(
        &self,
        rng: &mut R,
        k: NumVertices,
        epsilon: f64,
        max_degree: NumVertices,
    ) -> Result<f64>;
}

impl<G> PrivateStatistics for G
where
    G: Motifs,
{
    #[instrument(level = "debug", skip(self, rng))]
    fn noisy_k_star_count<R: Rng>(&self, rng: &mut R, k: NumVertices, epsilon: f64) -> Result<f64> {
        check_mechanism(k, epsilon)?;

        let n = self.number_of_vertices().saturating_sub(1);
        let sensitivity = binomial_coefficient(n, k - 1);
        let stars = self.k_star_subgraph_count(k);

        let noise = laplace_noise(rng, sensitivity / epsilon)?;
        debug!(stars, sensitivity, noise, "released noisy k-star count");
        Ok(stars + noise)
    }

    #[instrument(level = "debug", skip(self, rng))]
    fn private_k_star_count<R: Rng>(
        &self,
        rng: &mut R,
        k: NumVertices,
        epsilon: f64,
        max_degree: NumVertices,
    ) -> Result<f64> {
        check_mechanism(k, epsilon)?;
        if max_degree < 1 {
            return Err(GraphError::invalid_parameter(
                "max_degree",
                "degree bound must be at least 1",
            ));
        }

        let sensitivity = binomial_coefficient(max_degree, k - 1);
        let scale = sensitivity / epsilon;

        // one report per vertex, in ascending vertex order
        let mut total = 0.0;
        for u in self.ordered_vertices() {
            let degree = self.degree_of(&u)?.min(max_degree);
            total += binomial_coefficient(degree, k) + laplace_noise(rng, scale)?;
        }

        debug!(total, sensitivity, "released local k-star count");
        Ok(total)
    }
}
