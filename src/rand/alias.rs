use log::debug;
use rand::Rng;
use smallvec::SmallVec;
use thiserror::Error;

const TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum WeightError {
    #[error("weight {index} is negative or not a number")]
    Invalid { index: usize },
    #[error("weights sum to {0} instead of 1")]
    NotNormalized(f64),
}

#[derive(Debug, Clone, Copy)]
struct Container {
    value: usize,
    thresh: f64,
}

/// Samples indices `0..S` with fixed probabilities in constant time
/// (Vose's alias method).
#[derive(Debug, Clone)]
pub struct Alias<const S: usize> {
    containers: [Container; S],
}

/// Scaled probabilities split into the ones below and above the average.
#[derive(Debug)]
struct AliasBuilder<const S: usize> {
    small: SmallVec<[(f64, usize); S]>,
    big: SmallVec<[(f64, usize); S]>,
}

impl<const S: usize> AliasBuilder<S> {
    fn new(dist: &[f64; S]) -> Self {
        let mut small = SmallVec::new();
        let mut big = SmallVec::new();

        for (i, v) in dist.iter().enumerate() {
            let scaled = v * S as f64;
            if scaled < 1.0 {
                small.push((scaled, i));
            } else {
                big.push((scaled, i));
            }
        }

        Self { small, big }
    }

    fn build(mut self) -> [Container; S] {
        let mut containers = [Container {
            value: 0,
            thresh: 1.0,
        }; S];
        while let Some((thresh, pos)) = self.small.pop() {
            match self.big.pop() {
                Some((mut p, i)) => {
                    containers[pos] = Container { value: i, thresh };
                    p -= 1.0 - thresh;
                    if p < 1.0 {
                        self.small.push((p, i));
                    } else {
                        self.big.push((p, i));
                    }
                }
                // Only rounding error is left over.
                None => {
                    containers[pos] = Container {
                        value: pos,
                        thresh: 1.0,
                    }
                }
            }
        }
        while let Some((_, value)) = self.big.pop() {
            containers[value] = Container { value, thresh: 1.0 };
        }
        containers
    }
}

impl<const S: usize> Alias<S> {
    /// `dist[i]` is the probability of sampling `i`; the entries must sum
    /// to one.
    pub fn new(dist: &[f64; S]) -> Result<Self, WeightError> {
        if let Some(index) = dist.iter().position(|w| w.is_nan() || *w < 0.0) {
            return Err(WeightError::Invalid { index });
        }
        let sum = dist.iter().sum::<f64>();
        if (1.0 - sum).abs() > TOLERANCE {
            return Err(WeightError::NotNormalized(sum));
        }
        let builder = AliasBuilder::new(dist);
        debug!("building alias table from {:?}", builder);

        Ok(Self {
            containers: builder.build(),
        })
    }

    pub fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        let p: f64 = rng.gen_range(0.0..1.0) * S as f64;
        let idx = (p.floor() as usize).min(S - 1);
        let container = self.containers[idx];
        if container.thresh <= p - idx as f64 {
            container.value
        } else {
            idx
        }
    }
}
