use std::ops::Range;

use log::{debug, info};
use rand::{rngs::StdRng, Rng, SeedableRng};
use thiserror::Error;

use super::alias::{Alias, WeightError};
use crate::{InvariantViolation, RbSet};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorkloadError {
    #[error(transparent)]
    Weights(#[from] WeightError),
    #[error("key range {0:?} is empty")]
    EmptyKeys(Range<i64>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Insert(i64),
    Remove(i64),
    Contains(i64),
}

/// Outcome counts of the ops applied by [`Workload::run`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub inserted: usize,
    pub duplicates: usize,
    pub removed: usize,
    pub missing: usize,
    pub hits: usize,
    pub misses: usize,
}

impl Report {
    pub fn ops(&self) -> usize {
        self.inserted + self.duplicates + self.removed + self.missing + self.hits + self.misses
    }

    fn record(&mut self, op: Op, outcome: bool) {
        let slot = match (op, outcome) {
            (Op::Insert(_), true) => &mut self.inserted,
            (Op::Insert(_), false) => &mut self.duplicates,
            (Op::Remove(_), true) => &mut self.removed,
            (Op::Remove(_), false) => &mut self.missing,
            (Op::Contains(_), true) => &mut self.hits,
            (Op::Contains(_), false) => &mut self.misses,
        };
        *slot += 1;
    }
}

/// A reproducible, endless stream of random set operations on keys drawn
/// uniformly from a range.
#[derive(Debug, Clone)]
pub struct Workload {
    alias: Alias<3>,
    keys: Range<i64>,
    rng: StdRng,
}

impl Workload {
    /// `weights` are the probabilities of an insert, a remove and a lookup.
    pub fn new(weights: &[f64; 3], keys: Range<i64>, seed: u64) -> Result<Self, WorkloadError> {
        if keys.is_empty() {
            return Err(WorkloadError::EmptyKeys(keys));
        }
        Ok(Self {
            alias: Alias::new(weights)?,
            keys,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    pub fn next_op(&mut self) -> Op {
        let key = self.rng.gen_range(self.keys.clone());
        match self.alias.sample(&mut self.rng) {
            0 => Op::Insert(key),
            1 => Op::Remove(key),
            _ => Op::Contains(key),
        }
    }

    /// Applies `ops` operations to `set`, checking every invariant after
    /// each mutation.
    pub fn run(&mut self, set: &mut RbSet<i64>, ops: usize) -> Result<Report, InvariantViolation> {
        let mut report = Report::default();
        for _ in 0..ops {
            let op = self.next_op();
            report.record(op, apply(set, op));
            if !matches!(op, Op::Contains(_)) {
                if let Err(violation) = set.check_invariants() {
                    debug!("{op:?} broke the tree: {violation}");
                    return Err(violation);
                }
            }
        }
        info!("workload finished: {report:?}, {} keys left", set.len());
        Ok(report)
    }
}

impl Iterator for Workload {
    type Item = Op;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_op())
    }
}

/// Applies one operation and returns the set's answer.
pub fn apply(set: &mut RbSet<i64>, op: Op) -> bool {
    match op {
        Op::Insert(key) => set.insert(key),
        Op::Remove(key) => set.remove(&key),
        Op::Contains(key) => set.contains(&key),
    }
}
