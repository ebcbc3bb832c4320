//! RNG module - next-piece sources
//!
//! The engine draws every new piece kind from a [`PieceSource`]. Production
//! games use [`UniformSource`], which picks each kind independently and
//! uniformly from all seven. Tests inject a [`ScriptedSource`] to pin exact
//! sequences.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::PieceKind;

/// Supplier of upcoming piece kinds
pub trait PieceSource {
    /// Draw the next kind
    fn next_kind(&mut self) -> PieceKind;
}

/// Uniform, independent draws over all seven kinds
#[derive(Debug, Clone)]
pub struct UniformSource {
    seed: u64,
    rng: StdRng,
}

impl UniformSource {
    /// Create a source with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a source seeded from the thread-local generator
    ///
    /// The chosen seed is still available through [`UniformSource::seed`], so a
    /// game can be replayed from logs.
    pub fn from_entropy() -> Self {
        Self::new(rand::rng().random())
    }

    /// Seed this source was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl PieceSource for UniformSource {
    fn next_kind(&mut self) -> PieceKind {
        let index = self.rng.random_range(0..PieceKind::ALL.len());
        PieceKind::ALL[index]
    }
}

/// Fixed sequence of kinds, repeated forever
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedSource {
    kinds: Vec<PieceKind>,
    index: usize,
}

impl ScriptedSource {
    /// # Panics
    ///
    /// Panics if `kinds` is empty.
    pub fn new(kinds: impl Into<Vec<PieceKind>>) -> Self {
        let kinds = kinds.into();
        assert!(!kinds.is_empty(), "scripted source needs at least one kind");
        Self { kinds, index: 0 }
    }

    /// A source that only ever yields `kind`
    pub fn repeat(kind: PieceKind) -> Self {
        Self::new(vec![kind])
    }

    /// Number of kinds drawn so far
    pub fn drawn(&self) -> usize {
        self.index
    }
}

impl PieceSource for ScriptedSource {
    fn next_kind(&mut self) -> PieceKind {
        let kind = self.kinds[self.index % self.kinds.len()];
        self.index += 1;
        kind
    }
}

impl<S: PieceSource + ?Sized> PieceSource for Box<S> {
    fn next_kind(&mut self) -> PieceKind {
        (**self).next_kind()
    }
}
