//! Next-piece queue - fixed-capacity lookahead over a piece source

use std::collections::VecDeque;

use crate::rng::PieceSource;
use crate::types::PieceKind;

/// Upcoming piece kinds, front first
///
/// The queue is kept at full capacity: every [`NextQueue::pop`] immediately
/// draws a replacement from the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextQueue {
    kinds: VecDeque<PieceKind>,
    capacity: usize,
}

impl NextQueue {
    /// Create a queue filled to `capacity` from `source`
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn filled(capacity: usize, source: &mut impl PieceSource) -> Self {
        assert!(capacity > 0, "next queue capacity must be at least 1");
        let kinds = (0..capacity).map(|_| source.next_kind()).collect();
        Self { kinds, capacity }
    }

    /// Take the front kind and append a fresh draw at the back
    pub fn pop(&mut self, source: &mut impl PieceSource) -> PieceKind {
        let kind = self
            .kinds
            .pop_front()
            .expect("next queue is never empty between spawns");
        self.kinds.push_back(source.next_kind());
        debug_assert_eq!(self.kinds.len(), self.capacity);
        kind
    }

    /// Kind that will spawn next
    pub fn peek(&self) -> PieceKind {
        self.kinds[0]
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = PieceKind> + '_ {
        self.kinds.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<PieceKind> {
        self.iter().collect()
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedSource;

    #[test]
    fn test_filled_to_capacity() {
        let mut source = ScriptedSource::new([PieceKind::I, PieceKind::T, PieceKind::O]);
        let queue = NextQueue::filled(5, &mut source);
        assert_eq!(queue.len(), 5);
        assert_eq!(
            queue.to_vec(),
            vec![
                PieceKind::I,
                PieceKind::T,
                PieceKind::O,
                PieceKind::I,
                PieceKind::T
            ]
        );
    }

    #[test]
    fn test_pop_is_fifo_and_refills() {
        let mut source = ScriptedSource::new([PieceKind::I, PieceKind::T, PieceKind::O]);
        let mut queue = NextQueue::filled(2, &mut source);
        assert_eq!(queue.peek(), PieceKind::I);
        assert_eq!(queue.pop(&mut source), PieceKind::I);
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.to_vec(), vec![PieceKind::T, PieceKind::O]);
    }

    #[test]
    #[should_panic(expected = "capacity")]
    fn test_zero_capacity_panics() {
        let mut source = ScriptedSource::repeat(PieceKind::I);
        let _ = NextQueue::filled(0, &mut source);
    }
}
