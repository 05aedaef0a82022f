//! Identifier generation owned by the store.

/// Monotonic id counter. Ids handed out are never reused, even after
/// the entity that held them is deleted.
///
/// Once `u64::MAX` has been handed out the sequence is exhausted and
/// yields no more ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdSequence {
    next: Option<u64>,
}

impl IdSequence {
    /// A sequence whose first id is one past the largest of `existing`
    /// (or 1 when there are none).
    pub fn starting_after<I>(existing: I) -> Self
    where
        I: IntoIterator<Item = u64>,
    {
        let next = match existing.into_iter().max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        };
        Self { next }
    }

    /// The next id, or `None` when the sequence is exhausted.
    pub fn next_id(&mut self) -> Option<u64> {
        let id = self.next?;
        self.next = id.checked_add(1);
        Some(id)
    }

    /// The id the next call to [`IdSequence::next_id`] will return.
    pub fn peek(&self) -> Option<u64> {
        self.next
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self { next: Some(1) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sequence_starts_at_one() {
        let mut ids = IdSequence::starting_after(Vec::new());
        assert_eq!(ids.next_id(), Some(1));
        assert_eq!(ids.next_id(), Some(2));
    }

    #[test]
    fn starts_after_largest_existing_id_regardless_of_order() {
        let ids = IdSequence::starting_after(vec![7, 3, 12, 5]);
        assert_eq!(ids.peek(), Some(13));
    }

    #[test]
    fn default_matches_empty() {
        assert_eq!(IdSequence::default(), IdSequence::starting_after(Vec::new()));
    }

    #[test]
    fn never_hands_out_the_same_id_twice() {
        let mut ids = IdSequence::starting_after(vec![u64::MAX - 1]);
        assert_eq!(ids.next_id(), Some(u64::MAX));
        assert_eq!(ids.next_id(), None);
        assert_eq!(ids.next_id(), None);

        let mut full = IdSequence::starting_after(vec![u64::MAX]);
        assert_eq!(full.peek(), None);
        assert_eq!(full.next_id(), None);
    }
}
