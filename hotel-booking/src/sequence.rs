use hotel_core::BookingId;

/// Monotonic booking id generator: `prefix` followed by an ever-growing number.
#[derive(Debug, Clone)]
pub struct IdSequence {
    prefix: String,
    base: u64,
    counter: u64,
}

impl IdSequence {
    pub fn new(prefix: impl Into<String>, base: u64) -> Self {
        Self {
            prefix: prefix.into(),
            base,
            counter: base,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn current(&self) -> u64 {
        self.counter
    }

    /// The id the next booking would get, skipping any that `taken` reports.
    /// Does not advance the sequence.
    pub fn peek(&self, taken: impl Fn(&BookingId) -> bool) -> (u64, BookingId) {
        let mut seq = self.counter + 1;
        loop {
            let id = BookingId::new(&self.prefix, seq);
            if !taken(&id) {
                return (seq, id);
            }
            seq += 1;
        }
    }

    /// Record that `seq` has been handed out
    pub fn commit(&mut self, seq: u64) {
        self.counter = self.counter.max(seq);
    }

    /// Re-seed after loading `ids`: `base + count`, or past the highest
    /// generated suffix if that is larger.
    pub fn reseed<'a>(&mut self, ids: impl IntoIterator<Item = &'a BookingId>) {
        let mut count = 0u64;
        let mut highest = 0u64;
        for id in ids {
            count += 1;
            if let Some(seq) = id.sequence(&self.prefix) {
                highest = highest.max(seq);
            }
        }
        self.counter = (self.base + count).max(highest);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peek_and_commit() {
        let mut ids = IdSequence::new("BK", 1000);

        let (seq, id) = ids.peek(|_| false);
        assert_eq!(seq, 1001);
        assert_eq!(id.as_str(), "BK1001");

        // Peeking twice without committing yields the same id
        assert_eq!(ids.peek(|_| false).0, 1001);

        ids.commit(seq);
        assert_eq!(ids.peek(|_| false).1.as_str(), "BK1002");
    }

    #[test]
    fn test_peek_skips_taken_ids() {
        let ids = IdSequence::new("BK", 1000);
        let taken = [BookingId::new("BK", 1001), BookingId::new("BK", 1002)];

        let (seq, id) = ids.peek(|candidate| taken.contains(candidate));
        assert_eq!(seq, 1003);
        assert_eq!(id.as_str(), "BK1003");
    }

    #[test]
    fn test_reseed_uses_count() {
        let mut ids = IdSequence::new("BK", 1000);
        let loaded = [BookingId::new("BK", 1001), BookingId::new("BK", 1002)];

        ids.reseed(&loaded);
        assert_eq!(ids.current(), 1002);
    }

    #[test]
    fn test_reseed_moves_past_sparse_ids() {
        let mut ids = IdSequence::new("BK", 1000);
        let loaded = [BookingId::new("BK", 1001), BookingId::new("BK", 1007)];

        ids.reseed(&loaded);
        assert_eq!(ids.current(), 1007);
        assert_eq!(ids.peek(|_| false).1.as_str(), "BK1008");
    }
}
