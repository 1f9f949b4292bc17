/// Seen-state for the multiplex groups of one message.
///
/// A multiplexed message spreads its content over several frames, one mux
/// group per frame. `SeenSet` tracks which group indexes have been observed
/// since the last batch start. The lowest declared index is treated as the
/// start of a batch: marking it clears every other flag first, realigning
/// accumulation to the first frame of a new cycle. A cycle that begins
/// mid-sequence can therefore never complete until the start index is
/// observed again.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SeenSet {
    indexes: Vec<u32>,
    seen: Vec<bool>,
}

impl SeenSet {
    /// Builds the set over the declared group indexes (order and duplicates
    /// do not matter; the lowest index becomes the batch start).
    pub fn new(mut indexes: Vec<u32>) -> Self {
        indexes.sort_unstable();
        indexes.dedup();
        let seen = vec![false; indexes.len()];
        SeenSet { indexes, seen }
    }

    /// The batch-start index (lowest declared), if any groups exist.
    pub fn start_index(&self) -> Option<u32> {
        self.indexes.first().copied()
    }

    /// Marks a group index as observed. Unknown indexes are ignored.
    pub fn mark(&mut self, index: u32) {
        let Some(pos) = self.indexes.iter().position(|&i| i == index) else {
            return;
        };
        if pos == 0 {
            // Start of a new batch: realign by forgetting everything else.
            self.seen.fill(false);
        }
        self.seen[pos] = true;
    }

    /// `true` iff every declared group has been observed since the last
    /// reset. Vacuously true for an empty set.
    pub fn all_seen(&self) -> bool {
        self.seen.iter().all(|&b| b)
    }

    pub fn reset(&mut self) {
        self.seen.fill(false);
    }
}
