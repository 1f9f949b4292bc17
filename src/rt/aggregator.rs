/// Cross-message completion tracking with a primary gate.
///
/// An aggregator watches an ordered list of message ids. The first id in the
/// list is the primary: sightings of any other id only count while the
/// primary has already been seen in the current round. Once every id has
/// been seen, the callback fires with the shared database snapshot and the
/// round starts over.
pub struct MessageAggregator<Db> {
    ids: Vec<u32>,
    seen: Vec<bool>,
    on_complete: Box<dyn FnMut(&Db)>,
}

impl<Db> MessageAggregator<Db> {
    pub fn new(ids: Vec<u32>, on_complete: Box<dyn FnMut(&Db)>) -> Self {
        let seen = vec![false; ids.len()];
        MessageAggregator {
            ids,
            seen,
            on_complete,
        }
    }

    /// Records a sighting of `id` and fires the callback if the round is
    /// now complete. Ids not in the list are ignored.
    pub fn observe(&mut self, id: u32, db: &Db) {
        for (pos, &watched) in self.ids.iter().enumerate() {
            if watched != id {
                continue;
            }
            // Non-primary sightings are gated on the primary having
            // arrived first this round.
            self.seen[pos] = if pos == 0 { true } else { self.seen[0] };
        }
        if !self.seen.is_empty() && self.seen.iter().all(|&b| b) {
            (self.on_complete)(db);
            self.seen.fill(false);
        }
    }

    pub fn reset(&mut self) {
        self.seen.fill(false);
    }

    pub fn ids(&self) -> &[u32] {
        &self.ids
    }
}
