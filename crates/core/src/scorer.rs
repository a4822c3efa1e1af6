use crate::model::{TraitId, TraitPriority};

//
// ─── SCORE TABLE ──────────────────────────────────────────────────────────────
//

/// Accumulated score per trait.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ScoreTable([u32; TraitId::COUNT]);

impl ScoreTable {
    #[must_use]
    pub fn get(&self, trait_id: TraitId) -> u32 {
        self.0[trait_id.index()]
    }

    /// Sum of every bucket.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.0.iter().map(|&v| u64::from(v)).sum()
    }

    /// `(trait, score)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (TraitId, u32)> + '_ {
        TraitId::ALL.into_iter().map(|t| (t, self.get(t)))
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&v| v == 0)
    }
}

//
// ─── SCORER ───────────────────────────────────────────────────────────────────
//

/// Accumulates answer values into trait buckets and picks the winner.
///
/// Values are not range-checked; callers pass the score of the chosen answer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scorer {
    table: ScoreTable,
}

impl Scorer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.table = ScoreTable::default();
    }

    /// Add `value` to the bucket for `trait_id`. Saturates at `u32::MAX`.
    pub fn record(&mut self, trait_id: TraitId, value: u32) {
        let slot = &mut self.table.0[trait_id.index()];
        *slot = slot.saturating_add(value);
    }

    #[must_use]
    pub fn scores(&self) -> &ScoreTable {
        &self.table
    }

    /// Trait with the highest score.
    ///
    /// Traits are scanned in `priority` order and the running best is only
    /// replaced by a strictly greater score, so on a tie the earlier trait
    /// wins. With all scores equal the first trait in `priority` is returned.
    #[must_use]
    pub fn winner(&self, priority: &TraitPriority) -> TraitId {
        let first = priority.first();
        let mut best = (first, self.table.get(first));
        for trait_id in priority.iter().skip(1) {
            let score = self.table.get(trait_id);
            if score > best.1 {
                best = (trait_id, score);
            }
        }
        best.0
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
