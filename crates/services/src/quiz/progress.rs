/// Aggregated view of quiz progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizProgress {
    pub answered: usize,
    pub total: usize,
}

impl QuizProgress {
    /// Fraction of questions answered, in `[0, 1]`.
    ///
    /// Stays below 1 while a question is still on screen.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.answered as f64 / self.total as f64
    }

    /// 1-based number of the question being shown.
    #[must_use]
    pub fn current_number(&self) -> usize {
        (self.answered + 1).min(self.total)
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.total.saturating_sub(self.answered)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.answered >= self.total
    }
}
