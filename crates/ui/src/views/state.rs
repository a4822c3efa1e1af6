#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    /// The session refused the action in its current state.
    Rejected,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::Rejected => "その操作は現在のページでは使えません。",
        }
    }
}
