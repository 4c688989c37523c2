/// How a single or multi select menu finished
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The user confirmed and no callback was configured
    Selected(T),
    /// The user confirmed and the result went to the configured callback
    Delivered,
    /// The user left with the cancel key
    Cancelled,
}

impl<T> Outcome<T> {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Outcome::Cancelled)
    }

    /// The confirmed value, when it was returned rather than delivered
    pub fn selected(self) -> Option<T> {
        match self {
            Outcome::Selected(value) => Some(value),
            Outcome::Delivered | Outcome::Cancelled => None,
        }
    }
}
