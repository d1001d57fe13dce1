//! Yes/no confirmation prompts.
//!
//! The prompt is injected so page code stays testable; the browser
//! implementation lives in `browser`.

#[cfg(test)]
#[path = "confirm_test.rs"]
mod confirm_test;

/// Something that can ask the user a yes/no question.
///
/// Implementations may block the caller until the user answers.
pub trait Confirmer {
    fn confirm(&self, message: &str) -> bool;
}

impl<F> Confirmer for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

/// Ask `confirmer` and return the user's choice.
#[must_use]
pub fn confirm_action(confirmer: &impl Confirmer, message: &str) -> bool {
    confirmer.confirm(message)
}
