use generational_box::BorrowError;

/// An error returned when the value behind an [`InputBinding`](crate::InputBinding) cannot be read.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// The component that owned the input was dropped, or the value is currently borrowed mutably.
    #[error("failed to read input value: {0}")]
    Borrow(#[from] BorrowError),
}
