use thiserror::Error;

/// An action the session turned down. The message is what the user sees.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Refusal {
    #[error("Choose an instrument first !")]
    HomeLocked,
    #[error("Please select Guitar for this showcase !")]
    InstrumentUnavailable,
    #[error("Select Guitar to continue.")]
    BackFromInstrument,
    #[error("This is a showcase.")]
    BackFromHome,
    #[error("Already tapped.")]
    AlreadyTapped,
    #[error("Open a lesson first.")]
    NoActiveLesson,
}
