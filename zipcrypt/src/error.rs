#[derive(thiserror::Error)]
pub enum Error {
    // dependency errors
    #[error("enum conversion: {0}")]
    Strum(#[from] strum::ParseError),

    // std errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    // crate errors
    #[error("index {0} is outside of the keystream table domain [0, {})", super::TABLE_LEN)]
    IndexOutOfRange(usize),
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self, f)
    }
}
