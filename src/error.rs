use core::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    UnknownIcon,
    CellOutOfRange { cell: usize },
    BlockOutOfRange,
}

impl Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::UnknownIcon => write!(f, "unknown icon name"),
            Error::CellOutOfRange { cell } => write!(f, "cell {} is outside the panel", cell),
            Error::BlockOutOfRange => write!(f, "block coordinates outside the block map"),
        }
    }
}

impl core::error::Error for Error {}
