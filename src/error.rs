use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Rejections raised by the trees. Every variant is an invalid argument on the
/// caller's side; none of them leave a tree modified.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("key must not be empty")]
    EmptyKey,
    #[error("weight must be strictly positive, got {0}")]
    NonPositiveWeight(f64),
    #[error("key `{0}` is already present")]
    DuplicateKey(String),
    #[error("number of matches must be at least one")]
    ZeroLimit,
    #[error("character `{0}` appears more than once in the alphabet")]
    DuplicateCharacter(char),
    #[error("character `{0}` is not part of the alphabet")]
    UnknownCharacter(char),
}

impl Error {
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            Error::EmptyKey
            | Error::NonPositiveWeight(_)
            | Error::DuplicateKey(_)
            | Error::ZeroLimit
            | Error::DuplicateCharacter(_)
            | Error::UnknownCharacter(_) => true,
        }
    }
}
