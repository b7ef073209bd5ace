use super::*;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Error {
  DivisionByZero,
  FileNotFound(PathBuf),
  InvalidInput(&'static str),
  InvalidState(&'static str),
  UserNotFound(String),
}

impl Display for Error {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Self::DivisionByZero => write!(f, "no time elapsed between start and finish"),
      Self::FileNotFound(path) => write!(
        f,
        "file not found: {}. Please save results first.",
        path.display()
      ),
      Self::InvalidInput(message) => write!(f, "invalid input: {message}"),
      Self::InvalidState(message) => write!(f, "invalid state: {message}"),
      Self::UserNotFound(username) => write!(
        f,
        "user '{username}' not found. Please add the user first."
      ),
    }
  }
}

impl std::error::Error for Error {}
