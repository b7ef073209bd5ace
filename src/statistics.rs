use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub(crate) struct Statistics {
  pub(crate) wpm: f64,
  pub(crate) accuracy: f64,
}

impl Display for Statistics {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "WPM: {:.2} | Accuracy: {:.2}%", self.wpm, self.accuracy)
  }
}
