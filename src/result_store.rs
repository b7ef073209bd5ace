use super::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Record {
  pub(crate) username: String,
  pub(crate) result: Statistics,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ResultStore {
  high_score: f64,
  results: Vec<Statistics>,
  username: String,
}

impl ResultStore {
  pub(crate) fn new(username: impl Into<String>) -> Self {
    Self {
      high_score: 0.0,
      results: Vec::new(),
      username: username.into(),
    }
  }

  pub(crate) fn high_score(&self) -> f64 {
    self.high_score
  }

  pub(crate) fn list(&self) -> Vec<Record> {
    self
      .results
      .iter()
      .map(|result| Record {
        username: self.username.clone(),
        result: *result,
      })
      .collect()
  }

  pub(crate) fn record(&mut self, result: Statistics) {
    self.results.push(result);
  }

  pub(crate) fn results(&self) -> &[Statistics] {
    &self.results
  }

  /// Returns `true` when `wpm` beats the previous best.
  pub(crate) fn update_high_score(&mut self, wpm: f64) -> bool {
    if wpm > self.high_score {
      self.high_score = wpm;
      true
    } else {
      false
    }
  }

  pub(crate) fn username(&self) -> &str {
    &self.username
  }
}
