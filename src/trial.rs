use super::*;

#[derive(Debug, Clone, PartialEq)]
enum Phase<'a> {
  Ready,
  Running {
    prompt: &'a str,
    start: Instant,
  },
  Completed {
    end: Instant,
    prompt: &'a str,
    start: Instant,
    typed: String,
  },
}

#[derive(Debug, Clone)]
pub(crate) struct TypingTrial<'a> {
  phase: Phase<'a>,
  prompts: &'a Prompts,
}

impl<'a> TypingTrial<'a> {
  pub(crate) fn new(prompts: &'a Prompts) -> Self {
    Self {
      phase: Phase::Ready,
      prompts,
    }
  }

  pub(crate) fn accuracy(&self) -> Result<f64, Error> {
    let (prompt, typed) = match &self.phase {
      Phase::Completed { prompt, typed, .. } => (*prompt, typed.as_str()),
      _ => return Err(Error::InvalidState("trial has not finished")),
    };

    word_accuracy(prompt, typed)
  }

  pub(crate) fn elapsed(&self) -> Result<f64, Error> {
    match &self.phase {
      Phase::Completed { start, end, .. } => Ok(end.duration_since(*start).as_secs_f64()),
      _ => Err(Error::InvalidState("trial has not finished")),
    }
  }

  pub(crate) fn finish(&mut self, typed: impl Into<String>) -> Result<(), Error> {
    let end = Instant::now();

    let (prompt, start) = match self.phase {
      Phase::Running { prompt, start } => (prompt, start),
      Phase::Ready => return Err(Error::InvalidState("finish called before start")),
      Phase::Completed { .. } => return Err(Error::InvalidState("trial already finished")),
    };

    self.phase = Phase::Completed {
      end,
      prompt,
      start,
      typed: typed.into(),
    };

    debug!("trial finished after {:?}", end.duration_since(start));

    Ok(())
  }

  pub(crate) fn prompt(&self) -> Option<&'a str> {
    match self.phase {
      Phase::Ready => None,
      Phase::Running { prompt, .. } | Phase::Completed { prompt, .. } => Some(prompt),
    }
  }

  pub(crate) fn report(&self) -> Result<Statistics, Error> {
    Ok(Statistics {
      wpm: self.speed()?,
      accuracy: self.accuracy()?,
    })
  }

  pub(crate) fn speed(&self) -> Result<f64, Error> {
    let Phase::Completed { typed, .. } = &self.phase else {
      return Err(Error::InvalidState("trial has not finished"));
    };

    words_per_minute(typed, self.elapsed()?)
  }

  pub(crate) fn start(&mut self, rng: &mut impl Rng) -> Result<&'a str, Error> {
    if self.phase != Phase::Ready {
      return Err(Error::InvalidState("trial already started"));
    }

    let prompt = self.prompts.choose(rng)?;

    debug!("trial started with prompt {prompt:?}");

    self.phase = Phase::Running {
      prompt,
      start: Instant::now(),
    };

    Ok(prompt)
  }
}

fn round(value: f64) -> f64 {
  (value * 100.0).round() / 100.0
}

fn word_accuracy(original: &str, typed: &str) -> Result<f64, Error> {
  let original = original.split_whitespace().collect::<Vec<&str>>();

  if original.is_empty() {
    return Err(Error::InvalidInput("prompt has no words"));
  }

  let correct = original
    .iter()
    .zip(typed.split_whitespace())
    .filter(|(expected, actual)| *expected == actual)
    .count();

  Ok(round(correct as f64 / original.len() as f64 * 100.0))
}

fn words_per_minute(typed: &str, elapsed: f64) -> Result<f64, Error> {
  if elapsed <= 0.0 {
    return Err(Error::DivisionByZero);
  }

  let words = typed.split_whitespace().count();

  Ok(round(words as f64 / elapsed * 60.0))
}
