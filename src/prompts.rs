use super::*;

const DEFAULT_PROMPTS: &[&str] = &[
  "The quick brown fox jumps over the lazy dog.",
  "Typing fast requires practice and focus.",
  "Rust programming is both fun and educational.",
];

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Prompts {
  sentences: Vec<String>,
}

impl Default for Prompts {
  fn default() -> Self {
    Self::new(DEFAULT_PROMPTS.iter().map(|sentence| sentence.to_string()))
  }
}

impl Prompts {
  pub(crate) fn new(sentences: impl IntoIterator<Item = String>) -> Self {
    Self {
      sentences: sentences.into_iter().collect(),
    }
  }

  pub(crate) fn from_file(path: &Path) -> Result<Self> {
    let contents = fs::read_to_string(path)
      .with_context(|| format!("failed to read prompts from {}", path.display()))?;

    let prompts = Self::new(
      contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string),
    );

    if prompts.sentences.is_empty() {
      bail!("no prompts found in {}", path.display());
    }

    info!(
      "loaded {} prompts from {}",
      prompts.sentences.len(),
      path.display()
    );

    Ok(prompts)
  }

  pub(crate) fn choose(&self, rng: &mut impl Rng) -> Result<&str, Error> {
    self
      .sentences
      .choose(rng)
      .map(String::as_str)
      .ok_or(Error::InvalidInput("prompt set is empty"))
  }
}
