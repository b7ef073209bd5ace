use super::*;

#[derive(Debug, Parser)]
#[clap(about = "Interactive typing speed test with per-user history")]
pub(crate) struct Arguments {
  #[clap(long, short, help = "Merge a results file before starting")]
  load: Option<PathBuf>,
  #[clap(long, short, help = "Read prompts from a file, one per line")]
  prompts: Option<PathBuf>,
}

impl Arguments {
  pub(crate) fn run(self) -> Result {
    let prompts = match &self.prompts {
      Some(path) => Prompts::from_file(path)?,
      None => Prompts::default(),
    };

    let stdin = io::stdin();

    let mut app = App::new(
      SessionController::new(prompts),
      stdin.lock(),
      io::stdout(),
      rand::thread_rng(),
    );

    if let Some(path) = &self.load {
      app.load(path)?;
    }

    app.run()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults() {
    let arguments = Arguments::try_parse_from(["typespeed"]).unwrap();

    assert_eq!(arguments.load, None);
    assert_eq!(arguments.prompts, None);
  }

  #[test]
  fn flags() {
    let arguments =
      Arguments::try_parse_from(["typespeed", "-p", "prompts.txt", "--load", "results.json"])
        .unwrap();

    assert_eq!(arguments.load, Some(PathBuf::from("results.json")));
    assert_eq!(arguments.prompts, Some(PathBuf::from("prompts.txt")));
  }
}
