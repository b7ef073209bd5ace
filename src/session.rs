use super::*;

type Snapshot = IndexMap<String, Vec<Record>>;

#[derive(Debug, Default)]
pub(crate) struct SessionController {
  prompts: Prompts,
  users: IndexMap<String, ResultStore>,
}

impl SessionController {
  pub(crate) fn new(prompts: Prompts) -> Self {
    Self {
      prompts,
      users: IndexMap::new(),
    }
  }

  /// Returns `false` if the user was already registered.
  pub(crate) fn add_user(&mut self, username: &str) -> bool {
    if self.users.contains_key(username) {
      return false;
    }

    info!("adding user {username:?}");

    self
      .users
      .insert(username.to_string(), ResultStore::new(username));

    true
  }

  pub(crate) fn list_all(&self, output: &mut impl Write) -> Result {
    if self.users.is_empty() {
      writeln!(output, "No users registered.")?;
      return Ok(());
    }

    for store in self.users.values() {
      writeln!(
        output,
        "Results for {} (high score: {:.2} WPM):",
        store.username(),
        store.high_score()
      )?;

      if store.results().is_empty() {
        writeln!(output, "  no results yet")?;
      }

      for (i, result) in store.results().iter().enumerate() {
        writeln!(output, "  {}. {result}", i + 1)?;
      }
    }

    Ok(())
  }

  /// Merges the results stored at `path` into the session, returning the
  /// number of entries read.
  pub(crate) fn load(&mut self, path: &Path) -> Result<usize> {
    let contents = match fs::read_to_string(path) {
      Ok(contents) => contents,
      Err(error) if error.kind() == io::ErrorKind::NotFound => {
        return Err(Error::FileNotFound(path.to_path_buf()).into());
      }
      Err(error) => {
        return Err(error).with_context(|| format!("failed to read {}", path.display()));
      }
    };

    let snapshot = serde_json::from_str::<Snapshot>(&contents)
      .with_context(|| format!("malformed results file {}", path.display()))?;

    let mut count = 0;

    for (username, records) in snapshot {
      let store = self
        .users
        .entry(username.clone())
        .or_insert_with(|| ResultStore::new(username));

      for record in records {
        store.update_high_score(record.result.wpm);
        store.record(record.result);
        count += 1;
      }
    }

    info!("loaded {count} results from {}", path.display());

    Ok(count)
  }

  pub(crate) fn run_test(
    &mut self,
    username: &str,
    rng: &mut impl Rng,
    input: &mut impl BufRead,
    output: &mut impl Write,
  ) -> Result<Option<Statistics>> {
    let store = self
      .users
      .get_mut(username)
      .ok_or_else(|| Error::UserNotFound(username.to_string()))?;

    let mut trial = TypingTrial::new(&self.prompts);

    let prompt = trial.start(rng)?;

    writeln!(output, "Type the following:")?;
    command!(
      output,
      SetForegroundColor(Color::Cyan),
      Print(prompt),
      ResetColor,
      Print("\n\nStart typing: ")
    )?;
    output.flush()?;

    let mut typed = String::new();

    if input.read_line(&mut typed)? == 0 {
      debug!("input ended before {username} finished the trial");
      return Ok(None);
    }

    trial.finish(typed.trim_end_matches(['\r', '\n']))?;

    let statistics = trial.report()?;

    debug!(
      "{username} retyped {:?}: {statistics}",
      trial.prompt().unwrap_or_default()
    );

    writeln!(output, "\nResults: {statistics}")?;

    if store.update_high_score(statistics.wpm) {
      command!(
        output,
        SetForegroundColor(Color::Green),
        Print(format!("New High Score: {:.2} WPM!", store.high_score())),
        ResetColor,
        Print("\n")
      )?;
    }

    store.record(statistics);

    Ok(Some(statistics))
  }

  pub(crate) fn save(&self, path: &Path) -> Result {
    let snapshot = self
      .users
      .iter()
      .map(|(username, store)| (username.clone(), store.list()))
      .collect::<Snapshot>();

    let mut buffer = Vec::new();

    let mut serializer = serde_json::Serializer::with_formatter(
      &mut buffer,
      serde_json::ser::PrettyFormatter::with_indent(b"    "),
    );

    snapshot
      .serialize(&mut serializer)
      .context("failed to serialize results")?;

    fs::write(path, buffer).with_context(|| format!("failed to write {}", path.display()))?;

    info!("saved {} users to {}", self.users.len(), path.display());

    Ok(())
  }

  #[cfg(test)]
  fn user(&self, username: &str) -> Option<&ResultStore> {
    self.users.get(username)
  }
}

#[cfg(test)]
mod tests {
  use {
    super::*,
    rand::{SeedableRng, rngs::StdRng},
    std::io::Cursor,
    tempfile::tempdir,
  };

  fn statistics(wpm: f64, accuracy: f64) -> Statistics {
    Statistics { wpm, accuracy }
  }

  fn submit(session: &mut SessionController, username: &str, result: Statistics) {
    let store = session.users.get_mut(username).unwrap();
    store.update_high_score(result.wpm);
    store.record(result);
  }

  fn populated() -> SessionController {
    let mut session = SessionController::default();

    session.add_user("amy");
    session.add_user("bob");

    submit(&mut session, "amy", statistics(40.0, 90.0));
    submit(&mut session, "amy", statistics(55.5, 100.0));
    submit(&mut session, "bob", statistics(30.25, 75.0));

    session
  }

  fn contents(session: &SessionController) -> Vec<(String, Vec<Statistics>)> {
    session
      .users
      .iter()
      .map(|(username, store)| (username.clone(), store.results().to_vec()))
      .collect()
  }

  #[test]
  fn add_user() {
    let mut session = SessionController::default();

    assert!(session.add_user("amy"));
    assert!(!session.add_user("amy"));

    assert_eq!(session.users.len(), 1);
    assert_eq!(session.user("amy").unwrap().username(), "amy");
  }

  #[test]
  fn duplicate_add_keeps_results() {
    let mut session = populated();

    assert!(!session.add_user("amy"));
    assert_eq!(session.user("amy").unwrap().results().len(), 2);
  }

  #[test]
  fn run_test_unknown_user() {
    let mut session = SessionController::default();

    let error = session
      .run_test(
        "ghost",
        &mut StdRng::seed_from_u64(0),
        &mut Cursor::new("typed\n"),
        &mut Vec::new(),
      )
      .unwrap_err();

    assert_eq!(
      error.downcast_ref::<Error>(),
      Some(&Error::UserNotFound("ghost".into()))
    );
  }

  #[test]
  fn run_test_records_result() {
    let mut session = SessionController::new(Prompts::new(["The quick brown fox".to_string()]));

    session.add_user("amy");

    let mut output = Vec::new();

    let statistics = session
      .run_test(
        "amy",
        &mut StdRng::seed_from_u64(0),
        &mut Cursor::new("The quick brown fox\n"),
        &mut output,
      )
      .unwrap()
      .unwrap();

    assert_eq!(statistics.accuracy, 100.0);
    assert!(statistics.wpm > 0.0);

    let amy = session.user("amy").unwrap();

    assert_eq!(amy.results(), &[statistics]);
    assert_eq!(amy.high_score(), statistics.wpm);

    let output = String::from_utf8(output).unwrap();

    assert!(output.contains("Type the following:"));
    assert!(output.contains("The quick brown fox"));
    assert!(output.contains("Accuracy: 100.00%"));
    assert!(output.contains(&format!("New High Score: {:.2} WPM!", statistics.wpm)));
  }

  #[test]
  fn run_test_end_of_input() {
    let mut session = SessionController::default();

    session.add_user("amy");

    let result = session
      .run_test(
        "amy",
        &mut StdRng::seed_from_u64(0),
        &mut Cursor::new(""),
        &mut Vec::new(),
      )
      .unwrap();

    assert_eq!(result, None);

    let amy = session.user("amy").unwrap();

    assert!(amy.results().is_empty());
    assert_eq!(amy.high_score(), 0.0);
  }

  #[test]
  fn save_then_load_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("results.json");

    let session = populated();

    session.save(&path).unwrap();

    let mut loaded = SessionController::default();

    assert_eq!(loaded.load(&path).unwrap(), 3);
    assert_eq!(contents(&loaded), contents(&session));
    assert_eq!(loaded.user("amy").unwrap().high_score(), 55.5);
  }

  #[test]
  fn users_keep_insertion_order() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("results.json");

    let mut session = SessionController::default();

    session.add_user("zed");
    session.add_user("amy");
    submit(&mut session, "amy", statistics(20.0, 50.0));
    session.add_user("mia");

    session.save(&path).unwrap();

    let saved = fs::read_to_string(&path).unwrap();

    let positions = ["\"zed\"", "\"amy\"", "\"mia\""].map(|key| saved.find(key).unwrap());

    assert!(positions[0] < positions[1] && positions[1] < positions[2]);

    let mut loaded = SessionController::default();

    loaded.load(&path).unwrap();

    assert_eq!(
      loaded.users.keys().collect::<Vec<&String>>(),
      ["zed", "amy", "mia"]
    );

    let mut output = Vec::new();

    loaded.list_all(&mut output).unwrap();

    assert_eq!(
      String::from_utf8(output).unwrap(),
      "Results for zed (high score: 0.00 WPM):
  no results yet
Results for amy (high score: 20.00 WPM):
  1. WPM: 20.00 | Accuracy: 50.00%
Results for mia (high score: 0.00 WPM):
  no results yet
"
    );
  }

  #[test]
  fn save_format() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("results.json");

    let mut session = SessionController::default();

    session.add_user("amy");
    submit(&mut session, "amy", statistics(60.0, 75.0));

    session.save(&path).unwrap();

    assert_eq!(
      fs::read_to_string(&path).unwrap(),
      r#"{
    "amy": [
        {
            "username": "amy",
            "result": {
                "wpm": 60.0,
                "accuracy": 75.0
            }
        }
    ]
}"#
    );
  }

  #[test]
  fn save_overwrites() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("results.json");

    populated().save(&path).unwrap();
    SessionController::default().save(&path).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
  }

  #[test]
  fn save_to_missing_directory() {
    let dir = tempdir().unwrap();

    assert!(
      populated()
        .save(&dir.path().join("missing").join("results.json"))
        .is_err()
    );
  }

  #[test]
  fn load_merges() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("results.json");

    populated().save(&path).unwrap();

    let mut session = SessionController::default();

    session.add_user("amy");
    submit(&mut session, "amy", statistics(10.0, 20.0));
    session.add_user("cat");

    session.load(&path).unwrap();

    assert_eq!(
      session.user("amy").unwrap().results(),
      &[
        statistics(10.0, 20.0),
        statistics(40.0, 90.0),
        statistics(55.5, 100.0)
      ]
    );
    assert_eq!(session.user("bob").unwrap().results(), &[statistics(30.25, 75.0)]);
    assert!(session.user("cat").unwrap().results().is_empty());
  }

  #[test]
  fn load_uses_key_as_username() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("results.json");

    fs::write(
      &path,
      r#"{"amy": [{"username": "someone else", "result": {"wpm": 12.5, "accuracy": 50}}]}"#,
    )
    .unwrap();

    let mut session = SessionController::default();

    session.load(&path).unwrap();

    assert_eq!(session.users.len(), 1);
    assert_eq!(session.user("amy").unwrap().results(), &[statistics(12.5, 50.0)]);
  }

  #[test]
  fn load_missing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.json");

    let mut session = populated();
    let before = contents(&session);

    let error = session.load(&path).unwrap_err();

    assert_eq!(error.downcast_ref::<Error>(), Some(&Error::FileNotFound(path)));
    assert_eq!(contents(&session), before);
  }

  #[test]
  fn load_malformed_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("results.json");

    fs::write(&path, "not json").unwrap();

    let mut session = populated();
    let before = contents(&session);

    assert!(session.load(&path).is_err());
    assert_eq!(contents(&session), before);
  }

  #[test]
  fn list_all() {
    let mut output = Vec::new();

    let mut session = populated();
    session.add_user("cat");

    session.list_all(&mut output).unwrap();

    assert_eq!(
      String::from_utf8(output).unwrap(),
      "Results for amy (high score: 55.50 WPM):
  1. WPM: 40.00 | Accuracy: 90.00%
  2. WPM: 55.50 | Accuracy: 100.00%
Results for bob (high score: 30.25 WPM):
  1. WPM: 30.25 | Accuracy: 75.00%
Results for cat (high score: 0.00 WPM):
  no results yet
"
    );
  }

  #[test]
  fn list_all_empty() {
    let mut output = Vec::new();

    SessionController::default().list_all(&mut output).unwrap();

    assert_eq!(String::from_utf8(output).unwrap(), "No users registered.\n");
  }
}
