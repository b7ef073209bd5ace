use super::*;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum State {
  Continuing,
  Quit,
}

pub(crate) struct App<R, W, G> {
  input: R,
  output: W,
  rng: G,
  session: SessionController,
}

impl<R: BufRead, W: Write, G: Rng> App<R, W, G> {
  pub(crate) fn new(session: SessionController, input: R, output: W, rng: G) -> Self {
    Self {
      input,
      output,
      rng,
      session,
    }
  }

  fn handle_action(&mut self, action: Action) -> Result<State> {
    match action {
      Action::AddUser => {
        let Some(username) = self.read_line("Enter the username: ")? else {
          return Ok(State::Quit);
        };

        if username.is_empty() {
          writeln!(self.output, "Username cannot be empty.")?;
        } else if self.session.add_user(&username) {
          writeln!(self.output, "User '{username}' added.")?;
        } else {
          writeln!(self.output, "User '{username}' already exists.")?;
        }
      }
      Action::Exit => return Ok(State::Quit),
      Action::Load => {
        let Some(path) = self.read_path("Enter filename to load results (e.g., typing_results.json): ")?
        else {
          return Ok(State::Quit);
        };

        if let Some(path) = path {
          self.load(&path)?;
        }
      }
      Action::Save => {
        let Some(path) = self.read_path("Enter filename to save results (e.g., typing_results.json): ")?
        else {
          return Ok(State::Quit);
        };

        if let Some(path) = path {
          self.session.save(&path)?;
          writeln!(self.output, "Results saved to {}", path.display())?;
        }
      }
      Action::StartTest => {
        let Some(username) = self.read_line("Enter the username to start the test: ")? else {
          return Ok(State::Quit);
        };

        match self
          .session
          .run_test(&username, &mut self.rng, &mut self.input, &mut self.output)
        {
          Ok(Some(_)) => {}
          Ok(None) => return Ok(State::Quit),
          Err(error) => self.report(&error)?,
        }
      }
      Action::View => self.session.list_all(&mut self.output)?,
    }

    Ok(State::Continuing)
  }

  pub(crate) fn load(&mut self, path: &Path) -> Result {
    match self.session.load(path) {
      Ok(count) => writeln!(
        self.output,
        "Results loaded from {} ({count} entries)",
        path.display()
      )?,
      Err(error) => self.report(&error)?,
    }

    Ok(())
  }

  fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
    write!(self.output, "{prompt}")?;
    self.output.flush()?;

    let mut line = String::new();

    if self.input.read_line(&mut line)? == 0 {
      return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
  }

  fn read_path(&mut self, prompt: &str) -> Result<Option<Option<PathBuf>>> {
    let Some(line) = self.read_line(prompt)? else {
      return Ok(None);
    };

    if line.is_empty() {
      writeln!(self.output, "Filename cannot be empty.")?;
      return Ok(Some(None));
    }

    Ok(Some(Some(PathBuf::from(line))))
  }

  fn report(&mut self, error: &anyhow::Error) -> Result {
    warn!("{error:#}");

    command!(
      self.output,
      SetForegroundColor(Color::Red),
      Print(format!("error: {error:#}")),
      ResetColor,
      Print("\n")
    )?;

    Ok(())
  }

  pub(crate) fn run(&mut self) -> Result {
    loop {
      let Some(line) = self.read_line(&Action::menu())? else {
        break;
      };

      match Action::from_input(&line) {
        Some(action) => {
          debug!("dispatching {action}");

          if self.handle_action(action)? == State::Quit {
            break;
          }
        }
        None => writeln!(self.output, "Invalid action. Please try again.")?,
      }
    }

    writeln!(self.output, "\nExiting the Typing Speed Test App.")?;
    self.output.flush()?;

    Ok(())
  }
}
