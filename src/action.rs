use super::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Action {
  AddUser,
  Exit,
  Load,
  Save,
  StartTest,
  View,
}

impl Action {
  pub(crate) const ALL: [Self; 6] = [
    Self::AddUser,
    Self::StartTest,
    Self::Save,
    Self::Load,
    Self::View,
    Self::Exit,
  ];

  pub(crate) fn code(self) -> &'static str {
    match self {
      Self::AddUser => "a",
      Self::Exit => "e",
      Self::Load => "l",
      Self::Save => "s",
      Self::StartTest => "t",
      Self::View => "v",
    }
  }

  pub(crate) fn from_input(input: &str) -> Option<Self> {
    let input = input.trim();

    Self::ALL
      .into_iter()
      .find(|action| input.eq_ignore_ascii_case(action.code()))
  }

  pub(crate) fn menu() -> String {
    let choices = Self::ALL
      .iter()
      .map(|action| format!("{action} ({})", action.code()))
      .collect::<Vec<String>>();

    format!("Choose an action: {}: ", choices.join(", "))
  }
}

impl Display for Action {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    let description = match self {
      Self::AddUser => "add user",
      Self::Exit => "exit",
      Self::Load => "load results",
      Self::Save => "save results",
      Self::StartTest => "start test",
      Self::View => "view results",
    };

    write!(f, "{description}")
  }
}
