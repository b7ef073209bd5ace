use {
  crate::{
    action::Action,
    app::App,
    arguments::Arguments,
    error::Error,
    prompts::Prompts,
    result_store::{Record, ResultStore},
    session::SessionController,
    statistics::Statistics,
    trial::TypingTrial,
  },
  anyhow::{Context, bail},
  clap::Parser,
  crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
  },
  indexmap::IndexMap,
  log::{debug, info, warn},
  rand::{Rng, seq::SliceRandom},
  serde::{Deserialize, Serialize},
  std::{
    fmt::{self, Display, Formatter},
    fs,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    process,
    time::Instant,
  },
};

macro_rules! command {
  ($out:expr, $($cmd:expr),+ $(,)?) => {
    { queue!($out, $($cmd),+) }
  };
}

mod action;
mod app;
mod arguments;
mod error;
mod prompts;
mod result_store;
mod session;
mod statistics;
mod trial;

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn main() {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

  if let Err(error) = Arguments::parse().run() {
    eprintln!("error: {error:#}");
    process::exit(1);
  }
}
