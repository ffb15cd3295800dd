use clap::{Parser, Subcommand};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use super::client::HttpAuthClient;
use super::config::CliConfig;
use super::store::FileSessionStore;
use crate::login::{LoginController, LoginView, Navigator};

#[derive(Parser)]
#[command(name = "trendz-login", about = "Nxt Trendz storefront login", version)]
pub struct ClientArgs {
  #[arg(short, long)]
  pub config: Option<String>,
  /// Session file, overrides the config file
  #[arg(long, env = "TRENDZ_SESSION_PATH")]
  pub session: Option<String>,
  #[arg(long)]
  pub log_level: Option<String>,
  #[command(subcommand)]
  pub subcommand: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
  /// Log in and store the session token (default)
  Login {
    #[arg(short, long, env = "TRENDZ_USERNAME")]
    username: Option<String>,
    /// Giving both username and password makes a single non-interactive attempt
    #[arg(short, long, env = "TRENDZ_PASSWORD")]
    password: Option<String>,
  },
  /// Show whether a session is stored
  Status,
}

/// Navigation in a terminal: announce where the user ends up
pub struct TerminalNavigator;

impl Navigator for TerminalNavigator {
  fn replace(&self, path: &str) {
    tracing::debug!(path, "Replace navigation");
    println!("Logged in. Continue at {}", path);
  }
}

type TerminalController = LoginController<HttpAuthClient, FileSessionStore, TerminalNavigator>;

pub async fn run_login(
  config: &CliConfig,
  username: Option<String>,
  password: Option<String>,
) -> Result<(), anyhow::Error> {
  let controller = LoginController::new(
    HttpAuthClient::new(),
    FileSessionStore::new(config.session_path()),
    TerminalNavigator,
  );

  if let LoginView::Redirect { to } = controller.view() {
    println!("Already logged in. Continue at {}", to);
    return Ok(());
  }

  if let Some(username) = &username {
    controller.change_username(username.as_str());
  }

  match password {
    Some(password) if username.is_some() => {
      controller.change_password(password);
      match controller.submit().await {
        LoginView::Redirect { .. } => Ok(()),
        LoginView::Form(view) => Err(anyhow::anyhow!(view.error_banner.unwrap_or_default())),
      }
    }
    _ => run_interactive(&controller).await,
  }
}

async fn run_interactive(controller: &TerminalController) -> Result<(), anyhow::Error> {
  let mut rl = DefaultEditor::new()?;

  loop {
    let current = controller.state();
    let username = match rl.readline_with_initial("Username: ", (current.username.as_str(), "")) {
      Ok(line) => line,
      Err(ReadlineError::Interrupted | ReadlineError::Eof) => return Ok(()),
      Err(e) => return Err(e.into()),
    };
    controller.change_username(username);
    controller.change_password(prompt_password("Password: ")?);

    match controller.submit().await {
      LoginView::Redirect { .. } => return Ok(()),
      LoginView::Form(view) => {
        if let Some(banner) = view.error_banner {
          eprintln!("{}", banner);
        }
      }
    }
  }
}

pub fn run_status(config: &CliConfig) -> Result<(), anyhow::Error> {
  use crate::login::{render, FormState, SessionStore};

  let store = FileSessionStore::new(config.session_path());
  match render(store.is_authenticated(), &FormState::new()) {
    LoginView::Redirect { to } => println!(
      "Logged in (session at {}). Login page redirects to {}",
      store.path().display(),
      to
    ),
    LoginView::Form(_) => println!("Not logged in"),
  }
  Ok(())
}

/// Prompt for password input (hidden)
fn prompt_password(prompt: &str) -> Result<String, anyhow::Error> {
  use std::io::{self, Write};

  print!("{}", prompt);
  io::stdout().flush()?;

  let mut input = String::new();

  #[cfg(unix)]
  {
    use std::os::unix::io::AsRawFd;
    let stdin_fd = io::stdin().as_raw_fd();

    let mut termios = unsafe {
      let mut t = std::mem::zeroed();
      if libc::tcgetattr(stdin_fd, &mut t) != 0 {
        // Not a terminal, read as-is
        io::stdin().read_line(&mut input)?;
        return Ok(strip_newline(input));
      }
      t
    };

    let old_termios = termios;
    termios.c_lflag &= !libc::ECHO;
    unsafe {
      libc::tcsetattr(stdin_fd, libc::TCSANOW, &termios);
    }

    let result = io::stdin().read_line(&mut input);

    unsafe {
      libc::tcsetattr(stdin_fd, libc::TCSANOW, &old_termios);
    }
    println!();

    result?;
  }

  #[cfg(not(unix))]
  io::stdin().read_line(&mut input)?;

  Ok(strip_newline(input))
}

/// Drop the line terminator only; spaces are part of the password
fn strip_newline(mut input: String) -> String {
  let len = input.trim_end_matches(['\r', '\n']).len();
  input.truncate(len);
  input
}
