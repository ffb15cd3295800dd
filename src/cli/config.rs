use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Replace `${VAR}` references and a leading `~/` with environment values.
/// Unset variables expand to nothing.
fn expand_path(input: &str) -> String {
  let mut result = match input.strip_prefix("~/") {
    Some(rest) => format!("${{HOME}}/{}", rest),
    None => input.to_string(),
  };

  while let Some(start) = result.find("${") {
    let Some(len) = result[start..].find('}') else {
      break;
    };
    let value = std::env::var(&result[start + 2..start + len]).unwrap_or_default();
    result.replace_range(start..start + len + 1, &value);
  }

  result
}

/// Settings for the terminal login driver
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
  #[serde(default)]
  pub session: SessionSection,
  #[serde(default)]
  pub logging: LoggingSection,
}

/// Where the session token is kept between runs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSection {
  #[serde(default = "default_session_path")]
  pub path: String,
}
fn default_session_path() -> String {
  "~/.trendz/session.json".into()
}
impl Default for SessionSection {
  fn default() -> Self {
    Self {
      path: default_session_path(),
    }
  }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSection {
  #[serde(default = "default_level")]
  pub level: String,
}
fn default_level() -> String {
  "info".into()
}
impl Default for LoggingSection {
  fn default() -> Self {
    Self {
      level: default_level(),
    }
  }
}

impl CliConfig {
  pub fn from_file(path: impl AsRef<Path>) -> Result<Self, anyhow::Error> {
    let content = std::fs::read_to_string(&path)?;
    Ok(serde_yaml::from_str(&content)?)
  }

  /// First `trendz-login.yaml`/`.yml` present in `dir`
  ///
  /// Does not log: it runs before the subscriber is installed.
  pub fn find_in(dir: impl AsRef<Path>) -> Option<PathBuf> {
    ["trendz-login.yaml", "trendz-login.yml"]
      .iter()
      .map(|name| dir.as_ref().join(name))
      .find(|path| path.exists())
  }

  /// Session file path with environment references resolved
  pub fn session_path(&self) -> PathBuf {
    PathBuf::from(expand_path(&self.session.path))
  }
}
