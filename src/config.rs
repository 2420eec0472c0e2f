//! Persistent defaults and effective editor settings.
//!
//! Defaults are plain command-line flags stored one per line in a global
//! config file and an optional local `.quillrc`. Command-line flags are
//! layered on top of both.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};

use crate::editor::TAB_STOP;

/// Quit presses needed to discard unsaved changes.
pub const QUIT_TIMES: u8 = 3;
/// How long a status message stays on screen.
pub const MESSAGE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub tab_stop: Option<usize>,
    pub quit_times: Option<u8>,
    pub no_syntax: bool,
    pub log_file: Option<PathBuf>,
}

impl ConfigFlags {
    pub fn union(&self, other: &Self) -> Self {
        Self {
            tab_stop: other.tab_stop.or(self.tab_stop),
            quit_times: other.quit_times.or(self.quit_times),
            no_syntax: self.no_syntax || other.no_syntax,
            log_file: other.log_file.clone().or_else(|| self.log_file.clone()),
        }
    }

    /// Resolve flags into concrete settings, filling in defaults.
    pub fn settings(&self) -> EditorSettings {
        EditorSettings {
            tab_stop: self.tab_stop.filter(|&n| n > 0).unwrap_or(TAB_STOP),
            quit_times: self.quit_times.filter(|&n| n > 0).unwrap_or(QUIT_TIMES),
            message_timeout: MESSAGE_TIMEOUT,
            syntax_enabled: !self.no_syntax,
        }
    }
}

/// Settings the editor runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorSettings {
    pub tab_stop: usize,
    pub quit_times: u8,
    pub message_timeout: Duration,
    pub syntax_enabled: bool,
}

impl Default for EditorSettings {
    fn default() -> Self {
        ConfigFlags::default().settings()
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("quill").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("quill")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("quill").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(".config").join("quill").join("config");
        }
    }

    PathBuf::from(".quillrc")
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".quillrc")
}

pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| line.split_whitespace().map(ToOwned::to_owned))
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = Vec::new();
    lines.push("# quill defaults (saved with --save)".to_string());
    if let Some(tab_stop) = flags.tab_stop {
        lines.push(format!("--tab-stop {tab_stop}"));
    }
    if let Some(quit_times) = flags.quit_times {
        lines.push(format!("--quit-times {quit_times}"));
    }
    if flags.no_syntax {
        lines.push("--no-syntax".to_string());
    }
    if let Some(path) = &flags.log_file {
        lines.push(format!("--log-file {}", path.display()));
    }
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

/// Extract known flags from a token list; unknown tokens are skipped.
pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        if token == "--no-syntax" {
            flags.no_syntax = true;
        } else if token == "--tab-stop" {
            if let Some(next) = tokens.get(i + 1) {
                flags.tab_stop = next.parse().ok();
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--tab-stop=") {
            flags.tab_stop = value.parse().ok();
        } else if token == "--quit-times" {
            if let Some(next) = tokens.get(i + 1) {
                flags.quit_times = next.parse().ok();
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--quit-times=") {
            flags.quit_times = value.parse().ok();
        } else if token == "--log-file" {
            if let Some(next) = tokens.get(i + 1) {
                flags.log_file = Some(PathBuf::from(next));
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--log-file=") {
            flags.log_file = Some(PathBuf::from(value));
        }
        i += 1;
    }
    flags
}
