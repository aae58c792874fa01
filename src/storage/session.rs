//! Session-scoped history persistence.
//!
//! The history log lives for the duration of the login session, mirroring
//! browser session storage: it is written under `$XDG_RUNTIME_DIR` (cleared
//! by the OS when the session ends) when available, falling back to the
//! system temp directory. `DLTM_CONVERTER_SESSION_DIR` overrides the
//! location, which is how the integration tests isolate themselves.
//!
//! Loading never fails: a missing or corrupt history file yields an empty
//! log and the next save rewrites it.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::history::HistoryLog;

const HISTORY_FILENAME: &str = "history.json";

/// Environment override for the session directory (used by tests)
pub const SESSION_DIR_ENV: &str = "DLTM_CONVERTER_SESSION_DIR";

/// Directory holding session-scoped state
pub fn session_dir() -> PathBuf {
    if let Ok(dir) = env::var(SESSION_DIR_ENV) {
        return PathBuf::from(dir);
    }
    dirs::runtime_dir().unwrap_or_else(env::temp_dir).join("dltm-converter")
}

/// Path of the history file inside the session directory
pub fn history_path() -> PathBuf {
    session_dir().join(HISTORY_FILENAME)
}

/// Load the history log, treating a missing or unreadable file as empty
pub fn load_history(path: &Path) -> HistoryLog {
    let Ok(json) = fs::read_to_string(path) else {
        return HistoryLog::new();
    };
    serde_json::from_str(&json).unwrap_or_default()
}

/// Save the history log atomically (temp file + rename)
pub fn save_history(path: &Path, log: &HistoryLog) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create session directory: {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(log).context("Failed to serialize history")?;
    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, json).context("Failed to write history temp file")?;
    fs::rename(&temp_path, path).context("Failed to rename history temp file")?;

    Ok(())
}
