// src/session/io.rs
//! Session persistence: a JSON file mirroring the `{"state": {...}}` shape
//! the backend's other clients use, plus a best-effort keyring copy of the
//! bearer token.

use bevy::log::{error, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, BufReader, BufWriter, ErrorKind};
use std::path::PathBuf;

use crate::api::types::User;
use crate::settings::io::app_config_dir;

use super::AuthSession;

const SESSION_FILE: &str = "auth-storage.json";
const KEYRING_SERVICE_NAME: &str = "pawboard";
const KEYRING_TOKEN_USERNAME: &str = "api_token";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct PersistedSession {
    pub state: SessionState,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SessionState {
    pub user: Option<User>,
    pub token: Option<String>,
}

fn get_session_path() -> io::Result<PathBuf> {
    Ok(app_config_dir()?.join(SESSION_FILE))
}

/// Loads the persisted session. Any unreadable state means "signed out",
/// never an error surfaced to the operator.
pub fn load_session_from_file() -> PersistedSession {
    let path = match get_session_path() {
        Ok(path) => path,
        Err(e) => {
            error!("Session: could not resolve config dir: {}", e);
            return PersistedSession::default();
        }
    };
    match fs::File::open(&path) {
        Ok(file) => match serde_json::from_reader(BufReader::new(file)) {
            Ok(session) => {
                info!("Session: restored from {:?}", path);
                session
            }
            Err(e) => {
                warn!("Session: discarding malformed session file {:?}: {}", path, e);
                PersistedSession::default()
            }
        },
        Err(e) if e.kind() == ErrorKind::NotFound => PersistedSession::default(),
        Err(e) => {
            error!("Session: failed to open {:?}: {}", path, e);
            PersistedSession::default()
        }
    }
}

pub fn save_session_to_file(session: &AuthSession) -> io::Result<()> {
    let path = get_session_path()?;
    let persisted = PersistedSession {
        state: SessionState {
            user: session.user.clone(),
            token: session.token.clone(),
        },
    };
    let file = fs::File::create(&path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), &persisted)
        .map_err(io::Error::other)?;
    info!("Session: saved to {:?}", path);
    Ok(())
}

pub fn delete_session_file() {
    let Ok(path) = get_session_path() else {
        return;
    };
    match fs::remove_file(&path) {
        Ok(()) => info!("Session: removed {:?}", path),
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => warn!("Session: failed to remove {:?}: {}", path, e),
    }
}

/// Mirrors the token into the OS keyring. The JSON file stays the source of
/// truth; keyring failures are logged and ignored.
pub fn remember_token(token: &str) {
    match keyring::Entry::new(KEYRING_SERVICE_NAME, KEYRING_TOKEN_USERNAME) {
        Ok(entry) => {
            if let Err(e) = entry.set_password(token) {
                warn!("Session: failed to store token in keyring: {}", e);
            }
        }
        Err(e) => warn!("Session: failed to access keyring: {}", e),
    }
}

pub fn forget_token() {
    match keyring::Entry::new(KEYRING_SERVICE_NAME, KEYRING_TOKEN_USERNAME) {
        Ok(entry) => match entry.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => {}
            Err(e) => warn!("Session: failed to clear token from keyring: {}", e),
        },
        Err(e) => warn!("Session: failed to access keyring: {}", e),
    }
}
