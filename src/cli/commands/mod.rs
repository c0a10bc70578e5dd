pub mod add;
pub mod config;
pub mod db;
pub mod del;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod mark;
pub mod notes;
pub mod set;
pub mod stats;

use crate::config::Config;
use crate::core::session::{Session, open_session};
use crate::core::sync::{Connectivity, LoadSource};
use crate::errors::AppResult;
use crate::ui::messages::warning;

/// Open a session and tell the user when the API could not be reached.
pub(crate) fn session(cfg: &Config) -> AppResult<Session> {
    let session = open_session(cfg)?;
    if session.connectivity() == Connectivity::Online && session.loaded_from() == LoadSource::Mirror
    {
        warning("API unreachable: working on the local mirror.");
    }
    Ok(session)
}
