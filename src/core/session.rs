//! Wires a configuration into a ready-to-use sync coordinator.

use crate::config::Config;
use crate::core::mirror::LocalMirror;
use crate::core::sync::{Connectivity, SyncCoordinator};
use crate::errors::AppResult;
use crate::remote::{HttpGateway, NoRemote, RemoteGateway};

pub type Session = SyncCoordinator<Box<dyn RemoteGateway>>;

/// Open the mirror, pick the gateway and perform the cold start.
///
/// A gateway that cannot even be built (bad TLS setup, invalid URL) makes the
/// session offline instead of failing.
pub fn open_session(cfg: &Config) -> AppResult<Session> {
    let mirror = LocalMirror::open_or_memory(&cfg.database)?;

    let (gateway, connectivity): (Box<dyn RemoteGateway>, Connectivity) = match &cfg.api_url {
        Some(url) if !cfg.is_offline() => match HttpGateway::new(url, cfg.timeout()) {
            Ok(gw) => (
                Box::new(gw.with_limits(cfg.people_limit, cfg.presences_limit)),
                Connectivity::Online,
            ),
            Err(e) => {
                log::warn!("cannot build HTTP client for {url}: {e}; working offline");
                (Box::new(NoRemote), Connectivity::Offline)
            }
        },
        _ => (Box::new(NoRemote), Connectivity::Offline),
    };

    Ok(SyncCoordinator::open(gateway, mirror, connectivity))
}
