// src/store/connection.rs

use super::backend::Connector;
use crate::error::{Error, Result};

/// Holds at most one backend per store, opened on first use and kept for the
/// life of the store. A failed connect leaves nothing behind, so the next call
/// simply tries again.
pub struct Connection<C: Connector> {
    connector: C,
    live: Option<C::Backend>,
}

impl<C: Connector> Connection<C> {
    pub fn new(connector: C) -> Self {
        Self { connector, live: None }
    }

    /// Idempotent: connects only if there is no live backend yet.
    pub fn ensure_connected(&mut self) -> Result<&C::Backend> {
        if self.live.is_none() {
            logd!("Opening backend connection");
            let backend = self.connector.connect().inspect_err(|e| {
                loge!("Connect failed: {e}");
            })?;
            logf!("Backend connection established");
            self.live = Some(backend);
        }
        self.live
            .as_ref()
            .ok_or_else(|| Error::Unavailable(s!("no live backend connection")))
    }

    pub fn is_connected(&self) -> bool {
        self.live.is_some()
    }

    pub fn connector(&self) -> &C {
        &self.connector
    }
}
