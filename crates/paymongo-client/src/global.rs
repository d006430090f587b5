//! Optional process-wide client.
//!
//! Prefer building a [`PayMongo`] and passing it around. This module is for
//! code that cannot thread a handle through. The slot is behind a mutex, so
//! concurrent first calls build at most one client.

use std::sync::{Arc, Mutex, PoisonError};

use crate::client::PayMongo;
use crate::config::PayMongoConfig;
use crate::error::Result;

static INSTANCE: Mutex<Option<Arc<PayMongo>>> = Mutex::new(None);

/// Return the stored client, building it from `config` if there is none or
/// `force_new` is set.
///
/// `config` is ignored when a client is already stored and `force_new` is false.
///
/// # Errors
///
/// Returns a configuration error if a new client has to be built and `config`
/// is invalid. The stored client is left untouched in that case.
pub fn get_or_init(config: PayMongoConfig, force_new: bool) -> Result<Arc<PayMongo>> {
    let mut slot = INSTANCE.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(existing) = slot.as_ref().filter(|_| !force_new) {
        return Ok(Arc::clone(existing));
    }

    let client = Arc::new(PayMongo::new(config)?);
    *slot = Some(Arc::clone(&client));
    Ok(client)
}

/// The stored client, if any.
#[must_use]
pub fn get() -> Option<Arc<PayMongo>> {
    INSTANCE
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Drop the stored client. Handles already returned stay usable.
pub fn reset() {
    *INSTANCE.lock().unwrap_or_else(PoisonError::into_inner) = None;
}
