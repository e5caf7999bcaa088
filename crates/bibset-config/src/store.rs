//! The default-options store and its scoped-override guard.
//!
//! [`ConfigStore`] holds a [`MergeOptions`] value behind an `RwLock`. It is
//! a plain value owned by the caller (a host application typically keeps
//! one per process), not a global. [`ConfigStore::scoped`] installs
//! replacement defaults and returns an [`OptionsGuard`] that restores the
//! previous defaults when dropped, including during unwinding.

use std::sync::RwLock;

use tracing::debug;

use crate::error::{ConfigError, ConfigResult};
use crate::options::{MergeOptions, OptionsOverride};

/// Default merge options behind an `RwLock`.
#[derive(Debug)]
pub struct ConfigStore {
    options: RwLock<MergeOptions>,
}

impl ConfigStore {
    /// A store initialized with the given defaults.
    pub fn new(options: MergeOptions) -> Self {
        Self {
            options: RwLock::new(options),
        }
    }

    /// The current default options.
    pub fn get(&self) -> ConfigResult<MergeOptions> {
        let opts = self
            .options
            .read()
            .map_err(|e| ConfigError::Poisoned(e.to_string()))?;
        Ok(opts.clone())
    }

    /// Replace the default options, returning the previous value.
    pub fn set(&self, options: MergeOptions) -> ConfigResult<MergeOptions> {
        let mut slot = self
            .options
            .write()
            .map_err(|e| ConfigError::Poisoned(e.to_string()))?;
        let previous = std::mem::replace(&mut *slot, options);
        Ok(previous)
    }

    /// Install an override on the defaults for the guard's lifetime.
    ///
    /// The previous defaults are captured and restored when the returned
    /// guard drops, whatever the exit path.
    pub fn scoped(&self, replacement: OptionsOverride) -> ConfigResult<OptionsGuard<'_>> {
        let previous = self.get()?;
        let installed = replacement.apply(&previous);
        self.set(installed)?;
        debug!("installed scoped option override");
        Ok(OptionsGuard {
            store: self,
            previous,
        })
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new(MergeOptions::default())
    }
}

/// Restores a [`ConfigStore`]'s previous defaults on drop.
#[derive(Debug)]
#[must_use = "dropping the guard immediately undoes the override"]
pub struct OptionsGuard<'a> {
    store: &'a ConfigStore,
    previous: MergeOptions,
}

impl Drop for OptionsGuard<'_> {
    fn drop(&mut self) {
        // Restoration must happen even if the body panicked while our
        // override was installed; recover the lock from a poison state.
        let mut slot = match self.store.options.write() {
            Ok(slot) => slot,
            Err(poisoned) => poisoned.into_inner(),
        };
        *slot = self.previous.clone();
        debug!("restored previous default options");
    }
}
