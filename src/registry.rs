//! Registry of named page behaviors with an explicit install/dispose
//! lifecycle.
//!
//! Each behavior installs independently and hands back a [`Handle`] owning
//! whatever it wired up (listeners, observers). Install order is the order
//! behaviors were registered; disposal runs in reverse.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

use crate::error::BehaviorError;
use crate::events::Listener;

/// Resources owned by one installed behavior.
#[derive(Default)]
pub struct Handle {
    disposers: Vec<Box<dyn FnOnce()>>,
}

impl Handle {
    /// A handle owning nothing — used by guarded behaviors whose optional
    /// elements are absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Own an arbitrary cleanup action.
    pub fn keep(&mut self, dispose: impl FnOnce() + 'static) {
        self.disposers.push(Box::new(dispose));
    }

    /// Own an attached listener, detaching it on disposal.
    pub fn keep_listener(&mut self, listener: Listener) {
        self.keep(move || listener.detach());
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.disposers.is_empty()
    }

    fn dispose(self) {
        for dispose in self.disposers.into_iter().rev() {
            dispose();
        }
    }
}

struct Installed {
    name: &'static str,
    handle: Handle,
}

/// Installed behaviors, in install order.
#[derive(Default)]
pub struct Registry {
    installed: Vec<Installed>,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run a behavior's installer and record its handle under `name`.
    ///
    /// # Errors
    ///
    /// Propagates the installer's error; nothing is recorded on failure.
    pub fn install(
        &mut self,
        name: &'static str,
        init: impl FnOnce() -> Result<Handle, BehaviorError>,
    ) -> Result<(), BehaviorError> {
        let handle = init()?;
        log::debug!("installed behavior `{name}`");
        self.installed.push(Installed { name, handle });
        Ok(())
    }

    /// Names of installed behaviors, in install order.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.installed.iter().map(|entry| entry.name).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.installed.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.installed.is_empty()
    }

    /// Dispose every behavior, most recently installed first.
    pub fn dispose_all(&mut self) {
        while let Some(entry) = self.installed.pop() {
            log::debug!("disposed behavior `{}`", entry.name);
            entry.handle.dispose();
        }
    }
}

impl Drop for Registry {
    fn drop(&mut self) {
        self.dispose_all();
    }
}
