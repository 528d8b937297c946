//! Scoped `UEDITOR_*` variables for settings tests.
//!
//! Mutating the process environment is `unsafe` in Rust 2024, so every
//! [`ScopedEnv`] holds a process-wide lock until it restores the previous
//! values.

use std::ffi::OsString;
use std::sync::{Mutex, MutexGuard, PoisonError};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Environment variables set for the lifetime of the value.
#[derive(Debug)]
pub struct ScopedEnv {
    previous: Vec<(String, Option<OsString>)>,
    _lock: MutexGuard<'static, ()>,
}

impl ScopedEnv {
    /// Set each `(name, value)` pair until the returned value drops.
    #[must_use]
    pub fn with_vars(vars: &[(&str, &str)]) -> Self {
        let lock = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        let mut previous = Vec::with_capacity(vars.len());
        for (name, value) in vars {
            previous.push(((*name).to_owned(), std::env::var_os(name)));
            // SAFETY: ENV_LOCK is held for the lifetime of `Self`.
            unsafe { std::env::set_var(name, value) };
        }
        Self {
            previous,
            _lock: lock,
        }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (name, value) in self.previous.drain(..).rev() {
            // SAFETY: ENV_LOCK is still held; the guard field drops after this.
            unsafe {
                match value {
                    Some(old) => std::env::set_var(&name, old),
                    None => std::env::remove_var(&name),
                }
            }
        }
    }
}
