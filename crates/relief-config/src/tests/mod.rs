
use std::env;

use tempfile::TempDir;

/// RAII guard for environment variables - automatically restores on drop.
///
/// Kept in sync by hand with the copy in relief-auth's integration tests;
/// integration tests cannot reach another crate's `#[cfg(test)]` helpers.
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    #[allow(dead_code)]
    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Create a temp state directory and point RELIEF_STATE_DIR at it
pub(crate) fn setup_state_dir() -> (TempDir, EnvGuard) {
    let temp = TempDir::new().unwrap();
    let guard = EnvGuard::set("RELIEF_STATE_DIR", temp.path().to_str().unwrap());
    (temp, guard)
}
