
use std::env;

/// Sets a test-only variable and removes it again on drop. Callers are
/// `#[serial]` and use `KC_TEST_*` names nothing else reads.
pub(crate) struct EnvGuard(&'static str);

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe { env::set_var(key, value) };
        Self(key)
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe { env::remove_var(self.0) };
    }
}
