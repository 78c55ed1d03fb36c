/// Runs a cleanup function when dropped.
///
/// Dropping happens on normal scope exit and while unwinding from a panic,
/// so the terminal is put back in cooked mode either way.
///
/// # Examples
///
/// ```
/// use matrix_term::utils::restore::RestoreGuard;
///
/// let _guard = RestoreGuard::with(|| {
///     println!("Cleanup executed!");
/// });
/// ```
pub struct RestoreGuard<AtExit: FnOnce()> {
    exit_cb: Option<AtExit>,
}

impl<F: FnOnce()> RestoreGuard<F> {
    pub fn with(f: F) -> Self {
        Self { exit_cb: Some(f) }
    }
}

impl<F: FnOnce()> Drop for RestoreGuard<F> {
    fn drop(&mut self) {
        if let Some(f) = self.exit_cb.take() {
            f()
        }
    }
}
