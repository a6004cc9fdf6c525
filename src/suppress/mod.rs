//! Scoped silencing of the process's stdout and stderr.
//!
//! Native training libraries print straight to file descriptors 1 and 2,
//! bypassing Rust's `print!` machinery. `OutputSuppressor` points both
//! descriptors at `/dev/null` while it is alive and puts the originals back
//! when dropped, on normal return, on `?` and on unwinding panics alike.
//!
//! The redirection is process-wide. Only one suppressor may be active at a
//! time; a second `new()` while one is alive fails instead of nesting.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::os::fd::{AsRawFd, FromRawFd, OwnedFd, RawFd};
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, warn};

const STDOUT_FD: RawFd = libc::STDOUT_FILENO;
const STDERR_FD: RawFd = libc::STDERR_FILENO;

static ACTIVE: AtomicBool = AtomicBool::new(false);

/// RAII guard that discards everything written to stdout/stderr.
#[derive(Debug)]
pub struct OutputSuppressor {
    saved_stdout: OwnedFd,
    saved_stderr: OwnedFd,
    // Kept open until the originals are restored.
    null: File,
}

impl OutputSuppressor {
    pub fn new() -> io::Result<Self> {
        if ACTIVE.swap(true, Ordering::SeqCst) {
            return Err(io::Error::other("output is already suppressed"));
        }
        match Self::install() {
            Ok(guard) => Ok(guard),
            Err(err) => {
                ACTIVE.store(false, Ordering::SeqCst);
                Err(err)
            }
        }
    }

    fn install() -> io::Result<Self> {
        let null = OpenOptions::new().read(true).write(true).open("/dev/null")?;
        let saved_stdout = dup(STDOUT_FD)?;
        let saved_stderr = dup(STDERR_FD)?;

        flush_std_streams();
        // From here on Drop puts the saved descriptors back, so a failure on
        // the second redirect does not leave stdout pointing at /dev/null.
        let guard = Self {
            saved_stdout,
            saved_stderr,
            null,
        };
        dup2(guard.null.as_raw_fd(), STDOUT_FD)?;
        dup2(guard.null.as_raw_fd(), STDERR_FD)?;
        debug!("stdout/stderr redirected to /dev/null");
        Ok(guard)
    }
}

impl Drop for OutputSuppressor {
    fn drop(&mut self) {
        flush_std_streams();
        let restored_out = dup2(self.saved_stdout.as_raw_fd(), STDOUT_FD);
        let restored_err = dup2(self.saved_stderr.as_raw_fd(), STDERR_FD);
        ACTIVE.store(false, Ordering::SeqCst);

        match (restored_out, restored_err) {
            (Ok(()), Ok(())) => debug!("stdout/stderr restored"),
            (out, err) => {
                if let Err(e) = out {
                    warn!("Failed to restore stdout: {e}");
                }
                if let Err(e) = err {
                    warn!("Failed to restore stderr: {e}");
                }
            }
        }
    }
}

/// Run `f` with stdout/stderr suppressed and return its result untouched.
///
/// Errors returned by `f` pass through as its value; panics unwind through
/// the guard, which restores the streams on the way out.
pub fn suppress_output<T>(f: impl FnOnce() -> T) -> io::Result<T> {
    let _guard = OutputSuppressor::new()?;
    Ok(f())
}

fn flush_std_streams() {
    let _ = io::stdout().flush();
    let _ = io::stderr().flush();
}

fn dup(fd: RawFd) -> io::Result<OwnedFd> {
    // SAFETY: `dup` has no memory-safety preconditions; a non-negative
    // return is a fresh descriptor that nothing else owns.
    let new_fd = unsafe { libc::dup(fd) };
    if new_fd < 0 {
        return Err(io::Error::last_os_error());
    }
    // SAFETY: see above.
    Ok(unsafe { OwnedFd::from_raw_fd(new_fd) })
}

fn dup2(src: RawFd, dst: RawFd) -> io::Result<()> {
    // SAFETY: `dup2` only manipulates the descriptor table.
    if unsafe { libc::dup2(src, dst) } < 0 {
        return Err(io::Error::last_os_error());
    }
    Ok(())
}
