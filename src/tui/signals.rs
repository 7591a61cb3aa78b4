//! Termination signals while the alternate screen is active.
//!
//! Handlers only set a flag; the event loop polls it between ticks and exits
//! through the normal path so the terminal gets restored.

use std::sync::atomic::{AtomicBool, Ordering};

use nix::sys::signal::{self, SigHandler, Signal};

static TERMINATE: AtomicBool = AtomicBool::new(false);

/// Install handlers for SIGTERM, SIGINT and SIGHUP.
pub fn install_signal_handlers() -> nix::Result<()> {
    // SAFETY: the handler only stores to an atomic, which is async-signal-safe.
    unsafe {
        signal::signal(Signal::SIGTERM, SigHandler::Handler(handle_terminate))?;
        signal::signal(Signal::SIGINT, SigHandler::Handler(handle_terminate))?;
        signal::signal(Signal::SIGHUP, SigHandler::Handler(handle_terminate))?;
    }
    Ok(())
}

extern "C" fn handle_terminate(_: i32) {
    TERMINATE.store(true, Ordering::SeqCst);
}

/// A termination signal has arrived.
pub fn terminate_requested() -> bool {
    TERMINATE.load(Ordering::SeqCst)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handler_sets_flag() {
        handle_terminate(15);
        assert!(terminate_requested());
        TERMINATE.store(false, Ordering::SeqCst);
    }
}
