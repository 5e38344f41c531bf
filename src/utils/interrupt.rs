/// Top-level Ctrl+C handling
///
/// A single SIGINT handler covers the whole installation flow: whichever
/// blocking step is running (keypress wait, download, extraction), the
/// process says goodbye and exits cleanly instead of dying on the signal.
use nix::sys::signal::{SaFlags, SigAction, SigHandler, SigSet, Signal, sigaction};

const GOODBYE: &[u8] = b"\nSee you next time! ^^\n";

/// Exit status used when the user cancels with Ctrl+C
pub const INTERRUPT_EXIT_CODE: i32 = 0;

extern "C" fn on_interrupt(_signal: libc::c_int) {
    // Only async-signal-safe calls are allowed here
    unsafe {
        libc::write(
            libc::STDOUT_FILENO,
            GOODBYE.as_ptr().cast::<libc::c_void>(),
            GOODBYE.len(),
        );
        libc::_exit(INTERRUPT_EXIT_CODE);
    }
}

/// Install the process-wide SIGINT handler
pub fn install_interrupt_handler() -> nix::Result<()> {
    let action = SigAction::new(
        SigHandler::Handler(on_interrupt),
        SaFlags::empty(),
        SigSet::empty(),
    );

    // SAFETY: the handler only calls write(2) and _exit(2)
    unsafe { sigaction(Signal::SIGINT, &action) }?;
    Ok(())
}
