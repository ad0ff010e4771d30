//! Maps a run outcome to the user-visible line and the process exit status.
use std::io::{self, Write};

use entrycheck_core::{FailureKind, Result, Stage};

/// Write the diagnostic for `outcome` and return the exit status.
///
/// Success prints nothing. `failed to init` goes to `out`; every other
/// failure writes one `<context>: <message>` line to `err`.
pub fn report(outcome: &Result<Stage>, out: &mut impl Write, err: &mut impl Write) -> io::Result<u8> {
    match outcome {
        Ok(_) => Ok(0),
        Err(e) => {
            // Same streams as the C harness: perror lines on stderr, the init failure on stdout.
            if e.kind() == FailureKind::InvocationFailure {
                writeln!(out, "{}", e.diagnostic())?;
            } else {
                writeln!(err, "{}", e.diagnostic())?;
            }
            Ok(e.exit_code())
        }
    }
}
