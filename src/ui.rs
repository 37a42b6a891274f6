//! Human-facing status lines.
//!
//! Everything here goes to stderr: stdout is reserved for machine-readable
//! results consumed by CI.

use tracing_subscriber::EnvFilter;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    eprintln!("\x1b[32m✓\x1b[0m {}", message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    eprintln!("\x1b[33m→\x1b[0m {}", message);
}

/// Display the transition from the latest tag to the computed one.
pub fn display_proposed_tag(old_tag: Option<&str>, new_tag: &str) {
    match old_tag {
        Some(old) => {
            eprintln!("\x1b[1mNext Tag:\x1b[0m");
            eprintln!("  From: \x1b[31m{}\x1b[0m", old);
            eprintln!("  To:   \x1b[32m{}\x1b[0m", new_tag);
        }
        None => {
            eprintln!("\x1b[1mInitial Tag:\x1b[0m");
            eprintln!("  New tag: \x1b[32m{}\x1b[0m", new_tag);
        }
    }
}

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise `verbose` selects debug output for
/// this crate and plain warnings for everything else.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose {
        "warn,next_version=debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}
