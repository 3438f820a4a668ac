//! Process-wide debug output, off by default.
//!
//! One flag, one mutator. Collaborators log through the crate-internal
//! [`debug_log!`] macro, which checks the flag before doing any formatting.
//! With the `defmt` feature the lines land in the defmt stream; without it
//! they go nowhere (the flag is still honored, so call sites stay uniform).

use core::fmt;

use portable_atomic::{AtomicBool, Ordering};

static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

/// Enable or disable debug output for the whole process.
///
/// Idempotent; the flag is the only global mutable state in the crate.
pub fn set_enabled(enabled: bool) {
    DEBUG_ENABLED.store(enabled, Ordering::Relaxed);
}

/// Whether debug output is currently enabled.
#[must_use]
pub fn is_enabled() -> bool {
    DEBUG_ENABLED.load(Ordering::Relaxed)
}

/// Emit one already-formatted line. Go through [`debug_log!`] instead so
/// disabled builds skip the formatting entirely.
#[doc(hidden)]
pub fn emit(args: fmt::Arguments<'_>) {
    #[cfg(test)]
    capture::push(args);
    #[cfg(all(feature = "defmt", not(test)))]
    defmt::info!("{}", defmt::Display2Format(&args));
    #[cfg(not(any(test, feature = "defmt")))]
    let _ = args;
}

macro_rules! debug_log {
    ($($arg:tt)*) => {
        if $crate::debug::is_enabled() {
            $crate::debug::emit(core::format_args!($($arg)*));
        }
    };
}
pub(crate) use debug_log;
