//! Logging facade for the jsopt crates.
//!
//! Internal crates go through these macros instead of depending on a logging
//! crate directly, so the backend can be swapped without touching them.
//! Everything compiles to a no-op unless the `JSOPT_LOG` env var is set at
//! build time.

#[doc(hidden)]
pub use tracing as __tracing;
#[doc(hidden)]
pub const ENABLED: bool = matches!(option_env!("JSOPT_LOG"), Some(..));

#[macro_export]
macro_rules! debug {
    ($($tok:tt)*) => {
        if $crate::ENABLED {
            $crate::__tracing::debug!($($tok)*)
        }
    };
}

#[macro_export]
macro_rules! warn {
    ($($tok:tt)*) => {
        if $crate::ENABLED {
            $crate::__tracing::warn!($($tok)*)
        }
    };
}

#[macro_export]
macro_rules! error {
    ($($tok:tt)*) => {
        if $crate::ENABLED {
            $crate::__tracing::error!($($tok)*)
        }
    };
}
