//! # typefmt-core
//!
//! Type-checked, printf-style text formatting.
//!
//! A template such as `"x=[%04x]"` is rendered against an ordered slice of
//! tagged [`Arg`] values. Every directive is checked against the kind of the
//! argument it binds: rendering a float with `%d` or text with `%x` is a
//! [`FormatError::TypeMismatch`], never a reinterpretation.
//!
//! ```
//! use typefmt_core::{Arg, format, typed_format};
//!
//! let out = format("d=[%012d]", &[Arg::Int(-123)]).unwrap();
//! assert_eq!(out, "d=[-00000000123]");
//!
//! let out = typed_format!("%s has %u items (%.1f%%)", "cart", 3_u32, 42.75).unwrap();
//! assert_eq!(out, "cart has 3 items (42.7%)");
//! ```

#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod format;
pub mod text;

pub use config::{FormatOptions, env_options};
pub use error::{ConfigError, FormatError};
pub use format::{Arg, ArgKind, Conversion, Directive, Formatter, Segment, check, format, segments};

/// Format with arguments converted through `Arg::from`.
///
/// Expands to a call to [`format`] and returns its `Result`.
#[macro_export]
macro_rules! typed_format {
    ($template:expr $(,)?) => {
        $crate::format($template, &[])
    };
    ($template:expr, $($arg:expr),+ $(,)?) => {
        $crate::format($template, &[$($crate::Arg::from($arg)),+])
    };
}
