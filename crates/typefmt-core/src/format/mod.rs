//! The formatting engine.
//!
//! Data flows one way: [`driver`] scans the template, [`directive`] parses
//! each directive, [`render`] renders one argument through [`numeric`] or
//! [`utf8`], and the driver accumulates the fragments.

pub mod arg;
pub mod directive;
pub mod driver;
pub mod numeric;
pub mod render;
pub mod utf8;

pub use arg::{Arg, ArgKind};
pub use directive::{Conversion, Directive, SignMode, parse_directive};
pub use driver::{Formatter, Segment, Segments, check, format, segments};
pub use numeric::{IntegerStyle, Radix, render_integer};
pub use render::{pad_text, render_value};
pub use utf8::{EncodedChar, encode};
