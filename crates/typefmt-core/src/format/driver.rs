//! Format driver: template scan, argument binding, output accumulation.
//!
//! The scan is exposed on its own as [`segments`] so tools can inspect a
//! template without supplying values. [`Formatter`] walks the same segments
//! and binds the Nth directive to the Nth argument.

use crate::config::FormatOptions;
use crate::error::FormatError;
use crate::format::arg::{Arg, ArgKind};
use crate::format::directive::{Directive, parse_directive};
use crate::format::render::{check_fixed_precision, render_value};

/// One piece of a scanned template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'t> {
    /// Text copied verbatim. Never empty and never contains the trigger.
    Literal(&'t str),
    /// A doubled trigger; emits one trigger character and binds no argument.
    EscapedTrigger,
    /// A directive that binds the next argument.
    Directive(Directive),
}

/// Iterator over the [`Segment`]s of a template.
///
/// Yields at most one error, after which it is exhausted.
#[derive(Debug, Clone)]
pub struct Segments<'t> {
    template: &'t str,
    options: FormatOptions,
    pos: usize,
    failed: bool,
}

/// Scan `template` into segments. Purely syntactic.
#[must_use]
pub fn segments<'t>(template: &'t str, options: &FormatOptions) -> Segments<'t> {
    Segments {
        template,
        options: *options,
        pos: 0,
        failed: false,
    }
}

impl<'t> Segments<'t> {
    /// Byte offset of the next unscanned character.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.pos
    }
}

impl<'t> Iterator for Segments<'t> {
    type Item = Result<Segment<'t>, FormatError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.pos >= self.template.len() {
            return None;
        }
        let bytes = self.template.as_bytes();
        let trigger = self.options.trigger_byte();
        let start = self.pos;

        if bytes[start] != trigger {
            // The trigger is ASCII, so the next one is always on a char boundary.
            let end = bytes[start..]
                .iter()
                .position(|&b| b == trigger)
                .map_or(bytes.len(), |i| start + i);
            self.pos = end;
            return Some(Ok(Segment::Literal(&self.template[start..end])));
        }

        if bytes.get(start + 1) == Some(&trigger) {
            self.pos = start + 2;
            return Some(Ok(Segment::EscapedTrigger));
        }

        match parse_directive(self.template, start, &self.options) {
            Ok((directive, consumed)) => {
                self.pos = start + consumed;
                Some(Ok(Segment::Directive(directive)))
            }
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Formatter
// ---------------------------------------------------------------------------

/// Formatting entry point bound to a set of [`FormatOptions`].
///
/// Holds no per-call state; one instance can serve any number of threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Formatter {
    options: FormatOptions,
}

impl Formatter {
    #[must_use]
    pub const fn new(options: FormatOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub const fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Render `template` with `args` into a new string.
    pub fn format(&self, template: &str, args: &[Arg<'_>]) -> Result<String, FormatError> {
        let mut out = String::with_capacity(template.len() + 16 * args.len());
        self.format_into(template, args, &mut out)?;
        Ok(out)
    }

    /// Append the rendering of `template` to `out`.
    ///
    /// On error `out` is left exactly as it was.
    pub fn format_into(
        &self,
        template: &str,
        args: &[Arg<'_>],
        out: &mut String,
    ) -> Result<(), FormatError> {
        let mark = out.len();
        let result = self.render(template, args, out);
        if result.is_err() {
            out.truncate(mark);
        }
        result
    }

    /// Validate `template` against argument kinds without rendering.
    ///
    /// Catches every error [`format`](Self::format) would report except
    /// [`FormatError::InvalidCodePoint`], which depends on the value.
    pub fn check(&self, template: &str, kinds: &[ArgKind]) -> Result<(), FormatError> {
        let mut bound = 0;
        for segment in segments(template, &self.options) {
            let Segment::Directive(directive) = segment? else {
                continue;
            };
            let Some(&kind) = kinds.get(bound) else {
                return Err(FormatError::MissingArgument {
                    directive: bound + 1,
                });
            };
            if !directive.conversion.accepts(kind) {
                return Err(FormatError::TypeMismatch(kind, directive.conversion));
            }
            if kind == ArgKind::Float {
                check_fixed_precision(&directive, &self.options)?;
            }
            bound += 1;
        }
        ensure_all_consumed(kinds.len(), bound)
    }

    fn render(&self, template: &str, args: &[Arg<'_>], out: &mut String) -> Result<(), FormatError> {
        let mut bound = 0;
        for segment in segments(template, &self.options) {
            match segment? {
                Segment::Literal(text) => out.push_str(text),
                Segment::EscapedTrigger => out.push(self.options.trigger()),
                Segment::Directive(directive) => {
                    let Some(value) = args.get(bound) else {
                        return Err(FormatError::MissingArgument {
                            directive: bound + 1,
                        });
                    };
                    render_value(&directive, value, &self.options, out)?;
                    bound += 1;
                }
            }
        }
        ensure_all_consumed(args.len(), bound)
    }
}

fn ensure_all_consumed(supplied: usize, consumed: usize) -> Result<(), FormatError> {
    if supplied > consumed {
        return Err(FormatError::UnusedArguments { supplied, consumed });
    }
    Ok(())
}

/// Render `template` with `args` using default options.
pub fn format(template: &str, args: &[Arg<'_>]) -> Result<String, FormatError> {
    Formatter::default().format(template, args)
}

/// [`Formatter::check`] with default options.
pub fn check(template: &str, kinds: &[ArgKind]) -> Result<(), FormatError> {
    Formatter::default().check(template, kinds)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
