//! Tagged argument values.
//!
//! A format call binds an ordered, fixed-length slice of [`Arg`]s. Position is
//! the only binding: the Nth directive consumes the Nth argument.

use core::fmt;

/// One argument value with its runtime kind tag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Arg<'a> {
    Int(i64),
    Uint(u64),
    Float(f64),
    Text(&'a str),
    /// Opaque address for `%p`.
    Address(usize),
}

/// Kind tag of an [`Arg`], without the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgKind {
    SignedInt,
    UnsignedInt,
    Float,
    Text,
    Address,
}

impl ArgKind {
    /// All kinds, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::SignedInt,
        Self::UnsignedInt,
        Self::Float,
        Self::Text,
        Self::Address,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::SignedInt => "signed integer",
            Self::UnsignedInt => "unsigned integer",
            Self::Float => "float",
            Self::Text => "text",
            Self::Address => "address",
        }
    }
}

impl fmt::Display for ArgKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl<'a> Arg<'a> {
    #[must_use]
    pub const fn kind(&self) -> ArgKind {
        match self {
            Self::Int(_) => ArgKind::SignedInt,
            Self::Uint(_) => ArgKind::UnsignedInt,
            Self::Float(_) => ArgKind::Float,
            Self::Text(_) => ArgKind::Text,
            Self::Address(_) => ArgKind::Address,
        }
    }

    /// Address argument from a raw pointer. The pointer is never dereferenced.
    #[must_use]
    pub fn address<T: ?Sized>(ptr: *const T) -> Self {
        Self::Address(ptr.cast::<()>() as usize)
    }
}

macro_rules! impl_from_int {
    ($variant:ident, $target:ty: $($src:ty),+) => {
        $(
            impl From<$src> for Arg<'_> {
                fn from(value: $src) -> Self {
                    Self::$variant(<$target>::from(value))
                }
            }
        )+
    };
}

impl_from_int!(Int, i64: i8, i16, i32, i64);
impl_from_int!(Uint, u64: u8, u16, u32, u64);

impl From<isize> for Arg<'_> {
    fn from(value: isize) -> Self {
        // isize is at most 64 bits on every supported target.
        Self::Int(value as i64)
    }
}

impl From<usize> for Arg<'_> {
    fn from(value: usize) -> Self {
        Self::Uint(value as u64)
    }
}

impl From<f32> for Arg<'_> {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for Arg<'_> {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// Characters travel as their code point, ready for `%c`.
impl From<char> for Arg<'_> {
    fn from(value: char) -> Self {
        Self::Uint(u64::from(u32::from(value)))
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl<'a> From<&'a String> for Arg<'a> {
    fn from(value: &'a String) -> Self {
        Self::Text(value.as_str())
    }
}
