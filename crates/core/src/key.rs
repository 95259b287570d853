//! Path segments for walking nested values.

use std::borrow::Cow;
use std::fmt;

/// One step of a lookup path, mirroring a `(string | number)[]` path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Name(String),
    Index(usize),
}

impl Key {
    /// The segment as an object key (`0` becomes `"0"`).
    pub fn as_name(&self) -> Cow<'_, str> {
        match self {
            Key::Name(name) => Cow::Borrowed(name),
            Key::Index(i) => Cow::Owned(i.to_string()),
        }
    }

    /// The segment as an array index, if it is one or parses as one.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Key::Name(name) => name.parse().ok(),
            Key::Index(i) => Some(*i),
        }
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Self::Name(value.to_string())
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Self::Name(value)
    }
}

impl From<usize> for Key {
    fn from(value: usize) -> Self {
        Self::Index(value)
    }
}

/// Negative numbers cannot index an array and become plain names.
impl From<i32> for Key {
    fn from(value: i32) -> Self {
        match usize::try_from(value) {
            Ok(i) => Self::Index(i),
            Err(_) => Self::Name(value.to_string()),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(k) => f.write_str(k),
            Self::Index(i) => write!(f, "{i}"),
        }
    }
}
