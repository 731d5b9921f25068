use core::fmt;
use std::fmt::Display;

use crate::error::ListError;

/*
 * The tag of a value. A list accepts a single kind for its whole lifetime.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Integer,
    Text,
}

impl Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Integer => write!(f, "integer"),
            Kind::Text => write!(f, "text"),
        }
    }
}

/*
 * A scalar stored in a list : integers compare numerically,
 * text compares lexicographically.
 * Values of different kinds are never compared by the list.
 */
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Value {
    Integer(i64),
    Text(String),
}

impl Value {
    pub fn kind(&self) -> Kind {
        match self {
            Value::Integer(_) => Kind::Integer,
            Value::Text(_) => Kind::Text,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            Value::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Integer(_) => None,
            Value::Text(s) => Some(s),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{}", n),
            Value::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Conversion of a caller-supplied input into a list [`Value`].
///
/// Integral and textual inputs convert; anything else is rejected with
/// [`ListError::UnsupportedType`] naming what was presented.
pub trait IntoValue {
    fn into_value(self) -> Result<Value, ListError>;
}

impl IntoValue for Value {
    fn into_value(self) -> Result<Value, ListError> {
        Ok(self)
    }
}

impl IntoValue for &Value {
    fn into_value(self) -> Result<Value, ListError> {
        Ok(self.clone())
    }
}

macro_rules! integer_into_value {
    ($($t:ty),*) => {
        $(
            impl IntoValue for $t {
                fn into_value(self) -> Result<Value, ListError> {
                    Ok(Value::Integer(i64::from(self)))
                }
            }

            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Integer(i64::from(n))
                }
            }
        )*
    };
}

integer_into_value!(i8, i16, i32, i64, u8, u16, u32);

impl IntoValue for String {
    fn into_value(self) -> Result<Value, ListError> {
        Ok(Value::Text(self))
    }
}

impl IntoValue for &str {
    fn into_value(self) -> Result<Value, ListError> {
        Ok(Value::Text(self.to_owned()))
    }
}

impl IntoValue for &String {
    fn into_value(self) -> Result<Value, ListError> {
        Ok(Value::Text(self.clone()))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_owned())
    }
}

// Scalars the list refuses to hold.
impl IntoValue for f32 {
    fn into_value(self) -> Result<Value, ListError> {
        Err(ListError::UnsupportedType("float"))
    }
}

impl IntoValue for f64 {
    fn into_value(self) -> Result<Value, ListError> {
        Err(ListError::UnsupportedType("float"))
    }
}

impl IntoValue for bool {
    fn into_value(self) -> Result<Value, ListError> {
        Err(ListError::UnsupportedType("boolean"))
    }
}
