use std::borrow::Cow;
use serde_json::{Number, Value};
use thiserror::Error;

/// A value about to be placed inside a single-quoted formula literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawValue {
    /// No value. Callers use this to omit a clause entirely.
    Absent,
    /// Textual form of a string, number or boolean.
    Scalar(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EscapeError {
    /// Structured values (arrays, objects) have no literal form.
    #[error("Invalid argument: cannot escape a JSON {0}")]
    InvalidArgument(&'static str),
}

/// Escape a value for use inside a single-quoted formula literal.
///
/// Every `'` is doubled to `''`. Nothing else is touched: backslashes, double
/// quotes, control characters and non-ASCII text pass through as they are.
/// This only stops a value from terminating the literal early, it is not a
/// general-purpose sanitizer.
///
/// `RawValue::Absent` comes back as `None` so callers can tell "leave this
/// clause out" apart from an empty string. Escape exactly once: running the
/// output through again doubles the quotes a second time.
pub fn escape_value(value: impl Into<RawValue>) -> Option<String> {
    match value.into() {
        RawValue::Absent => None,
        RawValue::Scalar(s) => Some(s.replace('\'', "''")),
    }
}

/// Escape a dynamically typed JSON value, rejecting arrays and objects.
pub fn try_escape_json(value: &Value) -> Result<Option<String>, EscapeError> {
    Ok(escape_value(RawValue::try_from(value)?))
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Scalar(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Scalar(s)
    }
}

impl From<&String> for RawValue {
    fn from(s: &String) -> Self {
        RawValue::Scalar(s.clone())
    }
}

impl From<Cow<'_, str>> for RawValue {
    fn from(s: Cow<'_, str>) -> Self {
        RawValue::Scalar(s.into_owned())
    }
}

impl From<char> for RawValue {
    fn from(c: char) -> Self {
        RawValue::Scalar(c.to_string())
    }
}

impl From<bool> for RawValue {
    fn from(b: bool) -> Self {
        RawValue::Scalar(b.to_string())
    }
}

macro_rules! scalar_from_display {
    ($($t:ty),*) => {
        $(
            impl From<$t> for RawValue {
                fn from(v: $t) -> Self {
                    RawValue::Scalar(v.to_string())
                }
            }
        )*
    };
}

scalar_from_display!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// Floats print like integers when whole (`42.0` -> `42`). Negative zero
// collapses to `0` and infinities spell out `Infinity`.
macro_rules! scalar_from_float {
    ($($t:ty),*) => {
        $(
            impl From<$t> for RawValue {
                fn from(v: $t) -> Self {
                    let text = if v == 0.0 {
                        "0".to_string()
                    } else if v == <$t>::INFINITY {
                        "Infinity".to_string()
                    } else if v == <$t>::NEG_INFINITY {
                        "-Infinity".to_string()
                    } else {
                        v.to_string()
                    };
                    RawValue::Scalar(text)
                }
            }
        )*
    };
}

scalar_from_float!(f32, f64);

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => RawValue::Absent,
        }
    }
}

impl TryFrom<&Value> for RawValue {
    type Error = EscapeError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null => Ok(RawValue::Absent),
            Value::String(s) => Ok(RawValue::Scalar(s.clone())),
            Value::Number(n) => Ok(number_text(n)),
            Value::Bool(b) => Ok(RawValue::Scalar(b.to_string())),
            Value::Array(_) => Err(EscapeError::InvalidArgument("array")),
            Value::Object(_) => Err(EscapeError::InvalidArgument("object")),
        }
    }
}

// Same text as the native integer and float conversions.
fn number_text(n: &Number) -> RawValue {
    if let Some(i) = n.as_i64() {
        RawValue::from(i)
    } else if let Some(u) = n.as_u64() {
        RawValue::from(u)
    } else if let Some(f) = n.as_f64() {
        RawValue::from(f)
    } else {
        RawValue::Scalar(n.to_string())
    }
}
