use std::fmt;
use std::sync::Arc;

/// One outcome of a random variable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    Bool(bool),
    /// A symbolic outcome such as `"high"` or `"sunny"`.
    Label(Arc<str>),
}

impl Value {
    pub fn label(label: &str) -> Self {
        Value::Label(Arc::from(label))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::label(s)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Label(s) => f.write_str(s),
        }
    }
}
