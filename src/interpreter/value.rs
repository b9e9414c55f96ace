/// One entry of the machine's operand stack.
///
/// The stack carries either computed integer values or identifier names.
/// Names stay names until an opcode consumes them: assignment and input
/// must pop a *destination*, so the machine cannot resolve eagerly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StackItem {
    /// A computed integer value.
    Int(i64),
    /// An identifier name, scalar or array, not yet resolved.
    Name(String),
}

impl std::fmt::Display for StackItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Name(name) => write!(f, "\"{name}\""),
        }
    }
}

impl From<i64> for StackItem {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for StackItem {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}
