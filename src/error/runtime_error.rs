#[derive(Debug)]
/// Represents all errors that can be raised while a postfix program runs.
pub enum RuntimeError {
    /// Tried to resolve a name that is not a declared scalar.
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Used an array name where a plain integer value is required.
    ArrayNotIndexed {
        /// The name of the array.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An integer sat on the stack where a destination name was required.
    ExpectedName {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Popped from an empty operand stack.
    StackUnderflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Arithmetic operation overflowed.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to access an array element outside the declared bounds.
    IndexOutOfBounds {
        /// The declared array size.
        size:  usize,
        /// The index that was actually requested.
        found: i64,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Took the cotangent at a point where the tangent is zero.
    CotangentUndefined {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The input stream did not yield a decimal integer.
    InvalidInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A jump targeted a label with no definition.
    UndefinedLabel {
        /// The label name.
        label: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Two label definitions share the same name.
    DuplicateLabel {
        /// The label name.
        label: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An operation opcode carried an unknown operator spelling.
    UnknownOperator {
        /// The operator spelling.
        op:   String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A constant in the postfix stream was not a representable integer.
    LiteralTooLarge {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A console stream operation failed.
    Io {
        /// The underlying I/O error.
        source: std::io::Error,
        /// The source line where the error occurred.
        line:   usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, line } => {
                write!(f, "Error on line {line}: Unknown variable '{name}'.")
            },
            Self::ArrayNotIndexed { name, line } => {
                write!(f,
                       "Error on line {line}: Array '{name}' cannot be used as a plain value; it must be indexed.")
            },
            Self::ExpectedName { line } => {
                write!(f,
                       "Error on line {line}: Expected an identifier on the operand stack; this indicates a compiler bug.")
            },
            Self::StackUnderflow { line } => {
                write!(f,
                       "Error on line {line}: Operand stack underflow; this indicates a compiler bug.")
            },
            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),
            Self::Overflow { line } => write!(f,
                                              "Error on line {line}: Integer overflow while trying to compute result."),
            Self::IndexOutOfBounds { size, found, line } => write!(f,
                                                                   "Error on line {line}: Index out of bounds. Array size is {size}, but found {found} instead."),
            Self::CotangentUndefined { line } => {
                write!(f, "Error on line {line}: Cotangent is undefined where tan(x) is zero.")
            },
            Self::InvalidInput { line } => {
                write!(f, "Error on line {line}: Invalid input, integer expected.")
            },
            Self::UndefinedLabel { label, line } => {
                write!(f, "Error on line {line}: Jump to undefined label '{label}'.")
            },
            Self::DuplicateLabel { label, line } => {
                write!(f, "Error on line {line}: Duplicate label definition '{label}'.")
            },
            Self::UnknownOperator { op, line } => {
                write!(f, "Error on line {line}: Unknown operator '{op}'.")
            },
            Self::LiteralTooLarge { line } => {
                write!(f, "Error on line {line}: Literal is too large.")
            },
            Self::Io { line, .. } => {
                write!(f, "Error on line {line}: Console I/O failed.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
