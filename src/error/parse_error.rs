#[derive(Debug)]
/// Represents all errors that can occur during scanning or parsing.
pub enum ParseError {
    /// The scanner met a character outside the language alphabet.
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// An identifier or number was interrupted by an invalid character.
    MalformedLexeme {
        /// The offending character.
        character: char,
        /// The lexeme accumulated so far.
        lexeme:    String,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// An identifier or number exceeded the scanner's lexeme buffer.
    LexemeTooLong {
        /// The truncated lexeme.
        lexeme: String,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered, with context.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to declare an identifier that already exists.
    Redeclaration {
        /// The name of the identifier.
        name:       String,
        /// The line of the earlier declaration.
        first_line: usize,
        /// The source line where the error occurred.
        line:       usize,
    },
    /// Used an identifier without a prior declaration.
    UndeclaredIdentifier {
        /// The name of the identifier.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Indexed an identifier that is not an array.
    NotAnArray {
        /// The name of the identifier.
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
    /// Declared an array with a zero or negative size.
    ArraySizeNotPositive {
        /// The name of the array.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A numeric literal was too large to be represented.
    LiteralTooLarge {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl ParseError {
    /// Gets the source line this error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::InvalidCharacter { line, .. }
            | Self::MalformedLexeme { line, .. }
            | Self::LexemeTooLong { line, .. }
            | Self::UnexpectedToken { line, .. }
            | Self::UnexpectedEndOfInput { line }
            | Self::Redeclaration { line, .. }
            | Self::UndeclaredIdentifier { line, .. }
            | Self::NotAnArray { line, .. }
            | Self::ArrayNotIndexed { line, .. }
            | Self::ArraySizeNotPositive { line, .. }
            | Self::LiteralTooLarge { line } => *line,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { character, line } => {
                write!(f, "Error on line {line}: Invalid character '{character}'.")
            },

            Self::MalformedLexeme { character,
                                    lexeme,
                                    line, } => {
                write!(f,
                       "Error on line {line}: Invalid character '{character}' after '{lexeme}'.")
            },

            Self::LexemeTooLong { lexeme, line } => {
                write!(f, "Error on line {line}: Lexeme too long: {lexeme}...")
            },

            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },

            Self::Redeclaration { name,
                                  first_line,
                                  line, } => {
                write!(f,
                       "Error on line {line}: Identifier '{name}' already declared on line {first_line}.")
            },

            Self::UndeclaredIdentifier { name, line } => {
                write!(f, "Error on line {line}: Undeclared identifier '{name}'.")
            },

            Self::NotAnArray { name, line } => {
                write!(f, "Error on line {line}: '{name}' is not an array.")
            },

            Self::ArrayNotIndexed { name, line } => {
                write!(f,
                       "Error on line {line}: Array '{name}' must be indexed to be used here.")
            },

            Self::ArraySizeNotPositive { name, line } => {
                write!(f, "Error on line {line}: Array size must be positive for '{name}'.")
            },

            Self::LiteralTooLarge { line } => {
                write!(f, "Error on line {line}: Literal is too large.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
