/// Compile-time errors.
///
/// Defines all error types that can occur while scanning and parsing source
/// code. Parse errors include invalid characters, unexpected tokens, and the
/// semantic checks performed against the symbol table during the single
/// parsing pass (redeclaration, undeclared use, scalar/array misuse).
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while the stack machine
/// executes a postfix program. Runtime errors include things like division
/// by zero, out-of-bounds array access, and malformed console input.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
