//! # opslang
//!
//! opslang is a teaching-grade toolchain for a small imperative language
//! with integer scalars, fixed-size integer arrays, structured control
//! flow, console I/O, and a handful of trigonometric primitives. Source
//! text is scanned by a table-driven lexer, translated on the fly by a
//! recursive-descent parser into a postfix (reverse-Polish) instruction
//! stream, and executed by a stack machine.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::{BufRead, Write};

use crate::{
    error::ParseError,
    interpreter::{lexer::Lexer, machine::Machine, parser::Parser},
    rpn::Program,
};

/// Provides unified error types for compilation and execution.
///
/// This module defines all errors that can be raised while scanning,
/// parsing, or running a program. Every error carries the source line it
/// refers to and renders as a single human-readable diagnostic.
///
/// # Responsibilities
/// - Defines error enums for the compile-time and runtime failure modes.
/// - Attaches line numbers and detailed messages for context.
/// - Integrates with the standard error handling traits.
pub mod error;
/// Orchestrates the three toolchain stages.
///
/// This module ties together the lexer, the parser/emitter, and the stack
/// machine, along with the symbol table and operand-stack value types they
/// share.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, and machine.
/// - Provides the stage types the driver and the tests build upon.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// Defines the postfix intermediate representation.
///
/// This module declares the opcode set, the instruction record with its
/// string payload and source line, and the [`Program`] pairing the
/// instruction stream with the symbol table.
///
/// # Responsibilities
/// - Defines the closed opcode set shared by parser and machine.
/// - Carries originating source lines through to runtime diagnostics.
/// - Renders instructions for the driver's postfix listing.
pub mod rpn;
/// General utilities for safe numeric conversion.
///
/// This module provides reusable helpers for parsing decimal literals and
/// collapsing floating-point intermediates back into the integer value
/// domain.
///
/// # Responsibilities
/// - Parses literal text with explicit overflow handling.
/// - Truncates trigonometric results toward zero, checked.
pub mod util;

/// Compiles source text into a postfix program.
///
/// Runs the scanner and the parser. Lexical diagnostics are fatal here:
/// scanning always completes, but the first recorded diagnostic is
/// returned instead of a program.
///
/// # Errors
/// Returns the first lexical, syntactic, or semantic error, tagged with
/// its source line.
///
/// # Examples
/// ```
/// use opslang::compile;
///
/// let program = compile("int a; begin a = 2 + 3; output(a); end").unwrap();
/// assert_eq!(program.symbols.len(), 1);
///
/// // 'b' is never declared.
/// assert!(compile("begin b = 1; end").is_err());
/// ```
pub fn compile(source: &str) -> Result<Program, ParseError> {
    let (tokens, mut diagnostics) = Lexer::tokenize(source);
    if !diagnostics.is_empty() {
        return Err(diagnostics.remove(0));
    }
    Parser::new(tokens).parse()
}

/// Compiles and runs a program against the given console streams.
///
/// This is the whole pipeline in one call, as the tests and the demo
/// walker use it. The driver binary performs the same steps itself so it
/// can print the token, postfix, and symbol-table listings in between.
///
/// # Errors
/// Returns the first compile-time or runtime error.
///
/// # Examples
/// ```
/// use opslang::run_source;
///
/// let mut input = std::io::Cursor::new("");
/// let mut output = Vec::new();
/// run_source("int a; begin a = 2 + 3 * 4; output(a); end", &mut input, &mut output).unwrap();
///
/// assert_eq!(String::from_utf8(output).unwrap(), "14\n");
/// ```
pub fn run_source(source: &str,
                  input: &mut impl BufRead,
                  output: &mut impl Write)
                  -> Result<(), Box<dyn std::error::Error>> {
    let program = compile(source)?;
    Machine::new(&program, input, output)?.run()?;
    Ok(())
}
