use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        symbol::SymbolTable,
    },
    rpn::{Instruction, OpCode, Program},
};

/// Result type used by all parser productions.
pub type ParseResult<T> = Result<T, ParseError>;

/// The recursive-descent parser and postfix emitter.
///
/// The parser walks the token list once, building the symbol table and
/// emitting postfix instructions as productions are recognized; there is no
/// intermediate syntax tree. It aborts on the first error.
///
/// ## Example
/// ```
/// use opslang::interpreter::{lexer::Lexer, parser::Parser};
///
/// let (tokens, diagnostics) = Lexer::tokenize("int a; begin a = 1 + 2; end");
/// assert!(diagnostics.is_empty());
///
/// let program = Parser::new(tokens).parse().unwrap();
/// assert_eq!(program.instructions.len(), 5);
/// assert_eq!(program.symbols.len(), 1);
/// ```
pub struct Parser {
    pub(super) tokens:        Vec<Token>,
    pub(super) cursor:        usize,
    pub(super) rpn:           Vec<Instruction>,
    pub(super) symbols:       SymbolTable,
    pub(super) label_counter: usize,
}

impl Parser {
    /// Creates a parser over a token list.
    ///
    /// The list is expected to end in [`TokenKind::Eos`]; a sentinel is
    /// appended if it does not, so the cursor always has a token to rest on.
    #[must_use]
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().is_none_or(|t| t.kind != TokenKind::Eos) {
            let line = tokens.last().map_or(1, |t| t.line);
            tokens.push(Token::new(TokenKind::Eos, "", line));
        }
        Self { tokens,
               cursor: 0,
               rpn: Vec::new(),
               symbols: SymbolTable::new(),
               label_counter: 0 }
    }

    /// Runs the single parsing pass.
    ///
    /// # Returns
    /// The postfix instruction stream and the symbol table, packaged as a
    /// [`Program`].
    ///
    /// # Errors
    /// Returns the first lexical-structure, syntactic, or semantic error
    /// met; nothing is recovered.
    pub fn parse(mut self) -> ParseResult<Program> {
        self.parse_program()?;
        self.expect(TokenKind::Eos, "at the end of the program")?;
        Ok(Program { instructions: self.rpn,
                     symbols:      self.symbols, })
    }

    /// Returns the current token without advancing.
    pub(super) fn peek(&self) -> &Token {
        &self.tokens[self.cursor.min(self.tokens.len() - 1)]
    }

    /// Returns the current token and advances past it.
    ///
    /// The cursor never moves beyond the end-of-input sentinel.
    pub(super) fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        self.cursor = (self.cursor + 1).min(self.tokens.len() - 1);
        token
    }

    /// Consumes the current token if it has the expected kind.
    ///
    /// `context` completes the diagnostic, e.g. `"after the assignment"`.
    pub(super) fn expect(&mut self, kind: TokenKind, context: &str) -> ParseResult<Token> {
        let token = self.peek().clone();
        if token.kind == kind {
            self.advance();
            return Ok(token);
        }
        if token.kind == TokenKind::Eos && kind != TokenKind::Eos {
            return Err(ParseError::UnexpectedEndOfInput { line: token.line });
        }
        Err(ParseError::UnexpectedToken { token: format!("expected {kind} {context}, found {} ('{}')",
                                                         token.kind, token.lexeme),
                                          line:  token.line, })
    }

    /// Appends one instruction to the postfix stream.
    pub(super) fn emit(&mut self, op: OpCode, value: impl Into<String>, line: usize) {
        self.rpn.push(Instruction::new(op, value, line));
    }

    /// Draws the next label name from the monotone counter.
    pub(super) fn new_label(&mut self) -> String {
        let label = format!("L{}", self.label_counter);
        self.label_counter += 1;
        label
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::interpreter::lexer::Lexer;

    fn parse(source: &str) -> ParseResult<Program> {
        let (tokens, diagnostics) = Lexer::tokenize(source);
        assert!(diagnostics.is_empty(), "unexpected lexical diagnostics");
        Parser::new(tokens).parse()
    }

    #[test]
    fn parsing_is_deterministic() {
        let source = "int a; arr b[3]; begin a = 1; while (a < 3) begin b[a] = a; a = a + 1; \
                      end ; output(b[2]); end";
        let first = parse(source).unwrap();
        let second = parse(source).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn declaration_only_program_emits_nothing() {
        let program = parse("int a; arr b[4];").unwrap();
        assert!(program.instructions.is_empty());
        assert_eq!(program.symbols.len(), 2);
    }

    #[test]
    fn program_must_start_with_a_declaration_or_block() {
        let err = parse("output(1);").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedToken { line: 1, .. }));
    }

    #[test]
    fn trailing_tokens_after_the_block_are_rejected() {
        let err = parse("begin end int a;").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedToken { .. }));
    }

    #[test]
    fn labels_are_unique_and_every_jump_resolves() {
        let program = parse("int i; begin i = 0; while (i < 3) begin if (i ~ 1) begin \
                             output(i); end ; i = i + 1; end ; end")
                          .unwrap();

        let mut defined = std::collections::HashSet::new();
        for instruction in &program.instructions {
            if instruction.op == OpCode::Label {
                assert!(defined.insert(instruction.value.clone()),
                        "duplicate label {}",
                        instruction.value);
            }
        }
        for instruction in &program.instructions {
            if matches!(instruction.op, OpCode::Jump | OpCode::JumpFalse) {
                assert!(defined.contains(&instruction.value),
                        "jump to undefined label {}",
                        instruction.value);
            }
        }
    }
}
