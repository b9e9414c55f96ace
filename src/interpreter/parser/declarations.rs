use crate::{
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
        symbol::SymbolClass,
    },
    util::num::parse_i64_checked,
};

impl Parser {
    /// Parses a whole program.
    ///
    /// A program is a chain of `int`/`arr` declarations followed by at most
    /// one `begin … end` block; no declarations may appear inside the
    /// block. A program consisting solely of declarations is legal and
    /// emits nothing.
    pub(in crate::interpreter::parser) fn parse_program(&mut self) -> ParseResult<()> {
        let first = self.peek();
        if !matches!(first.kind, TokenKind::Int | TokenKind::Arr | TokenKind::Beg) {
            return Err(ParseError::UnexpectedToken { token: format!("program must start with 'int', 'arr', or 'begin', found {} ('{}')",
                                                                    first.kind, first.lexeme),
                                                     line:  first.line, });
        }

        while matches!(self.peek().kind, TokenKind::Int | TokenKind::Arr) {
            self.parse_declaration()?;
        }
        if self.peek().kind == TokenKind::Beg {
            self.parse_block()?;
        }
        Ok(())
    }

    /// Parses one `int name;` or `arr name[N];` declaration.
    fn parse_declaration(&mut self) -> ParseResult<()> {
        match self.peek().kind {
            TokenKind::Int => {
                self.advance();
                let id = self.expect(TokenKind::Id, "after 'int'")?;
                self.expect(TokenKind::Semicolon, "after the declaration")?;
                self.symbols
                    .declare(&id.lexeme, SymbolClass::Scalar, 0, id.line)
            },
            TokenKind::Arr => {
                self.advance();
                let id = self.expect(TokenKind::Id, "after 'arr'")?;
                self.expect(TokenKind::LBracket, "before the array size")?;
                let size_token = self.expect(TokenKind::Num, "as the array size")?;
                let size =
                    parse_i64_checked(&size_token.lexeme,
                                      ParseError::LiteralTooLarge { line: size_token.line })?;
                if size <= 0 {
                    return Err(ParseError::ArraySizeNotPositive { name: id.lexeme,
                                                                  line: size_token.line, });
                }
                self.expect(TokenKind::RBracket, "after the array size")?;
                self.expect(TokenKind::Semicolon, "after the declaration")?;
                #[allow(clippy::cast_sign_loss)]
                let size = size as usize;
                self.symbols
                    .declare(&id.lexeme, SymbolClass::Array, size, id.line)
            },
            _ => unreachable!("caller checks for a declaration keyword"),
        }
    }

    /// Parses the `begin … end` program block.
    fn parse_block(&mut self) -> ParseResult<()> {
        self.expect(TokenKind::Beg, "to open the program block")?;
        self.parse_statements()?;
        self.expect(TokenKind::End, "to close the program block")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::lexer::Lexer;

    fn parse(source: &str) -> ParseResult<crate::rpn::Program> {
        let (tokens, _) = Lexer::tokenize(source);
        Parser::new(tokens).parse()
    }

    #[test]
    fn declarations_fill_the_symbol_table() {
        let program = parse("int a; arr b[7]; begin end").unwrap();
        let a = program.symbols.lookup("a", 1).unwrap();
        assert_eq!((a.class, a.size), (SymbolClass::Scalar, 0));
        let b = program.symbols.lookup("b", 1).unwrap();
        assert_eq!((b.class, b.size), (SymbolClass::Array, 7));
    }

    #[test]
    fn redeclaration_is_a_parse_error() {
        let err = parse("int a; arr a[2]; begin end").unwrap_err();
        assert!(matches!(err, ParseError::Redeclaration { .. }));
    }

    #[test]
    fn array_size_must_be_positive() {
        let err = parse("arr a[0]; begin end").unwrap_err();
        assert!(matches!(err, ParseError::ArraySizeNotPositive { .. }));
    }

    #[test]
    fn array_size_overflow_is_reported() {
        let err = parse("arr a[99999999999999999999]; begin end").unwrap_err();
        assert!(matches!(err, ParseError::LiteralTooLarge { .. }));
    }

    #[test]
    fn declarations_inside_the_block_are_rejected() {
        let err = parse("begin int a; end").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedToken { .. }));
    }
}
