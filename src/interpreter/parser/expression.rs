use crate::{
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
        symbol::SymbolClass,
    },
    rpn::OpCode,
    util::num::parse_i64_checked,
};

impl Parser {
    /// Parses an additive expression (`G → T U'`), emitting operands in
    /// postfix order and each `+`/`-` after both of its operands.
    pub(in crate::interpreter::parser) fn parse_expression(&mut self) -> ParseResult<()> {
        self.parse_term()?;
        while matches!(self.peek().kind, TokenKind::Plus | TokenKind::Minus) {
            let op = self.advance();
            self.parse_term()?;
            self.emit(OpCode::Op, op.lexeme, op.line);
        }
        Ok(())
    }

    /// Parses a multiplicative term (`T → F V'`).
    fn parse_term(&mut self) -> ParseResult<()> {
        self.parse_factor()?;
        while matches!(self.peek().kind, TokenKind::Star | TokenKind::Slash) {
            let op = self.advance();
            self.parse_factor()?;
            self.emit(OpCode::Op, op.lexeme, op.line);
        }
        Ok(())
    }

    /// Parses a factor: a parenthesized expression, a trigonometric call,
    /// an identifier with optional index, or a numeric literal.
    fn parse_factor(&mut self) -> ParseResult<()> {
        match self.peek().kind {
            TokenKind::LParen => {
                self.advance();
                self.parse_expression()?;
                self.expect(TokenKind::RParen, "to close the parenthesized expression")?;
                Ok(())
            },
            TokenKind::Sin | TokenKind::Cos | TokenKind::Tg | TokenKind::Ctg => {
                let function = self.advance();
                self.expect(TokenKind::LParen, "after the function name")?;
                self.parse_expression()?;
                self.expect(TokenKind::RParen, "after the function argument")?;
                self.emit(Self::trig_opcode(function.kind), function.lexeme, function.line);
                Ok(())
            },
            TokenKind::Id => {
                let id = self.advance();
                let symbol = self.symbols.lookup(&id.lexeme, id.line)?.clone();

                if self.peek().kind == TokenKind::LBracket {
                    if symbol.class != SymbolClass::Array {
                        return Err(ParseError::NotAnArray { name: id.lexeme,
                                                            line: id.line, });
                    }
                    self.emit(OpCode::PushArrayBase, id.lexeme, id.line);
                    self.advance();
                    self.parse_expression()?;
                    self.expect(TokenKind::RBracket, "after the array index")?;
                    self.emit(OpCode::Index, "[]", id.line);
                } else {
                    if symbol.class == SymbolClass::Array {
                        return Err(ParseError::ArrayNotIndexed { name: id.lexeme,
                                                                 line: id.line, });
                    }
                    self.emit(OpCode::PushVar, id.lexeme, id.line);
                }
                Ok(())
            },
            TokenKind::Num => {
                let literal = self.advance();
                parse_i64_checked(&literal.lexeme,
                                  ParseError::LiteralTooLarge { line: literal.line })?;
                self.emit(OpCode::PushConst, literal.lexeme, literal.line);
                Ok(())
            },
            _ => {
                let token = self.peek();
                Err(ParseError::UnexpectedToken { token: format!("expected '(', a function, an identifier, or a number, found {} ('{}')",
                                                                 token.kind, token.lexeme),
                                                  line:  token.line, })
            },
        }
    }

    /// Parses a relational condition (`C → G REL G`) and emits the relation
    /// after both operands.
    pub(in crate::interpreter::parser) fn parse_condition(&mut self) -> ParseResult<()> {
        self.parse_expression()?;

        let relation = self.peek().clone();
        if !matches!(relation.kind,
                     TokenKind::EqCompare | TokenKind::Gt | TokenKind::Lt | TokenKind::Not)
        {
            return Err(ParseError::UnexpectedToken { token: format!("expected a relational operator (~, >, <, !), found {} ('{}')",
                                                                    relation.kind, relation.lexeme),
                                                     line:  relation.line, });
        }
        self.advance();

        self.parse_expression()?;
        self.emit(OpCode::Op, relation.lexeme, relation.line);
        Ok(())
    }

    /// Maps a trigonometric keyword to its call opcode.
    pub(in crate::interpreter::parser) fn trig_opcode(kind: TokenKind) -> OpCode {
        match kind {
            TokenKind::Sin => OpCode::CallSin,
            TokenKind::Cos => OpCode::CallCos,
            TokenKind::Tg => OpCode::CallTan,
            TokenKind::Ctg => OpCode::CallCot,
            _ => unreachable!("caller checks for a trigonometric keyword"),
        }
    }
}
