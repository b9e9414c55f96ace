use crate::{
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
        symbol::SymbolClass,
    },
    rpn::OpCode,
};

impl Parser {
    /// Parses a statement list until a token outside the statement first
    /// set is met (the empty production).
    pub(in crate::interpreter::parser) fn parse_statements(&mut self) -> ParseResult<()> {
        loop {
            match self.peek().kind {
                TokenKind::Id => self.parse_assignment()?,
                TokenKind::If => self.parse_if()?,
                TokenKind::While => self.parse_while()?,
                TokenKind::Input => self.parse_input()?,
                TokenKind::Output => self.parse_output()?,
                TokenKind::Sin | TokenKind::Cos | TokenKind::Tg | TokenKind::Ctg => {
                    self.parse_trig_statement()?;
                },
                _ => return Ok(()),
            }
        }
    }

    /// Parses `name = G ;` or `name[G] = G ;`.
    ///
    /// Scalar form emits `PUSH_VAR name; <rhs>; OP "="`. Indexed form emits
    /// `PUSH_ARRAY_BASE name; <index>; <rhs>; OP "[]="`, so the machine
    /// finds the value on top, the index beneath it, and the array name at
    /// the bottom.
    fn parse_assignment(&mut self) -> ParseResult<()> {
        let id = self.advance();
        let symbol = self.symbols.lookup(&id.lexeme, id.line)?.clone();

        let indexed = self.peek().kind == TokenKind::LBracket;
        if indexed {
            if symbol.class != SymbolClass::Array {
                return Err(ParseError::NotAnArray { name: id.lexeme,
                                                    line: id.line, });
            }
            self.emit(OpCode::PushArrayBase, id.lexeme, id.line);
            self.advance();
            self.parse_expression()?;
            self.expect(TokenKind::RBracket, "after the index of the assignment target")?;
        } else {
            if symbol.class == SymbolClass::Array {
                return Err(ParseError::ArrayNotIndexed { name: id.lexeme,
                                                         line: id.line, });
            }
            self.emit(OpCode::PushVar, id.lexeme, id.line);
        }

        self.expect(TokenKind::Eq, "in the assignment")?;
        self.parse_expression()?;
        self.emit(OpCode::Op, if indexed { "[]=" } else { "=" }, id.line);
        self.expect(TokenKind::Semicolon, "after the assignment")?;
        Ok(())
    }

    /// Parses `if (C) begin A end ;` with an optional
    /// `else begin A end` before the semicolon.
    ///
    /// Both labels are drawn from the counter up front; the no-else form
    /// only ever defines the first one, keeping listings identical to runs
    /// that take the other shape.
    fn parse_if(&mut self) -> ParseResult<()> {
        let if_token = self.advance();
        self.expect(TokenKind::LParen, "after 'if'")?;
        self.parse_condition()?;
        self.expect(TokenKind::RParen, "after the 'if' condition")?;

        let else_label = self.new_label();
        let end_label = self.new_label();
        self.emit(OpCode::JumpFalse, else_label.clone(), if_token.line);

        self.expect(TokenKind::Beg, "to open the 'if' block")?;
        self.parse_statements()?;
        self.expect(TokenKind::End, "to close the 'if' block")?;

        if self.peek().kind == TokenKind::Else {
            let else_line = self.peek().line;
            self.emit(OpCode::Jump, end_label.clone(), else_line);
            self.emit(OpCode::Label, else_label, else_line);
            self.advance();
            self.expect(TokenKind::Beg, "to open the 'else' block")?;
            self.parse_statements()?;
            self.expect(TokenKind::End, "to close the 'else' block")?;
            self.emit(OpCode::Label, end_label, self.peek().line);
        } else {
            self.emit(OpCode::Label, else_label, if_token.line);
        }

        self.expect(TokenKind::Semicolon, "after the 'if' statement")?;
        Ok(())
    }

    /// Parses `while (C) begin A end ;`.
    ///
    /// The loop label is defined before the condition, so the backward jump
    /// at the block's end never references an unseen label.
    fn parse_while(&mut self) -> ParseResult<()> {
        let while_token = self.advance();
        let top_label = self.new_label();
        let exit_label = self.new_label();
        self.emit(OpCode::Label, top_label.clone(), while_token.line);

        self.expect(TokenKind::LParen, "after 'while'")?;
        self.parse_condition()?;
        self.expect(TokenKind::RParen, "after the 'while' condition")?;
        self.emit(OpCode::JumpFalse, exit_label.clone(), while_token.line);

        self.expect(TokenKind::Beg, "to open the 'while' block")?;
        self.parse_statements()?;
        self.expect(TokenKind::End, "to close the 'while' block")?;

        self.emit(OpCode::Jump, top_label, while_token.line);
        self.emit(OpCode::Label, exit_label, while_token.line);
        self.expect(TokenKind::Semicolon, "after the 'while' statement")?;
        Ok(())
    }

    /// Parses `input (name) ;` or `input (name[G]) ;`.
    fn parse_input(&mut self) -> ParseResult<()> {
        let keyword = self.advance();
        self.expect(TokenKind::LParen, "after 'input'")?;
        let id = self.expect(TokenKind::Id, "as the 'input' target")?;
        let symbol = self.symbols.lookup(&id.lexeme, id.line)?.clone();

        if self.peek().kind == TokenKind::LBracket {
            if symbol.class != SymbolClass::Array {
                return Err(ParseError::NotAnArray { name: id.lexeme,
                                                    line: id.line, });
            }
            self.emit(OpCode::PushArrayBase, id.lexeme, id.line);
            self.advance();
            self.parse_expression()?;
            self.expect(TokenKind::RBracket, "after the index of the 'input' target")?;
            self.emit(OpCode::Read, "IN[]", keyword.line);
        } else {
            if symbol.class == SymbolClass::Array {
                return Err(ParseError::ArrayNotIndexed { name: id.lexeme,
                                                         line: id.line, });
            }
            self.emit(OpCode::PushVar, id.lexeme, id.line);
            self.emit(OpCode::Read, "IN", keyword.line);
        }

        self.expect(TokenKind::RParen, "after the 'input' target")?;
        self.expect(TokenKind::Semicolon, "after the 'input' statement")?;
        Ok(())
    }

    /// Parses `output (G) ;`.
    fn parse_output(&mut self) -> ParseResult<()> {
        let keyword = self.advance();
        self.expect(TokenKind::LParen, "after 'output'")?;
        self.parse_expression()?;
        self.expect(TokenKind::RParen, "after the 'output' expression")?;
        self.emit(OpCode::Write, "OUT", keyword.line);
        self.expect(TokenKind::Semicolon, "after the 'output' statement")?;
        Ok(())
    }

    /// Parses a statement-form trigonometric call, `sin (G) ;` and friends.
    fn parse_trig_statement(&mut self) -> ParseResult<()> {
        let function = self.advance();
        self.expect(TokenKind::LParen, "after the function name")?;
        self.parse_expression()?;
        self.expect(TokenKind::RParen, "after the function argument")?;
        self.emit(Self::trig_opcode(function.kind), function.lexeme, function.line);
        self.expect(TokenKind::Semicolon, "after the call statement")?;
        Ok(())
    }
}
