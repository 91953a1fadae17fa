use crate::{
    ast::{BinaryOperator, Expr, LiteralValue, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{Parser, tag_of},
            precedence::Precedence,
        },
    },
};

impl Parser<'_> {
    /// Parses one expression at the given precedence.
    ///
    /// This is the Pratt core: the current token's prefix role produces the
    /// left-hand side, and while the peek token is an infix position binding
    /// tighter than `precedence`, the expression is extended around it. A
    /// semicolon always ends the expression.
    pub(super) fn parse_expression(&mut self, precedence: Precedence) -> Option<Expr> {
        let mut left = self.parse_prefix()?;

        while !self.peek_is(&Token::Semicolon) && precedence < self.peek_precedence() {
            self.advance();
            left = self.parse_infix(left)?;
        }

        Some(left)
    }

    /// Dispatches on the current token's prefix role.
    ///
    /// Tokens with no prefix role (an operator at the start of an
    /// expression, a stray delimiter, an illegal character) record an error
    /// and produce nothing.
    fn parse_prefix(&mut self) -> Option<Expr> {
        match &self.current {
            Some(Token::Identifier(name)) => Some(Expr::Variable { name: name.clone() }),
            Some(Token::Integer(literal)) => {
                let literal = literal.clone();
                self.parse_integer_literal(&literal)
            },
            Some(Token::Str(value)) => {
                Some(Expr::Literal { value: LiteralValue::Str(value.clone()) })
            },
            Some(Token::True) => Some(Expr::Literal { value: LiteralValue::Bool(true) }),
            Some(Token::False) => Some(Expr::Literal { value: LiteralValue::Bool(false) }),
            Some(Token::Bang) => self.parse_unary_expression(UnaryOperator::Not),
            Some(Token::Minus) => self.parse_unary_expression(UnaryOperator::Negate),
            Some(Token::LParen) => self.parse_grouped_expression(),
            Some(Token::If) => self.parse_if_expression(),
            Some(Token::Function) => self.parse_function_literal(),
            Some(Token::LBracket) => self.parse_array_literal(),
            Some(Token::LBrace) => self.parse_hash_literal(),
            other => {
                let token = tag_of(other.as_ref()).to_owned();
                self.record(ParseError::NoPrefixParseFn { token });
                None
            },
        }
    }

    /// Dispatches on the current token's infix role, with `left` as the
    /// already-parsed operand. `(` is application, `[` is indexing, and the
    /// rest are binary operators.
    fn parse_infix(&mut self, left: Expr) -> Option<Expr> {
        match &self.current {
            Some(Token::LParen) => self.parse_call_expression(left),
            Some(Token::LBracket) => self.parse_index_expression(left),
            Some(token) => {
                let op = binary_operator(token)?;
                self.parse_binary_expression(left, op)
            },
            None => None,
        }
    }

    fn parse_integer_literal(&mut self, literal: &str) -> Option<Expr> {
        match literal.parse::<i64>() {
            Ok(value) => Some(Expr::Literal { value: LiteralValue::Integer(value) }),
            Err(_) => {
                self.record(ParseError::InvalidIntegerLiteral { literal: literal.to_owned() });
                None
            },
        }
    }

    fn parse_unary_expression(&mut self, op: UnaryOperator) -> Option<Expr> {
        self.advance();
        let expr = self.parse_expression(Precedence::Prefix)?;

        Some(Expr::UnaryOp { op,
                             expr: Box::new(expr) })
    }

    /// Left-associative binary operator: the right operand is parsed at the
    /// operator's own precedence.
    fn parse_binary_expression(&mut self, left: Expr, op: BinaryOperator) -> Option<Expr> {
        let precedence = self.current_precedence();
        self.advance();
        let right = self.parse_expression(precedence)?;

        Some(Expr::BinaryOp { left: Box::new(left),
                              op,
                              right: Box::new(right) })
    }

    fn parse_grouped_expression(&mut self) -> Option<Expr> {
        self.advance();
        let expr = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(&Token::RParen) {
            return None;
        }

        Some(expr)
    }

    /// Parses `if (<cond>) { ... }` with an optional `else { ... }`. Both
    /// arms are blocks; a single unbraced statement is not accepted.
    fn parse_if_expression(&mut self) -> Option<Expr> {
        if !self.expect_peek(&Token::LParen) {
            return None;
        }
        self.advance();
        let condition = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(&Token::RParen) {
            return None;
        }
        if !self.expect_peek(&Token::LBrace) {
            return None;
        }
        let consequence = self.parse_block();

        let alternative = if self.peek_is(&Token::Else) {
            self.advance();
            if !self.expect_peek(&Token::LBrace) {
                return None;
            }
            Some(self.parse_block())
        } else {
            None
        };

        Some(Expr::IfExpr { condition: Box::new(condition),
                            consequence,
                            alternative })
    }

    /// Parses `ft (<params>) { ... }`. The parameter list may be empty.
    fn parse_function_literal(&mut self) -> Option<Expr> {
        if !self.expect_peek(&Token::LParen) {
            return None;
        }
        let parameters = self.parse_function_parameters()?;

        if !self.expect_peek(&Token::LBrace) {
            return None;
        }
        let body = self.parse_block();

        Some(Expr::FunctionLiteral { parameters, body })
    }

    fn parse_function_parameters(&mut self) -> Option<Vec<String>> {
        let mut parameters = Vec::new();

        if self.peek_is(&Token::RParen) {
            self.advance();
            return Some(parameters);
        }

        parameters.push(self.expect_peek_identifier()?);
        while self.peek_is(&Token::Comma) {
            self.advance();
            parameters.push(self.expect_peek_identifier()?);
        }

        if !self.expect_peek(&Token::RParen) {
            return None;
        }

        Some(parameters)
    }

    fn parse_array_literal(&mut self) -> Option<Expr> {
        let elements = self.parse_expression_list(&Token::RBracket)?;

        Some(Expr::ArrayLiteral { elements })
    }

    fn parse_call_expression(&mut self, callee: Expr) -> Option<Expr> {
        let arguments = self.parse_expression_list(&Token::RParen)?;

        Some(Expr::FunctionCall { callee: Box::new(callee),
                                  arguments })
    }

    /// Parses a comma-separated expression list up to `end`.
    ///
    /// Shared by array literals and call arguments; an immediately
    /// encountered closing token produces an empty list. The current token
    /// is the opening delimiter on entry and `end` on exit.
    fn parse_expression_list(&mut self, end: &Token) -> Option<Vec<Expr>> {
        let mut items = Vec::new();

        if self.peek_is(end) {
            self.advance();
            return Some(items);
        }

        self.advance();
        items.push(self.parse_expression(Precedence::Lowest)?);
        while self.peek_is(&Token::Comma) {
            self.advance();
            self.advance();
            items.push(self.parse_expression(Precedence::Lowest)?);
        }

        if !self.expect_peek(end) {
            return None;
        }

        Some(items)
    }

    fn parse_index_expression(&mut self, left: Expr) -> Option<Expr> {
        self.advance();
        let index = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(&Token::RBracket) {
            return None;
        }

        Some(Expr::Index { left:  Box::new(left),
                           index: Box::new(index), })
    }

    /// Parses `{ <key>: <value>, ... }`. An empty hash `{}` is accepted.
    fn parse_hash_literal(&mut self) -> Option<Expr> {
        let mut pairs = Vec::new();

        while !self.peek_is(&Token::RBrace) {
            self.advance();
            let key = self.parse_expression(Precedence::Lowest)?;

            if !self.expect_peek(&Token::Colon) {
                return None;
            }
            self.advance();
            let value = self.parse_expression(Precedence::Lowest)?;

            pairs.push((key, value));

            if !self.peek_is(&Token::RBrace) && !self.expect_peek(&Token::Comma) {
                return None;
            }
        }

        if !self.expect_peek(&Token::RBrace) {
            return None;
        }

        Some(Expr::HashLiteral { pairs })
    }
}

/// Maps a token to its binary operator, or `None` for tokens with no
/// operator role.
const fn binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::EqualEqual => Some(BinaryOperator::Equal),
        Token::BangEqual => Some(BinaryOperator::NotEqual),
        Token::Less => Some(BinaryOperator::Less),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::LessEqual => Some(BinaryOperator::LessEqual),
        Token::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        _ => None,
    }
}
