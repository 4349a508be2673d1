//! Value expression parsing: Pratt loop and primary terms.

use super::error::ParseError;
use super::parser::Parser;
use super::pratt::{infix_binding_power, prefix_binding_power};
use crate::ast::{
    ArrayExpression, BetweenExpression, CaseExpression, CaseKeyValuePair, CastExpression,
    ColumnReference, FrameBound, FrameType, FunctionCall, IdentifierString, InlineQuery,
    LiteralValue, OverClause, ParameterExpression, ParenExpression, PartitionByClause, RawString,
    StringSpecifierExpression, SwitchCaseArgument, TupleExpression, TypeValue, ValueExpr,
    ValueList, WindowExpression, WindowFrameSpec,
};
use crate::lexer::{Lexeme, TokenKind};

impl Parser<'_> {
    /// Parses an expression whose operators bind at least as tightly as
    /// `min_bp`.
    pub(super) fn parse_expression(&mut self, min_bp: u8) -> Result<ValueExpr, ParseError> {
        self.enter()?;
        let result = self.parse_expression_bp(min_bp);
        self.leave();
        result
    }

    fn parse_expression_bp(&mut self, min_bp: u8) -> Result<ValueExpr, ParseError> {
        let mut lhs = self.parse_prefix()?;

        loop {
            let Some(lexeme) = self.current() else {
                break;
            };
            let Some((l_bp, r_bp)) = infix_binding_power(lexeme) else {
                break;
            };
            if l_bp < min_bp {
                break;
            }
            let op = lexeme.text.as_str();
            self.advance();

            lhs = match op {
                "::" => ValueExpr::Cast(CastExpression {
                    input: Box::new(lhs),
                    cast_type: self.parse_type()?,
                }),
                "between" | "not between" => {
                    let lower = self.parse_expression(r_bp)?;
                    self.expect_keyword("and")?;
                    let upper = self.parse_expression(r_bp)?;
                    ValueExpr::Between(BetweenExpression {
                        expression: Box::new(lhs),
                        lower: Box::new(lower),
                        upper: Box::new(upper),
                        negated: op == "not between",
                    })
                }
                "in" | "not in" => {
                    let list = self.parse_in_list(r_bp)?;
                    ValueExpr::binary(lhs, op, list)
                }
                _ => {
                    let rhs = self.parse_expression(r_bp)?;
                    ValueExpr::binary(lhs, op, rhs)
                }
            };
        }

        Ok(lhs)
    }

    /// Parses a prefix operator and its operand, or a primary term.
    fn parse_prefix(&mut self) -> Result<ValueExpr, ParseError> {
        let Some(lexeme) = self.current() else {
            return Err(self.unexpected("expression"));
        };
        if let Some(bp) = prefix_binding_power(lexeme) {
            self.advance();
            let operand = self.parse_expression(bp)?;
            return Ok(ValueExpr::unary(lexeme.text.as_str(), operand));
        }
        self.parse_primary()
    }

    /// Parses a primary term.
    fn parse_primary(&mut self) -> Result<ValueExpr, ParseError> {
        let Some(lexeme) = self.current() else {
            return Err(self.unexpected("expression"));
        };

        match lexeme.kind {
            TokenKind::Literal => {
                self.advance();
                Ok(ValueExpr::Literal(literal_value(&lexeme.text)))
            }
            TokenKind::EscapedStringConstant => {
                self.advance();
                let quote = lexeme.text.find('\'').unwrap_or(lexeme.text.len());
                let (specifier, body) = lexeme.text.split_at(quote);
                Ok(ValueExpr::StringSpecifier(StringSpecifierExpression {
                    specifier: RawString::new(specifier),
                    value: LiteralValue::String(unquote(body)),
                }))
            }
            TokenKind::Parameter => {
                self.advance();
                Ok(ValueExpr::Parameter(ParameterExpression {
                    name: lexeme.text.clone(),
                }))
            }
            TokenKind::OpenParen => self.parse_paren_expression(),
            TokenKind::Identifier => self.parse_identifier_expression(),
            TokenKind::Command => match lexeme.text.as_str() {
                "null" => {
                    self.advance();
                    Ok(ValueExpr::Literal(LiteralValue::Null))
                }
                "true" | "false" => {
                    self.advance();
                    Ok(ValueExpr::Literal(LiteralValue::Boolean(
                        lexeme.text == "true",
                    )))
                }
                "case" => self.parse_case(),
                "cast" => self.parse_cast(),
                "array" => self.parse_array(),
                "exists" => {
                    self.advance();
                    let query = self.parse_parenthesized_query()?;
                    Ok(ValueExpr::unary("exists", query))
                }
                _ => Err(self.unexpected("expression")),
            },
            _ => Err(self.unexpected("expression")),
        }
    }

    /// Returns true if a query starts `n` lexemes ahead.
    pub(super) fn starts_query_at(&self, n: usize) -> bool {
        self.peek_nth(n).is_some_and(|lexeme| {
            lexeme.is_command("select") || lexeme.is_command("with") || lexeme.is_command("values")
        })
    }

    /// Parses `( query )` into an inline query.
    fn parse_parenthesized_query(&mut self) -> Result<ValueExpr, ParseError> {
        self.expect(TokenKind::OpenParen, "`(`")?;
        self.enter()?;
        let query = self.parse_query()?;
        self.expect(TokenKind::CloseParen, "`)`")?;
        self.leave();
        Ok(ValueExpr::InlineQuery(InlineQuery {
            query: Box::new(query),
        }))
    }

    /// Parses a sub-query, a tuple or a parenthesized expression.
    fn parse_paren_expression(&mut self) -> Result<ValueExpr, ParseError> {
        if self.starts_query_at(1) {
            return self.parse_parenthesized_query();
        }
        self.advance();
        self.enter()?;
        let mut values = self.parse_comma_list(|p| p.parse_expression(0))?;
        self.expect(TokenKind::CloseParen, "`)`")?;
        self.leave();

        if values.len() == 1 {
            if let Some(expression) = values.pop() {
                return Ok(ValueExpr::Paren(ParenExpression {
                    expression: Box::new(expression),
                }));
            }
        }
        Ok(ValueExpr::Tuple(TupleExpression { values }))
    }

    /// Parses the right side of `in`: a parenthesized list becomes a tuple
    /// even with one element.
    fn parse_in_list(&mut self, r_bp: u8) -> Result<ValueExpr, ParseError> {
        if !self.check(TokenKind::OpenParen) || self.starts_query_at(1) {
            return self.parse_expression(r_bp);
        }
        self.advance();
        self.enter()?;
        let values = if self.check(TokenKind::CloseParen) {
            Vec::new()
        } else {
            self.parse_comma_list(|p| p.parse_expression(0))?
        };
        self.expect(TokenKind::CloseParen, "`)`")?;
        self.leave();
        Ok(ValueExpr::Tuple(TupleExpression { values }))
    }

    /// Parses a column reference, a function call or a typed string
    /// (`date '2024-01-01'`).
    fn parse_identifier_expression(&mut self) -> Result<ValueExpr, ParseError> {
        let mut names = Vec::new();
        loop {
            match self.current() {
                Some(lexeme) if lexeme.kind == TokenKind::Identifier => {
                    self.advance();
                    names.push(IdentifierString::new(lexeme.text.as_str()));
                    if lexeme.text == "*" || !self.check(TokenKind::Dot) {
                        break;
                    }
                    self.advance();
                }
                _ => return Err(self.unexpected("identifier")),
            }
        }

        let Some(last) = names.pop() else {
            return Err(self.unexpected("identifier"));
        };

        if !last.is_wildcard() && self.check(TokenKind::OpenParen) {
            return self
                .parse_function_call(names, RawString::new(last.0))
                .map(ValueExpr::Function);
        }

        if names.is_empty() && !last.is_wildcard() {
            if let Some(lexeme) = self.current().filter(|l| is_string_literal(l)) {
                self.advance();
                return Ok(ValueExpr::StringSpecifier(StringSpecifierExpression {
                    specifier: RawString::new(last.0.to_ascii_lowercase()),
                    value: literal_value(&lexeme.text),
                }));
            }
        }

        Ok(ValueExpr::Column(ColumnReference {
            namespaces: names,
            column: last,
        }))
    }

    /// Parses `name(argument) [over ..]` after the name.
    pub(super) fn parse_function_call(
        &mut self,
        namespaces: Vec<IdentifierString>,
        name: RawString,
    ) -> Result<FunctionCall, ParseError> {
        self.expect(TokenKind::OpenParen, "`(`")?;
        self.enter()?;

        let argument = if self.check(TokenKind::CloseParen) {
            None
        } else if self.current().is_some_and(|l| l.kind == TokenKind::Identifier && l.text == "*")
        {
            self.advance();
            Some(ValueExpr::Column(ColumnReference::wildcard()))
        } else if self.eat_keyword("distinct") {
            Some(ValueExpr::unary("distinct", self.parse_argument_values()?))
        } else if self.starts_query_at(0) {
            Some(ValueExpr::InlineQuery(InlineQuery {
                query: Box::new(self.parse_query()?),
            }))
        } else if name.as_str().eq_ignore_ascii_case("extract")
            && self.check(TokenKind::Identifier)
            && self.peek_nth(1).is_some_and(|l| l.is_command("from"))
        {
            let field = self
                .current()
                .map(|l| l.text.to_ascii_lowercase())
                .unwrap_or_default();
            self.advance();
            self.advance();
            let source = self.parse_expression(0)?;
            Some(ValueExpr::binary(
                ValueExpr::Raw(RawString::new(field)),
                "from",
                source,
            ))
        } else {
            Some(self.parse_argument_values()?)
        };

        self.expect(TokenKind::CloseParen, "`)`")?;
        self.leave();

        let over = if self.eat_keyword("over") {
            Some(Box::new(self.parse_over()?))
        } else {
            None
        };

        Ok(FunctionCall {
            namespaces,
            name,
            argument: argument.map(Box::new),
            over,
        })
    }

    /// Parses one value, or several as a [`ValueList`].
    fn parse_argument_values(&mut self) -> Result<ValueExpr, ParseError> {
        let mut values = self.parse_comma_list(|p| p.parse_expression(0))?;
        if values.len() == 1 {
            if let Some(value) = values.pop() {
                return Ok(value);
            }
        }
        Ok(ValueExpr::List(ValueList { values }))
    }

    /// Parses what follows `over`.
    fn parse_over(&mut self) -> Result<OverClause, ParseError> {
        if self.check(TokenKind::Identifier) {
            return Ok(OverClause::Named(self.expect_identifier()?));
        }
        self.expect(TokenKind::OpenParen, "window name or `(`")?;
        self.enter()?;
        let window = self.parse_window_expression()?;
        self.expect(TokenKind::CloseParen, "`)`")?;
        self.leave();
        Ok(OverClause::Window(window))
    }

    /// Parses the inside of a window specification.
    pub(super) fn parse_window_expression(&mut self) -> Result<WindowExpression, ParseError> {
        let partition = if self.eat_keyword("partition by") {
            Some(PartitionByClause {
                values: self.parse_comma_list(|p| p.parse_expression(0))?,
            })
        } else {
            None
        };
        let order = if self.check_keyword("order by") {
            Some(self.parse_order_by()?)
        } else {
            None
        };
        let frame_type = if self.eat_word("rows") {
            Some(FrameType::Rows)
        } else if self.eat_word("range") {
            Some(FrameType::Range)
        } else if self.eat_word("groups") {
            Some(FrameType::Groups)
        } else {
            None
        };
        let frame = match frame_type {
            Some(frame_type) => Some(self.parse_frame_spec(frame_type)?),
            None => None,
        };
        Ok(WindowExpression {
            partition,
            order,
            frame,
        })
    }

    fn parse_frame_spec(&mut self, frame_type: FrameType) -> Result<WindowFrameSpec, ParseError> {
        if self.eat_keyword("between") {
            let start = self.parse_frame_bound()?;
            self.expect_keyword("and")?;
            let end = self.parse_frame_bound()?;
            Ok(WindowFrameSpec {
                frame_type,
                start,
                end: Some(end),
            })
        } else {
            Ok(WindowFrameSpec {
                frame_type,
                start: self.parse_frame_bound()?,
                end: None,
            })
        }
    }

    fn parse_frame_bound(&mut self) -> Result<FrameBound, ParseError> {
        if self.eat_word("unbounded") {
            if self.eat_word("preceding") {
                return Ok(FrameBound::UnboundedPreceding);
            }
            self.expect_word("following")?;
            return Ok(FrameBound::UnboundedFollowing);
        }
        if self.eat_word("current") {
            self.expect_word("row")?;
            return Ok(FrameBound::CurrentRow);
        }
        let offset = Box::new(self.parse_expression(0)?);
        if self.eat_word("preceding") {
            return Ok(FrameBound::Preceding(offset));
        }
        self.expect_word("following")?;
        Ok(FrameBound::Following(offset))
    }

    /// Parses `case [subject] when .. then .. [else ..] end`.
    fn parse_case(&mut self) -> Result<ValueExpr, ParseError> {
        self.advance();
        self.enter()?;
        let condition = if self.check_keyword("when") {
            None
        } else {
            Some(Box::new(self.parse_expression(0)?))
        };

        let mut cases = Vec::new();
        while self.eat_keyword("when") {
            let key = self.parse_expression(0)?;
            self.expect_keyword("then")?;
            let value = self.parse_expression(0)?;
            cases.push(CaseKeyValuePair { key, value });
        }
        if cases.is_empty() {
            return Err(self.unexpected("`when`"));
        }

        let else_value = if self.eat_keyword("else") {
            Some(Box::new(self.parse_expression(0)?))
        } else {
            None
        };
        self.expect_keyword("end")?;
        self.leave();

        Ok(ValueExpr::Case(CaseExpression {
            condition,
            switch: SwitchCaseArgument { cases, else_value },
        }))
    }

    /// Parses `cast(expr as type)`.
    fn parse_cast(&mut self) -> Result<ValueExpr, ParseError> {
        self.advance();
        self.expect(TokenKind::OpenParen, "`(`")?;
        self.enter()?;
        let input = self.parse_expression(0)?;
        self.expect_keyword("as")?;
        let cast_type = self.parse_type()?;
        self.expect(TokenKind::CloseParen, "`)`")?;
        self.leave();
        Ok(ValueExpr::Cast(CastExpression {
            input: Box::new(input),
            cast_type,
        }))
    }

    /// Parses `array[..]` or `array(query)`.
    fn parse_array(&mut self) -> Result<ValueExpr, ParseError> {
        self.advance();
        let expression = if self.check(TokenKind::OpenBracket) {
            self.advance();
            self.enter()?;
            let values = if self.check(TokenKind::CloseBracket) {
                Vec::new()
            } else {
                self.parse_comma_list(|p| p.parse_expression(0))?
            };
            self.expect(TokenKind::CloseBracket, "`]`")?;
            self.leave();
            ValueExpr::List(ValueList { values })
        } else if self.check(TokenKind::OpenParen) && self.starts_query_at(1) {
            self.parse_parenthesized_query()?
        } else {
            return Err(self.unexpected("`[` or `(`"));
        };
        Ok(ValueExpr::Array(ArrayExpression {
            expression: Box::new(expression),
        }))
    }

    /// Parses a type name with its optional modifier list.
    pub(super) fn parse_type(&mut self) -> Result<TypeValue, ParseError> {
        let mut name = match self.current() {
            Some(lexeme) if lexeme.kind == TokenKind::Identifier && lexeme.text != "*" => {
                self.advance();
                lexeme.text.to_ascii_lowercase()
            }
            _ => return Err(self.unexpected("type name")),
        };

        let suffix = match name.as_str() {
            "double" if self.eat_word("precision") => Some(" precision"),
            "character" | "char" | "bit" if self.eat_word("varying") => Some(" varying"),
            "timestamp" | "time" => self.eat_time_zone(),
            _ => None,
        };
        if let Some(suffix) = suffix {
            name.push_str(suffix);
        }

        let argument = if self.check(TokenKind::OpenParen) {
            self.advance();
            let values = self.parse_comma_list(|p| p.parse_expression(0))?;
            self.expect(TokenKind::CloseParen, "`)`")?;
            Some(Box::new(ValueExpr::List(ValueList { values })))
        } else {
            None
        };

        Ok(TypeValue {
            name: RawString::new(name),
            argument,
        })
    }

    /// Consumes `with time zone` or `without time zone`.
    fn eat_time_zone(&mut self) -> Option<&'static str> {
        let zone_follows = self.peek_nth(1).is_some_and(|l| l.is_word("time"))
            && self.peek_nth(2).is_some_and(|l| l.is_word("zone"));
        if !zone_follows {
            return None;
        }
        let suffix = if self.check_keyword("with") {
            " with time zone"
        } else if self.check_word("without") {
            " without time zone"
        } else {
            return None;
        };
        self.advance();
        self.advance();
        self.advance();
        Some(suffix)
    }
}

/// Returns true for a single-quoted string literal lexeme.
fn is_string_literal(lexeme: &Lexeme) -> bool {
    lexeme.kind == TokenKind::Literal && lexeme.text.starts_with('\'')
}

/// Converts literal lexeme text into a value.
fn literal_value(text: &str) -> LiteralValue {
    if text.starts_with('\'') {
        LiteralValue::String(unquote(text))
    } else {
        LiteralValue::Number(text.to_string())
    }
}

/// Strips the quotes of a string literal and resolves `''` and `\'`.
///
/// Other backslash sequences are kept as written.
pub(crate) fn unquote(raw: &str) -> String {
    let inner = raw
        .strip_prefix('\'')
        .and_then(|s| s.strip_suffix('\''))
        .unwrap_or(raw);
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some('\'') => out.push('\''),
                Some(next) => {
                    out.push('\\');
                    out.push(next);
                }
                None => out.push('\\'),
            },
            '\'' => {
                chars.next();
                out.push('\'');
            }
            _ => out.push(c),
        }
    }
    out
}
