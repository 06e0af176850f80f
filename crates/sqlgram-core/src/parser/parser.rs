//! SQL Parser implementation.

use tracing::trace;

use super::error::{ParseError, ParseErrorKind};
use super::pratt::{
    infix_binding_power, prefix_binding_power, token_to_binary_op, token_to_unary_op,
};
use crate::ast::{
    BinaryOp, DataType, DeleteStatement, Expr, FunctionCall, InsertSource, InsertStatement,
    JoinClause, JoinType, Literal, NullOrdering, ObjectName, OrderBy, OrderDirection,
    SelectColumn, SelectStatement, SetQuantifier, Statement, TableRef, UpdateAssignment,
    UpdateStatement,
};
use crate::lexer::{Keyword, Lexer, Token, TokenKind, TokenStream};

/// Binding power that stops the expression parser before any infix operator.
pub(super) const PRIMARY_ONLY: u8 = u8::MAX;

/// How deep expressions, subqueries and parenthesized joins may nest.
const MAX_NESTING_DEPTH: usize = 100;

/// SQL Parser.
///
/// Greedy, left to right, with one token of lookahead and no backtracking.
/// The first token that does not fit the grammar ends the parse with a
/// [`ParseError`].
pub struct Parser<'a> {
    input: &'a str,
    tokens: TokenStream,
    /// Parameter counter for ? placeholders.
    param_counter: usize,
    /// Current nesting depth.
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Creates a new parser for the given input.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            tokens: Lexer::new(input).tokenize(),
            param_counter: 0,
            depth: 0,
        }
    }

    /// Parses exactly one SQL statement, optionally terminated by `;`.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` pointing at the first token that does not fit
    /// the grammar of the statement.
    pub fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        trace!(keyword = %self.peek().text, "dispatching statement");
        let statement = match self.peek().as_keyword() {
            Some(Keyword::Select) => Statement::Select(self.parse_select_statement()?),
            Some(Keyword::Insert) => Statement::Insert(self.parse_insert_statement()?),
            Some(Keyword::Update) => Statement::Update(self.parse_update_statement()?),
            Some(Keyword::Delete) => Statement::Delete(self.parse_delete_statement()?),
            Some(Keyword::Drop) => Statement::Drop(self.parse_drop_statement()?),
            Some(Keyword::Create) => self.parse_create_statement()?,
            _ if self.peek().is_eof() => return Err(self.unexpected("Expected a command")),
            _ => return Err(self.unknown("Unknown command")),
        };
        self.expect_end_of_statement()?;
        Ok(statement)
    }

    /// Accepts an optional `;` followed by the end of input.
    fn expect_end_of_statement(&mut self) -> Result<(), ParseError> {
        self.eat(&TokenKind::Semicolon);
        if self.peek().is_eof() {
            Ok(())
        } else {
            Err(self.unexpected("Unexpected token"))
        }
    }

    /// Parses a SELECT statement.
    pub(super) fn parse_select_statement(&mut self) -> Result<SelectStatement, ParseError> {
        self.nested(Self::parse_select_body)
    }

    fn parse_select_body(&mut self) -> Result<SelectStatement, ParseError> {
        self.expect_keyword(Keyword::Select)?;

        let quantifier = if self.eat_keyword(Keyword::Distinct) {
            Some(SetQuantifier::Distinct)
        } else if self.eat_keyword(Keyword::All) {
            Some(SetQuantifier::All)
        } else {
            None
        };

        let columns = self.parse_select_columns()?;

        // FROM is optional for expressions like SELECT 1+1
        let from = if self.eat_keyword(Keyword::From) {
            Some(self.parse_from_list()?)
        } else {
            None
        };

        let where_clause = self.parse_where_clause()?;

        let group_by = if self.eat_keyword(Keyword::Group) {
            self.expect_keyword(Keyword::By)?;
            self.parse_expression_list()?
        } else {
            vec![]
        };

        let having = if self.eat_keyword(Keyword::Having) {
            Some(self.parse_expression(0)?)
        } else {
            None
        };

        let order_by = if self.eat_keyword(Keyword::Order) {
            self.expect_keyword(Keyword::By)?;
            self.parse_order_by_list()?
        } else {
            vec![]
        };

        let (limit, offset) = self.parse_limit_clause()?;

        Ok(SelectStatement {
            quantifier,
            columns,
            from,
            where_clause,
            group_by,
            having,
            order_by,
            limit,
            offset,
        })
    }

    /// Parses SELECT columns.
    fn parse_select_columns(&mut self) -> Result<Vec<SelectColumn>, ParseError> {
        let mut columns = vec![];
        loop {
            let expr = self.parse_expression(0)?;
            let alias = self.parse_optional_alias()?;
            columns.push(SelectColumn { expr, alias });

            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }
        Ok(columns)
    }

    /// Parses `LIMIT n [OFFSET m]` or `LIMIT m, n`.
    fn parse_limit_clause(&mut self) -> Result<(Option<Expr>, Option<Expr>), ParseError> {
        if !self.eat_keyword(Keyword::Limit) {
            return Ok((None, None));
        }
        let first = self.parse_expression(0)?;
        if self.eat(&TokenKind::Comma) {
            let count = self.parse_expression(0)?;
            return Ok((Some(count), Some(first)));
        }
        let offset = if self.eat_keyword(Keyword::Offset) {
            Some(self.parse_expression(0)?)
        } else {
            None
        };
        Ok((Some(first), offset))
    }

    /// Parses an optional WHERE clause.
    fn parse_where_clause(&mut self) -> Result<Option<Expr>, ParseError> {
        if self.eat_keyword(Keyword::Where) {
            Ok(Some(self.parse_expression(0)?))
        } else {
            Ok(None)
        }
    }

    /// Parses a comma-separated FROM list; commas become cross joins.
    fn parse_from_list(&mut self) -> Result<TableRef, ParseError> {
        let mut table_ref = self.parse_table_ref()?;
        while self.eat(&TokenKind::Comma) {
            let right = self.parse_table_ref()?;
            table_ref = TableRef::Join {
                left: Box::new(table_ref),
                join: Box::new(JoinClause {
                    join_type: JoinType::Cross,
                    table: right,
                    on: None,
                    using: vec![],
                }),
            };
        }
        Ok(table_ref)
    }

    /// Parses a table reference followed by any number of joins.
    fn parse_table_ref(&mut self) -> Result<TableRef, ParseError> {
        let mut table_ref = self.parse_table_primary()?;

        while self.is_join_keyword() {
            let join_type = self.parse_join_type()?;
            let right = self.parse_table_primary()?;

            let (on, using) = if join_type == JoinType::Cross {
                (None, vec![])
            } else if self.eat_keyword(Keyword::On) {
                (Some(self.parse_expression(0)?), vec![])
            } else if self.check_keyword(Keyword::Using) {
                self.advance();
                (None, self.parse_parenthesized_identifiers("column name")?)
            } else {
                return Err(self.unexpected("Expected ON or USING"));
            };

            table_ref = TableRef::Join {
                left: Box::new(table_ref),
                join: Box::new(JoinClause {
                    join_type,
                    table: right,
                    on,
                    using,
                }),
            };
        }

        Ok(table_ref)
    }

    /// Parses a table name, a parenthesized subquery, or a parenthesized
    /// table reference.
    fn parse_table_primary(&mut self) -> Result<TableRef, ParseError> {
        if !self.eat(&TokenKind::LeftParen) {
            let name = self.parse_object_name("table name")?;
            let alias = self.parse_optional_alias()?;
            return Ok(TableRef::Table { name, alias });
        }

        if self.check_keyword(Keyword::Select) {
            let query = self.parse_select_statement()?;
            self.expect(&TokenKind::RightParen, "')'")?;
            let alias = self
                .parse_optional_alias()?
                .unwrap_or_else(|| String::from("subquery"));
            Ok(TableRef::Subquery {
                query: Box::new(query),
                alias,
            })
        } else {
            let inner = self.nested(Self::parse_table_ref)?;
            self.expect(&TokenKind::RightParen, "')'")?;
            Ok(inner)
        }
    }

    /// Checks if current token is a join keyword.
    fn is_join_keyword(&self) -> bool {
        matches!(
            self.peek().as_keyword(),
            Some(
                Keyword::Join
                    | Keyword::Inner
                    | Keyword::Left
                    | Keyword::Right
                    | Keyword::Full
                    | Keyword::Cross
            )
        )
    }

    /// Parses a join type.
    fn parse_join_type(&mut self) -> Result<JoinType, ParseError> {
        let join_type = match self.advance().as_keyword() {
            Some(Keyword::Join) => return Ok(JoinType::Inner),
            Some(Keyword::Inner) => JoinType::Inner,
            Some(Keyword::Cross) => JoinType::Cross,
            Some(Keyword::Left) => JoinType::Left,
            Some(Keyword::Right) => JoinType::Right,
            Some(Keyword::Full) => JoinType::Full,
            _ => return Err(self.unexpected("Expected JOIN")),
        };
        if matches!(join_type, JoinType::Left | JoinType::Right | JoinType::Full) {
            self.eat_keyword(Keyword::Outer);
        }
        self.expect_keyword(Keyword::Join)?;
        Ok(join_type)
    }

    /// Parses an optional `[AS] alias`.
    fn parse_optional_alias(&mut self) -> Result<Option<String>, ParseError> {
        if self.eat_keyword(Keyword::As) {
            Ok(Some(self.expect_identifier("alias")?))
        } else if matches!(self.peek().kind, TokenKind::Identifier(_)) {
            Ok(Some(self.expect_identifier("alias")?))
        } else {
            Ok(None)
        }
    }

    /// Parses an INSERT statement.
    fn parse_insert_statement(&mut self) -> Result<InsertStatement, ParseError> {
        self.expect_keyword(Keyword::Insert)?;
        self.expect_keyword(Keyword::Into)?;

        let table = self.parse_object_name("table name")?;

        let columns = if self.check(&TokenKind::LeftParen) {
            self.parse_parenthesized_identifiers("column name")?
        } else {
            vec![]
        };

        let values = if self.eat_keyword(Keyword::Values) {
            let mut rows = vec![];
            loop {
                self.expect(&TokenKind::LeftParen, "'('")?;
                let row = self.parse_expression_list()?;
                self.expect(&TokenKind::RightParen, "')'")?;
                rows.push(row);
                if !self.eat(&TokenKind::Comma) {
                    break;
                }
            }
            InsertSource::Values(rows)
        } else if self.check_keyword(Keyword::Select) {
            InsertSource::Query(Box::new(self.parse_select_statement()?))
        } else if self.eat_keyword(Keyword::Default) {
            self.expect_keyword(Keyword::Values)?;
            InsertSource::DefaultValues
        } else {
            return Err(self.unexpected("Expected VALUES, SELECT, or DEFAULT VALUES"));
        };

        Ok(InsertStatement {
            table,
            columns,
            values,
        })
    }

    /// Parses an UPDATE statement.
    fn parse_update_statement(&mut self) -> Result<UpdateStatement, ParseError> {
        self.expect_keyword(Keyword::Update)?;

        let table = self.parse_object_name("table name")?;
        let alias = self.parse_optional_alias()?;

        self.expect_keyword(Keyword::Set)?;

        let mut assignments = vec![];
        loop {
            let column = self.expect_identifier("column name")?;
            self.expect(&TokenKind::Eq, "'='")?;
            let value = self.parse_expression(0)?;
            assignments.push(UpdateAssignment { column, value });

            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }

        let from = if self.eat_keyword(Keyword::From) {
            Some(self.parse_from_list()?)
        } else {
            None
        };

        let where_clause = self.parse_where_clause()?;

        Ok(UpdateStatement {
            table,
            alias,
            assignments,
            from,
            where_clause,
        })
    }

    /// Parses a DELETE statement.
    fn parse_delete_statement(&mut self) -> Result<DeleteStatement, ParseError> {
        self.expect_keyword(Keyword::Delete)?;
        self.expect_keyword(Keyword::From)?;

        let table = self.parse_object_name("table name")?;
        let alias = self.parse_optional_alias()?;
        let where_clause = self.parse_where_clause()?;

        Ok(DeleteStatement {
            table,
            alias,
            where_clause,
        })
    }

    /// Parses an ORDER BY list.
    fn parse_order_by_list(&mut self) -> Result<Vec<OrderBy>, ParseError> {
        let mut items = vec![];
        loop {
            let expr = self.parse_expression(0)?;
            let direction = self.parse_optional_direction().unwrap_or_default();

            let nulls = if self.eat_word("nulls") {
                if self.eat_word("first") {
                    Some(NullOrdering::First)
                } else if self.eat_word("last") {
                    Some(NullOrdering::Last)
                } else {
                    return Err(self.unexpected("Expected FIRST or LAST"));
                }
            } else {
                None
            };

            items.push(OrderBy {
                expr,
                direction,
                nulls,
            });

            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }
        Ok(items)
    }

    /// Parses an optional ASC/DESC.
    pub(super) fn parse_optional_direction(&mut self) -> Option<OrderDirection> {
        if self.eat_keyword(Keyword::Asc) {
            Some(OrderDirection::Asc)
        } else if self.eat_keyword(Keyword::Desc) {
            Some(OrderDirection::Desc)
        } else {
            None
        }
    }

    /// Parses an expression using Pratt parsing.
    pub(super) fn parse_expression(&mut self, min_bp: u8) -> Result<Expr, ParseError> {
        self.nested(|parser| parser.parse_infix_chain(min_bp))
    }

    /// Parses a prefix expression and every infix operator binding at least
    /// as tightly as `min_bp`.
    fn parse_infix_chain(&mut self, min_bp: u8) -> Result<Expr, ParseError> {
        let mut lhs = self.parse_prefix()?;

        loop {
            // NOT IN / NOT BETWEEN / NOT LIKE bind like their positive forms
            let negated = self.check_keyword(Keyword::Not)
                && matches!(
                    self.peek_next().as_keyword(),
                    Some(Keyword::In | Keyword::Between | Keyword::Like)
                );
            let op = if negated {
                self.peek_next().kind.clone()
            } else {
                self.peek().kind.clone()
            };

            let Some((l_bp, r_bp)) = infix_binding_power(&op) else {
                break;
            };
            if l_bp < min_bp {
                break;
            }
            if negated {
                self.advance();
            }

            lhs = match op {
                TokenKind::Keyword(Keyword::Is) => {
                    self.advance();
                    let negated = self.eat_keyword(Keyword::Not);
                    self.expect_keyword(Keyword::Null)?;
                    Expr::IsNull {
                        expr: Box::new(lhs),
                        negated,
                    }
                }
                TokenKind::Keyword(Keyword::In) => {
                    self.advance();
                    self.expect(&TokenKind::LeftParen, "'('")?;
                    let expr = if self.check_keyword(Keyword::Select) {
                        Expr::InSubquery {
                            expr: Box::new(lhs),
                            query: Box::new(self.parse_select_statement()?),
                            negated,
                        }
                    } else {
                        Expr::In {
                            expr: Box::new(lhs),
                            list: self.parse_expression_list()?,
                            negated,
                        }
                    };
                    self.expect(&TokenKind::RightParen, "')'")?;
                    expr
                }
                TokenKind::Keyword(Keyword::Between) => {
                    self.advance();
                    let low = self.parse_expression(r_bp)?;
                    self.expect_keyword(Keyword::And)?;
                    let high = self.parse_expression(r_bp)?;
                    Expr::Between {
                        expr: Box::new(lhs),
                        low: Box::new(low),
                        high: Box::new(high),
                        negated,
                    }
                }
                TokenKind::Keyword(Keyword::Like) => {
                    self.advance();
                    let rhs = self.parse_expression(r_bp)?;
                    let op = if negated {
                        BinaryOp::NotLike
                    } else {
                        BinaryOp::Like
                    };
                    lhs.binary(op, rhs)
                }
                _ => {
                    let Some(op) = token_to_binary_op(&op) else {
                        break;
                    };
                    self.advance();
                    let rhs = self.parse_expression(r_bp)?;
                    lhs.binary(op, rhs)
                }
            };
        }

        Ok(lhs)
    }

    /// Parses a prefix expression.
    fn parse_prefix(&mut self) -> Result<Expr, ParseError> {
        if let Some(op) = token_to_unary_op(&self.peek().kind) {
            let bp = prefix_binding_power(&self.peek().kind).unwrap_or(15);
            self.advance();
            let operand = self.parse_expression(bp)?;
            return Ok(Expr::Unary {
                op,
                operand: Box::new(operand),
            });
        }

        self.parse_primary()
    }

    /// Parses a primary expression.
    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let token = self.peek().clone();

        match token.kind {
            TokenKind::Integer(n) => {
                self.advance();
                Ok(Expr::Literal(Literal::Integer(n)))
            }
            TokenKind::Float(f) => {
                self.advance();
                Ok(Expr::Literal(Literal::Float(f)))
            }
            TokenKind::String(value) => {
                self.advance();
                Ok(Expr::Literal(Literal::String(value)))
            }
            TokenKind::Blob(bytes) => {
                self.advance();
                Ok(Expr::Literal(Literal::Blob(bytes)))
            }
            TokenKind::Keyword(Keyword::True) => {
                self.advance();
                Ok(Expr::Literal(Literal::Boolean(true)))
            }
            TokenKind::Keyword(Keyword::False) => {
                self.advance();
                Ok(Expr::Literal(Literal::Boolean(false)))
            }
            TokenKind::Keyword(Keyword::Null) => {
                self.advance();
                Ok(Expr::Literal(Literal::Null))
            }

            // Parameter placeholders
            TokenKind::Question => {
                self.param_counter += 1;
                self.advance();
                Ok(Expr::Parameter {
                    name: None,
                    position: self.param_counter,
                })
            }
            TokenKind::Colon => {
                self.advance();
                let name = self.expect_identifier("parameter name")?;
                Ok(Expr::Parameter {
                    name: Some(name),
                    position: 0,
                })
            }

            TokenKind::Star => {
                self.advance();
                Ok(Expr::Wildcard { table: None })
            }

            // Parenthesized expression or subquery
            TokenKind::LeftParen => {
                self.advance();
                let expr = if self.check_keyword(Keyword::Select) {
                    Expr::Subquery(Box::new(self.parse_select_statement()?))
                } else {
                    Expr::Paren(Box::new(self.parse_expression(0)?))
                };
                self.expect(&TokenKind::RightParen, "')'")?;
                Ok(expr)
            }

            TokenKind::Keyword(Keyword::Cast) => {
                self.advance();
                self.parse_cast_expression()
            }

            TokenKind::Keyword(Keyword::Case) => self.parse_case_expression(),

            TokenKind::Keyword(Keyword::Exists) => {
                self.advance();
                self.expect(&TokenKind::LeftParen, "'('")?;
                let subquery = self.parse_select_statement()?;
                self.expect(&TokenKind::RightParen, "')'")?;
                Ok(Expr::Exists(Box::new(subquery)))
            }

            // Column reference or function call
            TokenKind::Identifier(name) => {
                self.advance();

                if self.check(&TokenKind::LeftParen) {
                    return self.parse_function_call(name);
                }

                if self.eat(&TokenKind::Dot) {
                    if self.eat(&TokenKind::Star) {
                        return Ok(Expr::Wildcard { table: Some(name) });
                    }
                    let column = self.expect_identifier("column name")?;
                    return Ok(Expr::Column {
                        table: Some(name),
                        name: column,
                        span: token.span,
                    });
                }

                Ok(Expr::Column {
                    table: None,
                    name,
                    span: token.span,
                })
            }

            _ => Err(self.unexpected("Expected expression")),
        }
    }

    /// Parses a function call.
    fn parse_function_call(&mut self, name: String) -> Result<Expr, ParseError> {
        self.expect(&TokenKind::LeftParen, "'('")?;

        let distinct = self.eat_keyword(Keyword::Distinct);

        let args = if self.check(&TokenKind::RightParen) {
            vec![]
        } else if self.eat(&TokenKind::Star) {
            vec![Expr::Wildcard { table: None }]
        } else {
            self.parse_expression_list()?
        };

        self.expect(&TokenKind::RightParen, "')'")?;

        Ok(Expr::Function(FunctionCall {
            name,
            args,
            distinct,
        }))
    }

    /// Parses a CAST expression.
    fn parse_cast_expression(&mut self) -> Result<Expr, ParseError> {
        self.expect(&TokenKind::LeftParen, "'('")?;
        let expr = self.parse_expression(0)?;
        self.expect_keyword(Keyword::As)?;
        let data_type = self.parse_data_type()?;
        self.expect(&TokenKind::RightParen, "')'")?;

        Ok(Expr::Cast {
            expr: Box::new(expr),
            data_type,
        })
    }

    /// Parses a CASE expression.
    fn parse_case_expression(&mut self) -> Result<Expr, ParseError> {
        self.expect_keyword(Keyword::Case)?;

        // Simple CASE (CASE expr WHEN ...)
        let operand = if self.check_keyword(Keyword::When) {
            None
        } else {
            Some(Box::new(self.parse_expression(0)?))
        };

        let mut when_clauses = vec![];
        while self.eat_keyword(Keyword::When) {
            let when_expr = self.parse_expression(0)?;
            self.expect_keyword(Keyword::Then)?;
            let then_expr = self.parse_expression(0)?;
            when_clauses.push((when_expr, then_expr));
        }
        if when_clauses.is_empty() {
            return Err(self.unexpected("Expected WHEN"));
        }

        let else_clause = if self.eat_keyword(Keyword::Else) {
            Some(Box::new(self.parse_expression(0)?))
        } else {
            None
        };

        self.expect_keyword(Keyword::End)?;

        Ok(Expr::Case {
            operand,
            when_clauses,
            else_clause,
        })
    }

    /// Parses a data type name with its optional length or precision.
    pub(super) fn parse_data_type(&mut self) -> Result<DataType, ParseError> {
        let TokenKind::Identifier(name) = &self.peek().kind else {
            return Err(self.unexpected("Expected data type"));
        };
        let base = DataType::from_name(name);
        self.advance();

        let data_type = match base {
            DataType::Double => {
                self.eat_word("precision");
                DataType::Double
            }
            DataType::Decimal { .. } => {
                let (precision, scale) = self.parse_optional_precision_scale()?;
                DataType::Decimal { precision, scale }
            }
            DataType::Numeric { .. } => {
                let (precision, scale) = self.parse_optional_precision_scale()?;
                DataType::Numeric { precision, scale }
            }
            DataType::Char(_) => DataType::Char(self.parse_optional_length()?),
            DataType::Varchar(_) => DataType::Varchar(self.parse_optional_length()?),
            DataType::Binary(_) => DataType::Binary(self.parse_optional_length()?),
            DataType::Varbinary(_) => DataType::Varbinary(self.parse_optional_length()?),
            other => other,
        };

        Ok(data_type)
    }

    /// Parses optional precision and scale (for DECIMAL/NUMERIC).
    fn parse_optional_precision_scale(&mut self) -> Result<(Option<u16>, Option<u16>), ParseError> {
        if !self.eat(&TokenKind::LeftParen) {
            return Ok((None, None));
        }
        let precision = self.parse_bounded_integer("precision")?;
        let scale = if self.eat(&TokenKind::Comma) {
            Some(self.parse_bounded_integer("scale")?)
        } else {
            None
        };
        self.expect(&TokenKind::RightParen, "')'")?;
        Ok((Some(precision), scale))
    }

    /// Parses optional length (for CHAR/VARCHAR/BINARY).
    fn parse_optional_length(&mut self) -> Result<Option<u32>, ParseError> {
        if !self.eat(&TokenKind::LeftParen) {
            return Ok(None);
        }
        let length = self.parse_bounded_integer("length")?;
        self.expect(&TokenKind::RightParen, "')'")?;
        Ok(Some(length))
    }

    /// Parses an integer literal that must fit in `T`.
    fn parse_bounded_integer<T: TryFrom<i64>>(&mut self, what: &str) -> Result<T, ParseError> {
        let TokenKind::Integer(n) = self.peek().kind else {
            return Err(self.unexpected(format!("Expected {what}")));
        };
        let value = T::try_from(n).map_err(|_| self.unexpected(format!("Invalid {what}")))?;
        self.advance();
        Ok(value)
    }

    /// Parses an integer literal with an optional leading minus sign.
    pub(super) fn parse_signed_integer(&mut self, what: &str) -> Result<i64, ParseError> {
        let negative = self.eat(&TokenKind::Minus);
        let TokenKind::Integer(n) = self.peek().kind else {
            return Err(self.unexpected(format!("Expected {what}")));
        };
        self.advance();
        Ok(if negative { -n } else { n })
    }

    /// Parses a comma-separated list of expressions.
    fn parse_expression_list(&mut self) -> Result<Vec<Expr>, ParseError> {
        let mut exprs = vec![];
        loop {
            exprs.push(self.parse_expression(0)?);
            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }
        Ok(exprs)
    }

    /// Parses `( expr )`.
    pub(super) fn parse_parenthesized_expression(&mut self) -> Result<Expr, ParseError> {
        self.expect(&TokenKind::LeftParen, "'('")?;
        let expr = self.parse_expression(0)?;
        self.expect(&TokenKind::RightParen, "')'")?;
        Ok(expr)
    }

    /// Parses `( ident, ... )`.
    pub(super) fn parse_parenthesized_identifiers(
        &mut self,
        what: &str,
    ) -> Result<Vec<String>, ParseError> {
        self.expect(&TokenKind::LeftParen, "'('")?;
        let mut idents = vec![];
        loop {
            idents.push(self.expect_identifier(what)?);
            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }
        self.expect(&TokenKind::RightParen, "')'")?;
        Ok(idents)
    }

    /// Parses `[schema.]name`.
    pub(super) fn parse_object_name(&mut self, what: &str) -> Result<ObjectName, ParseError> {
        let first = self.expect_identifier(what)?;
        if self.eat(&TokenKind::Dot) {
            let name = self.expect_identifier(what)?;
            Ok(ObjectName {
                schema: Some(first),
                name,
            })
        } else {
            Ok(ObjectName::new(first))
        }
    }

    // --- Helper methods ---

    /// Runs `parse` one nesting level deeper, failing past the depth limit
    /// instead of exhausting the stack.
    fn nested<T>(
        &mut self,
        parse: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(self.unexpected("Expression nested too deeply"));
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    /// The token at the cursor.
    pub(super) fn peek(&self) -> &Token {
        self.tokens.peek()
    }

    /// The token after the cursor.
    pub(super) fn peek_next(&self) -> &Token {
        self.tokens.peek_next()
    }

    /// Advances to the next token, returning the consumed one.
    pub(super) fn advance(&mut self) -> Token {
        self.tokens.advance()
    }

    /// Checks if the current token matches the given kind.
    pub(super) fn check(&self, kind: &TokenKind) -> bool {
        core::mem::discriminant(&self.peek().kind) == core::mem::discriminant(kind)
    }

    /// Checks if the current token is the given keyword.
    pub(super) fn check_keyword(&self, keyword: Keyword) -> bool {
        self.peek().as_keyword() == Some(keyword)
    }

    /// Checks if the current token is an identifier spelling `word`.
    pub(super) fn check_word(&self, word: &str) -> bool {
        matches!(&self.peek().kind, TokenKind::Identifier(name) if name.eq_ignore_ascii_case(word))
    }

    /// Consumes the current token if it matches the given kind.
    pub(super) fn eat(&mut self, kind: &TokenKind) -> bool {
        let matched = self.check(kind);
        if matched {
            self.advance();
        }
        matched
    }

    /// Consumes the current token if it is the given keyword.
    pub(super) fn eat_keyword(&mut self, keyword: Keyword) -> bool {
        let matched = self.check_keyword(keyword);
        if matched {
            self.advance();
        }
        matched
    }

    /// Consumes the current token if it is an identifier spelling `word`.
    pub(super) fn eat_word(&mut self, word: &str) -> bool {
        let matched = self.check_word(word);
        if matched {
            self.advance();
        }
        matched
    }

    /// Expects the current token to be the given kind.
    pub(super) fn expect(&mut self, kind: &TokenKind, what: &str) -> Result<(), ParseError> {
        if self.eat(kind) {
            Ok(())
        } else {
            Err(self.unexpected(format!("Expected {what}")))
        }
    }

    /// Expects the current token to be the given keyword.
    pub(super) fn expect_keyword(&mut self, keyword: Keyword) -> Result<(), ParseError> {
        if self.eat_keyword(keyword) {
            Ok(())
        } else {
            Err(self.unexpected(format!("Expected {}", keyword.as_str())))
        }
    }

    /// Expects an identifier spelling `word`.
    pub(super) fn expect_word(&mut self, word: &str) -> Result<(), ParseError> {
        if self.eat_word(word) {
            Ok(())
        } else {
            Err(self.unexpected(format!("Expected {}", word.to_ascii_uppercase())))
        }
    }

    /// Expects and returns an identifier.
    pub(super) fn expect_identifier(&mut self, what: &str) -> Result<String, ParseError> {
        match &self.peek().kind {
            TokenKind::Identifier(name) => {
                let name = name.clone();
                self.advance();
                Ok(name)
            }
            _ => Err(self.unexpected(format!("Expected {what}"))),
        }
    }

    /// Builds an error at `token`. Lexer error tokens report the lexer's reason.
    pub(super) fn error_at(
        &self,
        kind: ParseErrorKind,
        message: impl Into<String>,
        token: &Token,
    ) -> ParseError {
        match &token.kind {
            TokenKind::Error(reason) => ParseError::unexpected(reason.clone(), token, self.input),
            _ => ParseError::new(kind, message, token, self.input),
        }
    }

    /// An "unexpected token" error at the current token.
    pub(super) fn unexpected(&self, message: impl Into<String>) -> ParseError {
        self.error_at(ParseErrorKind::UnexpectedToken, message, self.peek())
    }

    /// An "unknown construct" error at the current token.
    pub(super) fn unknown(&self, message: impl Into<String>) -> ParseError {
        self.error_at(ParseErrorKind::UnknownConstruct, message, self.peek())
    }
}
