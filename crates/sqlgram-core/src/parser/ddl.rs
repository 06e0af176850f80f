//! DROP and CREATE statements.

use super::error::{ParseError, ParseErrorKind};
use super::parser::{Parser, PRIMARY_ONLY};
use crate::ast::{
    ColumnConstraint, ColumnConstraintKind, ColumnDef, CreateIndexStatement,
    CreateSequenceStatement, CreateTableStatement, CreateViewStatement, DropBehavior, DropObject,
    DropStatement, ForeignKeyRef, IndexColumn, ReferentialAction, Statement, TableConstraint,
    TableConstraintKind,
};
use crate::lexer::{Keyword, TokenKind};

impl Parser<'_> {
    /// Parses `DROP <object> <name> [CASCADE | RESTRICT]`.
    pub(super) fn parse_drop_statement(&mut self) -> Result<DropStatement, ParseError> {
        self.expect_keyword(Keyword::Drop)?;

        let object = match self.peek().as_keyword() {
            Some(Keyword::Table) => DropObject::Table,
            Some(Keyword::Index) => DropObject::Index,
            Some(Keyword::Constraint) => DropObject::Constraint,
            Some(Keyword::Sequence) => DropObject::Sequence,
            Some(Keyword::View) => DropObject::View,
            _ => return Err(self.unknown("Unknown object to drop")),
        };
        self.advance();

        let name = self.parse_object_name(&format!("{} name", object.as_str()))?;

        let behavior = match self.peek().kind {
            TokenKind::Keyword(Keyword::Cascade) => Some(DropBehavior::Cascade),
            TokenKind::Keyword(Keyword::Restrict) => Some(DropBehavior::Restrict),
            TokenKind::Semicolon | TokenKind::Eof => None,
            _ => return Err(self.stray_drop_modifier()),
        };
        if behavior.is_some() {
            self.advance();
        }

        Ok(DropStatement {
            object,
            names: vec![name],
            behavior,
        })
    }

    /// Reports a token in the CASCADE/RESTRICT slot that is neither.
    ///
    /// The stray token is consumed and the token after it is reported,
    /// unless the stray token ends the statement.
    fn stray_drop_modifier(&mut self) -> ParseError {
        let stray = self.advance();
        if matches!(self.peek().kind, TokenKind::Semicolon | TokenKind::Eof) {
            self.error_at(ParseErrorKind::UnexpectedToken, "Unexpected token", &stray)
        } else {
            self.unexpected("Unexpected token")
        }
    }

    /// Parses `CREATE [TEMP] TABLE | [UNIQUE] INDEX | VIEW | SEQUENCE`.
    pub(super) fn parse_create_statement(&mut self) -> Result<Statement, ParseError> {
        self.expect_keyword(Keyword::Create)?;
        let temporary = self.eat_word("temporary") || self.eat_word("temp");

        match self.peek().as_keyword() {
            Some(Keyword::Table) => Ok(Statement::CreateTable(
                self.parse_create_table(temporary)?,
            )),
            Some(Keyword::Unique | Keyword::Index) if !temporary => {
                Ok(Statement::CreateIndex(self.parse_create_index()?))
            }
            Some(Keyword::View) if !temporary => {
                Ok(Statement::CreateView(self.parse_create_view()?))
            }
            Some(Keyword::Sequence) if !temporary => {
                Ok(Statement::CreateSequence(self.parse_create_sequence()?))
            }
            _ => Err(self.unknown("Unknown object to create")),
        }
    }

    /// Parses an optional `IF NOT EXISTS`.
    fn parse_if_not_exists(&mut self) -> Result<bool, ParseError> {
        if !self.eat_keyword(Keyword::If) {
            return Ok(false);
        }
        self.expect_keyword(Keyword::Not)?;
        self.expect_keyword(Keyword::Exists)?;
        Ok(true)
    }

    fn parse_create_table(&mut self, temporary: bool) -> Result<CreateTableStatement, ParseError> {
        self.expect_keyword(Keyword::Table)?;
        let if_not_exists = self.parse_if_not_exists()?;
        let name = self.parse_object_name("table name")?;

        self.expect(&TokenKind::LeftParen, "'('")?;
        let mut columns = vec![];
        let mut constraints = vec![];
        loop {
            if self.eat_keyword(Keyword::Constraint) {
                let name = self.expect_identifier("constraint name")?;
                constraints.push(self.parse_table_constraint(Some(name))?);
            } else if matches!(
                self.peek().as_keyword(),
                Some(Keyword::Primary | Keyword::Unique | Keyword::Check | Keyword::Foreign)
            ) {
                constraints.push(self.parse_table_constraint(None)?);
            } else {
                columns.push(self.parse_column_def()?);
            }

            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }
        self.expect(&TokenKind::RightParen, "')'")?;

        Ok(CreateTableStatement {
            temporary,
            if_not_exists,
            name,
            columns,
            constraints,
        })
    }

    /// Parses `name type [constraint ...]`.
    fn parse_column_def(&mut self) -> Result<ColumnDef, ParseError> {
        let name = self.expect_identifier("column name")?;
        let data_type = self.parse_data_type()?;

        let mut constraints = vec![];
        loop {
            let name = if self.eat_keyword(Keyword::Constraint) {
                Some(self.expect_identifier("constraint name")?)
            } else {
                None
            };

            let kind = match self.peek().as_keyword() {
                Some(Keyword::Primary) => {
                    self.advance();
                    self.expect_keyword(Keyword::Key)?;
                    let direction = self.parse_optional_direction();
                    let autoincrement = self.eat_word("autoincrement");
                    ColumnConstraintKind::PrimaryKey {
                        direction,
                        autoincrement,
                    }
                }
                Some(Keyword::Not) => {
                    self.advance();
                    self.expect_keyword(Keyword::Null)?;
                    ColumnConstraintKind::NotNull
                }
                Some(Keyword::Null) => {
                    self.advance();
                    ColumnConstraintKind::Null
                }
                Some(Keyword::Unique) => {
                    self.advance();
                    ColumnConstraintKind::Unique
                }
                Some(Keyword::Default) => {
                    self.advance();
                    ColumnConstraintKind::Default(self.parse_expression(PRIMARY_ONLY)?)
                }
                Some(Keyword::Check) => {
                    self.advance();
                    ColumnConstraintKind::Check(self.parse_parenthesized_expression()?)
                }
                Some(Keyword::References) => {
                    ColumnConstraintKind::References(self.parse_references()?)
                }
                None if self.check_word("autoincrement") => {
                    self.advance();
                    ColumnConstraintKind::Autoincrement
                }
                _ if name.is_some() => return Err(self.unexpected("Expected column constraint")),
                _ => break,
            };
            constraints.push(ColumnConstraint { name, kind });
        }

        Ok(ColumnDef {
            name,
            data_type,
            constraints,
        })
    }

    fn parse_table_constraint(
        &mut self,
        name: Option<String>,
    ) -> Result<TableConstraint, ParseError> {
        let kind = match self.peek().as_keyword() {
            Some(Keyword::Primary) => {
                self.advance();
                self.expect_keyword(Keyword::Key)?;
                TableConstraintKind::PrimaryKey(self.parse_parenthesized_identifiers("column name")?)
            }
            Some(Keyword::Unique) => {
                self.advance();
                TableConstraintKind::Unique(self.parse_parenthesized_identifiers("column name")?)
            }
            Some(Keyword::Check) => {
                self.advance();
                TableConstraintKind::Check(self.parse_parenthesized_expression()?)
            }
            Some(Keyword::Foreign) => {
                self.advance();
                self.expect_keyword(Keyword::Key)?;
                let columns = self.parse_parenthesized_identifiers("column name")?;
                let references = self.parse_references()?;
                TableConstraintKind::ForeignKey {
                    columns,
                    references,
                }
            }
            _ => return Err(self.unexpected("Expected table constraint")),
        };
        Ok(TableConstraint { name, kind })
    }

    /// Parses `REFERENCES table [(cols)] [ON DELETE action] [ON UPDATE action]`.
    fn parse_references(&mut self) -> Result<ForeignKeyRef, ParseError> {
        self.expect_keyword(Keyword::References)?;
        let table = self.parse_object_name("referenced table")?.qualified();
        let columns = if self.check(&TokenKind::LeftParen) {
            self.parse_parenthesized_identifiers("column name")?
        } else {
            vec![]
        };

        let mut on_delete = None;
        let mut on_update = None;
        while self.eat_keyword(Keyword::On) {
            if self.eat_keyword(Keyword::Delete) {
                on_delete = Some(self.parse_referential_action()?);
            } else if self.eat_keyword(Keyword::Update) {
                on_update = Some(self.parse_referential_action()?);
            } else {
                return Err(self.unexpected("Expected DELETE or UPDATE"));
            }
        }

        Ok(ForeignKeyRef {
            table,
            columns,
            on_delete,
            on_update,
        })
    }

    fn parse_referential_action(&mut self) -> Result<ReferentialAction, ParseError> {
        if self.eat_keyword(Keyword::Cascade) {
            Ok(ReferentialAction::Cascade)
        } else if self.eat_keyword(Keyword::Restrict) {
            Ok(ReferentialAction::Restrict)
        } else if self.eat_keyword(Keyword::Set) {
            if self.eat_keyword(Keyword::Null) {
                Ok(ReferentialAction::SetNull)
            } else if self.eat_keyword(Keyword::Default) {
                Ok(ReferentialAction::SetDefault)
            } else {
                Err(self.unexpected("Expected NULL or DEFAULT"))
            }
        } else if self.eat_word("no") {
            self.expect_word("action")?;
            Ok(ReferentialAction::NoAction)
        } else {
            Err(self.unexpected("Expected referential action"))
        }
    }

    fn parse_create_index(&mut self) -> Result<CreateIndexStatement, ParseError> {
        let unique = self.eat_keyword(Keyword::Unique);
        self.expect_keyword(Keyword::Index)?;
        let if_not_exists = self.parse_if_not_exists()?;
        let name = self.parse_object_name("index name")?;
        self.expect_keyword(Keyword::On)?;
        let table = self.parse_object_name("table name")?;

        self.expect(&TokenKind::LeftParen, "'('")?;
        let mut columns = vec![];
        loop {
            let name = self.expect_identifier("column name")?;
            let direction = self.parse_optional_direction();
            columns.push(IndexColumn { name, direction });
            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }
        self.expect(&TokenKind::RightParen, "')'")?;

        Ok(CreateIndexStatement {
            unique,
            if_not_exists,
            name,
            table,
            columns,
        })
    }

    fn parse_create_view(&mut self) -> Result<CreateViewStatement, ParseError> {
        self.expect_keyword(Keyword::View)?;
        let if_not_exists = self.parse_if_not_exists()?;
        let name = self.parse_object_name("view name")?;
        self.expect_keyword(Keyword::As)?;
        if !self.check_keyword(Keyword::Select) {
            return Err(self.unexpected("Expected SELECT"));
        }
        let query = self.parse_select_statement()?;

        Ok(CreateViewStatement {
            if_not_exists,
            name,
            query: Box::new(query),
        })
    }

    fn parse_create_sequence(&mut self) -> Result<CreateSequenceStatement, ParseError> {
        self.expect_keyword(Keyword::Sequence)?;
        let if_not_exists = self.parse_if_not_exists()?;
        let name = self.parse_object_name("sequence name")?;

        let start = if self.eat_word("start") {
            self.eat_word("with");
            Some(self.parse_signed_integer("start value")?)
        } else {
            None
        };
        let increment = if self.eat_word("increment") {
            self.eat_keyword(Keyword::By);
            Some(self.parse_signed_integer("increment value")?)
        } else {
            None
        };

        Ok(CreateSequenceStatement {
            if_not_exists,
            name,
            start,
            increment,
        })
    }
}
