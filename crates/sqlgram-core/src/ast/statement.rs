//! SQL statement AST types.

use super::expression::Expr;
use super::types::{ColumnDef, TableConstraint};

/// Order direction for ORDER BY and index columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderDirection {
    /// Ascending order (default).
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl OrderDirection {
    /// Returns the lowercase name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Null ordering for ORDER BY.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NullOrdering {
    /// NULLs come first.
    First,
    /// NULLs come last.
    Last,
}

impl NullOrdering {
    /// Returns the lowercase name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Last => "last",
        }
    }
}

/// An ORDER BY clause entry.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderBy {
    /// The expression to order by.
    pub expr: Expr,
    /// The direction (ASC or DESC).
    pub direction: OrderDirection,
    /// Null ordering (optional).
    pub nulls: Option<NullOrdering>,
}

/// Join type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinType {
    /// INNER JOIN.
    Inner,
    /// LEFT OUTER JOIN.
    Left,
    /// RIGHT OUTER JOIN.
    Right,
    /// FULL OUTER JOIN.
    Full,
    /// CROSS JOIN, also produced by comma-separated FROM lists.
    Cross,
}

impl JoinType {
    /// Returns the lowercase name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Inner => "inner",
            Self::Left => "left",
            Self::Right => "right",
            Self::Full => "full",
            Self::Cross => "cross",
        }
    }
}

/// A JOIN clause.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinClause {
    /// The type of join.
    pub join_type: JoinType,
    /// The table to join.
    pub table: TableRef,
    /// The join condition (for non-CROSS joins).
    pub on: Option<Expr>,
    /// USING columns (alternative to ON).
    pub using: Vec<String>,
}

/// A possibly schema-qualified object name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectName {
    /// Schema name (optional).
    pub schema: Option<String>,
    /// Object name.
    pub name: String,
}

impl ObjectName {
    /// Creates an unqualified name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            schema: None,
            name: name.into(),
        }
    }

    /// Returns `schema.name`, or just `name` when unqualified.
    #[must_use]
    pub fn qualified(&self) -> String {
        match &self.schema {
            Some(schema) => format!("{schema}.{}", self.name),
            None => self.name.clone(),
        }
    }
}

/// A table reference in FROM clause.
#[derive(Debug, Clone, PartialEq)]
pub enum TableRef {
    /// A simple table name.
    Table {
        /// Table name.
        name: ObjectName,
        /// Alias.
        alias: Option<String>,
    },
    /// A subquery.
    Subquery {
        /// The subquery.
        query: Box<SelectStatement>,
        /// Alias (required for subqueries).
        alias: String,
    },
    /// A joined table.
    Join {
        /// Left side of the join.
        left: Box<TableRef>,
        /// The join clause.
        join: Box<JoinClause>,
    },
}

/// A SELECT statement.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectStatement {
    /// DISTINCT/ALL, when written.
    pub quantifier: Option<SetQuantifier>,
    /// The columns to select.
    pub columns: Vec<SelectColumn>,
    /// The FROM clause.
    pub from: Option<TableRef>,
    /// The WHERE clause.
    pub where_clause: Option<Expr>,
    /// GROUP BY expressions.
    pub group_by: Vec<Expr>,
    /// HAVING clause.
    pub having: Option<Expr>,
    /// ORDER BY clauses.
    pub order_by: Vec<OrderBy>,
    /// LIMIT clause.
    pub limit: Option<Expr>,
    /// OFFSET clause.
    pub offset: Option<Expr>,
}

/// `SELECT DISTINCT` or `SELECT ALL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetQuantifier {
    Distinct,
    All,
}

impl SetQuantifier {
    /// Returns the lowercase name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Distinct => "distinct",
            Self::All => "all",
        }
    }
}

/// A column in SELECT clause.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectColumn {
    /// The expression.
    pub expr: Expr,
    /// Column alias.
    pub alias: Option<String>,
}

/// An INSERT statement.
#[derive(Debug, Clone, PartialEq)]
pub struct InsertStatement {
    /// Target table.
    pub table: ObjectName,
    /// Column names (optional).
    pub columns: Vec<String>,
    /// Values to insert.
    pub values: InsertSource,
}

/// Source of data for INSERT.
#[derive(Debug, Clone, PartialEq)]
pub enum InsertSource {
    /// VALUES (...), (...), ...
    Values(Vec<Vec<Expr>>),
    /// SELECT ...
    Query(Box<SelectStatement>),
    /// DEFAULT VALUES
    DefaultValues,
}

/// An UPDATE statement.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateStatement {
    /// Target table.
    pub table: ObjectName,
    /// Alias.
    pub alias: Option<String>,
    /// SET assignments.
    pub assignments: Vec<UpdateAssignment>,
    /// FROM clause (for joins in UPDATE).
    pub from: Option<TableRef>,
    /// WHERE clause.
    pub where_clause: Option<Expr>,
}

/// An assignment in UPDATE SET.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateAssignment {
    /// Column name.
    pub column: String,
    /// Value expression.
    pub value: Expr,
}

/// A DELETE statement.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteStatement {
    /// Target table.
    pub table: ObjectName,
    /// Alias.
    pub alias: Option<String>,
    /// WHERE clause.
    pub where_clause: Option<Expr>,
}

/// Kind of object named by a DROP statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropObject {
    Table,
    Index,
    Constraint,
    Sequence,
    View,
}

impl DropObject {
    /// Returns the lowercase object name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Index => "index",
            Self::Constraint => "constraint",
            Self::Sequence => "sequence",
            Self::View => "view",
        }
    }
}

/// CASCADE / RESTRICT modifier of a DROP statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropBehavior {
    Cascade,
    Restrict,
}

impl DropBehavior {
    /// Returns the lowercase name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cascade => "cascade",
            Self::Restrict => "restrict",
        }
    }
}

/// A DROP statement.
#[derive(Debug, Clone, PartialEq)]
pub struct DropStatement {
    /// What is being dropped.
    pub object: DropObject,
    /// Names of the dropped objects. The grammar accepts exactly one.
    pub names: Vec<ObjectName>,
    /// CASCADE / RESTRICT.
    pub behavior: Option<DropBehavior>,
}

/// A CREATE TABLE statement.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTableStatement {
    /// TEMP / TEMPORARY.
    pub temporary: bool,
    /// IF NOT EXISTS.
    pub if_not_exists: bool,
    /// Table name.
    pub name: ObjectName,
    /// Column definitions.
    pub columns: Vec<ColumnDef>,
    /// Table-level constraints.
    pub constraints: Vec<TableConstraint>,
}

/// A column of CREATE INDEX.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexColumn {
    /// Column name.
    pub name: String,
    /// ASC / DESC, when written.
    pub direction: Option<OrderDirection>,
}

/// A CREATE INDEX statement.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateIndexStatement {
    /// UNIQUE.
    pub unique: bool,
    /// IF NOT EXISTS.
    pub if_not_exists: bool,
    /// Index name.
    pub name: ObjectName,
    /// Indexed table.
    pub table: ObjectName,
    /// Indexed columns.
    pub columns: Vec<IndexColumn>,
}

/// A CREATE VIEW statement.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateViewStatement {
    /// IF NOT EXISTS.
    pub if_not_exists: bool,
    /// View name.
    pub name: ObjectName,
    /// Defining query.
    pub query: Box<SelectStatement>,
}

/// A CREATE SEQUENCE statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateSequenceStatement {
    /// IF NOT EXISTS.
    pub if_not_exists: bool,
    /// Sequence name.
    pub name: ObjectName,
    /// START [WITH] value.
    pub start: Option<i64>,
    /// INCREMENT [BY] value.
    pub increment: Option<i64>,
}

/// A SQL statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// SELECT statement.
    Select(SelectStatement),
    /// INSERT statement.
    Insert(InsertStatement),
    /// UPDATE statement.
    Update(UpdateStatement),
    /// DELETE statement.
    Delete(DeleteStatement),
    /// DROP statement.
    Drop(DropStatement),
    /// CREATE TABLE statement.
    CreateTable(CreateTableStatement),
    /// CREATE INDEX statement.
    CreateIndex(CreateIndexStatement),
    /// CREATE VIEW statement.
    CreateView(CreateViewStatement),
    /// CREATE SEQUENCE statement.
    CreateSequence(CreateSequenceStatement),
}

/// The `command` of a parsed statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Select,
    Insert,
    Update,
    Delete,
    DropTable,
    DropIndex,
    DropConstraint,
    DropSequence,
    DropView,
    CreateTable,
    CreateIndex,
    CreateView,
    CreateSequence,
}

impl Command {
    /// Returns the command name as it appears in the `command` key.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Select => "select",
            Self::Insert => "insert",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::DropTable => "drop_table",
            Self::DropIndex => "drop_index",
            Self::DropConstraint => "drop_constraint",
            Self::DropSequence => "drop_sequence",
            Self::DropView => "drop_view",
            Self::CreateTable => "create_table",
            Self::CreateIndex => "create_index",
            Self::CreateView => "create_view",
            Self::CreateSequence => "create_sequence",
        }
    }
}

impl Statement {
    /// Returns the command this statement performs.
    #[must_use]
    pub const fn command(&self) -> Command {
        match self {
            Self::Select(_) => Command::Select,
            Self::Insert(_) => Command::Insert,
            Self::Update(_) => Command::Update,
            Self::Delete(_) => Command::Delete,
            Self::Drop(drop) => match drop.object {
                DropObject::Table => Command::DropTable,
                DropObject::Index => Command::DropIndex,
                DropObject::Constraint => Command::DropConstraint,
                DropObject::Sequence => Command::DropSequence,
                DropObject::View => Command::DropView,
            },
            Self::CreateTable(_) => Command::CreateTable,
            Self::CreateIndex(_) => Command::CreateIndex,
            Self::CreateView(_) => Command::CreateView,
            Self::CreateSequence(_) => Command::CreateSequence,
        }
    }
}
