//! Abstract Syntax Tree (AST) types for SQL statements.

mod expression;
mod statement;
mod types;

pub use expression::{BinaryOp, Expr, FunctionCall, Literal, UnaryOp};
pub use statement::{
    Command, CreateIndexStatement, CreateSequenceStatement, CreateTableStatement,
    CreateViewStatement, DeleteStatement, DropBehavior, DropObject, DropStatement, IndexColumn,
    InsertSource, InsertStatement, JoinClause, JoinType, NullOrdering, ObjectName, OrderBy,
    OrderDirection, SelectColumn, SelectStatement, SetQuantifier, Statement, TableRef,
    UpdateAssignment, UpdateStatement,
};
pub use types::{
    ColumnConstraint, ColumnConstraintKind, ColumnDef, DataType, ForeignKeyRef,
    ReferentialAction, TableConstraint, TableConstraintKind,
};
