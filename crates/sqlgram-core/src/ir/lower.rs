//! Lowering of the typed AST into the intermediate representation.

use super::{Fields, ParseResult, Value};
use crate::ast::{
    ColumnConstraint, ColumnConstraintKind, ColumnDef, CreateIndexStatement,
    CreateSequenceStatement, CreateTableStatement, CreateViewStatement, DataType,
    DeleteStatement, DropStatement, Expr, ForeignKeyRef, InsertSource, InsertStatement, Literal,
    ObjectName, SelectStatement, Statement, TableConstraint, TableConstraintKind, TableRef,
    UpdateStatement,
};

impl From<&Statement> for ParseResult {
    fn from(statement: &Statement) -> Self {
        let command = statement.command().as_str();
        let fields = match statement {
            Statement::Select(select) => select_fields(select),
            Statement::Insert(insert) => insert_fields(command, insert),
            Statement::Update(update) => update_fields(command, update),
            Statement::Delete(delete) => delete_fields(command, delete),
            Statement::Drop(drop) => drop_fields(command, drop),
            Statement::CreateTable(create) => create_table_fields(command, create),
            Statement::CreateIndex(create) => create_index_fields(command, create),
            Statement::CreateView(create) => create_view_fields(command, create),
            Statement::CreateSequence(create) => create_sequence_fields(command, create),
        };
        Self { fields }
    }
}

impl From<Statement> for ParseResult {
    fn from(statement: Statement) -> Self {
        Self::from(&statement)
    }
}

fn target(name: &ObjectName) -> Value {
    Value::Text(name.qualified())
}

fn drop_fields(command: &str, drop: &DropStatement) -> Fields {
    Fields::new()
        .with("command", command)
        .with("target", drop.names.iter().map(target).collect::<Vec<_>>())
        .with_opt("drop_behavior", drop.behavior.map(|b| b.as_str()))
}

fn select_fields(select: &SelectStatement) -> Fields {
    let columns = select
        .columns
        .iter()
        .map(|column| {
            Value::Map(
                Fields::new()
                    .with("expr", expr(&column.expr))
                    .with_opt("alias", column.alias.as_deref()),
            )
        })
        .collect();

    let order_by = select
        .order_by
        .iter()
        .map(|item| {
            Value::Map(
                Fields::new()
                    .with("expr", expr(&item.expr))
                    .with("direction", item.direction.as_str())
                    .with_opt("nulls", item.nulls.map(|n| n.as_str())),
            )
        })
        .collect();

    Fields::new()
        .with("command", "select")
        .with_opt("set_quantifier", select.quantifier.map(|q| q.as_str()))
        .with("columns", Value::List(columns))
        .with_opt("from", select.from.as_ref().map(table_ref))
        .with_opt("where", select.where_clause.as_ref().map(expr))
        .with_list("group_by", select.group_by.iter().map(expr).collect())
        .with_opt("having", select.having.as_ref().map(expr))
        .with_list("order_by", order_by)
        .with_opt("limit", select.limit.as_ref().map(expr))
        .with_opt("offset", select.offset.as_ref().map(expr))
}

fn insert_fields(command: &str, insert: &InsertStatement) -> Fields {
    let fields = Fields::new()
        .with("command", command)
        .with("target", target(&insert.table))
        .with_list("columns", texts(&insert.columns));

    match &insert.values {
        InsertSource::Values(rows) => fields.with(
            "values",
            rows.iter()
                .map(|row| Value::List(row.iter().map(expr).collect()))
                .collect::<Vec<_>>(),
        ),
        InsertSource::Query(query) => fields.with("query", select_fields(query)),
        InsertSource::DefaultValues => fields.with("default_values", true),
    }
}

fn update_fields(command: &str, update: &UpdateStatement) -> Fields {
    let set = update
        .assignments
        .iter()
        .map(|assignment| {
            Value::Map(
                Fields::new()
                    .with("column", assignment.column.as_str())
                    .with("value", expr(&assignment.value)),
            )
        })
        .collect::<Vec<_>>();

    Fields::new()
        .with("command", command)
        .with("target", target(&update.table))
        .with_opt("alias", update.alias.as_deref())
        .with("set", set)
        .with_opt("from", update.from.as_ref().map(table_ref))
        .with_opt("where", update.where_clause.as_ref().map(expr))
}

fn delete_fields(command: &str, delete: &DeleteStatement) -> Fields {
    Fields::new()
        .with("command", command)
        .with("target", target(&delete.table))
        .with_opt("alias", delete.alias.as_deref())
        .with_opt("where", delete.where_clause.as_ref().map(expr))
}

fn create_table_fields(command: &str, create: &CreateTableStatement) -> Fields {
    Fields::new()
        .with("command", command)
        .with("target", target(&create.name))
        .with_flag("temporary", create.temporary)
        .with_flag("if_not_exists", create.if_not_exists)
        .with(
            "columns",
            create.columns.iter().map(column_def).collect::<Vec<_>>(),
        )
        .with_list(
            "constraints",
            create.constraints.iter().map(table_constraint).collect(),
        )
}

fn create_index_fields(command: &str, create: &CreateIndexStatement) -> Fields {
    let columns = create
        .columns
        .iter()
        .map(|column| {
            Value::Map(
                Fields::new()
                    .with("name", column.name.as_str())
                    .with_opt("direction", column.direction.map(|d| d.as_str())),
            )
        })
        .collect::<Vec<_>>();

    Fields::new()
        .with("command", command)
        .with("target", target(&create.name))
        .with_flag("unique", create.unique)
        .with_flag("if_not_exists", create.if_not_exists)
        .with("table", target(&create.table))
        .with("columns", columns)
}

fn create_view_fields(command: &str, create: &CreateViewStatement) -> Fields {
    Fields::new()
        .with("command", command)
        .with("target", target(&create.name))
        .with_flag("if_not_exists", create.if_not_exists)
        .with("query", select_fields(&create.query))
}

fn create_sequence_fields(command: &str, create: &CreateSequenceStatement) -> Fields {
    Fields::new()
        .with("command", command)
        .with("target", target(&create.name))
        .with_flag("if_not_exists", create.if_not_exists)
        .with_opt("start", create.start.map(|n| n.to_string()))
        .with_opt("increment", create.increment.map(|n| n.to_string()))
}

fn texts(items: &[String]) -> Vec<Value> {
    items.iter().map(|item| Value::from(item.as_str())).collect()
}

/// Adds `type` plus `length` or `precision`/`scale` for sized types.
fn with_data_type(fields: Fields, key: &str, data_type: &DataType) -> Fields {
    let (precision, scale) = data_type.precision_scale();
    fields
        .with(key, data_type.name())
        .with_opt("length", data_type.length().map(|n| n.to_string()))
        .with_opt("precision", precision.map(|n| n.to_string()))
        .with_opt("scale", scale.map(|n| n.to_string()))
}

fn column_def(column: &ColumnDef) -> Value {
    let fields = Fields::new().with("name", column.name.as_str());
    let fields = with_data_type(fields, "type", &column.data_type);
    Value::Map(fields.with_list(
        "constraints",
        column.constraints.iter().map(column_constraint).collect(),
    ))
}

fn column_constraint(constraint: &ColumnConstraint) -> Value {
    let fields = Fields::new().with_opt("name", constraint.name.as_deref());
    let fields = match &constraint.kind {
        ColumnConstraintKind::PrimaryKey {
            direction,
            autoincrement,
        } => fields
            .with("type", "primary_key")
            .with_opt("direction", direction.map(|d| d.as_str()))
            .with_flag("autoincrement", *autoincrement),
        ColumnConstraintKind::NotNull => fields.with("type", "not_null"),
        ColumnConstraintKind::Null => fields.with("type", "null"),
        ColumnConstraintKind::Unique => fields.with("type", "unique"),
        ColumnConstraintKind::Default(value) => {
            fields.with("type", "default").with("value", expr(value))
        }
        ColumnConstraintKind::Check(check) => {
            fields.with("type", "check").with("expr", expr(check))
        }
        ColumnConstraintKind::References(references) => {
            foreign_key(fields.with("type", "references"), references)
        }
        ColumnConstraintKind::Autoincrement => fields.with("type", "autoincrement"),
    };
    Value::Map(fields)
}

fn table_constraint(constraint: &TableConstraint) -> Value {
    let fields = Fields::new().with_opt("name", constraint.name.as_deref());
    let fields = match &constraint.kind {
        TableConstraintKind::PrimaryKey(columns) => fields
            .with("type", "primary_key")
            .with("columns", texts(columns)),
        TableConstraintKind::Unique(columns) => {
            fields.with("type", "unique").with("columns", texts(columns))
        }
        TableConstraintKind::Check(check) => {
            fields.with("type", "check").with("expr", expr(check))
        }
        TableConstraintKind::ForeignKey {
            columns,
            references,
        } => foreign_key(
            fields
                .with("type", "foreign_key")
                .with("columns", texts(columns)),
            references,
        ),
    };
    Value::Map(fields)
}

fn foreign_key(fields: Fields, references: &ForeignKeyRef) -> Fields {
    fields
        .with("references", references.table.as_str())
        .with_list("referenced_columns", texts(&references.columns))
        .with_opt("on_delete", references.on_delete.map(|a| a.as_str()))
        .with_opt("on_update", references.on_update.map(|a| a.as_str()))
}

fn table_ref(table: &TableRef) -> Value {
    let fields = match table {
        TableRef::Table { name, alias } => Fields::new()
            .with("type", "table")
            .with("name", target(name))
            .with_opt("alias", alias.as_deref()),
        TableRef::Subquery { query, alias } => Fields::new()
            .with("type", "subquery")
            .with("query", select_fields(query))
            .with("alias", alias.as_str()),
        TableRef::Join { left, join } => Fields::new()
            .with("type", "join")
            .with("join_type", join.join_type.as_str())
            .with("left", table_ref(left))
            .with("right", table_ref(&join.table))
            .with_opt("on", join.on.as_ref().map(expr))
            .with_list("using", texts(&join.using)),
    };
    Value::Map(fields)
}

fn literal(value: &Literal) -> Fields {
    match value {
        Literal::Integer(n) => Fields::new()
            .with("type", "integer")
            .with("value", n.to_string()),
        Literal::Float(f) => Fields::new()
            .with("type", "float")
            .with("value", f.to_string()),
        Literal::String(s) => Fields::new()
            .with("type", "string")
            .with("value", s.as_str()),
        Literal::Blob(bytes) => Fields::new()
            .with("type", "blob")
            .with("value", bytes.iter().map(|b| format!("{b:02X}")).collect::<String>()),
        Literal::Boolean(b) => Fields::new().with("type", "boolean").with("value", *b),
        Literal::Null => Fields::new().with("type", "null"),
    }
}

fn expr(expr_ref: &Expr) -> Value {
    let fields = match expr_ref {
        Expr::Literal(value) => literal(value),
        Expr::Column { table, name, .. } => Fields::new()
            .with("type", "column")
            .with_opt("table", table.as_deref())
            .with("name", name.as_str()),
        Expr::Binary { left, op, right } => Fields::new()
            .with("type", "binary")
            .with("op", op.as_str())
            .with("left", expr(left))
            .with("right", expr(right)),
        Expr::Unary { op, operand } => Fields::new()
            .with("type", "unary")
            .with("op", op.as_str())
            .with("operand", expr(operand)),
        Expr::Function(call) => Fields::new()
            .with("type", "function")
            .with("name", call.name.as_str())
            .with_flag("distinct", call.distinct)
            .with("args", call.args.iter().map(expr).collect::<Vec<_>>()),
        Expr::Subquery(query) => Fields::new()
            .with("type", "subquery")
            .with("query", select_fields(query)),
        Expr::Exists(query) => Fields::new()
            .with("type", "exists")
            .with("query", select_fields(query)),
        Expr::IsNull { expr: inner, negated } => Fields::new()
            .with("type", "is_null")
            .with("expr", expr(inner))
            .with_flag("negated", *negated),
        Expr::In {
            expr: inner,
            list,
            negated,
        } => Fields::new()
            .with("type", "in")
            .with("expr", expr(inner))
            .with_flag("negated", *negated)
            .with("list", list.iter().map(expr).collect::<Vec<_>>()),
        Expr::InSubquery {
            expr: inner,
            query,
            negated,
        } => Fields::new()
            .with("type", "in")
            .with("expr", expr(inner))
            .with_flag("negated", *negated)
            .with("query", select_fields(query)),
        Expr::Between {
            expr: inner,
            low,
            high,
            negated,
        } => Fields::new()
            .with("type", "between")
            .with("expr", expr(inner))
            .with_flag("negated", *negated)
            .with("low", expr(low))
            .with("high", expr(high)),
        Expr::Case {
            operand,
            when_clauses,
            else_clause,
        } => {
            let branches = when_clauses
                .iter()
                .map(|(when, then)| {
                    Value::Map(
                        Fields::new()
                            .with("when", expr(when))
                            .with("then", expr(then)),
                    )
                })
                .collect::<Vec<_>>();
            Fields::new()
                .with("type", "case")
                .with_opt("operand", operand.as_deref().map(expr))
                .with("branches", branches)
                .with_opt("else", else_clause.as_deref().map(expr))
        }
        Expr::Cast {
            expr: inner,
            data_type,
        } => with_data_type(
            Fields::new().with("type", "cast").with("expr", expr(inner)),
            "to",
            data_type,
        ),
        Expr::Paren(inner) => return expr(inner),
        Expr::Parameter { name, position } => {
            let fields = Fields::new().with("type", "parameter");
            match name {
                Some(name) => fields.with("name", name.as_str()),
                None => fields.with("position", position.to_string()),
            }
        }
        Expr::Wildcard { table } => Fields::new()
            .with("type", "wildcard")
            .with_opt("table", table.as_deref()),
    };
    Value::Map(fields)
}
