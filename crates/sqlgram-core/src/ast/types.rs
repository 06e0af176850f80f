//! Data types and table element definitions for CREATE TABLE.

use super::{Expr, OrderDirection};

/// SQL data types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataType {
    // Integer types
    /// Small integer (2 bytes).
    Smallint,
    /// Integer (4 bytes).
    Integer,
    /// Big integer (8 bytes).
    Bigint,

    // Floating point
    /// Real (4-byte float).
    Real,
    /// Double precision (8-byte float).
    Double,
    /// Decimal with precision and scale.
    Decimal {
        /// Total number of digits.
        precision: Option<u16>,
        /// Number of digits after decimal point.
        scale: Option<u16>,
    },
    /// Numeric (alias for Decimal).
    Numeric {
        /// Total number of digits.
        precision: Option<u16>,
        /// Number of digits after decimal point.
        scale: Option<u16>,
    },

    // String types
    /// Fixed-length character string.
    Char(Option<u32>),
    /// Variable-length character string.
    Varchar(Option<u32>),
    /// Text (variable length, no limit).
    Text,

    // Binary types
    /// Binary large object.
    Blob,
    /// Binary with specified length.
    Binary(Option<u32>),
    /// Variable-length binary.
    Varbinary(Option<u32>),

    // Date/time types
    /// Date.
    Date,
    /// Time.
    Time,
    /// Timestamp.
    Timestamp,
    /// DateTime (SQLite-style).
    Datetime,

    // Boolean
    /// Boolean.
    Boolean,

    /// Any other type name, kept as written.
    Custom(String),
}

impl DataType {
    /// Resolves a type name (case-insensitive). Unknown names become
    /// [`DataType::Custom`]; sized types start without arguments.
    pub(crate) fn from_name(name: &str) -> Self {
        match name.to_ascii_uppercase().as_str() {
            "INT" | "INTEGER" => Self::Integer,
            "SMALLINT" => Self::Smallint,
            "BIGINT" => Self::Bigint,
            "REAL" => Self::Real,
            "DOUBLE" | "FLOAT" => Self::Double,
            "DECIMAL" => Self::Decimal {
                precision: None,
                scale: None,
            },
            "NUMERIC" => Self::Numeric {
                precision: None,
                scale: None,
            },
            "CHAR" => Self::Char(None),
            "VARCHAR" => Self::Varchar(None),
            "TEXT" => Self::Text,
            "BLOB" => Self::Blob,
            "BINARY" => Self::Binary(None),
            "VARBINARY" => Self::Varbinary(None),
            "DATE" => Self::Date,
            "TIME" => Self::Time,
            "TIMESTAMP" => Self::Timestamp,
            "DATETIME" => Self::Datetime,
            "BOOL" | "BOOLEAN" => Self::Boolean,
            _ => Self::Custom(name.to_string()),
        }
    }

    /// Returns the lowercase type name, without arguments.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Smallint => "smallint",
            Self::Integer => "integer",
            Self::Bigint => "bigint",
            Self::Real => "real",
            Self::Double => "double",
            Self::Decimal { .. } => "decimal",
            Self::Numeric { .. } => "numeric",
            Self::Char(_) => "char",
            Self::Varchar(_) => "varchar",
            Self::Text => "text",
            Self::Blob => "blob",
            Self::Binary(_) => "binary",
            Self::Varbinary(_) => "varbinary",
            Self::Date => "date",
            Self::Time => "time",
            Self::Timestamp => "timestamp",
            Self::Datetime => "datetime",
            Self::Boolean => "boolean",
            Self::Custom(name) => name,
        }
    }

    /// Returns the declared length of a sized string/binary type.
    #[must_use]
    pub const fn length(&self) -> Option<u32> {
        match self {
            Self::Char(len) | Self::Varchar(len) | Self::Binary(len) | Self::Varbinary(len) => {
                *len
            }
            _ => None,
        }
    }

    /// Returns `(precision, scale)` of a DECIMAL/NUMERIC type.
    #[must_use]
    pub const fn precision_scale(&self) -> (Option<u16>, Option<u16>) {
        match self {
            Self::Decimal { precision, scale } | Self::Numeric { precision, scale } => {
                (*precision, *scale)
            }
            _ => (None, None),
        }
    }
}

/// Action taken on the referencing row when the referenced row changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferentialAction {
    Cascade,
    Restrict,
    SetNull,
    SetDefault,
    NoAction,
}

impl ReferentialAction {
    /// Returns the lowercase, underscore-separated name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cascade => "cascade",
            Self::Restrict => "restrict",
            Self::SetNull => "set_null",
            Self::SetDefault => "set_default",
            Self::NoAction => "no_action",
        }
    }
}

/// `REFERENCES table [(columns)] [ON DELETE ...] [ON UPDATE ...]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKeyRef {
    /// Referenced table.
    pub table: String,
    /// Referenced columns (empty means the primary key).
    pub columns: Vec<String>,
    /// ON DELETE action.
    pub on_delete: Option<ReferentialAction>,
    /// ON UPDATE action.
    pub on_update: Option<ReferentialAction>,
}

/// A constraint attached to a single column.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnConstraintKind {
    /// PRIMARY KEY [ASC|DESC] [AUTOINCREMENT]
    PrimaryKey {
        /// Sort order of the key.
        direction: Option<OrderDirection>,
        /// Whether AUTOINCREMENT follows the key.
        autoincrement: bool,
    },
    /// NOT NULL
    NotNull,
    /// NULL
    Null,
    /// UNIQUE
    Unique,
    /// DEFAULT expr
    Default(Expr),
    /// CHECK (expr)
    Check(Expr),
    /// REFERENCES ...
    References(ForeignKeyRef),
    /// AUTOINCREMENT on its own
    Autoincrement,
}

/// A column constraint with its optional `CONSTRAINT name`.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnConstraint {
    /// Constraint name.
    pub name: Option<String>,
    /// What the constraint enforces.
    pub kind: ColumnConstraintKind,
}

/// A column definition for CREATE TABLE.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    /// Column name.
    pub name: String,
    /// Data type.
    pub data_type: DataType,
    /// Constraints in declaration order.
    pub constraints: Vec<ColumnConstraint>,
}

impl ColumnDef {
    /// Returns true if the column carries a PRIMARY KEY constraint.
    #[must_use]
    pub fn is_primary_key(&self) -> bool {
        self.constraints
            .iter()
            .any(|c| matches!(c.kind, ColumnConstraintKind::PrimaryKey { .. }))
    }

    /// Returns true if the column may hold NULL.
    ///
    /// Primary keys are implicitly NOT NULL.
    #[must_use]
    pub fn is_nullable(&self) -> bool {
        !self.constraints.iter().any(|c| {
            matches!(
                c.kind,
                ColumnConstraintKind::NotNull | ColumnConstraintKind::PrimaryKey { .. }
            )
        })
    }
}

/// A table-level constraint.
#[derive(Debug, Clone, PartialEq)]
pub enum TableConstraintKind {
    /// PRIMARY KEY (columns)
    PrimaryKey(Vec<String>),
    /// UNIQUE (columns)
    Unique(Vec<String>),
    /// CHECK (expr)
    Check(Expr),
    /// FOREIGN KEY (columns) REFERENCES ...
    ForeignKey {
        /// Referencing columns.
        columns: Vec<String>,
        /// Referenced table and actions.
        references: ForeignKeyRef,
    },
}

/// A table constraint with its optional `CONSTRAINT name`.
#[derive(Debug, Clone, PartialEq)]
pub struct TableConstraint {
    /// Constraint name.
    pub name: Option<String>,
    /// What the constraint enforces.
    pub kind: TableConstraintKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(DataType::from_name("int"), DataType::Integer);
        assert_eq!(DataType::from_name("Varchar"), DataType::Varchar(None));
        assert_eq!(DataType::from_name("FLOAT"), DataType::Double);
        assert_eq!(
            DataType::from_name("geometry"),
            DataType::Custom(String::from("geometry"))
        );
    }

    #[test]
    fn test_accessors() {
        assert_eq!(DataType::Varchar(Some(255)).name(), "varchar");
        assert_eq!(DataType::Varchar(Some(255)).length(), Some(255));
        assert_eq!(DataType::Integer.length(), None);
        assert_eq!(
            DataType::Decimal {
                precision: Some(10),
                scale: Some(2)
            }
            .precision_scale(),
            (Some(10), Some(2))
        );
    }

    #[test]
    fn test_column_def_nullability() {
        let col = ColumnDef {
            name: String::from("id"),
            data_type: DataType::Integer,
            constraints: vec![ColumnConstraint {
                name: None,
                kind: ColumnConstraintKind::PrimaryKey {
                    direction: None,
                    autoincrement: true,
                },
            }],
        };
        assert!(col.is_primary_key());
        assert!(!col.is_nullable());
    }
}
