//! Declared mapping between the domain entities and the PostgreSQL tables.
//!
//! The declaration is checked twice before any session is handed out: once
//! on its own ([`SchemaMapping::validate`]) and once against the live
//! database catalog ([`SchemaMapping::verify`]). The repositories build
//! their statements from the same declaration.

use std::collections::{HashMap, HashSet};

use sqlx::PgPool;
use thiserror::Error;

/// How a column reaches the entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldBinding {
    /// Read-only field exposed through an accessor of the same name.
    Property(&'static str),
    /// Private state that only changes through the entity's own methods.
    BackingField(&'static str),
}

impl FieldBinding {
    pub fn field(&self) -> &'static str {
        match self {
            FieldBinding::Property(field) | FieldBinding::BackingField(field) => field,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMapping {
    pub name: &'static str,
    /// `information_schema.columns.data_type` spelling.
    pub sql_type: &'static str,
    pub nullable: bool,
    pub binding: FieldBinding,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnDelete {
    Cascade,
    NoAction,
}

impl OnDelete {
    fn rule(&self) -> &'static str {
        match self {
            OnDelete::Cascade => "CASCADE",
            OnDelete::NoAction => "NO ACTION",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForeignKeyMapping {
    pub name: &'static str,
    pub column: &'static str,
    pub references: &'static str,
    pub references_column: &'static str,
    pub on_delete: OnDelete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableMapping {
    pub entity: &'static str,
    pub table: &'static str,
    pub key: &'static str,
    /// In the order the repositories read and write them.
    pub columns: &'static [ColumnMapping],
    pub foreign_keys: &'static [ForeignKeyMapping],
}

impl TableMapping {
    pub fn column(&self, name: &str) -> Option<&ColumnMapping> {
        self.columns.iter().find(|column| column.name == name)
    }

    /// `SELECT` of every declared column, ready for a `WHERE` clause.
    pub fn select_statement(&self) -> String {
        format!(
            r#"SELECT {} FROM "{}""#,
            quoted(self.columns.iter().map(|c| c.name)),
            self.table
        )
    }

    /// `INSERT` of every column but the generated key, one parameter per
    /// column in declaration order, returning the stored row.
    pub fn insert_statement(&self) -> String {
        let written: Vec<_> = self.columns.iter().filter(|c| c.name != self.key).collect();
        if written.is_empty() {
            return format!(
                r#"INSERT INTO "{}" DEFAULT VALUES RETURNING {}"#,
                self.table,
                quoted(self.columns.iter().map(|c| c.name))
            );
        }
        let parameters: Vec<_> = (1..=written.len()).map(|n| format!("${n}")).collect();
        format!(
            r#"INSERT INTO "{}" ({}) VALUES ({}) RETURNING {}"#,
            self.table,
            quoted(written.iter().map(|c| c.name)),
            parameters.join(", "),
            quoted(self.columns.iter().map(|c| c.name))
        )
    }

    /// `UPDATE` of the backing-field columns. Each takes a `(changed, value)`
    /// parameter pair in declaration order and keeps its stored value unless
    /// `changed` is true. The key is the last parameter.
    pub fn update_statement(&self) -> String {
        let assignments: Vec<_> = self
            .columns
            .iter()
            .filter(|c| matches!(c.binding, FieldBinding::BackingField(_)))
            .enumerate()
            .map(|(i, c)| {
                format!(
                    r#""{name}" = CASE WHEN ${changed} THEN ${value} ELSE "{name}" END"#,
                    name = c.name,
                    changed = 2 * i + 1,
                    value = 2 * i + 2
                )
            })
            .collect();
        format!(
            r#"UPDATE "{}" SET {} WHERE "{}" = ${}"#,
            self.table,
            assignments.join(", "),
            self.key,
            2 * assignments.len() + 1
        )
    }
}

fn quoted<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names
        .map(|name| format!("\"{name}\""))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Column name a row type's field decodes from (`item_list_id` -> `ItemListId`).
fn column_for_field(field: &str) -> String {
    field
        .split('_')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaMapping {
    pub tables: &'static [TableMapping],
}

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("schema.duplicate_table: {table}")]
    DuplicateTable { table: &'static str },
    #[error("schema.duplicate_column: {table}.{column}")]
    DuplicateColumn {
        table: &'static str,
        column: &'static str,
    },
    #[error("schema.duplicate_constraint: {constraint}")]
    DuplicateConstraint { constraint: &'static str },
    #[error("schema.undeclared_key: {table}.{column}")]
    UndeclaredKey {
        table: &'static str,
        column: &'static str,
    },
    #[error("schema.undeclared_foreign_key_column: {table}.{column}")]
    UndeclaredForeignKeyColumn {
        table: &'static str,
        column: &'static str,
    },
    #[error("schema.unknown_reference: {constraint} -> {target}")]
    UnknownReference {
        constraint: &'static str,
        target: String,
    },
    #[error("schema.field_binding: {table}.{column} cannot be read into {field}")]
    FieldBinding {
        table: &'static str,
        column: &'static str,
        field: &'static str,
    },
    #[error("schema.missing_table: {table}")]
    MissingTable { table: &'static str },
    #[error("schema.missing_column: {table}.{column}")]
    MissingColumn {
        table: &'static str,
        column: &'static str,
    },
    #[error("schema.column_type: {table}.{column} expected {expected}, found {found}")]
    ColumnType {
        table: &'static str,
        column: &'static str,
        expected: &'static str,
        found: String,
    },
    #[error("schema.nullability: {table}.{column} expected nullable={expected}")]
    Nullability {
        table: &'static str,
        column: &'static str,
        expected: bool,
    },
    #[error("schema.missing_primary_key: {table}.{column}")]
    MissingPrimaryKey {
        table: &'static str,
        column: &'static str,
    },
    #[error("schema.missing_foreign_key: {table}.{constraint}")]
    MissingForeignKey {
        table: &'static str,
        constraint: &'static str,
    },
    #[error("schema.foreign_key_mismatch: {table}.{constraint}")]
    ForeignKeyMismatch {
        table: &'static str,
        constraint: &'static str,
    },
    #[error("schema.undeclared_foreign_key: {table}.{constraint}")]
    UndeclaredForeignKey { table: &'static str, constraint: String },
    #[error("schema.introspection")]
    Introspection(#[from] sqlx::Error),
}

const fn column(
    name: &'static str,
    sql_type: &'static str,
    binding: FieldBinding,
) -> ColumnMapping {
    ColumnMapping {
        name,
        sql_type,
        nullable: false,
        binding,
    }
}

const fn user_fk(table_fk: &'static str) -> ForeignKeyMapping {
    ForeignKeyMapping {
        name: table_fk,
        column: "UserId",
        references: "Users",
        references_column: "Id",
        on_delete: OnDelete::Cascade,
    }
}

pub const USERS: TableMapping = TableMapping {
    entity: "ShoppingUser",
    table: "Users",
    key: "Id",
    columns: &[column("Id", "bigint", FieldBinding::Property("id"))],
    foreign_keys: &[],
};

pub const LISTS: TableMapping = TableMapping {
    entity: "ItemList",
    table: "Lists",
    key: "Id",
    columns: &[
        column("Id", "bigint", FieldBinding::Property("id")),
        column("UserId", "bigint", FieldBinding::Property("user_id")),
        column(
            "CreationDate",
            "timestamp with time zone",
            FieldBinding::Property("creation_date"),
        ),
        ColumnMapping {
            name: "DueTo",
            sql_type: "date",
            nullable: true,
            binding: FieldBinding::BackingField("due_to"),
        },
        column(
            "IsRealized",
            "boolean",
            FieldBinding::BackingField("is_realized"),
        ),
    ],
    foreign_keys: &[user_fk("FK_Lists_Users_UserId")],
};

pub const ITEMS: TableMapping = TableMapping {
    entity: "Item",
    table: "Items",
    key: "Id",
    columns: &[
        column("Id", "bigint", FieldBinding::Property("id")),
        column("UserId", "bigint", FieldBinding::Property("user_id")),
        // plain reference, no constraint
        column("ItemListId", "bigint", FieldBinding::Property("item_list_id")),
        column(
            "CreationDate",
            "timestamp with time zone",
            FieldBinding::Property("creation_date"),
        ),
        column("Quantity", "integer", FieldBinding::BackingField("quantity")),
        column("IsBought", "boolean", FieldBinding::BackingField("is_bought")),
    ],
    foreign_keys: &[user_fk("FK_Items_Users_UserId")],
};

pub const PICTURES: TableMapping = TableMapping {
    entity: "ItemPicture",
    table: "Pictures",
    key: "Id",
    columns: &[
        column("Id", "bigint", FieldBinding::Property("id")),
        column("UserId", "bigint", FieldBinding::Property("user_id")),
    ],
    foreign_keys: &[user_fk("FK_Pictures_Users_UserId")],
};

pub static SHOPPING_LIST_SCHEMA: SchemaMapping = SchemaMapping {
    tables: &[USERS, LISTS, ITEMS, PICTURES],
};

impl SchemaMapping {
    pub fn table(&self, table: &str) -> Option<&TableMapping> {
        self.tables.iter().find(|mapping| mapping.table == table)
    }

    /// Checks the declaration for internal consistency.
    pub fn validate(&self) -> Result<(), SchemaError> {
        let mut tables = HashSet::new();
        let mut constraints = HashSet::new();

        for table in self.tables {
            if !tables.insert(table.table) {
                return Err(SchemaError::DuplicateTable { table: table.table });
            }

            let mut columns = HashSet::new();
            for column in table.columns {
                if !columns.insert(column.name) {
                    return Err(SchemaError::DuplicateColumn {
                        table: table.table,
                        column: column.name,
                    });
                }
                // row types decode with `rename_all = "PascalCase"`
                let field = column.binding.field();
                if column_for_field(field) != column.name {
                    return Err(SchemaError::FieldBinding {
                        table: table.table,
                        column: column.name,
                        field,
                    });
                }
            }

            if table.column(table.key).is_none() {
                return Err(SchemaError::UndeclaredKey {
                    table: table.table,
                    column: table.key,
                });
            }

            for fk in table.foreign_keys {
                if !constraints.insert(fk.name) {
                    return Err(SchemaError::DuplicateConstraint {
                        constraint: fk.name,
                    });
                }
                if table.column(fk.column).is_none() {
                    return Err(SchemaError::UndeclaredForeignKeyColumn {
                        table: table.table,
                        column: fk.column,
                    });
                }
                let target_is_key = self
                    .table(fk.references)
                    .is_some_and(|target| target.key == fk.references_column);
                if !target_is_key {
                    return Err(SchemaError::UnknownReference {
                        constraint: fk.name,
                        target: format!("{}.{}", fk.references, fk.references_column),
                    });
                }
            }
        }

        Ok(())
    }

    /// Compares the declaration with the catalog of the connected database.
    pub async fn verify(&self, pool: &PgPool) -> Result<(), SchemaError> {
        let live = LiveSchema::load(pool).await?;
        self.compare(&live)
    }

    fn compare(&self, live: &LiveSchema) -> Result<(), SchemaError> {
        for table in self.tables {
            if !live.has_table(table.table) {
                return Err(SchemaError::MissingTable { table: table.table });
            }

            for column in table.columns {
                let found = live.column(table.table, column.name).ok_or(
                    SchemaError::MissingColumn {
                        table: table.table,
                        column: column.name,
                    },
                )?;
                if found.data_type != column.sql_type {
                    return Err(SchemaError::ColumnType {
                        table: table.table,
                        column: column.name,
                        expected: column.sql_type,
                        found: found.data_type.clone(),
                    });
                }
                if found.nullable != column.nullable {
                    return Err(SchemaError::Nullability {
                        table: table.table,
                        column: column.name,
                        expected: column.nullable,
                    });
                }
            }

            if !live.is_primary_key(table.table, table.key) {
                return Err(SchemaError::MissingPrimaryKey {
                    table: table.table,
                    column: table.key,
                });
            }

            for fk in table.foreign_keys {
                let found = live
                    .foreign_key(table.table, fk.name)
                    .ok_or(SchemaError::MissingForeignKey {
                        table: table.table,
                        constraint: fk.name,
                    })?;
                let matches = found.column == fk.column
                    && found.references == fk.references
                    && found.references_column == fk.references_column
                    && found.delete_rule == fk.on_delete.rule();
                if !matches {
                    return Err(SchemaError::ForeignKeyMismatch {
                        table: table.table,
                        constraint: fk.name,
                    });
                }
            }

            let undeclared = live.foreign_keys.iter().find(|found| {
                found.table == table.table
                    && !table.foreign_keys.iter().any(|fk| fk.name == found.name)
            });
            if let Some(found) = undeclared {
                return Err(SchemaError::UndeclaredForeignKey {
                    table: table.table,
                    constraint: found.name.clone(),
                });
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct LiveColumn {
    data_type: String,
    nullable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct LiveForeignKey {
    table: String,
    name: String,
    column: String,
    references: String,
    references_column: String,
    delete_rule: String,
}

/// Snapshot of the catalog for the current schema.
#[derive(Debug, Default)]
struct LiveSchema {
    columns: HashMap<(String, String), LiveColumn>,
    primary_keys: HashSet<(String, String)>,
    foreign_keys: Vec<LiveForeignKey>,
}

impl LiveSchema {
    async fn load(pool: &PgPool) -> Result<Self, sqlx::Error> {
        let columns: Vec<(String, String, String, bool)> = sqlx::query_as(
            "SELECT table_name::text, column_name::text, data_type::text,
                    (is_nullable = 'YES') AS nullable
             FROM information_schema.columns
             WHERE table_schema = current_schema()",
        )
        .fetch_all(pool)
        .await?;

        let primary_keys: Vec<(String, String)> = sqlx::query_as(
            "SELECT kcu.table_name::text, kcu.column_name::text
             FROM information_schema.table_constraints tc
             JOIN information_schema.key_column_usage kcu
               ON kcu.constraint_name = tc.constraint_name
              AND kcu.table_schema = tc.table_schema
              AND kcu.table_name = tc.table_name
             WHERE tc.constraint_type = 'PRIMARY KEY'
               AND tc.table_schema = current_schema()",
        )
        .fetch_all(pool)
        .await?;

        let foreign_keys: Vec<(String, String, String, String, String, String)> =
            sqlx::query_as(
                "SELECT kcu.table_name::text, tc.constraint_name::text, kcu.column_name::text,
                        ccu.table_name::text, ccu.column_name::text, rc.delete_rule::text
                 FROM information_schema.table_constraints tc
                 JOIN information_schema.key_column_usage kcu
                   ON kcu.constraint_name = tc.constraint_name
                  AND kcu.table_schema = tc.table_schema
                 JOIN information_schema.referential_constraints rc
                   ON rc.constraint_name = tc.constraint_name
                  AND rc.constraint_schema = tc.table_schema
                 JOIN information_schema.constraint_column_usage ccu
                   ON ccu.constraint_name = tc.constraint_name
                  AND ccu.constraint_schema = tc.table_schema
                 WHERE tc.constraint_type = 'FOREIGN KEY'
                   AND tc.table_schema = current_schema()",
            )
            .fetch_all(pool)
            .await?;

        Ok(Self {
            columns: columns
                .into_iter()
                .map(|(table, column, data_type, nullable)| {
                    ((table, column), LiveColumn { data_type, nullable })
                })
                .collect(),
            primary_keys: primary_keys.into_iter().collect(),
            foreign_keys: foreign_keys
                .into_iter()
                .map(
                    |(table, name, column, references, references_column, delete_rule)| {
                        LiveForeignKey {
                            table,
                            name,
                            column,
                            references,
                            references_column,
                            delete_rule,
                        }
                    },
                )
                .collect(),
        })
    }

    fn has_table(&self, table: &str) -> bool {
        self.columns.keys().any(|(name, _)| name == table)
    }

    fn column(&self, table: &str, column: &str) -> Option<&LiveColumn> {
        self.columns.get(&(table.to_string(), column.to_string()))
    }

    fn is_primary_key(&self, table: &str, column: &str) -> bool {
        self.primary_keys
            .contains(&(table.to_string(), column.to_string()))
    }

    fn foreign_key(&self, table: &str, name: &str) -> Option<&LiveForeignKey> {
        self.foreign_keys
            .iter()
            .find(|fk| fk.table == table && fk.name == name)
    }
}
