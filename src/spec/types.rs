use serde::{Deserialize, Serialize};
use std::fmt;

/// Project declaration as decoded from the input file, before enrichment.
///
/// Keys follow the camel-case spelling of the declaration format
/// (`sourceBase`, `tableName`, `testValues`, ...). Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSpec {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub source_base: String,
    #[serde(default)]
    pub db: Option<String>,
    #[serde(default, alias = "dbUser")]
    pub dbuser: Option<String>,
    #[serde(default, alias = "dbPassword")]
    pub dbpassword: Option<String>,
    #[serde(default, alias = "dbServer")]
    pub dbserver: Option<String>,
    #[serde(default, alias = "dbPort")]
    pub dbport: Option<RawValue>,
    #[serde(default, alias = "dbName")]
    pub dbname: Option<String>,
    #[serde(default)]
    pub resources: Vec<RawResource>,
}

/// One resource of a [`RawSpec`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawResource {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub plural: Option<String>,
    #[serde(default)]
    pub table_name: Option<String>,
    #[serde(default)]
    pub fields: Vec<RawField>,
}

/// One field of a [`RawResource`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawField {
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "type")]
    pub field_type: String,
    #[serde(default)]
    pub exclude_from_display: bool,
    #[serde(default)]
    pub mandatory: bool,
    #[serde(default)]
    pub test_values: Vec<RawValue>,
}

/// Scalar as written in the declaration.
///
/// YAML and TOML authors naturally write `testValues: [1, 2]` or
/// `dbport: 3306`; the value is kept in its literal textual form.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RawValue {
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Text(String),
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Bool(b) => write!(f, "{b}"),
            RawValue::Int(i) => write!(f, "{i}"),
            RawValue::Uint(u) => write!(f, "{u}"),
            RawValue::Float(x) => write!(f, "{x}"),
            RawValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.to_string())
    }
}

/// Logical field type. The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
    Int,
    Uint,
    Float,
    Bool,
}

impl FieldType {
    pub const SUPPORTED: [&'static str; 5] = ["string", "int", "uint", "float", "bool"];

    /// Parse a declared type name. `None` for anything outside the closed set.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "string" => Some(FieldType::String),
            "int" => Some(FieldType::Int),
            "uint" => Some(FieldType::Uint),
            "float" => Some(FieldType::Float),
            "bool" => Some(FieldType::Bool),
            _ => None,
        }
    }

    /// Type used for the field in generated Rust source.
    ///
    /// Numeric types widen to 64 bits; `string` and `bool` keep their meaning
    /// under the host spelling.
    pub fn host_type(self) -> &'static str {
        match self {
            FieldType::String => "String",
            FieldType::Int => "i64",
            FieldType::Uint => "u64",
            FieldType::Float => "f64",
            FieldType::Bool => "bool",
        }
    }

    /// Column type emitted into the SQL creation script.
    pub fn sql_type(self, db: DbKind) -> &'static str {
        match (self, db.is_postgres()) {
            (FieldType::String, _) => "VARCHAR(255)",
            (FieldType::Int, _) | (FieldType::Uint, true) => "BIGINT",
            (FieldType::Uint, false) => "BIGINT UNSIGNED",
            (FieldType::Float, true) => "DOUBLE PRECISION",
            (FieldType::Float, false) => "DOUBLE",
            (FieldType::Bool, _) => "BOOLEAN",
        }
    }

    /// Type the database driver reads and binds for the column.
    ///
    /// Postgres has no unsigned integers, so `uint` travels as `i64` there
    /// and is converted at the row boundary.
    pub fn storage_type(self, db: DbKind) -> &'static str {
        match (self, db.is_postgres()) {
            (FieldType::Uint, true) => "i64",
            _ => self.host_type(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Int => "int",
            FieldType::Uint => "uint",
            FieldType::Float => "float",
            FieldType::Bool => "bool",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Database kind. The set is closed: it is what the templates can generate
/// code for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DbKind {
    Mysql,
    Mariadb,
    Postgres,
    Postgresql,
}

impl DbKind {
    pub const SUPPORTED: [&'static str; 4] = ["mysql", "mariadb", "postgres", "postgresql"];

    /// Parse a declared kind, ignoring ASCII case. `None` outside the closed set.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mysql" => Some(DbKind::Mysql),
            "mariadb" => Some(DbKind::Mariadb),
            "postgres" => Some(DbKind::Postgres),
            "postgresql" => Some(DbKind::Postgresql),
            _ => None,
        }
    }

    pub fn default_port(self) -> &'static str {
        if self.is_postgres() {
            "5432"
        } else {
            "3306"
        }
    }

    pub fn is_postgres(self) -> bool {
        matches!(self, DbKind::Postgres | DbKind::Postgresql)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DbKind::Mysql => "mysql",
            DbKind::Mariadb => "mariadb",
            DbKind::Postgres => "postgres",
            DbKind::Postgresql => "postgresql",
        }
    }
}

impl fmt::Display for DbKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fully enriched project model. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Spec {
    pub name: String,
    pub name_upper_first: String,
    pub name_lower_first: String,
    pub name_all_lower: String,
    pub name_all_upper: String,
    pub source_base: String,
    pub db: Database,
    pub resources: Vec<Resource>,
}

/// Resolved database connection parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Database {
    pub kind: DbKind,
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: String,
    pub name: String,
    /// `{kind}://{user}:{password}@{host}:{port}/{name}`
    pub url: String,
}

/// One enriched resource, self-contained for per-resource rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resource {
    pub name: String,
    pub name_upper_first: String,
    pub name_lower_first: String,
    pub name_all_lower: String,
    pub plural: String,
    pub plural_upper_first: String,
    pub plural_lower_first: String,
    pub table_name: String,
    pub project_name: String,
    pub project_name_upper_first: String,
    pub source_base: String,
    pub db: Database,
    pub fields: Vec<Field>,
}

/// One enriched field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    pub name: String,
    pub name_upper_first: String,
    pub name_lower_first: String,
    pub name_all_lower: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub host_type: &'static str,
    /// Differs from `host_type` only where the driver cannot carry it.
    pub storage_type: &'static str,
    pub sql_type: &'static str,
    pub exclude_from_display: bool,
    pub mandatory: bool,
    /// Always exactly two values, in literal form.
    pub test_values: [String; 2],
    /// `test_values` as Rust expressions (strings quoted and escaped).
    pub test_literals: [String; 2],
    pub last_item: bool,
}
