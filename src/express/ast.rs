//! EXPRESS meta-model
//!
//! The types a schema parse produces: [`Schema`], [`Type`], [`Kind`], and the recursive
//! [`MemberType`] used for entity attribute declarations. Nothing here parses; see
//! [`crate::express::grammar`].

use std::collections::HashMap;
use std::fmt;
use strum_macros::{EnumString, IntoStaticStr};

/// The data kind a declared [`Type`] belongs to.
///
/// `BOOL, LOGICAL, REAL, NUMBER, STRING, INTEGER, ENTITY, ENUM, SELECT, BINARY` are matched
/// as EXPRESS keyword symbols during parsing (see `Kind::from_str` via [`strum`]); anything
/// else becomes [`Kind::Alias`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, IntoStaticStr)]
pub enum Kind {
    Unknown,
    #[strum(serialize = "BOOL")]
    Bool,
    #[strum(serialize = "LOGICAL")]
    Logical,
    #[strum(serialize = "REAL")]
    Real,
    #[strum(serialize = "NUMBER")]
    Number,
    #[strum(serialize = "STRING")]
    String,
    #[strum(serialize = "INTEGER")]
    Integer,
    #[strum(serialize = "ENTITY")]
    Entity,
    #[strum(serialize = "ENUM")]
    Enum,
    #[strum(serialize = "SELECT")]
    Select,
    Alias,
    #[strum(serialize = "BINARY")]
    Binary,
}

/// Upper bound used when a `LIST`/`ARRAY`/`SET` declares `?` for its max size.
pub const UNBOUNDED: u32 = u32::MAX;

/// The static type of an entity member: either a plain named type, or a recursive
/// aggregate (`LIST`/`ARRAY`/`SET` collapse into this one form, per §3.1).
#[derive(Debug, Clone, PartialEq)]
pub enum MemberType {
    Named(String),
    List {
        min: u32,
        max: u32,
        inner: Box<MemberType>,
    },
}

impl MemberType {
    /// The innermost named type, chasing through any nested aggregates.
    pub fn inner_type_name(&self) -> &str {
        match self {
            MemberType::Named(name) => name,
            MemberType::List { inner, .. } => inner.inner_type_name(),
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, MemberType::List { .. })
    }
}

/// One attribute declaration inside an `ENTITY ... END_ENTITY;` block.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub name: String,
    pub r#type: MemberType,
    pub optional: bool,
}

impl Member {
    /// True when this member's static type is itself an aggregate, or when its plain
    /// type name resolves to a list-typed declaration (possibly through an alias chain).
    pub fn is_list(&self, schema: &Schema) -> bool {
        if self.r#type.is_list() {
            return true;
        }
        schema.is_list(self.r#type.inner_type_name())
    }
}

/// One `TYPE`/`ENTITY` declaration from the schema.
#[derive(Debug, Clone, PartialEq)]
pub struct Type {
    pub name: String,
    pub kind: Kind,
    /// `ENUM` → enumerator spellings; `SELECT` → member type names.
    pub details: Vec<String>,
    /// `ENTITY` → single parent type name, or empty if none.
    pub subtype_of: String,
    /// `ENTITY` → attribute declarations.
    pub members: Vec<Member>,
    pub is_list: bool,
    pub min_size: u32,
    pub max_size: u32,
    /// `ALIAS` → the aliased type name (possibly itself list-typed).
    pub alias_target: String,
}

impl Type {
    pub(crate) fn new(name: String, kind: Kind) -> Self {
        Self {
            name,
            kind,
            details: Vec::new(),
            subtype_of: String::new(),
            members: Vec::new(),
            is_list: false,
            min_size: 0,
            max_size: UNBOUNDED,
            alias_target: String::new(),
        }
    }
}

/// A fully parsed EXPRESS schema: its declarations plus a name → declaration index.
#[derive(Debug, Clone)]
pub struct Schema {
    pub name: String,
    pub types: Vec<Type>,
    type_index: HashMap<String, usize>,
}

impl Schema {
    pub(crate) fn new(name: String, types: Vec<Type>) -> Self {
        let mut type_index = HashMap::with_capacity(types.len());
        for (i, t) in types.iter().enumerate() {
            // Duplicate names overwrite (last-wins); schemas are assumed duplicate-free.
            type_index.insert(t.name.clone(), i);
        }
        Self {
            name,
            types,
            type_index,
        }
    }

    /// Look up a declared type by its exact (case-sensitive) spelling.
    pub fn get(&self, name: &str) -> Option<&Type> {
        self.type_index.get(name).map(|&i| &self.types[i])
    }

    /// See [`crate::express::query::is_list`].
    pub fn is_list(&self, type_name: &str) -> bool {
        crate::express::query::is_list(self, type_name)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = self.into();
        write!(f, "{s}")
    }
}
