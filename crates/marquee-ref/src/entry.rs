//! Documented program entities and their display signatures.

use serde::{Deserialize, Serialize};

/// Kind tag of a reference entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Value,
    Function,
    Type,
    Newtype,
    Data,
    Class,
}

impl Kind {
    /// Lowercase name as it appears in content files and badges.
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Value => "value",
            Kind::Function => "function",
            Kind::Type => "type",
            Kind::Newtype => "newtype",
            Kind::Data => "data",
            Kind::Class => "class",
        }
    }
}

/// Metadata shared by every entry kind.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Meta {
    /// Entity name
    pub name: String,

    /// Owning module label
    #[serde(default)]
    pub module: Option<String>,

    /// Free-text description (markdown)
    #[serde(default)]
    pub description: Option<String>,

    /// Version the entity first appeared in
    #[serde(default)]
    pub since: Option<String>,

    /// Deprecation notice
    #[serde(default)]
    pub deprecated: Option<String>,

    /// Example snippet
    #[serde(default)]
    pub example: Option<String>,
}

impl Meta {
    /// True if any optional field is present.
    fn has_any(&self) -> bool {
        self.module.is_some()
            || self.description.is_some()
            || self.since.is_some()
            || self.deprecated.is_some()
            || self.example.is_some()
    }
}

/// A value or function entry: carries its type signature verbatim.
#[derive(Debug, Clone, Deserialize)]
pub struct ValueEntry {
    #[serde(flatten)]
    pub meta: Meta,

    /// Literal type signature
    pub signature: String,
}

/// A named constructor of an algebraic data type.
#[derive(Debug, Clone, Deserialize)]
pub struct Constructor {
    /// Constructor name
    pub name: String,

    /// Named record fields with their types
    #[serde(default)]
    pub fields: Vec<Field>,

    /// Positional argument types
    #[serde(default)]
    pub args: Vec<String>,
}

/// A named record field.
#[derive(Debug, Clone, Deserialize)]
pub struct Field {
    pub name: String,

    #[serde(rename = "type")]
    pub ty: String,
}

/// A type, newtype, or data entry.
#[derive(Debug, Clone, Deserialize)]
pub struct TypeEntry {
    #[serde(flatten)]
    pub meta: Meta,

    /// Type parameter names, in order
    #[serde(default)]
    pub params: Vec<String>,

    /// Constructors, in declaration order
    #[serde(default)]
    pub constructors: Vec<Constructor>,

    /// Instance declaration strings
    #[serde(default)]
    pub instances: Vec<String>,
}

/// A method of a typeclass.
#[derive(Debug, Clone, Deserialize)]
pub struct Method {
    pub name: String,

    pub signature: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Whether the class provides a default implementation
    #[serde(default)]
    pub default: bool,
}

/// A typeclass entry.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassEntry {
    #[serde(flatten)]
    pub meta: Meta,

    /// Class parameter names, in order
    #[serde(default)]
    pub params: Vec<String>,

    /// Superclass constraints
    #[serde(default)]
    pub constraints: Vec<String>,

    /// Method definitions, in declaration order
    #[serde(default)]
    pub methods: Vec<Method>,

    /// Law statements
    #[serde(default)]
    pub laws: Vec<String>,
}

/// A documented program entity.
///
/// The `kind` tag in the content file selects the variant, so each
/// consumption site gets an exhaustive match over the entry kinds.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Entry {
    Value(ValueEntry),
    Function(ValueEntry),
    Type(TypeEntry),
    Newtype(TypeEntry),
    Data(TypeEntry),
    Class(ClassEntry),
}

impl Entry {
    /// Kind tag of this entry.
    pub fn kind(&self) -> Kind {
        match self {
            Entry::Value(_) => Kind::Value,
            Entry::Function(_) => Kind::Function,
            Entry::Type(_) => Kind::Type,
            Entry::Newtype(_) => Kind::Newtype,
            Entry::Data(_) => Kind::Data,
            Entry::Class(_) => Kind::Class,
        }
    }

    /// Shared metadata of this entry.
    pub fn meta(&self) -> &Meta {
        match self {
            Entry::Value(v) | Entry::Function(v) => &v.meta,
            Entry::Type(t) | Entry::Newtype(t) | Entry::Data(t) => &t.meta,
            Entry::Class(c) => &c.meta,
        }
    }

    /// Entity name.
    pub fn name(&self) -> &str {
        &self.meta().name
    }

    /// Canonical display signature.
    ///
    /// Values and functions return their stored signature verbatim. Type
    /// kinds produce `<kind> <Name> <params…>`; an empty parameter list
    /// contributes nothing. Classes produce
    /// `class (<constraints>) => <Name> <params…> where`, omitting the
    /// constraint segment entirely when there are no constraints.
    pub fn signature(&self) -> String {
        match self {
            Entry::Value(v) | Entry::Function(v) => v.signature.clone(),

            Entry::Type(t) | Entry::Newtype(t) | Entry::Data(t) => {
                let mut sig = format!("{} {}", self.kind().as_str(), t.meta.name);
                for param in &t.params {
                    sig.push(' ');
                    sig.push_str(param);
                }
                sig
            }

            Entry::Class(c) => {
                let mut sig = String::from("class ");
                if !c.constraints.is_empty() {
                    sig.push('(');
                    sig.push_str(&c.constraints.join(", "));
                    sig.push_str(") => ");
                }
                sig.push_str(&c.meta.name);
                for param in &c.params {
                    sig.push(' ');
                    sig.push_str(param);
                }
                sig.push_str(" where");
                sig
            }
        }
    }

    /// Whether the entry has anything to show beyond its signature row.
    ///
    /// Entries without details render no expand control at all.
    pub fn has_details(&self) -> bool {
        if self.meta().has_any() {
            return true;
        }

        match self {
            Entry::Value(_) | Entry::Function(_) => false,
            Entry::Type(t) | Entry::Newtype(t) | Entry::Data(t) => {
                !t.constructors.is_empty() || !t.instances.is_empty()
            }
            Entry::Class(c) => !c.methods.is_empty() || !c.laws.is_empty(),
        }
    }
}
