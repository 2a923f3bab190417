//! Member identity and per-member counting metadata.

use std::fmt;

use serde::Deserialize;

/// Declaring type of a counted member: a namespace (possibly empty) plus the
/// simple type name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeName {
    pub namespace: String,
    pub simple: String,
}

impl TypeName {
    pub fn new(namespace: impl Into<String>, simple: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            simple: simple.into(),
        }
    }

    /// Split a qualified name on its last dot: `"a.b.C"` -> (`"a.b"`, `"C"`).
    pub fn parse(qualified: &str) -> Self {
        match qualified.rsplit_once('.') {
            Some((ns, simple)) => Self::new(ns, simple),
            None => Self::new("", qualified),
        }
    }

    /// Namespace-qualified name, or the simple name for types without a namespace.
    pub fn qualified(&self) -> String {
        if self.namespace.is_empty() {
            self.simple.clone()
        } else {
            format!("{}.{}", self.namespace, self.simple)
        }
    }

    pub fn has_namespace(&self) -> bool {
        !self.namespace.is_empty()
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.namespace.is_empty() {
            f.write_str(&self.simple)
        } else {
            write!(f, "{}.{}", self.namespace, self.simple)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberKind {
    Method,
    Constructor,
}

/// A method or constructor of a specific type.
///
/// Parameter types are part of the identity, so overloads are distinct
/// members. A constructor's raw `name` is its declaring type's qualified name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Member {
    pub declaring: TypeName,
    pub kind: MemberKind,
    pub name: String,
    pub params: Vec<String>,
}

impl Member {
    pub fn method<P, S>(declaring: TypeName, name: impl Into<String>, params: P) -> Self
    where
        P: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            declaring,
            kind: MemberKind::Method,
            name: name.into(),
            params: params.into_iter().map(Into::into).collect(),
        }
    }

    pub fn constructor<P, S>(declaring: TypeName, params: P) -> Self
    where
        P: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = declaring.qualified();
        Self {
            declaring,
            kind: MemberKind::Constructor,
            name,
            params: params.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_constructor(&self) -> bool {
        self.kind == MemberKind::Constructor
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            MemberKind::Method => write!(f, "{}#{}", self.declaring, self.name)?,
            MemberKind::Constructor => write!(f, "{}#<init>", self.declaring)?,
        }
        write!(f, "({})", self.params.join(", "))
    }
}

/// Counting metadata declared on a member.
///
/// The default (no explicit name, relative, decrementing) is also what an
/// undeclared member resolves with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CountedSpec {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub absolute: bool,
    #[serde(default)]
    pub monotonic: bool,
}
