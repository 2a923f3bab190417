use std::collections::HashSet;

use serde::Deserialize;

use counted_core::error::{CountedError, Result};
use counted_core::{CountedSpec, Member, MemberKind, TypeName};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetadataConfig {
    pub version: u32,

    /// Applied to every non-absolute name; see `naming::compute_prefix`.
    #[serde(default)]
    pub prefix: String,

    #[serde(default)]
    pub types: Vec<TypeEntry>,
}

impl MetadataConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(CountedError::UnsupportedVersion);
        }

        let mut seen = HashSet::new();
        for t in &self.types {
            t.validate()?;
            for m in &t.members {
                if !seen.insert(m.member(&t.type_name())) {
                    return Err(CountedError::InvalidMetadata(format!(
                        "duplicate member declaration: {}",
                        m.member(&t.type_name())
                    )));
                }
            }
        }
        Ok(())
    }

    /// Every declared member with its counting metadata.
    pub fn declarations(&self) -> impl Iterator<Item = (Member, CountedSpec)> + '_ {
        self.types.iter().flat_map(|t| {
            let ty = t.type_name();
            t.members
                .iter()
                .map(move |m| (m.member(&ty), m.spec()))
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeEntry {
    /// Namespace-qualified type name, e.g. `org.acme.OrderService`.
    #[serde(rename = "type")]
    pub name: String,

    #[serde(default)]
    pub members: Vec<MemberEntry>,
}

impl TypeEntry {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(CountedError::InvalidMetadata("type must not be empty".into()));
        }
        if self.name.split('.').any(str::is_empty) {
            return Err(CountedError::InvalidMetadata(format!(
                "type has an empty segment: {}",
                self.name
            )));
        }
        for m in &self.members {
            m.validate(&self.name)?;
        }
        Ok(())
    }

    pub fn type_name(&self) -> TypeName {
        TypeName::parse(&self.name)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MemberEntry {
    pub kind: MemberKind,

    /// Method name. Required for methods, forbidden for constructors.
    #[serde(default)]
    pub member: Option<String>,

    #[serde(default)]
    pub params: Vec<String>,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub absolute: bool,

    #[serde(default)]
    pub monotonic: bool,
}

impl MemberEntry {
    pub fn validate(&self, type_name: &str) -> Result<()> {
        match (self.kind, self.member.as_deref()) {
            (MemberKind::Method, None) | (MemberKind::Method, Some("")) => {
                Err(CountedError::InvalidMetadata(format!(
                    "{type_name}: method entry requires `member`"
                )))
            }
            (MemberKind::Constructor, Some(m)) => Err(CountedError::InvalidMetadata(format!(
                "{type_name}: constructor entry must not name a member (got `{m}`)"
            ))),
            _ => Ok(()),
        }
    }

    pub fn member(&self, ty: &TypeName) -> Member {
        match self.kind {
            MemberKind::Method => Member::method(
                ty.clone(),
                self.member.clone().unwrap_or_default(),
                self.params.iter().cloned(),
            ),
            MemberKind::Constructor => Member::constructor(ty.clone(), self.params.iter().cloned()),
        }
    }

    pub fn spec(&self) -> CountedSpec {
        CountedSpec {
            name: self.name.clone(),
            absolute: self.absolute,
            monotonic: self.monotonic,
        }
    }
}
