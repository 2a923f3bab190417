//! Metric name resolution.
//!
//! Names are dot-delimited. A name is composed of a prefix derived from the
//! owning type and a base segment taken from the member or from an explicit
//! name; absolute names skip the prefix entirely.
//!
//! `ty` is the type the member is observed on (the intercepted type), which may
//! differ from `member.declaring` when the member is inherited. The prefix is
//! computed from `ty`; the constructor base segment from the member's own
//! declaring type.

use crate::member::{CountedSpec, Member, TypeName};

/// Separator between name segments.
pub const SEPARATOR: char = '.';

/// Join two segments, skipping empty ones.
pub fn join(a: &str, b: &str) -> String {
    join_all([a, b])
}

/// Join any number of segments, skipping empty ones.
pub fn join_all<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out = String::new();
    for part in parts.into_iter().filter(|p| !p.is_empty()) {
        if !out.is_empty() {
            out.push(SEPARATOR);
        }
        out.push_str(part);
    }
    out
}

/// Prefix segment for names that are not absolute.
///
/// Without a configured prefix this is the type's qualified name. With one it
/// is `namespace.prefix`, or empty when the type has no namespace.
pub fn compute_prefix(ty: &TypeName, prefix: &str) -> String {
    if prefix.is_empty() {
        return ty.qualified();
    }
    if ty.has_namespace() {
        format!("{}{}{}", ty.namespace, SEPARATOR, prefix)
    } else {
        String::new()
    }
}

/// Base segment derived from the member itself.
///
/// Constructors use the declaring type's simple name; their raw name is not a
/// usable metric segment.
pub fn base_name(member: &Member) -> &str {
    if member.is_constructor() {
        &member.declaring.simple
    } else {
        &member.name
    }
}

/// Resolve the fully-qualified metric name for a member.
pub fn resolve(
    ty: &TypeName,
    member: &Member,
    explicit_name: &str,
    absolute: bool,
    prefix: &str,
) -> String {
    if explicit_name.is_empty() {
        if absolute {
            return member.name.clone();
        }
        return join(&compute_prefix(ty, prefix), base_name(member));
    }
    if absolute {
        return explicit_name.to_string();
    }
    join(&compute_prefix(ty, prefix), explicit_name)
}

/// [`resolve`] with the member's declaring type as the owning type.
pub fn resolve_spec(member: &Member, spec: &CountedSpec, prefix: &str) -> String {
    resolve(&member.declaring, member, &spec.name, spec.absolute, prefix)
}
