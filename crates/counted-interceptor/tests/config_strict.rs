#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use counted_core::{Member, MemberKind, TypeName};
use counted_interceptor::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
types:
  - type: org.acme.Svc
    members:
      - kind: method
        member: run
        monotonik: true # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "INVALID_METADATA");
}

#[test]
fn ok_minimal_config() {
    let ok = r#"
version: 1
types:
  - type: org.acme.Svc
    members:
      - kind: constructor
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.prefix, "");
    assert_eq!(cfg.types[0].name, "org.acme.Svc");
    assert_eq!(cfg.types[0].members[0].kind, MemberKind::Constructor);
}

#[test]
fn rejects_unsupported_version() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn method_requires_member_name() {
    let bad = r#"
version: 1
types:
  - type: org.acme.Svc
    members:
      - kind: method
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(err.to_string().contains("requires `member`"));
}

#[test]
fn constructor_rejects_member_name() {
    let bad = r#"
version: 1
types:
  - type: org.acme.Svc
    members:
      - kind: constructor
        member: Svc
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "INVALID_METADATA");
}

#[test]
fn rejects_duplicate_members_but_allows_overloads() {
    let dup = r#"
version: 1
types:
  - type: org.acme.Svc
    members:
      - kind: method
        member: run
      - kind: method
        member: run
"#;
    let err = config::load_from_str(dup).expect_err("must fail");
    assert!(err.to_string().contains("duplicate member"));

    let overloads = r#"
version: 1
types:
  - type: org.acme.Svc
    members:
      - kind: method
        member: run
      - kind: method
        member: run
        params: [int]
"#;
    let cfg = config::load_from_str(overloads).expect("overloads are distinct");
    let members: Vec<Member> = cfg.declarations().map(|(m, _)| m).collect();
    let ty = TypeName::parse("org.acme.Svc");
    assert!(members.contains(&Member::method(ty.clone(), "run", Vec::<String>::new())));
    assert!(members.contains(&Member::method(ty, "run", ["int"])));
}

#[test]
fn rejects_empty_type_name() {
    let bad = r#"
version: 1
types:
  - type: ""
"#;
    assert!(config::load_from_str(bad).is_err());
}

#[test]
fn rejects_empty_type_segment() {
    for ty in ["org..Svc", ".org.Svc", "org.Svc."] {
        let bad = format!("version: 1\ntypes:\n  - type: \"{ty}\"\n");
        let err = config::load_from_str(&bad).expect_err("must fail");
        assert_eq!(err.code().as_str(), "INVALID_METADATA", "{ty}");
        assert!(err.to_string().contains("empty segment"));
    }
}

#[test]
fn missing_file_is_internal() {
    let err = config::load_from_file("/nonexistent/counted.yaml").expect_err("must fail");
    assert_eq!(err.code().as_str(), "INTERNAL");
}
