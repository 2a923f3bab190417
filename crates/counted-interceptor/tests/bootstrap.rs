//! Metadata document -> registered counters -> interceptor, end to end.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

mod common;

use std::sync::Arc;

use counted_core::{CountedSpec, Member, TypeName};
use counted_interceptor::bootstrap::{register_declared, register_for};
use counted_interceptor::{config, CountedInterceptor, CountedMetadata, MetricRegistry};

const METADATA: &str = r#"
version: 1
types:
  - type: org.acme.orders.OrderService
    members:
      - kind: constructor
        monotonic: true
      - kind: method
        member: place
        params: [Order]
      - kind: method
        member: cancel
        name: orders.cancelled
        absolute: true
        monotonic: true
  - type: Standalone
    members:
      - kind: method
        member: tick
        name: ticks
"#;

#[test]
fn registers_every_declared_counter() {
    common::init_tracing();
    let cfg = config::load_from_str(METADATA).unwrap();
    let md = CountedMetadata::from_config(&cfg);
    let reg = MetricRegistry::new();

    let names = register_declared(&md, &reg).unwrap();
    assert_eq!(
        names,
        vec![
            "Standalone.ticks",
            "orders.cancelled",
            "org.acme.orders.OrderService.OrderService",
            "org.acme.orders.OrderService.place",
        ]
    );
    assert_eq!(reg.names(), names);
}

#[test]
fn bootstrapped_registry_serves_interceptor() {
    let cfg = config::load_from_str(METADATA).unwrap();
    let md = Arc::new(CountedMetadata::from_config(&cfg));
    let reg = Arc::new(MetricRegistry::new());
    register_declared(&md, &reg).unwrap();
    let ic = CountedInterceptor::new(reg.clone(), md);

    let ty = TypeName::parse("org.acme.orders.OrderService");
    let ctor = Member::constructor(ty.clone(), Vec::<String>::new());
    let place = Member::method(ty.clone(), "place", ["Order"]);
    let cancel = Member::method(ty, "cancel", Vec::<String>::new());

    ic.around_construct(&ctor, || ()).unwrap();
    ic.around_invoke(&place, || ()).unwrap();
    ic.around_invoke(&cancel, || ()).unwrap();
    ic.around_invoke(&cancel, || ()).unwrap();

    let out = reg.render();
    assert!(out.contains("org_acme_orders_OrderService_OrderService 1\n"));
    assert!(out.contains("org_acme_orders_OrderService_place 0\n"));
    assert!(out.contains("# TYPE orders_cancelled counter\norders_cancelled 2\n"));
}

#[test]
fn fails_when_name_held_by_gauge() {
    let cfg = config::load_from_str(METADATA).unwrap();
    let md = CountedMetadata::from_config(&cfg);
    let reg = MetricRegistry::new();
    reg.gauge("orders.cancelled").unwrap();

    let err = register_declared(&md, &reg).unwrap_err();
    assert_eq!(err.code().as_str(), "NOT_A_COUNTER");
}

#[test]
fn target_type_registration_matches_inherited_lookup() {
    let base = TypeName::parse("org.acme.Base");
    let sub = TypeName::parse("org.acme.Sub");
    let run = Member::method(base, "run", Vec::<String>::new());
    let md = Arc::new(
        CountedMetadata::builder()
            .member(run.clone(), CountedSpec::default())
            .build(),
    );
    let reg = Arc::new(MetricRegistry::new());

    let names = register_for(&sub, &md, &reg).unwrap();
    assert_eq!(names, vec!["org.acme.Sub.run"]);
    assert!(!reg.contains("org.acme.Base.run"));

    let ic = CountedInterceptor::new(reg.clone(), md).with_target_type(sub);
    let seen = ic
        .around_invoke(&run, || reg.counter("org.acme.Sub.run").unwrap().count())
        .unwrap();
    assert_eq!(seen, 1);
    assert_eq!(reg.counter("org.acme.Sub.run").unwrap().count(), 0);
}

#[test]
fn declaring_type_registration_misses_target_lookup() {
    let base = TypeName::parse("org.acme.Base");
    let run = Member::method(base, "run", Vec::<String>::new());
    let md = Arc::new(
        CountedMetadata::builder()
            .member(run.clone(), CountedSpec::default())
            .build(),
    );
    let reg = Arc::new(MetricRegistry::new());
    register_declared(&md, &reg).unwrap();

    let sub = TypeName::parse("org.acme.Sub");
    let ic = CountedInterceptor::new(reg, md).with_target_type(sub);
    let err = ic.around_invoke(&run, || ()).unwrap_err();
    assert_eq!(err.metric_name(), Some("org.acme.Sub.run"));
}
