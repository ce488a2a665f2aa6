//! Tests for scope validation and parent/child lifetime rules

use std::sync::Arc;

use ruc_domain::error::Error;
use ruc_infrastructure::di::{Component, Module, Qualifier, Scope};

#[derive(Debug)]
struct Shared;

#[derive(Debug)]
struct PerActivity {
    shared: Arc<Shared>,
}

fn shared_module() -> Module {
    Module::new("shared").provide::<Shared, _>(Qualifier::None, Scope::Application, |_| {
        Ok(Arc::new(Shared))
    })
}

fn per_activity_module() -> Module {
    Module::new("per_activity").provide::<PerActivity, _>(
        Qualifier::None,
        Scope::Activity,
        |resolver| {
            let shared = resolver.get::<Shared>(Qualifier::None)?;
            Ok(Arc::new(PerActivity { shared }))
        },
    )
}

#[test]
fn activity_binding_rejected_in_application_component() {
    // The historical misconfiguration: an activity-held value tagged for
    // the application graph. It must fail fast, not silently leak.
    let err = Component::builder("app", Scope::Application)
        .module(per_activity_module())
        .build()
        .err()
        .expect("build must fail");

    assert!(matches!(err, Error::ScopeMismatch { .. }), "got: {err}");
}

#[test]
fn application_binding_rejected_in_activity_component() {
    let parent = Arc::new(
        Component::builder("app", Scope::Application)
            .build()
            .expect("empty application graph"),
    );

    let err = Component::builder("activity", Scope::Activity)
        .parent(parent)
        .module(shared_module())
        .build()
        .err()
        .expect("build must fail");

    assert!(matches!(err, Error::ScopeMismatch { .. }), "got: {err}");
}

#[test]
fn parent_must_outlive_child() {
    let activity_parent = Arc::new(
        Component::builder("activity", Scope::Activity)
            .build()
            .expect("bare activity graph"),
    );

    let err = Component::builder("app", Scope::Application)
        .parent(activity_parent)
        .build()
        .err()
        .expect("build must fail");

    assert!(matches!(err, Error::ScopeMismatch { .. }), "got: {err}");
}

#[test]
fn siblings_share_parent_bindings_but_own_their_scoped_values() {
    let parent = Arc::new(
        Component::builder("app", Scope::Application)
            .module(shared_module())
            .build()
            .expect("application graph"),
    );

    let first = Component::builder("activity", Scope::Activity)
        .parent(Arc::clone(&parent))
        .module(per_activity_module())
        .build()
        .expect("first activity graph");
    let second = Component::builder("activity", Scope::Activity)
        .parent(Arc::clone(&parent))
        .module(per_activity_module())
        .build()
        .expect("second activity graph");

    let from_parent = parent.get::<Shared>(Qualifier::None).expect("parent");
    let via_first = first.get::<Shared>(Qualifier::None).expect("first");
    let via_second = second.get::<Shared>(Qualifier::None).expect("second");

    assert!(Arc::ptr_eq(&from_parent, &via_first));
    assert!(Arc::ptr_eq(&from_parent, &via_second));

    let first_own = first.get::<PerActivity>(Qualifier::None).expect("own");
    let second_own = second.get::<PerActivity>(Qualifier::None).expect("own");

    assert!(
        !Arc::ptr_eq(&first_own, &second_own),
        "activity-scoped values must be distinct per component"
    );
    assert!(
        Arc::ptr_eq(&first_own.shared, &second_own.shared),
        "both consumed the single parent-scoped instance"
    );
}

#[test]
fn dropping_a_child_leaves_the_parent_intact() {
    let parent = Arc::new(
        Component::builder("app", Scope::Application)
            .module(shared_module())
            .build()
            .expect("application graph"),
    );

    let child = Component::builder("activity", Scope::Activity)
        .parent(Arc::clone(&parent))
        .module(per_activity_module())
        .build()
        .expect("activity graph");

    let shared = child.get::<Shared>(Qualifier::None).expect("shared");
    drop(child);

    let still_there = parent.get::<Shared>(Qualifier::None).expect("shared");
    assert!(Arc::ptr_eq(&shared, &still_there));
}
