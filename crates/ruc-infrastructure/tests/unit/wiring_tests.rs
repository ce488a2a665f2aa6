//! Tests for the concrete application and activity wiring
//!
//! Builds the real graphs (context, HTTP client, API client, image
//! loader, adapter) without performing any network I/O.

use std::sync::Arc;

use ruc_domain::error::{Error, Result};
use ruc_infrastructure::adapters::UserListAdapter;
use ruc_infrastructure::clients::RandomUsersApi;
use ruc_infrastructure::config::AppConfig;
use ruc_infrastructure::constants::DEFAULT_API_BASE_URL;
use ruc_infrastructure::di::{
    ActivityContext, AppComponent, AppContext, BindingKey, Injectable, Injected,
    MainActivityComponent, Qualifier, context_module,
};

fn app_context() -> Arc<AppContext> {
    Arc::new(AppContext::new("dev.ruc.test"))
}

#[test]
fn application_component_builds_with_defaults() {
    let config = AppConfig::default();
    let context = app_context();
    let app = AppComponent::build(&config, &context).expect("app graph");

    let api = app.random_users_api().expect("api bound");
    assert_eq!(api.base_url().as_str(), DEFAULT_API_BASE_URL);

    let images = app.image_loader().expect("image loader bound");
    assert!(
        Arc::ptr_eq(images.context(), &context),
        "image loader holds the process-wide application context"
    );
}

#[test]
fn application_scoped_clients_are_cached() {
    let app = AppComponent::build(&AppConfig::default(), &app_context()).expect("app graph");

    let first = app.random_users_api().expect("first");
    let second = app.random_users_api().expect("second");
    assert!(Arc::ptr_eq(&first, &second));

    let loader_a = app.image_loader().expect("a");
    let loader_b = app.image_loader().expect("b");
    assert!(Arc::ptr_eq(&loader_a, &loader_b));
}

#[test]
fn malformed_base_url_aborts_graph_construction() {
    let mut config = AppConfig::default();
    config.api.base_url = "not a url at all".to_string();

    let err = AppComponent::build(&config, &app_context())
        .err()
        .expect("build must fail");

    assert!(
        matches!(err, Error::ResourceConstruction { .. }),
        "got: {err}"
    );
}

#[test]
fn application_context_binding_calls_through_to_the_application() {
    // Even when the module is constructed from an activity-held context,
    // the bound value is the process-wide application context.
    let context = app_context();
    let activity = ActivityContext::new("MainActivity", Arc::clone(&context));

    let module = context_module(&activity);
    assert_eq!(module.name(), "context");

    let app = AppComponent::build(&AppConfig::default(), &activity).expect("app graph");
    let bound = app.application_context().expect("context bound");
    assert!(Arc::ptr_eq(&bound, &context));
}

#[derive(Default)]
struct MainActivity {
    api: Option<Arc<RandomUsersApi>>,
    adapter: Option<Arc<UserListAdapter>>,
}

impl Injectable for MainActivity {
    fn target_name(&self) -> &'static str {
        "MainActivity"
    }

    fn injection_points(&self) -> Vec<BindingKey> {
        vec![
            BindingKey::of::<RandomUsersApi>(Qualifier::None),
            BindingKey::of::<UserListAdapter>(Qualifier::None),
        ]
    }

    fn assign(&mut self, values: &mut Injected) -> Result<()> {
        self.api = Some(values.take::<RandomUsersApi>(Qualifier::None)?);
        self.adapter = Some(values.take::<UserListAdapter>(Qualifier::None)?);
        Ok(())
    }
}

#[test]
fn activity_components_share_parent_bindings_but_own_their_adapters() {
    let context = app_context();
    let app = AppComponent::build(&AppConfig::default(), &context).expect("app graph");

    let first = MainActivityComponent::build(
        &app,
        Arc::new(ActivityContext::new("MainActivity#1", Arc::clone(&context))),
    )
    .expect("first activity graph");
    let second = MainActivityComponent::build(
        &app,
        Arc::new(ActivityContext::new("MainActivity#2", Arc::clone(&context))),
    )
    .expect("second activity graph");

    let mut screen_one = MainActivity::default();
    let mut screen_two = MainActivity::default();
    first.inject(&mut screen_one).expect("inject one");
    second.inject(&mut screen_two).expect("inject two");

    let api_one = screen_one.api.expect("api one");
    let api_two = screen_two.api.expect("api two");
    assert!(
        Arc::ptr_eq(&api_one, &api_two),
        "parent-scoped binding is one instance across siblings"
    );

    let adapter_one = screen_one.adapter.expect("adapter one");
    let adapter_two = screen_two.adapter.expect("adapter two");
    assert!(
        !Arc::ptr_eq(&adapter_one, &adapter_two),
        "activity-scoped bindings are distinct per component"
    );
    assert_eq!(adapter_one.activity(), "MainActivity#1");
    assert_eq!(adapter_two.activity(), "MainActivity#2");
    assert!(
        Arc::ptr_eq(adapter_one.images(), adapter_two.images()),
        "both adapters consume the single application-scoped image loader"
    );
}

#[tokio::test]
async fn thumbnails_resolve_to_none_without_a_picture() {
    let context = app_context();
    let app = AppComponent::build(&AppConfig::default(), &context).expect("app graph");
    let component = MainActivityComponent::build(
        &app,
        Arc::new(ActivityContext::new("MainActivity", Arc::clone(&context))),
    )
    .expect("activity graph");

    let adapter = component.adapter().expect("adapter bound");

    // no rows at all
    assert!(adapter.thumbnail(0).await.expect("no row").is_none());

    // a row whose picture URLs are empty
    let mut user = ruc_domain::value_objects::User::default();
    user.name.first = "Ada".to_string();
    user.name.last = "Lovelace".to_string();
    adapter.set_users(vec![user]);

    assert_eq!(adapter.len(), 1);
    assert!(adapter.thumbnail(0).await.expect("empty url").is_none());
    assert!(
        !app.image_loader()
            .expect("loader bound")
            .is_cached("https://example.com/t.jpg")
    );
}

#[test]
fn activity_component_exposes_its_own_context() {
    let context = app_context();
    let app = AppComponent::build(&AppConfig::default(), &context).expect("app graph");

    let activity_context = Arc::new(ActivityContext::new("MainActivity", Arc::clone(&context)));
    let component =
        MainActivityComponent::build(&app, Arc::clone(&activity_context)).expect("activity graph");

    let bound = component.activity_context().expect("context bound");
    assert!(Arc::ptr_eq(&bound, &activity_context));
    assert!(Arc::ptr_eq(&bound.application(), &context));

    let adapter = component.adapter().expect("adapter bound");
    assert!(adapter.is_empty(), "fresh adapter has no rows");
}
