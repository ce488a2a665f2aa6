//! Random User Client - composition demo
//!
//! Walks the two lifecycle boundaries the wiring is built around: the
//! application component comes up once at process start, then an activity
//! component is built on top of it, injects the activity's fields, and is
//! torn down when the activity ends.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use ruc_domain::error::Result;
use ruc_infrastructure::adapters::UserListAdapter;
use ruc_infrastructure::clients::RandomUsersApi;
use ruc_infrastructure::config::ConfigLoader;
use ruc_infrastructure::di::{
    ActivityContext, AppComponent, AppContext, BindingKey, Injectable, Injected,
    MainActivityComponent, Qualifier,
};
use ruc_infrastructure::logging::init_logging;
use tracing::info;

/// Command line interface for the Random User Client
#[derive(Parser, Debug)]
#[command(name = "ruc")]
#[command(about = "Random User Client - dependency-injection wiring demo")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Fetch a batch of users after wiring up
    #[arg(long)]
    fetch: bool,

    /// Number of users to fetch
    #[arg(long)]
    count: Option<u32>,
}

/// The main activity with its two injection points
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

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let config = loader.load()?;
    init_logging(&config.logging)?;

    // Process start: build the application-scoped graph once.
    let app_context = Arc::new(AppContext::new("dev.ruc.demo"));
    let app = AppComponent::build(&config, &app_context)?;

    // Activity created: build the child graph and inject the activity.
    let activity_context = Arc::new(ActivityContext::new("MainActivity", app_context));
    let component = MainActivityComponent::build(&app, activity_context)?;

    let mut activity = MainActivity::default();
    component.inject(&mut activity)?;
    info!("MainActivity injected");

    let api = activity
        .api
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("MainActivity.api not populated"))?;
    let adapter = activity
        .adapter
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("MainActivity.adapter not populated"))?;

    info!(
        base_url = %api.base_url(),
        activity = adapter.activity(),
        "wiring complete"
    );

    if cli.fetch {
        let count = cli.count.unwrap_or(config.api.batch_size);
        let response = api.get_random_users(count).await?;
        adapter.set_users(response.results);
        for index in 0..adapter.len() {
            if let Some(label) = adapter.row_label(index) {
                println!("{label}");
            }
        }
    }

    // Activity destroyed: dropping the component drops its scoped values.
    drop(component);
    info!("MainActivity component torn down");

    Ok(())
}
