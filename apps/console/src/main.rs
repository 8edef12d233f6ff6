#![allow(non_snake_case)]

mod api;
mod config;
mod fixtures;
mod hooks;
mod models;
mod schema;
mod state;
mod ui;

use anyhow::{anyhow, Context};
use api::ApiContext;
use config::AppConfig;
use dioxus::prelude::*;
use dioxus_router::prelude::*;
use once_cell::sync::OnceCell;
use tracing::{error, info};
use ui::opportunities::OpportunityList;
use ui::stage_edit::StageEdit;

pub(crate) static APP_CONFIG: OnceCell<AppConfig> = OnceCell::new();
pub(crate) static API_CONTEXT: OnceCell<ApiContext> = OnceCell::new();

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_env();
    init_logging(config.profile.log_level());

    if let Err(err) = bootstrap_infrastructure(config) {
        error!("console bootstrap failed: {err:#}");
    }

    launch(App);
}

fn init_logging(level: tracing::Level) {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let _ = dioxus_logger::init(level);
    });
}

fn bootstrap_infrastructure(config: AppConfig) -> anyhow::Result<()> {
    let api = ApiContext::new(config.clone());

    APP_CONFIG
        .set(config)
        .map_err(|_| anyhow!("already set"))
        .context("app config")?;
    API_CONTEXT
        .set(api)
        .map_err(|_| anyhow!("already set"))
        .context("api context")?;

    if let Some(api) = API_CONTEXT.get() {
        info!(base_url = api.base_url(), "opportunity console initialized");
    }

    Ok(())
}

#[component]
fn App() -> Element {
    rsx! {
        div { class: "relative min-h-screen bg-slate-50",
            Router::<Route> {}
        }
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
enum Route {
    #[redirect("/", || Route::OpportunityList {})]
    #[route("/opportunities")]
    OpportunityList {},
    #[route("/opportunities/:opportunity_id/stage")]
    StageEdit { opportunity_id: String },
}
