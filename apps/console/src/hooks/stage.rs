use std::future::Future;
use std::time::Duration;

use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use gloo_timers::future::TimeoutFuture;
use reqwest::header::AUTHORIZATION;
use serde::Serialize;
use tracing::{debug, error, info, warn};

use crate::config::AppConfig;
use crate::fixtures::opportunity::placeholder_opportunity;
use crate::schema::validate;
use crate::state::{StageActions, StageEditState, StageStore};
use crate::{API_CONTEXT, APP_CONFIG};

/// Loads the opportunity whenever the routed id changes. A change restarts the
/// resource, which cancels the load still in flight.
pub fn use_opportunity_loader(actions: StageActions, opportunity_id: String) {
    let _ = use_resource(use_reactive!(|opportunity_id| async move {
        let delay = configured_delay(|cfg| cfg.load_delay);
        load_opportunity(actions, opportunity_id, pause(delay)).await;
    }));
}

pub(crate) async fn load_opportunity<S, W>(store: S, opportunity_id: String, wait: W)
where
    S: StageStore,
    W: Future<Output = ()>,
{
    let generation = store.update(StageEditState::begin_load);

    // Stands in for the backend round trip.
    wait.await;

    match placeholder_opportunity(&opportunity_id) {
        Ok((opportunity, form)) => {
            let id = opportunity.id.clone();
            if store.update(|state| state.finish_load(generation, opportunity, form)) {
                info!(opportunity_id = %id, "opportunity loaded");
            } else {
                debug!(opportunity_id = %id, "dropping superseded opportunity load");
            }
        }
        Err(err) => {
            error!(%opportunity_id, "failed to load opportunity: {err}");
            store.update(|state| state.abort_load(generation));
        }
    }
}

/// Simulated save. Nothing blocks it: validation issues are logged and the
/// request headers are prepared, but no request leaves the browser.
pub fn save_stage(actions: StageActions, opportunity_id: String) {
    let delay = configured_delay(|cfg| cfg.save_delay);
    spawn(run_save(actions, opportunity_id, pause(delay)));
}

pub(crate) async fn run_save<S, W>(store: S, opportunity_id: String, wait: W)
where
    S: StageStore,
    W: Future<Output = ()>,
{
    let form = store.update(StageEditState::begin_save);
    if form.is_blank() {
        debug!(%opportunity_id, "saving a stage with no values");
    }

    for issue in validate(&form) {
        warn!(%opportunity_id, field = %issue.key, "{issue}");
    }

    if let Some(api) = API_CONTEXT.get() {
        let headers = api.authorized_headers();
        debug!(
            base_url = api.base_url(),
            authorized = headers.contains_key(AUTHORIZATION),
            "stage save prepared, not sent"
        );
    }

    log_payload(&opportunity_id, &form);

    wait.await;

    info!(%opportunity_id, "stage saved (simulated)");
    store.update(StageEditState::finish_save);
}

fn log_payload<T: Serialize>(opportunity_id: &str, payload: &T) -> bool {
    match serde_json::to_string(payload) {
        Ok(payload) => {
            debug!(%opportunity_id, %payload, "stage payload");
            true
        }
        Err(err) => {
            error!(%opportunity_id, "failed to encode stage payload: {err}");
            false
        }
    }
}

fn configured_delay(pick: impl Fn(&AppConfig) -> Duration) -> Duration {
    match APP_CONFIG.get() {
        Some(config) => pick(config),
        None => pick(&AppConfig::default()),
    }
}

#[cfg(target_arch = "wasm32")]
async fn pause(delay: Duration) {
    let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
    TimeoutFuture::new(millis).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn pause(_delay: Duration) {}
