use dioxus::prelude::*;

use crate::models::{FieldKey, OpportunityRef, StageFormData};

pub type StageSignal = Signal<StageEditState>;

pub const BREADCRUMB_LOADING: &str = "Loading...";

/// View state of the stage editor. Loading and saving are tracked independently.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StageEditState {
    pub opportunity: Option<OpportunityRef>,
    pub form: StageFormData,
    pub loading: bool,
    /// Bumped by every `begin_load`; only the latest load may land.
    pub load_generation: u64,
    pub saves_in_flight: u32,
}

impl StageEditState {
    /// Initial state of a freshly mounted view: nothing is rendered until the first load lands.
    pub fn pending() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    pub fn begin_load(&mut self) -> u64 {
        self.load_generation += 1;
        self.loading = true;
        self.load_generation
    }

    /// Applies a finished load. Returns `false` and leaves the state alone when
    /// a newer load has started since `generation` was issued.
    pub fn finish_load(
        &mut self,
        generation: u64,
        opportunity: OpportunityRef,
        form: StageFormData,
    ) -> bool {
        if generation != self.load_generation {
            return false;
        }
        self.opportunity = Some(opportunity);
        self.form = form;
        self.loading = false;
        true
    }

    /// Failures are only logged; the view keeps whatever it had.
    pub fn abort_load(&mut self, generation: u64) -> bool {
        if generation != self.load_generation {
            return false;
        }
        self.loading = false;
        true
    }

    pub fn set_field(&mut self, key: FieldKey, value: String) {
        self.form.set(key, value);
    }

    /// Returns the snapshot the save will operate on.
    pub fn begin_save(&mut self) -> StageFormData {
        self.saves_in_flight += 1;
        self.form.clone()
    }

    pub fn finish_save(&mut self) {
        self.saves_in_flight = self.saves_in_flight.saturating_sub(1);
    }

    pub fn is_saving(&self) -> bool {
        self.saves_in_flight > 0
    }

    pub fn breadcrumb_title(&self) -> &str {
        self.opportunity
            .as_ref()
            .map(|opportunity| opportunity.title.as_str())
            .unwrap_or(BREADCRUMB_LOADING)
    }

    pub fn show_form(&self) -> bool {
        !self.loading
    }
}

/// Somewhere the load and save flows can apply state transitions.
pub trait StageStore {
    fn update<R>(&self, apply: impl FnOnce(&mut StageEditState) -> R) -> R;
}

#[derive(Clone, Copy)]
pub struct StageActions {
    state: StageSignal,
}

impl StageActions {
    pub fn new(state: StageSignal) -> Self {
        Self { state }
    }

    pub fn set_field(&self, key: FieldKey, value: String) {
        self.update(|state| state.set_field(key, value));
    }
}

impl StageStore for StageActions {
    fn update<R>(&self, apply: impl FnOnce(&mut StageEditState) -> R) -> R {
        let mut signal = self.state;
        let mut state = signal.write();
        apply(&mut state)
    }
}

#[cfg(test)]
impl StageStore for std::rc::Rc<std::cell::RefCell<StageEditState>> {
    fn update<R>(&self, apply: impl FnOnce(&mut StageEditState) -> R) -> R {
        apply(&mut self.borrow_mut())
    }
}

pub fn use_stage_state() -> StageSignal {
    use_context::<StageSignal>()
}

pub fn use_stage_actions() -> StageActions {
    StageActions::new(use_stage_state())
}
