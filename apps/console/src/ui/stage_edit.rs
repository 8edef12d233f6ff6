use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::hooks::stage::{save_stage, use_opportunity_loader};
use crate::schema::{FieldSpec, InputKind, STAGE_FIELDS, STAGE_TITLE};
use crate::state::{use_stage_actions, StageActions, StageEditState};
use crate::ui::breadcrumb::Breadcrumb;
use crate::Route;

pub(crate) fn back_target() -> Route {
    Route::OpportunityList {}
}

/// One click, one push onto the history stack.
pub(crate) fn navigate_back(push: &mut impl FnMut(Route)) {
    push(back_target());
}

#[component]
pub fn StageEdit(opportunity_id: String) -> Element {
    let state = use_signal(StageEditState::pending);
    use_context_provider(|| state);

    let actions = StageActions::new(state);
    use_opportunity_loader(actions, opportunity_id.clone());

    let navigator = use_navigator();
    let snapshot = state.read().clone();

    let body = if snapshot.show_form() {
        let saving = snapshot.is_saving();
        rsx! {
            section { class: "space-y-4 rounded-lg border border-slate-200 bg-white p-6 shadow-sm",
                h2 { class: "text-lg font-semibold text-slate-900", "{STAGE_TITLE}" }
                div { class: "grid gap-4 md:grid-cols-2",
                    for spec in STAGE_FIELDS.iter() {
                        StageField {
                            key: "{spec.key}",
                            spec: *spec,
                            value: snapshot.form.get(spec.key).to_string(),
                        }
                    }
                }
                div { class: "flex justify-end gap-2",
                    button {
                        class: "rounded border border-slate-300 px-4 py-2 text-sm text-slate-700 hover:bg-slate-100",
                        onclick: move |_| {
                            navigate_back(&mut |route| {
                                navigator.push(route);
                            });
                        },
                        "Cancel"
                    }
                    button {
                        class: "rounded bg-slate-900 px-4 py-2 text-sm font-semibold text-white hover:bg-slate-800",
                        onclick: move |_| save_stage(actions, opportunity_id.clone()),
                        if saving { "Saving..." } else { "Save" }
                    }
                }
            }
        }
    } else {
        rsx! { p { class: "text-sm text-slate-500", "Loading opportunity..." } }
    };

    rsx! {
        div { class: "app-shell space-y-6 p-6",
            Breadcrumb {
                on_back: move |_| {
                    navigate_back(&mut |route| {
                        navigator.push(route);
                    });
                }
            }
            {body}
        }
    }
}

#[component]
fn StageField(spec: FieldSpec, value: String) -> Element {
    let actions = use_stage_actions();
    let key = spec.key;
    let id = key.as_str();

    let wrapper_class = if spec.input == InputKind::TextArea {
        "space-y-1 md:col-span-2"
    } else {
        "space-y-1"
    };
    let input_class = "w-full rounded border border-slate-300 px-3 py-2 text-sm text-slate-800 focus:border-slate-500 focus:outline-none";

    rsx! {
        div { class: wrapper_class,
            label { r#for: id, class: "text-xs font-medium text-slate-600",
                "{spec.label}"
                if spec.required {
                    span { class: "ml-0.5 text-red-500", "*" }
                }
            }
            if spec.input == InputKind::TextArea {
                textarea {
                    id: id,
                    class: input_class,
                    rows: "4",
                    placeholder: spec.placeholder,
                    value: "{value}",
                    oninput: move |evt: FormEvent| actions.set_field(key, evt.value()),
                }
            } else {
                input {
                    id: id,
                    r#type: spec.input.html_type(),
                    class: input_class,
                    placeholder: spec.placeholder,
                    required: spec.required,
                    value: "{value}",
                    oninput: move |evt: FormEvent| actions.set_field(key, evt.value()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_goes_to_listing() {
        assert_eq!(back_target().to_string(), "/opportunities");
    }

    #[test]
    fn each_back_click_pushes_listing_once() {
        let mut pushed = Vec::new();
        let mut push = |route: Route| pushed.push(route);

        navigate_back(&mut push);
        navigate_back(&mut push);

        assert_eq!(
            pushed,
            vec![Route::OpportunityList {}, Route::OpportunityList {}]
        );
    }

    #[test]
    fn stage_route_carries_opportunity_id() {
        let route = Route::StageEdit {
            opportunity_id: "42".into(),
        };
        assert_eq!(route.to_string(), "/opportunities/42/stage");
        assert_eq!("/opportunities/42/stage".parse::<Route>().ok(), Some(route));
    }
}
