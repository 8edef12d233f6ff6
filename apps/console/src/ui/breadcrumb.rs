use dioxus::prelude::*;

use crate::schema::STAGE_TITLE;
use crate::state::use_stage_state;

#[component]
pub fn Breadcrumb(on_back: EventHandler<MouseEvent>) -> Element {
    let state = use_stage_state();
    let title = state.read().breadcrumb_title().to_string();

    rsx! {
        header { class: "flex flex-col gap-2",
            nav { class: "flex items-center gap-2 text-xs text-slate-500",
                button {
                    class: "text-slate-600 hover:text-slate-900 hover:underline",
                    onclick: move |evt| on_back.call(evt),
                    "Opportunities"
                }
                span { "/" }
                span { class: "font-medium text-slate-700", "{title}" }
                span { "/" }
                span { "{STAGE_TITLE}" }
            }
            h1 { class: "text-xl font-semibold text-slate-900", "{title}" }
        }
    }
}
