use dioxus::prelude::*;

/// Landing target for "back" navigation. The listing itself lives outside this console.
#[component]
pub fn OpportunityList() -> Element {
    rsx! {
        section { class: "space-y-2 p-6",
            h1 { class: "text-xl font-semibold text-slate-900", "Opportunities" }
            p { class: "text-sm text-slate-500",
                "Open an opportunity stage from the pipeline to edit it."
            }
        }
    }
}
