use crate::{
    api::DefaultTransport,
    config::use_widget_config,
    search_controller::{KeyOutcome, SearchController, SearchStatus, WidgetView},
};
use leptos::{ev::KeyboardEvent, prelude::*, task::spawn_local};
use std::sync::Arc;

/// Writes controller updates into the widget's signals.
#[derive(Clone, Copy)]
struct SignalView {
    query: WriteSignal<String>,
    fragment: WriteSignal<String>,
    status: WriteSignal<SearchStatus>,
}

impl WidgetView for SignalView {
    fn clear_input(&self) {
        self.query.set(String::new());
    }

    fn show_results(&self, html: String) {
        self.fragment.set(html);
    }

    fn show_status(&self, status: SearchStatus) {
        self.status.set(status);
    }
}

#[component]
pub fn SearchWidget() -> impl IntoView {
    let config = use_widget_config();
    let results_target = config.results_target.clone();
    let (query, set_query) = signal(String::new());
    let (fragment, set_fragment) = signal(String::new());
    let (status, set_status) = signal(SearchStatus::Idle);
    let signals = SignalView {
        query: set_query,
        fragment: set_fragment,
        status: set_status,
    };
    let controller = Arc::new(SearchController::new(
        config,
        DefaultTransport::default(),
        signals,
    ));

    let on_input = move |ev| {
        set_query.set(event_target_value(&ev));
    };
    let keydown = move |ev: KeyboardEvent| {
        let outcome =
            controller.on_key_down(&ev.key(), ev.is_composing(), &event_target_value(&ev));
        if outcome.prevents_default() {
            ev.prevent_default();
        }
        if let KeyOutcome::Submitted(pending) = outcome {
            let controller = controller.clone();
            spawn_local(async move {
                controller.send(pending).await;
            });
        }
    };

    view! {
        <div class="search-widget">
            <input
                class="search-box"
                type="text"
                placeholder="Search words..."
                on:input=on_input
                on:keydown=keydown
                prop:value=query
            />
            <span
                class="search-status"
                class:failed=move || status.with(SearchStatus::is_failed)
            >
                {move || status.with(SearchStatus::message)}
            </span>
            // rendered by the controller, escaped by maud
            <div id=results_target inner_html=move || fragment.get()></div>
        </div>
    }
}
