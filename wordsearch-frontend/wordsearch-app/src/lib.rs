pub mod api;
pub mod components;
pub mod config;
pub mod error;
pub mod request_tracker;
pub mod search_controller;
pub mod search_result;

use crate::components::search_widget::*;
use crate::config::{provide_widget_config, WidgetConfig};
use leptos::prelude::*;
use leptos_meta::*;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_widget_config(WidgetConfig::default());

    view! {
        <Title text="Word search" />
        <main class="search-page">
            <SearchWidget />
        </main>
    }
}
