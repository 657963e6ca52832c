//! Header Components
//!
//! Mobile top bar and the desktop sidebar collapse toggle.

use leptos::prelude::*;

use crate::context::AppContext;

/// Top bar on narrow viewports: opens the sidebar overlay, shows the view title
#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <header class="mobile-header">
            <button
                class="menu-btn"
                aria-label="Open sidebar"
                on:click=move |_| ctx.toggle_sidebar_open()
            >
                "☰"
            </button>
            <h2 class="mobile-title">{move || ctx.view.get().title()}</h2>
        </header>
    }
}

/// Collapse/expand the docked sidebar
#[component]
pub fn SidebarToggle() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <button
            class="sidebar-toggle"
            title="Toggle sidebar (Cmd/Ctrl + B)"
            aria-label="Toggle sidebar"
            on:click=move |_| ctx.toggle_sidebar_collapse()
        >
            {move || if ctx.sidebar.get().collapsed { "»" } else { "«" }}
        </button>
    }
}
