use leptos::prelude::*;

use crate::components::SidebarToggle;
use crate::context::View;

/// Placeholder for views that have no content yet
#[component]
pub fn ComingSoon(page: View) -> impl IntoView {
    view! {
        <div class="page coming-soon">
            <div class="page-header">
                <SidebarToggle />
                <h1>{page.title()}</h1>
            </div>
            <div class="empty-state">
                <h2>"Coming Soon"</h2>
                <p>{format!("{} is under construction.", page.label())}</p>
            </div>
        </div>
    }
}
