use leptos::prelude::*;

use crate::note_text::NoteStats;

/// Four counters above the note lists; hidden when there are no notes
#[component]
pub fn QuickStats(#[prop(into)] stats: Signal<NoteStats>) -> impl IntoView {
    let tiles = move || {
        let s = stats.get();
        [
            ("Total Notes", s.total),
            ("Total Words", s.words),
            ("This Week", s.this_week),
            ("Updated Today", s.updated_today),
        ]
    };

    view! {
        <Show when=move || (stats.get().total > 0)>
            <section class="quick-stats">
                {move || tiles().into_iter().map(|(label, value)| view! {
                    <div class="stat-tile">
                        <span class="stat-value">{value}</span>
                        <span class="stat-label">{label}</span>
                    </div>
                }).collect_view()}
            </section>
        </Show>
    }
}
