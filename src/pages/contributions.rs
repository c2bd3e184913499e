use leptos::prelude::*;

use crate::app::Screen;
use crate::components::contribution_card::ContributionCard;
use crate::components::contribution_editor::ContributionEditor;
use crate::models::{Contribution, ContributionDraft, DateRange};

#[component]
pub fn ContributionsPage(
    contributions: ReadSignal<Vec<Contribution>>,
    #[prop(into)] on_update: Callback<(u64, ContributionDraft)>,
    #[prop(into)] on_delete: Callback<u64>,
    set_screen: WriteSignal<Screen>,
) -> impl IntoView {
    let (range, set_range) = signal(DateRange::default());
    // Id of the record currently in edit mode, if any.
    let (editing, set_editing) = signal::<Option<u64>>(None);

    let filtered = move || {
        let range = range.get();
        contributions
            .get()
            .into_iter()
            .filter(|record| range.contains(&record.date))
            .collect::<Vec<_>>()
    };

    view! {
        <div class="page contributions-page">
            <style>{include_str!("contributions.css")}</style>

            <div class="page-header">
                <button class="back-link" on:click=move |_| set_screen.set(Screen::Home)>
                    "\u{2190} Back to home"
                </button>
                <h1>"Your Contributions"</h1>
            </div>

            {move || {
                if contributions.get().is_empty() {
                    view! {
                        <div class="card empty-state">
                            <p>"You haven't submitted any farming data yet."</p>
                            <button
                                class="btn btn-primary"
                                on:click=move |_| set_screen.set(Screen::DataEntry)
                            >
                                "Add Your First Data"
                            </button>
                        </div>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="card filter-bar">
                            <div class="filter-inputs">
                                <div class="filter-field">
                                    <label>"Start Date"</label>
                                    <input
                                        type="date"
                                        prop:value=move || range.get().start
                                        on:input=move |ev| {
                                            let value = event_target_value(&ev);
                                            set_range.update(|r| r.start = value);
                                        }
                                    />
                                </div>
                                <div class="filter-field">
                                    <label>"End Date"</label>
                                    <input
                                        type="date"
                                        prop:value=move || range.get().end
                                        on:input=move |ev| {
                                            let value = event_target_value(&ev);
                                            set_range.update(|r| r.end = value);
                                        }
                                    />
                                </div>
                                <Show when=move || range.get().is_active()>
                                    <button
                                        class="btn btn-secondary"
                                        on:click=move |_| set_range.set(DateRange::default())
                                    >
                                        "Clear"
                                    </button>
                                </Show>
                            </div>
                            <div class="filter-count">
                                {move || {
                                    format!(
                                        "Showing {} of {} contributions",
                                        filtered().len(),
                                        contributions.get().len(),
                                    )
                                }}
                            </div>
                        </div>

                        <div class="contributions-grid">
                            {move || {
                                filtered()
                                    .into_iter()
                                    .map(|record| {
                                        let id = record.id;
                                        if editing.get() == Some(id) {
                                            view! {
                                                <ContributionEditor
                                                    record=record
                                                    on_save=move |draft: ContributionDraft| {
                                                        on_update.run((id, draft));
                                                        set_editing.set(None);
                                                    }
                                                    on_cancel=move |_| set_editing.set(None)
                                                />
                                            }
                                            .into_any()
                                        } else {
                                            view! {
                                                <ContributionCard
                                                    record=record
                                                    on_edit=move |_| set_editing.set(Some(id))
                                                    on_delete=move |_| on_delete.run(id)
                                                />
                                            }
                                            .into_any()
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
