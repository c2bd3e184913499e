use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::models::{self, Contribution, ContributionDraft};
use crate::pages::contributions::ContributionsPage;
use crate::pages::data_entry::DataEntryPage;
use crate::pages::home::HomePage;

/// The three mutually exclusive top-level views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    DataEntry,
    Contributions,
}

#[component]
pub fn App() -> impl IntoView {
    let (screen, set_screen) = signal(Screen::Home);
    let (contributions, set_contributions) = signal(Vec::<Contribution>::new());

    // Ids come from the submission time in milliseconds. Two entries landing
    // in the same millisecond would collide; the generation scheme accepts
    // that and nothing validates it.
    let add_contribution = Callback::new(move |draft: ContributionDraft| {
        let id = js_sys::Date::now() as u64;
        set_contributions.update(|records| records.push(draft.into_record(id)));
    });

    let update_contribution = Callback::new(move |(id, draft): (u64, ContributionDraft)| {
        set_contributions.update(|records| models::update_record(records, id, &draft));
    });

    let delete_contribution = Callback::new(move |id: u64| {
        set_contributions.update(|records| models::delete_record(records, id));
    });

    view! {
        <div class="app-shell">
            <Navbar screen=screen set_screen=set_screen />
            <main class="content">
                {move || match screen.get() {
                    Screen::Home => view! { <HomePage /> }.into_any(),
                    Screen::DataEntry => view! {
                        <DataEntryPage on_add=add_contribution set_screen=set_screen />
                    }
                    .into_any(),
                    Screen::Contributions => view! {
                        <ContributionsPage
                            contributions=contributions
                            on_update=update_contribution
                            on_delete=delete_contribution
                            set_screen=set_screen
                        />
                    }
                    .into_any(),
                }}
            </main>
        </div>
    }
}
