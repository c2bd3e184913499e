use leptos::prelude::*;

use crate::app::Screen;

#[component]
pub fn Navbar(screen: ReadSignal<Screen>, set_screen: WriteSignal<Screen>) -> impl IntoView {
    let (show_dropdown, set_show_dropdown) = signal(false);

    view! {
        <nav class="navbar">
            <div class="navbar-inner">
                <div class="brand" on:click=move |_| set_screen.set(Screen::Home)>
                    <span class="brand-accent">"Agri"</span>
                    <span>"Yield"</span>
                </div>
                <div class="navbar-actions">
                    <button
                        class=move || {
                            if screen.get() == Screen::DataEntry {
                                "nav-btn nav-btn-active"
                            } else {
                                "nav-btn"
                            }
                        }
                        title="Add farming data"
                        on:click=move |_| set_screen.set(Screen::DataEntry)
                    >
                        "+"
                    </button>
                    <div class="dropdown">
                        <button
                            class="nav-btn"
                            on:click=move |_| set_show_dropdown.update(|open| *open = !*open)
                        >
                            "Account \u{25be}"
                        </button>
                        <Show when=move || show_dropdown.get()>
                            <div class="dropdown-menu">
                                <button
                                    class="dropdown-item"
                                    on:click=move |_| {
                                        set_screen.set(Screen::Contributions);
                                        set_show_dropdown.set(false);
                                    }
                                >
                                    "See all contributions"
                                </button>
                                <button class="dropdown-item">"Profile settings"</button>
                                <button class="dropdown-item">"Sign out"</button>
                            </div>
                        </Show>
                    </div>
                </div>
            </div>
        </nav>
    }
}
