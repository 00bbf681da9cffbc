//! Account Page

use ctrlz_core::AccountTab;
use leptos::prelude::*;

use crate::components::{GlitchCta, inert_submit};

#[component]
pub fn AccountPage() -> impl IntoView {
    let tab = RwSignal::new(AccountTab::default());

    view! {
        <main class="page account">
            <div class="container slim">
                <div class="tabs">
                    {AccountTab::ALL
                        .into_iter()
                        .map(|t| view! {
                            <button
                                class="tab"
                                class:active=move || tab.get() == t
                                on:click=move |_| tab.set(t)
                            >
                                {t.label()}
                            </button>
                        })
                        .collect_view()}
                </div>
                <form class="form" on:submit=inert_submit>
                    <input type="email" placeholder="Email" />
                    <input type="password" placeholder="Password" />
                    <GlitchCta>{move || tab.get().submit_label()}</GlitchCta>
                </form>
            </div>
        </main>
    }
}
