//! Support Page

use leptos::prelude::*;

use crate::components::{GlitchCta, inert_submit};

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <main class="page contact">
            <div class="container split">
                <div>
                    <h2>"Z-BOT Support"</h2>
                    <p>"Ask anything. The bot usually replies in 0.7s in our dreams."</p>
                    <div class="panel">
                        <div class="muted">"Coming soon."</div>
                    </div>
                </div>
                <div>
                    <h3>"Email us"</h3>
                    <form class="form" on:submit=inert_submit>
                        <input type="email" placeholder="Your email" />
                        <textarea placeholder="Message" rows="5" />
                        <GlitchCta>"Send"</GlitchCta>
                    </form>
                </div>
            </div>
        </main>
    }
}
