//! About Page

use ctrlz_core::brand;
use leptos::prelude::*;

/// Seconds between timeline entries fading in
const STAGGER_SECS: f32 = 0.1;

fn entry_style(index: usize) -> String {
    #[allow(clippy::cast_precision_loss)]
    let delay = index as f32 * STAGGER_SECS;
    format!("animation-delay:{delay:.1}s")
}

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <main class="page about">
            <div class="container narrow">
                <h2>{brand::ABOUT_HEADING}</h2>
                <p class="blurb">{brand::ABOUT_BLURB}</p>
                <div id="story" class="timeline">
                    {brand::TIMELINE
                        .into_iter()
                        .enumerate()
                        .map(|(i, entry)| view! {
                            <div class="timeline-entry slide-in" style=entry_style(i)>
                                <p>{entry}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_are_staggered() {
        assert_eq!(entry_style(0), "animation-delay:0.0s");
        assert_eq!(entry_style(3), "animation-delay:0.3s");
    }
}
