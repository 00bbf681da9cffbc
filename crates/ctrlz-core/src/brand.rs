//! Brand Copy
//!
//! Text and palette shared by every page.

pub const NAME: &str = "CTRL-Z";
pub const TAGLINE: &str = "Undo Limits. Define You.";

/// Palette as CSS hex colors
pub mod colors {
    pub const BG: &str = "#000000";
    pub const GRAY: &str = "#1A1A1A";
    pub const NEON: &str = "#00FFFF";
    pub const CRIMSON: &str = "#FF004C";
    pub const WHITE: &str = "#FFFFFF";
}

/// One lap of the hero marquee
pub const MARQUEE_TEXT: &str = "CTRL-Z // UNDO LIMITS // FUTURE MODE ON // ";

/// Laps rendered back to back so the loop has no gap
pub const MARQUEE_REPEAT: usize = 10;

/// Products shown under "Featured Drops" on the landing page
pub const FEATURED_COUNT: usize = 3;

pub const ABOUT_HEADING: &str = "Rebellion, Creative Freedom, Individuality";

pub const ABOUT_BLURB: &str = "CTRL-Z is a Gen Z streetwear lab. We explore the edges of tech and fashion\u{2014}minimal silhouettes with glitch DNA.";

/// Story timeline on the about page, oldest first
pub const TIMELINE: [&str; 4] = [
    "2019 \u{2014} Concept born in a dorm.",
    "2021 \u{2014} First drop sells out in 48h.",
    "2023 \u{2014} AR try-on beta.",
    "2025 \u{2014} Global collective.",
];

/// Footer line for a given year
pub fn copyright(year: i32) -> String {
    format!("\u{a9} {year} {NAME} \u{2014} Undo Limits.")
}

/// The marquee strip as rendered: `MARQUEE_TEXT` repeated
pub fn marquee_laps() -> impl Iterator<Item = &'static str> {
    std::iter::repeat_n(MARQUEE_TEXT, MARQUEE_REPEAT)
}
