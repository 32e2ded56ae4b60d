use copytrace_types::Tier;
use owo_colors::{OwoColorize, Style};
use std::fmt::Display;

pub fn tier_style(tier: Tier) -> Style {
    match tier {
        Tier::High => Style::new().green().bold(),
        Tier::Medium => Style::new().yellow(),
        Tier::Low => Style::new().blue(),
        Tier::Unknown => Style::new().dimmed(),
    }
}

/// Apply `style` only when color is enabled.
pub fn paint<T: Display>(value: T, style: Style, enable_color: bool) -> String {
    if enable_color {
        value.style(style).to_string()
    } else {
        value.to_string()
    }
}
