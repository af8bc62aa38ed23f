//! Shared result-display widgets: stat tiles, health banner, progress bar.

use leptos::prelude::*;

use crate::models::HealthTier;

stylance::import_crate_style!(css, "src/components/calculators/results.module.css");

fn tier_class(tier: HealthTier) -> &'static str {
    match tier {
        HealthTier::Excellent => css::bannerExcellent,
        HealthTier::Good => css::bannerGood,
        HealthTier::Fair => css::bannerFair,
        HealthTier::Attention => css::bannerAttention,
    }
}

/// A single labeled statistic tile.
#[component]
pub fn Stat(
    label: &'static str,
    value: String,
    #[prop(optional)] highlight: bool,
) -> impl IntoView {
    let class = if highlight {
        format!("{} {}", css::stat, css::statHighlight)
    } else {
        css::stat.to_string()
    };
    view! {
        <div class=class>
            <span class=css::statLabel>{label}</span>
            <span class=css::statValue>{value}</span>
        </div>
    }
}

/// Grid container for [`Stat`] tiles.
#[component]
pub fn StatGrid(children: Children) -> impl IntoView {
    view! { <div class=css::statGrid>{children()}</div> }
}

/// Colored banner summarizing a health tier.
#[component]
pub fn HealthBanner(tier: HealthTier, message: &'static str) -> impl IntoView {
    view! {
        <div class=format!("{} {}", css::banner, tier_class(tier))>
            {message}
        </div>
    }
}

/// Horizontal progress bar, clamped to 0-100%.
#[component]
pub fn ProgressBar(label: &'static str, pct: f64) -> impl IntoView {
    let width = pct.clamp(0.0, 100.0);
    view! {
        <div class=css::progress>
            <div class=css::progressHeader>
                <span>{label}</span>
                <span>{format!("{width:.1}%")}</span>
            </div>
            <div class=css::progressTrack>
                <div class=css::progressFill style=format!("width: {width}%") />
            </div>
        </div>
    }
}
