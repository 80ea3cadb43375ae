//! Light/dark theming.
//!
//! A theme resolves to a fixed set of [`StyleTokens`] that renderers read at
//! draw time. Switching theme means computing the other token set and
//! redrawing; chart configurations are never patched in place.

use common::UnknownVariant;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Resolves a persisted preference, keeping `fallback` when nothing valid was stored.
    pub fn from_stored(stored: Option<&str>, fallback: Theme) -> Theme {
        stored.and_then(|value| value.parse().ok()).unwrap_or(fallback)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(UnknownVariant::new("theme", s)),
        }
    }
}

/// Colours applied to chart axes, tooltips and legends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartTokens {
    pub grid_color: &'static str,
    pub text_color: &'static str,
    pub title_color: &'static str,
    pub tooltip_background: &'static str,
    pub tooltip_title_color: &'static str,
    pub tooltip_body_color: &'static str,
    pub tooltip_border_color: &'static str,
}

/// Classes and colours for the page chrome around the charts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageTokens {
    /// Value of the root `data-bs-theme` attribute.
    pub bs_theme: &'static str,
    pub body_class: &'static str,
    pub navbar_class: &'static str,
    pub card_class: &'static str,
    pub list_item_class: &'static str,
    pub progress_class: &'static str,
    pub footer_class: &'static str,
    pub toggle_label: &'static str,
    pub toggle_icon: &'static str,
    pub toggle_button_class: &'static str,
    pub about_background: &'static str,
    pub about_color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StyleTokens {
    pub theme: Theme,
    pub chart: ChartTokens,
    pub page: PageTokens,
}

const LIGHT: StyleTokens = StyleTokens {
    theme: Theme::Light,
    chart: ChartTokens {
        grid_color: "rgba(0, 0, 0, 0.1)",
        text_color: "rgba(0, 0, 0, 0.7)",
        title_color: "rgba(0, 0, 0, 0.9)",
        tooltip_background: "rgba(255, 255, 255, 0.8)",
        tooltip_title_color: "black",
        tooltip_body_color: "black",
        tooltip_border_color: "rgba(0, 0, 0, 0.2)",
    },
    page: PageTokens {
        bs_theme: "light",
        body_class: "theme-light",
        navbar_class: "navbar-light bg-light",
        card_class: "bg-light text-dark",
        list_item_class: "",
        progress_class: "",
        footer_class: "bg-light text-dark",
        // The toggle offers the opposite theme.
        toggle_label: "Dark Mode",
        toggle_icon: "fas fa-moon",
        toggle_button_class: "btn-outline-dark",
        about_background: "#f8f9fa",
        about_color: "rgba(0, 0, 0, 0.9)",
    },
};

const DARK: StyleTokens = StyleTokens {
    theme: Theme::Dark,
    chart: ChartTokens {
        grid_color: "rgba(255, 255, 255, 0.1)",
        text_color: "rgba(255, 255, 255, 0.7)",
        title_color: "rgba(255, 255, 255, 0.9)",
        tooltip_background: "rgba(0, 0, 0, 0.8)",
        tooltip_title_color: "white",
        tooltip_body_color: "white",
        tooltip_border_color: "rgba(255, 255, 255, 0.2)",
    },
    page: PageTokens {
        bs_theme: "dark",
        body_class: "theme-dark",
        navbar_class: "navbar-dark bg-dark",
        card_class: "bg-dark text-white",
        list_item_class: "bg-dark text-white border-secondary",
        progress_class: "bg-dark",
        footer_class: "bg-dark text-light",
        toggle_label: "Light Mode",
        toggle_icon: "fas fa-sun",
        toggle_button_class: "btn-outline-light",
        about_background: "#2c3039",
        about_color: "rgba(255, 255, 255, 0.9)",
    },
};

/// Style tokens for `theme`.
pub fn compute_theme_style(theme: Theme) -> StyleTokens {
    match theme {
        Theme::Light => LIGHT,
        Theme::Dark => DARK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_an_involution() {
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
        assert_eq!(Theme::Dark.toggle().toggle(), Theme::Dark);
    }

    #[test]
    fn test_from_stored_preference() {
        assert_eq!(Theme::from_stored(Some("dark"), Theme::Light), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("purple"), Theme::Light), Theme::Light);
        assert_eq!(Theme::from_stored(None, Theme::Dark), Theme::Dark);
    }

    #[test]
    fn test_dark_tokens() {
        let style = compute_theme_style(Theme::Dark);
        assert_eq!(style.theme, Theme::Dark);
        assert_eq!(style.chart.grid_color, "rgba(255, 255, 255, 0.1)");
        assert_eq!(style.chart.tooltip_title_color, "white");
        assert_eq!(style.page.toggle_label, "Light Mode");
        assert_eq!(style.page.navbar_class, "navbar-dark bg-dark");
    }

    #[test]
    fn test_light_tokens() {
        let style = compute_theme_style(Theme::Light);
        assert_eq!(style.chart.text_color, "rgba(0, 0, 0, 0.7)");
        assert_eq!(style.chart.tooltip_background, "rgba(255, 255, 255, 0.8)");
        assert_eq!(style.page.toggle_icon, "fas fa-moon");
        assert!(style.page.list_item_class.is_empty());
    }

    #[test]
    fn test_tokens_follow_theme() {
        for theme in [Theme::Light, Theme::Dark] {
            let style = compute_theme_style(theme);
            assert_eq!(style.page.bs_theme, theme.as_str());
            assert_ne!(style.chart, compute_theme_style(theme.toggle()).chart);
        }
    }
}
