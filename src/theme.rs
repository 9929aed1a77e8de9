pub const THEME_KEY: &str = "portfolio-theme";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn from_dark_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn toggle_label(self) -> String {
        let next = self.toggled().as_str();
        format!("Switch to {next} theme")
    }

    pub fn pressed(self) -> bool {
        self.is_dark()
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀",
        }
    }
}

/// Class lists for every themed element. Each is a pure function of the flag.
pub mod classes {
    fn pick(dark_mode: bool, dark: &'static str, light: &'static str) -> &'static str {
        if dark_mode {
            dark
        } else {
            light
        }
    }

    pub fn page_text(dark_mode: bool) -> &'static str {
        pick(dark_mode, "text-strong-dark", "text-strong-light")
    }

    pub fn glass_panel(dark_mode: bool) -> &'static str {
        pick(dark_mode, "glass glass--dark", "glass glass--light")
    }

    pub fn hero_heading(dark_mode: bool) -> &'static str {
        pick(dark_mode, "hero-heading text-white", "hero-heading text-accent")
    }

    pub fn body_text(dark_mode: bool) -> &'static str {
        pick(dark_mode, "text-soft-dark", "text-soft-light")
    }

    pub fn cta_button(dark_mode: bool) -> &'static str {
        pick(dark_mode, "cta cta--dark", "cta cta--light")
    }

    pub fn about_card(dark_mode: bool) -> &'static str {
        pick(
            dark_mode,
            "about-card glass--dark text-strong-dark",
            "about-card glass--light text-body-light",
        )
    }

    pub fn section_text(dark_mode: bool) -> &'static str {
        pick(dark_mode, "section text-white", "section text-black")
    }

    pub fn card_surface(dark_mode: bool) -> &'static str {
        pick(dark_mode, "project-card surface--dark", "project-card surface--light")
    }

    pub fn muted_text(dark_mode: bool) -> &'static str {
        pick(dark_mode, "text-soft-dark", "text-muted-light")
    }

    pub fn icon_link(dark_mode: bool) -> &'static str {
        pick(dark_mode, "icon-link icon-link--dark", "icon-link icon-link--light")
    }

    pub fn site_header(dark_mode: bool) -> &'static str {
        pick(dark_mode, "site-header site-header--dark", "site-header site-header--light")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type ClassFn = fn(bool) -> &'static str;

    const ALL: [ClassFn; 11] = [
        classes::page_text,
        classes::glass_panel,
        classes::hero_heading,
        classes::body_text,
        classes::cta_button,
        classes::about_card,
        classes::section_text,
        classes::card_surface,
        classes::muted_text,
        classes::icon_link,
        classes::site_header,
    ];

    #[test]
    fn every_themed_class_differs_between_flags() {
        for class_fn in ALL {
            assert_ne!(class_fn(true), class_fn(false));
        }
    }

    #[test]
    fn section_and_card_classes_name_their_palette() {
        assert_eq!(classes::section_text(true), "section text-white");
        assert_eq!(classes::section_text(false), "section text-black");
        assert!(classes::card_surface(true).ends_with("surface--dark"));
        assert!(classes::card_surface(false).ends_with("surface--light"));
        assert!(classes::site_header(false).ends_with("site-header--light"));
    }

    #[test]
    fn theme_round_trips_through_storage_value() {
        assert_eq!(Theme::from_str(Theme::Dark.as_str()), Some(Theme::Dark));
        assert_eq!(Theme::from_str(Theme::Light.as_str()), Some(Theme::Light));
        assert_eq!(Theme::from_str("sepia"), None);
    }

    #[test]
    fn toggle_flips_dark_flag() {
        assert!(Theme::Light.toggled().is_dark());
        assert!(!Theme::Dark.toggled().is_dark());
        assert_eq!(Theme::from_dark_mode(true), Theme::Dark);
        assert_eq!(Theme::Light.toggle_label(), "Switch to dark theme");
        assert!(Theme::Dark.pressed());
    }
}
