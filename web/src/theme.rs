use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub const ATTR_NAME: &'static str = "data-theme";

    const DARK_QUERY: &'static str = "(prefers-color-scheme: dark)";

    pub(crate) const fn scheme(self) -> &'static str {
        use Theme::*;
        match self {
            Light => "light",
            Dark => "dark",
        }
    }

    pub(crate) const fn toggled(self) -> Self {
        use Theme::*;
        match self {
            Light => Dark,
            Dark => Light,
        }
    }

    /// The system color scheme, light when it can't be queried.
    pub(crate) fn preferred() -> Self {
        let prefers_dark = gloo::utils::window()
            .match_media(Self::DARK_QUERY)
            .ok()
            .flatten()
            .is_some_and(|query| query.matches());
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    pub(crate) fn apply(self) {
        let Some(html) = gloo::utils::document().document_element() else {
            log::error!("failed to set theme: no document element");
            return;
        };
        let scheme = self.scheme();
        log::debug!("theme-scheme: {}", scheme);
        if let Err(err) = html.set_attribute(Self::ATTR_NAME, scheme) {
            log::error!("failed to set theme: {:?}", err);
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::Light
    }
}
