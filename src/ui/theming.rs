// SPDX-License-Identifier: MPL-2.0
//! Theme mode selection and resolution against the OS preference.

use iced::Theme;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Resolve the mode to a concrete Iced theme. `System` consults the OS
    /// preference and falls back to light when detection fails.
    #[must_use]
    pub fn resolve(self) -> Theme {
        match self {
            ThemeMode::Light => Theme::Light,
            ThemeMode::Dark => Theme::Dark,
            ThemeMode::System => {
                if let Ok(dark_light::Mode::Dark) = dark_light::detect() {
                    Theme::Dark
                } else {
                    Theme::Light
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_modes_resolve_directly() {
        assert_eq!(ThemeMode::Light.resolve(), Theme::Light);
        assert_eq!(ThemeMode::Dark.resolve(), Theme::Dark);
    }

    #[test]
    fn mode_serializes_lowercase() {
        let toml = toml::to_string(&SerdeWrap {
            theme_mode: ThemeMode::System,
        })
        .unwrap();
        assert!(toml.contains("system"));
    }

    #[derive(serde::Serialize)]
    struct SerdeWrap {
        theme_mode: ThemeMode,
    }
}
