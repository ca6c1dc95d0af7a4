//! Theme for Nexo Paciente
//!
//! A single light theme modelled on the Material defaults the patient app
//! ships with, plus the status display table used by appointment cards.
//!
//! # Usage
//!
//! ```rust
//! use app_ui::theme::{light_theme, status_display};
//! use app_core::AppointmentStatus;
//!
//! let theme = light_theme();
//! assert_eq!(theme.colors.primary, "#007AFF");
//! assert_eq!(status_display(AppointmentStatus::Pending).label, "PENDIENTE");
//! ```

use app_core::AppointmentStatus;
use serde::{Deserialize, Serialize};

// =============================================================================
// Color Types
// =============================================================================

/// A color represented as an RGB(A) hex string (e.g., "#FFFFFF" or "#FFFFFF80")
pub type Color = String;

/// Parse a hex color string to RGB components
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() < 6 {
        return None;
    }
    let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
    let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
    let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
    Some((r, g, b))
}

// =============================================================================
// Brand Colors
// =============================================================================

/// Brand and status colors
pub mod brand {
    /// Primary action blue
    pub const PRIMARY: &str = "#007AFF";

    /// Confirmed status green
    pub const SUCCESS: &str = "#4CAF50";

    /// Cancelled status red
    pub const DANGER: &str = "#FF0000";

    /// Neutral gray (secondary text, pending status)
    pub const GRAY: &str = "#888888";

    /// Muted gray for subtitles
    pub const GRAY_MUTED: &str = "#757575";

    /// Home screen background
    pub const BACKGROUND_GROUPED: &str = "#F2F2F7";

    /// Avatar background
    pub const AVATAR_BACKGROUND: &str = "#E0E7FF";

    /// Avatar initials
    pub const AVATAR_TEXT: &str = "#4368C9";

    /// Pure white
    pub const WHITE: &str = "#FFFFFF";

    /// Pure black
    pub const BLACK: &str = "#000000";
}

// =============================================================================
// Theme
// =============================================================================

/// Semantic colors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeColors {
    /// Screen background
    pub background: Color,
    /// Text on background
    pub on_background: Color,
    /// Card and bar surface
    pub surface: Color,
    /// Muted surface (top bars)
    pub surface_variant: Color,
    /// Text on muted surface
    pub on_surface_variant: Color,
    /// Primary action color
    pub primary: Color,
    /// Text on primary
    pub on_primary: Color,
    /// Secondary text
    pub text_secondary: Color,
    /// Subtitle text
    pub text_muted: Color,
    /// Unselected tab items
    pub tab_inactive: Color,
}

/// Complete theme definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Color scheme (always "light")
    pub color_scheme: String,
    /// Semantic colors
    pub colors: ThemeColors,
}

/// Create the light theme
pub fn light_theme() -> Theme {
    Theme {
        color_scheme: "light".to_string(),
        colors: ThemeColors {
            background: brand::WHITE.to_string(),
            on_background: "#1C1B1F".to_string(),
            surface: brand::WHITE.to_string(),
            surface_variant: "#E7E0EC".to_string(),
            on_surface_variant: "#49454F".to_string(),
            primary: brand::PRIMARY.to_string(),
            on_primary: brand::WHITE.to_string(),
            text_secondary: brand::GRAY.to_string(),
            text_muted: brand::GRAY_MUTED.to_string(),
            tab_inactive: brand::GRAY.to_string(),
        },
    }
}

impl Default for Theme {
    fn default() -> Self {
        light_theme()
    }
}

// =============================================================================
// Status Display
// =============================================================================

/// Display descriptor for an appointment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusDisplay {
    /// Uppercase label
    pub label: &'static str,
    /// Label color
    pub color: &'static str,
}

const STATUS_TABLE: [(AppointmentStatus, StatusDisplay); 3] = [
    (
        AppointmentStatus::Confirmed,
        StatusDisplay {
            label: "CONFIRMADA",
            color: brand::SUCCESS,
        },
    ),
    (
        AppointmentStatus::Pending,
        StatusDisplay {
            label: "PENDIENTE",
            color: brand::GRAY,
        },
    ),
    (
        AppointmentStatus::Cancelled,
        StatusDisplay {
            label: "CANCELADA",
            color: brand::DANGER,
        },
    ),
];

/// Resolve the label and color for a status
pub fn status_display(status: AppointmentStatus) -> StatusDisplay {
    STATUS_TABLE
        .iter()
        .find(|(s, _)| *s == status)
        .map(|(_, display)| *display)
        .unwrap_or(StatusDisplay {
            label: "",
            color: brand::GRAY,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#007AFF"), Some((0, 122, 255)));
        assert_eq!(parse_hex_color("4CAF50"), Some((76, 175, 80)));
        assert_eq!(parse_hex_color("#FFF"), None);
    }

    #[test]
    fn test_status_table_covers_every_status() {
        for status in AppointmentStatus::all() {
            let display = status_display(status);
            assert!(!display.label.is_empty());
            assert!(parse_hex_color(display.color).is_some());
        }
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(
            status_display(AppointmentStatus::Confirmed),
            StatusDisplay {
                label: "CONFIRMADA",
                color: "#4CAF50"
            }
        );
        assert_eq!(status_display(AppointmentStatus::Cancelled).color, "#FF0000");
    }

    #[test]
    fn test_theme_colors_are_valid_hex() {
        let theme = light_theme();
        for color in [
            &theme.colors.background,
            &theme.colors.primary,
            &theme.colors.text_muted,
            &theme.colors.surface_variant,
        ] {
            assert!(parse_hex_color(color).is_some(), "bad color {}", color);
        }
    }
}
