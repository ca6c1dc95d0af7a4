//! Typography system for Nexo Paciente
//!
//! A reduced Material 3 type scale plus the few fixed sizes the screens use
//! directly (the large queue number, screen titles, button labels).

use serde::{Deserialize, Serialize};

// =============================================================================
// Font Weights
// =============================================================================

/// Font weight values
pub mod font_weight {
    /// Regular (400)
    pub const NORMAL: u16 = 400;
    /// Medium (500)
    pub const MEDIUM: u16 = 500;
    /// Semi-bold (600)
    pub const SEMI_BOLD: u16 = 600;
    /// Bold (700)
    pub const BOLD: u16 = 700;
}

// =============================================================================
// Typography Style
// =============================================================================

/// A typography style definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in sp
    pub font_size: f32,
    /// Font weight (400, 500, 600, 700)
    pub font_weight: u16,
    /// Line height in sp
    pub line_height: f32,
}

impl TextStyle {
    /// Create a new text style
    pub fn new(font_size: f32, font_weight: u16, line_height: f32) -> Self {
        Self {
            font_size,
            font_weight,
            line_height,
        }
    }

    /// Override the weight
    pub fn with_weight(mut self, weight: u16) -> Self {
        self.font_weight = weight;
        self
    }
}

// =============================================================================
// Typography Variants
// =============================================================================

/// Typography variant identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TypographyVariant {
    /// Queue number (64sp bold)
    Display,
    /// Login title (32sp)
    HeadlineLarge,
    /// Greeting, placeholder title (28sp)
    HeadlineMedium,
    /// Welcome title (24sp)
    HeadlineSmall,
    /// Top bar titles (20sp)
    TitleLarge,
    /// Primary button labels (18sp)
    ButtonLarge,
    /// Card titles (16sp medium)
    TitleMedium,
    /// Body text (16sp)
    #[default]
    BodyLarge,
    /// Secondary body text (14sp)
    BodyMedium,
    /// Captions (12sp)
    BodySmall,
    /// Tab labels (10sp)
    LabelSmall,
}

impl TypographyVariant {
    /// Resolve the style for this variant
    pub fn style(&self) -> TextStyle {
        match self {
            TypographyVariant::Display => TextStyle::new(64.0, font_weight::BOLD, 72.0),
            TypographyVariant::HeadlineLarge => TextStyle::new(32.0, font_weight::BOLD, 40.0),
            TypographyVariant::HeadlineMedium => TextStyle::new(28.0, font_weight::NORMAL, 36.0),
            TypographyVariant::HeadlineSmall => TextStyle::new(24.0, font_weight::BOLD, 32.0),
            TypographyVariant::TitleLarge => TextStyle::new(20.0, font_weight::NORMAL, 28.0),
            TypographyVariant::ButtonLarge => TextStyle::new(18.0, font_weight::MEDIUM, 24.0),
            TypographyVariant::TitleMedium => TextStyle::new(16.0, font_weight::MEDIUM, 24.0),
            TypographyVariant::BodyLarge => TextStyle::new(16.0, font_weight::NORMAL, 24.0),
            TypographyVariant::BodyMedium => TextStyle::new(14.0, font_weight::NORMAL, 20.0),
            TypographyVariant::BodySmall => TextStyle::new(12.0, font_weight::NORMAL, 16.0),
            TypographyVariant::LabelSmall => TextStyle::new(10.0, font_weight::MEDIUM, 16.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_is_monotonic() {
        let order = [
            TypographyVariant::Display,
            TypographyVariant::HeadlineLarge,
            TypographyVariant::HeadlineMedium,
            TypographyVariant::HeadlineSmall,
            TypographyVariant::TitleLarge,
            TypographyVariant::ButtonLarge,
            TypographyVariant::TitleMedium,
            TypographyVariant::BodyMedium,
            TypographyVariant::BodySmall,
            TypographyVariant::LabelSmall,
        ];
        for pair in order.windows(2) {
            assert!(pair[0].style().font_size >= pair[1].style().font_size);
        }
    }

    #[test]
    fn test_variant_serialization() {
        let json = serde_json::to_string(&TypographyVariant::TitleMedium).unwrap();
        assert_eq!(json, "\"title-medium\"");
    }
}
