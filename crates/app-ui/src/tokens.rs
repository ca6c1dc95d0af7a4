//! Design tokens for Nexo Paciente
//!
//! Spacing, radius, elevation and sizing values used by the screens.

// =============================================================================
// Spacing Tokens
// =============================================================================

/// Spacing scale in density-independent pixels
pub mod spacing {
    /// 4dp - Extra small
    pub const SPACE_XS: f32 = 4.0;
    /// 8dp - Small
    pub const SPACE_SM: f32 = 8.0;
    /// 12dp - Medium
    pub const SPACE_MD: f32 = 12.0;
    /// 16dp - Large
    pub const SPACE_LG: f32 = 16.0;
    /// 24dp - Extra large
    pub const SPACE_XL: f32 = 24.0;
    /// 32dp - 2x large
    pub const SPACE_2XL: f32 = 32.0;

    /// Get spacing value by name
    pub fn get(name: &str) -> Option<f32> {
        match name {
            "xs" => Some(SPACE_XS),
            "sm" => Some(SPACE_SM),
            "md" => Some(SPACE_MD),
            "lg" => Some(SPACE_LG),
            "xl" => Some(SPACE_XL),
            "2xl" => Some(SPACE_2XL),
            _ => None,
        }
    }
}

// =============================================================================
// Radius Tokens
// =============================================================================

/// Corner radius values
pub mod radius {
    /// Buttons
    pub const BUTTON: f32 = 8.0;
    /// Notification cards
    pub const CARD: f32 = 12.0;
    /// Large cards (queue, quick actions)
    pub const CARD_LG: f32 = 16.0;
    /// Fully rounded
    pub const FULL: f32 = 9999.0;
}

// =============================================================================
// Elevation Tokens
// =============================================================================

/// Card elevation values
pub mod elevation {
    /// Resting card
    pub const LOW: f32 = 2.0;
    /// Notification card
    pub const MEDIUM: f32 = 3.0;
    /// Highlighted card
    pub const HIGH: f32 = 4.0;
}

// =============================================================================
// Sizing Tokens
// =============================================================================

/// Component dimensions
pub mod sizing {
    /// Primary button height
    pub const BUTTON_HEIGHT: f32 = 50.0;
    /// Avatar diameter on the home screen
    pub const AVATAR: f32 = 48.0;
    /// Label column width in appointment info rows
    pub const INFO_LABEL_WIDTH: f32 = 90.0;

    /// Icon sizes
    pub mod icon {
        /// Small icon (18dp), used inside buttons
        pub const SM: f32 = 18.0;
        /// Medium icon (24dp)
        pub const MD: f32 = 24.0;
    }
}
