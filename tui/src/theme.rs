//! Color theme and glyphs for the Skillet TUI.
//!
//! A warm kitchen palette; ingredient tiles are tinted via the catalog's
//! color tokens.

use ratatui::style::Color;

/// Named palette constants.
mod colors {
    use super::Color;

    // === Backgrounds ===
    pub const BG_DARK: Color = Color::Rgb(24, 20, 18); // charred iron
    pub const BG_PANEL: Color = Color::Rgb(38, 32, 28); // cast iron
    pub const BG_HIGHLIGHT: Color = Color::Rgb(58, 46, 38); // warm shadow
    pub const BG_POPUP: Color = Color::Rgb(46, 38, 33);

    // === Foregrounds ===
    pub const TEXT_PRIMARY: Color = Color::Rgb(240, 228, 208); // flour white
    pub const TEXT_SECONDARY: Color = Color::Rgb(204, 186, 158); // parchment
    pub const TEXT_MUTED: Color = Color::Rgb(134, 120, 104); // smoke

    // === Accents ===
    pub const FLAME: Color = Color::Rgb(255, 146, 76); // ember orange
    pub const FLAME_HOT: Color = Color::Rgb(239, 68, 68); // high-heat red
    pub const HERB: Color = Color::Rgb(152, 187, 108); // fresh green
    pub const BUTTER: Color = Color::Rgb(230, 195, 132); // golden
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_dark: Color,
    pub bg_panel: Color,
    pub bg_highlight: Color,
    pub bg_popup: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub flame: Color,
    pub flame_hot: Color,
    pub herb: Color,
    pub butter: Color,
}

#[must_use]
pub fn palette() -> Palette {
    Palette {
        bg_dark: colors::BG_DARK,
        bg_panel: colors::BG_PANEL,
        bg_highlight: colors::BG_HIGHLIGHT,
        bg_popup: colors::BG_POPUP,
        text_primary: colors::TEXT_PRIMARY,
        text_secondary: colors::TEXT_SECONDARY,
        text_muted: colors::TEXT_MUTED,
        flame: colors::FLAME,
        flame_hot: colors::FLAME_HOT,
        herb: colors::HERB,
        butter: colors::BUTTER,
    }
}

/// Map a catalog color token to a tile tint. Unknown tokens fall back to the
/// panel background so a bad token degrades quietly.
#[must_use]
pub fn ingredient_color(token: &str) -> Color {
    match token {
        "red" => Color::Rgb(190, 74, 66),
        "scarlet" => Color::Rgb(212, 58, 58),
        "rose" => Color::Rgb(196, 102, 96),
        "pink" => Color::Rgb(214, 130, 148),
        "cream" => Color::Rgb(214, 200, 170),
        "yellow" => Color::Rgb(212, 176, 84),
        "gold" => Color::Rgb(222, 190, 96),
        "amber" => Color::Rgb(196, 142, 72),
        "orange" => Color::Rgb(214, 138, 74),
        "brown" => Color::Rgb(124, 82, 52),
        "green" => Color::Rgb(108, 158, 84),
        "gray" => Color::Rgb(140, 140, 132),
        _ => colors::BG_PANEL,
    }
}

const SPINNER_FRAMES: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

/// Animation frame for the judging spinner.
#[must_use]
pub fn spinner_frame(frame_count: usize) -> &'static str {
    SPINNER_FRAMES[frame_count % SPINNER_FRAMES.len()]
}

#[cfg(test)]
mod tests {
    use super::{ingredient_color, palette, spinner_frame};

    #[test]
    fn every_catalog_token_has_a_tint() {
        let panel_bg = palette().bg_panel;
        for ingredient in skillet_engine::ingredients() {
            assert_ne!(
                ingredient_color(&ingredient.color),
                panel_bg,
                "no tint for token '{}'",
                ingredient.color
            );
        }
    }

    #[test]
    fn spinner_wraps_around() {
        assert_eq!(spinner_frame(0), spinner_frame(8));
        assert_ne!(spinner_frame(0), spinner_frame(1));
    }
}
