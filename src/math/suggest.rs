//! Greedy search for nearby colors that reach a target contrast ratio.
//!
//! R, G and B move together in steps of 5 and the red channel alone decides
//! when the search has hit the boundary. Outputs match the web checker's
//! suggestions bit for bit.

use log::debug;

use crate::types::{Adjustment, ColorSuggestions, Rgb, SuggestionOption};

use super::wcag::contrast_ratio;

/// Default target: AA for normal text.
pub const DEFAULT_TARGET_RATIO: f64 = 4.5;

const STEP: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Lighten,
    Darken,
}

impl Direction {
    fn step(self, rgb: Rgb) -> Rgb {
        let shift = |c: u8| match self {
            Direction::Lighten => c.saturating_add(STEP),
            Direction::Darken => c.saturating_sub(STEP),
        };
        Rgb::new(shift(rgb.r), shift(rgb.g), shift(rgb.b))
    }

    fn at_boundary(self, rgb: Rgb) -> bool {
        match self {
            Direction::Lighten => rgb.r == u8::MAX,
            Direction::Darken => rgb.r == 0,
        }
    }
}

/// Walk `moving` in `direction` until `ratio_of(moving)` reaches `target` or
/// the red channel saturates.
fn search(moving: Rgb, direction: Direction, target: f64, ratio_of: impl Fn(Rgb) -> f64) -> Rgb {
    let mut current = moving;
    let mut steps = 0u32;
    while ratio_of(current) < target && !direction.at_boundary(current) {
        current = direction.step(current);
        steps += 1;
    }
    debug!(
        "{:?} {} -> {} after {} steps (ratio {:.2}, target {})",
        direction,
        moving.to_hex(),
        current.to_hex(),
        steps,
        ratio_of(current),
        target
    );
    current
}

/// Run the four adjustment searches (lighter/darker foreground, lighter/darker
/// background). A returned color may still miss `target_ratio` when its search
/// ran into the boundary first.
pub fn suggest_color_adjustment(fg: Rgb, bg: Rgb, target_ratio: f64) -> ColorSuggestions {
    let lighter_fg = search(fg, Direction::Lighten, target_ratio, |c| contrast_ratio(c, bg));
    let darker_fg = search(fg, Direction::Darken, target_ratio, |c| contrast_ratio(c, bg));
    let lighter_bg = search(bg, Direction::Lighten, target_ratio, |c| contrast_ratio(fg, c));
    let darker_bg = search(bg, Direction::Darken, target_ratio, |c| contrast_ratio(fg, c));

    ColorSuggestions {
        lighter_fg: lighter_fg.to_hex(),
        darker_fg: darker_fg.to_hex(),
        lighter_bg: lighter_bg.to_hex(),
        darker_bg: darker_bg.to_hex(),
    }
}

/// The four suggestions as applicable pairs, ordered darken text, lighten text,
/// darken background, lighten background.
pub fn suggestion_options(fg: Rgb, bg: Rgb, target_ratio: f64) -> Vec<SuggestionOption> {
    let current = contrast_ratio(fg, bg);
    let s = suggest_color_adjustment(fg, bg, target_ratio);
    let (fg_hex, bg_hex) = (fg.to_hex(), bg.to_hex());

    [
        (Adjustment::DarkenText, s.darker_fg, bg_hex.clone()),
        (Adjustment::LightenText, s.lighter_fg, bg_hex),
        (Adjustment::DarkenBackground, fg_hex.clone(), s.darker_bg),
        (Adjustment::LightenBackground, fg_hex, s.lighter_bg),
    ]
    .into_iter()
    .filter_map(|(adjustment, foreground, background)| {
        let new_fg = super::hex::hex_to_rgb(&foreground)?;
        let new_bg = super::hex::hex_to_rgb(&background)?;
        let ratio = contrast_ratio(new_fg, new_bg);
        Some(SuggestionOption {
            adjustment,
            foreground,
            background,
            ratio,
            improves: ratio > current,
        })
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::hex::hex_to_rgb;

    fn rgb(hex: &str) -> Rgb {
        hex_to_rgb(hex).unwrap()
    }

    #[test]
    fn adjacent_grays() {
        let s = suggest_color_adjustment(rgb("#777777"), rgb("#888888"), DEFAULT_TARGET_RATIO);
        assert_eq!(s.darker_fg, "#1D1D1D");
        assert_eq!(s.darker_bg, "#060606");
        // white cannot reach 4.5 against #888888
        assert_eq!(s.lighter_fg, "#FFFFFF");
        assert_eq!(s.lighter_bg, "#FFFFFF");
    }

    #[test]
    fn darker_fg_meets_target_or_hits_black() {
        let bg = rgb("#888888");
        let s = suggest_color_adjustment(rgb("#777777"), bg, 4.5);
        let darker = rgb(&s.darker_fg);
        assert!(contrast_ratio(darker, bg) >= 4.5 || darker.r == 0);
    }

    #[test]
    fn stops_at_first_passing_step() {
        let bg = rgb("#888888");
        let s = suggest_color_adjustment(rgb("#777777"), bg, 4.5);
        // one step back (#222222) must still fail
        assert!(contrast_ratio(rgb("#222222"), bg) < 4.5);
        assert!(contrast_ratio(rgb(&s.darker_fg), bg) >= 4.5);
    }

    #[test]
    fn passing_pair_is_returned_unchanged() {
        let s = suggest_color_adjustment(Rgb::BLACK, Rgb::WHITE, 4.5);
        assert_eq!(s.lighter_fg, "#000000");
        assert_eq!(s.darker_fg, "#000000");
        assert_eq!(s.lighter_bg, "#FFFFFF");
        assert_eq!(s.darker_bg, "#FFFFFF");
    }

    #[test]
    fn red_channel_decides_the_boundary() {
        // red is already 255, so lightening never starts
        let s = suggest_color_adjustment(rgb("#FF0000"), Rgb::WHITE, 4.5);
        assert_eq!(s.lighter_fg, "#FF0000");
        assert_eq!(s.darker_fg, "#EB0000");
    }

    #[test]
    fn channels_clamp_independently() {
        // blue saturates long before red
        let s = suggest_color_adjustment(rgb("#551A8B"), rgb("#D4F1F4"), 10.0);
        assert_eq!(s.lighter_fg, "#FFC4FF");
        assert_eq!(s.darker_fg, "#4B1081");
        assert_eq!(s.lighter_bg, "#DEFBFE");
    }

    #[test]
    fn boundary_result_may_still_fail() {
        let fg = rgb("#551A8B");
        let s = suggest_color_adjustment(fg, rgb("#D4F1F4"), 10.0);
        assert_eq!(s.darker_bg, "#001A1D");
        assert!(contrast_ratio(fg, rgb(&s.darker_bg)) < 10.0);
    }

    #[test]
    fn options_order_and_pairs() {
        let options = suggestion_options(rgb("#777777"), rgb("#888888"), 4.5);
        let adjustments: Vec<Adjustment> = options.iter().map(|o| o.adjustment).collect();
        assert_eq!(
            adjustments,
            vec![
                Adjustment::DarkenText,
                Adjustment::LightenText,
                Adjustment::DarkenBackground,
                Adjustment::LightenBackground,
            ]
        );
        assert_eq!(options[0].foreground, "#1D1D1D");
        assert_eq!(options[0].background, "#888888");
        assert_eq!(options[2].foreground, "#777777");
        assert_eq!(options[2].background, "#060606");
    }

    #[test]
    fn options_flag_improvement() {
        let options = suggestion_options(rgb("#777777"), rgb("#888888"), 4.5);
        assert!(options.iter().all(|o| o.improves));

        // lightening pure red does nothing, so no improvement
        let options = suggestion_options(rgb("#FF0000"), Rgb::WHITE, 4.5);
        let lighten = options
            .iter()
            .find(|o| o.adjustment == Adjustment::LightenText)
            .unwrap();
        assert!(!lighten.improves);
        assert!((lighten.ratio - 3.998).abs() < 0.001);
    }
}
