//! Full-screen theme fill with an optional animated weather effect.

use ratatui::{buffer::Buffer, layout::Rect, style::Color, style::Style, widgets::Widget};
use roadcast_core::theme::{BackgroundEffect, Rgb, Theme};

pub(crate) fn to_color(rgb: Rgb) -> Color {
    let Rgb(red, green, blue) = rgb;
    Color::Rgb(red, green, blue)
}

pub(crate) struct Backdrop {
    theme: Theme,
    tick: u64,
    animate: bool,
}

impl Backdrop {
    pub(crate) fn new(theme: Theme, tick: u64, animate: bool) -> Self {
        Self {
            theme,
            tick,
            animate,
        }
    }
}

impl Widget for Backdrop {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(to_color(self.theme.background)));

        if !self.animate {
            return;
        }
        let Some(effect) = self.theme.effect else {
            return;
        };

        for row in area.top()..area.bottom() {
            for column in area.left()..area.right() {
                let Some((glyph, color)) = effect_glyph(effect, column, row, self.tick) else {
                    continue;
                };
                if let Some(cell) = buf.cell_mut((column, row)) {
                    cell.set_symbol(glyph).set_fg(color);
                }
            }
        }
    }
}

/// Glyph drawn at `(column, row)` on frame `tick`, if any.
pub(crate) fn effect_glyph(
    effect: BackgroundEffect,
    column: u16,
    row: u16,
    tick: u64,
) -> Option<(&'static str, Color)> {
    let col = u64::from(column);
    let line = u64::from(row);

    match effect {
        BackgroundEffect::SunRays => {
            // diagonal rays that pulse outwards
            (col + line * 2 + tick % 11).is_multiple_of(11).then_some(("*", Color::Yellow))
        }
        BackgroundEffect::DriftingClouds => {
            let drift = (col + tick / 3 % 26) % 26;
            (line % 6 == 1 && drift < 5).then_some(("~", Color::White))
        }
        BackgroundEffect::Rain => {
            // every third column carries a falling drop
            let fall = (line + col * 5 + 7 - tick % 7) % 7;
            (col.is_multiple_of(3) && fall == 0).then_some(("|", Color::LightCyan))
        }
        BackgroundEffect::WindStreaks => {
            let gust = (col + tick % 19 * 2) % 19;
            (line % 4 == 2 && gust < 3).then_some(("-", Color::White))
        }
    }
}
