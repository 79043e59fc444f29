pub use druid::theme::*;
use druid::{Color, Env, FontDescriptor, FontFamily, FontWeight, Key};

use crate::data::AppState;

pub fn grid(m: f64) -> f64 {
    GRID * m
}

pub const GRID: f64 = 8.0;

pub const WHITE: Color = Color::WHITE;
pub const GREY_1: Color = Color::grey8(0x33);
pub const GREY_3: Color = Color::grey8(0x82);
pub const GREY_5: Color = Color::grey8(0xe0);
pub const GREY_6: Color = Color::grey8(0xf2);

pub const UI_FONT_MEDIUM: Key<FontDescriptor> = Key::new("app.ui-font-medium");
pub const TEXT_SIZE_SMALL: Key<f64> = Key::new("app.text-size-small");

pub fn setup(env: &mut Env, _state: &AppState) {
    env.set(WINDOW_BACKGROUND_COLOR, WHITE);
    env.set(TEXT_COLOR, GREY_1);
    env.set(PLACEHOLDER_COLOR, GREY_3);

    env.set(BACKGROUND_LIGHT, WHITE);
    env.set(BACKGROUND_DARK, GREY_6);

    env.set(BORDER_DARK, GREY_5);
    env.set(BORDER_LIGHT, GREY_6);

    env.set(
        UI_FONT_MEDIUM,
        FontDescriptor::new(FontFamily::SYSTEM_UI)
            .with_weight(FontWeight::MEDIUM)
            .with_size(15.0),
    );
    env.set(TEXT_SIZE_SMALL, 12.0);
}
