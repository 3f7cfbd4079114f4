//! Static light and dark colour tables, selected by the platform's theme
//! variant.

use eframe::egui::Color32;
use once_cell::sync::Lazy;

use crate::types::ThemeVariant;

/// Named colours consumed by rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub background: Color32,

    pub text: Color32,
    pub description: Color32,

    pub separator: Color32,

    pub sidebar: Color32,
    pub active_tab: Color32,
    pub sidebar_separator: Color32,

    pub highlight_background: Color32,
    pub highlight_1: Color32,
    pub highlight_2: Color32,

    pub list_item_separator: Color32,
    pub list_item_value: Color32,
    pub list_item_faint_value: Color32,

    pub table_even_background: Color32,
    pub table_body_text: Color32,

    pub dropdown_background: Color32,
    pub next_stage_bullet: Color32,
    pub spinner_bar: Color32,
    pub header_rectangle: Color32,
}

pub static THEME_LIGHT: Lazy<Theme> = Lazy::new(|| Theme {
    background: Color32::from_rgb(235, 235, 235),
    text: Color32::from_rgb(51, 51, 51),
    description: Color32::from_rgb(140, 140, 140),
    separator: Color32::from_rgb(45, 45, 45),
    sidebar: Color32::from_rgb(240, 240, 240),
    active_tab: Color32::from_rgb(49, 79, 235),
    sidebar_separator: Color32::from_rgb(208, 208, 208),
    highlight_background: Color32::from_rgb(252, 255, 248),
    highlight_1: Color32::from_rgb(13, 182, 213),
    highlight_2: Color32::from_rgb(80, 239, 217),
    list_item_separator: Color32::from_rgb(207, 207, 207),
    list_item_value: Color32::from_rgb(43, 81, 226),
    list_item_faint_value: Color32::from_rgb(181, 184, 191),
    table_even_background: Color32::from_rgb(240, 240, 240),
    table_body_text: Color32::from_rgb(131, 131, 131),
    dropdown_background: Color32::from_rgba_unmultiplied(0, 0, 0, 178),
    next_stage_bullet: Color32::from_rgb(165, 165, 165),
    spinner_bar: Color32::from_rgba_unmultiplied(131, 131, 131, 102),
    header_rectangle: Color32::from_rgb(127, 127, 127),
});

pub static THEME_DARK: Lazy<Theme> = Lazy::new(|| Theme {
    background: Color32::from_rgb(45, 45, 45),
    text: Color32::from_rgb(255, 255, 255),
    description: Color32::from_rgb(163, 163, 163),
    separator: Color32::from_rgb(255, 255, 255),
    sidebar: Color32::from_rgb(50, 50, 50),
    active_tab: Color32::from_rgb(0, 255, 204),
    sidebar_separator: Color32::from_rgb(81, 81, 81),
    highlight_background: Color32::from_rgb(31, 34, 39),
    highlight_1: Color32::from_rgb(25, 138, 198),
    highlight_2: Color32::from_rgb(137, 241, 242),
    list_item_separator: Color32::from_rgb(78, 78, 78),
    list_item_value: Color32::from_rgb(88, 195, 169),
    list_item_faint_value: Color32::from_rgb(93, 103, 105),
    table_even_background: Color32::from_rgb(57, 58, 60),
    table_body_text: Color32::from_rgb(155, 157, 156),
    dropdown_background: Color32::from_rgba_unmultiplied(0, 0, 0, 178),
    next_stage_bullet: Color32::from_rgb(165, 165, 165),
    spinner_bar: Color32::from_rgba_unmultiplied(131, 131, 131, 102),
    header_rectangle: Color32::from_rgb(160, 160, 160),
});

pub fn theme_for(variant: ThemeVariant) -> &'static Theme {
    match variant {
        ThemeVariant::Light => &THEME_LIGHT,
        ThemeVariant::Dark => &THEME_DARK,
    }
}
