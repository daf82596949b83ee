/*
 *   Copyright (c) 2024 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

use crossterm::style::{Attribute, Color, SetAttribute};

/// Color and attributes for one painted element.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Style {
    pub fg_color: Color,
    pub bg_color: Color,
    pub bold: bool,
    pub dim: bool,
    pub underline: bool,
    pub reverse: bool,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fg_color: Color::Reset,
            bg_color: Color::Reset,
            bold: false,
            dim: false,
            underline: false,
            reverse: false,
        }
    }
}

/// Styles for every element of the dialog window. Override via
/// [`ChoicesDialog::set_style_sheet`](crate::ChoicesDialog::set_style_sheet).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StyleSheet {
    pub border_style: Style,
    pub title_style: Style,
    pub message_style: Style,
    /// Unfocused choice buttons.
    pub normal_style: Style,
    /// The choice button holding keyboard focus.
    pub focused_style: Style,
    /// The focused button's tooltip, shown in the footer.
    pub tooltip_style: Style,
}

impl Default for StyleSheet {
    fn default() -> Self {
        let border_style = Style {
            fg_color: Color::Rgb {
                r: 94,
                g: 103,
                b: 111,
            },
            ..Style::default()
        };
        let title_style = Style {
            fg_color: Color::Rgb {
                r: 171,
                g: 204,
                b: 242,
            },
            bold: true,
            ..Style::default()
        };
        let message_style = Style::default();
        let normal_style = Style {
            fg_color: Color::Rgb {
                r: 200,
                g: 200,
                b: 200,
            },
            ..Style::default()
        };
        let focused_style = Style {
            fg_color: Color::Rgb {
                r: 250,
                g: 250,
                b: 250,
            },
            bg_color: Color::Rgb {
                r: 39,
                g: 45,
                b: 239,
            },
            bold: true,
            ..Style::default()
        };
        let tooltip_style = Style {
            dim: true,
            ..Style::default()
        };
        StyleSheet {
            border_style,
            title_style,
            message_style,
            normal_style,
            focused_style,
            tooltip_style,
        }
    }
}

/// Turns one field of a [`Style`] into a crossterm command, for use inside
/// `queue!` / `execute!` blocks.
#[macro_export]
macro_rules! apply_style {
    ($style: expr => fg_color) => {
        ::crossterm::style::SetForegroundColor($style.fg_color)
    };
    ($style: expr => bg_color) => {
        ::crossterm::style::SetBackgroundColor($style.bg_color)
    };
    ($style: expr => bold) => {
        $crate::components::style::set_attribute(
            $style.bold,
            ::crossterm::style::Attribute::Bold,
            ::crossterm::style::Attribute::NormalIntensity,
        )
    };
    ($style: expr => dim) => {
        $crate::components::style::set_attribute(
            $style.dim,
            ::crossterm::style::Attribute::Dim,
            ::crossterm::style::Attribute::NormalIntensity,
        )
    };
    ($style: expr => underline) => {
        $crate::components::style::set_attribute(
            $style.underline,
            ::crossterm::style::Attribute::Underlined,
            ::crossterm::style::Attribute::NoUnderline,
        )
    };
    ($style: expr => reverse) => {
        $crate::components::style::set_attribute(
            $style.reverse,
            ::crossterm::style::Attribute::Reverse,
            ::crossterm::style::Attribute::NoReverse,
        )
    };
}

pub fn set_attribute(
    enable: bool,
    enable_attribute: Attribute,
    disable_attribute: Attribute,
) -> SetAttribute {
    match enable {
        true => SetAttribute(enable_attribute),
        false => SetAttribute(disable_attribute),
    }
}
