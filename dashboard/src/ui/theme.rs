use ratatui::style::Color;

#[derive(Clone, Copy, Debug)]
pub struct ColorScheme {
    // Text
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_disabled: Color,

    // Borders
    pub border_focused: Color,
    pub border_normal: Color,

    // Table
    pub table_header: Color,
    pub row_selected_bg: Color,
    pub row_alt_bg: Color,

    // Forms
    pub input_active: Color,
    pub button: Color,

    // Accents
    pub accent: Color,
    pub accent_result: Color,

    // Misc
    pub help_separator: Color,
}

impl ColorScheme {
    pub fn dark() -> Self {
        Self {
            text_primary: Color::White,
            text_secondary: Color::Gray,
            text_disabled: Color::DarkGray,
            border_focused: Color::LightBlue,
            border_normal: Color::DarkGray,
            table_header: Color::Yellow,
            row_selected_bg: Color::DarkGray,
            row_alt_bg: Color::Rgb(30, 30, 40),
            input_active: Color::LightCyan,
            button: Color::Rgb(99, 102, 241),
            accent: Color::LightBlue,
            accent_result: Color::LightYellow,
            help_separator: Color::Rgb(60, 60, 60),
        }
    }

    pub fn light() -> Self {
        Self {
            text_primary: Color::Black,
            text_secondary: Color::DarkGray,
            text_disabled: Color::Gray,
            border_focused: Color::Blue,
            border_normal: Color::Gray,
            table_header: Color::Rgb(140, 100, 0),
            row_selected_bg: Color::Rgb(210, 220, 235),
            row_alt_bg: Color::Rgb(240, 240, 248),
            input_active: Color::Rgb(0, 90, 160),
            button: Color::Rgb(79, 70, 229),
            accent: Color::Blue,
            accent_result: Color::Rgb(160, 110, 0),
            help_separator: Color::Rgb(180, 180, 180),
        }
    }
}
