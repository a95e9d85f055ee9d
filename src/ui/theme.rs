use ratatui::style::Color;

/// Application theme palette used by rendering code.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Darkest background shade, used for text on highlighted rows.
    pub crust: Color,
    /// Subtle surface color for unfocused borders.
    pub surface1: Color,
    /// Surface color for secondary borders.
    pub surface2: Color,
    /// Muted titles and hints.
    pub overlay1: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Secondary text for descriptions.
    pub subtext0: Color,
    /// Accent for the search prompt and selected facet markers.
    pub sapphire: Color,
    /// Accent for focused pane borders.
    pub mauve: Color,
    /// Sale prices and positive states.
    pub green: Color,
    /// Loading notices.
    pub yellow: Color,
    /// Errors and struck list prices.
    pub red: Color,
    /// Highlighted row background.
    pub lavender: Color,
}

/// Catppuccin Mocha palette.
const MOCHA: Theme = Theme {
    base: Color::Rgb(0x1e, 0x1e, 0x2e),
    crust: Color::Rgb(0x11, 0x11, 0x1b),
    surface1: Color::Rgb(0x45, 0x47, 0x5a),
    surface2: Color::Rgb(0x58, 0x5b, 0x70),
    overlay1: Color::Rgb(0x7f, 0x84, 0x9c),
    text: Color::Rgb(0xcd, 0xd6, 0xf4),
    subtext0: Color::Rgb(0xa6, 0xad, 0xc8),
    sapphire: Color::Rgb(0x74, 0xc7, 0xec),
    mauve: Color::Rgb(0xcb, 0xa6, 0xf7),
    green: Color::Rgb(0xa6, 0xe3, 0xa1),
    yellow: Color::Rgb(0xf9, 0xe2, 0xaf),
    red: Color::Rgb(0xf3, 0x8b, 0xa8),
    lavender: Color::Rgb(0xb4, 0xbe, 0xfe),
};

/// Active palette.
#[must_use]
pub const fn theme() -> Theme {
    MOCHA
}
