use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border_normal: Color,
    pub status_bg: Color,
    pub bar_default: Color,   // Unsorted bars
    pub bar_comparing: Color, // Positions under comparison
    pub bar_sorted: Color,    // Positions in their final place
    pub bar_selected: Color,  // Active write positions
    pub bar_pivot: Color,     // Partition pivot
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_normal: Color::Rgb(108, 112, 134), // Grey border
    status_bg: Color::Rgb(50, 50, 70),
    bar_default: Color::Rgb(137, 180, 250),   // Blue
    bar_comparing: Color::Rgb(249, 226, 175), // Yellow
    bar_sorted: Color::Rgb(166, 227, 161),    // Green
    bar_selected: Color::Rgb(243, 139, 168),  // Red/rose
    bar_pivot: Color::Rgb(203, 166, 247),     // Violet
};
