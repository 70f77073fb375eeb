use ratatui::style::Color;

#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    pub name: &'static str,
    pub background: Color,
    pub border: Color,           // Unfocused pane border
    pub border_focused: Color,   // Focused pane border
    pub title: Color,            // Pane titles and toolbar
    pub text: Color,
    pub text_dim: Color,         // Placeholders, hints
    pub line_number: Color,      // Editor gutter
    pub error: Color,            // Editor error line, field errors
    pub divider: Color,
    pub divider_active: Color,   // Divider while being dragged
    pub status_bar: Color,
    pub key: Color,              // JSON key
    pub string: Color,           // JSON string value
    pub number: Color,           // JSON number value
    pub boolean: Color,          // JSON true/false/null
    pub bracket: Color,          // JSON braces and brackets
    pub form_header: Color,      // Background of the preview header block
    pub form_light_bg: Color,
    pub form_light_fg: Color,
    pub form_dark_bg: Color,
    pub form_dark_fg: Color,
    pub form_focus: Color,       // Focused control
    pub required_marker: Color,
}

impl ColorScheme {
    pub fn default() -> Self {
        Self {
            name: "Default",
            background: Color::Rgb(26, 28, 34),
            border: Color::DarkGray,
            border_focused: Color::Cyan,
            title: Color::Rgb(156, 220, 254),            // Light blue
            text: Color::Gray,
            text_dim: Color::DarkGray,
            line_number: Color::DarkGray,
            error: Color::Rgb(252, 165, 165),
            divider: Color::DarkGray,
            divider_active: Color::Gray,
            status_bar: Color::Cyan,
            key: Color::Rgb(156, 220, 254),              // Light blue
            string: Color::Rgb(206, 145, 120),           // Orange/peach
            number: Color::Rgb(181, 206, 168),           // Light green
            boolean: Color::Rgb(86, 156, 214),           // Purple/blue
            bracket: Color::Rgb(255, 217, 102),          // Yellow/gold
            form_header: Color::Rgb(0, 106, 78),         // Bottle green
            form_light_bg: Color::Rgb(243, 244, 246),
            form_light_fg: Color::Rgb(17, 24, 39),
            form_dark_bg: Color::Rgb(17, 24, 39),
            form_dark_fg: Color::Rgb(229, 231, 235),
            form_focus: Color::Yellow,
            required_marker: Color::Red,
        }
    }

    pub fn monokai() -> Self {
        Self {
            name: "Monokai",
            background: Color::Rgb(39, 40, 34),
            border: Color::Rgb(73, 72, 62),
            border_focused: Color::Rgb(102, 217, 239),   // Cyan
            title: Color::Rgb(102, 217, 239),
            text: Color::Rgb(248, 248, 242),
            text_dim: Color::Rgb(117, 113, 94),
            line_number: Color::Rgb(117, 113, 94),
            error: Color::Rgb(249, 38, 114),
            divider: Color::Rgb(73, 72, 62),
            divider_active: Color::Rgb(166, 226, 46),    // Green
            status_bar: Color::Rgb(166, 226, 46),
            key: Color::Rgb(102, 217, 239),
            string: Color::Rgb(230, 219, 116),           // Yellow
            number: Color::Rgb(174, 129, 255),           // Purple
            boolean: Color::Rgb(174, 129, 255),
            bracket: Color::Rgb(249, 38, 114),           // Pink
            form_header: Color::Rgb(73, 72, 62),
            form_light_bg: Color::Rgb(248, 248, 242),
            form_light_fg: Color::Rgb(39, 40, 34),
            form_dark_bg: Color::Rgb(39, 40, 34),
            form_dark_fg: Color::Rgb(248, 248, 242),
            form_focus: Color::Rgb(230, 219, 116),
            required_marker: Color::Rgb(249, 38, 114),
        }
    }

    pub fn solarized_dark() -> Self {
        Self {
            name: "Solarized",
            background: Color::Rgb(0, 43, 54),
            border: Color::Rgb(7, 54, 66),
            border_focused: Color::Rgb(42, 161, 152),    // Cyan
            title: Color::Rgb(38, 139, 210),             // Blue
            text: Color::Rgb(131, 148, 150),
            text_dim: Color::Rgb(88, 110, 117),
            line_number: Color::Rgb(88, 110, 117),
            error: Color::Rgb(220, 50, 47),
            divider: Color::Rgb(7, 54, 66),
            divider_active: Color::Rgb(42, 161, 152),
            status_bar: Color::Rgb(42, 161, 152),
            key: Color::Rgb(38, 139, 210),
            string: Color::Rgb(42, 161, 152),
            number: Color::Rgb(211, 54, 130),            // Magenta
            boolean: Color::Rgb(108, 113, 196),          // Violet
            bracket: Color::Rgb(203, 75, 22),            // Orange
            form_header: Color::Rgb(7, 54, 66),
            form_light_bg: Color::Rgb(253, 246, 227),    // Base3
            form_light_fg: Color::Rgb(101, 123, 131),
            form_dark_bg: Color::Rgb(0, 43, 54),
            form_dark_fg: Color::Rgb(147, 161, 161),
            form_focus: Color::Rgb(181, 137, 0),
            required_marker: Color::Rgb(220, 50, 47),
        }
    }

    pub fn nord() -> Self {
        Self {
            name: "Nord",
            background: Color::Rgb(46, 52, 64),
            border: Color::Rgb(59, 66, 82),
            border_focused: Color::Rgb(136, 192, 208),   // Frost cyan
            title: Color::Rgb(136, 192, 208),
            text: Color::Rgb(216, 222, 233),
            text_dim: Color::Rgb(76, 86, 106),
            line_number: Color::Rgb(76, 86, 106),
            error: Color::Rgb(191, 97, 106),
            divider: Color::Rgb(59, 66, 82),
            divider_active: Color::Rgb(163, 190, 140),   // Green
            status_bar: Color::Rgb(163, 190, 140),
            key: Color::Rgb(136, 192, 208),
            string: Color::Rgb(163, 190, 140),
            number: Color::Rgb(180, 142, 173),           // Purple
            boolean: Color::Rgb(129, 161, 193),          // Blue
            bracket: Color::Rgb(208, 135, 112),          // Orange
            form_header: Color::Rgb(94, 129, 172),
            form_light_bg: Color::Rgb(236, 239, 244),    // Snow Storm 3
            form_light_fg: Color::Rgb(46, 52, 64),
            form_dark_bg: Color::Rgb(46, 52, 64),
            form_dark_fg: Color::Rgb(229, 233, 240),
            form_focus: Color::Rgb(235, 203, 139),
            required_marker: Color::Rgb(191, 97, 106),
        }
    }

    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" => Some(Self::default()),
            "monokai" => Some(Self::monokai()),
            "solarized" | "solarized-dark" => Some(Self::solarized_dark()),
            "nord" => Some(Self::nord()),
            _ => None,
        }
    }
}
