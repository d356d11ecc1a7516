// Palette used by inline styles; styles.css mirrors it as CSS variables.
pub const PRIMARY: &str = "#0A400C";
pub const ACCENT: &str = "#819067";
pub const MUTED: &str = "#B1AB86";
pub const BG: &str = "#FEFAE0";
pub const WHITE: &str = "#FFFFFF";

/// Preconnect origins and whether each needs `crossorigin` (font files do).
pub const FONT_PRECONNECT: [(&str, bool); 2] = [
    ("https://fonts.googleapis.com", false),
    ("https://fonts.gstatic.com", true),
];
pub const FONT_STYLESHEET: &str = "https://fonts.googleapis.com/css2?family=Playfair+Display:wght@600;700;800&family=Quicksand:wght@400;500;600;700&display=swap";

pub fn accent_button() -> String {
    format!("background-color:{ACCENT};color:{BG};")
}
