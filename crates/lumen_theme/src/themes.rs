//! Built-in palette literals, packed as `0xRRGGBBAA`

/// Light style palette
pub const LIGHT: &[(&str, u32)] = &[
    // Navigation bar
    ("navBgColor", 0xFF8C30FF),
    // Brand
    ("theme", 0xFF8C30FF),
    ("text", 0x333333FF),
    ("viewControllerBackground", 0xFFFFFFFF),
    ("background", 0xEEEEEEFF),
];

/// Dark style palette
pub const DARK: &[(&str, u32)] = &[
    // Navigation bar
    ("navBgColor", 0x000000FF),
    // Brand
    ("theme", 0x000000FF),
    ("text", 0xFFFFFFFF),
    ("viewControllerBackground", 0x000000FF),
    ("background", 0x1D1D1DFF),
];
