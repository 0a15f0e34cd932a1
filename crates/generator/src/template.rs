use types::IconSize;

const SIZE_SLOT: &str = "{size}";

/// Bus on a rounded blue square. Drawn in a 100x100 viewBox; only the
/// declared canvas size changes between variants.
pub const SVG_TEMPLATE: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<svg width="{size}" height="{size}" viewBox="0 0 100 100" xmlns="http://www.w3.org/2000/svg">
    <!-- Blue background -->
    <rect width="100" height="100" fill="#2563eb" rx="20"/>

    <!-- Simplified bus (white) -->
    <g transform="translate(20, 25)">
        <!-- Body -->
        <rect x="0" y="10" width="60" height="40" rx="5" fill="white"/>

        <!-- Windscreen -->
        <rect x="45" y="15" width="12" height="15" rx="2" fill="#2563eb"/>

        <!-- Windows -->
        <rect x="5" y="15" width="12" height="12" rx="1" fill="#2563eb"/>
        <rect x="20" y="15" width="12" height="12" rx="1" fill="#2563eb"/>

        <!-- Wheels -->
        <circle cx="12" cy="52" r="5" fill="#1e40af"/>
        <circle cx="48" cy="52" r="5" fill="#1e40af"/>

        <!-- Headlight -->
        <circle cx="54" cy="25" r="2" fill="#fbbf24"/>

        <!-- Door -->
        <rect x="32" y="30" width="8" height="20" rx="1" fill="#2563eb"/>
    </g>
</svg>
"##;

pub fn render(size: IconSize) -> String {
    SVG_TEMPLATE.replace(SIZE_SLOT, &size.to_string())
}
