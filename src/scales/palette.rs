/// ColorBrewer RdYlBu with ten classes, red (hot) first
pub const RDYLBU_10: [&str; 10] = [
    "#a50026", "#d73027", "#f46d43", "#fdae61", "#fee090", "#e0f3f8", "#abd9e9", "#74add1",
    "#4575b4", "#313695",
];

/// Palette used for cell fill, ordered cold to hot
pub fn temperature_palette() -> Vec<&'static str> {
    RDYLBU_10.iter().rev().copied().collect()
}
