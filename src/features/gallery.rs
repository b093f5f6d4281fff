//! Mallorn theme gallery
//!
//! Mallorn ships four visual themes. The detail page shows one of them as the
//! hero screenshot and lets the user preview the others.

/// Mallorn desktop themes, each represented by one preview screenshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MallornTheme {
    #[default]
    Mallorn,
    Obsidian,
    Aurora,
    Paper,
}

impl MallornTheme {
    pub const ALL: [MallornTheme; 4] = [
        MallornTheme::Mallorn,
        MallornTheme::Obsidian,
        MallornTheme::Aurora,
        MallornTheme::Paper,
    ];

    /// Label shown under the thumbnail
    pub fn display_name(&self) -> &'static str {
        match self {
            MallornTheme::Mallorn => "Mallorn",
            MallornTheme::Obsidian => "Obsidian",
            MallornTheme::Aurora => "Aurora",
            MallornTheme::Paper => "Paper",
        }
    }

    /// Asset file name, relative to the assets directory
    pub fn asset(&self) -> &'static str {
        match self {
            MallornTheme::Mallorn => "theme-mallorn.png",
            MallornTheme::Obsidian => "theme-obsidian.png",
            MallornTheme::Aurora => "theme-aurora.png",
            MallornTheme::Paper => "theme-paper.png",
        }
    }
}

impl std::fmt::Display for MallornTheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Selected hero theme for the Mallorn page
#[derive(Debug, Clone, Default)]
pub struct ThemeGallery {
    selected: MallornTheme,
}

impl ThemeGallery {
    pub fn selected(&self) -> MallornTheme {
        self.selected
    }

    pub fn select(&mut self, theme: MallornTheme) {
        self.selected = theme;
    }

    /// Back to the default theme
    pub fn reset(&mut self) {
        self.selected = MallornTheme::default();
    }

    /// Whether the thumbnail for `theme` is marked active
    pub fn is_active(&self, theme: MallornTheme) -> bool {
        self.selected == theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_mallorn() {
        let gallery = ThemeGallery::default();
        assert_eq!(gallery.selected(), MallornTheme::Mallorn);
    }

    #[test]
    fn exactly_one_thumbnail_active() {
        let mut gallery = ThemeGallery::default();
        for theme in MallornTheme::ALL {
            gallery.select(theme);
            let active: Vec<_> = MallornTheme::ALL
                .into_iter()
                .filter(|t| gallery.is_active(*t))
                .collect();
            assert_eq!(active, vec![theme]);
        }
    }

    #[test]
    fn reset_restores_default() {
        let mut gallery = ThemeGallery::default();
        gallery.select(MallornTheme::Paper);
        gallery.reset();
        assert!(gallery.is_active(MallornTheme::Mallorn));
    }

    #[test]
    fn assets_are_distinct() {
        let mut assets: Vec<_> = MallornTheme::ALL.iter().map(|t| t.asset()).collect();
        assets.sort();
        assets.dedup();
        assert_eq!(assets.len(), 4);
    }
}
