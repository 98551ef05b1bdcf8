//! Bundled preset catalog: ready-made backgrounds per theme and the
//! selectable color palette.
//!
//! The catalog is an append-only table. Saved cards refer to image presets
//! through their stable id (`ASSET:<id>`), never through the URL, so the
//! URL behind an id can change without touching saved designs.

use std::sync::LazyLock;

use indexmap::IndexMap;
use serde::Serialize;

use crate::descriptor::{FontFamily, MediaKind, Theme};

/* --------------------------------------------------------------------------
   Palette
   -------------------------------------------------------------------------- */

/// Colors offered by the editor's swatch picker.
pub const PRESET_COLORS: &[&str] = &[
    "#FFFFFF", "#F8F9FA", "#FFF9F3", "#F3F4F6", "#2a2828", "#1a1a1a", "#d4af37", "#C5B358",
    "#E6E6FA", "#FFB6C1", "#800020", "#000080",
];

/// Font families offered by the editor.
pub const PRESET_FONTS: &[FontFamily] = &FontFamily::ALL;

/* --------------------------------------------------------------------------
   Types
   -------------------------------------------------------------------------- */

/// A ready-made background.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Preset {
    pub id: String,
    pub name: String,
    pub url: String,
    pub media_kind: MediaKind,
}

/// Presets offered for one theme, keyed by id in display order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PresetCategory {
    pub theme: Theme,
    pub presets: IndexMap<String, Preset>,
}

/// The full catalog: one category per theme, in theme order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PresetCatalog {
    categories: Vec<PresetCategory>,
}

static BUILTIN: LazyLock<PresetCatalog> = LazyLock::new(build_builtin);

impl PresetCatalog {
    /// An empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalog bundled with the application.
    pub fn builtin() -> &'static PresetCatalog {
        &BUILTIN
    }

    /// Append a preset to a theme's category, creating the category on first use.
    ///
    /// An id already present in that category keeps its slot; the entry is
    /// replaced in place.
    pub fn with_preset(
        mut self,
        theme: Theme,
        id: &str,
        name: &str,
        url: &str,
        media_kind: MediaKind,
    ) -> Self {
        let preset = Preset {
            id: id.to_string(),
            name: name.to_string(),
            url: url.to_string(),
            media_kind,
        };
        match self.categories.iter_mut().find(|c| c.theme == theme) {
            Some(category) => {
                category.presets.insert(preset.id.clone(), preset);
            }
            None => {
                let mut presets = IndexMap::new();
                presets.insert(preset.id.clone(), preset);
                self.categories.push(PresetCategory { theme, presets });
            }
        }
        self
    }

    /// All categories in catalog order.
    pub fn categories(&self) -> &[PresetCategory] {
        &self.categories
    }

    /// Presets offered for `theme`, in display order.
    pub fn presets(&self, theme: Theme) -> Vec<&Preset> {
        self.categories
            .iter()
            .filter(|c| c.theme == theme)
            .flat_map(|c| c.presets.values())
            .collect()
    }

    /// Look a preset up by id. Categories are scanned in order; first match wins.
    pub fn find(&self, id: &str) -> Option<&Preset> {
        self.categories.iter().find_map(|c| c.presets.get(id))
    }

    /// Find the preset serving `url`, if any.
    pub fn find_by_url(&self, url: &str) -> Option<&Preset> {
        self.categories
            .iter()
            .flat_map(|c| c.presets.values())
            .find(|p| p.url == url)
    }

    /// Total number of presets across categories.
    pub fn len(&self) -> usize {
        self.categories.iter().map(|c| c.presets.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/* --------------------------------------------------------------------------
   Bundled table
   -------------------------------------------------------------------------- */

fn build_builtin() -> PresetCatalog {
    use MediaKind::{Image, Video};
    use Theme::*;

    PresetCatalog::new()
        .with_preset(
            Habesha,
            "habesha_luxury_1",
            "Luxe Traditional",
            "bundle://backgrounds/habesha_lux.png",
            Image,
        )
        .with_preset(
            Habesha,
            "h2",
            "Modern Habesha",
            "bundle://backgrounds/ethiopian_bg.png",
            Image,
        )
        .with_preset(
            Habesha,
            "h3",
            "Cultural Pattern",
            "https://images.unsplash.com/photo-1523438885200-e635ba2c371e?q=80&w=1000",
            Image,
        )
        .with_preset(
            Habesha,
            "h5",
            "Heritage Video",
            "https://assets.mixkit.co/videos/preview/mixkit-traditional-ethiopian-dance-41589-large.mp4",
            Video,
        )
        .with_preset(
            Habesha,
            "h4",
            "Ethiopian Sunset",
            "https://images.unsplash.com/photo-1489440543286-a69330151c0b?q=80&w=1000",
            Image,
        )
        .with_preset(Islamic, "i1", "Royal Red", "bundle://backgrounds/islamic_red.png", Image)
        .with_preset(Islamic, "i2", "Mosque Arch", "bundle://backgrounds/islamic_bg.png", Image)
        .with_preset(
            Islamic,
            "i3",
            "Arabic Ornament",
            "https://images.unsplash.com/photo-1564121211835-e88c852648ab?q=80&w=1000",
            Image,
        )
        .with_preset(
            Islamic,
            "i4",
            "Golden Pattern",
            "https://images.unsplash.com/photo-1528698889021-013bcd41a72d?q=80&w=1000",
            Image,
        )
        .with_preset(
            Islamic,
            "i5",
            "Night Sky Video",
            "https://assets.mixkit.co/videos/preview/mixkit-stars-in-the-night-sky-121-large.mp4",
            Video,
        )
        .with_preset(Christian, "c1", "Cathedral", "bundle://backgrounds/christian_bg.png", Image)
        .with_preset(
            Christian,
            "c2",
            "Floral Altar",
            "bundle://backgrounds/christian_floral.png",
            Image,
        )
        .with_preset(
            Christian,
            "c3",
            "White Wedding",
            "https://images.unsplash.com/photo-1519741497674-611481863552?q=80&w=1000",
            Image,
        )
        .with_preset(
            Christian,
            "c4",
            "Dove Peace",
            "https://images.unsplash.com/photo-1510076857177-7470076d4098?q=80&w=1000",
            Image,
        )
        .with_preset(
            Christian,
            "c5",
            "Church Interior",
            "https://images.unsplash.com/photo-1438032005730-c779502df39b?q=80&w=1000",
            Image,
        )
        .with_preset(Modern, "m1", "Gold Luxury", "bundle://backgrounds/gold_bg.png", Image)
        .with_preset(
            Modern,
            "m2",
            "Minimalist Black",
            "https://images.unsplash.com/photo-1486406146926-c627a92ad1ab?q=80&w=1000",
            Image,
        )
        .with_preset(
            Modern,
            "m3",
            "Marble Texture",
            "https://images.unsplash.com/photo-1533154683836-84ea7a0bc310?q=80&w=1000",
            Image,
        )
        .with_preset(
            Modern,
            "m4",
            "Neon Party",
            "https://images.unsplash.com/photo-1492684223066-81342ee5ff30?q=80&w=1000",
            Image,
        )
        .with_preset(
            Modern,
            "m5",
            "Modern Abstract",
            "https://images.unsplash.com/photo-1541701494587-cb58502866ab?q=80&w=1000",
            Image,
        )
        .with_preset(Romantic, "r1", "Blush Pink", "bundle://backgrounds/romantic_bg.png", Image)
        .with_preset(
            Romantic,
            "r2",
            "Sunset Beach",
            "https://images.unsplash.com/photo-1507525428034-b723cf961d3e?q=80&w=1000",
            Image,
        )
        .with_preset(
            Romantic,
            "r3",
            "Rose Garden",
            "https://images.unsplash.com/photo-1496062031456-07b8f162a322?q=80&w=1000",
            Image,
        )
        .with_preset(
            Romantic,
            "r4",
            "Forest Love",
            "https://images.unsplash.com/photo-1441974231531-c6227db76b6e?q=80&w=1000",
            Image,
        )
        .with_preset(
            Romantic,
            "r5",
            "Romantic Dance",
            "https://assets.mixkit.co/videos/preview/mixkit-bride-and-groom-dancing-together-slowly-41584-large.mp4",
            Video,
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_five_presets_per_theme() {
        let catalog = PresetCatalog::builtin();
        for theme in Theme::ALL {
            assert_eq!(catalog.presets(theme).len(), 5, "theme {theme}");
        }
        assert_eq!(catalog.len(), 25);
    }

    #[test]
    fn presets_keep_insertion_order() {
        let ids: Vec<_> = PresetCatalog::builtin()
            .presets(Theme::Habesha)
            .into_iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, ["habesha_luxury_1", "h2", "h3", "h5", "h4"]);
    }

    #[test]
    fn find_scans_categories_in_order() {
        let catalog = PresetCatalog::new()
            .with_preset(Theme::Modern, "dup", "First", "https://a/1.jpg", MediaKind::Image)
            .with_preset(Theme::Romantic, "dup", "Second", "https://a/2.jpg", MediaKind::Image);
        assert_eq!(catalog.find("dup").unwrap().name, "First");
        assert!(catalog.find("missing").is_none());
    }

    #[test]
    fn find_by_url_matches_exact_url() {
        let catalog = PresetCatalog::builtin();
        let preset = catalog
            .find_by_url("bundle://backgrounds/gold_bg.png")
            .unwrap();
        assert_eq!(preset.id, "m1");
    }

    #[test]
    fn video_presets_carry_video_kind() {
        assert_eq!(
            PresetCatalog::builtin().find("r5").unwrap().media_kind,
            MediaKind::Video
        );
    }
}
