use serde::{Deserialize, Serialize};
use std::fmt;

/// Packed sRGB color used by the legend and the grid cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn from_hex(hex: u32) -> Self {
        Self(
            ((hex >> 16) & 0xff) as u8,
            ((hex >> 8) & 0xff) as u8,
            (hex & 0xff) as u8,
        )
    }

    pub fn to_color32(self) -> egui::Color32 {
        egui::Color32::from_rgb(self.0, self.1, self.2)
    }
}

/// Fallback for categories without a legend entry.
pub const NEUTRAL_GRAY: Rgb = Rgb::from_hex(0x9ca3af);

/// Closed set of element families shown by the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    AlkaliMetal,
    AlkalineEarthMetal,
    TransitionMetal,
    PostTransitionMetal,
    Metalloid,
    ReactiveNonmetal,
    Halogen,
    NobleGas,
    Lanthanide,
    Actinide,
    Unknown,
}

impl Category {
    pub const ALL: [Category; 11] = [
        Category::AlkaliMetal,
        Category::AlkalineEarthMetal,
        Category::TransitionMetal,
        Category::PostTransitionMetal,
        Category::Metalloid,
        Category::ReactiveNonmetal,
        Category::Halogen,
        Category::NobleGas,
        Category::Lanthanide,
        Category::Actinide,
        Category::Unknown,
    ];

    /// Legend order. `Unknown` has no filter button.
    pub const LEGEND: [Category; 10] = [
        Category::AlkaliMetal,
        Category::AlkalineEarthMetal,
        Category::TransitionMetal,
        Category::PostTransitionMetal,
        Category::Metalloid,
        Category::ReactiveNonmetal,
        Category::Halogen,
        Category::NobleGas,
        Category::Lanthanide,
        Category::Actinide,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::AlkaliMetal => "Alkali Metal",
            Category::AlkalineEarthMetal => "Alkaline Earth Metal",
            Category::TransitionMetal => "Transition Metal",
            Category::PostTransitionMetal => "Post-transition Metal",
            Category::Metalloid => "Metalloid",
            Category::ReactiveNonmetal => "Reactive Nonmetal",
            Category::Halogen => "Halogen",
            Category::NobleGas => "Noble Gas",
            Category::Lanthanide => "Lanthanide",
            Category::Actinide => "Actinide",
            Category::Unknown => "Unknown",
        }
    }

    /// Legend color for the category. Adding a variant forces a decision here.
    pub fn legend_color(self) -> Option<Rgb> {
        match self {
            Category::AlkaliMetal => Some(Rgb::from_hex(0xef4444)),
            Category::AlkalineEarthMetal => Some(Rgb::from_hex(0xf97316)),
            Category::TransitionMetal => Some(Rgb::from_hex(0xeab308)),
            Category::PostTransitionMetal => Some(Rgb::from_hex(0x10b981)),
            Category::Metalloid => Some(Rgb::from_hex(0x2dd4bf)),
            Category::ReactiveNonmetal => Some(Rgb::from_hex(0x3b82f6)),
            Category::Halogen => Some(Rgb::from_hex(0x8b5cf6)),
            Category::NobleGas => Some(Rgb::from_hex(0xd946ef)),
            Category::Lanthanide => Some(Rgb::from_hex(0xec4899)),
            Category::Actinide => Some(Rgb::from_hex(0xf43f5e)),
            Category::Unknown => None,
        }
    }

    pub fn display_color(self) -> Rgb {
        self.legend_color().unwrap_or(NEUTRAL_GRAY)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
