//! Dot colors
//!
//! Color decides whether an overlap hurts, so it is a closed enumeration
//! rather than free-form RGB.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DotColor {
    SpringGreen,
    Violet,
    Chocolate,
    Maroon,
    Yellow,
    Red,
    Blue,
}

impl DotColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            DotColor::SpringGreen => "SpringGreen",
            DotColor::Violet => "Violet",
            DotColor::Chocolate => "Chocolate",
            DotColor::Maroon => "Maroon",
            DotColor::Yellow => "Yellow",
            DotColor::Red => "Red",
            DotColor::Blue => "Blue",
        }
    }

    /// Packed 0xRRGGBB for the view layer
    pub fn rgb(&self) -> u32 {
        match self {
            DotColor::SpringGreen => 0x00FA9A,
            DotColor::Violet => 0x9400D3,
            DotColor::Chocolate => 0xD2691E,
            DotColor::Maroon => 0x800000,
            DotColor::Yellow => 0xFFFF00,
            DotColor::Red => 0xFF0000,
            DotColor::Blue => 0x0000FF,
        }
    }
}

impl std::fmt::Display for DotColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
