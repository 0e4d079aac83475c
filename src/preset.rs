//! Named output formats and border scaling.

use core::fmt;
use core::str::FromStr;

use num_traits::Float;

use crate::geom::Size;

/// Size at which user-facing border widths are specified.
pub const REFERENCE_SIZE: Size = Size::new(1414, 464);

/// A named output format.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Preset {
    /// 1232×706.
    #[default]
    MainCapsule,
    /// 920×430.
    HeaderCapsule,
    /// 462×174.
    SmallCapsule,
    /// 1414×464.
    PackageHeader,
}

/// Preset lookup failure.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PresetError {
    #[error("unknown output preset")]
    Unknown,
}

impl Preset {
    /// Every preset.
    pub const ALL: [Preset; 4] = [
        Preset::MainCapsule,
        Preset::HeaderCapsule,
        Preset::SmallCapsule,
        Preset::PackageHeader,
    ];

    /// Output dimensions.
    pub const fn size(self) -> Size {
        match self {
            Preset::MainCapsule => Size::new(1232, 706),
            Preset::HeaderCapsule => Size::new(920, 430),
            Preset::SmallCapsule => Size::new(462, 174),
            Preset::PackageHeader => Size::new(1414, 464),
        }
    }

    /// Kebab-case name, as used in settings.
    pub const fn name(self) -> &'static str {
        match self {
            Preset::MainCapsule => "main-capsule",
            Preset::HeaderCapsule => "header-capsule",
            Preset::SmallCapsule => "small-capsule",
            Preset::PackageHeader => "package-header",
        }
    }

    /// Look up a preset by name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Result<Self, PresetError> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(name))
            .ok_or(PresetError::Unknown)
    }

    /// Scale a reference-size border width to this preset.
    pub fn scale_border_width(self, width: f64) -> f64 {
        scale_border_width(width, self.size())
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = PresetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

/// Scale a border width given at [`REFERENCE_SIZE`] to `frame`.
///
/// Scales by the square root of the area ratio and rounds to whole pixels.
pub fn scale_border_width(width: f64, frame: Size) -> f64 {
    let ratio = frame.area() as f64 / REFERENCE_SIZE.area() as f64;
    Float::round(width * Float::sqrt(ratio))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for p in Preset::ALL {
            assert_eq!(Preset::from_name(p.name()), Ok(p));
        }
        assert_eq!("Small-Capsule".parse::<Preset>(), Ok(Preset::SmallCapsule));
    }

    #[test]
    fn unknown_name() {
        assert_eq!(Preset::from_name("hero"), Err(PresetError::Unknown));
        assert_eq!(Preset::from_name(""), Err(PresetError::Unknown));
    }

    #[test]
    fn border_scaling() {
        assert_eq!(Preset::PackageHeader.scale_border_width(4.0), 4.0);
        // sqrt(1232*706 / (1414*464)) ≈ 1.151
        assert_eq!(Preset::MainCapsule.scale_border_width(4.0), 5.0);
        // sqrt(462*174 / (1414*464)) ≈ 0.348
        assert_eq!(Preset::SmallCapsule.scale_border_width(4.0), 1.0);
        assert_eq!(scale_border_width(0.0, Preset::HeaderCapsule.size()), 0.0);
    }
}
