//! Border and fill colors, with hex parsing for UI-supplied values.

/// 8-bit sRGB color with alpha.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl Color {
    /// White, fully opaque.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Black, fully opaque.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    /// Opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color with alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// `[r, g, b, a]`.
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Parse a hex color.
///
/// Accepts `RGB`, `RGBA`, `RRGGBB`, and `RRGGBBAA`, each with an optional
/// leading `#`. Surrounding whitespace is ignored.
pub fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();
    let hex = s.strip_prefix('#').unwrap_or(s).as_bytes();

    match hex.len() {
        3 | 4 => {
            let r = expand_nibble(hex[0])?;
            let g = expand_nibble(hex[1])?;
            let b = expand_nibble(hex[2])?;
            let a = match hex.get(3) {
                Some(&ch) => expand_nibble(ch)?,
                None => 255,
            };
            Some(Color::rgba(r, g, b, a))
        }
        6 | 8 => {
            let r = hex_byte(hex[0], hex[1])?;
            let g = hex_byte(hex[2], hex[3])?;
            let b = hex_byte(hex[4], hex[5])?;
            let a = if hex.len() == 8 {
                hex_byte(hex[6], hex[7])?
            } else {
                255
            };
            Some(Color::rgba(r, g, b, a))
        }
        _ => None,
    }
}

/// Expand a single hex nibble: 'f' → 0xFF, 'a' → 0xAA.
fn expand_nibble(ch: u8) -> Option<u8> {
    let n = hex_val(ch)?;
    Some(n << 4 | n)
}

fn hex_byte(hi: u8, lo: u8) -> Option<u8> {
    Some(hex_val(hi)? << 4 | hex_val(lo)?)
}

fn hex_val(ch: u8) -> Option<u8> {
    match ch {
        b'0'..=b'9' => Some(ch - b'0'),
        b'a'..=b'f' => Some(ch - b'a' + 10),
        b'A'..=b'F' => Some(ch - b'A' + 10),
        _ => None,
    }
}
