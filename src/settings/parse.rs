//! Settings string tokenizer and value parsers.

use alloc::string::String;
use alloc::vec::Vec;

use super::{EntitySettings, ParseWarning, Settings};
use crate::color::parse_color;
use crate::entity::Entity;
use crate::logo::LogoPosition;
use crate::preset::Preset;
use crate::split::SplitStyle;

/// Host fields accepted and kept in `extras` without warnings.
/// Sorted for binary search.
const KNOWN_EXTRAS: &[&str] = &["game1-name", "game2-name"];

/// Parse a settings string into [`Settings`] + warnings.
pub(crate) fn parse_query(query: &str) -> (Settings, Vec<ParseWarning>) {
    let mut settings = Settings::new();
    let mut warnings = Vec::new();

    for pair in split_query(query) {
        let (raw_key, raw_value) = split_pair(pair);
        let key = percent_decode(raw_key).to_ascii_lowercase();
        let value = percent_decode(raw_value);
        dispatch_key(key.trim(), &value, &mut settings, &mut warnings);
    }

    (settings, warnings)
}

// Reasons attached to `ValueInvalid` warnings.
const NUMBER: &str = "expected a number";
const PERCENT: &str = "expected a percentage";
const PIXELS: &str = "expected pixels";
const COLOR: &str = "expected hex color";
const BOOL: &str = "expected true|false|1|0|yes|no|on|off";
const FORMAT: &str = "expected a format name";
const STYLE: &str = "expected horizontal|vertical|diagonal";
const POSITION: &str = "expected center|split";

fn dispatch_key(key: &str, value: &str, s: &mut Settings, warnings: &mut Vec<ParseWarning>) {
    let mut w = Warn {
        key,
        value,
        warnings,
    };
    match key {
        "format" => w.set(&mut s.format, Preset::from_name(value).ok(), FORMAT),
        "split-style" => w.set(&mut s.split_style, parse_split_style(value), STYLE),
        "split-angle" => w.set(&mut s.split_angle, parse_f64(value), NUMBER),
        "border-width" => w.set(&mut s.border_width, parse_f64(value), NUMBER),
        "border-color" => w.set(&mut s.border_color, parse_color(value), COLOR),
        "frame-border-width" => w.set(&mut s.frame_border_width, parse_f64(value), NUMBER),
        "frame-border-color" => w.set(&mut s.frame_border_color, parse_color(value), COLOR),
        "swap-backgrounds" => w.set(&mut s.swap_backgrounds, parse_bool(value), BOOL),
        "swap-logos" => w.set(&mut s.swap_logos, parse_bool(value), BOOL),
        "logo-position" => w.set(&mut s.logo_position, parse_logo_position(value), POSITION),
        _ => {
            if KNOWN_EXTRAS.binary_search(&key).is_ok() {
                s.extras.insert(String::from(key), String::from(value));
            } else if let Some((entity, field)) = entity_key(key) {
                dispatch_entity(field, &mut s.entities[entity], &mut w);
            } else {
                w.warnings.push(ParseWarning::KeyNotRecognized {
                    key: String::from(key),
                    value: String::from(value),
                });
            }
        }
    }
}

fn dispatch_entity(field: &str, e: &mut EntitySettings, w: &mut Warn<'_, '_>) {
    let value = w.value;
    match field {
        "scale" => w.set(&mut e.logo_scale, parse_f64(value), PERCENT),
        "x-offset" => w.set(&mut e.logo_x, parse_f64(value), PIXELS),
        "y-offset" => w.set(&mut e.logo_y, parse_f64(value), PIXELS),
        "bg-x-offset" => w.set(&mut e.background_x, parse_f64(value), PIXELS),
        "bg-y-offset" => w.set(&mut e.background_y, parse_f64(value), PIXELS),
        "bg-scale" => w.set(&mut e.background_scale, parse_f64(value), PERCENT),
        _ => w.warnings.push(ParseWarning::KeyNotRecognized {
            key: String::from(w.key),
            value: String::from(w.value),
        }),
    }
}

/// Split `game1-...` / `game2-...` into the entity and the field name.
fn entity_key(key: &str) -> Option<(Entity, &str)> {
    Entity::ALL.into_iter().find_map(|entity| {
        key.strip_prefix(entity.name())
            .and_then(|rest| rest.strip_prefix('-'))
            .filter(|field| !field.is_empty())
            .map(|field| (entity, field))
    })
}

/// Current key/value and the warning sink.
struct Warn<'a, 'w> {
    key: &'a str,
    value: &'a str,
    warnings: &'w mut Vec<ParseWarning>,
}

impl Warn<'_, '_> {
    /// Set a field, warning on duplicates and on values that do not parse.
    fn set<T>(&mut self, field: &mut Option<T>, parsed: Option<T>, reason: &'static str) {
        match parsed {
            Some(v) => {
                if field.is_some() {
                    self.warnings.push(ParseWarning::DuplicateKey {
                        key: String::from(self.key),
                        value: String::from(self.value),
                    });
                }
                *field = Some(v);
            }
            None => self.warnings.push(ParseWarning::ValueInvalid {
                key: String::from(self.key),
                value: String::from(self.value),
                reason,
            }),
        }
    }
}

// ---- Value parsers ----

fn parse_f64(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_split_style(s: &str) -> Option<SplitStyle> {
    match s.trim().to_ascii_lowercase().as_str() {
        "horizontal" | "h" => Some(SplitStyle::Horizontal),
        "vertical" | "v" => Some(SplitStyle::Vertical),
        "diagonal" | "d" => Some(SplitStyle::Diagonal),
        _ => None,
    }
}

fn parse_logo_position(s: &str) -> Option<LogoPosition> {
    match s.trim().to_ascii_lowercase().as_str() {
        "center" | "centre" => Some(LogoPosition::Center),
        "split" | "split-relative" | "splitrelative" => Some(LogoPosition::SplitRelative),
        _ => None,
    }
}

// ---- Query string tokenizer ----

/// Split on '&', skipping empty segments and a leading '?'.
fn split_query(query: &str) -> impl Iterator<Item = &str> {
    let query = query.strip_prefix('?').unwrap_or(query);
    query.split('&').filter(|s| !s.is_empty())
}

/// Split a single "key=value" pair on the first '='.
fn split_pair(pair: &str) -> (&str, &str) {
    pair.split_once('=').unwrap_or((pair, ""))
}

/// Percent-decode a form component, with '+' as space. Invalid escapes are
/// kept literally; invalid UTF-8 is replaced.
fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                match (hex_digit(bytes[i + 1]), hex_digit(bytes[i + 2])) {
                    (Some(hi), Some(lo)) => {
                        out.push(hi << 4 | lo);
                        i += 3;
                    }
                    _ => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_extras_is_sorted() {
        for w in KNOWN_EXTRAS.windows(2) {
            assert!(w[0] < w[1], "KNOWN_EXTRAS not sorted: {w:?}");
        }
    }

    #[test]
    fn parse_global_controls() {
        let (s, warnings) = parse_query(
            "format=small-capsule&split-style=Horizontal&split-angle=120\
             &border-width=3&border-color=%23000&logo-position=center",
        );
        assert!(warnings.is_empty(), "{warnings:?}");
        assert_eq!(s.format, Some(Preset::SmallCapsule));
        assert_eq!(s.split_style, Some(SplitStyle::Horizontal));
        assert_eq!(s.split_angle, Some(120.0));
        assert_eq!(s.border_width, Some(3.0));
        assert_eq!(s.border_color, Some(crate::Color::BLACK));
        assert_eq!(s.logo_position, Some(LogoPosition::Center));
    }

    #[test]
    fn parse_entity_controls() {
        let (s, warnings) = parse_query("game2-bg-scale=150&game1-y-offset=-3.5&GAME1-SCALE=80");
        assert!(warnings.is_empty(), "{warnings:?}");
        assert_eq!(s.entities.game2.background_scale, Some(150.0));
        assert_eq!(s.entities.game1.logo_y, Some(-3.5));
        assert_eq!(s.entities.game1.logo_scale, Some(80.0));
        assert_eq!(s.entities.game2.logo_scale, None);
    }

    #[test]
    fn checkbox_values() {
        let (s, _) = parse_query("swap-backgrounds=on&swap-logos=0");
        assert_eq!(s.swap_backgrounds, Some(true));
        assert_eq!(s.swap_logos, Some(false));
    }

    #[test]
    fn invalid_value_warns_and_keeps_previous() {
        let (s, warnings) = parse_query("split-style=vertical&split-style=zigzag");
        assert_eq!(s.split_style, Some(SplitStyle::Vertical));
        assert!(matches!(
            &warnings[..],
            [ParseWarning::ValueInvalid { key, value, .. }]
                if key == "split-style" && value == "zigzag"
        ));
    }

    #[test]
    fn duplicate_key_last_wins() {
        let (s, warnings) = parse_query("border-width=2&border-width=8");
        assert_eq!(s.border_width, Some(8.0));
        let is_duplicate = |w: &ParseWarning| matches!(w, ParseWarning::DuplicateKey { .. });
        assert!(warnings.iter().any(is_duplicate));
    }

    #[test]
    fn unknown_keys_warn() {
        let (_, warnings) = parse_query("foo=bar&game1-speed=3&game3-scale=10");
        let keys: Vec<&str> = warnings
            .iter()
            .filter_map(|w| match w {
                ParseWarning::KeyNotRecognized { key, .. } => Some(key.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(keys, ["foo", "game1-speed", "game3-scale"]);
    }

    #[test]
    fn host_fields_are_kept_quietly() {
        let (s, warnings) = parse_query("game1-name=Half-Life+2&game2-name=Portal%202");
        assert!(warnings.is_empty(), "{warnings:?}");
        let extra = |key: &str| s.extras().get(key).map(String::as_str);
        assert_eq!(extra("game1-name"), Some("Half-Life 2"));
        assert_eq!(extra("game2-name"), Some("Portal 2"));
    }

    #[test]
    fn nan_is_invalid() {
        let (s, warnings) = parse_query("split-angle=NaN");
        assert_eq!(s.split_angle, None);
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn percent_decoding() {
        assert_eq!(percent_decode("%23ff0000"), "#ff0000");
        assert_eq!(percent_decode("a+b"), "a b");
        assert_eq!(percent_decode("100%"), "100%");
        assert_eq!(percent_decode("%zz"), "%zz");
        assert_eq!(percent_decode("%C3%A9"), "é");
    }

    #[test]
    fn leading_question_mark_and_empty_segments() {
        let (s, warnings) = parse_query("?&&format=package-header&");
        assert!(warnings.is_empty());
        assert_eq!(s.format, Some(Preset::PackageHeader));
    }
}
