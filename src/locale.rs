// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

// spell-checker:ignore ampm

//! Locale-aware rendering of times.
//!
//! Locale data comes from the glibc `LC_TIME` tables shipped with
//! `pure-rust-locales` (the same tables chrono localizes with). The locale's
//! `T_FMT` pattern decides the order of the fields, the literals between them
//! and whether the locale reads the clock in 12 or 24 hour form.

use std::env;
use std::sync::LazyLock;

use pure_rust_locales::locale_match;
pub use pure_rust_locales::Locale;
use regex::Regex;
use tracing::debug;
use winnow::{
    combinator::{alt, opt, preceded, repeat},
    token::{any, one_of, take_till},
    ModalResult, Parser,
};

use crate::{Precision, TimeInputError, TimeValue};

/// 09:00, 21:00 and 21:13:14 are used as probes: each field renders as a
/// distinct number so the rendered text can be mapped back onto tokens.
const NINE_AM: TimeValue = TimeValue {
    hour: 9,
    minute: 0,
    second: 0,
};
const NINE_PM: TimeValue = TimeValue {
    hour: 21,
    minute: 0,
    second: 0,
};
const REFERENCE: TimeValue = TimeValue {
    hour: 21,
    minute: 13,
    second: 14,
};

/// Regions assumed for bare language tags whose region is not simply the
/// upper-cased language.
const DEFAULT_REGIONS: &[(&str, &str)] = &[
    ("ar", "SA"),
    ("cs", "CZ"),
    ("da", "DK"),
    ("el", "GR"),
    ("en", "US"),
    ("he", "IL"),
    ("hi", "IN"),
    ("ja", "JP"),
    ("ko", "KR"),
    ("nb", "NO"),
    ("sv", "SE"),
    ("uk", "UA"),
    ("zh", "CN"),
];

static LOCALE_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?<lang>[A-Za-z]{2,3})(?:[-_][A-Za-z]{4})?(?:[-_](?<region>[A-Za-z]{2}|[0-9]{3}))?(?:[-_][A-Za-z0-9]{1,8})*(?:\.[^@]*)?(?:@.*)?$",
    )
    .unwrap()
});

/// Resolves an IETF (`de-DE`) or POSIX (`de_DE.UTF-8`) locale tag.
///
/// # Errors
///
/// Returns [`TimeInputError::UnknownLocale`] if the tag is malformed or names
/// a locale without time formatting data.
pub fn parse_locale(tag: &str) -> Result<Locale, TimeInputError> {
    let tag = tag.trim();
    if tag == "C" || tag == "POSIX" || tag.starts_with("C.") {
        return Ok(Locale::POSIX);
    }

    let unknown = || TimeInputError::UnknownLocale(tag.to_owned());
    let captures = LOCALE_TAG.captures(tag).ok_or_else(unknown)?;
    let lang = captures["lang"].to_ascii_lowercase();
    let region = match captures.name("region") {
        Some(region) => region.as_str().to_ascii_uppercase(),
        None => DEFAULT_REGIONS
            .iter()
            .find(|(l, _)| *l == lang)
            .map(|(_, region)| (*region).to_owned())
            .unwrap_or_else(|| lang.to_ascii_uppercase()),
    };

    Locale::try_from(format!("{lang}_{region}").as_str()).map_err(|_| unknown())
}

/// The locale configured in the environment (`LC_ALL`, `LC_TIME`, `LANG`),
/// falling back to `en_US`.
pub fn default_locale() -> Locale {
    ["LC_ALL", "LC_TIME", "LANG"]
        .iter()
        .filter_map(|var| env::var(var).ok())
        .find(|value| !value.is_empty())
        .and_then(|tag| parse_locale(&tag).ok())
        .unwrap_or(Locale::en_US)
}

fn t_fmt(locale: Locale) -> &'static str {
    locale_match!(locale => LC_TIME::T_FMT)
}

fn t_fmt_ampm(locale: Locale) -> &'static str {
    locale_match!(locale => LC_TIME::T_FMT_AMPM)
}

fn am_pm(locale: Locale) -> &'static [&'static str] {
    locale_match!(locale => LC_TIME::AM_PM)
}

/// One element of a locale time pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Piece {
    Literal(&'static str),
    Hour24 { padded: bool },
    Hour12,
    Minute,
    Second,
    AmPm,
}

impl Piece {
    fn precision(self) -> Option<Precision> {
        match self {
            Piece::Minute => Some(Precision::Minute),
            Piece::Second => Some(Precision::Second),
            _ => None,
        }
    }

    /// Literals with letters in them are units (`時`, `Uhr`) attached to the
    /// field before them. Anything else separates two fields.
    fn is_suffix(self) -> bool {
        matches!(self, Piece::Literal(text) if text.chars().any(char::is_alphabetic))
    }
}

/// An unexpanded strftime element.
enum Raw<'a> {
    Literal(&'a str),
    Conversion { flag: Option<char>, spec: char },
}

fn literal<'a>(input: &mut &'a str) -> ModalResult<Raw<'a>> {
    take_till(1.., '%').map(Raw::Literal).parse_next(input)
}

fn conversion<'a>(input: &mut &'a str) -> ModalResult<Raw<'a>> {
    preceded(
        '%',
        (
            opt(one_of(['-', '_', '0', '^', '#'])),
            opt(one_of(['E', 'O'])),
            any,
        ),
    )
    .map(|(flag, _, spec)| Raw::Conversion { flag, spec })
    .parse_next(input)
}

fn strftime<'a>(input: &mut &'a str) -> ModalResult<Vec<Raw<'a>>> {
    repeat(0.., alt((literal, conversion))).parse_next(input)
}

/// Expands a strftime pattern into pieces, resolving the composite
/// conversions (`%r`, `%R`, `%T`, `%X`). Conversions that have nothing to do
/// with the time of day are dropped.
fn expand(mut fmt: &'static str, locale: Locale, depth: u8, out: &mut Vec<Piece>) {
    let raws = strftime.parse_next(&mut fmt).unwrap_or_default();
    for raw in raws {
        let (flag, spec) = match raw {
            Raw::Literal(text) => {
                out.push(Piece::Literal(text));
                continue;
            }
            Raw::Conversion { flag, spec } => (flag, spec),
        };
        match spec {
            'H' => out.push(Piece::Hour24 {
                padded: flag != Some('-'),
            }),
            'k' => out.push(Piece::Hour24 { padded: false }),
            'I' | 'l' => out.push(Piece::Hour12),
            'M' => out.push(Piece::Minute),
            'S' => out.push(Piece::Second),
            'p' | 'P' => out.push(Piece::AmPm),
            'R' => expand("%H:%M", locale, depth + 1, out),
            'T' => expand("%H:%M:%S", locale, depth + 1, out),
            'r' if depth < 2 => match t_fmt_ampm(locale) {
                "" => expand("%I:%M:%S %p", locale, depth + 1, out),
                ampm => expand(ampm, locale, depth + 1, out),
            },
            'X' if depth < 2 => expand(t_fmt(locale), locale, depth + 1, out),
            '%' => out.push(Piece::Literal("%")),
            'n' => out.push(Piece::Literal("\n")),
            't' => out.push(Piece::Literal("\t")),
            _ => {}
        }
    }
}

fn locale_pieces(locale: Locale) -> Vec<Piece> {
    let mut pieces = Vec::new();
    expand(t_fmt(locale), locale, 0, &mut pieces);
    if !pieces
        .iter()
        .any(|p| matches!(p, Piece::Hour24 { .. } | Piece::Hour12))
    {
        pieces.clear();
        expand("%H:%M:%S", locale, 0, &mut pieces);
    }
    pieces
}

/// Whether `locale` reads the clock in 12 hour form.
pub fn uses_12_hour_clock(locale: Locale) -> bool {
    locale_pieces(locale).contains(&Piece::Hour12)
}

/// Renders times in a locale at a fixed precision.
///
/// There is one formatter per [`Precision`]; get it with
/// [`TimeFormatter::for_precision`].
#[derive(Debug, PartialEq, Eq)]
pub struct TimeFormatter {
    precision: Precision,
}

static FORMATTERS: [TimeFormatter; 3] = [
    TimeFormatter {
        precision: Precision::Hour,
    },
    TimeFormatter {
        precision: Precision::Minute,
    },
    TimeFormatter {
        precision: Precision::Second,
    },
];

impl TimeFormatter {
    pub fn for_precision(precision: Precision) -> &'static TimeFormatter {
        &FORMATTERS[precision.index()]
    }

    pub fn precision(&self) -> Precision {
        self.precision
    }

    /// The locale pattern with every field finer than the precision removed,
    /// together with the separator before it and the unit after it.
    fn pieces(&self, locale: Locale) -> Vec<Piece> {
        let mut out = Vec::new();
        let mut separator = Vec::new();
        let mut dropping = false;
        for piece in locale_pieces(locale) {
            if piece.is_suffix() {
                if !dropping {
                    out.append(&mut separator);
                    out.push(piece);
                }
            } else if let Piece::Literal(_) = piece {
                separator.push(piece);
            } else {
                dropping = piece.precision().is_some_and(|p| p > self.precision);
                if dropping {
                    separator.clear();
                } else {
                    out.append(&mut separator);
                    out.push(piece);
                }
            }
        }
        if !dropping {
            out.append(&mut separator);
        }
        out
    }

    /// Renders `time` the way `locale` writes it, e.g. `9:13 PM` in `en_US` or
    /// `21:13` in `de_DE` at minute precision.
    pub fn format(&self, locale: Locale, time: impl Into<TimeValue>) -> String {
        let time = time.into();
        let labels = am_pm(locale);
        let mut rendered = String::new();
        for piece in self.pieces(locale) {
            match piece {
                Piece::Literal(text) => rendered.push_str(text),
                Piece::Hour24 { padded: true } => rendered.push_str(&format!("{:02}", time.hour)),
                Piece::Hour24 { padded: false } => rendered.push_str(&time.hour.to_string()),
                Piece::Hour12 => {
                    let (hour12, _) = crate::convert_24_to_12(time.hour);
                    rendered.push_str(&hour12.to_string());
                }
                Piece::Minute => rendered.push_str(&format!("{:02}", time.minute)),
                Piece::Second => rendered.push_str(&format!("{:02}", time.second)),
                Piece::AmPm => {
                    let index = usize::from(time.hour >= 12);
                    rendered.push_str(labels.get(index).copied().unwrap_or_default());
                }
            }
        }
        rendered.trim().to_owned()
    }
}

/// The locale's labels for the two halves of the day, e.g. `["AM", "PM"]`.
///
/// The labels are found by rendering 09:00 and 21:00 at hour precision and
/// cutting the text around the digit `9`. Locales that read the clock in 24
/// hour form never render a `9` at 21:00 and fall back to `AM`/`PM`.
pub fn am_pm_labels(locale: Locale) -> [String; 2] {
    let formatter = TimeFormatter::for_precision(Precision::Hour);
    let am = formatter.format(locale, NINE_AM);
    let pm = formatter.format(locale, NINE_PM);

    if let (Some((am1, am2)), Some((pm1, pm2))) = (am.split_once('9'), pm.split_once('9')) {
        if am1 != pm1 {
            return [am1.trim().to_owned(), pm1.trim().to_owned()];
        }
        if am2 != pm2 {
            return [am2.trim().to_owned(), pm2.trim().to_owned()];
        }
    }
    ["AM".to_owned(), "PM".to_owned()]
}

/// Builds the token pattern a locale writes times in, e.g. `h:mm a`.
///
/// 21:13:14 is rendered at `precision`, then `9` becomes `h`, `21` becomes
/// `H`, `13` becomes `mm`, `14` becomes `ss` and the first AM/PM label
/// becomes `a`.
pub fn derive_placeholder(locale: Locale, precision: Precision) -> String {
    let rendered = TimeFormatter::for_precision(precision).format(locale, REFERENCE);
    let mut placeholder = rendered
        .replacen('9', "h", 1)
        .replacen("21", "H", 1)
        .replacen("13", "mm", 1)
        .replacen("14", "ss", 1);

    let labels = am_pm_labels(locale);
    let first_label = labels
        .iter()
        .filter(|label| !label.is_empty())
        .filter_map(|label| placeholder.find(label.as_str()).map(|at| (at, label.len())))
        .min();
    if let Some((at, len)) = first_label {
        placeholder.replace_range(at..at + len, "a");
    }

    debug!(?locale, %precision, %placeholder, "derived placeholder");
    placeholder
}

/// The character that moves focus to the next field, i.e. the first
/// character of the placeholder that is not an ASCII letter or digit.
pub fn divider_of(placeholder: &str) -> Option<char> {
    placeholder.chars().find(|c| !c.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(hour: u32, minute: u32, second: u32) -> TimeValue {
        TimeValue::new(hour, minute, second).unwrap()
    }

    #[test]
    fn parse_ietf_and_posix_tags() {
        assert_eq!(parse_locale("de-DE"), Ok(Locale::de_DE));
        assert_eq!(parse_locale("de_DE.UTF-8"), Ok(Locale::de_DE));
        assert_eq!(parse_locale("en-us"), Ok(Locale::en_US));
        assert_eq!(parse_locale("en"), Ok(Locale::en_US));
        assert_eq!(parse_locale("de"), Ok(Locale::de_DE));
        assert_eq!(parse_locale("C"), Ok(Locale::POSIX));
    }

    #[test]
    fn parse_unknown_tags() {
        for tag in ["", "xx-YY", "not a locale", "de-DE-"] {
            assert!(
                matches!(parse_locale(tag), Err(TimeInputError::UnknownLocale(_))),
                "tag: {tag}"
            );
        }
    }

    #[test]
    fn twelve_hour_locales() {
        assert!(uses_12_hour_clock(Locale::en_US));
        assert!(!uses_12_hour_clock(Locale::de_DE));
    }

    #[test]
    fn format_en_us() {
        let t = time(21, 13, 14);
        let format = |p| TimeFormatter::for_precision(p).format(Locale::en_US, t);
        assert_eq!(format(Precision::Second), "9:13:14 PM");
        assert_eq!(format(Precision::Minute), "9:13 PM");
        assert_eq!(format(Precision::Hour), "9 PM");
    }

    #[test]
    fn format_de_de() {
        let t = time(21, 13, 14);
        let format = |p| TimeFormatter::for_precision(p).format(Locale::de_DE, t);
        assert_eq!(format(Precision::Second), "21:13:14");
        assert_eq!(format(Precision::Minute), "21:13");
        assert_eq!(format(Precision::Hour), "21");
    }

    #[test]
    fn formatter_table_is_indexed_by_precision() {
        for precision in Precision::ALL {
            assert_eq!(
                TimeFormatter::for_precision(precision).precision(),
                precision
            );
        }
    }

    #[test]
    fn labels() {
        assert_eq!(am_pm_labels(Locale::en_US), ["AM", "PM"]);
        // 24 hour locales fall back
        assert_eq!(am_pm_labels(Locale::de_DE), ["AM", "PM"]);
    }

    #[test]
    fn placeholders() {
        assert_eq!(
            derive_placeholder(Locale::en_US, Precision::Second),
            "h:mm:ss a"
        );
        assert_eq!(derive_placeholder(Locale::en_US, Precision::Minute), "h:mm a");
        assert_eq!(derive_placeholder(Locale::en_US, Precision::Hour), "h a");
        assert_eq!(
            derive_placeholder(Locale::de_DE, Precision::Second),
            "H:mm:ss"
        );
        assert_eq!(derive_placeholder(Locale::de_DE, Precision::Minute), "H:mm");
    }

    #[test]
    fn dividers() {
        assert_eq!(divider_of("h:mm:ss a"), Some(':'));
        assert_eq!(divider_of("HH.mm"), Some('.'));
        assert_eq!(divider_of("H"), None);
    }

    #[test]
    fn strftime_expansion() {
        let mut pieces = Vec::new();
        expand("%-H.%M", Locale::POSIX, 0, &mut pieces);
        assert_eq!(
            pieces,
            [
                Piece::Hour24 { padded: false },
                Piece::Literal("."),
                Piece::Minute
            ]
        );
    }
}
