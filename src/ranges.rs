use std::fmt;

use crate::err::Error;

// Code points vs. scalar values.
//
// Every u32 up to 10FFFF names a code point, but `char` only holds scalar
// values; the surrogate block D800-DFFF is spellable in range syntax and not
// printable. Checking the two endpoints isn't enough: a range like D000-E000
// has scalar ends and a surrogate middle. Construction checks for straddling
// too, after which every walk over a CharRange is infallibly char.

const SURROGATE_FIRST: u32 = 0xD800;
const SURROGATE_LAST: u32 = 0xDFFF;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct CodePoint {
    inner: u32,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CharRange {
    first: CodePoint,
    last: CodePoint,
}

impl CodePoint {
    pub fn new(value: u32) -> Result<CodePoint, Error> {
        if char::from_u32(value).is_none() {
            return Err(Error::InvalidCodePoint(value));
        }

        Ok(CodePoint { inner: value })
    }

    pub fn value(self) -> u32 {
        self.inner
    }
}

impl CharRange {
    pub fn new(first: CodePoint, last: CodePoint) -> Result<CharRange, Error> {
        if first > last {
            return Err(Error::InvalidRange {
                start: first.value(),
                end: last.value(),
            });
        }

        // scalar endpoints, surrogate middle
        if first.value() < SURROGATE_FIRST && last.value() > SURROGATE_LAST {
            return Err(Error::InvalidCodePoint(SURROGATE_FIRST));
        }

        Ok(CharRange { first, last })
    }

    pub fn chars(&self) -> impl Iterator<Item = char> {
        (self.first.value()..=self.last.value())
            .map(|value| char::from_u32(value).expect("checked at construction"))
    }

    pub fn count(&self) -> usize {
        (self.last.value() - self.first.value() + 1) as usize
    }
}

/// An item is `START-END` or a single point, hex, with an optional `U+` or
/// `0x` on each point. This is the same format for argv and the environment.
pub fn parse_range(item: &str) -> Result<CharRange, Error> {
    let item = item.trim();
    if item.is_empty() {
        return Err(Error::InvalidConfiguration("empty range".to_string()));
    }

    let (first, last) = match item.split_once('-') {
        Some((first, last)) => (parse_point(first)?, parse_point(last)?),
        None => {
            let only = parse_point(item)?;
            (only, only)
        }
    };

    CharRange::new(first, last)
}

pub fn parse_range_list(spec: &str) -> Result<Vec<CharRange>, Error> {
    spec.split(',').map(parse_range).collect()
}

fn parse_point(s: &str) -> Result<CodePoint, Error> {
    let s = s.trim();
    let digits = ["U+", "u+", "0x", "0X"]
        .iter()
        .find_map(|prefix| s.strip_prefix(prefix))
        .unwrap_or(s);

    match u32::from_str_radix(digits, 16) {
        Ok(value) => CodePoint::new(value),
        Err(_) => Err(Error::InvalidConfiguration(format!(
            "unparseable code point: {s:?}"
        ))),
    }
}

/// What you get without asking: Block Elements, and Symbols for Legacy
/// Computing Supplement. Both are terminal drawing glyphs, which is what
/// this tool was written to find.
pub fn default_ranges() -> Vec<CharRange> {
    [
        (0x2580, 0x259F),   // Block Elements
        (0x1FB00, 0x1FBFF), // Symbols for Legacy Computing Supplement
    ]
    .iter()
    .map(|&(first, last)| {
        CharRange::new(
            CodePoint::new(first).expect("builtin point"),
            CodePoint::new(last).expect("builtin point"),
        )
        .expect("builtin range")
    })
    .collect()
}

impl fmt::Display for CodePoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "U+{:04X}", self.inner)
    }
}

impl fmt::Display for CharRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}", self.first, self.last)
    }
}
