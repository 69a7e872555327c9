//! Character values and character classes.
//!
//! `InputChar` extends `char` with two sentinels:
//! - `Eoi`: reported by the input buffer past its last character
//! - `Empty`: never read from input; marks "may match nothing" inside
//!   starter and follower sets

use std::fmt;

/// A character read from the input, or one of the two sentinels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum InputChar {
    Char(char),
    Eoi,
    Empty,
}

impl InputChar {
    pub fn as_char(self) -> Option<char> {
        match self {
            InputChar::Char(c) => Some(c),
            InputChar::Eoi | InputChar::Empty => None,
        }
    }

    #[inline]
    pub fn is_eoi(self) -> bool {
        self == InputChar::Eoi
    }
}

impl From<char> for InputChar {
    fn from(c: char) -> Self {
        InputChar::Char(c)
    }
}

impl fmt::Display for InputChar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputChar::Char(c) => write!(f, "'{}'", c.escape_debug()),
            InputChar::Eoi => f.write_str("EOI"),
            InputChar::Empty => f.write_str("EMPTY"),
        }
    }
}

/// Codes above `char::MAX` stand for the sentinels.
const EOI_CODE: u32 = char::MAX as u32 + 1;
const EMPTY_CODE: u32 = EOI_CODE + 1;

fn code(c: InputChar) -> u32 {
    match c {
        InputChar::Char(c) => c as u32,
        InputChar::Eoi => EOI_CODE,
        InputChar::Empty => EMPTY_CODE,
    }
}

/// Runs of at least this many chars are displayed as `'a'..'z'`.
const MIN_DISPLAYED_RUN: u32 = 4;

/// A set of `InputChar`s.
///
/// Stored as sorted, disjoint, non-adjacent inclusive ranges of codes, so
/// wide char ranges and "all but X" sets stay small and exact.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Characters {
    ranges: Vec<(u32, u32)>,
}

impl Characters {
    /// The empty set.
    pub fn none() -> Self {
        Self::default()
    }

    /// Every char, including both sentinels.
    pub fn all() -> Self {
        Self {
            ranges: vec![(0, EMPTY_CODE)],
        }
    }

    pub fn of(chars: impl IntoIterator<Item = InputChar>) -> Self {
        Self::from_ranges(chars.into_iter().map(|c| (code(c), code(c))).collect())
    }

    pub fn of_char(c: char) -> Self {
        Self::of([InputChar::Char(c)])
    }

    /// Every char from `low` to `high`, both included.
    pub fn range(low: char, high: char) -> Self {
        if low > high {
            return Self::none();
        }
        Self {
            ranges: vec![(low as u32, high as u32)],
        }
    }

    pub fn all_but(chars: impl IntoIterator<Item = InputChar>) -> Self {
        Self::of(chars).complement()
    }

    fn from_ranges(mut ranges: Vec<(u32, u32)>) -> Self {
        ranges.sort_unstable();
        let mut merged: Vec<(u32, u32)> = Vec::with_capacity(ranges.len());
        for (low, high) in ranges {
            match merged.last_mut() {
                Some(last) if low <= last.1.saturating_add(1) => last.1 = last.1.max(high),
                _ => merged.push((low, high)),
            }
        }
        Self { ranges: merged }
    }

    /// Everything not in this set.
    pub fn complement(&self) -> Characters {
        let mut ranges = Vec::with_capacity(self.ranges.len() + 1);
        let mut next = 0;
        for &(low, high) in &self.ranges {
            if low > next {
                ranges.push((next, low - 1));
            }
            next = high + 1;
        }
        if next <= EMPTY_CODE {
            ranges.push((next, EMPTY_CODE));
        }
        Self { ranges }
    }

    pub fn contains(&self, c: InputChar) -> bool {
        let code = code(c);
        let i = self.ranges.partition_point(|&(_, high)| high < code);
        self.ranges.get(i).is_some_and(|&(low, _)| low <= code)
    }

    /// Number of members, counting both sentinels.
    fn len(&self) -> u64 {
        self.ranges
            .iter()
            .map(|&(low, high)| u64::from(high - low) + 1)
            .sum()
    }

    /// True when the complement is the smaller description.
    pub fn is_subtractive(&self) -> bool {
        self.complement().len() < self.len()
    }

    /// True for the empty set.
    pub fn is_none(&self) -> bool {
        self.ranges.is_empty()
    }

    /// This set plus `c`.
    pub fn with(self, c: InputChar) -> Self {
        self.union(&Self::of([c]))
    }

    /// This set minus `c`.
    pub fn without(self, c: InputChar) -> Self {
        self.difference(&Self::of([c]))
    }

    pub fn union(&self, other: &Characters) -> Characters {
        let mut ranges = self.ranges.clone();
        ranges.extend_from_slice(&other.ranges);
        Self::from_ranges(ranges)
    }

    pub fn difference(&self, other: &Characters) -> Characters {
        self.complement().union(other).complement()
    }
}

fn write_code(f: &mut fmt::Formatter<'_>, code: u32) -> fmt::Result {
    match code {
        EOI_CODE => write!(f, "{}", InputChar::Eoi),
        EMPTY_CODE => write!(f, "{}", InputChar::Empty),
        _ => match char::from_u32(code) {
            Some(c) => write!(f, "{}", InputChar::Char(c)),
            None => write!(f, "'\\u{{{code:x}}}'"),
        },
    }
}

fn separate(f: &mut fmt::Formatter<'_>, first: &mut bool) -> fmt::Result {
    if std::mem::replace(first, false) {
        return Ok(());
    }
    f.write_str(",")
}

impl fmt::Display for Characters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shown = if self.is_subtractive() {
            f.write_str("!")?;
            self.complement()
        } else {
            self.clone()
        };

        f.write_str("[")?;
        let mut first = true;
        for &(low, high) in &shown.ranges {
            let char_high = high.min(char::MAX as u32);
            let mut code = low;
            if low <= char_high && char_high - low + 1 >= MIN_DISPLAYED_RUN {
                separate(f, &mut first)?;
                write_code(f, low)?;
                f.write_str("..")?;
                write_code(f, char_high)?;
                code = char_high + 1;
            }
            while code <= high {
                if code < EOI_CODE && char::from_u32(code).is_none() {
                    code += 1;
                    continue;
                }
                separate(f, &mut first)?;
                write_code(f, code)?;
                code += 1;
            }
        }
        f.write_str("]")
    }
}
