//! fui Casing
//!
//! Turns human-readable labels into lowercase, hyphen-separated identifiers.
//!
//! Segmentation rules (ASCII only, everything else separates segments):
//! - a run of two or more capitals is one segment; when the run is directly
//!   followed by a lowercase letter or digit, its last capital starts the next
//!   segment instead (`XMLHttp` -> `xml`, `http`)
//! - an optional capital followed by lowercase letters and digits is one
//!   segment (`Phone`, `address2`)

/// Convert a label into a kebab-case identifier.
///
/// A blank label yields an empty string.
pub fn to_kebab_case(label: &str) -> String {
    segments(label)
        .map(|segment| segment.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

/// Split a label into its case segments, in order.
pub fn segments(label: &str) -> Segments<'_> {
    Segments {
        source: label,
        chars: label.char_indices().collect(),
        pos: 0,
    }
}

/// Iterator over the case segments of a label
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    source: &'a str,
    chars: Vec<(usize, char)>,
    pos: usize,
}

impl<'a> Segments<'a> {
    fn char_at(&self, index: usize) -> Option<char> {
        self.chars.get(index).map(|&(_, c)| c)
    }

    fn byte_offset(&self, index: usize) -> usize {
        self.chars
            .get(index)
            .map(|&(offset, _)| offset)
            .unwrap_or(self.source.len())
    }

    fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.source[self.byte_offset(start)..self.byte_offset(end)]
    }

    /// Length of an acronym segment starting at `start`, if one starts there.
    fn acronym_len(&self, start: usize) -> Option<usize> {
        let run = self.chars[start..]
            .iter()
            .take_while(|&&(_, c)| c.is_ascii_uppercase())
            .count();
        if run < 2 {
            return None;
        }
        match self.char_at(start + run) {
            Some(next) if is_word_char(next) => (run > 2).then_some(run - 1),
            _ => Some(run),
        }
    }

    /// Length of a word segment starting at `start` (may be zero).
    fn word_len(&self, start: usize) -> usize {
        let mut end = start;
        if self.char_at(end).is_some_and(|c| c.is_ascii_uppercase()) {
            end += 1;
        }
        while self
            .char_at(end)
            .is_some_and(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        {
            end += 1;
        }
        end - start
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.chars.len() {
            let start = self.pos;
            let len = self
                .acronym_len(start)
                .unwrap_or_else(|| self.word_len(start));
            if len == 0 {
                self.pos += 1;
                continue;
            }
            self.pos = start + len;
            return Some(self.slice(start, start + len));
        }
        None
    }
}

#[inline]
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spaced_label() {
        assert_eq!(to_kebab_case("Phone Number"), "phone-number");
        assert_eq!(to_kebab_case("first name"), "first-name");
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(to_kebab_case("firstName"), "first-name");
        assert_eq!(to_kebab_case("DateOfBirth"), "date-of-birth");
    }

    #[test]
    fn test_acronyms() {
        assert_eq!(to_kebab_case("XMLHttpRequest"), "xml-http-request");
        assert_eq!(to_kebab_case("userID"), "user-id");
        assert_eq!(to_kebab_case("Your URL"), "your-url");
        assert_eq!(to_kebab_case("ABc"), "a-bc");
    }

    #[test]
    fn test_digits() {
        assert_eq!(to_kebab_case("Address2"), "address2");
        assert_eq!(to_kebab_case("2024 Report"), "2024-report");
        assert_eq!(to_kebab_case("Line 2"), "line-2");
    }

    #[test]
    fn test_separators_and_symbols() {
        assert_eq!(to_kebab_case("E-mail address"), "e-mail-address");
        assert_eq!(to_kebab_case("  padded   label "), "padded-label");
        assert_eq!(to_kebab_case("Price (€)"), "price");
        assert_eq!(to_kebab_case("snake_case_name"), "snake-case-name");
    }

    #[test]
    fn test_blank_label() {
        assert_eq!(to_kebab_case(""), "");
        assert_eq!(to_kebab_case("   "), "");
    }

    #[test]
    fn test_segments_borrow_source() {
        let parts: Vec<&str> = segments("HTMLParser Output").collect();
        assert_eq!(parts, vec!["HTML", "Parser", "Output"]);
    }
}
