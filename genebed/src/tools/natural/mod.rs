//! Natural ("human") ordering of contig names.
//!
//! Names are split into alternating runs of digits and non-digits. Runs are
//! compared pairwise: digit runs by numeric value (leading zeros ignored, no
//! length limit), other runs as plain strings, and a digit run sorts before
//! a non-digit run. When one name runs out of tokens first it sorts first.
//! Names that are still tied (`chr01` and `chr1`) fall back to byte order,
//! so the order is total and only equal strings compare equal.
//!
//! For human chromosomes this yields `chr1` .. `chr22`, `chrX`, `chrY`:
//! `chrX` is the single text token `"chrX"`, which compares greater than the
//! `"chr"` token every numbered chromosome starts with.

use std::cmp::Ordering;

use itertools::{
    EitherOrBoth,
    Itertools,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    /// Digit run with leading zeros stripped.
    Digits(&'a str),
    Text(&'a str),
}

impl Ord for Token<'_> {
    fn cmp(
        &self,
        other: &Self,
    ) -> Ordering {
        match (self, other) {
            (Token::Digits(a), Token::Digits(b)) => {
                a.len().cmp(&b.len()).then_with(|| a.cmp(b))
            },
            (Token::Text(a), Token::Text(b)) => a.cmp(b),
            (Token::Digits(_), Token::Text(_)) => Ordering::Less,
            (Token::Text(_), Token::Digits(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Token<'_> {
    fn partial_cmp(
        &self,
        other: &Self,
    ) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

struct Tokens<'a> {
    rest: &'a str,
}

impl<'a> Tokens<'a> {
    fn new(s: &'a str) -> Self {
        Self { rest: s }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = *self.rest.as_bytes().first()?;
        let is_digit = first.is_ascii_digit();
        // ASCII digits are single bytes, so every run boundary is a char
        // boundary
        let len = self
            .rest
            .bytes()
            .position(|b| b.is_ascii_digit() != is_digit)
            .unwrap_or(self.rest.len());
        let (head, tail) = self.rest.split_at(len);
        self.rest = tail;

        Some(if is_digit {
            Token::Digits(head.trim_start_matches('0'))
        }
        else {
            Token::Text(head)
        })
    }
}

/// Compares two contig names in natural order.
///
/// ```
/// use genebed::natural_cmp;
/// use std::cmp::Ordering;
///
/// assert_eq!(natural_cmp("chr2", "chr10"), Ordering::Less);
/// assert_eq!(natural_cmp("chr22", "chrX"), Ordering::Less);
/// ```
pub fn natural_cmp(
    a: &str,
    b: &str,
) -> Ordering {
    for pair in Tokens::new(a).zip_longest(Tokens::new(b)) {
        match pair {
            EitherOrBoth::Both(left, right) => {
                match left.cmp(&right) {
                    Ordering::Equal => continue,
                    other => return other,
                }
            },
            EitherOrBoth::Left(_) => return Ordering::Greater,
            EitherOrBoth::Right(_) => return Ordering::Less,
        }
    }
    a.cmp(b)
}

/// Sort key wrapper ordering its contents with [`natural_cmp`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NaturalKey<S: AsRef<str>>(pub S);

impl<S: AsRef<str> + Eq> Ord for NaturalKey<S> {
    fn cmp(
        &self,
        other: &Self,
    ) -> Ordering {
        natural_cmp(self.0.as_ref(), other.0.as_ref())
    }
}

impl<S: AsRef<str> + Eq> PartialOrd for NaturalKey<S> {
    fn partial_cmp(
        &self,
        other: &Self,
    ) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Sorts names in place in natural order.
pub fn natural_sort<S: AsRef<str>>(names: &mut [S]) {
    names.sort_by(|a, b| natural_cmp(a.as_ref(), b.as_ref()));
}
