//! Helpers which are not linked to the domain

use std::ops::{Div, Rem};

/// Split off the first or the last character of a string
pub(crate) trait StripChar {
    /// Split into the first character and the rest of the string
    fn split_first(&self) -> Option<(char, &str)>;
    /// Split into the last character and the rest of the string
    fn split_last(&self) -> Option<(&str, char)>;
}

impl StripChar for str {
    fn split_first(&self) -> Option<(char, &str)> {
        let mut chars = self.chars();
        chars.next().map(|head| (head, chars.as_str()))
    }

    fn split_last(&self) -> Option<(&str, char)> {
        let mut chars = self.chars();
        chars.next_back().map(|tail| (chars.as_str(), tail))
    }
}

/// Division and remainder in one step
pub fn div_mod<T>(divider: T, divisor: T) -> (T, T)
where
    T: Copy + Div<Output = T> + Rem<Output = T>,
{
    (divider / divisor, divider % divisor)
}
