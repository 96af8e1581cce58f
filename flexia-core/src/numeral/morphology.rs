//! Numeral-noun agreement
//!
//! East Slavic nouns take one of three forms after a number: the "one"
//! form after 1, 21, 101; the "few" form after 2-4, 22-24; the "many" form
//! otherwise. 11-14 take "many" even though they end in 1-4.

/// Agreement class of a number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Plurality {
    One,
    Few,
    Many,
}

impl Plurality {
    /// Agreement class for `n`
    pub fn of(n: u64) -> Self {
        let n100 = n % 100;
        let n10 = n % 10;

        if n100 > 10 && n100 < 20 {
            Plurality::Many
        } else if n10 > 1 && n10 < 5 {
            Plurality::Few
        } else if n10 == 1 {
            Plurality::One
        } else {
            Plurality::Many
        }
    }
}

/// Pick the form of a noun agreeing with `n`
///
/// ```rust
/// use flexia_core::inflect;
///
/// assert_eq!(inflect(21, "год", "года", "лет"), "год");
/// assert_eq!(inflect(11, "год", "года", "лет"), "лет");
/// ```
pub fn inflect<'a>(n: u64, one: &'a str, few: &'a str, many: &'a str) -> &'a str {
    match Plurality::of(n) {
        Plurality::One => one,
        Plurality::Few => few,
        Plurality::Many => many,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_teens_override_unit_digit() {
        for n in 11..=19 {
            assert_eq!(Plurality::of(n), Plurality::Many, "n = {n}");
            assert_eq!(Plurality::of(100 + n), Plurality::Many, "n = {}", 100 + n);
        }
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(inflect(11, "one", "few", "many"), "many");
        assert_eq!(inflect(21, "one", "few", "many"), "one");
        assert_eq!(inflect(22, "one", "few", "many"), "few");
        assert_eq!(inflect(25, "one", "few", "many"), "many");
    }

    #[test]
    fn test_small_numbers() {
        assert_eq!(Plurality::of(0), Plurality::Many);
        assert_eq!(Plurality::of(1), Plurality::One);
        assert_eq!(Plurality::of(2), Plurality::Few);
        assert_eq!(Plurality::of(4), Plurality::Few);
        assert_eq!(Plurality::of(5), Plurality::Many);
        assert_eq!(Plurality::of(10), Plurality::Many);
        assert_eq!(Plurality::of(20), Plurality::Many);
    }

    #[test]
    fn test_large_numbers() {
        assert_eq!(Plurality::of(101), Plurality::One);
        assert_eq!(Plurality::of(111), Plurality::Many);
        assert_eq!(Plurality::of(1_000_003), Plurality::Few);
        assert_eq!(Plurality::of(u64::MAX), Plurality::Many);
    }
}
