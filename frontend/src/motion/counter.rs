use crate::motion::easing::ease_out_cubic;

/// A statistic such as `"98%"`, `"500+"` or `"4.9★"`, split into the number
/// that gets counted up and the text that trails it.
#[derive(Debug, Clone, PartialEq)]
pub struct StatCounter {
    value: f64,
    suffix: String,
    text: String,
}

impl StatCounter {
    /// `None` when the text does not start with a number.
    pub fn parse(text: &str) -> Option<Self> {
        let value = leading_number(text)?;
        let suffix = text
            .chars()
            .filter(|c| !c.is_ascii_digit() && *c != '.')
            .collect();
        Some(Self {
            value,
            suffix,
            text: text.to_string(),
        })
    }

    /// Text shown at normalized progress `t`.
    pub fn render(&self, t: f64) -> String {
        if t >= 1.0 {
            return self.final_text();
        }
        let current = self.value * ease_out_cubic(t);
        if self.whole_numbers() {
            format!("{}{}", current.round() as i64, self.suffix)
        } else {
            format!("{:.1}{}", current, self.suffix)
        }
    }

    /// The last frame restores the authored text untouched.
    pub fn final_text(&self) -> String {
        self.text.clone()
    }

    fn whole_numbers(&self) -> bool {
        self.suffix == "%" || self.suffix == "+"
    }
}

/// Longest numeric prefix after leading whitespace, like a lenient float
/// parse: `"4.9 stars"` -> 4.9, `"12k"` -> 12.
fn leading_number(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let mut end = 0;
    let mut seen_dot = false;
    let mut seen_digit = false;
    for (i, c) in text.char_indices() {
        match c {
            '+' | '-' if i == 0 => {}
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end = i + c.len_utf8();
    }
    if !seen_digit {
        return None;
    }
    text[..end].trim_end_matches('.').parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_number_and_suffix() {
        let counter = StatCounter::parse("98%").unwrap();
        assert_eq!(counter.final_text(), "98%");

        let counter = StatCounter::parse("4.9★").unwrap();
        assert_eq!(counter.final_text(), "4.9★");

        let counter = StatCounter::parse("150+").unwrap();
        assert_eq!(counter.final_text(), "150+");
    }

    #[test]
    fn only_leading_digits_count() {
        let counter = StatCounter::parse("24/7 support").unwrap();
        assert_eq!(counter.render(0.0), "0.0/ support");
        assert_eq!(
            StatCounter::parse("24/7 support").map(|s| s.final_text()),
            Some("24/7 support".to_string())
        );
        assert!(StatCounter::parse("Unlimited").is_none());
        assert!(StatCounter::parse("").is_none());
        assert!(StatCounter::parse(".").is_none());
    }

    #[test]
    fn percent_and_plus_count_in_whole_numbers() {
        let counter = StatCounter::parse("98%").unwrap();
        assert_eq!(counter.render(0.0), "0%");
        assert_eq!(counter.render(0.5), "86%");
        assert_eq!(counter.render(1.0), "98%");
    }

    #[test]
    fn other_suffixes_show_one_decimal() {
        let counter = StatCounter::parse("4.9★").unwrap();
        assert_eq!(counter.render(0.0), "0.0★");
        assert_eq!(counter.render(0.5), "4.3★");
        assert_eq!(counter.render(1.0), "4.9★");
    }

    #[test]
    fn plain_numbers_end_on_exact_value() {
        let counter = StatCounter::parse("10").unwrap();
        assert_eq!(counter.render(0.25), "5.8");
        assert_eq!(counter.render(1.0), "10");
    }
}
