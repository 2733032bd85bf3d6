//! Meal entries and calorie arithmetic.

/// One logged meal. The calorie text is kept as typed; it is only interpreted when the total is
/// computed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
    pub meal: String,
    pub calories: String,
}

impl Row {
    pub fn new(meal: impl Into<String>, calories: impl Into<String>) -> Self {
        Self {
            meal: meal.into(),
            calories: calories.into(),
        }
    }

    /// Calories of this row, `None` when the text has no numeric prefix.
    pub fn calories_value(&self) -> Option<f64> {
        parse_calories(&self.calories)
    }
}

/// Sum of every row whose calorie text parses; the rest count as zero.
///
/// Starts from `+0.0`, so an empty or all-invalid table displays as `0`, not `-0`.
pub fn total_calories(rows: &[Row]) -> f64 {
    rows.iter()
        .filter_map(Row::calories_value)
        .fold(0.0, |total, calories| total + calories)
}

/// Parses the longest leading decimal number of `text`, after skipping leading whitespace.
///
/// Accepts an optional sign, digits with an optional fraction (`"5."` and `".5"` included) and
/// an optional exponent, or a signed `Infinity`. Trailing garbage is ignored, so `"12 kcal"` is
/// 12. Values too large for `f64` become infinite.
pub fn parse_calories(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    if s[end..].starts_with(INFINITY) {
        let sign = if bytes.first() == Some(&b'-') { -1.0 } else { 1.0 };
        return Some(sign * f64::INFINITY);
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse::<f64>().ok()
}

const INFINITY: &str = "Infinity";

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
