const FILLED: char = '█';
const EMPTY: char = '░';

/// Horizontal bar for `value` scaled against `max`, `width` cells wide.
///
/// Negative values and a non-positive `max` produce an empty bar.
pub fn bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 && value > 0.0 {
        let ratio = (value / max).min(1.0);
        (ratio * width as f64).round() as usize
    } else {
        0
    };

    let mut out = String::with_capacity(width * 3);
    out.extend(std::iter::repeat_n(FILLED, filled));
    out.extend(std::iter::repeat_n(EMPTY, width - filled));
    out
}
