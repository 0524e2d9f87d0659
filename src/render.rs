// Progress bars and boxed section headers

/// Reserved percent value meaning "no meaningful percentage"; the bar
/// renders a centered placeholder instead of a fill.
pub const NOT_AVAILABLE: i32 = -1;

pub const DEFAULT_BAR_WIDTH: usize = 50;

const FILLED: char = '|';
const EMPTY: char = '-';
const PLACEHOLDER: &str = "Not Available";

/// Renders a fixed-width bracketed bar for `percent` in [0, 100], or the
/// "Not Available" placeholder for [`NOT_AVAILABLE`]. Callers round and
/// clamp the percentage; the fill count is `width * percent / 100`.
pub fn progress_bar(percent: i32, width: usize) -> String {
    let mut bar = String::with_capacity(width + 2);
    bar.push('[');
    if percent == NOT_AVAILABLE {
        // Center the label; an odd leftover leaves the extra char on the right.
        let filler = width.saturating_sub(PLACEHOLDER.len());
        let left = filler / 2;
        bar.extend(std::iter::repeat_n(EMPTY, left));
        bar.push_str(PLACEHOLDER);
        bar.extend(std::iter::repeat_n(EMPTY, filler - left));
    } else {
        let filled = width * percent as usize / 100;
        bar.extend(std::iter::repeat_n(FILLED, filled));
        bar.extend(std::iter::repeat_n(EMPTY, width - filled));
    }
    bar.push(']');
    bar
}

/// Three-line `#` box around a section name:
/// ```text
/// ###################
/// ##   Processor   ##
/// ###################
/// ```
pub fn section_header(name: &str) -> [String; 3] {
    let rule = "#".repeat(name.len() + 10);
    let title = format!("##   {name}   ##");
    [rule.clone(), title, rule]
}
