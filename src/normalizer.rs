use once_cell::sync::Lazy;
use regex::Regex;

// Markup, links, digit runs and Latin runs are dropped outright.
static NOISE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<[^>]+>|https?://\S+|\d+|[a-zA-Z]+").expect("valid noise regex")
});
// Everything outside the CJK unified ideograph block becomes a space.
static NON_CJK_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\x{4e00}-\x{9fa5}]").expect("valid non-CJK regex"));
static WHITESPACE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Returns true for the ideographs kept by [`normalize`].
#[inline]
pub fn is_cjk(ch: char) -> bool {
    ('\u{4e00}'..='\u{9fa5}').contains(&ch)
}

/// Reduces raw text to CJK ideographs separated by single spaces.
///
/// Tags, URLs, digits and Latin letters are removed, every other non-CJK character is
/// replaced by a space, whitespace runs are collapsed and both ends trimmed.
/// The function is idempotent and never fails.
///
/// ```rust
/// use zhtext_rs::normalizer::normalize;
///
/// assert_eq!(normalize("我爱北京天安门，他爱上海东方明珠。"), "我爱北京天安门 他爱上海东方明珠");
/// assert_eq!(normalize("<p>abc 123</p>"), "");
/// ```
pub fn normalize(text: &str) -> String {
    let stripped = NOISE_REGEX.replace_all(text, "");
    let spaced = NON_CJK_REGEX.replace_all(&stripped, " ");
    WHITESPACE_REGEX
        .replace_all(&spaced, " ")
        .trim()
        .to_string()
}

/// Splits normalized text into its space-free CJK runs with their byte offsets.
pub fn cjk_runs(normalized: &str) -> Vec<(usize, &str)> {
    let mut runs = Vec::new();
    let mut start: Option<usize> = None;

    for (idx, ch) in normalized.char_indices() {
        match (is_cjk(ch), start) {
            (true, None) => start = Some(idx),
            (false, Some(s)) => {
                runs.push((s, &normalized[s..idx]));
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        runs.push((s, &normalized[s..]));
    }

    runs
}
