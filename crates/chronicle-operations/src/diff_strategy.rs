use std::fmt;

/// Changed-line count above which only the diff statistics are sent.
pub const DEFAULT_MAX_DIFF_LINES: usize = 2000;

/// How much of the code change is included in a generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffStrategy {
    FullDiff,
    StatOnly,
}

impl DiffStrategy {
    /// Full diff when `total_changed_lines` is at most `threshold`.
    #[must_use]
    pub fn select(total_changed_lines: usize, threshold: usize) -> Self {
        if total_changed_lines <= threshold {
            Self::FullDiff
        } else {
            Self::StatOnly
        }
    }

    #[must_use]
    pub fn includes_full_diff(self) -> bool {
        self == Self::FullDiff
    }
}

impl fmt::Display for DiffStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FullDiff => write!(f, "full diff"),
            Self::StatOnly => write!(f, "stat-only"),
        }
    }
}

/// Sums every `<N> insertion(s)` and `<N> deletion(s)` figure in a diff stat.
///
/// Text without such figures counts as zero.
#[must_use]
pub fn count_changed_lines(diff_stat: &str) -> usize {
    let tokens: Vec<&str> = diff_stat.split_whitespace().collect();

    tokens
        .windows(2)
        .filter(|pair| pair[1].starts_with("insertion") || pair[1].starts_with("deletion"))
        .filter_map(|pair| pair[0].parse::<usize>().ok())
        .sum()
}
