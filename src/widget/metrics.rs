//! Cumulative login metrics.

/// Login counters since the last reset.
///
/// `total_tries == success_count + fail_count` does not always hold: a login
/// rejected while locked touches no counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttemptMetrics {
    /// Login attempts evaluated (including injected failures).
    pub total_tries: u32,
    /// Successful logins.
    pub success_count: u32,
    /// Wrong credentials plus injected server errors.
    pub fail_count: u32,
}

impl AttemptMetrics {
    /// Success rate as a percentage, rounded to one decimal. Zero when nothing was tried.
    pub fn success_rate(&self) -> f64 {
        if self.total_tries == 0 {
            0.0
        } else {
            let rate = (self.success_count as f64 / self.total_tries as f64) * 100.0;
            (rate * 10.0).round() / 10.0
        }
    }

    /// Format the success rate for display: `0%` before any try, one decimal afterwards.
    pub fn format_success_rate(&self) -> String {
        if self.total_tries == 0 {
            "0%".to_string()
        } else {
            format!("{:.1}%", self.success_rate())
        }
    }

    /// Get success rate color based on performance.
    pub fn success_rate_color(&self) -> ratatui::prelude::Color {
        use ratatui::prelude::Color;
        if self.total_tries == 0 {
            return Color::Gray;
        }
        let rate = self.success_rate();
        if rate >= 75.0 {
            Color::Green
        } else if rate >= 50.0 {
            Color::Yellow
        } else {
            Color::Red
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_rate_is_zero_without_tries() {
        let metrics = AttemptMetrics::default();
        assert_eq!(metrics.success_rate(), 0.0);
        assert_eq!(metrics.format_success_rate(), "0%");
    }

    #[test]
    fn test_success_rate_rounds_to_one_decimal() {
        let metrics = AttemptMetrics {
            total_tries: 3,
            success_count: 1,
            fail_count: 2,
        };
        assert_eq!(metrics.success_rate(), 33.3);
        assert_eq!(metrics.format_success_rate(), "33.3%");

        let metrics = AttemptMetrics {
            total_tries: 3,
            success_count: 2,
            fail_count: 1,
        };
        assert_eq!(metrics.success_rate(), 66.7);
    }

    #[test]
    fn test_full_success_formats_with_decimal() {
        let metrics = AttemptMetrics {
            total_tries: 2,
            success_count: 2,
            fail_count: 0,
        };
        assert_eq!(metrics.format_success_rate(), "100.0%");
    }
}
