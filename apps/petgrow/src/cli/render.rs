//! Plain-text rendering of progress bars and tables for the terminal.

/// Default bar width in cells.
pub const BAR_WIDTH: usize = 20;

/// Draw `percent` as a bar of `width` cells.
///
/// The percentage is taken as computed by the core; cells are only rounded.
pub fn progress_bar(percent: f64, width: usize) -> String {
    let filled = ((percent / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!(
        "[{}{}] {:>5.1}%",
        "#".repeat(filled),
        "-".repeat(width - filled),
        percent
    )
}

/// Format a point total without a trailing `.0` for whole numbers.
pub fn format_points(points: f64) -> String {
    if points.fract() == 0.0 && points.abs() < 1e15 {
        format!("{}", points as i64)
    } else {
        format!("{:.2}", points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_empty_half_full() {
        assert_eq!(progress_bar(0.0, 10), "[----------]   0.0%");
        assert_eq!(progress_bar(50.0, 10), "[#####-----]  50.0%");
        assert_eq!(progress_bar(100.0, 10), "[##########] 100.0%");
    }

    #[test]
    fn points_formatting() {
        assert_eq!(format_points(20.0), "20");
        assert_eq!(format_points(-3.0), "-3");
        assert_eq!(format_points(12.5), "12.50");
    }
}
