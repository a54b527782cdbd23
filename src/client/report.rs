use super::session::AnalysisOutcome;
use chrono::{DateTime, Utc};

/// Formats a result as the plain-text report offered for download.
pub fn render_report(outcome: &AnalysisOutcome, file_name: Option<&str>) -> String {
    format!(
        "=== IMAGE ANALYSIS REPORT ===\n\
         Mode: {}\n\
         Model: {}\n\
         Time: {}\n\
         File: {}\n\
         \n\
         === ANALYSIS RESULT ===\n\
         {}\n\
         \n\
         ---\n\
         Generated by vision-relay\n",
        outcome.mode,
        outcome.model,
        outcome.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
        file_name.unwrap_or("(unknown)"),
        outcome.analysis,
    )
}

pub(crate) fn report_file_name(at: DateTime<Utc>) -> String {
    format!("vision_analysis_{}.txt", at.timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn outcome() -> AnalysisOutcome {
        AnalysisOutcome {
            mode: "General analysis".to_string(),
            analysis: "A red square.".to_string(),
            timestamp: Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap(),
            model: "Llama 4 Scout Vision".to_string(),
        }
    }

    #[test]
    fn report_contains_all_fields() {
        let report = render_report(&outcome(), Some("photo.png"));
        assert!(report.contains("Mode: General analysis"));
        assert!(report.contains("Model: Llama 4 Scout Vision"));
        assert!(report.contains("Time: 2026-01-02 03:04:05 UTC"));
        assert!(report.contains("File: photo.png"));
        assert!(report.contains("A red square."));
    }

    #[test]
    fn missing_file_name_gets_placeholder() {
        let report = render_report(&outcome(), None);
        assert!(report.contains("File: (unknown)"));
    }

    #[test]
    fn file_name_is_timestamped() {
        let at = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(
            report_file_name(at),
            format!("vision_analysis_{}.txt", at.timestamp_millis())
        );
    }
}
