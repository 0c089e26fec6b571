//! Plain-text screening report
//!
//! The template below is a compatibility surface: section separators,
//! ordering and the "None" placeholders must stay byte-for-byte stable.

use crate::processing::ScreeningResult;
use chrono::{DateTime, Local};
use std::collections::BTreeSet;

const SECTION_SEPARATOR: &str = "-----------------------------------------";
const MAX_PRIORITY_SKILLS: usize = 8;

pub struct ReportFormatter {
    model_label: String,
}

impl ReportFormatter {
    pub fn new(model_label: impl Into<String>) -> Self {
        Self {
            model_label: model_label.into(),
        }
    }

    /// Render the full report. The timestamp is passed in so the output
    /// is a pure function of its arguments.
    pub fn render(&self, result: &ScreeningResult, generated_at: DateTime<Local>) -> String {
        let now = generated_at.format("%Y-%m-%d %H:%M:%S");

        let suggestions = if result.missing.is_empty() {
            "Great match! Add measurable achievements and strong projects.".to_string()
        } else {
            let priority: Vec<&str> = result
                .missing
                .iter()
                .take(MAX_PRIORITY_SKILLS)
                .map(|s| s.as_str())
                .collect();
            format!("Priority skills to learn: {}", priority.join(", "))
        };

        format!(
            "AI RESUME SCREENER REPORT\n\
             Generated on: {now}\n\
             \n\
             Model Used: {model}\n\
             Job Role: {role}\n\
             \n\
             {sep}\n\
             Overall Match Score: {score}%\n\
             Skill Coverage: {coverage}%\n\
             \n\
             {sep}\n\
             Required Skills (from JD):\n\
             {required}\n\
             \n\
             {sep}\n\
             Matched Skills:\n\
             {found}\n\
             \n\
             {sep}\n\
             Missing Skills:\n\
             {missing}\n\
             \n\
             {sep}\n\
             Suggestions:\n\
             {suggestions}",
            now = now,
            model = self.model_label,
            role = result.role,
            sep = SECTION_SEPARATOR,
            score = result.score,
            coverage = result.coverage,
            required = join_or_none(&result.required),
            found = join_or_none(&result.found),
            missing = join_or_none(&result.missing),
            suggestions = suggestions,
        )
    }
}

fn join_or_none(skills: &BTreeSet<String>) -> String {
    if skills.is_empty() {
        "None".to_string()
    } else {
        skills
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::Confidence;
    use chrono::TimeZone;

    fn skill_set(skills: &[&str]) -> BTreeSet<String> {
        skills.iter().map(|s| s.to_string()).collect()
    }

    fn sample_result() -> ScreeningResult {
        ScreeningResult {
            role: "Data Scientist".to_string(),
            score: 72,
            coverage: 66,
            confidence: Confidence::Medium,
            found: skill_set(&["python", "sql"]),
            required: skill_set(&["docker", "python", "sql"]),
            missing: skill_set(&["docker"]),
        }
    }

    fn fixed_timestamp() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 15, 10, 30, 0).unwrap()
    }

    #[test]
    fn test_report_is_byte_stable() {
        let formatter = ReportFormatter::new("Model2Vec (M2V_base_output)");
        let report = formatter.render(&sample_result(), fixed_timestamp());

        let expected = "AI RESUME SCREENER REPORT\n\
                        Generated on: 2024-03-15 10:30:00\n\
                        \n\
                        Model Used: Model2Vec (M2V_base_output)\n\
                        Job Role: Data Scientist\n\
                        \n\
                        -----------------------------------------\n\
                        Overall Match Score: 72%\n\
                        Skill Coverage: 66%\n\
                        \n\
                        -----------------------------------------\n\
                        Required Skills (from JD):\n\
                        docker, python, sql\n\
                        \n\
                        -----------------------------------------\n\
                        Matched Skills:\n\
                        python, sql\n\
                        \n\
                        -----------------------------------------\n\
                        Missing Skills:\n\
                        docker\n\
                        \n\
                        -----------------------------------------\n\
                        Suggestions:\n\
                        Priority skills to learn: docker";

        assert_eq!(report, expected);
    }

    #[test]
    fn test_separator_is_41_dashes() {
        assert_eq!(SECTION_SEPARATOR.len(), 41);
        assert!(SECTION_SEPARATOR.chars().all(|c| c == '-'));
    }

    #[test]
    fn test_empty_lists_render_none_placeholder() {
        let mut result = sample_result();
        result.found = BTreeSet::new();
        result.required = BTreeSet::new();
        result.missing = BTreeSet::new();

        let formatter = ReportFormatter::new("test-model");
        let report = formatter.render(&result, fixed_timestamp());

        assert!(report.contains("Required Skills (from JD):\nNone\n"));
        assert!(report.contains("Matched Skills:\nNone\n"));
        assert!(report.contains("Missing Skills:\nNone\n"));
    }

    #[test]
    fn test_no_missing_skills_encourages() {
        let mut result = sample_result();
        result.missing = BTreeSet::new();

        let formatter = ReportFormatter::new("test-model");
        let report = formatter.render(&result, fixed_timestamp());

        assert!(report
            .ends_with("Suggestions:\nGreat match! Add measurable achievements and strong projects."));
    }

    #[test]
    fn test_suggestions_cap_at_eight_missing_skills() {
        let mut result = sample_result();
        result.missing = skill_set(&[
            "airflow", "aws", "azure", "docker", "kafka", "kubernetes", "linux", "mysql", "spark",
            "tableau",
        ]);

        let formatter = ReportFormatter::new("test-model");
        let report = formatter.render(&result, fixed_timestamp());

        let suggestion_line = report.lines().last().unwrap();
        assert_eq!(
            suggestion_line,
            "Priority skills to learn: airflow, aws, azure, docker, kafka, kubernetes, linux, mysql"
        );
    }

    #[test]
    fn test_report_has_no_edge_whitespace() {
        let formatter = ReportFormatter::new("test-model");
        let report = formatter.render(&sample_result(), fixed_timestamp());
        assert_eq!(report, report.trim());
    }
}
