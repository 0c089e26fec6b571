//! Console rendering of screening results

use crate::catalog::SkillCatalog;
use crate::config::Config;
use crate::processing::ScreeningResult;
use colored::Colorize;

const PREVIEW_CHARS: usize = 300;
const MAX_PRIORITY_DISPLAY: usize = 6;

pub struct ConsoleFormatter {
    show_tips: bool,
}

impl ConsoleFormatter {
    pub fn new(config: &Config) -> Self {
        if !config.output.color {
            colored::control::set_override(false);
        }

        Self {
            show_tips: config.output.show_tips,
        }
    }

    pub fn print_summary(&self, result: &ScreeningResult, catalog: &SkillCatalog) {
        println!("\n{}", "Results Summary".bold());
        println!("  Match Score:    {}%", result.score);
        println!("  Confidence:     {}", self.paint_confidence(result));
        println!("  Skill Coverage: {}%", result.coverage);
        println!("  Missing Skills: {}", result.missing.len());

        println!("\n{}", "Skills Present (by category)".bold());
        let found = catalog.categorize(&result.found);
        if found.is_empty() {
            println!("  {}", "No categorized skills found.".yellow());
        } else {
            for (category, skills) in &found {
                println!("  {}: {}", category.green(), skills.join(", "));
            }
        }

        println!("\n{}", "Skills Missing (by category)".bold());
        let missing = catalog.categorize(&result.missing);
        if missing.is_empty() {
            println!("  {}", "No missing skills detected.".green());
        } else {
            for (category, skills) in &missing {
                println!("  {}: {}", category.red(), skills.join(", "));
            }
        }

        println!("\n{}", "Priority Skills to Improve".bold());
        if result.missing.is_empty() {
            println!("  {}", "No priority missing skills. You're a strong match!".green());
        } else {
            let priority: Vec<&str> = result
                .missing
                .iter()
                .take(MAX_PRIORITY_DISPLAY)
                .map(|s| s.as_str())
                .collect();
            println!("  {}", priority.join(", ").yellow());
        }

        if self.show_tips {
            self.print_tips(result);
        }
    }

    pub fn print_preview(&self, text: &str) {
        println!("\n{}", "Extracted Resume Text (Preview)".bold());
        println!("{}", truncate_text(text, PREVIEW_CHARS));
    }

    fn print_tips(&self, result: &ScreeningResult) {
        println!("\n{}", "Resume Improvement Tips".bold());

        let tips = resume_tips(result);
        if tips.is_empty() {
            println!(
                "  {}",
                "Your resume is strong. Add measurable achievements (numbers, impact).".green()
            );
        } else {
            for tip in tips {
                println!("  - {}", tip);
            }
        }
    }

    fn paint_confidence(&self, result: &ScreeningResult) -> String {
        let label = result.confidence.to_string();
        match label.as_str() {
            "High" => label.green().to_string(),
            "Medium" => label.yellow().to_string(),
            _ => label.red().to_string(),
        }
    }
}

/// Actionable suggestions derived from the screening outcome.
pub fn resume_tips(result: &ScreeningResult) -> Vec<String> {
    let mut tips = Vec::new();

    if result.found.len() < 6 {
        tips.push(
            "Add a dedicated Skills section with clear keywords (Python, SQL, etc.).".to_string(),
        );
    }

    if !result.found.contains("github") {
        tips.push("Add your GitHub link to improve credibility.".to_string());
    }

    if result.score < 60 {
        tips.push(
            "Add more role-specific projects and mention outcomes (accuracy, impact, results)."
                .to_string(),
        );
    }

    if !result.missing.is_empty() {
        tips.push("Learn missing skills and add them in projects (not just in skills list).".to_string());
    }

    tips
}

fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{}...", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::Confidence;
    use std::collections::BTreeSet;

    fn skill_set(skills: &[&str]) -> BTreeSet<String> {
        skills.iter().map(|s| s.to_string()).collect()
    }

    fn result_with(found: &[&str], missing: &[&str], score: u8) -> ScreeningResult {
        let found = skill_set(found);
        let missing = skill_set(missing);
        let required: BTreeSet<String> = found.union(&missing).cloned().collect();
        ScreeningResult {
            role: "Data Scientist".to_string(),
            score,
            coverage: 50,
            confidence: Confidence::classify(score, 50),
            found,
            required,
            missing,
        }
    }

    #[test]
    fn test_tips_for_sparse_resume() {
        let result = result_with(&["python"], &["docker"], 40);
        let tips = resume_tips(&result);

        assert_eq!(tips.len(), 4);
        assert!(tips[0].contains("Skills section"));
        assert!(tips[1].contains("GitHub"));
        assert!(tips[2].contains("role-specific projects"));
        assert!(tips[3].contains("missing skills"));
    }

    #[test]
    fn test_no_tips_for_strong_resume() {
        let result = result_with(
            &["python", "sql", "docker", "pandas", "numpy", "github"],
            &[],
            85,
        );
        assert!(resume_tips(&result).is_empty());
    }

    #[test]
    fn test_github_tip_suppressed_when_present() {
        let result = result_with(
            &["python", "sql", "docker", "pandas", "numpy", "github", "aws"],
            &["kubernetes"],
            70,
        );
        let tips = resume_tips(&result);
        assert!(!tips.iter().any(|t| t.contains("GitHub")));
        assert_eq!(tips.len(), 1);
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("abcdefghij", 5), "abcde...");
    }
}
