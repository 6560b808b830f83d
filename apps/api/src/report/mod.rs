//! Downloadable career report, rendered as Markdown.

use chrono::{DateTime, Utc};

use crate::models::profile::CareerResults;

pub const REPORT_CONTENT_TYPE: &str = "text/markdown; charset=utf-8";

/// Renders profile, recommendations and roadmap as one Markdown document.
pub fn render_report(results: &CareerResults, generated_at: DateTime<Utc>) -> String {
    let profile = &results.profile;
    let mut md = format!("# Career Report: {}\n\n", profile.name);

    md.push_str("## Profile\n\n");
    md.push_str(&format!("- **Interests:** {}\n", profile.interests));
    md.push_str(&format!(
        "- **Academic Background:** {}\n",
        profile.academic_background
    ));
    md.push_str(&format!(
        "- **Generated:** {}\n\n",
        generated_at.format("%Y-%m-%d %H:%M UTC")
    ));

    md.push_str("## Top Career Recommendations\n\n");
    for (rank, career) in results.recommendations.iter().enumerate() {
        md.push_str(&format!(
            "### #{} {} ({}% match)\n\n",
            rank + 1,
            career.title,
            career.match_percentage
        ));
        md.push_str(&format!("{}\n\n", career.description));
        if !career.required_skills.is_empty() {
            md.push_str(&format!(
                "- **Required Skills:** {}\n",
                career.required_skills.join(", ")
            ));
        }
        md.push_str(&format!("- **Average Salary:** {}\n\n", career.average_salary));
    }

    md.push_str(&format!(
        "## {}-Week Skill Development Roadmap\n\n",
        results.roadmap.len()
    ));
    for week in &results.roadmap {
        md.push_str(&format!("### Week {}: {}\n\n", week.week, week.title));
        md.push_str("**Tasks to Complete:**\n\n");
        for task in &week.tasks {
            md.push_str(&format!("- [ ] {task}\n"));
        }
        md.push_str("\n**Learning Resources:**\n\n");
        for resource in &week.resources {
            md.push_str(&format!("- {resource}\n"));
        }
        md.push('\n');
    }
    md
}

/// `career-report-<slug>.md`, where the slug is the lower-cased name with
/// runs of non-alphanumerics collapsed to one hyphen.
pub fn report_filename(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_end_matches('-');
    let slug = if slug.is_empty() { "profile" } else { slug };
    format!("career-report-{slug}.md")
}
