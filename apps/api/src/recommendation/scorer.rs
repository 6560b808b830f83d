//! Heuristic career scorer.
//!
//! Algorithm:
//! 1. Lower-case interests and academic background (plain substring matching,
//!    no tokenization or stemming).
//! 2. Start every catalog entry at its base score.
//! 3. Add the bonus of every rule whose trigger appears in its field and whose
//!    target fragment appears in the career title.
//! 4. Clamp to `MATCH_CEILING`.
//! 5. Stable sort descending, keep the top `TOP_RECOMMENDATIONS`.

use crate::models::career::CareerRecommendation;
use crate::models::profile::CareerProfile;
use crate::recommendation::catalog::{BonusRule, ProfileField, BONUS_RULES, CATALOG};

/// Heuristic scores never reach 100.
pub const MATCH_CEILING: u8 = 98;
pub const TOP_RECOMMENDATIONS: usize = 3;

/// Ranks the catalog against a profile and returns the top three matches.
///
/// Total: blank fields just produce base scores.
pub fn score(profile: &CareerProfile) -> Vec<CareerRecommendation> {
    let interests = profile.interests.to_lowercase();
    let academic = profile.academic_background.to_lowercase();

    let mut scored: Vec<CareerRecommendation> = CATALOG
        .iter()
        .map(|career| {
            let raw = BONUS_RULES
                .iter()
                .filter(|rule| rule_applies(rule, career.title, &interests, &academic))
                .fold(u32::from(career.base_match), |acc, rule| {
                    acc + u32::from(rule.bonus)
                });
            career.to_recommendation(clamp_match(raw))
        })
        .collect();

    // `sort_by` is stable, so equal scores keep catalog order.
    scored.sort_by(|a, b| b.match_percentage.cmp(&a.match_percentage));
    scored.truncate(TOP_RECOMMENDATIONS);
    scored
}

fn rule_applies(rule: &BonusRule, title: &str, interests: &str, academic: &str) -> bool {
    let text = match rule.field {
        ProfileField::Interests => interests,
        ProfileField::AcademicBackground => academic,
    };
    rule.triggered_by(text) && rule.targets_title(title)
}

fn clamp_match(raw: u32) -> u8 {
    raw.min(u32::from(MATCH_CEILING)) as u8
}
