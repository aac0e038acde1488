//! Skill feedback: compares extracted skills against the expected dictionary, per category.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::scan::skills::{ExtractedSkills, SkillCategory, SkillDictionary};

/// Matched / missing skills for one category plus a human-readable suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryFeedback {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub suggestion: String,
}

/// Feedback for every category of the required dictionary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeedbackReport(pub BTreeMap<SkillCategory, CategoryFeedback>);

impl FeedbackReport {
    pub fn get(&self, category: SkillCategory) -> Option<&CategoryFeedback> {
        self.0.get(&category)
    }

    /// Number of categories with every expected skill present.
    pub fn complete_categories(&self) -> usize {
        self.0.values().filter(|f| f.missing.is_empty()).count()
    }
}

pub fn generate_feedback(extracted: &ExtractedSkills, required: &SkillDictionary) -> FeedbackReport {
    FeedbackReport(
        required
            .iter()
            .map(|(category, expected)| {
                let matched = extracted.get(category).to_vec();
                let missing: Vec<String> = expected
                    .iter()
                    .filter(|skill| !matched.contains(skill))
                    .cloned()
                    .collect();
                let suggestion = build_suggestion(category, &missing);
                (
                    category,
                    CategoryFeedback {
                        matched,
                        missing,
                        suggestion,
                    },
                )
            })
            .collect(),
    )
}

fn build_suggestion(category: SkillCategory, missing: &[String]) -> String {
    if missing.is_empty() {
        format!("Great job! All expected {category} skills are present.")
    } else {
        format!(
            "Consider improving your {category} by adding: {}.",
            missing.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::skills::extract_skills;
    use std::collections::HashSet;

    #[test]
    fn test_empty_languages_lists_every_language() {
        let required = SkillDictionary::default();
        let report = generate_feedback(&ExtractedSkills::default(), &required);
        let languages = report.get(SkillCategory::Languages).unwrap();

        assert!(languages.matched.is_empty());
        assert_eq!(languages.missing, required.skills(SkillCategory::Languages));
        assert_eq!(
            languages.suggestion,
            "Consider improving your languages by adding: JavaScript, TypeScript, Python, Java, C++, C#, Go, Ruby."
        );
    }

    #[test]
    fn test_complete_category_gets_praise() {
        let required = SkillDictionary::default();
        let text = "Git Docker Jira Figma Photoshop VSCode Postman Excel";
        let report = generate_feedback(&extract_skills(text, &required), &required);
        let software = report.get(SkillCategory::Software).unwrap();

        assert!(software.missing.is_empty());
        assert_eq!(
            software.suggestion,
            "Great job! All expected software skills are present."
        );
        assert_eq!(report.complete_categories(), 1);
    }

    #[test]
    fn test_matched_and_missing_partition_required() {
        let required = SkillDictionary::default();
        let text = "Python and TypeScript developer. React, Redux, Django, PostgreSQL. Leadership, teamwork.";
        let report = generate_feedback(&extract_skills(text, &required), &required);

        assert_eq!(report.0.len(), 5);
        for (category, feedback) in &report.0 {
            let matched: HashSet<_> = feedback.matched.iter().collect();
            let missing: HashSet<_> = feedback.missing.iter().collect();
            let expected: HashSet<_> = required.skills(*category).iter().collect();

            assert!(matched.is_disjoint(&missing), "{category} overlaps");
            assert_eq!(&matched | &missing, expected, "{category} not covered");
        }
    }

    #[test]
    fn test_missing_preserves_dictionary_order() {
        let required = SkillDictionary::default();
        let report = generate_feedback(&extract_skills("Angular, HTML", &required), &required);
        let frontend = report.get(SkillCategory::Frontend).unwrap();

        assert_eq!(frontend.matched, ["HTML", "Angular"]);
        assert_eq!(
            frontend.missing,
            ["React", "Redux", "CSS", "Vue.js", "Next.js", "Tailwind", "Bootstrap"]
        );
        assert!(frontend.suggestion.starts_with("Consider improving your frontend by adding: React"));
    }

    #[test]
    fn test_feedback_serializes_by_category_name() {
        let required = SkillDictionary::default();
        let report = generate_feedback(&ExtractedSkills::default(), &required);
        let value = serde_json::to_value(&report).unwrap();

        assert!(value["backend"]["suggestion"]
            .as_str()
            .unwrap()
            .starts_with("Consider improving your backend"));
        assert_eq!(value["software"]["matched"], serde_json::json!([]));
    }
}
