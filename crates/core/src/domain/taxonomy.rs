//! The fixed set of questions every course feedback form asks.
//!
//! Sections and their questions are plain data; adding a question only
//! means extending [`FEEDBACK_SECTIONS`].

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackSection {
    pub id: &'static str,
    pub questions: &'static [&'static str],
}

pub const FEEDBACK_SECTIONS: &[FeedbackSection] = &[
    FeedbackSection {
        id: "course_content_section",
        questions: &["course_content", "course_materials", "course_organization"],
    },
    FeedbackSection {
        id: "faculty_evaluation_section",
        questions: &["teaching_quality", "faculty_knowledge", "faculty_availability"],
    },
    FeedbackSection {
        id: "assessment_section",
        questions: &["assessment_fairness", "feedback_quality"],
    },
];

/// Position of a question as `(section index, question index)`.
pub fn locate_question(question_id: &str) -> Option<(usize, usize)> {
    FEEDBACK_SECTIONS
        .iter()
        .enumerate()
        .find_map(|(section_idx, section)| {
            section
                .questions
                .iter()
                .position(|q| *q == question_id)
                .map(|question_idx| (section_idx, question_idx))
        })
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn taxonomy_has_three_sections_and_eight_questions() {
        assert_eq!(FEEDBACK_SECTIONS.len(), 3);

        let total: usize = FEEDBACK_SECTIONS.iter().map(|s| s.questions.len()).sum();
        assert_eq!(total, 8);
    }

    #[test]
    fn every_question_belongs_to_exactly_one_section() {
        let mut seen = HashSet::new();
        for section in FEEDBACK_SECTIONS {
            for question in section.questions {
                assert!(seen.insert(*question), "duplicate question {question}");
            }
        }
    }

    #[test]
    fn questions_are_located_by_id() {
        assert_eq!(locate_question("teaching_quality"), Some((1, 0)));
        assert_eq!(locate_question("feedback_quality"), Some((2, 1)));
        assert_eq!(locate_question("lab_quality"), None);
        assert_eq!(locate_question(""), None);
    }
}
