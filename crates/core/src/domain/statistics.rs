//! Read-side aggregation of feedback submissions into per-question
//! statistics. Nothing here is persisted; reports are rebuilt on every read.

use chrono::{DateTime, Utc};

use super::taxonomy::{FEEDBACK_SECTIONS, locate_question};
use super::{FeedbackSubmission, QuestionRating, Rating};

pub const ANONYMOUS_STUDENT: &str = "Anonymous";

const HISTOGRAM_SLOTS: usize = (Rating::MAX - Rating::MIN + 1) as usize;

/// A submission paired with the display identifier of its author, if the
/// author could be resolved.
#[derive(Debug, Clone, Copy)]
pub struct AttributedFeedback<'a> {
    pub student_label: Option<&'a str>,
    pub submission: &'a FeedbackSubmission,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuestionStatistics {
    pub question_id: &'static str,
    pub average: f64,
    pub total_responses: u32,
    /// Response counts for ratings 1 through 5, in that order.
    pub distribution: [u32; HISTOGRAM_SLOTS],
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionStatistics {
    pub id: &'static str,
    pub questions: Vec<QuestionStatistics>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackResponse {
    pub student: String,
    pub ratings: Vec<QuestionRating>,
    pub comments: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackReport {
    pub total_feedbacks: usize,
    pub sections: Vec<SectionStatistics>,
    pub responses: Vec<FeedbackResponse>,
}

#[derive(Default)]
struct Bucket {
    sum: u32,
    count: u32,
    distribution: [u32; HISTOGRAM_SLOTS],
}

impl Bucket {
    fn record(&mut self, rating: Rating) {
        self.sum += u32::from(rating.value());
        self.count += 1;
        self.distribution[rating.bucket()] += 1;
    }

    fn finish(self, question_id: &'static str) -> QuestionStatistics {
        let average = if self.count > 0 {
            round_to_cents(f64::from(self.sum) / f64::from(self.count))
        } else {
            0.0
        };

        QuestionStatistics {
            question_id,
            average,
            total_responses: self.count,
            distribution: self.distribution,
        }
    }
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Folds submissions into one bucket per taxonomy question. Ratings for
/// questions outside the taxonomy are skipped.
pub fn aggregate<'a, I>(submissions: I) -> FeedbackReport
where
    I: IntoIterator<Item = AttributedFeedback<'a>>,
{
    let mut buckets: Vec<Vec<Bucket>> = FEEDBACK_SECTIONS
        .iter()
        .map(|section| section.questions.iter().map(|_| Bucket::default()).collect())
        .collect();
    let mut responses = Vec::new();

    for entry in submissions {
        for rating in &entry.submission.ratings {
            if let Some((section_idx, question_idx)) = locate_question(&rating.question_id) {
                buckets[section_idx][question_idx].record(rating.rating);
            }
        }

        responses.push(FeedbackResponse {
            student: entry.student_label.unwrap_or(ANONYMOUS_STUDENT).to_string(),
            ratings: entry.submission.ratings.clone(),
            comments: entry.submission.comments.clone(),
            created_at: entry.submission.created_at,
        });
    }

    let sections = FEEDBACK_SECTIONS
        .iter()
        .zip(buckets)
        .map(|(section, section_buckets)| SectionStatistics {
            id: section.id,
            questions: section
                .questions
                .iter()
                .zip(section_buckets)
                .map(|(question_id, bucket)| bucket.finish(*question_id))
                .collect(),
        })
        .collect();

    FeedbackReport {
        total_feedbacks: responses.len(),
        sections,
        responses,
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::domain::{CourseId, FacultyId, FeedbackId, StudentId};

    fn submission(ratings: &[(&str, u8)], comments: &str) -> FeedbackSubmission {
        let at = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();
        FeedbackSubmission {
            id: FeedbackId::new(),
            student_id: StudentId::new(),
            faculty_id: FacultyId::new(),
            course_id: CourseId::new(),
            ratings: ratings
                .iter()
                .map(|(q, r)| QuestionRating::new(*q, Rating::new(*r).unwrap()))
                .collect(),
            comments: comments.to_string(),
            is_active: true,
            created_at: at,
            updated_at: at,
        }
    }

    fn attributed<'a>(
        subs: &'a [FeedbackSubmission],
        labels: &'a [Option<&'a str>],
    ) -> impl Iterator<Item = AttributedFeedback<'a>> {
        subs.iter()
            .zip(labels.iter())
            .map(|(submission, label)| AttributedFeedback {
                student_label: *label,
                submission,
            })
    }

    fn question<'r>(report: &'r FeedbackReport, id: &str) -> &'r QuestionStatistics {
        report
            .sections
            .iter()
            .flat_map(|s| s.questions.iter())
            .find(|q| q.question_id == id)
            .expect("question should be present")
    }

    #[test]
    fn two_teaching_quality_ratings_average_to_four_and_a_half() {
        let subs = [
            submission(&[("teaching_quality", 5)], "a"),
            submission(&[("teaching_quality", 4)], "b"),
        ];
        let report = aggregate(attributed(&subs, &[Some("CS20B001"), Some("CS20B002")]));

        let stats = question(&report, "teaching_quality");
        assert_eq!(stats.average, 4.5);
        assert_eq!(stats.total_responses, 2);
        assert_eq!(stats.distribution, [0, 0, 0, 1, 1]);
        assert_eq!(report.total_feedbacks, 2);
    }

    #[test]
    fn empty_input_yields_zeroed_buckets_for_every_question() {
        let report = aggregate(std::iter::empty());

        assert_eq!(report.total_feedbacks, 0);
        assert!(report.responses.is_empty());
        assert_eq!(report.sections.len(), FEEDBACK_SECTIONS.len());
        for section in &report.sections {
            for q in &section.questions {
                assert_eq!(q.average, 0.0);
                assert_eq!(q.total_responses, 0);
                assert_eq!(q.distribution, [0; 5]);
            }
        }
    }

    #[test]
    fn histogram_totals_match_counts_and_means_stay_in_range() {
        let subs = [
            submission(&[("course_content", 1), ("course_materials", 3)], ""),
            submission(&[("course_content", 2), ("assessment_fairness", 5)], ""),
            submission(&[("course_content", 5), ("course_materials", 4)], ""),
        ];
        let report = aggregate(attributed(&subs, &[None, None, None]));

        for q in report.sections.iter().flat_map(|s| s.questions.iter()) {
            assert_eq!(q.distribution.iter().sum::<u32>(), q.total_responses);
            if q.total_responses > 0 {
                assert!((1.0..=5.0).contains(&q.average), "{} out of range", q.question_id);
            } else {
                assert_eq!(q.average, 0.0);
            }
        }
        assert_eq!(question(&report, "course_content").average, 2.67);
    }

    #[test]
    fn unknown_questions_are_ignored() {
        let subs = [submission(&[("lab_quality", 2), ("feedback_quality", 3)], "")];
        let report = aggregate(attributed(&subs, &[Some("CS1")]));

        let counted: u32 = report
            .sections
            .iter()
            .flat_map(|s| s.questions.iter())
            .map(|q| q.total_responses)
            .sum();
        assert_eq!(counted, 1);
        // the raw response still carries every rating
        assert_eq!(report.responses[0].ratings.len(), 2);
    }

    #[test]
    fn responses_keep_input_order_and_fall_back_to_anonymous() {
        let subs = [
            submission(&[("course_content", 4)], "first"),
            submission(&[("course_content", 3)], "second"),
        ];
        let report = aggregate(attributed(&subs, &[None, Some("CS20B002")]));

        assert_eq!(report.responses[0].student, ANONYMOUS_STUDENT);
        assert_eq!(report.responses[0].comments, "first");
        assert_eq!(report.responses[1].student, "CS20B002");
        assert_eq!(report.responses[1].created_at, subs[1].created_at);
    }

    #[test]
    fn aggregation_is_repeatable() {
        let subs = [
            submission(&[("teaching_quality", 2), ("faculty_knowledge", 5)], "x"),
            submission(&[("teaching_quality", 3)], "y"),
        ];
        let labels = [Some("A"), None];

        let first = aggregate(attributed(&subs, &labels));
        let second = aggregate(attributed(&subs, &labels));

        assert_eq!(first, second);
    }
}
