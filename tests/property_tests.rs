//! Property tests for the visit summarizer
//!
//! Notes are drawn from a small pool of realistic fragments so the
//! generated histories exercise every lexicon, plus arbitrary text.

use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;
use visit_summarizer_core::summarizer::RecencyWeighter;
use visit_summarizer_core::{
    EngagementLevel, NarrativeStyle, SummarizerBuilder, Trajectory, VisitSummarizer,
};

const FRAGMENTS: &[&str] = &[
    "NC",
    "",
    "   ",
    "Aceptó el folleto con mucho interés",
    "Rechazó la invitación",
    "No quiere saber nada",
    "Pidió no molestar",
    "Preguntó por la biblia",
    "Quiere que volvamos la próxima semana",
    "Revisita de Pedro",
    "Estaba ocupado",
    "Escuchó muy bien. Habló de su familia",
    "Dijo hola",
    "Le dejé una revista",
];

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

fn note() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => prop::sample::select(FRAGMENTS).prop_map(String::from),
        1 => "[a-záéíóúñ .,!?]{0,40}",
    ]
}

fn history() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(note(), 0..12)
}

fn summarize(notes: &[String]) -> VisitSummarizer {
    SummarizerBuilder::new().with_now(now()).build(notes, None)
}

fn is_visit(note: &str) -> bool {
    let trimmed = note.trim();
    !trimmed.is_empty() && trimmed != "NC"
}

proptest! {
    #[test]
    fn visit_count_matches_contacted_notes(notes in history()) {
        let summarizer = summarize(&notes);
        let expected = notes.iter().filter(|n| is_visit(n)).count();

        prop_assert_eq!(summarizer.relationship().visit_count, expected);
        prop_assert_eq!(summarizer.processed_notes().len(), expected);
        prop_assert_eq!(summarizer.visit_contexts().len(), expected);
    }

    #[test]
    fn single_positive_visit_is_moderate(note in note()) {
        let summarizer = summarize(&[note]);
        let model = summarizer.relationship();

        if model.visit_count == 1 && model.last_sentiment() > 0.3 {
            prop_assert_eq!(model.engagement_level, EngagementLevel::Moderate);
        }
    }

    #[test]
    fn trajectory_stable_below_three_visits(notes in prop::collection::vec(note(), 0..3)) {
        let summarizer = summarize(&notes);
        prop_assert_eq!(summarizer.relationship().trajectory, Trajectory::Stable);
    }

    #[test]
    fn trajectory_never_fluctuating(notes in history()) {
        let summarizer = summarize(&notes);
        prop_assert_ne!(summarizer.relationship().trajectory, Trajectory::Fluctuating);
    }

    #[test]
    fn sentiment_stays_in_range(notes in history()) {
        let summarizer = summarize(&notes);
        for processed in summarizer.processed_notes() {
            // Notes average their sentences, allow for rounding
            let score = processed.sentiment.score;
            let intensity = processed.sentiment.intensity;
            prop_assert!(score >= -1.0 - 1e-9 && score <= 1.0 + 1e-9);
            prop_assert!(intensity >= 0.1 - 1e-9 && intensity <= 1.0 + 1e-9);
        }
    }

    #[test]
    fn review_list_never_holds_intents(notes in history()) {
        let summarizer = summarize(&notes);
        let flagged = summarizer.notes_to_review();

        for processed in summarizer.processed_notes() {
            if !processed.intents.is_empty() || !processed.sentiment.is_ambiguous {
                prop_assert!(!flagged.contains(&processed.original.as_str()));
            }
        }
    }

    #[test]
    fn recency_weight_is_non_increasing(a in 0.0f64..500.0, b in 0.0f64..500.0) {
        let weighter = RecencyWeighter::default();
        let (younger, older) = if a <= b { (a, b) } else { (b, a) };

        let w_young = weighter.weight_for_age(younger);
        let w_old = weighter.weight_for_age(older);
        prop_assert!(w_old <= w_young);
        prop_assert!(w_old > 0.0 && w_young < 2.0);
    }

    #[test]
    fn recency_weight_below_one_after_thirty_days(days in 31i64..400) {
        let weighter = RecencyWeighter::default();
        let weight = weighter.weight_at(now() - Duration::days(days), now());
        prop_assert!(weight < 1.0);
    }

    #[test]
    fn analysis_is_deterministic(notes in history(), seed in any::<u64>()) {
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let first = summarize(&notes);
        let second = summarize(&notes);
        prop_assert_eq!(first.relationship(), second.relationship());
        prop_assert_eq!(first.notes_to_review(), second.notes_to_review());

        for style in NarrativeStyle::ALL {
            let a = first.generate_narrative_with(style, &mut StdRng::seed_from_u64(seed));
            let b = second.generate_narrative_with(style, &mut StdRng::seed_from_u64(seed));
            prop_assert_eq!(a, b);
        }
    }

    #[test]
    fn narrative_is_never_empty(notes in history(), seed in any::<u64>()) {
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let summarizer = summarize(&notes);
        let mut rng = StdRng::seed_from_u64(seed);
        for style in NarrativeStyle::ALL {
            prop_assert!(!summarizer.generate_narrative_with(style, &mut rng).is_empty());
        }
    }
}

#[test]
fn recency_weight_is_exactly_one_at_thirty_days() {
    let weighter = RecencyWeighter::default();
    assert_eq!(weighter.weight_at(now() - Duration::days(30), now()), 1.0);
}
