//! Lexicon tables, compiled patterns and phrase banks

pub mod dictionaries;
pub mod patterns;
pub mod phrases;

pub use dictionaries::{
    IntentLexicon, KeywordMatch, PhraseBoost, RestrictionPhrases, SentimentLexicon, StopWords,
    TopicLexicon, Trigger,
};
pub use patterns::NotePatterns;
pub use phrases::PhraseCategory;
