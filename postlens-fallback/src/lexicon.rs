//! Sentiment and audience keyword lexicons.
//!
//! Small, fixed word lists driving the heuristic analyzer. Matching is
//! case-insensitive on whole words.

/// Words counted as positive signals.
pub const POSITIVE_WORDS: &[&str] = &[
    "achieved",
    "amazing",
    "congratulations",
    "delighted",
    "excellent",
    "excited",
    "grateful",
    "great",
    "happy",
    "honored",
    "improved",
    "launched",
    "love",
    "milestone",
    "proud",
    "success",
    "thrilled",
    "win",
    "wonderful",
];

/// Words counted as negative signals.
pub const NEGATIVE_WORDS: &[&str] = &[
    "angry",
    "broken",
    "difficult",
    "disappointed",
    "failed",
    "failure",
    "frustrated",
    "hard",
    "laid",
    "layoff",
    "lost",
    "mistake",
    "problem",
    "sad",
    "struggle",
    "unfortunately",
    "worried",
    "worst",
];

/// Emotion labels keyed to positive matches.
pub const POSITIVE_EMOTIONS: &[(&str, &str)] = &[
    ("excited", "excitement"),
    ("thrilled", "excitement"),
    ("proud", "pride"),
    ("honored", "pride"),
    ("grateful", "gratitude"),
    ("happy", "joy"),
    ("delighted", "joy"),
];

/// Emotion labels keyed to negative matches.
pub const NEGATIVE_EMOTIONS: &[(&str, &str)] = &[
    ("frustrated", "frustration"),
    ("disappointed", "disappointment"),
    ("worried", "concern"),
    ("sad", "sadness"),
];

/// Words suggesting an inspirational tone.
pub const INSPIRATIONAL_WORDS: &[&str] = &[
    "believe", "dream", "inspire", "journey", "lesson", "learned", "never", "growth",
];

/// Audience keyword groups: any match selects the paired description.
pub const AUDIENCE_RULES: &[(&[&str], &str)] = &[
    (
        &["developer", "engineer", "code", "programming", "software"],
        "Software engineers and developers",
    ),
    (
        &["hiring", "job", "career", "resume", "interview"],
        "Job seekers and professionals navigating their careers",
    ),
    (
        &["startup", "founder", "funding", "venture"],
        "Founders, operators, and startup enthusiasts",
    ),
    (
        &["marketing", "brand", "campaign", "audience"],
        "Marketing and brand professionals",
    ),
    (
        &["student", "graduate", "university", "course"],
        "Students and early-career professionals",
    ),
];

/// Imperative openers marking a sentence as an actionable instruction.
pub const IMPERATIVE_OPENERS: &[&str] = &[
    "apply", "check", "download", "follow", "join", "learn", "read", "register", "share",
    "sign", "start", "subscribe", "try", "visit",
];

/// Call-to-action markers used by the quality heuristic.
pub const CTA_MARKERS: &[&str] = &["comment", "dm", "follow", "join", "share", "subscribe", "thoughts"];
