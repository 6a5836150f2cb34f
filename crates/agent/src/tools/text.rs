//! Text statistics and keyword sentiment.

const POSITIVE_WORDS: &[&str] = &[
    "good",
    "great",
    "excellent",
    "awesome",
    "fantastic",
    "wonderful",
    "amazing",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad",
    "terrible",
    "awful",
    "horrible",
    "worst",
    "hate",
    "disappointed",
];

/// Analyze text for word/character counts and keyword sentiment.
pub fn analyze(text: &str) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    let char_count = text.chars().count();
    let char_no_spaces = text.chars().filter(|c| *c != ' ').count();

    let positive = count_matches(&words, POSITIVE_WORDS);
    let negative = count_matches(&words, NEGATIVE_WORDS);
    let sentiment = match positive.cmp(&negative) {
        std::cmp::Ordering::Greater => "positive",
        std::cmp::Ordering::Less => "negative",
        std::cmp::Ordering::Equal => "neutral",
    };

    format!(
        "Text analysis:\n\
         - words: {}\n\
         - characters (with spaces): {char_count}\n\
         - characters (no spaces): {char_no_spaces}\n\
         - sentiment: {sentiment}\n\
         - positive indicators: {positive}\n\
         - negative indicators: {negative}",
        words.len()
    )
}

fn count_matches(words: &[&str], keywords: &[&str]) -> usize {
    words
        .iter()
        .filter(|word| {
            let normalized = word
                .trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase();
            keywords.contains(&normalized.as_str())
        })
        .count()
}
