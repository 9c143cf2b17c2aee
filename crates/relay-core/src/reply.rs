//! Bot reply generation.
//!
//! The bot does not understand anything it is told: every reply is a short
//! sentence of lorem-ipsum words picked uniformly at random.

use rand::Rng;
use rand::seq::SliceRandom;

/// Vocabulary the bot draws from.
pub const LOREM_WORDS: [&str; 19] = [
    "lorem",
    "ipsum",
    "dolor",
    "sit",
    "amet",
    "consectetur",
    "adipiscing",
    "elit",
    "sed",
    "do",
    "eiusmod",
    "tempor",
    "incididunt",
    "ut",
    "labore",
    "et",
    "dolore",
    "magna",
    "aliqua",
];

/// Default number of words per reply.
pub const DEFAULT_WORD_COUNT: usize = 8;

/// Produces the text of a bot reply.
pub trait ReplyGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Picks `word_count` lorem-ipsum words with replacement and formats them
/// as a capitalized sentence ending in a period.
#[derive(Debug, Clone)]
pub struct LoremReplyGenerator {
    word_count: usize,
}

impl LoremReplyGenerator {
    /// A word count of zero is clamped to one.
    pub fn new(word_count: usize) -> Self {
        Self {
            word_count: word_count.max(1),
        }
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Generate a reply from the given random source.
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let words: Vec<&str> = (0..self.word_count)
            .filter_map(|_| LOREM_WORDS.choose(rng).copied())
            .collect();
        let mut sentence = capitalize(&words.join(" "));
        sentence.push('.');
        sentence
    }
}

impl Default for LoremReplyGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_WORD_COUNT)
    }
}

impl ReplyGenerator for LoremReplyGenerator {
    fn generate(&self) -> String {
        self.generate_with(&mut rand::thread_rng())
    }
}

/// Uppercase the first character, lowercase the rest.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
