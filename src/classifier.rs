use rand::prelude::RngExt;
use rand::rng;

/// The fixed label set. Every successful prediction returns one of these.
pub const EMOTIONS: [&str; 7] = [
    "Happy", "Sad", "Angry", "Neutral", "Fear", "Disgust", "Surprise",
];

/// Capability seam for emotion classification.
///
/// The handler only depends on this trait, so the placeholder below can be
/// swapped for a real inference engine without touching the HTTP contract.
pub trait EmotionClassifier: Send + Sync {
    fn classify(&self, audio: &[u8]) -> &'static str;
}

/// Placeholder classifier: a uniform draw from [`EMOTIONS`], independent of
/// the audio content and of all prior requests.
#[derive(Debug, Default)]
pub struct RandomClassifier;

impl EmotionClassifier for RandomClassifier {
    fn classify(&self, _audio: &[u8]) -> &'static str {
        EMOTIONS[rng().random_range(0..EMOTIONS.len())]
    }
}
