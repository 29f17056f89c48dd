//! Detector seam and the simulated detector

use super::verdict::{DetectionResult, Verdict};
use crate::config::DetectionConfig;
use crate::intake::AudioFile;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// What an analysis run was started from
#[derive(Clone, Debug, PartialEq)]
pub enum AnalysisOrigin {
    /// A finished microphone recording of the given length
    Recording { duration_secs: u32 },
    /// A file chosen through the picker or dropped on the window
    File(AudioFile),
}

impl std::fmt::Display for AnalysisOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalysisOrigin::Recording { duration_secs } => {
                write!(f, "recording ({}s)", duration_secs)
            }
            AnalysisOrigin::File(file) => write!(f, "file '{}'", file.name),
        }
    }
}

/// Produces a verdict for a finished recording or an uploaded file
pub trait Detector {
    fn analyze(&mut self, origin: &AnalysisOrigin) -> DetectionResult;
}

/// Detector that ignores its input and draws a random verdict
pub struct SimulatedDetector {
    rng: StdRng,
    threshold: f32,
    min_confidence: f32,
    max_confidence: f32,
}

impl SimulatedDetector {
    /// Create a detector from configuration; seeded when `config.seed` is set
    pub fn new(config: &DetectionConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            rng,
            threshold: config.deepfake_threshold,
            min_confidence: config.min_confidence,
            max_confidence: config.max_confidence,
        }
    }

    /// Create a detector with default parameters and a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self::new(&DetectionConfig {
            seed: Some(seed),
            ..DetectionConfig::default()
        })
    }
}

impl Default for SimulatedDetector {
    fn default() -> Self {
        Self::new(&DetectionConfig::default())
    }
}

impl Detector for SimulatedDetector {
    fn analyze(&mut self, origin: &AnalysisOrigin) -> DetectionResult {
        let sample: f32 = self.rng.gen();
        let verdict = if sample > self.threshold {
            Verdict::Deepfake
        } else {
            Verdict::Real
        };
        let confidence = self.rng.gen_range(self.min_confidence..self.max_confidence);

        debug!(
            "[DETECT] Simulated verdict for {}: {} ({:.3})",
            origin, verdict, confidence
        );

        DetectionResult::new(verdict, confidence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin() -> AnalysisOrigin {
        AnalysisOrigin::Recording { duration_secs: 5 }
    }

    #[test]
    fn test_confidence_within_range() {
        let mut detector = SimulatedDetector::seeded(7);
        for _ in 0..1000 {
            let result = detector.analyze(&origin());
            assert!(result.confidence >= 0.7, "confidence {}", result.confidence);
            assert!(result.confidence < 1.0, "confidence {}", result.confidence);
        }
    }

    #[test]
    fn test_both_verdicts_occur() {
        let mut detector = SimulatedDetector::seeded(11);
        let deepfakes = (0..1000)
            .filter(|_| detector.analyze(&origin()).verdict.is_deepfake())
            .count();
        // About 30% of uniform samples exceed 0.7
        assert!((200..400).contains(&deepfakes), "deepfakes: {}", deepfakes);
    }

    #[test]
    fn test_same_seed_same_verdicts() {
        let mut a = SimulatedDetector::seeded(3);
        let mut b = SimulatedDetector::seeded(3);
        for _ in 0..20 {
            assert_eq!(a.analyze(&origin()), b.analyze(&origin()));
        }
    }

    #[test]
    fn test_threshold_extremes() {
        let mut always_real = SimulatedDetector::new(&DetectionConfig {
            deepfake_threshold: 1.0,
            seed: Some(1),
            ..DetectionConfig::default()
        });
        assert!((0..100).all(|_| always_real.analyze(&origin()).verdict == Verdict::Real));

        let mut mostly_fake = SimulatedDetector::new(&DetectionConfig {
            deepfake_threshold: 0.0,
            seed: Some(1),
            ..DetectionConfig::default()
        });
        let fakes = (0..100)
            .filter(|_| mostly_fake.analyze(&origin()).verdict.is_deepfake())
            .count();
        assert!(fakes >= 99);
    }

    #[test]
    fn test_origin_display() {
        let file = AnalysisOrigin::File(AudioFile::new("call.wav", Some("audio/wav".into())));
        assert_eq!(file.to_string(), "file 'call.wav'");
        assert_eq!(origin().to_string(), "recording (5s)");
    }
}
