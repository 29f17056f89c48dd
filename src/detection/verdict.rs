//! Detection verdicts

/// Binary classification output
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Authentic human voice
    Real,
    /// AI-generated voice
    Deepfake,
}

impl Verdict {
    /// Check if this verdict flags a deepfake
    pub fn is_deepfake(&self) -> bool {
        matches!(self, Verdict::Deepfake)
    }

    /// Headline shown on the result card
    pub fn headline(&self) -> &'static str {
        match self {
            Verdict::Real => "Authentic Voice",
            Verdict::Deepfake => "Deepfake Detected",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Real => write!(f, "REAL"),
            Verdict::Deepfake => write!(f, "DEEPFAKE"),
        }
    }
}

/// Outcome of one analysis run
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DetectionResult {
    pub verdict: Verdict,
    /// Scalar in [0, 1]
    pub confidence: f32,
}

impl DetectionResult {
    pub fn new(verdict: Verdict, confidence: f32) -> Self {
        Self {
            verdict,
            confidence: confidence.clamp(0.0, 1.0),
        }
    }

    /// Confidence rounded to a whole percentage
    pub fn confidence_percent(&self) -> u32 {
        (self.confidence * 100.0).round() as u32
    }
}
