//! Voice deepfake detection
//!
//! Verdict types plus the `Detector` seam. The only detector shipped is the
//! simulated one, which draws its verdict at random.

mod detector;
mod verdict;

pub use detector::{AnalysisOrigin, Detector, SimulatedDetector};
pub use verdict::{DetectionResult, Verdict};
