//! Landing page copy

pub const BRAND: &str = "HAVDEF";
pub const BRAND_TAGLINE: &str = "Hindi Audio-Visual Deepfake Defense";

pub const HERO_TITLE_LEAD: &str = "Real-time AI Voice";
pub const HERO_TITLE_HIGHLIGHT: &str = "Fraud";
pub const HERO_TITLE_TAIL: &str = "Detection";
pub const HERO_COPY: &str = "Advanced deepfake detection system that flags AI-generated voice scams \
    during real-time phone calls. Specialized for Hinglish with 90%+ accuracy using \
    state-of-the-art CNNs and spectrogram analysis.";
pub const HERO_CTA: &str = "Try Detection System";

pub const FEATURES_TITLE: &str = "Advanced Protection Features";
pub const FEATURES_COPY: &str = "Built with cutting-edge AI and deep learning technologies to \
    provide comprehensive protection against voice-based fraud.";

pub const DETECTION_TITLE: &str = "Test the Detection System";
pub const DETECTION_COPY: &str = "Experience our AI-powered deepfake detection in action. Record \
    your voice or upload an audio file for real-time analysis.";

pub const PIPELINE_TITLE: &str = "How It Works";
pub const PIPELINE_COPY: &str = "Our advanced pipeline processes audio through multiple stages \
    of analysis and machine learning.";

pub const FOOTER_COPYRIGHT: &str =
    "© 2025 HAVDEF Project. Advanced AI-powered deepfake detection for voice security.";
pub const FOOTER_STACK: &str = "Python • TensorFlow • CNN • Signal Processing";

pub const SECURITY_ALERT: &str = "This audio appears to be AI-generated. Exercise caution if \
    this was from an unexpected source.";

/// A card in the features grid
#[derive(Clone, Copy, Debug)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub highlight: bool,
}

pub const FEATURES: [Feature; 6] = [
    Feature {
        icon: "🎤",
        title: "Real-time Analysis",
        description: "Live audio stream processing with instant deepfake detection during \
            phone calls and voice interactions.",
        highlight: true,
    },
    Feature {
        icon: "🧠",
        title: "CNN-based Detection",
        description: "Advanced convolutional neural networks trained on 5000+ samples for \
            accurate spectrogram-based classification.",
        highlight: false,
    },
    Feature {
        icon: "🌐",
        title: "Hinglish Specialized",
        description: "Optimized for Hindi-English code-switching patterns common in Indian \
            voice communications.",
        highlight: false,
    },
    Feature {
        icon: "⚡",
        title: "Low Latency",
        description: "Optimized for mobile devices with minimal processing delay and \
            efficient resource utilization.",
        highlight: false,
    },
    Feature {
        icon: "🔒",
        title: "Privacy Focused",
        description: "Local processing ensures your voice data never leaves your device, \
            maintaining complete privacy.",
        highlight: false,
    },
    Feature {
        icon: "🛡",
        title: "Noise Robust",
        description: "Advanced preprocessing handles background noise and maintains accuracy \
            in challenging environments.",
        highlight: false,
    },
];

/// A numbered step in the "How It Works" row
#[derive(Clone, Copy, Debug)]
pub struct PipelineStep {
    pub step: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const PIPELINE_STEPS: [PipelineStep; 4] = [
    PipelineStep {
        step: "01",
        title: "Audio Capture",
        description: "Real-time voice input from calls or recordings",
    },
    PipelineStep {
        step: "02",
        title: "Preprocessing",
        description: "Noise filtering, normalization, and silence trimming",
    },
    PipelineStep {
        step: "03",
        title: "CNN Analysis",
        description: "Spectrogram-based deep learning classification",
    },
    PipelineStep {
        step: "04",
        title: "Threat Alert",
        description: "Instant notification with confidence scoring",
    },
];
