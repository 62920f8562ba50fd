//! Real-world domains where matrices step up in rank.

use crate::nav::Track;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomainSection {
    pub label: &'static str,
    pub shape: &'static str,
    pub desc: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Domain {
    pub icon: &'static str,
    pub title: &'static str,
    pub sections: &'static [DomainSection],
}

impl Track for Domain {
    type SubStep = DomainSection;

    fn title(&self) -> &str {
        self.title
    }

    fn sub_steps(&self) -> &[DomainSection] {
        self.sections
    }
}

pub static DOMAINS: [Domain; 4] = [
    Domain {
        icon: "🖼",
        title: "Computer Vision: Images",
        sections: &[
            DomainSection {
                label: "Grayscale image",
                shape: "(H, W)",
                desc: "A single channel, a pure matrix. Each value is a brightness 0-255.",
            },
            DomainSection {
                label: "RGB image",
                shape: "(H, W, 3)",
                desc: "Three channels: Red, Green, Blue. A 2D matrix per channel, stacked along axis 2.",
            },
            DomainSection {
                label: "Batch of RGB images",
                shape: "(N, H, W, 3)",
                desc: "N images batched together. This is what a neural network truly processes: rank 4.",
            },
        ],
    },
    Domain {
        icon: "📝",
        title: "NLP: Text & Language",
        sections: &[
            DomainSection {
                label: "Token IDs (sentence)",
                shape: "(seq_len,)",
                desc: "A sentence becomes a list of integer token IDs: a vector with one entry per token.",
            },
            DomainSection {
                label: "Token + Embeddings",
                shape: "(seq_len, d_model)",
                desc: "Each token is embedded into a d_model-dimensional vector, giving a matrix of shape (seq, d).",
            },
            DomainSection {
                label: "Batch of sequences",
                shape: "(B, seq_len, d_model)",
                desc: "Batch B sentences together for a rank-3 tensor: the input to a Transformer block.",
            },
        ],
    },
    Domain {
        icon: "🔊",
        title: "Audio: Sound Signals",
        sections: &[
            DomainSection {
                label: "Raw waveform",
                shape: "(samples,)",
                desc: "A raw audio signal is a 1D vector of amplitudes sampled at e.g. 44100 Hz.",
            },
            DomainSection {
                label: "Spectrogram",
                shape: "(freq_bins, time_steps)",
                desc: "STFT turns 1D audio into a 2D frequency × time matrix. Classic ML input.",
            },
            DomainSection {
                label: "Multi-channel audio batch",
                shape: "(B, channels, samples)",
                desc: "Stereo audio (2 channels) batched for ML: rank-3 tensor (B, 2, T).",
            },
        ],
    },
    Domain {
        icon: "🧠",
        title: "Deep Learning: Neural Nets",
        sections: &[
            DomainSection {
                label: "Weight matrix (Dense layer)",
                shape: "(in_features, out_features)",
                desc: "A fully-connected layer has a weight matrix W. Output = X @ W + b.",
            },
            DomainSection {
                label: "Conv filter (2D)",
                shape: "(out_ch, in_ch, kH, kW)",
                desc: "A 2D convolutional layer has rank-4 weights: out_ch × in_ch × kernel_H × kernel_W.",
            },
            DomainSection {
                label: "Attention scores (Transformer)",
                shape: "(batch, heads, seq, seq)",
                desc: "Multi-head attention produces a rank-4 tensor of attention weights, one map per head.",
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_domain_has_three_sections() {
        for domain in &DOMAINS {
            assert_eq!(domain.sub_steps().len(), 3, "{}", domain.title);
        }
    }
}
