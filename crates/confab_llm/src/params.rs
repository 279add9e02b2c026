/// Sampling knobs handed to a [`Generator`](crate::Generator).
///
/// Pad and end-of-sequence token ids are deliberately absent: those are
/// artifacts of a backend's tokenizer, and every shipped backend already
/// stops at its model's end-of-sequence token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingParams {
    /// Upper bound on newly generated tokens, not counting the prompt.
    pub max_new_tokens: u32,
    /// Sample from the output distribution instead of decoding greedily.
    pub sample: bool,
    pub temperature: f32,
    /// Nucleus sampling probability mass.
    pub top_p: f32,
    pub repetition_penalty: f32,
}

impl SamplingParams {
    /// The fixed configuration used for every chat turn.
    pub const fn chat_turn() -> Self {
        Self {
            max_new_tokens: 180,
            sample: true,
            temperature: 0.7,
            top_p: 0.9,
            repetition_penalty: 1.05,
        }
    }

    pub fn with_max_new_tokens(mut self, max: u32) -> Self {
        self.max_new_tokens = max;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_top_p(mut self, top_p: f32) -> Self {
        self.top_p = top_p;
        self
    }

    pub fn with_repetition_penalty(mut self, penalty: f32) -> Self {
        self.repetition_penalty = penalty;
        self
    }

    pub fn greedy(mut self) -> Self {
        self.sample = false;
        self
    }
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self::chat_turn()
    }
}
