use crate::config::TimingConfig;

/// Greedy word accumulator that cuts content into block-sized pieces.
///
/// Words are appended with a trailing space while the block stays within the
/// character and word limits. When the next word does not fit, the block is
/// cut after its last period if there is text following it, otherwise the
/// whole block is emitted. An empty buffer always takes the next word, so a
/// word longer than the character limit ends up alone in its own block.
#[derive(Debug)]
pub struct BlockBuffer<'a> {
    config: &'a TimingConfig,
    text: String,
    chars: usize,
    words: usize,
}

impl<'a> BlockBuffer<'a> {
    pub fn new(config: &'a TimingConfig) -> Self {
        Self {
            config,
            text: String::new(),
            chars: 0,
            words: 0,
        }
    }

    /// Add a word, returning a completed block when the word did not fit.
    pub fn push(&mut self, word: &str) -> Option<String> {
        let word_chars = word.chars().count();

        if self.text.is_empty() || self.fits(word_chars) {
            self.append(word, word_chars);
            self.words += 1;
            return None;
        }

        let completed = match self.text.rfind('.') {
            Some(period) if period != self.text.len() - 1 => {
                let remainder = self.text.split_off(period + 1);
                let completed = self.text.trim().to_string();
                self.words = remainder.split_whitespace().count() + 1;
                self.chars = remainder.chars().count();
                self.text = remainder;
                completed
            }
            _ => {
                let completed = self.text.trim().to_string();
                self.text.clear();
                self.chars = 0;
                self.words = 1;
                completed
            }
        };

        self.append(word, word_chars);
        Some(completed)
    }

    /// Drain whatever is left, if it holds any text.
    pub fn finish(&mut self) -> Option<String> {
        let rest = self.text.trim().to_string();
        self.text.clear();
        self.chars = 0;
        self.words = 0;
        if rest.is_empty() {
            None
        } else {
            Some(rest)
        }
    }

    fn fits(&self, word_chars: usize) -> bool {
        self.chars + word_chars <= self.config.chars_per_block
            && self.words < self.config.words_per_block
    }

    fn append(&mut self, word: &str, word_chars: usize) {
        self.text.push_str(word);
        self.text.push(' ');
        self.chars += word_chars + 1;
    }
}

/// Split content into blocks using the configured limits.
pub(crate) fn segment_content(content: &str, config: &TimingConfig) -> Vec<String> {
    let mut buffer = BlockBuffer::new(config);
    let mut blocks: Vec<String> = content
        .split_whitespace()
        .filter_map(|word| buffer.push(word))
        .collect();
    blocks.extend(buffer.finish());
    blocks
}
