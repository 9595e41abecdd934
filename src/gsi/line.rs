//! A single GSI record and the facts derived from it.

use super::block::{
    tokenize, Block, BlockWidth, POINT_COORDINATES, POINT_NUMBER, STATION_COORDINATES,
};

/// One GSI record.
///
/// The raw text is kept verbatim so filters can write it back unchanged.
/// Blocks are tokenized once on construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    text: String,
    width: BlockWidth,
    blocks: Vec<Block>,
}

impl Line {
    /// Wrap and tokenize a raw record.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let width = BlockWidth::from_line(&text);
        let blocks = tokenize(&text);
        Self {
            text,
            width,
            blocks,
        }
    }

    /// The raw record.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consume the line, returning the raw record.
    pub fn into_text(self) -> String {
        self.text
    }

    pub fn width(&self) -> BlockWidth {
        self.width
    }

    pub fn is_wide(&self) -> bool {
        self.width == BlockWidth::Gsi16
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Number of blocks in the record.
    pub fn token_count(&self) -> usize {
        self.blocks.len()
    }

    /// First block with the given word index.
    pub fn block(&self, word_index: u8) -> Option<&Block> {
        self.blocks.iter().find(|b| b.word_index == word_index)
    }

    /// Point number with its zero padding stripped, upper-cased.
    ///
    /// An all-zero point number yields `"0"`. Records without a point number
    /// block yield `None`.
    pub fn point_number(&self) -> Option<String> {
        let value = self.block(POINT_NUMBER)?.value();
        if value.is_empty() {
            return None;
        }
        let stripped = value.trim_start_matches('0');
        if stripped.is_empty() {
            Some("0".to_string())
        } else {
            Some(stripped.to_uppercase())
        }
    }

    /// A one-face target record: it carries point coordinates and every one
    /// of them is zero.
    pub fn is_target(&self) -> bool {
        let mut coordinates = self
            .blocks
            .iter()
            .filter(|b| POINT_COORDINATES.contains(&b.word_index))
            .peekable();
        coordinates.peek().is_some() && coordinates.all(Block::is_zero)
    }

    /// True when the record carries all three station coordinate blocks.
    pub fn has_station_coordinates(&self) -> bool {
        STATION_COORDINATES
            .iter()
            .all(|wi| self.block(*wi).is_some())
    }

    /// Upper-cased record text, used by identifier matching.
    pub fn upper(&self) -> String {
        self.text.to_uppercase()
    }
}

impl From<&str> for Line {
    fn from(text: &str) -> Self {
        Line::new(text)
    }
}

impl From<String> for Line {
    fn from(text: String) -> Self {
        Line::new(text)
    }
}
