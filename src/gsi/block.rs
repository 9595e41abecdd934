//! Fixed-width GSI block tokenizer.
//!
//! A GSI record is a run of fixed-width blocks. GSI-8 records use 16
//! characters per block; GSI-16 records are flagged by a leading `*` and use
//! 24 characters per block:
//!
//! ```text
//! 110001+00001001 81..00+00012345 82..00+00067890 83..00+00000345
//! ^^ word index
//!   ^^^^ info
//!       ^ sign
//!        ^^^^^^^^ data
//! ```
//!
//! The tokenizer never fails. Garbage in a chunk produces a block with word
//! index `0` or an empty value, and consumers decide what to do with it.

/// Marker character that flags a GSI-16 (wide) record.
pub const WIDE_MARKER: char = '*';

/// Word index of the point number block.
pub const POINT_NUMBER: u8 = 11;
/// Word index of the code block.
pub const CODE: u8 = 71;
/// Word index carrying the LTOP+ two-face marker.
pub const TWO_FACE_MARKER: u8 = 79;
/// Easting of a measured point.
pub const EASTING: u8 = 81;
/// Northing of a measured point.
pub const NORTHING: u8 = 82;
/// Height of a measured point.
pub const HEIGHT: u8 = 83;
/// Easting of a station record.
pub const STATION_EASTING: u8 = 84;
/// Northing of a station record.
pub const STATION_NORTHING: u8 = 85;
/// Height of a station record.
pub const STATION_HEIGHT: u8 = 86;

/// Word indices that carry point coordinates.
pub const POINT_COORDINATES: [u8; 3] = [EASTING, NORTHING, HEIGHT];
/// Word indices that carry station coordinates.
pub const STATION_COORDINATES: [u8; 3] = [STATION_EASTING, STATION_NORTHING, STATION_HEIGHT];

/// Number of info characters between the word index and the sign.
const INFO_LEN: usize = 4;

/// Block width of a GSI record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockWidth {
    /// GSI-8: 16 characters per block.
    Gsi8,
    /// GSI-16: 24 characters per block, record starts with `*`.
    Gsi16,
}

impl BlockWidth {
    /// Detect the block width of a raw record.
    pub fn from_line(line: &str) -> Self {
        if line.starts_with(WIDE_MARKER) {
            BlockWidth::Gsi16
        } else {
            BlockWidth::Gsi8
        }
    }

    /// Characters per block.
    pub fn chars(self) -> usize {
        match self {
            BlockWidth::Gsi8 => 16,
            BlockWidth::Gsi16 => 24,
        }
    }

    /// Number of zeros that precede an identifier inside a padded point
    /// number field.
    pub fn identifier_padding(self) -> usize {
        match self {
            BlockWidth::Gsi8 => 4,
            BlockWidth::Gsi16 => 8,
        }
    }
}

/// One fixed-width slice of a GSI record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Two-digit word index, `0` when the chunk does not start with digits.
    pub word_index: u8,
    /// Everything after the word index (info, sign, data, separator).
    pub raw_field: String,
}

impl Block {
    /// Build a block from one raw chunk.
    pub fn from_chunk(chunk: &str) -> Self {
        let mut chars = chunk.chars();
        let head: String = chars.by_ref().take(2).collect();
        let word_index = if head.len() == 2 && head.chars().all(|c| c.is_ascii_digit()) {
            head.parse().unwrap_or(0)
        } else {
            0
        };
        Self {
            word_index,
            raw_field: chars.collect(),
        }
    }

    /// Byte position of the sign. The sign normally sits right after the info
    /// characters; misaligned blocks fall back to the first sign found.
    fn sign_position(&self) -> Option<usize> {
        let is_sign = |c: char| c == '+' || c == '-';
        match self.raw_field.char_indices().nth(INFO_LEN) {
            Some((pos, c)) if is_sign(c) => Some(pos),
            _ => self.raw_field.find(is_sign),
        }
    }

    /// Data payload after the sign, trimmed. Empty when the block has no sign.
    pub fn value(&self) -> &str {
        match self.sign_position() {
            Some(pos) => self.raw_field[pos + 1..].trim(),
            None => "",
        }
    }

    /// True when the payload is present and consists only of zeros.
    pub fn is_zero(&self) -> bool {
        let value = self.value();
        !value.is_empty() && value.chars().all(|c| c == '0')
    }
}

/// Split a raw record into blocks.
///
/// The wide marker is stripped before chunking. The final chunk may be shorter
/// than the block width; `blocks.len() == ceil(len / width)` always holds.
pub fn tokenize(line: &str) -> Vec<Block> {
    let width = BlockWidth::from_line(line);
    let body = line.strip_prefix(WIDE_MARKER).unwrap_or(line);
    let chars: Vec<char> = body.chars().collect();
    chars
        .chunks(width.chars())
        .map(|chunk| Block::from_chunk(&chunk.iter().collect::<String>()))
        .collect()
}
