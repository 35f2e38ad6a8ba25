//! Partitioning of match announcements into size-bounded post bodies.
//!
//! The platform caps message bodies at roughly 10000 characters. Matches are
//! rendered one line each and accumulated until the buffer passes
//! [`FLUSH_THRESHOLD`], at which point the buffer becomes one block. A line is
//! never split, so a block can overshoot the threshold by one line.

use crate::types::{MatchPair, Participant, PostBlock};
use std::fmt::Write;

/// Buffer length after which a block is closed
pub const FLUSH_THRESHOLD: usize = 9500;

/// Line terminator appended after every rendered match
pub const LINE_TERMINATOR: &str = "\n";

/// Splits match announcements into post bodies
#[derive(Clone, Copy, Debug)]
pub struct PostBatcher {
    threshold: usize,
}

impl Default for PostBatcher {
    fn default() -> Self {
        Self::new(FLUSH_THRESHOLD)
    }
}

impl PostBatcher {
    /// Batcher closing blocks once they exceed `threshold` bytes
    pub fn new(threshold: usize) -> Self {
        Self { threshold }
    }

    /// Render `matches` into one or more block bodies, in input order
    ///
    /// Always returns at least one element; zero matches give one empty body.
    pub fn format(&self, matches: &[MatchPair]) -> Vec<String> {
        let mut blocks = Vec::new();
        let mut buffer = String::new();

        for pair in matches {
            render_line(&mut buffer, pair);
            if buffer.len() > self.threshold {
                blocks.push(std::mem::take(&mut buffer));
            }
        }

        // The last line may have flushed exactly at the end; only keep an empty
        // trailing buffer when it is the sole block.
        if !buffer.is_empty() || blocks.is_empty() {
            blocks.push(buffer);
        }

        blocks
    }

    /// Same partitioning as [`format`](Self::format), with sequence numbers attached
    pub fn blocks(&self, matches: &[MatchPair]) -> Vec<PostBlock> {
        let bodies = self.format(matches);
        let total_blocks = bodies.len();

        bodies
            .into_iter()
            .enumerate()
            .map(|(i, body)| PostBlock {
                body,
                sequence_index: i + 1,
                total_blocks,
            })
            .collect()
    }
}

/// Platform mention markup for one participant
pub fn mention(participant: &Participant) -> String {
    format!("[[user:{}]]", participant.remote_id)
}

fn render_line(buffer: &mut String, pair: &MatchPair) {
    // Writing into a String cannot fail
    let _ = write!(
        buffer,
        "{} and {}.{}",
        mention(&pair.first),
        mention(&pair.second),
        LINE_TERMINATOR
    );
}
