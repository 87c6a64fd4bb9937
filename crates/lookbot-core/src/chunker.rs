//! Message chunking for transports with fixed payload limits.
//!
//! The formatter emits an ordered sequence of logical blocks (a greeting, a
//! person label, one "item name + link" pair) separated by a blank line. The
//! chunker packs those blocks into messages without ever cutting inside a
//! block, so an item name is never separated from its link.

/// Blank-line separator between logical blocks.
///
/// This is a hard protocol between the formatter and the chunker: changing
/// the formatter's separator without updating this constant breaks the
/// "never split inside a block" invariant.
pub const BLOCK_DELIMITER: &str = "\n\n";

/// Character length, not byte length. Telegram limits count characters, and
/// the bot speaks Ukrainian where the two differ for every Cyrillic letter.
fn text_len(s: &str) -> usize {
    s.chars().count()
}

/// Split `text` into messages of at most `max_len` characters.
///
/// Text that already fits is returned as-is in a single-element vec. Longer
/// text is split on [`BLOCK_DELIMITER`] and the blocks are greedily packed
/// back together. A single block longer than `max_len` is emitted whole as
/// an oversized chunk rather than truncated.
///
/// `max_len` must be positive; output ordering equals input block ordering.
pub fn split(text: &str, max_len: usize) -> Vec<String> {
    if text_len(text) <= max_len {
        return vec![text.to_string()];
    }
    pack_blocks(text.split(BLOCK_DELIMITER), max_len)
}

/// Split `text` into a photo caption plus follow-up messages.
///
/// The caption is greedily filled with leading blocks while the running
/// total stays within `caption_limit`. The first block that would overflow,
/// and every block after it, is packed into follow-up messages bounded by
/// `message_limit` using the same rules as [`split`].
///
/// If even the first block exceeds `caption_limit` it becomes the caption on
/// its own (oversized-block exception), so the caption is never empty for
/// non-empty input.
pub fn split_for_caption(
    text: &str,
    caption_limit: usize,
    message_limit: usize,
) -> (String, Vec<String>) {
    if text_len(text) <= caption_limit {
        return (text.to_string(), Vec::new());
    }

    let blocks: Vec<&str> = text.split(BLOCK_DELIMITER).collect();

    let mut caption = String::new();
    let mut taken = 0usize;
    for block in &blocks {
        let needed = if caption.is_empty() {
            text_len(block)
        } else {
            text_len(&caption) + BLOCK_DELIMITER.len() + text_len(block)
        };
        if needed > caption_limit {
            break;
        }
        if !caption.is_empty() {
            caption.push_str(BLOCK_DELIMITER);
        }
        caption.push_str(block);
        taken += 1;
    }

    // Oversized leading block: take it whole rather than emit an empty caption.
    if taken == 0 {
        caption.push_str(blocks[0]);
        taken = 1;
    }

    let follow_ups = if taken >= blocks.len() {
        Vec::new()
    } else {
        let rest = blocks[taken..].join(BLOCK_DELIMITER);
        split(&rest, message_limit)
    };

    (caption.trim().to_string(), follow_ups)
}

fn pack_blocks<'a>(blocks: impl Iterator<Item = &'a str>, max_len: usize) -> Vec<String> {
    let mut out = Vec::new();
    let mut cur = String::new();

    for block in blocks {
        if cur.is_empty() {
            cur.push_str(block);
            continue;
        }
        if text_len(&cur) + BLOCK_DELIMITER.len() + text_len(block) <= max_len {
            cur.push_str(BLOCK_DELIMITER);
            cur.push_str(block);
        } else {
            out.push(cur.trim().to_string());
            cur = block.to_string();
        }
    }

    if !cur.trim().is_empty() {
        out.push(cur.trim().to_string());
    }

    out
}
