//! Transcript chunking for long interviews
//!
//! Transcripts are split at speaker turns and blank lines, then turns are
//! packed into chunks up to the size limit. Sizes are counted in characters
//! and every split lands on a character boundary.

/// Splits transcripts into chunks of at most `max_chunk_size` characters
pub struct TranscriptChunker {
    max_chunk_size: usize,
}

impl TranscriptChunker {
    /// Create a new transcript chunker
    pub fn new(max_chunk_size: usize) -> Self {
        Self {
            max_chunk_size: max_chunk_size.max(1),
        }
    }

    /// Chunk the given transcript
    pub fn chunk(&self, text: &str) -> Vec<String> {
        if text.chars().count() <= self.max_chunk_size {
            return vec![text.to_string()];
        }

        self.combine_until_limit(turns(text))
    }

    /// Pack turns into chunks, splitting any turn that is too large alone
    fn combine_until_limit(&self, turns: Vec<String>) -> Vec<String> {
        let mut chunks = Vec::new();
        let mut current_chunk = String::new();
        let mut current_len = 0;

        for turn in turns {
            let turn_len = turn.chars().count();

            if current_len > 0 && current_len + turn_len + 1 > self.max_chunk_size {
                chunks.push(std::mem::take(&mut current_chunk));
                current_len = 0;
            }

            if turn_len > self.max_chunk_size {
                chunks.extend(split_at_char_limit(&turn, self.max_chunk_size));
                continue;
            }

            if current_len > 0 {
                current_chunk.push('\n');
                current_len += 1;
            }
            current_chunk.push_str(&turn);
            current_len += turn_len;
        }

        if !current_chunk.is_empty() {
            chunks.push(current_chunk);
        }

        chunks
    }
}

/// Split a transcript into speaker turns or paragraphs
fn turns(text: &str) -> Vec<String> {
    let mut turns = Vec::new();
    let mut current = String::new();

    for line in text.lines() {
        let starts_turn = line.trim().is_empty() || is_speaker_line(line);
        if starts_turn && !current.trim().is_empty() {
            turns.push(current.trim_end().to_string());
            current.clear();
        }
        if line.trim().is_empty() {
            continue;
        }
        current.push_str(line);
        current.push('\n');
    }

    if !current.trim().is_empty() {
        turns.push(current.trim_end().to_string());
    }

    turns
}

/// "Interviewer: ...", "JANE DOE: ...", "Q: ..."
fn is_speaker_line(line: &str) -> bool {
    let Some((speaker, _)) = line.split_once(':') else {
        return false;
    };
    let speaker = speaker.trim();
    !speaker.is_empty()
        && speaker.chars().count() <= 30
        && speaker
            .chars()
            .all(|c| c.is_alphabetic() || c == ' ' || c == '.' || c == '\'' || c == '-')
}

/// Split text into pieces of at most `limit` characters
fn split_at_char_limit(text: &str, limit: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(limit)
        .map(|piece| piece.iter().collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_chunking_needed_for_small_text() {
        let chunker = TranscriptChunker::new(100);
        let text = "Q: Short interview.";
        assert_eq!(chunker.chunk(text), vec![text]);
    }

    #[test]
    fn test_chunks_on_speaker_turns() {
        let chunker = TranscriptChunker::new(40);
        let text = "Interviewer: How did it start?\nJane: In a garage, honestly.\nInterviewer: And now?\nJane: Two hundred staff.";
        let chunks = chunker.chunk(text);

        assert!(chunks.len() > 1);
        assert!(chunks[0].starts_with("Interviewer: How did it start?"));
        for chunk in &chunks {
            assert!(chunk.chars().count() <= 40);
        }
        assert!(chunks.last().unwrap().ends_with("Two hundred staff."));
    }

    #[test]
    fn test_chunks_on_paragraphs() {
        let chunker = TranscriptChunker::new(30);
        let text = "First paragraph here.\n\nSecond paragraph here.\n\nThird paragraph here.";
        let chunks = chunker.chunk(text);
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[1], "Second paragraph here.");
    }

    #[test]
    fn test_continuation_lines_stay_with_their_turn() {
        let turns = turns("Jane: It was hard.\nWe nearly quit.\nBob: Really?");
        assert_eq!(turns, vec!["Jane: It was hard.\nWe nearly quit.", "Bob: Really?"]);
    }

    #[test]
    fn test_times_are_not_speakers() {
        assert!(!is_speaker_line("10:30 we met again"));
        assert!(is_speaker_line("Q: why?"));
        assert!(is_speaker_line("Dr. Jane O'Neil: yes"));
    }

    #[test]
    fn test_very_long_turn_is_split_on_char_boundaries() {
        let chunker = TranscriptChunker::new(7);
        let text = "é".repeat(20);
        let chunks = chunker.chunk(&text);
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].chars().count(), 7);
        assert_eq!(chunks.concat(), text);
    }
}
