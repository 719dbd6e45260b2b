/// Splits long input text into bounded segments at safe boundaries.
///
/// Boundary preference: paragraph break, then sentence end (including the
/// Devanagari danda used across Indic scripts), then whitespace. A word is
/// only cut in the middle when it is longer than `max_len` on its own.
///
/// The split is lossless: concatenating the returned segments in order
/// reproduces the input byte-for-byte, so the function is a pure,
/// restartable description of the input.
pub fn chunk(text: &str, max_len: usize) -> Vec<String> {
    if text.is_empty() || max_len == 0 {
        return Vec::new();
    }
    if text.len() <= max_len {
        return vec![text.to_string()];
    }

    let sentence_end = regex::Regex::new(r"[.!?।]\s").unwrap();
    let mut segments = Vec::new();
    let mut start = 0;

    while start < text.len() {
        let rest = &text[start..];
        if rest.len() <= max_len {
            segments.push(rest.to_string());
            break;
        }

        let mut window_end = floor_char_boundary(rest, max_len);
        if window_end == 0 {
            // max_len is smaller than one character; take the character whole
            window_end = rest
                .char_indices()
                .nth(1)
                .map(|(i, _)| i)
                .unwrap_or(rest.len());
        }
        let window = &rest[..window_end];

        let cut = split_point(window, &sentence_end).unwrap_or(window_end);
        segments.push(window[..cut].to_string());
        start += cut;
    }

    segments
}

/// Best boundary inside the window, as a byte offset to cut at.
/// Returns None when the window is a single unbroken word.
fn split_point(window: &str, sentence_end: &regex::Regex) -> Option<usize> {
    if let Some(idx) = window.rfind("\n\n") {
        return Some(idx + 2);
    }
    if let Some(mat) = sentence_end.find_iter(window).last() {
        return Some(mat.end());
    }
    window
        .char_indices()
        .rev()
        .find(|&(_, c)| c.is_whitespace())
        .map(|(i, c)| i + c.len_utf8())
}

fn floor_char_boundary(s: &str, mut index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    while index > 0 && !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_input_yields_no_segments() {
        assert!(chunk("", 100).is_empty());
    }

    #[test]
    fn short_text_is_a_single_segment() {
        let text = "A short sentence.";
        assert_eq!(chunk(text, 100), vec![text.to_string()]);
    }

    #[test]
    fn text_exactly_at_limit_is_not_split() {
        let text = "a".repeat(250);
        let segments = chunk(&text, 250);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].len(), 250);
    }

    #[test]
    fn concatenation_reproduces_input_exactly() {
        let text = "First sentence. Second sentence!\n\nNew paragraph with more words. \
                    Third one? And a trailing fragment without punctuation"
            .repeat(7);
        for max_len in [30, 50, 120, 251] {
            let segments = chunk(&text, max_len);
            assert_eq!(segments.concat(), text, "lossy split at max_len {max_len}");
        }
    }

    #[test]
    fn segments_never_exceed_max_len() {
        let text =
            "One sentence here. Another one there! A third, longer sentence follows? ".repeat(20);
        for max_len in [25, 60, 250] {
            for segment in chunk(&text, max_len) {
                assert!(
                    segment.len() <= max_len,
                    "segment of {} bytes exceeds {}",
                    segment.len(),
                    max_len
                );
            }
        }
    }

    #[test]
    fn splits_prefer_sentence_boundaries() {
        let text = "Alpha beta gamma. Delta epsilon zeta. Eta theta iota.";
        let segments = chunk(text, 40);
        // packs as many whole sentences as fit, cutting after the last one
        assert_eq!(segments[0], "Alpha beta gamma. Delta epsilon zeta. ");
    }

    #[test]
    fn splits_prefer_paragraph_breaks_over_sentences() {
        let text =
            "Intro line. More intro.\n\nBody paragraph starts here and keeps going for a while.";
        let segments = chunk(text, 60);
        assert_eq!(segments[0], "Intro line. More intro.\n\n");
    }

    #[test]
    fn splits_at_danda_for_indic_text() {
        let text = "यह पहला वाक्य है। यह दूसरा वाक्य है। यह तीसरा वाक्य है।";
        let segments = chunk(text, 60);
        assert!(segments.len() > 1);
        assert!(segments[0].trim_end().ends_with('।'));
        assert_eq!(segments.concat(), text);
    }

    #[test]
    fn oversized_word_is_hard_split() {
        let word = "x".repeat(700);
        let segments = chunk(&word, 250);
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].len(), 250);
        assert_eq!(segments.concat(), word);
    }

    #[test]
    fn hard_split_respects_char_boundaries() {
        let text = "न".repeat(300); // 3 bytes per char
        let segments = chunk(&text, 250);
        for segment in &segments {
            assert!(segment.len() <= 250);
        }
        assert_eq!(segments.concat(), text);
    }

    #[test]
    fn whitespace_boundary_used_when_no_punctuation() {
        let text = "alpha beta gamma delta epsilon zeta eta theta iota kappa";
        let segments = chunk(text, 20);
        for segment in &segments {
            assert!(segment.len() <= 20);
        }
        assert_eq!(segments.concat(), text);
        // no word was cut in the middle
        for segment in &segments {
            for word in segment.split_whitespace() {
                assert!(text.split_whitespace().any(|w| w == word));
            }
        }
    }
}
