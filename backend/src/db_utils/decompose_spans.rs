//! Helpers for decomposing highlight spans.

use common::search_const::{EMPHASIS_END_TAG as END_TAG, EMPHASIS_START_TAG as START_TAG};
use common::text_highlight::HighlightTextSpan;

/// Splits a highlighter snippet into alternating plain / highlighted spans.
///
/// Tags never reach the span text: an opener starts emphasis, a closer ends
/// it, and a closer outside emphasis is dropped. Unterminated emphasis runs
/// to the end of the snippet.
pub fn decompose_text_into_spans(text: &str) -> Vec<HighlightTextSpan> {
    let mut spans: Vec<HighlightTextSpan> = Vec::new();
    let mut highlighted = false;
    let mut rest = text;

    loop {
        let next_tag = [START_TAG, END_TAG]
            .into_iter()
            .filter_map(|tag| rest.find(tag).map(|pos| (pos, tag)))
            .min();
        let (chunk, tag) = match next_tag {
            Some((pos, tag)) => (&rest[..pos], Some(tag)),
            None => (rest, None),
        };
        push_span(&mut spans, chunk, highlighted);

        let Some(tag) = tag else {
            break;
        };
        highlighted = tag == START_TAG;
        rest = &rest[chunk.len() + tag.len()..];
    }

    spans
}

/// Appends `chunk`, merging with the previous span when the state is unchanged.
fn push_span(spans: &mut Vec<HighlightTextSpan>, chunk: &str, highlighted: bool) {
    if chunk.is_empty() {
        return;
    }
    match spans.last_mut() {
        Some(last) if last.is_highlighted == highlighted => last.text.push_str(chunk),
        _ => spans.push(HighlightTextSpan { text: chunk.to_string(), is_highlighted: highlighted }),
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_one_span() {
        let spans = decompose_text_into_spans("no matches here");
        assert_eq!(spans, vec![HighlightTextSpan::plain("no matches here")]);
    }

    #[test]
    fn empty_text_has_no_spans() {
        assert!(decompose_text_into_spans("").is_empty());
    }

    #[test]
    fn alternating_spans() {
        let spans = decompose_text_into_spans("The <em>quick brown</em> fox <em>jumps</em>");
        assert_eq!(
            spans,
            vec![
                HighlightTextSpan::plain("The "),
                HighlightTextSpan::highlighted("quick brown"),
                HighlightTextSpan::plain(" fox "),
                HighlightTextSpan::highlighted("jumps"),
            ]
        );
    }

    #[test]
    fn adjacent_emphasis_regions_merge() {
        let spans = decompose_text_into_spans("<em>quick</em><em> brown</em> fox");
        assert_eq!(
            spans,
            vec![HighlightTextSpan::highlighted("quick brown"), HighlightTextSpan::plain(" fox")]
        );
    }

    #[test]
    fn stray_closer_is_dropped() {
        let spans = decompose_text_into_spans("a</em> <em>b</em>");
        assert_eq!(spans, vec![HighlightTextSpan::plain("a "), HighlightTextSpan::highlighted("b")]);
    }

    #[test]
    fn unterminated_emphasis_runs_to_end() {
        let spans = decompose_text_into_spans("lazy <em>dog sleeps");
        assert_eq!(
            spans,
            vec![HighlightTextSpan::plain("lazy "), HighlightTextSpan::highlighted("dog sleeps")]
        );
    }
}
