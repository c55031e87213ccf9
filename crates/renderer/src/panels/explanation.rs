//! Generated analysis panel

use stock_dashboard_shared::ExplanationPayload;

pub const HEADING: &str = "Generated Analysis";

const SENTENCE_DELIMITER: &str = ". ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplanationView {
    pub heading: &'static str,
    /// List items in input order, each ending with the restored period
    pub sentences: Vec<String>,
}

/// Split on `". "`, trim, drop empty units and put the period back
///
/// The final unit keeps whatever punctuation it had, so text ending in `.`
/// yields a last item ending in `..`.
pub fn split_sentences(text: &str) -> Vec<String> {
    text.split(SENTENCE_DELIMITER)
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .map(|sentence| format!("{sentence}."))
        .collect()
}

pub fn render_explanation(payload: Option<&ExplanationPayload>) -> Option<ExplanationView> {
    let Some(text) = payload.and_then(ExplanationPayload::text) else {
        log::debug!("explanation panel: no text, rendering nothing");
        return None;
    };

    Some(ExplanationView {
        heading: HEADING,
        sentences: split_sentences(text),
    })
}
