//! Prompt text for each backend operation.
//!
//! Language codes are expanded to their display names so the model sees
//! "Spanish" rather than "es"; unknown codes pass through unchanged.

use linguawise_core::backend::{GrammarCall, SuggestCall, TranslateCall};
use linguawise_core::language::resolve_label;

pub fn translate(call: &TranslateCall) -> String {
    format!(
        "You are a highly skilled translator, able to translate text from one language to \
another while maintaining the appropriate tone.\n\n\
Translate the following text from {source} to {target}, using a tone that is both {tone} \
and aligned with the user's general tone preference of {preference}:\n\n\
{text}\n\n\
Ensure that the translation is accurate, grammatically correct, and culturally appropriate. \
Pay attention to nuances in language and adapt the translation accordingly.\n\n\
Respond with a JSON object of the form {{\"translatedText\": string}}.",
        source = resolve_label(&call.source_lang),
        target = resolve_label(&call.target_lang),
        tone = call.tone.as_str(),
        preference = call.tone_preference,
        text = call.original_text,
    )
}

pub fn suggest(call: &SuggestCall) -> String {
    format!(
        "You are an expert translator providing suggestions for improving translations.\n\n\
Original Text: {text}\n\
Source Language: {source}\n\
Target Language: {target}\n\
Tone: {tone}\n\n\
Provide a list of contextual translation suggestions, alternative translations, and any \
relevant cultural notes. Respond with a JSON object of the form \
{{\"suggestions\": [string], \"alternatives\": [string], \"culturalNotes\": string}}.",
        text = call.original_text,
        source = resolve_label(&call.source_lang),
        target = resolve_label(&call.target_lang),
        tone = call.tone.as_str(),
    )
}

pub fn grammar(call: &GrammarCall) -> String {
    format!(
        "You are a grammar expert. Review the following text translated from {source} to \
{target} for grammatical errors and suggest corrections.\n\n\
Text: {text}\n\n\
Respond with a JSON object of the form \
{{\"correctedText\": string, \"suggestions\": [string]}}.",
        source = resolve_label(&call.source_lang),
        target = resolve_label(&call.target_lang),
        text = call.text,
    )
}

#[cfg(test)]
mod tests {
    use linguawise_core::language::Tone;

    use super::*;

    #[test]
    fn translate_prompt_names_languages_and_tones() {
        let prompt = translate(&TranslateCall {
            original_text: "Hello there".into(),
            source_lang: "en".into(),
            target_lang: "es".into(),
            tone: Tone::Casual,
            tone_preference: "neutral".into(),
        });

        assert!(prompt.contains("from English to Spanish"));
        assert!(prompt.contains("both casual"));
        assert!(prompt.contains("preference of neutral"));
        assert!(prompt.contains("Hello there"));
        assert!(prompt.contains("\"translatedText\""));
    }

    #[test]
    fn suggest_prompt_keeps_unknown_codes() {
        let prompt = suggest(&SuggestCall {
            original_text: "Hi".into(),
            source_lang: "en".into(),
            target_lang: "xx".into(),
            tone: Tone::Formal,
        });

        assert!(prompt.contains("Target Language: xx"));
        assert!(prompt.contains("\"culturalNotes\""));
    }

    #[test]
    fn grammar_prompt_includes_text() {
        let prompt = grammar(&GrammarCall {
            text: "Yo es feliz".into(),
            source_lang: "en".into(),
            target_lang: "es".into(),
        });

        assert!(prompt.contains("Text: Yo es feliz"));
        assert!(prompt.contains("from English to Spanish"));
    }
}
