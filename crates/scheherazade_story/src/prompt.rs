//! Prompt templates for the four story operations.
//!
//! The blended tone string appears exactly once per prompt; callers supply
//! tone labels as given and the template does not restate them.

use scheherazade_core::ToneSet;

/// Instruction prompt for the opening analysis: title, opening paragraph,
/// and a dynamic visual prompt for the next illustration.
pub fn opening_prompt(tones: &ToneSet, hint: Option<&str>) -> String {
    let hint_section = match hint {
        Some(hint) => format!(
            "\nThe user has provided a narrative direction: \"{hint}\". Incorporate this direction into the story naturally."
        ),
        None => String::new(),
    };

    format!(
        r#"Analyse this image in detail. Then:
1. Generate a compelling, atmospheric title for the story (max 5 words).
2. Ghostwrite a compelling, evocative opening paragraph (approx 60-80 words) for a story set in this world.
3. Provide a "visualPrompt": a concise description of a DYNAMIC next scene drawn from the paragraph you just wrote. It MUST specify a distinct camera angle, a character pose or action, and lighting/environment cues. Use the uploaded image as a structural reference for setting and characters, but do NOT restate the image as it is.

IMPORTANT: The story MUST be written in a tone blending: {tones}.{hint_section}

All text MUST be written in British English (UK spelling), for example using 'colour' instead of 'color', 'grey' instead of 'gray', and 'analysed' instead of 'analyzed'.

Return the response in a clear JSON format with keys: "story", "title", and "visualPrompt".
The story should be immersive, literary, and perfectly reflect the requested atmosphere."#,
        tones = tones.blended(),
    )
}

/// Instruction prompt for continuing an existing story.
pub fn continuation_prompt(tones: &ToneSet, full_story: &str) -> String {
    format!(
        r#"Continue the following story based on the attached image. Maintain a tone blending: {tones}.
Write a single, evocative paragraph (approx 60-80 words) that advances the plot or deepens the atmosphere.

All text MUST be written in British English (UK spelling).

Also provide a "visualPrompt": a short description of a NEW scene based on this new paragraph. It MUST differ from the previous illustration: pick a new camera angle and a new physical action for the characters.

Current Story:
"{full_story}"

Return the response in JSON format with "nextPart" and "visualPrompt" keys. Ensure the JSON is valid."#,
        tones = tones.blended(),
    )
}

/// Instruction prompt for rendering a stylized illustration from the
/// reference image and a visual prompt.
pub fn illustration_prompt(visual_prompt: &str, style_directive: &str) -> String {
    format!(
        r#"ARTISTIC STYLE MANDATE: {style_directive}

SUBJECT MATTER: {visual_prompt}

INSTRUCTIONS: Use the attached image ONLY as the identity reference for the characters.
PRESERVE their facial features, hair, and clothing exactly as depicted.
Do NOT reuse the pose or camera angle of the attached image; depict the new pose and angle described in "SUBJECT MATTER".
COMPLETELY IGNORE the original lighting and colour palette of the attached image.
STRICTLY APPLY the requested style to the entire scene."#,
    )
}

/// Fixed narration-style directive wrapping the story text.
pub fn narration_prompt(text: &str) -> String {
    format!(
        "Read this story as a soothing, elderly British English gentleman. \
         Speak with a deep, resonant, and cinematic tone. Capture the profound \
         emotion and atmospheric gravity of the prose: {text}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tones(labels: &[&str]) -> ToneSet {
        ToneSet::new(labels.iter().map(|s| s.to_string()).collect()).unwrap()
    }

    #[test]
    fn opening_prompt_blends_tones_exactly_once() {
        let prompt = opening_prompt(&tones(&["gothic", "whimsical"]), None);
        assert!(prompt.contains("gothic, whimsical"));
        assert_eq!(prompt.matches("gothic").count(), 1);
        assert_eq!(prompt.matches("whimsical").count(), 1);
    }

    #[test]
    fn opening_prompt_includes_hint_when_present() {
        let prompt = opening_prompt(&tones(&["noir"]), Some("a stray cat leads the way"));
        assert!(prompt.contains("a stray cat leads the way"));
        assert!(prompt.contains("Incorporate this direction"));
    }

    #[test]
    fn opening_prompt_omits_hint_section_without_hint() {
        let prompt = opening_prompt(&tones(&["noir"]), None);
        assert!(!prompt.contains("narrative direction"));
    }

    #[test]
    fn opening_prompt_demands_a_dynamic_scene() {
        let prompt = opening_prompt(&tones(&["noir"]), None);
        assert!(prompt.contains("camera angle"));
        assert!(prompt.contains("pose or action"));
        assert!(prompt.contains("lighting"));
        assert!(prompt.contains("max 5 words"));
        assert!(prompt.contains("60-80 words"));
    }

    #[test]
    fn continuation_prompt_carries_story_and_tones() {
        let prompt = continuation_prompt(
            &tones(&["gothic", "whimsical"]),
            "The lighthouse keeper vanished at dusk.",
        );
        assert!(prompt.contains("The lighthouse keeper vanished at dusk."));
        assert!(prompt.contains("gothic, whimsical"));
        assert_eq!(prompt.matches("gothic").count(), 1);
        assert!(prompt.contains("60-80 words"));
    }

    #[test]
    fn continuation_prompt_requires_a_fresh_scene() {
        let prompt = continuation_prompt(&tones(&["noir"]), "It rained.");
        assert!(prompt.contains("new camera angle"));
        assert!(prompt.contains("new physical action"));
    }

    #[test]
    fn illustration_prompt_keeps_identity_and_replaces_style() {
        let prompt = illustration_prompt(
            "low-angle shot of the keeper climbing the spiral stair",
            "oil painting blended with neon noir",
        );
        assert!(prompt.starts_with("ARTISTIC STYLE MANDATE: oil painting blended with neon noir"));
        assert!(prompt.contains("SUBJECT MATTER: low-angle shot"));
        assert!(prompt.contains("facial features, hair, and clothing"));
        assert!(prompt.contains("Do NOT reuse the pose or camera angle"));
        assert!(prompt.contains("lighting and colour palette"));
    }

    #[test]
    fn narration_prompt_wraps_the_text_in_the_fixed_directive() {
        let prompt = narration_prompt("The sea held its breath.");
        assert!(prompt.contains("deep, resonant, and cinematic"));
        assert!(prompt.ends_with("The sea held its breath."));
    }
}
