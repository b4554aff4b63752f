//! Prompt composition for generation and extension jobs.
//!
//! Clause order is fixed for reproducibility: base prompt, aspect style,
//! transition, audio, voiceover, subtitles. Each optional clause is a fixed
//! sentence with a trailing space.

use veogen_models::GenerationRequest;

/// Instruction sent with a user-supplied audio track to derive its style
/// description.
pub const AUDIO_ANALYSIS_INSTRUCTION: &str = "Describe the mood, instruments, and style of this \
     audio in detail for a video generation prompt. If there is a voice, describe the tone and \
     content.";

/// Compose the full prompt for the primary job.
pub fn compose_prompt(request: &GenerationRequest, audio_description: &str) -> String {
    let mut prompt = format!("{}. ", request.prompt);
    prompt.push_str(&format!(
        "Desired visual style: {} aspect ratio content. ",
        request.aspect_ratio
    ));

    if request.reference_images.len() > 1 {
        prompt.push_str(&format!(
            "Create a cinematic sequence using the reference images. Use {} transitions. ",
            request.transition_style
        ));
    }

    if !audio_description.is_empty() {
        prompt.push_str(&format!("Audio style: {}. ", audio_description));
    }

    if let Some(voiceover) = request.voiceover_script.as_deref().filter(|v| !v.is_empty()) {
        prompt.push_str(&format!("Voiceover: \"{}\". ", voiceover));
    }

    if let Some(subtitles) = request.subtitle_text.as_deref().filter(|s| !s.is_empty()) {
        prompt.push_str(&format!("Subtitles: \"{}\". ", subtitles));
    }

    prompt
}

/// Prompt for the extension job, chaining onto the primary job's output.
pub fn extension_prompt(composed: &str, remaining_seconds: u32) -> String {
    format!(
        "Continue the previous scene naturally for another {} seconds, maintaining the same \
         atmosphere and lighting. {}",
        remaining_seconds, composed
    )
}

/// Instruction for the prompt-enhancement helper.
pub fn enhance_instruction(prompt: &str, with_images: bool) -> String {
    let mut instruction = format!(
        "Act as a cinematic director. Enhance the following video generation prompt to be more \
         descriptive, detailed, and visually stunning for an AI video model. Keep the core intent \
         but add details about lighting, camera movement, and atmosphere. Original prompt: \
         \"{}\"",
        prompt
    );
    if with_images {
        instruction.push_str(
            " Also consider the visual elements from the attached reference images to make the \
             prompt consistent.",
        );
    }
    instruction
}

/// Instruction for the voiceover-script helper.
pub fn voiceover_instruction(theme: &str) -> String {
    format!(
        "Write a short, engaging, and poetic voiceover script (about 20-40 words) for a video \
         with the following theme: \"{}\".",
        theme
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use veogen_models::{AspectRatio, GenerationRequest, ImageAsset};

    fn request() -> GenerationRequest {
        GenerationRequest::new("sunset over ocean", 5)
    }

    fn image(n: u8) -> ImageAsset {
        ImageAsset::new(vec![n], "image/png")
    }

    #[test]
    fn test_base_and_aspect_clause_always_present() {
        let mut req = request();
        req.aspect_ratio = AspectRatio::Wide16x9;
        let prompt = compose_prompt(&req, "");
        assert!(prompt.starts_with("sunset over ocean. "));
        assert!(prompt.contains("Desired visual style: 16:9 aspect ratio content. "));
    }

    #[test]
    fn test_transition_clause_only_with_multiple_images() {
        let mut req = request();
        req.transition_style = "crossfade".to_string();

        req.reference_images = vec![image(1)];
        assert!(!compose_prompt(&req, "").contains("transitions"));

        req.reference_images.push(image(2));
        let prompt = compose_prompt(&req, "");
        assert!(prompt.contains("Create a cinematic sequence using the reference images."));
        assert!(prompt.contains("Use crossfade transitions. "));
    }

    #[test]
    fn test_audio_clause_iff_description_nonempty() {
        let req = request();
        assert!(!compose_prompt(&req, "").contains("Audio style:"));
        assert!(compose_prompt(&req, "Cinematic").contains("Audio style: Cinematic. "));
    }

    #[test]
    fn test_voiceover_and_subtitle_clauses() {
        let mut req = request();
        assert!(!compose_prompt(&req, "").contains("Voiceover:"));

        req.voiceover_script = Some("welcome aboard".to_string());
        req.subtitle_text = Some("Episode One".to_string());
        let prompt = compose_prompt(&req, "");
        assert!(prompt.contains("Voiceover: \"welcome aboard\". "));
        assert!(prompt.contains("Subtitles: \"Episode One\". "));

        // Empty strings behave like absent fields
        req.voiceover_script = Some(String::new());
        req.subtitle_text = Some(String::new());
        let prompt = compose_prompt(&req, "");
        assert!(!prompt.contains("Voiceover:"));
        assert!(!prompt.contains("Subtitles:"));
    }

    #[test]
    fn test_clause_order_is_fixed() {
        let mut req = request();
        req.reference_images = vec![image(1), image(2)];
        req.transition_style = "smooth".to_string();
        req.voiceover_script = Some("vo".to_string());
        req.subtitle_text = Some("sub".to_string());

        let prompt = compose_prompt(&req, "jazz");
        let aspect = prompt.find("Desired visual style").unwrap();
        let transition = prompt.find("cinematic sequence").unwrap();
        let audio = prompt.find("Audio style").unwrap();
        let voiceover = prompt.find("Voiceover").unwrap();
        let subtitles = prompt.find("Subtitles").unwrap();
        assert!(aspect < transition && transition < audio && audio < voiceover);
        assert!(voiceover < subtitles);
    }

    #[test]
    fn test_extension_prompt_names_remaining_seconds() {
        let ext = extension_prompt("base prompt. ", 7);
        assert!(ext.contains("another 7 seconds"));
        assert!(ext.ends_with("base prompt. "));
    }

    #[test]
    fn test_enhance_instruction_mentions_images_only_when_present() {
        assert!(!enhance_instruction("p", false).contains("reference images"));
        assert!(enhance_instruction("p", true).contains("reference images"));
    }
}
