// Prompt construction for the recognize call
// Author: kelexine (https://github.com/kelexine)

/// Build the instruction prompt embedding the resolved target language name.
///
/// The wording directs the model to extract every piece of text in the image,
/// translate all of it, and answer with plain text only.
pub fn build_prompt(language_name: &str) -> String {
    format!(
        "Recognize all text in the image, then translate it into {}. \
         The image may contain text in multiple languages; translate all of it accurately. \
         Reply with the translated plain text only, without markdown formatting or additional commentary.",
        language_name
    )
}
