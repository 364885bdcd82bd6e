use std::fmt::Write;

/// Prompt asking for a JSON analysis of a sticker description
pub fn analysis_prompt(description: &str, image_url: Option<&str>) -> String {
    let mut prompt = format!(
        r#"Analyze the following sticker content. The sticker is described as: "{description}".
Optionally, consider it might have an image associated (though image data is not directly processed in this text-only request).

Provide your analysis in JSON format with the following fields:
- "summary": A brief one-sentence summary of the sticker's theme.
- "suggestedTags": An array of 3-5 relevant lowercase keyword tags.
- "sentiment": Overall sentiment conveyed by the description ('Positive', 'Neutral', 'Negative').
- "safetyRating": A conceptual safety rating ('Safe', 'Caution', 'Unsafe'). For example, if description implies violence, it's 'Unsafe'. Default to 'Safe'.

Example for a "Cute happy cat sticker":
{{
  "summary": "A charming sticker featuring a joyful and adorable cat.",
  "suggestedTags": ["cat", "cute", "happy", "animal", "pet"],
  "sentiment": "Positive",
  "safetyRating": "Safe"
}}

Now, analyze this content:
Description: "{description}"
"#
    );
    if let Some(url) = image_url.filter(|url| !url.trim().is_empty()) {
        let _ = writeln!(
            prompt,
            "(Image associated: {url} - note: analyze based on description for now)"
        );
    }
    prompt
}

/// Prompt asking for a one or two sentence product description
pub fn description_prompt(name: &str, keywords: Option<&str>) -> String {
    let keywords_line = keywords
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(|k| format!("Keywords/Themes: \"{k}\"\n"))
        .unwrap_or_default();

    format!(
        r#"Generate a catchy and appealing product description for a sticker.
Sticker Name: "{name}"
{keywords_line}
The description should be 1-2 sentences long, highlighting its appeal.
Be creative and engaging. Do not include the sticker name in the description itself unless it flows very naturally.
Focus on what makes the sticker desirable.

Example for Sticker Name: "Cosmic Voyager", Keywords: "space, astronaut, adventure":
"Embark on an interstellar journey! This vibrant sticker captures the thrill of exploration, perfect for adventurers and dreamers."

Now, generate a description for:
Sticker Name: "{name}"
{keywords_line}"#
    )
}
