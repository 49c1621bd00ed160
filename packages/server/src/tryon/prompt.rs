//! Natural-language instructions sent to the generation providers.
//!
//! Everything here is pure: identifiers such as the session token come from
//! the caller, so equal inputs always produce equal prompts.

use super::style::{BlouseStyle, Pose};

/// System instruction attached to every multimodal call.
pub const SYSTEM_INSTRUCTION: &str = "You are an expert fashion AI that can generate realistic \
models wearing sarees. You can incorporate uploaded saree designs into photorealistic fashion \
photography. Always generate images with consistent dimensions and quality.";

/// Garment description used when no catalog item applies.
pub const DEFAULT_GARMENT: &str =
    "beautiful traditional saree with intricate patterns and elegant border";

/// Which saree components were uploaded with the request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Components {
    pub body: bool,
    pub pallu: bool,
    pub border: bool,
}

impl Components {
    pub fn any(&self) -> bool {
        self.body || self.pallu || self.border
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PromptInput<'a> {
    pub pose: Pose,
    pub blouse: BlouseStyle,
    pub garment: &'a str,
    pub components: Components,
    pub session_id: Option<&'a str>,
    pub width: u32,
    pub height: u32,
}

/// The two prompt flavours built for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptPair {
    /// Refers to the attached component images.
    pub multimodal: String,
    /// Self-contained; describes the design in words.
    pub text_only: String,
}

impl PromptPair {
    /// Prompt for the multimodal backend given whether images are attached.
    pub fn for_primary(&self, has_images: bool) -> &str {
        if has_images {
            &self.multimodal
        } else {
            &self.text_only
        }
    }
}

pub fn build_prompts(input: &PromptInput<'_>) -> PromptPair {
    PromptPair {
        multimodal: multimodal_prompt(input),
        text_only: text_only_prompt(input),
    }
}

fn session_tag(input: &PromptInput<'_>) -> String {
    input
        .session_id
        .map(|id| format!(" (Session: {id})"))
        .unwrap_or_default()
}

fn consistency_lines(input: &PromptInput<'_>) -> Vec<String> {
    let Some(session_id) = input.session_id else {
        return Vec::new();
    };
    vec![
        format!(
            "CONSISTENCY: This image belongs to session {session_id}. Keep the SAME model \
             appearance, facial features, skin tone, and body proportions as every other image \
             in this session"
        ),
        format!(
            "BLOUSE CONSISTENCY: Use EXACTLY the same blouse color and design across all poses - {} blouse",
            input.blouse.description()
        ),
        "HAIRSTYLE CONSISTENCY: Keep the SAME hairstyle, hair length, hair color, and hair \
         accessories across all poses"
            .to_string(),
        "CRITICAL: Keep the same woman's face, hair, blouse color, and saree pattern in every pose \
         of this session"
            .to_string(),
    ]
}

fn photography_lines(input: &PromptInput<'_>) -> Vec<String> {
    vec![
        "Drape the saree authentically in traditional Indian style with proper pleats and pallu \
         positioning"
            .to_string(),
        "The saree should look well-fitted and naturally draped".to_string(),
        "Professional fashion photography quality with studio lighting".to_string(),
        "Clean neutral background (light gray or white) to highlight the saree".to_string(),
        format!(
            "Generate the image in exactly {}x{} pixels, photorealistic with sharp focus",
            input.width, input.height
        ),
    ]
}

fn component_instructions(components: Components) -> Vec<&'static str> {
    let mut out = Vec::new();
    if components.body {
        out.push("Use the main saree fabric pattern from the uploaded body image.");
    }
    if components.pallu {
        out.push("Use the decorative pallu design from the uploaded pallu image.");
    }
    if components.border {
        out.push("Use the border pattern from the uploaded border image.");
    }
    out
}

/// Describe the design in words, for providers that cannot see the uploads.
fn design_details(components: Components) -> Vec<&'static str> {
    let mut details = Vec::new();
    if components.body {
        details.push("Main saree fabric with intricate traditional patterns");
        details.push("Rich texture and authentic Indian craftsmanship");
    }
    if components.pallu {
        details.push("Decorative pallu with ornate designs and detailing");
        details.push("Traditional pallu styling meant to drape over the shoulder");
    }
    if components.border {
        details.push("Elaborate border work with traditional motifs");
        details.push("Contrasting border design that complements the main fabric");
    }
    if details.is_empty() {
        details = vec![
            "Traditional saree with classic Indian patterns",
            "Elegant fabric suitable for formal occasions",
            "Authentic Indian craftsmanship and styling",
        ];
    }
    details
}

fn multimodal_prompt(input: &PromptInput<'_>) -> String {
    let mut requirements = vec![
        "Generate an elegant Indian woman model with natural features and warm complexion"
            .to_string(),
        format!("She wears a {} blouse", input.blouse.description()),
    ];
    requirements.extend(consistency_lines(input));
    requirements.extend(
        component_instructions(input.components)
            .into_iter()
            .map(str::to_string),
    );
    requirements.push(format!("Position her in a {} pose", input.pose.description()));
    requirements.push(
        "Combine all uploaded saree elements (fabric, pallu, border) naturally into one saree \
         with IDENTICAL patterns"
            .to_string(),
    );
    requirements.extend(photography_lines(input));

    let numbered = requirements
        .iter()
        .enumerate()
        .map(|(idx, line)| format!("{}. {}", idx + 1, line))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "VIRTUAL SAREE MODEL GENERATION{tag}\n\n\
         Create a photorealistic image of a beautiful Indian woman wearing a {garment} that \
         incorporates the designs from the uploaded images.\n\n\
         REQUIREMENTS:\n{numbered}\n\n\
         STYLE: High-end fashion photography, professional modeling, perfect lighting, sharp focus",
        tag = session_tag(input),
        garment = input.garment,
    )
}

fn text_only_prompt(input: &PromptInput<'_>) -> String {
    let mut model_lines = vec![
        "Elegant Indian woman with natural features and warm complexion".to_string(),
        "Professional model appearance suitable for saree photography".to_string(),
        "Confident and graceful demeanor".to_string(),
    ];
    model_lines.extend(consistency_lines(input));

    let mut technical = vec![format!(
        "She should be wearing a {} blouse",
        input.blouse.description()
    )];
    technical.extend(photography_lines(input));

    let bullets = |lines: &[String]| {
        lines
            .iter()
            .map(|line| format!("- {line}"))
            .collect::<Vec<_>>()
            .join("\n")
    };
    let details = design_details(input.components)
        .into_iter()
        .map(|line| format!("- {line}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Create a highly realistic photograph of a beautiful Indian woman wearing a {garment} in a \
         {pose}{tag}.\n\n\
         MODEL CHARACTERISTICS:\n{model}\n\n\
         SAREE DESIGN DETAILS:\n{details}\n\n\
         TECHNICAL REQUIREMENTS:\n{technical}\n\n\
         STYLE: Professional fashion photography, high-end fashion shoot quality, perfect lighting, \
         sharp focus",
        garment = input.garment,
        pose = input.pose.description(),
        tag = session_tag(input),
        model = bullets(model_lines.as_slice()),
        technical = bullets(technical.as_slice()),
    )
}
