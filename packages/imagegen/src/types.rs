/// A reference image attached to a generation request, as base64 text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputImage {
    pub mime_type: String,
    pub data: String,
}

impl InputImage {
    /// Accept either raw base64 or a `data:<mime>;base64,<payload>` URL.
    ///
    /// For raw base64 the mime type is sniffed from the encoded magic bytes,
    /// falling back to PNG.
    pub fn from_base64(raw: &str) -> Self {
        let raw = raw.trim();
        if let Some(rest) = raw.strip_prefix("data:")
            && let Some((header, payload)) = rest.split_once(',')
        {
            let mime = header.strip_suffix(";base64").unwrap_or(header);
            let mime_type = if mime.is_empty() {
                sniff_mime(payload).to_string()
            } else {
                mime.to_string()
            };
            return Self {
                mime_type,
                data: payload.to_string(),
            };
        }

        Self {
            mime_type: sniff_mime(raw).to_string(),
            data: raw.to_string(),
        }
    }
}

fn sniff_mime(data: &str) -> &'static str {
    if data.starts_with("/9j/") {
        "image/jpeg"
    } else if data.starts_with("UklGR") {
        "image/webp"
    } else if data.starts_with("R0lGOD") {
        "image/gif"
    } else {
        "image/png"
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub prompt: String,
    /// Sent as a system instruction by providers that support one.
    pub system_instruction: Option<String>,
    pub images: Vec<InputImage>,
    pub width: u32,
    pub height: u32,
}

impl GenerationRequest {
    /// Size in the `WIDTHxHEIGHT` form most image APIs accept.
    pub fn size(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }

    /// Reduced `w:h` aspect ratio, e.g. `2:3` for 1024x1536.
    pub fn aspect_ratio(&self) -> String {
        let divisor = gcd(self.width, self.height).max(1);
        format!("{}:{}", self.width / divisor, self.height / divisor)
    }
}

fn gcd(a: u32, b: u32) -> u32 {
    if b == 0 { a } else { gcd(b, a % b) }
}

/// One image produced by a provider, base64-encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationResponse {
    /// Any text the provider returned alongside the images.
    pub text: Option<String>,
    pub images: Vec<GeneratedImage>,
}

impl GenerationResponse {
    /// Take the first image, if any.
    pub fn into_first_image(self) -> Option<GeneratedImage> {
        self.images.into_iter().next()
    }
}
