/// Named analysis modes. Each mode except `Custom` is bound to a canned prompt;
/// `Custom` draws its prompt from free text supplied by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisMode {
    General,
    Objects,
    Text,
    People,
    Scene,
    Quality,
    Custom,
}

impl AnalysisMode {
    pub const ALL: [AnalysisMode; 7] = [
        AnalysisMode::General,
        AnalysisMode::Objects,
        AnalysisMode::Text,
        AnalysisMode::People,
        AnalysisMode::Scene,
        AnalysisMode::Quality,
        AnalysisMode::Custom,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            AnalysisMode::General => "general",
            AnalysisMode::Objects => "objects",
            AnalysisMode::Text => "text",
            AnalysisMode::People => "people",
            AnalysisMode::Scene => "scene",
            AnalysisMode::Quality => "quality",
            AnalysisMode::Custom => "custom",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AnalysisMode::General => "General analysis",
            AnalysisMode::Objects => "Object detection",
            AnalysisMode::Text => "Text extraction (OCR)",
            AnalysisMode::People => "People analysis",
            AnalysisMode::Scene => "Scene recognition",
            AnalysisMode::Quality => "Quality assessment",
            AnalysisMode::Custom => "Custom prompt",
        }
    }

    /// The canned prompt for this mode, or `None` for `Custom`.
    pub fn prompt(&self) -> Option<&'static str> {
        match self {
            AnalysisMode::General => Some(
                "Describe this image in detail, including: main objects, colors, \
                 context, emotions, and notable details.",
            ),
            AnalysisMode::Objects => Some(
                "List ALL objects in this image. Count the quantity and describe \
                 the position of each type.",
            ),
            AnalysisMode::Text => Some(
                "Extract ALL text from this image. Include text on signs, labels, \
                 posters, and documents.",
            ),
            AnalysisMode::People => Some(
                "Analyze people in the image: count, estimated gender, estimated \
                 age, clothing, actions, emotions, interactions.",
            ),
            AnalysisMode::Scene => Some(
                "Analyze the scene: location (indoor/outdoor), time (day/night), \
                 weather, lighting, overall atmosphere.",
            ),
            AnalysisMode::Quality => Some(
                "Evaluate image quality: resolution, sharpness, color balance, \
                 composition, shooting angle, lighting. Rate 1-10 and suggest \
                 improvements.",
            ),
            AnalysisMode::Custom => None,
        }
    }
}
