use eframe::egui::Color32;

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub background: Color32,
    pub foreground: Color32,
    pub muted: Color32,
    pub question_size: f32,
    pub option_size: f32,
    pub answer_size: f32,
    pub status_size: f32,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            background: Color32::WHITE,
            foreground: Color32::BLACK,
            muted: Color32::from_rgb(0x80, 0x80, 0x80),
            question_size: 72.0,
            option_size: 52.0,
            answer_size: 72.0,
            status_size: 36.0,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            background: Color32::from_rgb(0x1E, 0x1E, 0x1E),
            foreground: Color32::WHITE,
            muted: Color32::from_rgb(0x90, 0x90, 0x90),
            ..Self::light()
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            "dark" => Self::dark(),
            _ => Self::light(),
        }
    }
}
