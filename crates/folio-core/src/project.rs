/// Static project record supplied by the content collaborator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub year: &'static str,
    pub image: &'static str,
    pub image_detail: &'static str,
    pub description: &'static str,
    pub technologies: Technologies,
    /// Accent as an `r, g, b` triple.
    pub accent_rgb: [u8; 3],
    pub link: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Technologies {
    pub frontend: &'static str,
    pub backend: &'static str,
}

impl Project {
    pub fn accent_css(&self, alpha: f32) -> String {
        let [r, g, b] = self.accent_rgb;
        format!("rgba({}, {}, {}, {:.2})", r, g, b, alpha.clamp(0.0, 1.0))
    }

    /// Both images, for preloading.
    pub fn image_urls(&self) -> [&'static str; 2] {
        [self.image, self.image_detail]
    }
}
