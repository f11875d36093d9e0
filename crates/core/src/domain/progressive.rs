/// Progressive loading of one managed image: the visible source drops to a
/// blurred low-resolution placeholder immediately, then swaps to the
/// thumbnail variant once its preload completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    /// Placeholder visible, blur applied, thumbnail preloading.
    Placeholder,
    /// Thumbnail visible, blur cleared.
    Loaded,
    /// Thumbnail preload failed. The placeholder stays visible and blurred;
    /// degraded but never a crash.
    Failed,
}

#[derive(Debug, Clone)]
pub struct ProgressiveImage {
    base_url: String,
    phase: LoadPhase,
}

impl ProgressiveImage {
    /// Only site-asset images are managed; anything else keeps its original
    /// source untouched.
    pub fn manage(src: &str, asset_prefix: &str) -> Option<Self> {
        if src.is_empty() || !src.contains(asset_prefix) {
            return None;
        }
        let base_url = src.split('?').next().unwrap_or(src).to_string();
        Some(ProgressiveImage {
            base_url,
            phase: LoadPhase::Placeholder,
        })
    }

    pub fn placeholder_url(&self) -> String {
        format!("{}?size=placeholder", self.base_url)
    }

    pub fn thumbnail_url(&self) -> String {
        format!("{}?size=thumbnail", self.base_url)
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    /// The source the page should currently display.
    pub fn visible_url(&self) -> String {
        match self.phase {
            LoadPhase::Placeholder | LoadPhase::Failed => self.placeholder_url(),
            LoadPhase::Loaded => self.thumbnail_url(),
        }
    }

    pub fn blurred(&self) -> bool {
        !matches!(self.phase, LoadPhase::Loaded)
    }

    pub fn thumbnail_loaded(&mut self) {
        if self.phase == LoadPhase::Placeholder {
            self.phase = LoadPhase::Loaded;
        }
    }

    pub fn thumbnail_failed(&mut self) {
        if self.phase == LoadPhase::Placeholder {
            self.phase = LoadPhase::Failed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{LoadPhase, ProgressiveImage};

    #[test]
    fn only_asset_images_are_managed() {
        assert!(ProgressiveImage::manage("/assets/cover.png", "/assets/").is_some());
        assert!(ProgressiveImage::manage("https://elsewhere.example/x.png", "/assets/").is_none());
        assert!(ProgressiveImage::manage("", "/assets/").is_none());
    }

    #[test]
    fn variant_urls_drop_existing_query() {
        let image = ProgressiveImage::manage("/assets/cover.png?size=full", "/assets/").unwrap();
        assert_eq!(image.placeholder_url(), "/assets/cover.png?size=placeholder");
        assert_eq!(image.thumbnail_url(), "/assets/cover.png?size=thumbnail");
    }

    #[test]
    fn load_completion_swaps_and_unblurs() {
        let mut image = ProgressiveImage::manage("/assets/cover.png", "/assets/").unwrap();
        assert!(image.blurred());
        assert_eq!(image.visible_url(), "/assets/cover.png?size=placeholder");
        image.thumbnail_loaded();
        assert_eq!(image.phase(), LoadPhase::Loaded);
        assert!(!image.blurred());
        assert_eq!(image.visible_url(), "/assets/cover.png?size=thumbnail");
    }

    #[test]
    fn failure_keeps_blurred_placeholder() {
        let mut image = ProgressiveImage::manage("/assets/cover.png", "/assets/").unwrap();
        image.thumbnail_failed();
        assert_eq!(image.phase(), LoadPhase::Failed);
        assert!(image.blurred());
        assert_eq!(image.visible_url(), "/assets/cover.png?size=placeholder");
        // A late load signal after failure does not resurrect the swap.
        image.thumbnail_loaded();
        assert_eq!(image.phase(), LoadPhase::Failed);
    }
}
