use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct GalleryImage {
    pub src: String,
    pub alt: Option<String>,
}

impl GalleryImage {
    /// The original-resolution variant shown inside the lightbox.
    pub fn full_res_url(&self) -> String {
        let base = self.src.split('?').next().unwrap_or(&self.src);
        format!("{base}?size=full")
    }
}

/// Lightbox over one gallery: a current index with bounded prev/next
/// navigation.
#[derive(Debug, Clone)]
pub struct Lightbox {
    gallery: Vec<GalleryImage>,
    index: usize,
    open: bool,
}

impl Lightbox {
    pub fn closed() -> Self {
        Lightbox {
            gallery: Vec::new(),
            index: 0,
            open: false,
        }
    }

    pub fn open(&mut self, gallery: Vec<GalleryImage>, start_index: usize) {
        self.index = start_index.min(gallery.len().saturating_sub(1));
        self.gallery = gallery;
        self.open = !self.gallery.is_empty();
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn current(&self) -> Option<&GalleryImage> {
        if !self.open {
            return None;
        }
        self.gallery.get(self.index)
    }

    pub fn prev_enabled(&self) -> bool {
        self.open && self.index > 0
    }

    pub fn next_enabled(&self) -> bool {
        self.open && self.index + 1 < self.gallery.len()
    }

    pub fn show_next(&mut self) {
        if self.next_enabled() {
            self.index += 1;
        }
    }

    pub fn show_prev(&mut self) {
        if self.prev_enabled() {
            self.index -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{GalleryImage, Lightbox};

    fn image(name: &str) -> GalleryImage {
        GalleryImage {
            src: format!("/assets/{name}.png?size=thumbnail"),
            alt: None,
        }
    }

    #[test]
    fn full_res_swaps_size_query() {
        assert_eq!(image("a").full_res_url(), "/assets/a.png?size=full");
    }

    #[test]
    fn navigation_stops_at_bounds() {
        let mut lightbox = Lightbox::closed();
        lightbox.open(vec![image("a"), image("b")], 0);
        assert!(!lightbox.prev_enabled());
        assert!(lightbox.next_enabled());
        lightbox.show_next();
        assert!(!lightbox.next_enabled());
        lightbox.show_next();
        assert_eq!(lightbox.current().unwrap().src, image("b").src);
        lightbox.show_prev();
        assert!(!lightbox.prev_enabled());
    }

    #[test]
    fn empty_gallery_never_opens() {
        let mut lightbox = Lightbox::closed();
        lightbox.open(Vec::new(), 0);
        assert!(!lightbox.is_open());
        assert!(lightbox.current().is_none());
    }

    #[test]
    fn start_index_clamped_to_gallery() {
        let mut lightbox = Lightbox::closed();
        lightbox.open(vec![image("a"), image("b")], 9);
        assert_eq!(lightbox.current().unwrap().src, image("b").src);
    }
}
