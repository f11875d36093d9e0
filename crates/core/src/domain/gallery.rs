/// Aspect-ratio derived presentation classes for post images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageShape {
    pub portrait: bool,
    pub ultra_tall: bool,
    pub landscape_wide: bool,
}

/// Classifies an image by its natural dimensions. Unloaded images (zero
/// width or height) get no classification.
pub fn classify(width: u32, height: u32) -> Option<ImageShape> {
    if width == 0 || height == 0 {
        return None;
    }
    let ratio = width as f64 / height as f64;
    Some(ImageShape {
        portrait: ratio < 0.75,
        ultra_tall: ratio < 0.5,
        landscape_wide: ratio > 2.2,
    })
}

/// One block of post content, as far as row grouping is concerned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentBlock {
    /// A paragraph holding exactly one image and no text.
    SoloImage(String),
    Other,
}

/// Layout decision for a run of content blocks: consecutive single-image
/// paragraphs collapse into shared rows when two or more are adjacent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutGroup {
    Row(Vec<String>),
    Single(String),
    Other,
}

pub fn group_rows(blocks: &[ContentBlock]) -> Vec<LayoutGroup> {
    let mut groups = Vec::new();
    let mut buffer: Vec<String> = Vec::new();
    for block in blocks {
        match block {
            ContentBlock::SoloImage(src) => buffer.push(src.clone()),
            ContentBlock::Other => {
                flush_buffer(&mut buffer, &mut groups);
                groups.push(LayoutGroup::Other);
            }
        }
    }
    flush_buffer(&mut buffer, &mut groups);
    groups
}

fn flush_buffer(buffer: &mut Vec<String>, groups: &mut Vec<LayoutGroup>) {
    match buffer.len() {
        0 => {}
        1 => groups.push(LayoutGroup::Single(buffer.remove(0))),
        _ => groups.push(LayoutGroup::Row(std::mem::take(buffer))),
    }
}

#[cfg(test)]
mod tests {
    use super::{ContentBlock, LayoutGroup, classify, group_rows};

    #[test]
    fn classify_thresholds() {
        let square = classify(100, 100).unwrap();
        assert!(!square.portrait && !square.ultra_tall && !square.landscape_wide);
        let tall = classify(60, 100).unwrap();
        assert!(tall.portrait && !tall.ultra_tall);
        let very_tall = classify(40, 100).unwrap();
        assert!(very_tall.portrait && very_tall.ultra_tall);
        let wide = classify(250, 100).unwrap();
        assert!(wide.landscape_wide);
        assert!(classify(0, 100).is_none());
    }

    #[test]
    fn adjacent_solo_images_form_a_row() {
        let blocks = vec![
            ContentBlock::SoloImage("a".to_string()),
            ContentBlock::SoloImage("b".to_string()),
            ContentBlock::Other,
            ContentBlock::SoloImage("c".to_string()),
        ];
        let groups = group_rows(&blocks);
        assert_eq!(
            groups,
            vec![
                LayoutGroup::Row(vec!["a".to_string(), "b".to_string()]),
                LayoutGroup::Other,
                LayoutGroup::Single("c".to_string()),
            ]
        );
    }

    #[test]
    fn trailing_run_is_flushed() {
        let blocks = vec![
            ContentBlock::Other,
            ContentBlock::SoloImage("a".to_string()),
            ContentBlock::SoloImage("b".to_string()),
            ContentBlock::SoloImage("c".to_string()),
        ];
        let groups = group_rows(&blocks);
        assert_eq!(groups.len(), 2);
        assert_eq!(
            groups[1],
            LayoutGroup::Row(vec!["a".to_string(), "b".to_string(), "c".to_string()])
        );
    }
}
