use crate::parser::GalleryEntry;

/// Cycling cursor over one card's gallery.
///
/// Only cards with more than one image get a carousel; the gallery is fixed once
/// the card is built.
#[derive(Debug, Clone, PartialEq)]
pub struct Carousel {
    gallery: Vec<GalleryEntry>,
    index: usize,
}

impl Carousel {
    /// `None` when there is nothing to cycle through (0 or 1 entries).
    pub fn attach(gallery: Vec<GalleryEntry>) -> Option<Self> {
        (gallery.len() > 1).then_some(Self { gallery, index: 0 })
    }

    #[cfg(test)]
    pub fn index(&self) -> usize {
        self.index
    }

    #[cfg(test)]
    pub fn total(&self) -> usize {
        self.gallery.len()
    }

    /// Move the cursor by `step` (wrapping both ways) and return the new image uri.
    pub fn advance(&mut self, step: isize) -> &str {
        let total = self.gallery.len() as isize;
        self.index = (self.index as isize + step).rem_euclid(total) as usize;
        &self.gallery[self.index].uri
    }
}
