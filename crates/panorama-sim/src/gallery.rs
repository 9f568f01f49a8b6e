//! Panorama gallery navigation.

/// Ordered panorama list with a wrapping cursor.
#[derive(Debug, Clone, Default)]
pub struct PanoramaGallery {
    panoramas: Vec<String>,
    current: usize,
}

impl PanoramaGallery {
    /// `initial` is clamped into range.
    pub fn new(panoramas: Vec<String>, initial: usize) -> Self {
        let current = initial.min(panoramas.len().saturating_sub(1));
        Self { panoramas, current }
    }

    pub fn len(&self) -> usize {
        self.panoramas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panoramas.is_empty()
    }

    /// The panorama on display, or `None` for an empty gallery.
    pub fn current(&self) -> Option<(usize, &str)> {
        self.panoramas
            .get(self.current)
            .map(|name| (self.current, name.as_str()))
    }

    /// Advance to the next panorama, wrapping to the first.
    pub fn next(&mut self) -> Option<(usize, &str)> {
        if self.panoramas.is_empty() {
            return None;
        }
        self.current = (self.current + 1) % self.panoramas.len();
        self.current()
    }

    /// Step back to the previous panorama, wrapping to the last.
    pub fn previous(&mut self) -> Option<(usize, &str)> {
        if self.panoramas.is_empty() {
            return None;
        }
        self.current = (self.current + self.panoramas.len() - 1) % self.panoramas.len();
        self.current()
    }
}
