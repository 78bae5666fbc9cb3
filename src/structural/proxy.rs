//! Proxy: defer the expensive image load until it is first displayed.

use std::cell::OnceCell;

use tracing::{debug, instrument};

pub trait Image {
    /// Display the image, returning the log of what happened.
    fn display(&self) -> Vec<String>;
}

/// The real subject. Loading happens on construction.
#[derive(Debug, Clone)]
pub struct RealImage {
    path: String,
}

impl RealImage {
    /// Load the image, returning it with the load log line.
    pub fn load(path: impl Into<String>) -> (Self, String) {
        let path = path.into();
        let line = format!("Loading image from disk: {path}");
        (Self { path }, line)
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl Image for RealImage {
    fn display(&self) -> Vec<String> {
        vec![format!("Displaying image: {}", self.path)]
    }
}

/// Stands in for a [`RealImage`] and loads it at most once.
#[derive(Debug)]
pub struct ImageProxy {
    path: String,
    real: OnceCell<RealImage>,
}

impl ImageProxy {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            real: OnceCell::new(),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.real.get().is_some()
    }
}

impl Image for ImageProxy {
    #[instrument(level = "debug", skip(self), fields(path = %self.path))]
    fn display(&self) -> Vec<String> {
        let mut log = Vec::new();
        let real = self.real.get_or_init(|| {
            debug!("first access, loading real image");
            let (image, line) = RealImage::load(self.path.clone());
            log.push(line);
            image
        });
        log.extend(real.display());
        log
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_new_proxy_when_created_then_image_is_not_loaded() {
        let proxy = ImageProxy::new("image.png");
        assert!(!proxy.is_loaded());
    }

    #[test]
    fn given_proxy_when_displayed_twice_then_loads_only_once() {
        let proxy = ImageProxy::new("image.png");

        let first = proxy.display();
        let second = proxy.display();

        assert_eq!(
            first,
            vec!["Loading image from disk: image.png", "Displaying image: image.png"]
        );
        assert_eq!(second, vec!["Displaying image: image.png"]);
        assert!(proxy.is_loaded());
    }
}
