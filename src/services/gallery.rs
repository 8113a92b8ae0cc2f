//! Lightbox navigation for the project gallery page. Library-only: the page
//! script drives it directly and the HTTP surface does not expose it.

use serde::Serialize;

use crate::models::GalleryImage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxKey {
    Escape,
    ArrowLeft,
    ArrowRight,
    Other,
}

impl LightboxKey {
    pub fn parse(key: &str) -> Self {
        match key {
            "Escape" => LightboxKey::Escape,
            "ArrowLeft" => LightboxKey::ArrowLeft,
            "ArrowRight" => LightboxKey::ArrowRight,
            _ => LightboxKey::Other,
        }
    }
}

/// What the lightbox currently shows.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LightboxView {
    pub index: usize,
    pub src: String,
    pub alt: String,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LightboxEvent {
    Shown(LightboxView),
    /// Closed; focus returns to the item at this index.
    Closed { focus: usize },
    Ignored,
}

pub struct Lightbox {
    items: Vec<GalleryImage>,
    current: usize,
    open: bool,
}

impl Lightbox {
    pub fn new(items: Vec<GalleryImage>) -> Self {
        Self {
            items,
            current: 0,
            open: false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Items without any image source cannot be shown.
    pub fn open(&mut self, index: usize) -> LightboxEvent {
        let Some(item) = self.items.get(index) else {
            return LightboxEvent::Ignored;
        };
        self.current = index;
        let Some(src) = item.source() else {
            return LightboxEvent::Ignored;
        };

        self.open = true;
        LightboxEvent::Shown(LightboxView {
            index,
            src: src.to_string(),
            alt: item.alt.clone(),
            caption: item.alt.clone(),
        })
    }

    pub fn close(&mut self) -> LightboxEvent {
        self.open = false;
        LightboxEvent::Closed {
            focus: self.current,
        }
    }

    pub fn next(&mut self) -> LightboxEvent {
        if self.items.is_empty() {
            return LightboxEvent::Ignored;
        }
        self.open((self.current + 1) % self.items.len())
    }

    pub fn previous(&mut self) -> LightboxEvent {
        if self.items.is_empty() {
            return LightboxEvent::Ignored;
        }
        let len = self.items.len();
        self.open((self.current + len - 1) % len)
    }

    /// Keys only act while the lightbox is open.
    pub fn handle_key(&mut self, key: LightboxKey) -> LightboxEvent {
        if !self.open {
            return LightboxEvent::Ignored;
        }
        match key {
            LightboxKey::Escape => self.close(),
            LightboxKey::ArrowLeft => self.previous(),
            LightboxKey::ArrowRight => self.next(),
            LightboxKey::Other => LightboxEvent::Ignored,
        }
    }
}
