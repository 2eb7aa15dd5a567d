//! Content Models
//!
//! Records held by the store. Field names match the JSON already sitting in
//! visitors' browsers, so they must not be renamed.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Records addressable by a string identifier
pub trait Keyed {
    fn id(&self) -> &str;
}

/// Image or video
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

/// Pan and zoom applied when rendering a gallery tile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl Transform {
    pub const IDENTITY: Transform = Transform { x: 0.0, y: 0.0, scale: 1.0 };

    /// CSS `transform` value for this pan/zoom
    pub fn to_css(&self) -> String {
        format!("translate({}px, {}px) scale({})", self.x, self.y, self.scale)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// One tile of the media gallery.
///
/// `url` is either a path to a bundled asset or an inline `data:` URL, which
/// can be several megabytes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub id: String,
    pub url: String,
    #[serde(default)]
    pub alt: String,
    #[serde(default)]
    pub category: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption_en: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption_zh: Option<String>,
    /// CSS object-position class
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transform: Option<Transform>,
}

impl GalleryItem {
    /// Freshly uploaded media with no caption and an identity transform
    pub fn new(id: impl Into<String>, url: impl Into<String>, kind: MediaKind) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            alt: String::new(),
            category: "lifestyle".to_string(),
            kind,
            caption_en: None,
            caption_zh: None,
            position: None,
            transform: Some(Transform::IDENTITY),
        }
    }
}

impl Keyed for GalleryItem {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    pub fn short_name(&self) -> &'static str {
        match self {
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
            Weekday::Sat => "Sat",
            Weekday::Sun => "Sun",
        }
    }

    pub fn full_name(&self) -> &'static str {
        match self {
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
            Weekday::Sun => "Sunday",
        }
    }

    pub fn from_short_name(name: &str) -> Option<Weekday> {
        Weekday::ALL.into_iter().find(|d| d.short_name() == name)
    }
}

/// Filming day, editing block or match in the weekly schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEvent {
    pub id: String,
    pub day: Weekday,
    pub time: String,
    pub title_en: String,
    #[serde(default)]
    pub title_zh: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl Keyed for ScheduleEvent {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Social platform tag.
///
/// Open-ended: links added in the editor may name platforms the site does
/// not ship a default for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Platform {
    Youtube,
    Instagram,
    Bilibili,
    Xiaohongshu,
    Other(String),
}

impl Platform {
    pub fn as_str(&self) -> &str {
        match self {
            Platform::Youtube => "youtube",
            Platform::Instagram => "instagram",
            Platform::Bilibili => "bilibili",
            Platform::Xiaohongshu => "xiaohongshu",
            Platform::Other(tag) => tag,
        }
    }
}

impl From<String> for Platform {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "youtube" => Platform::Youtube,
            "instagram" => Platform::Instagram,
            "bilibili" => Platform::Bilibili,
            "xiaohongshu" => Platform::Xiaohongshu,
            _ => Platform::Other(tag),
        }
    }
}

impl From<&str> for Platform {
    fn from(tag: &str) -> Self {
        Platform::from(tag.to_string())
    }
}

impl From<Platform> for String {
    fn from(platform: Platform) -> Self {
        match platform {
            Platform::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub id: String,
    pub platform: Platform,
    pub handle: String,
    pub url: String,
    /// Display string such as "50K"
    pub followers: String,
}

impl Keyed for SocialLink {
    fn id(&self) -> &str {
        &self.id
    }
}
