//! Bundled default content, compiled into the site.

use crate::model::{GalleryItem, MediaKind, Platform, ScheduleEvent, SocialLink, Transform};

/// Number of bundled gallery images (`/image/1.jpg` .. `/image/12.jpg`)
const BUNDLED_GALLERY_LEN: usize = 12;

pub const DEFAULT_HERO_IMAGE: &str = "/image/cover.jpg";
pub const DEFAULT_PROFILE_IMAGE: &str = "/image/15.jpg";

/// Dataset used whenever storage holds nothing usable
#[derive(Debug, Clone, PartialEq)]
pub struct Defaults {
    pub gallery: Vec<GalleryItem>,
    pub schedule: Vec<ScheduleEvent>,
    pub social: Vec<SocialLink>,
    pub hero_image: String,
    pub profile_image: String,
}

impl Defaults {
    pub fn bundled() -> Self {
        Self {
            gallery: bundled_gallery(),
            schedule: Vec::new(),
            social: bundled_social(),
            hero_image: DEFAULT_HERO_IMAGE.to_string(),
            profile_image: DEFAULT_PROFILE_IMAGE.to_string(),
        }
    }

    /// Empty lists and blank images
    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        Self {
            gallery: Vec::new(),
            schedule: Vec::new(),
            social: Vec::new(),
            hero_image: String::new(),
            profile_image: String::new(),
        }
    }
}

impl Default for Defaults {
    fn default() -> Self {
        Self::bundled()
    }
}

fn bundled_gallery() -> Vec<GalleryItem> {
    (1..=BUNDLED_GALLERY_LEN)
        .map(|n| GalleryItem {
            id: format!("p{}", n),
            url: format!("/image/{}.jpg", n),
            alt: format!("Local image {}", n),
            category: "lifestyle".to_string(),
            kind: MediaKind::Image,
            caption_en: Some(String::new()),
            caption_zh: Some(String::new()),
            position: Some("object-center".to_string()),
            transform: Some(Transform::IDENTITY),
        })
        .collect()
}

fn bundled_social() -> Vec<SocialLink> {
    let link = |id: &str, platform: Platform, handle: &str, url: &str, followers: &str| SocialLink {
        id: id.to_string(),
        platform,
        handle: handle.to_string(),
        url: url.to_string(),
        followers: followers.to_string(),
    };
    vec![
        link("s1", Platform::Youtube, "@RillieXTennis", "https://youtube.com", "50K"),
        link("s2", Platform::Instagram, "@RillieX_official", "https://instagram.com", "120K"),
        link("s3", Platform::Bilibili, "RillieX网球", "https://bilibili.com", "85K"),
        link(
            "s4",
            Platform::Xiaohongshu,
            "RillieX",
            "https://www.xiaohongshu.com/user/profile/5ca84a91000000001103b763",
            "90K",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_gallery() {
        let defaults = Defaults::bundled();
        assert_eq!(defaults.gallery.len(), 12);
        assert_eq!(defaults.gallery[0].id, "p1");
        assert_eq!(defaults.gallery[11].url, "/image/12.jpg");
        assert!(defaults.schedule.is_empty());
    }

    #[test]
    fn test_bundled_social_platforms_unique() {
        let social = Defaults::bundled().social;
        let mut tags: Vec<&str> = social.iter().map(|l| l.platform.as_str()).collect();
        tags.sort();
        tags.dedup();
        assert_eq!(tags.len(), social.len());
    }
}
