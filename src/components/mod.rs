//! UI Components
//!
//! Page sections and the small pieces they share.

mod contact_section;
mod delete_confirm_button;
mod gallery_section;
mod hero_section;
mod schedule_section;
mod social_section;

pub use contact_section::ContactSection;
pub use delete_confirm_button::DeleteConfirmButton;
pub use gallery_section::GallerySection;
pub use hero_section::HeroSection;
pub use schedule_section::ScheduleSection;
pub use social_section::SocialSection;
