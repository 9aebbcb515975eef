pub mod category_tabs;
pub mod contact_form;
pub mod footer;
pub mod navbar;
pub mod proficiency;
pub mod project_card;
pub mod project_links;
pub mod reveal;
pub mod screenshot_gallery;
pub mod video_player;
