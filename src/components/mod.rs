//! UI Components
//!
//! Reusable Leptos components.

mod category_tabs;
mod delete_confirm_button;
mod field_error;
mod nav_bar;
mod new_post_form;
mod notice_banner;
mod post_card;
mod sidebars;

pub use category_tabs::CategoryTabs;
pub use delete_confirm_button::DeleteConfirmButton;
pub use field_error::FieldError;
pub use nav_bar::NavBar;
pub use new_post_form::NewPostForm;
pub use notice_banner::NoticeBanner;
pub use post_card::PostCard;
pub use sidebars::{PopularCard, TrendingCard};
