pub mod base_page;
pub mod home_page;
pub mod login_page;
pub mod product_page;
pub mod profile_page;
