pub mod html;
pub mod views;
