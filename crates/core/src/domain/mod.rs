pub mod charts;
pub mod comments;
pub mod gallery;
pub mod lightbox;
pub mod links;
pub mod media_sync;
pub mod modal;
pub mod pagination;
pub mod progressive;
