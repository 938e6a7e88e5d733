pub mod config;
pub mod consts;
pub mod decode;
pub mod error;
pub mod histogram;
pub mod image_data;
pub mod magnifier;
pub mod range;
pub mod store;
pub mod view;
