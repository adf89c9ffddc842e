pub mod document;

pub use document::{ConnectionRecord, Profile, ProfileDocument};
