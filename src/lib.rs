// src/lib.rs
//
// imagetrail: a trail of image tiles that follows the pointer.

pub mod animation;
pub mod config;
pub mod controllers;
pub mod effects;
pub mod errors;
pub mod models;
pub mod render;
pub mod services;
pub mod utilities;
pub mod views;

pub use errors::TrailError;
