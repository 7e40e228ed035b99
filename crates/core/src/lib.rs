//! Face-shape classification and eyewear frame recommendation.
//!
//! Landmarks flow through [`features`] into a [`classification`] strategy,
//! the resulting label is expanded into ranked frame styles by
//! [`recommendation`], and [`catalog`] filters purchasable frames.

pub mod catalog;
pub mod classification;
pub mod config;
pub mod features;
pub mod pipeline;
pub mod recommendation;
pub mod shared;
