//! Preference centroid: the mean of a user's saved embeddings.
//!
//! The centroid is never stored or cached. Every caller rebuilds it from the current saved
//! set, so it cannot drift from the labels it summarizes.

pub mod error;
pub mod model;


pub use error::{PreferenceError, PreferenceResult};
pub use model::{
    PreferenceCentroid, PreferenceModel, build_centroid, centroid_norm, similarity_to_centroid,
};
