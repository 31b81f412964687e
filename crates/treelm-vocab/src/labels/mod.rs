//! # Dependency Labels
//!
//! Dependency-relation labels can be ignored, fused into word tokens, or
//! kept as a separate one-hot feature; see [`DependencyLabelMode`].

mod feature_labels;
mod label_mode;
mod label_vocab;

#[doc(inline)]
pub use feature_labels::{
    FeatureLabelState,
    FeatureLabelVector,
    reset_feature_labels,
    update_feature_labels,
};
#[doc(inline)]
pub use label_mode::{DependencyLabelMode, LABEL_SEPARATOR};
#[doc(inline)]
pub use label_vocab::LabelVocab;
