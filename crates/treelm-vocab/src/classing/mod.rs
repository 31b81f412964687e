//! # Word Classing
//!
//! Partitions of the vocabulary into hierarchical-softmax classes.
//!
//! Two modes exist:
//! * external classes, read from a `word class` file by [`read_classes`]
//!   and made dense by [`contiguous_class_ids`];
//! * frequency-balanced classes, computed by [`frequency_balanced_classes`].
//!
//! Both are applied through
//! [`crate::vocab::Vocabulary::assign_words_to_classes`].

mod class_file;
mod class_groups;
mod frequency_classes;

#[doc(inline)]
pub use class_file::{ExternalClasses, load_classes_path, read_classes};
#[doc(inline)]
pub use class_groups::{contiguous_class_ids, group_words_by_class};
#[doc(inline)]
pub use frequency_classes::{cumulative_sqrt_shares, frequency_balanced_classes};
