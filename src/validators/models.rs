//! Content model checking
//!
//! A content model is a plain sequence of `(tag, occurrence)` entries
//! with no choices and no interleaving. Checking a child tag sequence
//! against it is a single left-to-right walk: each entry consumes the
//! maximal run of matching tags at the current position.

use super::schemas::{ElementKind, ModelEntry};
use crate::error::ValidationError;
use crate::namespaces::QName;

fn count(run: usize) -> u32 {
    u32::try_from(run).unwrap_or(u32::MAX)
}

/// Check an actual child tag sequence against a content model.
///
/// `tags` must contain only tags relevant to `model`; callers filter out
/// foreign children first.
pub fn check_sequence(
    parent: ElementKind,
    model: &[ModelEntry],
    tags: &[&QName],
) -> Result<(), ValidationError> {
    let mut pos = 0;

    for entry in model {
        let rest = &tags[pos..];
        let run = rest.iter().take_while(|tag| **tag == &entry.tag).count();

        if entry.occurs.is_exceeded(count(run)) {
            return Err(ValidationError::TooManyOccurrences {
                parent,
                tag: entry.tag.clone(),
            });
        }

        if entry.occurs.is_missing(count(run)) {
            // Present further on: it is misplaced rather than missing.
            return Err(if rest.contains(&&entry.tag) {
                ValidationError::UnexpectedElementOrder {
                    parent,
                    tag: entry.tag.clone(),
                }
            } else {
                ValidationError::MissingRequiredElement {
                    parent,
                    tag: entry.tag.clone(),
                }
            });
        }

        pos += run;
    }

    match tags.get(pos) {
        None => Ok(()),
        Some(extra) => {
            let seen = tags[..pos].contains(extra);
            let single = model
                .iter()
                .find(|entry| &entry.tag == *extra)
                .is_some_and(|entry| entry.occurs.is_single());

            Err(if seen && single {
                ValidationError::TooManyOccurrences {
                    parent,
                    tag: (*extra).clone(),
                }
            } else {
                ValidationError::UnexpectedElementOrder {
                    parent,
                    tag: (*extra).clone(),
                }
            })
        }
    }
}
