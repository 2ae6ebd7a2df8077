//! Ordered composition of lessons and exercises.
//!
//! A lesson's sub-lessons are persisted as two co-indexed columns (ids and
//! type tags) but handled in memory as one sequence of [`SubLesson`] values,
//! so the "same length, same position" pairing holds by construction. Every
//! structural edit goes through [`SubLessons`]; exercises reuse the same
//! splice helper for their question ids.

use std::borrow::Cow;
use std::collections::HashSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::SubLessonKind;
use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Location
// ---------------------------------------------------------------------------

/// Where a block of new entries is spliced into a sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    /// After the last existing element.
    #[default]
    Append,
    /// Before the element currently at this 0-based position. `At(len)` is
    /// equivalent to `Append`.
    At(usize),
}

impl From<Option<usize>> for Location {
    fn from(position: Option<usize>) -> Self {
        position.map_or(Self::Append, Self::At)
    }
}

/// Insert `block` as a contiguous run at `location`.
///
/// # Errors
///
/// Returns `CoreError::OutOfRange` when `location` is `At(n)` with `n > len`.
pub fn splice_block<T>(
    seq: &mut Vec<T>,
    location: Location,
    block: impl IntoIterator<Item = T>,
) -> Result<(), CoreError> {
    let len = seq.len();
    let at = match location {
        Location::Append => len,
        Location::At(index) if index <= len => index,
        Location::At(index) => {
            return Err(CoreError::OutOfRange {
                what: "location",
                index,
                len,
            });
        }
    };
    seq.splice(at..at, block);
    Ok(())
}

/// Remove every element whose id is in `ids`, keeping survivors in order.
/// Returns how many elements were removed.
pub fn remove_ids(seq: &mut Vec<String>, ids: &HashSet<String>) -> usize {
    let before = seq.len();
    seq.retain(|id| !ids.contains(id));
    before - seq.len()
}

// ---------------------------------------------------------------------------
// SubLesson
// ---------------------------------------------------------------------------

/// One positional entry of a lesson.
///
/// `Unrecognized` carries a type tag other than `exercise`/`video`. Such
/// entries survive every edit and are skipped (not rejected) when a lesson
/// is resolved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "TaggedRef", into = "TaggedRef")]
pub enum SubLesson {
    Exercise(String),
    Video(String),
    Unrecognized { tag: String, id: String },
}

impl SubLesson {
    /// Build an entry from a stored (tag, id) pair.
    #[must_use]
    pub fn from_tagged(tag: &str, id: impl Into<String>) -> Self {
        let id = id.into();
        match SubLessonKind::from_tag(tag) {
            Some(SubLessonKind::Exercise) => Self::Exercise(id),
            Some(SubLessonKind::Video) => Self::Video(id),
            None => Self::Unrecognized {
                tag: tag.to_string(),
                id,
            },
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Exercise(id) | Self::Video(id) | Self::Unrecognized { id, .. } => id,
        }
    }

    #[must_use]
    pub fn tag(&self) -> &str {
        match self {
            Self::Exercise(_) => SubLessonKind::Exercise.as_str(),
            Self::Video(_) => SubLessonKind::Video.as_str(),
            Self::Unrecognized { tag, .. } => tag,
        }
    }
}

/// Wire shape of a [`SubLesson`]: `{"type": "...", "id": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
struct TaggedRef {
    #[serde(rename = "type")]
    tag: String,
    id: String,
}

impl From<TaggedRef> for SubLesson {
    fn from(raw: TaggedRef) -> Self {
        Self::from_tagged(&raw.tag, raw.id)
    }
}

impl From<SubLesson> for TaggedRef {
    fn from(sub: SubLesson) -> Self {
        Self {
            tag: sub.tag().to_string(),
            id: sub.id().to_string(),
        }
    }
}

impl JsonSchema for SubLesson {
    fn schema_name() -> Cow<'static, str> {
        "SubLesson".into()
    }

    fn json_schema(generator: &mut schemars::SchemaGenerator) -> schemars::Schema {
        TaggedRef::json_schema(generator)
    }
}

// ---------------------------------------------------------------------------
// SubLessons
// ---------------------------------------------------------------------------

/// The ordered heterogeneous list behind a lesson.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct SubLessons(Vec<SubLesson>);

impl SubLessons {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Fuse two co-indexed sequences into one list.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::LengthMismatch` when the sequences differ in length.
    pub fn from_parallel<I, T>(ids: I, tags: T) -> Result<Self, CoreError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
        T: IntoIterator,
        T::Item: AsRef<str>,
    {
        let ids: Vec<String> = ids.into_iter().map(Into::into).collect();
        let tags: Vec<T::Item> = tags.into_iter().collect();
        if ids.len() != tags.len() {
            return Err(CoreError::LengthMismatch {
                ids: ids.len(),
                tags: tags.len(),
            });
        }
        Ok(Self(
            ids.into_iter()
                .zip(tags)
                .map(|(id, tag)| SubLesson::from_tagged(tag.as_ref(), id))
                .collect(),
        ))
    }

    /// Entity ids, position for position.
    #[must_use]
    pub fn ids(&self) -> Vec<&str> {
        self.0.iter().map(SubLesson::id).collect()
    }

    /// Type tags, position for position.
    #[must_use]
    pub fn tags(&self) -> Vec<&str> {
        self.0.iter().map(SubLesson::tag).collect()
    }

    /// Split back into the two co-indexed sequences used for storage.
    #[must_use]
    pub fn to_parallel(&self) -> (Vec<String>, Vec<String>) {
        self.0
            .iter()
            .map(|sub| (sub.id().to_string(), sub.tag().to_string()))
            .unzip()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SubLesson> {
        self.0.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[SubLesson] {
        &self.0
    }

    pub fn append(&mut self, items: impl IntoIterator<Item = SubLesson>) {
        self.0.extend(items);
    }

    /// Splice `items` in at `location`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::OutOfRange` when `location` is past the end.
    pub fn insert_at(
        &mut self,
        location: Location,
        items: impl IntoIterator<Item = SubLesson>,
    ) -> Result<(), CoreError> {
        splice_block(&mut self.0, location, items)
    }

    /// Remove the single entry at `index`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::OutOfRange` when `index >= len`.
    pub fn remove_at(&mut self, index: usize) -> Result<SubLesson, CoreError> {
        if index >= self.0.len() {
            return Err(CoreError::OutOfRange {
                what: "index",
                index,
                len: self.0.len(),
            });
        }
        Ok(self.0.remove(index))
    }

    /// Remove every entry whose id is in `ids`. Id and tag leave together, so
    /// a tag value equal to some id can never cause a mismatched removal.
    /// Returns how many entries were removed.
    pub fn remove_all_matching(&mut self, ids: &HashSet<String>) -> usize {
        let before = self.0.len();
        self.0.retain(|sub| !ids.contains(sub.id()));
        before - self.0.len()
    }
}

impl From<Vec<SubLesson>> for SubLessons {
    fn from(items: Vec<SubLesson>) -> Self {
        Self(items)
    }
}

impl FromIterator<SubLesson> for SubLessons {
    fn from_iter<I: IntoIterator<Item = SubLesson>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a SubLessons {
    type Item = &'a SubLesson;
    type IntoIter = std::slice::Iter<'a, SubLesson>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
