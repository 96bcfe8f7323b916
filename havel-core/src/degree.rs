//! Validated degree sequences.
//!
//! A [`DegreeSequence`] is the input to realization: one non-negative target
//! degree per vertex, indexed by vertex id. Construction rejects malformed
//! input up front; an odd degree sum is left for the realizer to discover.

use crate::error::{InputError, Result};

/// Target degrees for each vertex of a graph to be realized.
///
/// # Examples
/// ```
/// use havel_core::DegreeSequence;
///
/// let sequence = DegreeSequence::new(vec![3, 3, 3, 3])?;
/// assert_eq!(sequence.len(), 4);
/// assert_eq!(sequence.sum(), 12);
/// assert!(sequence.is_graphic());
/// # Ok::<(), havel_core::HavelError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct DegreeSequence {
    degrees: Vec<usize>,
}

impl DegreeSequence {
    /// Builds a sequence from unsigned degrees.
    ///
    /// # Errors
    /// Returns [`InputError::EmptySequence`] when `degrees` is empty.
    pub fn new(degrees: Vec<usize>) -> Result<Self> {
        if degrees.is_empty() {
            return Err(InputError::EmptySequence.into());
        }
        Ok(Self { degrees })
    }

    /// Builds a sequence from signed integers, as read from user input.
    ///
    /// # Errors
    /// Returns [`InputError::EmptySequence`] for an empty slice and
    /// [`InputError::NegativeDegree`] for the first negative entry.
    ///
    /// # Examples
    /// ```
    /// use havel_core::{DegreeSequence, InputErrorCode};
    ///
    /// let err = DegreeSequence::try_from_signed(&[1, -1]).expect_err("negative degree");
    /// assert_eq!(err.input_code(), Some(InputErrorCode::NegativeDegree));
    /// ```
    pub fn try_from_signed(degrees: &[i64]) -> Result<Self> {
        let converted = degrees
            .iter()
            .enumerate()
            .map(|(vertex, &degree)| {
                usize::try_from(degree).map_err(|_| InputError::NegativeDegree { vertex, degree })
            })
            .collect::<core::result::Result<Vec<_>, _>>()?;
        Self::new(converted)
    }

    /// Builds a sequence from a declared vertex count followed by its degrees.
    ///
    /// This mirrors the console input format where the vertex count is read
    /// first and the degrees afterwards.
    ///
    /// # Errors
    /// Returns [`InputError::NonPositiveVertexCount`] when `declared <= 0`,
    /// [`InputError::LengthMismatch`] when the number of degrees differs from
    /// `declared`, and the errors of [`Self::try_from_signed`].
    pub fn from_declared(declared: i64, degrees: &[i64]) -> Result<Self> {
        let declared = usize::try_from(declared)
            .ok()
            .filter(|&count| count > 0)
            .ok_or(InputError::NonPositiveVertexCount { got: declared })?;
        if declared != degrees.len() {
            return Err(InputError::LengthMismatch {
                declared,
                provided: degrees.len(),
            }
            .into());
        }
        Self::try_from_signed(degrees)
    }

    /// Number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.degrees.len()
    }

    /// Always `false`; empty sequences are rejected at construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.degrees.is_empty()
    }

    /// Target degrees indexed by vertex id.
    #[must_use]
    #[rustfmt::skip]
    pub fn degrees(&self) -> &[usize] { &self.degrees }

    /// Target degree of `vertex`, if it exists.
    #[must_use]
    pub fn degree(&self, vertex: usize) -> Option<usize> {
        self.degrees.get(vertex).copied()
    }

    /// Sum of all target degrees (twice the edge count of any realization).
    ///
    /// Saturates at `usize::MAX`; such a sequence is never graphic.
    #[must_use]
    pub fn sum(&self) -> usize {
        self.degrees
            .iter()
            .fold(0_usize, |total, &degree| total.saturating_add(degree))
    }

    /// Largest target degree.
    #[must_use]
    pub fn max_degree(&self) -> usize {
        self.degrees.iter().copied().max().unwrap_or(0)
    }

    /// Returns `true` when the degree sum is even.
    #[must_use]
    pub fn has_even_sum(&self) -> bool {
        self.degrees.iter().filter(|&&degree| degree % 2 == 1).count() % 2 == 0
    }

    /// Checks the Erdős–Gallai conditions.
    ///
    /// Independent of the realizer: a sequence is graphic exactly when
    /// [`crate::realize`] succeeds on it.
    ///
    /// # Examples
    /// ```
    /// use havel_core::DegreeSequence;
    ///
    /// assert!(DegreeSequence::new(vec![1, 1])?.is_graphic());
    /// assert!(!DegreeSequence::new(vec![5, 1, 1, 1, 1])?.is_graphic());
    /// # Ok::<(), havel_core::HavelError>(())
    /// ```
    #[must_use]
    pub fn is_graphic(&self) -> bool {
        // a simple graph on V vertices has no degree of V or more
        if self.max_degree() >= self.len() || !self.has_even_sum() {
            return false;
        }
        let mut sorted = self.degrees.clone();
        sorted.sort_unstable_by(|left, right| right.cmp(left));

        let mut prefix = 0_usize;
        for (index, &degree) in sorted.iter().enumerate() {
            let k = index + 1;
            prefix = prefix.saturating_add(degree);
            let tail = sorted
                .iter()
                .skip(k)
                .fold(0_usize, |total, &rest| total.saturating_add(rest.min(k)));
            let bound = k.saturating_mul(index).saturating_add(tail);
            if prefix > bound {
                return false;
            }
        }
        true
    }
}

/// Working entry carried through realization so vertex identity survives
/// sorting and removal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct DegreeRecord {
    pub(crate) vertex: usize,
    pub(crate) remaining: usize,
}

impl DegreeSequence {
    pub(crate) fn records(&self) -> Vec<DegreeRecord> {
        self.degrees
            .iter()
            .enumerate()
            .map(|(vertex, &remaining)| DegreeRecord { vertex, remaining })
            .collect()
    }
}
