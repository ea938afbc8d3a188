//! Evenly-spaced frame sampling plans.
//!
//! A [`SamplingPlan`] is the precomputed set of stream positions the pipeline
//! captures during its single forward scan. Planning is a pure function of the
//! total frame count and the requested sample count; the plan itself carries
//! no state beyond the computed indices.

/// An ordered set of frame indices to capture, evenly spaced across a video.
///
/// Indices are computed with floor-division spacing:
/// `index[i] = i * total_frames / count` for `i` in `[0, count)`. They are
/// non-decreasing and each is strictly below `total_frames` whenever
/// `total_frames >= count`. When `total_frames < count` the sequence contains
/// duplicates; each duplicated position is captured once during the scan, so
/// the pipeline then delivers fewer than `count` outputs. That under-delivery
/// is accepted behavior, not an error.
///
/// # Example
///
/// ```
/// use framestrip::SamplingPlan;
///
/// let plan = SamplingPlan::evenly_spaced(100, 20);
/// assert_eq!(plan.indices()[..3], [0, 5, 10]);
/// assert!(plan.contains(95));
/// assert!(!plan.contains(96));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct SamplingPlan {
    indices: Vec<u64>,
    requested: u64,
}

impl SamplingPlan {
    /// Compute a plan of `count` indices evenly spaced over `total_frames`.
    ///
    /// A `count` of zero produces an empty plan.
    pub fn evenly_spaced(total_frames: u64, count: u64) -> Self {
        let indices = (0..count).map(|i| i * total_frames / count).collect();
        Self {
            indices,
            requested: count,
        }
    }

    /// Whether the given zero-based stream position is a planned capture.
    pub fn contains(&self, position: u64) -> bool {
        // Indices are non-decreasing by construction.
        self.indices.binary_search(&position).is_ok()
    }

    /// The number of samples that were requested.
    ///
    /// This is the scan's early-stop target; with a short video the scan can
    /// terminate by exhaustion before reaching it.
    pub fn requested(&self) -> u64 {
        self.requested
    }

    /// The planned indices, in non-decreasing order, duplicates included.
    pub fn indices(&self) -> &[u64] {
        &self.indices
    }

    /// `true` when the plan holds no indices at all.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// The highest planned index, if any.
    pub fn last_index(&self) -> Option<u64> {
        self.indices.last().copied()
    }
}
