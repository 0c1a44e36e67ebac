//! PSF sidelobe footprints.
//!
//! A footprint is the set of pixel offsets, relative to a detection, where a
//! true source's PSF sidelobes are bright enough to produce a spurious
//! candidate. It is derived once per PSF/image-size pair and then shared
//! read-only by every suppression run.

use crate::image::ImageView;
use crate::trace::{trace_event, trace_span, trace_warn};
use crate::util::{RfiMaskError, RfiMaskResult};

/// Default multiple of the PSF standard deviation a sidelobe must exceed.
pub const DEFAULT_SIDELOBE_FACTOR: f64 = 3.0;

/// Integer pixel offset relative to a detection location.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Offset {
    /// Row displacement.
    pub d_row: isize,
    /// Column displacement.
    pub d_col: isize,
}

impl Offset {
    /// Creates an offset from row and column displacements.
    pub const fn new(d_row: isize, d_col: isize) -> Self {
        Self { d_row, d_col }
    }

    /// Translates `(row, col)` by this offset, returning `None` when the
    /// result leaves `[0, size)` on either axis.
    #[inline]
    pub fn apply(self, row: usize, col: usize, size: usize) -> Option<(usize, usize)> {
        let r = row.checked_add_signed(self.d_row)?;
        let c = col.checked_add_signed(self.d_col)?;
        if r < size && c < size {
            Some((r, c))
        } else {
            None
        }
    }
}

/// Immutable set of sidelobe offsets.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Footprint {
    offsets: Vec<Offset>,
}

impl Footprint {
    /// Creates a footprint from explicit offsets.
    pub fn from_offsets<I: IntoIterator<Item = Offset>>(offsets: I) -> Self {
        Self {
            offsets: offsets.into_iter().collect(),
        }
    }

    /// Footprint containing only the detection's own pixel.
    pub fn self_only() -> Self {
        Self::from_offsets([Offset::new(0, 0)])
    }

    /// Offsets in row-major PSF scan order.
    pub fn offsets(&self) -> &[Offset] {
        &self.offsets
    }

    /// Number of offsets.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Returns true when no pixel passed the sidelobe threshold.
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

/// Builds the sidelobe footprint of a `size x size` PSF template.
///
/// Pixels strictly above `sidelobe_factor * std(psf)` (population standard
/// deviation) are selected and re-centered by `size / 2` on both axes.
pub fn build_footprint(
    psf: ImageView<'_, f32>,
    size: usize,
    sidelobe_factor: f64,
) -> RfiMaskResult<Footprint> {
    let _span = trace_span!("build_footprint", size, sidelobe_factor).entered();

    if !sidelobe_factor.is_finite() || sidelobe_factor < 0.0 {
        return Err(RfiMaskError::InvalidParameter {
            name: "sidelobe_factor",
            value: sidelobe_factor,
        });
    }
    if psf.width() != size || psf.height() != size {
        return Err(RfiMaskError::InvalidDimensions {
            width: psf.width(),
            height: psf.height(),
        });
    }

    let threshold = sidelobe_factor * psf_std(psf);
    let center = (size / 2) as isize;

    let mut offsets = Vec::new();
    for (r, row) in psf.rows().enumerate() {
        for (c, &value) in row.iter().enumerate() {
            if f64::from(value) > threshold {
                offsets.push(Offset::new(r as isize - center, c as isize - center));
            }
        }
    }

    if offsets.is_empty() {
        trace_warn!(
            "empty sidelobe footprint, suppression will keep every candidate",
            threshold = threshold
        );
    }
    trace_event!("footprint", offsets = offsets.len(), threshold = threshold);

    Ok(Footprint { offsets })
}

fn psf_std(psf: ImageView<'_, f32>) -> f64 {
    let mut sum = 0.0f64;
    let mut sum_sq = 0.0f64;
    let mut count = 0usize;
    for row in psf.rows() {
        for &value in row {
            let v = f64::from(value);
            sum += v;
            sum_sq += v * v;
            count += 1;
        }
    }
    let n = count as f64;
    let mean = sum / n;
    (sum_sq / n - mean * mean).max(0.0).sqrt()
}
