use crate::foundation::error::{ResizeError, ResizeResult};

/// One destination pixel's convolution taps, borrowed from a [`PackedKernels`] arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KernelRecord<'a> {
    /// Index of the first contributing source pixel.
    pub shift: usize,
    /// Q14 weights for source pixels `shift..shift + weights.len()`.
    pub weights: &'a [i16],
}

impl KernelRecord<'_> {
    /// `true` for degenerate records, which produce an all-zero pixel.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Sum of the stored Q14 weights.
    pub fn weight_sum(&self) -> i32 {
        self.weights.iter().map(|&w| i32::from(w)).sum()
    }
}

/// Per-axis kernel table: a flat `i16` arena of `[shift, length, weights...]` records,
/// one per destination pixel, plus an index of record offsets.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PackedKernels {
    data: Vec<i16>,
    offsets: Vec<usize>,
}

impl PackedKernels {
    pub(crate) fn with_capacity(records: usize, values: usize) -> Self {
        Self {
            data: Vec::with_capacity(values),
            offsets: Vec::with_capacity(records),
        }
    }

    /// Rebuild the record index over an existing packed buffer.
    ///
    /// Fails if the buffer does not hold exactly `records` well-formed records.
    pub fn from_packed(data: Vec<i16>, records: usize) -> ResizeResult<Self> {
        let mut offsets = Vec::with_capacity(records);
        let mut pos = 0usize;
        for idx in 0..records {
            let header = data.get(pos..pos + 2).ok_or_else(|| {
                ResizeError::validation(format!("packed kernel record {idx} header truncated"))
            })?;
            if header[0] < 0 || header[1] < 0 {
                return Err(ResizeError::validation(format!(
                    "packed kernel record {idx} has negative shift or length"
                )));
            }
            let end = pos + 2 + header[1] as usize;
            if end > data.len() {
                return Err(ResizeError::validation(format!(
                    "packed kernel record {idx} weights truncated"
                )));
            }
            offsets.push(pos);
            pos = end;
        }
        if pos != data.len() {
            return Err(ResizeError::validation(format!(
                "packed kernel buffer has {} trailing values",
                data.len() - pos
            )));
        }
        Ok(Self { data, offsets })
    }

    pub(crate) fn push_record(&mut self, shift: i16, weights: &[i16]) {
        debug_assert!(weights.len() <= i16::MAX as usize);
        self.offsets.push(self.data.len());
        self.data.push(shift);
        self.data.push(weights.len() as i16);
        self.data.extend_from_slice(weights);
    }

    pub(crate) fn push_empty(&mut self) {
        self.push_record(0, &[]);
    }

    /// Number of records, i.e. the destination axis size.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// `true` when no records are stored.
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// The raw packed buffer.
    pub fn as_slice(&self) -> &[i16] {
        &self.data
    }

    /// Record for destination index `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len()`.
    pub fn record(&self, idx: usize) -> KernelRecord<'_> {
        let pos = self.offsets[idx];
        let shift = self.data[pos] as usize;
        let len = self.data[pos + 1] as usize;
        KernelRecord {
            shift,
            weights: &self.data[pos + 2..pos + 2 + len],
        }
    }

    /// Records in destination order.
    pub fn records(&self) -> impl ExactSizeIterator<Item = KernelRecord<'_>> + '_ {
        (0..self.len()).map(|idx| self.record(idx))
    }

    /// Widest record, in taps.
    pub fn max_taps(&self) -> usize {
        self.records().map(|r| r.weights.len()).max().unwrap_or(0)
    }

    /// Highest source index any record reads, if any record is non-empty.
    pub fn max_source_index(&self) -> Option<usize> {
        self.records()
            .filter(|r| !r.is_empty())
            .map(|r| r.shift + r.weights.len() - 1)
            .max()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/packed.rs"]
mod tests;
