use crate::{
    filter::catalog::FilterKind,
    foundation::error::{ResizeError, ResizeResult},
};

/// Tunables for [`resize_with`](crate::resize_with).
///
/// Deserializes from JSON with every field optional, e.g.
/// `{"filter": "mks2013", "parallel": true, "threads": 4}`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResizeOptions {
    /// Filter used on both axes.
    pub filter: FilterKind,
    /// Horizontal shift of the sampling grid, in source pixels.
    pub offset_x: f64,
    /// Vertical shift of the sampling grid, in source pixels.
    pub offset_y: f64,
    /// Smallest alpha still treated as opaque when picking the convolution path.
    ///
    /// At the default of 255 any other alpha value selects the premultiplied path.
    /// Lower values trade exactness for speed: alpha in `[opaque_alpha_min, 255]` is
    /// flattened to 255 on the fast path.
    pub opaque_alpha_min: u8,
    /// Split each pass across destination rows on a dedicated thread pool.
    ///
    /// The pool is built and torn down per [`resize_with`](crate::resize_with) call.
    /// Callers resizing many images should hold a pool and use
    /// [`resize_on_pool`](crate::resize_on_pool) instead.
    pub parallel: bool,
    /// Worker thread count for parallel mode. `None` uses rayon defaults.
    pub threads: Option<usize>,
}

impl Default for ResizeOptions {
    fn default() -> Self {
        Self {
            filter: FilterKind::default(),
            offset_x: 0.0,
            offset_y: 0.0,
            opaque_alpha_min: 255,
            parallel: false,
            threads: None,
        }
    }
}

impl ResizeOptions {
    /// Options with the given filter and defaults elsewhere.
    pub fn with_filter(filter: FilterKind) -> Self {
        Self {
            filter,
            ..Self::default()
        }
    }

    /// Parse and validate options from a JSON document.
    pub fn from_json(json: &str) -> ResizeResult<Self> {
        let opts: Self = serde_json::from_str(json)
            .map_err(|e| ResizeError::serde(format!("invalid resize options: {e}")))?;
        opts.validate()?;
        Ok(opts)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> ResizeResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ResizeError::serde(format!("failed to encode resize options: {e}")))
    }

    /// Reject non-finite offsets and an explicit zero thread count.
    pub fn validate(&self) -> ResizeResult<()> {
        if !self.offset_x.is_finite() || !self.offset_y.is_finite() {
            return Err(ResizeError::validation("resize offsets must be finite"));
        }
        if let Some(n) = self.threads
            && n == 0
        {
            return Err(ResizeError::validation(
                "resize 'threads' must be >= 1 when set",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/resize/options.rs"]
mod tests;
