//! Domain-to-pixel scale transforms.

/// Scale mapping a data domain onto a pixel range.
///
/// The range may be inverted (e.g. `(height, 0.0)` for a y axis whose values
/// grow upward on screen).
#[derive(Clone, Debug)]
pub enum ChartScale {
    Linear(LinearScale),
    Log(LogScale),
}

impl ChartScale {
    pub fn new_linear(domain: (f64, f64), range: (f32, f32)) -> Self {
        let (d_min, d_max) = pad_degenerate(domain);
        Self::Linear(LinearScale {
            domain: (d_min, d_max),
            range,
        })
    }

    /// Log10 scale. The domain is clamped to strictly positive values.
    pub fn new_log10(domain: (f64, f64), range: (f32, f32)) -> Self {
        Self::Log(LogScale::new(domain, range))
    }

    pub fn map(&self, value: f64) -> f32 {
        let res = match self {
            Self::Linear(s) => s.map(value),
            Self::Log(s) => s.map(value),
        };
        if res.is_nan() || res.is_infinite() {
            0.0
        } else {
            res
        }
    }

    pub fn invert(&self, pixel: f32) -> f64 {
        match self {
            Self::Linear(s) => s.invert(pixel),
            Self::Log(s) => s.invert(pixel),
        }
    }

    pub fn domain(&self) -> (f64, f64) {
        match self {
            Self::Linear(s) => s.domain,
            Self::Log(s) => s.domain,
        }
    }

    pub fn range(&self) -> (f32, f32) {
        match self {
            Self::Linear(s) => s.range,
            Self::Log(s) => s.range,
        }
    }

    pub fn update_domain(&mut self, min: f64, max: f64) {
        match self {
            Self::Linear(s) => s.domain = pad_degenerate((min, max)),
            Self::Log(s) => *s = LogScale::new((min, max), s.range),
        }
    }

    pub fn update_range(&mut self, min: f32, max: f32) {
        match self {
            Self::Linear(s) => s.range = (min, max),
            Self::Log(s) => s.range = (min, max),
        }
    }

    pub fn ticks(&self, count: usize) -> Vec<f64> {
        match self {
            Self::Linear(s) => s.ticks(count),
            Self::Log(s) => s.ticks(),
        }
    }
}

/// Affine value-to-pixel transform.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f32, f32),
}

impl LinearScale {
    #[inline]
    pub fn map(&self, value: f64) -> f32 {
        let (d_min, d_max) = self.domain;
        let (r_min, r_max) = self.range;
        let t = (value - d_min) / (d_max - d_min);
        r_min + (t * (r_max - r_min) as f64) as f32
    }

    #[inline]
    pub fn invert(&self, pixel: f32) -> f64 {
        let (d_min, d_max) = self.domain;
        let (r_min, r_max) = self.range;
        let span = (r_max - r_min) as f64;
        if span.abs() < f64::EPSILON {
            return d_min;
        }
        d_min + (pixel - r_min) as f64 / span * (d_max - d_min)
    }

    /// Tick values at a "nice" step (1/2/5 times a power of ten), covering the
    /// domain with roughly `count` ticks.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (d_min, d_max) = self.domain;
        let span = d_max - d_min;
        if span <= 0.0 || count == 0 {
            return vec![d_min];
        }
        let step = nice_step(span, count);
        let first = (d_min / step).ceil() * step;
        let mut out = Vec::new();
        let mut v = first;
        while v <= d_max + step * 1e-9 {
            out.push(v);
            v += step;
        }
        out
    }
}

/// Log10 value-to-pixel transform, for positive-valued axes.
#[derive(Clone, Copy, Debug)]
pub struct LogScale {
    pub domain: (f64, f64),
    pub range: (f32, f32),
    log_min: f64,
    log_max: f64,
}

impl LogScale {
    const MIN_POSITIVE: f64 = 1e-12;

    fn new(domain: (f64, f64), range: (f32, f32)) -> Self {
        let d_min = domain.0.max(Self::MIN_POSITIVE);
        let d_max = if domain.1 <= d_min {
            d_min * 10.0
        } else {
            domain.1
        };
        Self {
            domain: (d_min, d_max),
            range,
            log_min: d_min.log10(),
            log_max: d_max.log10(),
        }
    }

    #[inline]
    pub fn map(&self, value: f64) -> f32 {
        let (r_min, r_max) = self.range;
        let span = (self.log_max - self.log_min).max(Self::MIN_POSITIVE);
        let t = (value.max(Self::MIN_POSITIVE).log10() - self.log_min) / span;
        r_min + (t * (r_max - r_min) as f64) as f32
    }

    #[inline]
    pub fn invert(&self, pixel: f32) -> f64 {
        let (r_min, r_max) = self.range;
        let span = (r_max - r_min) as f64;
        if span.abs() < f64::EPSILON {
            return self.domain.0;
        }
        let t = (pixel - r_min) as f64 / span;
        10f64.powf(self.log_min + t * (self.log_max - self.log_min))
    }

    /// One tick per decade across the domain.
    pub fn ticks(&self) -> Vec<f64> {
        let first = self.log_min.ceil() as i32;
        let last = self.log_max.floor() as i32;
        (first..=last).map(|e| 10f64.powi(e)).collect()
    }
}

// Widens a zero-width domain so map/invert stay finite.
fn pad_degenerate((min, max): (f64, f64)) -> (f64, f64) {
    if (max - min).abs() < f64::EPSILON {
        (min - 0.5, max + 0.5)
    } else {
        (min, max)
    }
}

/// Rounds `span / count` up to 1, 2 or 5 times a power of ten.
fn nice_step(span: f64, count: usize) -> f64 {
    let ideal = span / count as f64;
    let base = 10f64.powf(ideal.log10().floor());
    let rel = ideal / base;
    let stable_rel = if rel <= 1.0 {
        1.0
    } else if rel <= 2.0 {
        2.0
    } else if rel <= 5.0 {
        5.0
    } else {
        10.0
    };
    base * stable_rel
}
