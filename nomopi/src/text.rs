//! Text measurement and font fitting.
//!
//! Measuring text is a host service: the engine that rasterizes fonts knows
//! how large a string renders. [`TextMeasure`] is the seam; nomopi ships
//! [`MonospaceMeasure`], a cell-width estimate that needs no font files and
//! is used for headless layout and tests.
//!
//! [`fit_font_size`] picks the largest font size at which a string still fits
//! a box, accounting for letter/line spacing that grows with the font size.

use std::path::Path;

use unicode_width::UnicodeWidthStr;

use crate::primitives::Size;

/// Font parameters a measurement is taken at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FontParams<'a> {
    /// Font size in pixels.
    pub size: u32,
    /// Extra pixels between letters.
    pub h_spacing: u32,
    /// Extra pixels between lines.
    pub v_spacing: u32,
    /// Font file, if the host distinguishes fonts.
    pub font: Option<&'a Path>,
}

impl<'a> FontParams<'a> {
    /// Parameters at `size` with spacing proportional to the size.
    pub fn scaled(size: u32, h_spacing: f32, v_spacing: f32, font: Option<&'a Path>) -> Self {
        Self {
            size,
            h_spacing: (size as f32 * h_spacing).floor() as u32,
            v_spacing: (size as f32 * v_spacing).floor() as u32,
            font,
        }
    }
}

/// Host text measurement.
///
/// Implementations must be monotonic: a larger font size or spacing never
/// yields a smaller rendered size.
pub trait TextMeasure {
    /// Rendered size of `text` in pixels.
    fn measure(&self, text: &str, params: &FontParams<'_>) -> Size;
}

/// Fixed-advance estimate: every display cell is `advance * size` wide and
/// every line `line_height * size` tall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMeasure {
    pub advance: f32,
    pub line_height: f32,
}

impl Default for MonospaceMeasure {
    fn default() -> Self {
        Self {
            advance: 0.5,
            line_height: 1.0,
        }
    }
}

impl TextMeasure for MonospaceMeasure {
    fn measure(&self, text: &str, params: &FontParams<'_>) -> Size {
        let size = params.size as f32;
        let mut lines = 0u32;
        let mut max_width = 0.0f32;

        for line in text.split('\n') {
            lines += 1;
            let cells = UnicodeWidthStr::width(line) as f32;
            let gaps = line.chars().count().saturating_sub(1) as f32;
            let width = cells * self.advance * size + gaps * params.h_spacing as f32;
            max_width = max_width.max(width);
        }

        let height = lines as f32 * self.line_height * size
            + lines.saturating_sub(1) as f32 * params.v_spacing as f32;

        Size::new(max_width.ceil() as u32, height.ceil() as u32)
    }
}

/// Number of lines in a string.
pub fn line_count(text: &str) -> u32 {
    text.matches('\n').count() as u32 + 1
}

/// Precision of [`fit_font_size`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FitMode {
    /// Binary search against the measurement: the result is the largest
    /// size that fits, given a monotonic measure.
    #[default]
    Exact,
    /// Two measurements at full height, scaled down linearly by the width
    /// and height overshoot. Cheap, but may miss the maximum by a few
    /// pixels in either direction.
    Linear,
}

/// What to fit.
#[derive(Debug, Clone, Copy)]
pub struct FitRequest<'a> {
    pub text: &'a str,
    pub bounds: Size,
    /// Letter spacing as a fraction of the font size.
    pub h_spacing: f32,
    /// Line spacing as a fraction of the font size.
    pub v_spacing: f32,
    pub font: Option<&'a Path>,
}

/// Largest font size at which the request's text fits its bounds.
pub fn fit_font_size(measure: &dyn TextMeasure, request: &FitRequest<'_>, mode: FitMode) -> u32 {
    match mode {
        FitMode::Exact => fit_exact(measure, request),
        FitMode::Linear => fit_linear(measure, request),
    }
}

fn fits(measure: &dyn TextMeasure, request: &FitRequest<'_>, size: u32) -> bool {
    let params = FontParams::scaled(size, request.h_spacing, request.v_spacing, request.font);
    let rendered = measure.measure(request.text, &params);
    rendered.width <= request.bounds.width && rendered.height <= request.bounds.height
}

fn fit_exact(measure: &dyn TextMeasure, request: &FitRequest<'_>) -> u32 {
    let mut lo = 0u32;
    let mut hi = request.bounds.height;

    if fits(measure, request, hi) {
        return hi;
    }

    // Invariant: fits(lo) (size 0 renders nothing), !fits(hi + 1)
    while lo < hi {
        let mid = lo + (hi - lo).div_ceil(2);
        if fits(measure, request, mid) {
            lo = mid;
        } else {
            hi = mid - 1;
        }
    }
    lo
}

fn fit_linear(measure: &dyn TextMeasure, request: &FitRequest<'_>) -> u32 {
    let width = request.bounds.width as f32;
    let height = request.bounds.height;
    let height_f = height as f32;

    let base = measure.measure(
        request.text,
        &FontParams { size: height, h_spacing: 0, v_spacing: 0, font: request.font },
    );
    let spaced = measure.measure(
        request.text,
        &FontParams::scaled(height, request.h_spacing, request.v_spacing, request.font),
    );

    let h_scale = if base.width > 0 {
        spaced.width as f32 / base.width as f32
    } else {
        1.0
    };
    let v_scale = 1.0 + request.v_spacing;

    let mut max = height / line_count(request.text);
    if base.width as f32 > width {
        let max_base_width = width / h_scale;
        max = (height_f * (max_base_width / base.width as f32)) as u32;
    }
    if base.height > height {
        let max_base_height = height_f / v_scale;
        max = max.min((height_f * (max_base_height / base.height as f32)) as u32);
    }
    max
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(text: &str, width: u32, height: u32) -> FitRequest<'_> {
        FitRequest {
            text,
            bounds: Size::new(width, height),
            h_spacing: 0.0,
            v_spacing: 0.0,
            font: None,
        }
    }

    #[test]
    fn test_monospace_measure() {
        let m = MonospaceMeasure::default();
        let params = FontParams { size: 10, ..FontParams::default() };
        assert_eq!(m.measure("Hello", &params), Size::new(25, 10));
        assert_eq!(m.measure("ab\ncdef", &params), Size::new(20, 20));
        assert_eq!(m.measure("", &params), Size::new(0, 10));
    }

    #[test]
    fn test_monospace_measure_spacing() {
        let m = MonospaceMeasure::default();
        let params = FontParams { size: 10, h_spacing: 2, v_spacing: 3, font: None };
        // 5 cells * 5 + 4 gaps * 2
        assert_eq!(m.measure("Hello", &params).width, 33);
        // 2 lines * 10 + 1 gap * 3
        assert_eq!(m.measure("a\nb", &params).height, 23);
    }

    #[test]
    fn test_monospace_measure_wide_chars() {
        let m = MonospaceMeasure::default();
        let params = FontParams { size: 10, ..FontParams::default() };
        // CJK characters occupy two cells
        assert_eq!(m.measure("日本", &params).width, 20);
    }

    #[test]
    fn test_font_params_scaled() {
        let p = FontParams::scaled(40, 0.15, 0.5, None);
        assert_eq!(p.h_spacing, 6);
        assert_eq!(p.v_spacing, 20);
    }

    #[test]
    fn test_line_count() {
        assert_eq!(line_count(""), 1);
        assert_eq!(line_count("a\nb\nc"), 3);
    }

    #[test]
    fn test_fit_height_bound() {
        let m = MonospaceMeasure::default();
        let r = request("Hello", 300, 100);
        assert_eq!(fit_font_size(&m, &r, FitMode::Exact), 100);
        assert_eq!(fit_font_size(&m, &r, FitMode::Linear), 100);
    }

    #[test]
    fn test_fit_width_bound() {
        let m = MonospaceMeasure::default();
        let r = request("Hello", 125, 100);
        assert_eq!(fit_font_size(&m, &r, FitMode::Exact), 50);
        assert_eq!(fit_font_size(&m, &r, FitMode::Linear), 50);
    }

    #[test]
    fn test_fit_multiline() {
        let m = MonospaceMeasure::default();
        let r = request("ab\ncd", 1000, 100);
        assert_eq!(fit_font_size(&m, &r, FitMode::Exact), 50);
        assert_eq!(fit_font_size(&m, &r, FitMode::Linear), 50);
    }

    #[test]
    fn test_fit_with_letter_spacing() {
        let m = MonospaceMeasure::default();
        let r = FitRequest { h_spacing: 0.5, ..request("Hello", 150, 100) };
        // 2.5f + 4 * floor(f / 2) <= 150 -> f = 33
        assert_eq!(fit_font_size(&m, &r, FitMode::Exact), 33);
        let linear = fit_font_size(&m, &r, FitMode::Linear);
        assert!(linear.abs_diff(33) <= 1, "linear fit {linear}");
    }

    #[test]
    fn test_fit_exact_never_overflows() {
        let m = MonospaceMeasure::default();
        for width in (10..400).step_by(37) {
            for height in (5..200).step_by(23) {
                let r = FitRequest {
                    h_spacing: 0.15,
                    v_spacing: 0.1,
                    ..request("Source string\nline two", width, height)
                };
                let size = fit_font_size(&m, &r, FitMode::Exact);
                let params = FontParams::scaled(size, r.h_spacing, r.v_spacing, None);
                let rendered = m.measure(r.text, &params);
                assert!(rendered.width <= width && rendered.height <= height);

                // One size larger must not fit
                let params = FontParams::scaled(size + 1, r.h_spacing, r.v_spacing, None);
                let rendered = m.measure(r.text, &params);
                assert!(rendered.width > width || rendered.height > height);
            }
        }
    }

    #[test]
    fn test_fit_empty_box() {
        let m = MonospaceMeasure::default();
        assert_eq!(fit_font_size(&m, &request("Hello", 0, 0), FitMode::Exact), 0);
        assert_eq!(fit_font_size(&m, &request("Hello", 100, 0), FitMode::Linear), 0);
    }
}
