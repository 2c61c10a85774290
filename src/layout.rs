//! Figure size and subplot grids where every panel has the same
//! width and aspect ratio.

use crate::{Error, Result};

/// Default height to width ratio of a panel: the inverse of the
/// golden ratio.
pub const DEFAULT_H_TO_W: f64 = 1. / 1.618;

/// Default width of a panel, in inches.
pub const DEFAULT_WIDTH: f64 = 4.;

/// Set the geometry of a grid of subplots.
///
/// # Example
///
/// ```
/// use kondo::SubplotLayout;
/// let fig = SubplotLayout::new().ncols(3).nrows(2).width(2.).h_to_w(0.5)
///     .build()?;
/// assert_eq!(fig.figsize(), (6., 2.));
/// assert_eq!(fig.axes().len(), 6);
/// # Ok::<(), kondo::Error>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SubplotLayout {
    ncols: usize,
    nrows: usize,
    width: f64,
    h_to_w: f64,
    wspace: Option<f64>,
    hspace: Option<f64>,
}

impl Default for SubplotLayout {
    fn default() -> Self {
        SubplotLayout { ncols: 1, nrows: 1, width: DEFAULT_WIDTH,
                        h_to_w: DEFAULT_H_TO_W, wspace: None, hspace: None }
    }
}

impl SubplotLayout {
    /// A single panel of the default size.
    pub fn new() -> Self { Self::default() }

    pub fn ncols(mut self, ncols: usize) -> Self {
        self.ncols = ncols;
        self
    }

    pub fn nrows(mut self, nrows: usize) -> Self {
        self.nrows = nrows;
        self
    }

    /// Width of each panel (in inches).
    pub fn width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    /// Height to width ratio of each panel.
    pub fn h_to_w(mut self, h_to_w: f64) -> Self {
        self.h_to_w = h_to_w;
        self
    }

    /// Horizontal space between panels, as a fraction of the average
    /// panel width.  `None` leaves the backend default.
    pub fn wspace(mut self, wspace: Option<f64>) -> Self {
        self.wspace = wspace;
        self
    }

    /// Vertical space between panels, as a fraction of the average
    /// panel height.  `None` leaves the backend default.
    pub fn hspace(mut self, hspace: Option<f64>) -> Self {
        self.hspace = hspace;
        self
    }

    /// Compute the figure.
    pub fn build(&self) -> Result<Figure> {
        if self.ncols == 0 || self.nrows == 0 { return Err(Error::EmptyGrid) }
        let valid = |x: f64| x.is_finite() && x > 0.;
        if !valid(self.width) || !valid(self.h_to_w) {
            return Err(Error::InvalidSize { width: self.width,
                                            h_to_w: self.h_to_w })
        }
        let height = self.h_to_w * self.width;
        let axes = (0 .. self.nrows)
            .flat_map(|row| (0 .. self.ncols).map(move |col| Axes { row, col }))
            .collect();
        Ok(Figure {
            figsize: (self.ncols as f64 * self.width,
                      self.nrows as f64 * height),
            box_aspect: self.h_to_w,
            ncols: self.ncols,
            nrows: self.nrows,
            wspace: self.wspace,
            hspace: self.hspace,
            axes,
        })
    }
}

/// Return a figure with `ncols` × `nrows` panels of the default size.
pub fn make_subplots(ncols: usize, nrows: usize) -> Result<Figure> {
    SubplotLayout::new().ncols(ncols).nrows(nrows).build()
}

/// Position of a panel in the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Axes {
    pub row: usize,
    pub col: usize,
}

/// The geometry of a figure, created by [`SubplotLayout::build`].
#[derive(Clone, Debug, PartialEq)]
pub struct Figure {
    figsize: (f64, f64),
    box_aspect: f64,
    ncols: usize,
    nrows: usize,
    wspace: Option<f64>,
    hspace: Option<f64>,
    axes: Vec<Axes>, // row-major
}

impl Figure {
    /// Width and height of the figure, in inches.
    #[inline]
    pub fn figsize(&self) -> (f64, f64) { self.figsize }

    /// Height to width ratio imposed to every panel.
    #[inline]
    pub fn box_aspect(&self) -> f64 { self.box_aspect }

    #[inline]
    pub fn ncols(&self) -> usize { self.ncols }

    #[inline]
    pub fn nrows(&self) -> usize { self.nrows }

    #[inline]
    pub fn wspace(&self) -> Option<f64> { self.wspace }

    #[inline]
    pub fn hspace(&self) -> Option<f64> { self.hspace }

    /// The panels, row after row.
    #[inline]
    pub fn axes(&self) -> &[Axes] { &self.axes }

    /// The panel at `row`, `col`, if any.
    pub fn get(&self, row: usize, col: usize) -> Option<&Axes> {
        if row < self.nrows && col < self.ncols {
            self.axes.get(row * self.ncols + col)
        } else {
            None
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_panel() {
        let fig = make_subplots(1, 1).unwrap();
        let (w, h) = fig.figsize();
        assert_eq!(w, 4.);
        assert!((h - 4. / 1.618).abs() <= 1e-12, "{h}");
        assert_eq!(fig.box_aspect(), DEFAULT_H_TO_W);
        assert_eq!(fig.axes(), [Axes { row: 0, col: 0 }]);
        assert_eq!(fig.wspace(), None);
    }

    #[test]
    fn grid_is_row_major() {
        let fig = SubplotLayout::new().ncols(3).nrows(2).h_to_w(1.)
            .wspace(Some(0.1)).hspace(Some(0.3)).build().unwrap();
        assert_eq!(fig.figsize(), (12., 8.));
        assert_eq!(fig.axes()[1], Axes { row: 0, col: 1 });
        assert_eq!(fig.axes()[3], Axes { row: 1, col: 0 });
        assert_eq!(fig.get(1, 2), Some(&Axes { row: 1, col: 2 }));
        assert_eq!(fig.get(2, 0), None);
        assert_eq!(fig.get(0, 3), None);
        assert_eq!((fig.wspace(), fig.hspace()), (Some(0.1), Some(0.3)));
    }

    #[test]
    fn invalid_layouts() {
        assert!(matches!(make_subplots(0, 1), Err(Error::EmptyGrid)));
        assert!(matches!(make_subplots(2, 0), Err(Error::EmptyGrid)));
        for (w, r) in [(0., 1.), (-1., 1.), (4., f64::NAN), (f64::INFINITY, 1.)] {
            assert!(matches!(SubplotLayout::new().width(w).h_to_w(r).build(),
                             Err(Error::InvalidSize { .. })), "{w} {r}");
        }
    }
}
