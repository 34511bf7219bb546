// ============================================================================
// Critical Section
// Fractional-height tetration and super-logarithm lookup grids
// ============================================================================
//
// For heights in [0, 1] the tower `b^^h` is approximated by the quadratic
//
//     b^^(h - 1) ≈ 1 + a·(h - 1) - c·(h - 1)²,    a = 2L/(1+L), c = (1-L)/(1+L), L = ln b
//
// which is continuous and monotone with matching first derivatives at the
// integer heights. The grids sample it (and its inverse) at 11 heights for the
// header bases; lookups interpolate between bases linearly and between heights
// in log space.

use std::f64::consts::E;
use std::sync::LazyLock;

const BASES: usize = 10;
const POINTS: usize = 11;

const HEADERS: [f64; BASES] = [2.0, E, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];

type Grid = [[f64; POINTS]; BASES];

/// `(a, c)` of the quadratic approximation for `base`.
fn quadratic(base: f64) -> (f64, f64) {
    let l = base.ln();
    (2.0 * l / (1.0 + l), (1.0 - l) / (1.0 + l))
}

fn build(sample: impl Fn(f64, f64) -> f64) -> Grid {
    let mut grid = [[0.0; POINTS]; BASES];
    for (row, base) in grid.iter_mut().zip(HEADERS) {
        for (k, value) in row.iter_mut().enumerate() {
            *value = sample(base, k as f64 / (POINTS - 1) as f64);
        }
    }
    grid
}

/// `b^^h` for `h ∈ [0, 1]`, running from 1 to `b`.
static TETRATION_GRID: LazyLock<Grid> = LazyLock::new(|| {
    build(|base, height| match height {
        h if h <= 0.0 => 1.0,
        h if h >= 1.0 => base,
        h => {
            let (a, c) = quadratic(base);
            let s = h - 1.0;
            base.powf(1.0 + a * s - c * s * s)
        },
    })
});

/// `slog_b(x)` for `x ∈ [0, 1]`, running from -1 to 0.
static SLOG_GRID: LazyLock<Grid> = LazyLock::new(|| {
    build(|base, x| match x {
        x if x <= 0.0 => -1.0,
        x if x >= 1.0 => 0.0,
        x => {
            let (a, c) = quadratic(base);
            2.0 * (x - 1.0) / (a + (a * a + 4.0 * c * (1.0 - x)).sqrt())
        },
    })
});

/// Grid values at `floor`/`ceil` height indices, interpolated across bases.
fn row_values(grid: &Grid, base: f64, floor: usize, ceil: usize) -> (f64, f64) {
    if let Some(i) = HEADERS.iter().position(|header| *header == base) {
        return (grid[i][floor], grid[i][ceil]);
    }
    let i = HEADERS
        .windows(2)
        .position(|pair| pair[0] < base && base < pair[1])
        .unwrap_or(BASES - 2);
    let t = (base - HEADERS[i]) / (HEADERS[i + 1] - HEADERS[i]);
    (
        grid[i][floor] * (1.0 - t) + grid[i + 1][floor] * t,
        grid[i][ceil] * (1.0 - t) + grid[i + 1][ceil] * t,
    )
}

fn critical_section(base: f64, height: f64, grid: &Grid) -> f64 {
    if base.is_nan() || height.is_nan() {
        return f64::NAN;
    }
    let height = (height * 10.0).clamp(0.0, 10.0);
    let base = base.clamp(2.0, 10.0);
    let (floor, ceil) = (height.floor(), height.ceil());
    let (lower, upper) = row_values(grid, base, floor as usize, ceil as usize);
    let frac = height - floor;
    if lower <= 0.0 || upper <= 0.0 {
        return lower * (1.0 - frac) + upper * frac;
    }
    // log-space interpolation keeps the top of the section closer to the curve
    let log_base = base.ln();
    base.powf(lower.ln() / log_base * (1.0 - frac) + upper.ln() / log_base * frac)
}

/// `base^^height` for `height ∈ [0, 1]`; bases are clamped to `[2, 10]`.
pub(super) fn tetrate_critical(base: f64, height: f64) -> f64 {
    critical_section(base, height, &TETRATION_GRID)
}

/// `slog_base(x)` for `x ∈ [0, 1]`. Bases above 10 fall back to the linear
/// approximation `x - 1`.
pub(super) fn slog_critical(base: f64, x: f64) -> f64 {
    if base > 10.0 {
        return x - 1.0;
    }
    critical_section(base, x, &SLOG_GRID)
}
