use crate::coords::Rect;

/// Converts a row-major 8-bit coverage bitmap into horizontal runs of pixels
/// whose coverage is at least `threshold`, offset by `origin`.
pub fn coverage_runs(
    bitmap: &[u8],
    width: usize,
    height: usize,
    origin: (i32, i32),
    threshold: u8,
) -> Vec<Rect> {
    let mut runs = Vec::new();
    if width == 0 {
        return runs;
    }

    for (row, line) in bitmap.chunks_exact(width).take(height).enumerate() {
        let y = origin.1.saturating_add(row as i32);
        let mut start: Option<usize> = None;

        for (col, &coverage) in line.iter().enumerate() {
            match (coverage >= threshold, start) {
                (true, None) => start = Some(col),
                (false, Some(s)) => {
                    runs.push(run(origin.0, y, s, col));
                    start = None;
                }
                _ => {}
            }
        }
        if let Some(s) = start {
            runs.push(run(origin.0, y, s, width));
        }
    }
    runs
}

fn run(x0: i32, y: i32, from: usize, to: usize) -> Rect {
    Rect::new(x0.saturating_add(from as i32), y, (to - from) as u32, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_split_on_low_coverage() {
        #[rustfmt::skip]
        let bitmap = [
            255, 255,   0, 200,
              0,   0,   0,   0,
             10, 130, 140, 127,
        ];
        let runs = coverage_runs(&bitmap, 4, 3, (10, 20), 128);
        assert_eq!(
            runs,
            [
                Rect::new(10, 20, 2, 1),
                Rect::new(13, 20, 1, 1),
                Rect::new(11, 22, 2, 1),
            ]
        );
    }

    #[test]
    fn empty_bitmap_has_no_runs() {
        assert!(coverage_runs(&[], 0, 0, (0, 0), 1).is_empty());
        assert!(coverage_runs(&[0; 9], 3, 3, (0, 0), 1).is_empty());
    }
}
