use super::model::{ColorCombination, PixelBuffer};

/// Returns true if three horizontally adjacent pixels all carry colors from
/// `combination`. Each pixel is checked for membership independently; the
/// three do not need to share a single color.
///
/// The scan never uses the outermost rows or columns as the center pixel, so
/// buffers narrower than 3 columns or shorter than 3 rows cannot match.
/// Returns on the first hit; no side effects.
pub fn detect(buffer: &PixelBuffer, combination: &ColorCombination) -> bool {
    if buffer.width() < 3 || buffer.height() < 3 {
        return false;
    }
    for x in 1..buffer.width() - 1 {
        for y in 1..buffer.height() - 1 {
            let center = buffer.get(x, y);
            let left = buffer.get(x - 1, y);
            let right = buffer.get(x + 1, y);
            if combination.contains(center)
                && combination.contains(left)
                && combination.contains(right)
            {
                return true;
            }
        }
    }
    false
}

/// Collects coordinates of pixels whose color belongs to `combination`,
/// recording at most one hit per column (the topmost matching row) before
/// moving on. Scans the whole buffer, edges included, so the alert message
/// can point at everything the combination touches.
pub fn positions(buffer: &PixelBuffer, combination: &ColorCombination) -> Vec<(u32, u32)> {
    let mut hits = Vec::new();
    for x in 0..buffer.width() {
        for y in 0..buffer.height() {
            if combination.contains(buffer.get(x, y)) {
                hits.push((x, y));
                break;
            }
        }
    }
    hits
}
