//! Line-oriented text format for saved scenes
//!
//! ```text
//! SIZE <int>
//! SPACE <float>
//! <x> <y> <z> <r> <g> <b>
//! ```
//!
//! One body line per visible cell; empty cells are not written. Alpha is not
//! stored and comes back as 1.0. Blank lines are ignored anywhere.
//!
//! The older headerless variant (body lines only, grid size agreed out of
//! band) is available through [`save_legacy`] and [`load_legacy`].

use std::fmt::Write as _;

use crate::core::error::Error;
use crate::core::types::{IVec3, Result, Vec3};
use crate::voxel::{VoxelGrid, MAX_GRID_SIZE};

pub const SIZE_KEY: &str = "SIZE";
pub const SPACE_KEY: &str = "SPACE";

/// Serialize the grid header and every visible cell
pub fn save(grid: &VoxelGrid) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = writeln!(out, "{} {}", SIZE_KEY, grid.size());
    let _ = writeln!(out, "{} {}", SPACE_KEY, grid.spacing());
    write_body(&mut out, grid);
    out
}

/// Serialize visible cells only, without a header
pub fn save_legacy(grid: &VoxelGrid) -> String {
    let mut out = String::new();
    write_body(&mut out, grid);
    out
}

fn write_body(out: &mut String, grid: &VoxelGrid) {
    for voxel in grid.visible() {
        let c = voxel.coord;
        let rgb = voxel.rgb();
        let _ = writeln!(out, "{} {} {} {} {} {}", c.x, c.y, c.z, rgb.x, rgb.y, rgb.z);
    }
}

/// Build a new grid from headered scene text.
///
/// The result is a fresh grid; nothing is modified on failure.
pub fn load(text: &str) -> Result<VoxelGrid> {
    let mut lines = content_lines(text);

    let size = match lines.next() {
        Some((line, content)) => {
            parse_header(line, content, SIZE_KEY, |v| v.parse::<i32>().ok().filter(|s| (1..=MAX_GRID_SIZE).contains(s)))?
        }
        None => return Err(Error::format(1, format!("missing {} header", SIZE_KEY))),
    };
    let spacing = match lines.next() {
        Some((line, content)) => {
            parse_header(line, content, SPACE_KEY, |v| v.parse::<f32>().ok().filter(|s| s.is_finite() && *s > 0.0))?
        }
        None => return Err(Error::format(text.lines().count() + 1, format!("missing {} header", SPACE_KEY))),
    };

    let mut grid = VoxelGrid::empty(size, spacing)?;
    read_body(&mut grid, lines)?;
    log::debug!("Parsed scene: {}³ grid, {} voxels", size, grid.visible_count());
    Ok(grid)
}

/// Build a `size³` grid from headerless scene text
pub fn load_legacy(text: &str, size: i32, spacing: f32) -> Result<VoxelGrid> {
    let mut grid = VoxelGrid::empty(size, spacing)?;
    read_body(&mut grid, content_lines(text))?;
    Ok(grid)
}

/// Non-blank lines with their 1-based line numbers
fn content_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty())
}

fn parse_header<T>(line: usize, content: &str, key: &str, parse: impl Fn(&str) -> Option<T>) -> Result<T> {
    let mut fields = content.split_whitespace();
    if fields.next() != Some(key) {
        return Err(Error::format(line, format!("expected {} header, found `{}`", key, content)));
    }
    let value = fields.next()
        .ok_or_else(|| Error::format(line, format!("{} header has no value", key)))?;
    if fields.next().is_some() {
        return Err(Error::format(line, format!("trailing data after {} value", key)));
    }
    parse(value).ok_or_else(|| Error::format(line, format!("invalid {} value `{}`", key, value)))
}

fn read_body<'a>(grid: &mut VoxelGrid, lines: impl Iterator<Item = (usize, &'a str)>) -> Result<()> {
    let mut skipped = 0usize;
    for (line, content) in lines {
        let (coord, rgb) = parse_voxel_line(line, content)?;
        if grid.contains(coord) {
            grid.place_voxel(coord, rgb)?;
        } else {
            log::warn!("Line {}: voxel {} outside {}³ grid, skipped", line, coord, grid.size());
            skipped += 1;
        }
    }
    if skipped > 0 {
        log::warn!("{} out-of-range voxels ignored", skipped);
    }
    Ok(())
}

fn parse_voxel_line(line: usize, content: &str) -> Result<(IVec3, Vec3)> {
    let fields: Vec<&str> = content.split_whitespace().collect();
    if fields.len() != 6 {
        return Err(Error::format(line, format!("expected 6 fields, found {}", fields.len())));
    }

    let int = |i: usize| {
        fields[i].parse::<i32>()
            .map_err(|_| Error::format(line, format!("invalid coordinate `{}`", fields[i])))
    };
    let float = |i: usize| {
        fields[i].parse::<f32>()
            .map_err(|_| Error::format(line, format!("invalid color component `{}`", fields[i])))
    };

    Ok((
        IVec3::new(int(0)?, int(1)?, int(2)?),
        Vec3::new(float(3)?, float(4)?, float(5)?),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Vec4;
    use crate::voxel::RandomColors;

    fn visible_set(grid: &VoxelGrid) -> Vec<(IVec3, Vec3)> {
        grid.visible().map(|v| (v.coord, v.rgb())).collect()
    }

    #[test]
    fn test_save_writes_header_and_visible_cells() {
        let mut grid = VoxelGrid::empty(4, 0.5).unwrap();
        grid.place_voxel(IVec3::new(1, 2, 3), Vec3::new(1.0, 0.5, 0.25)).unwrap();
        grid.place_voxel(IVec3::new(0, 0, 0), Vec3::new(0.0, 1.0, 0.0)).unwrap();

        let text = save(&grid);
        assert_eq!(text, "SIZE 4\nSPACE 0.5\n0 0 0 0 1 0\n1 2 3 1 0.5 0.25\n");
    }

    #[test]
    fn test_round_trip_preserves_scene() {
        let mut grid = VoxelGrid::with_initializer(5, 0.75, &mut RandomColors::with_seed(3)).unwrap();
        for x in 0..5 {
            grid.remove_voxel(IVec3::new(x, x, 4 - x)).unwrap();
        }
        grid.set_spacing(1.0);

        let loaded = load(&save(&grid)).unwrap();
        assert_eq!(loaded.size(), grid.size());
        assert_eq!(loaded.spacing(), grid.spacing());
        assert_eq!(visible_set(&loaded), visible_set(&grid));
        // Source alpha was 0.8; it comes back opaque
        assert!(loaded.visible().all(|v| v.color.w == 1.0));
        assert!(loaded.iter().all(|v| v.scale == grid.spacing()));
    }

    #[test]
    fn test_round_trip_empty_grid() {
        let grid = VoxelGrid::empty(3, 0.3).unwrap();
        let text = save(&grid);
        assert_eq!(text.lines().count(), 2);
        let loaded = load(&text).unwrap();
        assert_eq!(loaded.size(), 3);
        assert_eq!(loaded.spacing(), 0.3);
        assert_eq!(loaded.visible_count(), 0);
    }

    #[test]
    fn test_blank_lines_ignored() {
        let text = "\nSIZE 2\n\n  SPACE 1.0  \n\n1 1 1 0.1 0.2 0.3\n   \n";
        let grid = load(text).unwrap();
        assert_eq!(grid.visible_count(), 1);
        assert_eq!(grid.cell(IVec3::ONE).unwrap().color, Vec4::new(0.1, 0.2, 0.3, 1.0));
    }

    #[test]
    fn test_missing_space_header() {
        let err = load("SIZE 3\n0 0 0 1 1 1\n").unwrap_err();
        assert!(matches!(err, Error::Format { line: 2, .. }), "{err}");

        let err = load("SIZE 3\n").unwrap_err();
        assert!(matches!(err, Error::Format { .. }));
    }

    #[test]
    fn test_headers_out_of_order() {
        assert!(matches!(load("SPACE 1.0\nSIZE 3\n"), Err(Error::Format { line: 1, .. })));
    }

    #[test]
    fn test_bad_header_values() {
        for text in ["SIZE 0\nSPACE 1\n", "SIZE -3\nSPACE 1\n", "SIZE x\nSPACE 1\n", "SIZE 3\nSPACE 0\n", "SIZE 3\nSPACE nan\n", "SIZE 3 4\nSPACE 1\n", "SIZE\nSPACE 1\n"] {
            assert!(matches!(load(text), Err(Error::Format { .. })), "accepted {text:?}");
        }
        assert!(matches!(load(""), Err(Error::Format { line: 1, .. })));
    }

    #[test]
    fn test_oversized_size_header() {
        match load("SIZE 3000000\nSPACE 1\n0 0 0 1 1 1\n") {
            Err(Error::Format { line, reason }) => {
                assert_eq!(line, 1);
                assert!(reason.contains("3000000"), "{reason}");
            }
            other => panic!("expected format error, got {other:?}"),
        }
        let largest = format!("SIZE {}\nSPACE 1\n", MAX_GRID_SIZE);
        assert_eq!(load(&largest).unwrap().size(), MAX_GRID_SIZE);
        assert!(matches!(load_legacy("", MAX_GRID_SIZE + 1, 1.0), Err(Error::InvalidDimension(_))));
    }

    #[test]
    fn test_bad_body_lines() {
        let cases = [
            ("SIZE 3\nSPACE 1\n0 0 0 1 1\n", 3),
            ("SIZE 3\nSPACE 1\n0 0 0 1 1 1 1\n", 3),
            ("SIZE 3\nSPACE 1\n0 0 0 1 1 1\n0 a 0 1 1 1\n", 4),
            ("SIZE 3\nSPACE 1\n0 0 0 red 1 1\n", 3),
            ("SIZE 3\nSPACE 1\n0.5 0 0 1 1 1\n", 3),
        ];
        for (text, expected_line) in cases {
            match load(text) {
                Err(Error::Format { line, .. }) => assert_eq!(line, expected_line, "{text:?}"),
                other => panic!("expected format error for {text:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_out_of_range_voxels_skipped() {
        let text = "SIZE 2\nSPACE 1\n0 0 0 1 0 0\n2 0 0 0 1 0\n0 -1 0 0 0 1\n";
        let grid = load(text).unwrap();
        assert_eq!(grid.visible_count(), 1);
        assert!(grid.cell(IVec3::ZERO).unwrap().visible);
    }

    #[test]
    fn test_legacy_round_trip() {
        let mut grid = VoxelGrid::empty(3, 0.75).unwrap();
        grid.place_voxel(IVec3::new(2, 1, 0), Vec3::new(0.9, 0.8, 0.7)).unwrap();

        let text = save_legacy(&grid);
        assert!(!text.contains(SIZE_KEY));
        let loaded = load_legacy(&text, 3, 0.75).unwrap();
        assert_eq!(visible_set(&loaded), visible_set(&grid));
    }

    #[test]
    fn test_legacy_text_is_not_headered() {
        assert!(matches!(load("0 0 0 1 1 1\n"), Err(Error::Format { line: 1, .. })));
    }
}
