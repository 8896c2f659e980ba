//! Dense cubic voxel grid and its mutation protocol

use crate::core::error::Error;
use crate::core::types::{IVec3, Result, Vec3};
use crate::math::Aabb;
use super::initializer::{CellInitializer, Empty, RandomColors};
use super::voxel::{opaque, random_color, Voxel};

/// Amount one scroll notch changes the spacing
pub const SPACING_STEP: f32 = 0.1;
/// Smallest allowed cube edge
pub const MIN_SPACING: f32 = 0.1;
/// Largest allowed cube edge (cubes touch)
pub const MAX_SPACING: f32 = 1.0;
/// Largest accepted edge length in cells
pub const MAX_GRID_SIZE: i32 = 64;

/// Fixed-size `size³` grid of voxels stored as a flat arena.
///
/// Cell `(x, y, z)` lives at index `(x * size + y) * size + z`. The grid keeps
/// one selected coordinate, always inside the grid, and the matching cell is
/// the only one with `selected` set.
pub struct VoxelGrid {
    size: i32,
    spacing: f32,
    cells: Vec<Voxel>,
    selection: IVec3,
    rng: fastrand::Rng,
}

impl std::fmt::Debug for VoxelGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VoxelGrid")
            .field("size", &self.size)
            .field("spacing", &self.spacing)
            .field("selection", &self.selection)
            .field("visible", &self.visible_count())
            .finish()
    }
}

impl VoxelGrid {
    /// Create a grid with every cell visible and randomly colored
    pub fn new(size: i32, spacing: f32) -> Result<Self> {
        Self::with_initializer(size, spacing, &mut RandomColors::new())
    }

    /// Create a grid whose cells come from `init`
    pub fn with_initializer(size: i32, spacing: f32, init: &mut impl CellInitializer) -> Result<Self> {
        check_size(size)?;

        let mut grid = Self {
            size,
            spacing,
            cells: Self::allocate(size, spacing, init),
            selection: Self::home(size),
            rng: fastrand::Rng::new(),
        };
        grid.mark_selection();
        log::debug!("Created {}³ grid (spacing {})", size, spacing);
        Ok(grid)
    }

    /// Create a grid with every cell invisible
    pub fn empty(size: i32, spacing: f32) -> Result<Self> {
        Self::with_initializer(size, spacing, &mut Empty)
    }

    /// Reseed the generator behind "random color on add"
    pub fn seed_colors(&mut self, seed: u64) {
        self.rng = fastrand::Rng::with_seed(seed);
    }

    fn allocate(size: i32, spacing: f32, init: &mut impl CellInitializer) -> Vec<Voxel> {
        let mut cells = Vec::with_capacity((size as usize).pow(3));
        for x in 0..size {
            for y in 0..size {
                for z in 0..size {
                    let coord = IVec3::new(x, y, z);
                    let mut voxel = init.init_cell(coord, spacing);
                    // Lattice position and cube size are owned by the grid, not the initializer
                    voxel.coord = coord;
                    voxel.position = coord.as_vec3();
                    voxel.scale = spacing;
                    voxel.selected = false;
                    cells.push(voxel);
                }
            }
        }
        cells
    }

    /// Default selection: front-bottom-left corner, facing a camera on +Z
    fn home(size: i32) -> IVec3 {
        IVec3::new(0, 0, size - 1)
    }

    fn mark_selection(&mut self) {
        let index = self.linear_index(self.selection);
        self.cells[index].selected = true;
    }

    fn linear_index(&self, coord: IVec3) -> usize {
        let size = self.size as usize;
        (coord.x as usize * size + coord.y as usize) * size + coord.z as usize
    }

    /// Whether `coord` lies inside the grid
    pub fn contains(&self, coord: IVec3) -> bool {
        coord.cmpge(IVec3::ZERO).all() && coord.cmplt(IVec3::splat(self.size)).all()
    }

    fn index(&self, coord: IVec3) -> Result<usize> {
        if self.contains(coord) {
            Ok(self.linear_index(coord))
        } else {
            Err(Error::OutOfRange { coord, size: self.size })
        }
    }

    /// Bounds-checked cell lookup
    pub fn cell(&self, coord: IVec3) -> Result<&Voxel> {
        let index = self.index(coord)?;
        Ok(&self.cells[index])
    }

    fn cell_mut(&mut self, coord: IVec3) -> Result<&mut Voxel> {
        let index = self.index(coord)?;
        Ok(&mut self.cells[index])
    }

    /// Make an empty cell visible with a new random opaque color.
    ///
    /// Returns whether the cell changed; an already visible cell is left alone.
    pub fn add_voxel(&mut self, coord: IVec3) -> Result<bool> {
        let color = random_color(&mut self.rng, 1.0);
        let voxel = self.cell_mut(coord)?;
        if voxel.visible {
            return Ok(false);
        }
        voxel.visible = true;
        voxel.color = color;
        log::debug!("Voxel added at {}", coord);
        Ok(true)
    }

    /// Make a visible cell empty. Returns whether the cell changed.
    pub fn remove_voxel(&mut self, coord: IVec3) -> Result<bool> {
        let voxel = self.cell_mut(coord)?;
        if !voxel.visible {
            return Ok(false);
        }
        voxel.visible = false;
        log::debug!("Voxel removed at {}", coord);
        Ok(true)
    }

    /// Recolor a visible cell (alpha forced to 1). Painting an empty cell does
    /// nothing. Returns whether the cell changed.
    pub fn paint_voxel(&mut self, coord: IVec3, rgb: Vec3) -> Result<bool> {
        let voxel = self.cell_mut(coord)?;
        if !voxel.visible {
            return Ok(false);
        }
        voxel.color = opaque(rgb);
        Ok(true)
    }

    /// Make a cell visible with exactly this color (alpha 1), whatever its
    /// previous state. Used when rebuilding a grid from a saved scene.
    pub fn place_voxel(&mut self, coord: IVec3, rgb: Vec3) -> Result<()> {
        let voxel = self.cell_mut(coord)?;
        voxel.visible = true;
        voxel.color = opaque(rgb);
        Ok(())
    }

    /// Step the spacing by one notch in the direction of `delta`, clamped to
    /// `[MIN_SPACING, MAX_SPACING]`, and apply it to every cell.
    pub fn set_spacing(&mut self, delta: f32) -> f32 {
        if delta == 0.0 || delta.is_nan() {
            return self.spacing;
        }
        let spacing = (self.spacing + SPACING_STEP * delta.signum()).clamp(MIN_SPACING, MAX_SPACING);
        self.spacing = spacing;
        for voxel in &mut self.cells {
            voxel.scale = spacing;
        }
        log::debug!("Grid spacing now {:.2}", spacing);
        spacing
    }

    /// Hide every cell without touching colors or dimensions
    pub fn clear_all(&mut self) {
        for voxel in &mut self.cells {
            voxel.visible = false;
        }
    }

    /// Replace the whole array with `new_size³` empty cells
    pub fn resize(&mut self, new_size: i32, new_spacing: f32) -> Result<()> {
        check_size(new_size)?;
        self.size = new_size;
        self.spacing = new_spacing;
        self.cells = Self::allocate(new_size, new_spacing, &mut Empty);
        self.selection = Self::home(new_size);
        self.mark_selection();
        Ok(())
    }

    /// Move the selection marker to `coord`
    pub fn select(&mut self, coord: IVec3) -> Result<()> {
        let next = self.index(coord)?;
        let previous = self.linear_index(self.selection);
        self.cells[previous].selected = false;
        self.cells[next].selected = true;
        self.selection = coord;
        Ok(())
    }

    /// Edge length in cells
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Current cube edge length
    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    /// Currently selected coordinate
    pub fn selection(&self) -> IVec3 {
        self.selection
    }

    /// The selected cell
    pub fn selected_voxel(&self) -> &Voxel {
        &self.cells[self.linear_index(self.selection)]
    }

    /// All cells in `x, y, z` scan order
    pub fn iter(&self) -> impl Iterator<Item = &Voxel> {
        self.cells.iter()
    }

    /// Visible cells in scan order
    pub fn visible(&self) -> impl Iterator<Item = &Voxel> {
        self.cells.iter().filter(|v| v.visible)
    }

    /// Number of visible cells
    pub fn visible_count(&self) -> usize {
        self.visible().count()
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: a grid has at least one cell
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Box enclosing every cell's picking box
    pub fn bounds(&self) -> Aabb {
        let half = Vec3::splat(self.spacing * 0.5);
        Aabb::new(-half, Vec3::splat((self.size - 1) as f32) + half)
    }
}

/// Reject edge lengths outside `1..=MAX_GRID_SIZE`
fn check_size(size: i32) -> Result<()> {
    if !(1..=MAX_GRID_SIZE).contains(&size) {
        return Err(Error::InvalidDimension(size));
    }
    Ok(())
}
