//! Bounding-box covering query.

use super::GeoHashQuery;
use crate::config::QueryConfig;
use crate::error::Result;
use crate::geohash::GeoHash;
use crate::geohash::adjacency::CellIndex;
use crate::geohash::size::fitting_bits;
use crate::types::{BoundingBox, GeoPoint};
use std::fmt;

/// Covers a bounding box with a grid of equal-precision geohash cells.
///
/// # Algorithm
///
/// 1. Pick the coarsest precision whose cells fit inside the box (capped by
///    `max_precision_bits`), so the box spans only a few cells per axis
/// 2. Encode the south-west and north-east corners at that precision; the
///    cells between them form the grid
/// 3. Coarsen the precision while the grid holds more than
///    `max_search_hashes` cells
/// 4. Walk the grid row by row from the south-west cell using the east and
///    north neighbors, keeping every cell that shares area with the box
///    (cells that only touch a box edge are dropped)
///
/// The union of the search hashes always covers the whole box. It may also
/// cover area outside it, so candidates must still be checked with
/// [`GeoHashQuery::contains_point`].
///
/// # Examples
///
/// ```rust
/// use spatio_geohash::{BoundingBox, BoundingBoxQuery, GeoHashQuery};
///
/// let bbox = BoundingBox::new(40.0, 50.0, 0.0, 10.0)?;
/// let query = BoundingBoxQuery::new(bbox);
///
/// assert_eq!(query.precision(), 11);
/// assert_eq!(query.search_hashes().len(), 4);
/// # Ok::<(), spatio_geohash::GeoHashError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BoundingBoxQuery {
    bbox: BoundingBox,
    search_hashes: Vec<GeoHash>,
    /// Union of the search hash cells
    covered: BoundingBox,
    precision: u8,
}

impl BoundingBoxQuery {
    /// Build the covering for `bbox` with the default configuration.
    pub fn new(bbox: BoundingBox) -> Self {
        Self::build(bbox, &QueryConfig::default())
    }

    /// Build the covering for `bbox` with an explicit configuration.
    pub fn with_config(bbox: BoundingBox, config: &QueryConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(bbox, config))
    }

    fn build(bbox: BoundingBox, config: &QueryConfig) -> Self {
        let mut precision = fitting_bits(&bbox, config.max_precision_bits);
        let mut grid = Grid::spanning(&bbox, precision);

        while precision > 0 && grid.cell_count() > config.max_search_hashes as u64 {
            precision -= 1;
            grid = Grid::spanning(&bbox, precision);
        }

        let search_hashes = grid.cells_intersecting(&bbox);
        let mut covered = search_hashes
            .first()
            .map(GeoHash::bounding_box)
            .unwrap_or(bbox);
        for hash in search_hashes.iter().skip(1) {
            covered.expand_to_include(&hash.bounding_box());
        }

        log::debug!(
            "covering {} with {} search hashes at {} bits ({} rows x {} columns)",
            bbox,
            search_hashes.len(),
            precision,
            grid.rows,
            grid.columns
        );

        Self {
            bbox,
            search_hashes,
            covered,
            precision,
        }
    }

    /// The box this query covers.
    pub fn bounding_box(&self) -> &BoundingBox {
        &self.bbox
    }

    /// The union of all search hash cells; always contains [`bounding_box`](Self::bounding_box).
    pub fn covered_area(&self) -> &BoundingBox {
        &self.covered
    }

    /// Significant bits shared by every search hash.
    pub fn precision(&self) -> u8 {
        self.precision
    }
}

impl GeoHashQuery for BoundingBoxQuery {
    fn contains_point(&self, point: &GeoPoint) -> bool {
        self.bbox.contains(point)
    }

    fn contains_hash(&self, hash: &GeoHash) -> bool {
        self.bbox.intersects(&hash.bounding_box())
    }

    fn search_hashes(&self) -> &[GeoHash] {
        &self.search_hashes
    }

    fn wkt_box(&self) -> String {
        format!(
            "BOX({} {},{} {})",
            self.covered.min_lon(),
            self.covered.min_lat(),
            self.covered.max_lon(),
            self.covered.max_lat()
        )
    }
}

impl fmt::Display for BoundingBoxQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Bounding Box Query [{}] with {} search hashes at {} bits",
            self.bbox,
            self.search_hashes.len(),
            self.precision
        )
    }
}

/// The block of cells between the south-west and north-east corner cells.
struct Grid {
    south_west: GeoHash,
    rows: u64,
    columns: u64,
}

impl Grid {
    fn spanning(bbox: &BoundingBox, precision: u8) -> Self {
        let south_west = GeoHash::encode_bits(
            &GeoPoint::new_unchecked(bbox.min_lat(), bbox.min_lon()),
            precision,
        );
        let north_east = GeoHash::encode_bits(
            &GeoPoint::new_unchecked(bbox.max_lat(), bbox.max_lon()),
            precision,
        );
        let (sw, ne) = (CellIndex::of(&south_west), CellIndex::of(&north_east));

        Self {
            south_west,
            rows: ne.lat - sw.lat + 1,
            columns: ne.lon - sw.lon + 1,
        }
    }

    fn cell_count(&self) -> u64 {
        self.rows.saturating_mul(self.columns)
    }

    /// Row-major walk from the south-west cell, eastward then northward.
    fn cells_intersecting(&self, bbox: &BoundingBox) -> Vec<GeoHash> {
        let mut cells = Vec::with_capacity(self.cell_count().min(1024) as usize);
        let mut row_start = self.south_west;

        for _ in 0..self.rows {
            let mut cell = row_start;
            for _ in 0..self.columns {
                if overlaps(&cell.bounding_box(), bbox) {
                    cells.push(cell);
                }
                cell = cell.eastern_neighbor();
            }
            row_start = row_start.northern_neighbor();
        }

        cells
    }
}

/// Whether `cell` shares area with `bbox`. A cell that only touches the box
/// along an edge is left out, except along an axis where the box has no
/// extent, since a box edge on a cell boundary is then the whole box.
fn overlaps(cell: &BoundingBox, bbox: &BoundingBox) -> bool {
    let latitude = if bbox.latitude_size() > 0.0 {
        cell.min_lat() < bbox.max_lat() && cell.max_lat() > bbox.min_lat()
    } else {
        cell.min_lat() <= bbox.max_lat() && cell.max_lat() >= bbox.min_lat()
    };
    let longitude = if bbox.longitude_size() > 0.0 {
        cell.min_lon() < bbox.max_lon() && cell.max_lon() > bbox.min_lon()
    } else {
        cell.min_lon() <= bbox.max_lon() && cell.max_lon() >= bbox.min_lon()
    };
    latitude && longitude
}
