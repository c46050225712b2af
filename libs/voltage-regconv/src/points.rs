//! Point tables
//!
//! A point table maps named measurement points onto a polled register block.
//! Each point names its register offset inside the block, its data type, an
//! optional bit position and a scale factor. Tables load from CSV, YAML or
//! JSON and decode a whole block in one pass.
//!
//! CSV layout (header required, `bit_pos`/`scale`/`unit` may be blank; an
//! optional `narrowing` column selects `wrapping`, `checked` or `saturating`):
//!
//! ```text
//! point_id,name,register,data_type,bit_pos,scale,unit
//! 1,voltage,0,int16_unsigned_ab,,0.1,V
//! 2,power,1,float32_cdab,,1.0,kW
//! 3,breaker_closed,3,boolean,4,,
//! ```

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::bytes::MAX_BIT_INDEX;
use crate::convert::convert_with_mode;
use crate::data_type::{DataType, RegisterLayout};
use crate::error::{ConversionError, PointTableError};
use crate::scale::NarrowingMode;
use crate::serde_defaults::{
    bit_zero, deserialize_narrowing, deserialize_scale, deserialize_u8_default_zero, scale_one,
};
use crate::value::RegisterValue;

/// One point of a register map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointMapping {
    pub point_id: u32,
    pub name: String,
    /// Offset from the start of the polled block
    pub register: u16,
    pub data_type: DataType,
    #[serde(default = "bit_zero", deserialize_with = "deserialize_u8_default_zero")]
    pub bit_pos: u8,
    #[serde(default = "scale_one", deserialize_with = "deserialize_scale")]
    pub scale: f64,
    #[serde(default)]
    pub unit: Option<String>,
    /// How the scaled value is narrowed into the output type
    #[serde(default, deserialize_with = "deserialize_narrowing")]
    pub narrowing: NarrowingMode,
}

impl PointMapping {
    /// Offset one past the last register this point reads
    pub fn register_end(&self) -> usize {
        self.register as usize + self.data_type.register_count()
    }
}

/// Outcome of decoding a single point
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedPoint {
    pub point_id: u32,
    pub name: String,
    pub result: Result<RegisterValue, ConversionError>,
}

impl DecodedPoint {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Validated collection of point mappings
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct PointTable {
    points: Vec<PointMapping>,
}

impl PointTable {
    /// Build a table, rejecting duplicate ids and out-of-range bit positions
    pub fn new(points: Vec<PointMapping>) -> Result<Self, PointTableError> {
        let mut seen = HashSet::with_capacity(points.len());
        for point in &points {
            if !seen.insert(point.point_id) {
                return Err(PointTableError::validation(format!(
                    "Duplicate point_id {}",
                    point.point_id
                )));
            }
            if point.data_type.descriptor().layout == RegisterLayout::Bit
                && point.bit_pos > MAX_BIT_INDEX
            {
                return Err(PointTableError::validation(format!(
                    "Point {} ({}): bit_pos {} exceeds {}",
                    point.point_id, point.name, point.bit_pos, MAX_BIT_INDEX
                )));
            }
        }
        debug!("Point table loaded: {} points", points.len());
        Ok(Self { points })
    }

    /// Load from CSV with a header row
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, PointTableError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut points = Vec::new();
        for row in reader.deserialize::<PointMapping>() {
            points.push(row?);
        }
        Self::new(points)
    }

    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self, PointTableError> {
        let path = path.as_ref();
        debug!("Loading point table from {}", path.display());
        let file = std::fs::File::open(path)?;
        Self::from_csv_reader(file)
    }

    /// Load from a YAML sequence of points
    pub fn from_yaml_str(content: &str) -> Result<Self, PointTableError> {
        let points: Vec<PointMapping> = serde_yaml::from_str(content)?;
        Self::new(points)
    }

    /// Load from a JSON array of points
    pub fn from_json_str(content: &str) -> Result<Self, PointTableError> {
        let points: Vec<PointMapping> = serde_json::from_str(content)?;
        Self::new(points)
    }

    pub fn points(&self) -> &[PointMapping] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, point_id: u32) -> Option<&PointMapping> {
        self.points.iter().find(|p| p.point_id == point_id)
    }

    /// Number of registers a block read must cover to decode every point
    pub fn register_span(&self) -> usize {
        self.points
            .iter()
            .map(PointMapping::register_end)
            .max()
            .unwrap_or(0)
    }

    /// Decode every point from a block read starting at offset 0
    ///
    /// Points are independent: one failing point does not stop the rest.
    pub fn decode_block(&self, registers: &[u16]) -> Vec<DecodedPoint> {
        trace!(
            "Decoding {} points from {} registers",
            self.points.len(),
            registers.len()
        );
        let mut failed = 0usize;
        let decoded: Vec<DecodedPoint> = self
            .points
            .iter()
            .map(|point| {
                let result = decode_mapping(point, registers);
                if let Err(e) = &result {
                    failed += 1;
                    warn!("Point {} ({}) decode failed: {}", point.point_id, point.name, e);
                }
                DecodedPoint {
                    point_id: point.point_id,
                    name: point.name.clone(),
                    result,
                }
            })
            .collect();
        if failed > 0 {
            debug!("Block decode: {}/{} points failed", failed, decoded.len());
        }
        decoded
    }

    /// Decode a single point from a block read starting at offset 0
    pub fn decode_point(
        &self,
        point_id: u32,
        registers: &[u16],
    ) -> Result<RegisterValue, PointTableError> {
        let point = self
            .get(point_id)
            .ok_or(PointTableError::PointNotFound(point_id))?;
        decode_mapping(point, registers).map_err(|source| PointTableError::Conversion {
            point_id,
            name: point.name.clone(),
            source,
        })
    }
}

fn decode_mapping(
    point: &PointMapping,
    registers: &[u16],
) -> Result<RegisterValue, ConversionError> {
    let window = registers.get(point.register as usize..).unwrap_or(&[]);
    convert_with_mode(window, point.data_type, point.bit_pos, point.scale, point.narrowing)
}
