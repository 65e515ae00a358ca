use crate::error::{Error, Result};
use crate::map::{FloorShadowRecord, WallRecord};

/// Packed cache identity.
///
/// Bits 31..16 hold the main index, 15..8 the sub index and 7..0 the
/// orientation. Floor and shadow keys always carry orientation 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileKey(u32);

impl TileKey {
    pub const fn new(main_index: u16, sub_index: u8, orientation: u8) -> Self {
        Self(((main_index as u32) << 16) | ((sub_index as u32) << 8) | orientation as u32)
    }

    /// Pack raw tile identity fields, rejecting values that do not fit their field
    pub fn try_new(main_index: i32, sub_index: i32, orientation: i32) -> Result<Self> {
        let overflow = || Error::KeyOverflow { main_index, sub_index, orientation };
        let main = u16::try_from(main_index).map_err(|_| overflow())?;
        let sub = u8::try_from(sub_index).map_err(|_| overflow())?;
        let orient = u8::try_from(orientation).map_err(|_| overflow())?;
        Ok(Self::new(main, sub, orient))
    }

    pub fn floor(record: &FloorShadowRecord) -> Self {
        Self::new(record.main_index as u16, record.sub_index, 0)
    }

    pub fn shadow(record: &FloorShadowRecord) -> Self {
        Self::new(record.main_index as u16, record.sub_index, 0)
    }

    pub fn wall(record: &WallRecord) -> Self {
        Self::new(record.main_index as u16, record.sub_index, record.orientation)
    }

    pub fn raw(self) -> u32 {
        self.0
    }

    pub fn main_index(self) -> u16 {
        (self.0 >> 16) as u16
    }

    pub fn sub_index(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub fn orientation(self) -> u8 {
        self.0 as u8
    }
}
