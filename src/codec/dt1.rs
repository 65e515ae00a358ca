//! DT1 tile-set files
//!
//! Layout:
//! - header: version (7, 6), 260 reserved bytes, tile count, tile header offset
//! - 96-byte tile headers, one per tile
//! - per tile, 20-byte block headers at the tile's block header offset
//! - block payloads at block header offset + block file offset

use tilegfx::{Block, BlockFormat, MaterialFlags, Tile};

use super::BinaryReader;
use crate::error::{Error, Result};

pub const DT1_VERSION: (i32, i32) = (7, 6);
const HEADER_RESERVED: usize = 260;
pub const TILE_HEADER_LEN: usize = 96;
pub const BLOCK_HEADER_LEN: usize = 20;

struct TileHeader {
    tile: Tile,
    block_header_pointer: usize,
    block_count: usize,
}

/// Parse every tile of a DT1 file, blocks and payloads included.
pub fn parse_dt1(data: &[u8]) -> Result<Vec<Tile>> {
    let mut reader = BinaryReader::new(data);

    let version = (reader.read_i32_le()?, reader.read_i32_le()?);
    if version != DT1_VERSION {
        return Err(Error::InvalidTileSet(format!(
            "unsupported version {}.{}",
            version.0, version.1
        )));
    }
    reader.skip(HEADER_RESERVED)?;

    let tile_count = to_len(reader.read_i32_le()?, "tile count")?;
    let headers_at = to_len(reader.read_i32_le()?, "tile header offset")?;
    reader.seek(headers_at)?;
    if tile_count.saturating_mul(TILE_HEADER_LEN) > reader.remaining() {
        return Err(Error::UnexpectedEof);
    }

    let mut headers = Vec::with_capacity(tile_count);
    for _ in 0..tile_count {
        headers.push(read_tile_header(&mut reader)?);
    }

    headers
        .into_iter()
        .map(|header| read_blocks(&mut reader, header))
        .collect()
}

fn read_tile_header(reader: &mut BinaryReader) -> Result<TileHeader> {
    let direction = reader.read_i32_le()?;
    let roof_height = reader.read_i16_le()?;
    let material = MaterialFlags::from_bits_retain(reader.read_u16_le()?);
    let height = reader.read_i32_le()?;
    let width = reader.read_i32_le()?;
    reader.skip(4)?;
    let orientation = reader.read_i32_le()?;
    let main_index = reader.read_i32_le()?;
    let sub_index = reader.read_i32_le()?;
    let rarity = reader.read_i32_le()?;
    reader.skip(4)?;
    let sub_tile_flags = reader.read_array::<25>()?;
    reader.skip(7)?;
    let block_header_pointer = to_len(reader.read_i32_le()?, "block header offset")?;
    let _block_data_len = reader.read_i32_le()?;
    let block_count = to_len(reader.read_i32_le()?, "block count")?;
    reader.skip(12)?;

    Ok(TileHeader {
        tile: Tile {
            direction,
            roof_height,
            material,
            height,
            width,
            orientation,
            main_index,
            sub_index,
            rarity,
            sub_tile_flags,
            blocks: Vec::new(),
        },
        block_header_pointer,
        block_count,
    })
}

fn read_blocks(reader: &mut BinaryReader, header: TileHeader) -> Result<Tile> {
    let TileHeader { mut tile, block_header_pointer, block_count } = header;

    reader.seek(block_header_pointer)?;
    if block_count.saturating_mul(BLOCK_HEADER_LEN) > reader.remaining() {
        return Err(Error::UnexpectedEof);
    }

    let mut offsets = Vec::with_capacity(block_count);
    for _ in 0..block_count {
        let x = reader.read_i16_le()?;
        let y = reader.read_i16_le()?;
        reader.skip(2)?;
        let grid_x = reader.read_u8()?;
        let grid_y = reader.read_u8()?;
        let format = BlockFormat::from_raw(reader.read_i16_le()?);
        let length = reader.read_i32_le()?;
        reader.skip(2)?;
        let file_offset = to_len(reader.read_i32_le()?, "block data offset")?;

        to_len(length, "block length")?;
        offsets.push(file_offset);
        tile.blocks.push(Block { x, y, grid_x, grid_y, format, length, encoded_data: Vec::new() });
    }

    for (block, file_offset) in tile.blocks.iter_mut().zip(offsets) {
        reader.seek(block_header_pointer + file_offset)?;
        block.encoded_data = reader.read_bytes(block.length as usize)?.to_vec();
    }

    Ok(tile)
}

fn to_len(v: i32, what: &str) -> Result<usize> {
    usize::try_from(v).map_err(|_| Error::InvalidTileSet(format!("negative {what}: {v}")))
}
