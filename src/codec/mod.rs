pub mod dt1;
pub mod palette;
pub mod reader;
#[cfg(test)]
pub mod writer;

pub use dt1::parse_dt1;
pub use palette::{parse_palette, PALETTE_FILE_LEN};
pub use reader::BinaryReader;
#[cfg(test)]
pub use writer::BinaryWriter;
