use crate::map::LayerType;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("tile not found: main {main_index}, sub {sub_index}, orientation {orientation}")]
    TileNotFound { main_index: i32, sub_index: i32, orientation: i32 },

    #[error("decode failed: {0}")]
    Decode(#[from] tilegfx::DecodeError),

    #[error("no candidate file to select")]
    EmptyFileSelection,

    #[error("cell ({x}, {y}) outside {width}x{height} region")]
    CellOutOfRange { x: usize, y: usize, width: usize, height: usize },

    #[error("no {layer} layer {index} at cell ({x}, {y})")]
    LayerOutOfRange { layer: LayerType, index: usize, x: usize, y: usize },

    #[error("cache key field overflow: main {main_index}, sub {sub_index}, orientation {orientation}")]
    KeyOverflow { main_index: i32, sub_index: i32, orientation: i32 },

    #[error("unexpected end of data")]
    UnexpectedEof,

    #[error("invalid tile set: {0}")]
    InvalidTileSet(String),

    #[error("invalid palette: need {need} bytes, have {have}")]
    InvalidPalette { need: usize, have: usize },

    #[error("invalid manifest: {0}")]
    InvalidManifest(String),

    #[error("io error: {0}")]
    Io(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
