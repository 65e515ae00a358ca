#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("pixel ({x}, {y}) outside {width}x{height} surface")]
    BoundsViolation { x: i32, y: i32, width: u32, height: u32 },

    #[error("block payload truncated: need {need} bytes, have {have}")]
    Truncated { need: usize, have: usize },

    #[error("{width}x{height} surface exceeds {max} pixels per side")]
    SurfaceTooLarge { width: u32, height: u32, max: u32 },
}

pub type Result<T> = std::result::Result<T, DecodeError>;
