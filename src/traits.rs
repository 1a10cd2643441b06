/// Extension trait for `usize` to provide safe f32 conversion for scene-scale values
pub trait UsizeExt {
    /// Converts `usize` to `f32` for scene-scale values (safe for values < 16 million)
    fn to_f32(self) -> f32;
}

impl UsizeExt for usize {
    #[inline]
    #[allow(clippy::cast_precision_loss, reason = "indices and counts stay far below 2^24")]
    fn to_f32(self) -> f32 { self as f32 }
}
