/// Width over height, or `None` for a zero-sized (minimized) surface.
pub fn aspect_ratio(width: u32, height: u32) -> Option<f32> {
    if width == 0 || height == 0 {
        return None;
    }
    Some(width as f32 / height as f32)
}
