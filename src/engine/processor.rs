/// Something the host audio callback can ask for a block of samples.
pub trait AudioProcessor: Send {
    /// Render one quantum into `out`.
    ///
    /// `None` means the host has no buffer for this call; implementations
    /// must treat it as a no-op. The return value asks the host to keep the
    /// processor alive and is `true` for every processor in this crate.
    fn render_block(&mut self, out: Option<&mut [f32]>) -> bool;
}

/// Allow boxed processors to be used as processors (for dynamic dispatch)
impl AudioProcessor for Box<dyn AudioProcessor> {
    fn render_block(&mut self, out: Option<&mut [f32]>) -> bool {
        (**self).render_block(out)
    }
}
