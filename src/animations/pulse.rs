use super::common::{Animation, AnimationContext, CharAnimationResult};

/// Pulse animation - Gentle breathing of the glyph's brightness, no rotation
pub(crate) struct Pulse;

impl Animation for Pulse {
    fn render_char(&self, ctx: &AnimationContext) -> CharAnimationResult {
        // Brightest at the loop boundary so glyph swaps happen at full intensity
        let brightness = 0.7 + 0.3 * ctx.angle().cos();
        CharAnimationResult::with_color(ctx.color.dimmed(brightness))
    }
}
