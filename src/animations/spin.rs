use super::common::{Animation, AnimationContext, CharAnimationResult, render_turn};

/// Spin animation - Glyph turns around its vertical axis, showing a thin edge when sideways
pub(crate) struct Spin;

impl Animation for Spin {
    fn render_char(&self, ctx: &AnimationContext) -> CharAnimationResult {
        render_turn(ctx, '│')
    }
}
