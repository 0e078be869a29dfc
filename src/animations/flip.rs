use super::common::{Animation, AnimationContext, CharAnimationResult, render_turn};

/// Flip animation - Glyph tumbles around its horizontal axis
pub(crate) struct Flip;

impl Animation for Flip {
    fn render_char(&self, ctx: &AnimationContext) -> CharAnimationResult {
        // Characters further right lag behind slightly so multi-char text ripples
        let lag = if ctx.total_chars > 1 { ctx.char_index as f32 / ctx.total_chars as f32 * 0.1 } else { 0.0 };
        let ctx = AnimationContext { progress: (ctx.progress + 1.0 - lag).fract(), ..ctx.clone() };
        render_turn(&ctx, '─')
    }
}
