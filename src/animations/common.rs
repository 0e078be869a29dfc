use crate::style::Color;

/// Animation context passed to all animation renderers
#[derive(Debug, Clone)]
pub(crate) struct AnimationContext {
    /// Position within the current iteration, in `[0, 1)`
    pub progress: f32,
    /// Character index within the element's text
    pub char_index: usize,
    /// Total characters in the element's text
    pub total_chars: usize,
    /// The character being rendered
    pub ch: char,
    /// The element's resolved color
    pub color: Color,
}

impl AnimationContext {
    /// The rotation angle for this frame, in radians.
    pub(crate) fn angle(&self) -> f32 {
        self.progress * std::f32::consts::TAU
    }
}

/// Result from rendering a single character with animation
#[derive(Debug, PartialEq)]
pub(crate) struct CharAnimationResult {
    /// Foreground color
    pub color: Color,
    /// Optional replacement character
    pub replacement_char: Option<char>,
}

impl CharAnimationResult {
    /// Create a simple result with just a foreground color
    pub fn with_color(color: Color) -> Self {
        Self { color, replacement_char: None }
    }

    /// Create a result with a replacement character
    pub fn with_replacement(color: Color, replacement_char: char) -> Self {
        Self { color, replacement_char: Some(replacement_char) }
    }
}

/// Trait for animation styles
pub(crate) trait Animation {
    /// Render a single character with the animation style
    fn render_char(&self, ctx: &AnimationContext) -> CharAnimationResult;
}

/// Renders a glyph turning around an axis in the screen plane.
///
/// When the glyph is close to edge-on it's drawn as `edge`. Its back face is drawn dimmer.
pub(crate) fn render_turn(ctx: &AnimationContext, edge: char) -> CharAnimationResult {
    let facing = ctx.angle().cos();
    let brightness = 0.35 + 0.65 * facing.abs();
    let color = ctx.color.dimmed(brightness);
    if facing.abs() < EDGE_THRESHOLD && !ctx.ch.is_whitespace() {
        return CharAnimationResult::with_replacement(color, edge);
    }
    if facing < 0.0 {
        return CharAnimationResult::with_color(color.dimmed(BACK_FACE_BRIGHTNESS));
    }
    CharAnimationResult::with_color(color)
}

const EDGE_THRESHOLD: f32 = 0.2;
const BACK_FACE_BRIGHTNESS: f32 = 0.75;
