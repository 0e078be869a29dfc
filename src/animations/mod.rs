mod clock;
mod common;

// Individual animation modules
mod flip;
mod pulse;
mod spin;

pub(crate) use clock::AnimationClock;
pub(crate) use common::{Animation, AnimationContext};

use serde::Deserialize;
use std::time::Duration;
use strum::{Display, EnumIter, EnumString};

/// The looping animations a style class can be bound to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Display, EnumIter, EnumString, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub(crate) enum AnimationStyle {
    #[default]
    Spin,
    Flip,
    Pulse,
}

/// Get the animation implementation for a given style
pub(crate) fn get_animation(style: AnimationStyle) -> Box<dyn Animation> {
    match style {
        AnimationStyle::Spin => Box::new(spin::Spin),
        AnimationStyle::Flip => Box::new(flip::Flip),
        AnimationStyle::Pulse => Box::new(pulse::Pulse),
    }
}

/// Binds a style class to a looping animation.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct AnimationRule {
    pub(crate) class: String,
    pub(crate) style: AnimationStyle,
    pub(crate) duration: Duration,
}

/// The set of class to animation bindings known to the stage.
#[derive(Clone, Debug, Default)]
pub(crate) struct StyleSheet {
    rules: Vec<AnimationRule>,
}

impl StyleSheet {
    pub(crate) fn add_rule(&mut self, rule: AnimationRule) {
        self.rules.retain(|r| r.class != rule.class);
        self.rules.push(rule);
    }

    /// Find the animation for an element with the given classes.
    ///
    /// When several classes match, the rule for the last one wins.
    pub(crate) fn animation_for<'a, I>(&self, classes: I) -> Option<&AnimationRule>
    where
        I: IntoIterator<Item = &'a str>,
    {
        classes.into_iter().filter_map(|class| self.rules.iter().find(|r| r.class == class)).last()
    }
}

#[cfg(test)]
mod tests {
    use super::common::CharAnimationResult;
    use super::*;
    use crate::style::Color;
    use rstest::rstest;
    use strum::IntoEnumIterator;

    fn context(progress: f32) -> AnimationContext {
        AnimationContext { progress, char_index: 0, total_chars: 1, ch: 'M', color: Color::new(200, 200, 200) }
    }

    fn rule(class: &str, style: AnimationStyle) -> AnimationRule {
        AnimationRule { class: class.to_string(), style, duration: Duration::from_secs(1) }
    }

    #[test]
    fn every_style_is_full_brightness_at_loop_boundary() {
        for style in AnimationStyle::iter() {
            let result = get_animation(style).render_char(&context(0.0));
            assert_eq!(result, CharAnimationResult::with_color(Color::new(200, 200, 200)), "style {style}");
        }
    }

    #[rstest]
    #[case::spin(AnimationStyle::Spin, '│')]
    #[case::flip(AnimationStyle::Flip, '─')]
    fn turning_styles_show_edge(#[case] style: AnimationStyle, #[case] edge: char) {
        let result = get_animation(style).render_char(&context(0.25));
        assert_eq!(result.replacement_char, Some(edge));
    }

    #[test]
    fn spin_back_face_is_dimmer() {
        let spin = get_animation(AnimationStyle::Spin);
        let front = spin.render_char(&context(0.0)).color;
        let back = spin.render_char(&context(0.5)).color;
        assert!(back.r < front.r);
        assert_eq!(spin.render_char(&context(0.5)).replacement_char, None);
    }

    #[test]
    fn whitespace_is_never_replaced() {
        let ctx = AnimationContext { ch: ' ', ..context(0.25) };
        assert_eq!(get_animation(AnimationStyle::Spin).render_char(&ctx).replacement_char, None);
    }

    #[test]
    fn pulse_never_replaces() {
        let pulse = get_animation(AnimationStyle::Pulse);
        for step in 0..10 {
            assert_eq!(pulse.render_char(&context(step as f32 / 10.0)).replacement_char, None);
        }
    }

    #[rstest]
    #[case::spin("spin", AnimationStyle::Spin)]
    #[case::flip("flip", AnimationStyle::Flip)]
    #[case::pulse("pulse", AnimationStyle::Pulse)]
    fn parse_style(#[case] input: &str, #[case] expected: AnimationStyle) {
        assert_eq!(input.parse::<AnimationStyle>().expect("parse failed"), expected);
        assert_eq!(expected.to_string(), input);
    }

    #[test]
    fn stylesheet_lookup() {
        let mut sheet = StyleSheet::default();
        sheet.add_rule(rule("spin", AnimationStyle::Spin));
        sheet.add_rule(rule("pulse", AnimationStyle::Pulse));

        assert_eq!(sheet.animation_for(["title"]), None);
        assert_eq!(sheet.animation_for(["title", "spin"]).map(|r| r.style), Some(AnimationStyle::Spin));
        assert_eq!(sheet.animation_for(["spin", "pulse"]).map(|r| r.style), Some(AnimationStyle::Pulse));
    }

    #[test]
    fn stylesheet_replaces_rule_for_same_class() {
        let mut sheet = StyleSheet::default();
        sheet.add_rule(rule("spin", AnimationStyle::Spin));
        sheet.add_rule(rule("spin", AnimationStyle::Flip));
        assert_eq!(sheet.animation_for(["spin"]).map(|r| r.style), Some(AnimationStyle::Flip));
    }
}
