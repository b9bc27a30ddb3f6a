//! The verification slider state machine.

use std::fmt;
use std::time::Duration;

use kurbo::{Point, Size};
use peniko::Color;

use super::geometry::SliderGeometry;
use super::range::RangeControl;
use super::state::{HoverPhase, InteractionState, SliderPhase};
use crate::animation::{
    AnimationChannel, AnimationKind, AnimationOutput, AnimationScheduler, AnimationTask, lerp_value,
};
use crate::appearance::AppearanceSpec;
use crate::color::lerp_color;
use crate::config::{ConfigResult, SliderConfig};
use crate::input::{MouseButton, PointerEvent};
use crate::surface::{Border, LabelFont, SliderSurface};

type VerifiedCallback = Box<dyn FnMut(i32)>;

/// A "slide to verify" control.
///
/// The host forwards pointer events, advances time once per frame and asks
/// the slider to render itself. Every primary press/release cycle reports the
/// released value once through the [`on_verified`](Self::on_verified)
/// callback, after which the handle eases back to the start of the track.
pub struct VerificationSlider {
    config: SliderConfig,
    range: RangeControl,
    geometry: SliderGeometry,
    interaction: InteractionState,
    /// Idle appearance built from the config
    base_appearance: AppearanceSpec,
    /// Appearance for the next render (handle fill animated)
    appearance: AppearanceSpec,
    scheduler: AnimationScheduler,
    label_font: LabelFont,
    on_verified: Option<VerifiedCallback>,
}

impl VerificationSlider {
    /// Create a slider with the stock configuration.
    pub fn new() -> Self {
        Self::build(SliderConfig::default())
    }

    /// Create a slider from a validated configuration.
    pub fn from_config(config: SliderConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: SliderConfig) -> Self {
        let appearance = config.appearance();
        let geometry = SliderGeometry::new(Size::new(config.width, config.height), appearance.metrics);
        let range = RangeControl::new(config.minimum, config.maximum).with_page_step(config.page_step);
        Self {
            label_font: config.label_font(),
            range,
            geometry,
            interaction: InteractionState::default(),
            base_appearance: appearance,
            appearance,
            scheduler: AnimationScheduler::new(),
            on_verified: None,
            config,
        }
    }

    /// Register the single consumer of verified values, replacing any
    /// previous one.
    pub fn on_verified(&mut self, callback: impl FnMut(i32) + 'static) {
        self.on_verified = Some(Box::new(callback));
    }

    /// Builder form of [`on_verified`](Self::on_verified).
    pub fn with_on_verified(mut self, callback: impl FnMut(i32) + 'static) -> Self {
        self.on_verified(callback);
        self
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    pub fn value(&self) -> i32 {
        self.range.value()
    }

    pub fn minimum(&self) -> i32 {
        self.range.minimum()
    }

    pub fn maximum(&self) -> i32 {
        self.range.maximum()
    }

    /// Set the value directly (clamped).
    pub fn set_value(&mut self, value: i32) {
        self.range.set_value(value);
    }

    /// Position as a fraction of the maximum.
    pub fn position_fraction(&self) -> f64 {
        if self.maximum() == 0 {
            return 0.0;
        }
        f64::from(self.value()) / f64::from(self.maximum())
    }

    /// Move to `fraction` of the maximum (clamped to the range).
    pub fn set_position_fraction(&mut self, fraction: f64) {
        let target = (f64::from(self.maximum()) * fraction).round() as i32;
        self.range.set_value(target);
    }

    pub fn interaction(&self) -> InteractionState {
        self.interaction
    }

    pub fn is_pressed(&self) -> bool {
        self.interaction.pressed
    }

    pub fn is_hovering(&self) -> bool {
        self.interaction.hovering
    }

    pub fn hover_streak(&self) -> u32 {
        self.interaction.hover_streak
    }

    /// Appearance used by the next render.
    pub fn appearance(&self) -> &AppearanceSpec {
        &self.appearance
    }

    pub fn geometry(&self) -> &SliderGeometry {
        &self.geometry
    }

    pub fn scheduler(&self) -> &AnimationScheduler {
        &self.scheduler
    }

    /// Preferred widget size.
    pub fn size(&self) -> Size {
        self.geometry.size()
    }

    /// Resize the widget (e.g. after host layout).
    pub fn set_size(&mut self, size: Size) {
        self.geometry.set_size(size);
    }

    /// Whether any animation is in flight; hosts keep repainting while true.
    pub fn is_animating(&self) -> bool {
        self.scheduler.is_animating()
    }

    pub fn phase(&self) -> SliderPhase {
        if self.interaction.pressed {
            SliderPhase::Pressed
        } else if self.scheduler.is_running(AnimationChannel::Reset) {
            SliderPhase::Released
        } else {
            SliderPhase::Idle
        }
    }

    pub fn hover_phase(&self) -> HoverPhase {
        let color_kind = self.scheduler.get(AnimationChannel::Color).map(|task| task.kind());
        match (self.interaction.hovering, color_kind) {
            (true, Some(AnimationKind::HoverEnter)) => HoverPhase::HoveringEntering,
            (true, _) => HoverPhase::Hovering,
            (false, Some(AnimationKind::HoverExit)) => HoverPhase::HoveringExiting,
            (false, _) => HoverPhase::NotHovering,
        }
    }

    /// Dispatch a pointer event to the matching handler.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { position, button } => self.on_pointer_down(position, button),
            PointerEvent::Up { position, button } => self.on_pointer_up(position, button),
            PointerEvent::Move { position } => self.on_pointer_move(position),
            PointerEvent::Leave => self.on_pointer_leave(),
        }
    }

    /// Primary press: enter the pressed state and hand the press to the
    /// range control.
    pub fn on_pointer_down(&mut self, position: Point, button: MouseButton) {
        if !button.is_primary() {
            return;
        }
        self.interaction.pressed = true;
        // The user takes the value back from a running reset
        self.scheduler.stop(AnimationChannel::Reset);
        self.range.press(position, &self.geometry);
        log::debug!("Slider pressed at value {}", self.range.value());
    }

    /// Primary release: report the value, then ease back to the start.
    pub fn on_pointer_up(&mut self, _position: Point, button: MouseButton) {
        if !button.is_primary() || !self.interaction.pressed {
            return;
        }

        let value = self.range.value();
        log::debug!("Slider released at value {}", value);
        if let Some(callback) = self.on_verified.as_mut() {
            callback(value);
        }

        self.interaction.pressed = false;
        self.range.release();
        self.scheduler.start(AnimationTask::reset(
            value,
            self.reset_target(),
            self.config.reset_duration(),
            self.config.reset_easing,
        ));

        if self.interaction.hovering {
            self.start_hover_exit();
            self.interaction.clear_hover();
        }
    }

    /// Value the reset animation returns to: 0, or the nearest bound when 0
    /// lies outside the range.
    pub fn reset_target(&self) -> i32 {
        0.clamp(self.range.minimum(), self.range.maximum())
    }

    /// Pointer motion: drags while pressed, otherwise tracks hover over the
    /// handle.
    pub fn on_pointer_move(&mut self, position: Point) {
        if self.interaction.pressed {
            if self.range.drag(position, &self.geometry) {
                log::trace!("Slider dragged to {}", self.range.value());
            }
            return;
        }

        if self.geometry.hit_handle(position, self.range.fraction()) {
            self.interaction.hovering = true;
            self.interaction.hover_streak = self.interaction.hover_streak.saturating_add(1);
            if self.interaction.hover_streak == 1 {
                self.start_hover_enter();
            }
        } else {
            self.leave_handle();
        }
    }

    /// The pointer left the widget entirely.
    pub fn on_pointer_leave(&mut self) {
        if !self.interaction.pressed {
            self.leave_handle();
        }
    }

    fn leave_handle(&mut self) {
        self.interaction.hover_streak = 0;
        if self.interaction.hovering {
            self.start_hover_exit();
            self.interaction.hovering = false;
        }
    }

    fn start_hover_enter(&mut self) {
        self.scheduler.start(AnimationTask::color(
            AnimationKind::HoverEnter,
            self.config.neutral_color(),
            self.config.accent_color(),
            self.config.hover_duration(),
        ));
    }

    fn start_hover_exit(&mut self) {
        self.scheduler.start(AnimationTask::color(
            AnimationKind::HoverExit,
            self.config.accent_color(),
            self.config.neutral_color(),
            self.config.hover_duration(),
        ));
    }

    /// Advance running animations by `dt` and apply their frames.
    ///
    /// Returns true if anything was animating, i.e. the host should repaint.
    pub fn advance(&mut self, dt: Duration) -> bool {
        let frames = self.scheduler.advance(dt);
        for frame in &frames {
            match frame.output {
                AnimationOutput::Color(fill) => self.apply_handle_fill(fill),
                AnimationOutput::Value(value) => {
                    self.range.set_value(value);
                }
            }
        }
        !frames.is_empty()
    }

    /// Apply a color transition step: rebuild the appearance with the
    /// interpolated handle fill.
    pub fn on_color_transition_tick(&mut self, start: Color, end: Color, progress: f32) {
        self.apply_handle_fill(lerp_color(start, end, progress));
    }

    /// Apply a reset animation step at eased progress `eased`.
    pub fn on_reset_animation_tick(&mut self, start: i32, end: i32, eased: f32) {
        self.range.set_value(lerp_value(start, end, eased));
    }

    fn apply_handle_fill(&mut self, fill: Color) {
        self.appearance = self.base_appearance.with_handle_fill(fill);
    }

    /// Draw groove, fill region, handle and (unless pressed) the label.
    pub fn render(&self, surface: &mut impl SliderSurface) {
        let Some(groove) = self.geometry.groove_rect() else {
            return;
        };
        let metrics = self.appearance.metrics;
        let radius = metrics.corner_radius;
        let fraction = self.range.fraction();

        surface.fill_rect(
            groove,
            radius,
            self.appearance.track_fill,
            Some(Border::new(metrics.border_width, self.appearance.track_border)),
        );

        if let Some(fill) = self.geometry.fill_rect(fraction) {
            if fill.width() > 0.0 {
                surface.fill_rect(
                    fill,
                    radius,
                    self.appearance.fill_region,
                    Some(Border::new(metrics.border_width, self.appearance.fill_border)),
                );
            }
        }

        if let Some(handle) = self.geometry.handle_rect(fraction) {
            let (fill, border) = self.appearance.handle_colors(self.interaction.pressed);
            surface.fill_rect(
                handle,
                radius,
                fill,
                Some(Border::new(metrics.border_width, border)),
            );
        }

        if !self.interaction.pressed {
            surface.draw_text(
                groove,
                &self.config.label,
                &self.label_font,
                self.appearance.label_color,
            );
        }
    }
}

impl Default for VerificationSlider {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for VerificationSlider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VerificationSlider")
            .field("value", &self.range.value())
            .field("interaction", &self.interaction)
            .field("phase", &self.phase())
            .field("scheduler", &self.scheduler)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use kurbo::Rect;

    use super::*;
    use crate::color::{ACCENT, NEUTRAL_WHITE};

    #[derive(Debug, Clone, PartialEq)]
    enum DrawCall {
        Rect { rect: Rect, fill: Color },
        Text { text: String },
    }

    #[derive(Default)]
    struct RecordingSurface {
        calls: Vec<DrawCall>,
    }

    impl RecordingSurface {
        fn has_label(&self) -> bool {
            self.calls.iter().any(|c| matches!(c, DrawCall::Text { .. }))
        }
    }

    impl SliderSurface for RecordingSurface {
        fn fill_rect(&mut self, rect: Rect, _radius: f64, fill: Color, _border: Option<Border>) {
            self.calls.push(DrawCall::Rect { rect, fill });
        }

        fn draw_text(&mut self, _rect: Rect, text: &str, _font: &LabelFont, _color: Color) {
            self.calls.push(DrawCall::Text {
                text: text.to_string(),
            });
        }
    }

    fn recorded_slider() -> (VerificationSlider, Rc<RefCell<Vec<i32>>>) {
        let verified = Rc::new(RefCell::new(Vec::new()));
        let sink = verified.clone();
        let slider = VerificationSlider::new().with_on_verified(move |value| sink.borrow_mut().push(value));
        (slider, verified)
    }

    fn handle_center(slider: &VerificationSlider) -> Point {
        slider
            .geometry()
            .handle_rect(slider.range.fraction())
            .unwrap()
            .center()
    }

    fn outside() -> Point {
        Point::new(200.0, -30.0)
    }

    fn is_running_kind(slider: &VerificationSlider, kind: AnimationKind) -> bool {
        slider
            .scheduler()
            .get(kind.channel())
            .is_some_and(|task| task.kind() == kind)
    }

    fn rgb(color: Color) -> (u8, u8, u8) {
        let rgba = color.to_rgba8();
        (rgba.r, rgba.g, rgba.b)
    }

    #[test]
    fn test_press_drag_release_reports_value() {
        let (mut slider, verified) = recorded_slider();
        let start = handle_center(&slider);
        slider.on_pointer_down(start, MouseButton::Left);
        assert_eq!(slider.phase(), SliderPhase::Pressed);

        let end = slider.geometry().handle_center_x(1.0).unwrap();
        slider.on_pointer_move(Point::new(end, start.y));
        assert_eq!(slider.value(), 100);
        slider.on_pointer_up(Point::new(end, start.y), MouseButton::Left);

        assert_eq!(*verified.borrow(), vec![100]);
        assert!(!slider.is_pressed());
        assert_eq!(slider.phase(), SliderPhase::Released);
        // Value only changes once time advances
        assert_eq!(slider.value(), 100);
    }

    #[test]
    fn test_callback_sees_pre_reset_value() {
        let mut slider = VerificationSlider::new();
        slider.set_value(64);
        let seen = Rc::new(RefCell::new(None));
        let sink = seen.clone();
        slider.on_verified(move |value| *sink.borrow_mut() = Some(value));

        slider.on_pointer_down(handle_center(&slider), MouseButton::Left);
        slider.on_pointer_up(handle_center(&slider), MouseButton::Left);
        assert_eq!(*seen.borrow(), Some(64));
    }

    #[test]
    fn test_reset_is_monotonic_and_ends_at_zero() {
        let (mut slider, verified) = recorded_slider();
        slider.set_value(100);
        slider.on_pointer_down(handle_center(&slider), MouseButton::Left);
        slider.on_pointer_up(handle_center(&slider), MouseButton::Left);
        assert_eq!(*verified.borrow(), vec![100]);

        let mut previous = slider.value();
        let mut elapsed = Duration::ZERO;
        while slider.is_animating() {
            slider.advance(Duration::from_millis(16));
            elapsed += Duration::from_millis(16);
            assert!(slider.value() <= previous);
            previous = slider.value();
        }
        assert_eq!(slider.value(), 0);
        assert!(elapsed >= Duration::from_millis(800));
        assert!(elapsed < Duration::from_millis(800 + 16));
        assert_eq!(slider.phase(), SliderPhase::Idle);
    }

    fn settle(slider: &mut VerificationSlider) {
        while slider.is_animating() {
            slider.advance(Duration::from_millis(16));
        }
    }

    #[test]
    fn test_reset_returns_to_zero_inside_signed_range() {
        let config = SliderConfig {
            minimum: -50,
            maximum: 50,
            ..Default::default()
        };
        let mut slider = VerificationSlider::from_config(config).unwrap();
        assert_eq!(slider.reset_target(), 0);
        slider.set_value(50);
        slider.on_pointer_down(handle_center(&slider), MouseButton::Left);
        slider.on_pointer_up(handle_center(&slider), MouseButton::Left);
        settle(&mut slider);
        assert_eq!(slider.value(), 0);
    }

    #[test]
    fn test_reset_target_clamps_to_range() {
        let config = SliderConfig {
            minimum: 20,
            maximum: 80,
            ..Default::default()
        };
        let mut slider = VerificationSlider::from_config(config).unwrap();
        assert_eq!(slider.reset_target(), 20);
        slider.set_value(80);
        slider.on_pointer_down(handle_center(&slider), MouseButton::Left);
        slider.on_pointer_up(handle_center(&slider), MouseButton::Left);
        settle(&mut slider);
        assert_eq!(slider.value(), 20);
    }

    #[test]
    fn test_full_i32_range_is_total() {
        let config = SliderConfig {
            minimum: i32::MIN,
            maximum: i32::MAX,
            ..Default::default()
        };
        let verified = Rc::new(RefCell::new(Vec::new()));
        let sink = verified.clone();
        let mut slider = VerificationSlider::from_config(config)
            .unwrap()
            .with_on_verified(move |value| sink.borrow_mut().push(value));

        slider.on_pointer_move(Point::new(10.0, 20.0));
        slider.render(&mut RecordingSurface::default());

        let start = handle_center(&slider);
        slider.on_pointer_down(start, MouseButton::Left);
        slider.on_pointer_move(Point::new(10_000.0, start.y));
        assert_eq!(slider.value(), i32::MAX);
        slider.render(&mut RecordingSurface::default());
        slider.on_pointer_up(Point::new(10_000.0, start.y), MouseButton::Left);
        assert_eq!(*verified.borrow(), vec![i32::MAX]);

        let mut previous = slider.value();
        while slider.is_animating() {
            slider.advance(Duration::from_millis(16));
            assert!(slider.value() <= previous);
            previous = slider.value();
        }
        assert_eq!(slider.value(), 0);
        assert_eq!(slider.position_fraction(), 0.0);
    }

    #[test]
    fn test_release_without_hover_starts_only_reset() {
        let (mut slider, _) = recorded_slider();
        slider.set_value(100);
        // Press on the groove away from the handle so no hover run exists
        slider.on_pointer_down(Point::new(20.0, 20.0), MouseButton::Left);
        slider.on_pointer_up(Point::new(20.0, 20.0), MouseButton::Left);
        assert!(slider.scheduler().is_running(AnimationChannel::Reset));
        assert!(!slider.scheduler().is_running(AnimationChannel::Color));
    }

    #[test]
    fn test_release_while_hovering_starts_both_animations() {
        let (mut slider, _) = recorded_slider();
        let center = handle_center(&slider);
        slider.on_pointer_move(center);
        assert!(slider.is_hovering());

        slider.on_pointer_down(center, MouseButton::Left);
        slider.on_pointer_up(center, MouseButton::Left);

        assert!(slider.scheduler().is_running(AnimationChannel::Reset));
        assert!(is_running_kind(&slider, AnimationKind::HoverExit));
        assert_eq!(slider.interaction(), InteractionState::default());
        assert_eq!(slider.hover_phase(), HoverPhase::HoveringExiting);
    }

    #[test]
    fn test_hover_enter_fires_once_per_run() {
        let (mut slider, _) = recorded_slider();
        let center = handle_center(&slider);

        slider.on_pointer_move(center);
        assert_eq!(slider.hover_streak(), 1);
        assert!(is_running_kind(&slider, AnimationKind::HoverEnter));
        assert_eq!(slider.hover_phase(), HoverPhase::HoveringEntering);

        // Let the transition run halfway, then keep moving inside
        slider.advance(Duration::from_millis(150));
        let mid = slider.scheduler().get(AnimationChannel::Color).map(|t| t.progress());
        for dx in 1..5 {
            slider.on_pointer_move(Point::new(center.x + dx as f64, center.y));
        }
        assert_eq!(slider.hover_streak(), 5);
        // Still the same task, not restarted
        assert_eq!(
            slider.scheduler().get(AnimationChannel::Color).map(|t| t.progress()),
            mid
        );

        slider.advance(Duration::from_millis(150));
        assert_eq!(slider.hover_phase(), HoverPhase::Hovering);
        assert_eq!(rgb(slider.appearance().handle_fill), rgb(ACCENT));
    }

    #[test]
    fn test_leaving_and_reentering_starts_new_enter() {
        let (mut slider, _) = recorded_slider();
        let center = handle_center(&slider);

        slider.on_pointer_move(center);
        slider.advance(Duration::from_millis(300));
        assert!(!slider.is_animating());

        slider.on_pointer_move(outside());
        assert!(!slider.is_hovering());
        assert_eq!(slider.hover_streak(), 0);
        assert!(is_running_kind(&slider, AnimationKind::HoverExit));

        // Re-entering replaces the exit fade with a fresh enter fade
        slider.on_pointer_move(center);
        assert!(is_running_kind(&slider, AnimationKind::HoverEnter));
        assert_eq!(slider.scheduler().get(AnimationChannel::Color).map(|t| t.progress()), Some(0.0));
    }

    #[test]
    fn test_move_outside_without_hover_does_nothing() {
        let (mut slider, _) = recorded_slider();
        slider.on_pointer_move(outside());
        assert!(!slider.is_animating());
        assert_eq!(slider.hover_phase(), HoverPhase::NotHovering);
    }

    #[test]
    fn test_pointer_leave_exits_hover() {
        let (mut slider, _) = recorded_slider();
        slider.handle_pointer_event(PointerEvent::Move {
            position: handle_center(&slider),
        });
        slider.handle_pointer_event(PointerEvent::Leave);
        assert!(!slider.is_hovering());
        assert!(is_running_kind(&slider, AnimationKind::HoverExit));
    }

    #[test]
    fn test_hover_exit_fades_to_neutral() {
        let (mut slider, _) = recorded_slider();
        slider.on_pointer_move(handle_center(&slider));
        slider.advance(Duration::from_millis(300));
        slider.on_pointer_move(outside());
        slider.advance(Duration::from_millis(150));
        let half = rgb(slider.appearance().handle_fill);
        assert!(half.0 > 0x19 && half.0 < 0xFF);
        slider.advance(Duration::from_millis(150));
        assert_eq!(rgb(slider.appearance().handle_fill), rgb(NEUTRAL_WHITE));
    }

    #[test]
    fn test_moves_while_pressed_do_not_hover() {
        let (mut slider, _) = recorded_slider();
        let center = handle_center(&slider);
        slider.on_pointer_down(center, MouseButton::Left);
        slider.on_pointer_move(Point::new(center.x + 1.0, center.y));
        assert!(!slider.is_hovering());
        assert_eq!(slider.hover_streak(), 0);
        assert!(!slider.scheduler().is_running(AnimationChannel::Color));
    }

    #[test]
    fn test_non_primary_buttons_ignored() {
        let (mut slider, verified) = recorded_slider();
        let center = handle_center(&slider);
        slider.on_pointer_down(center, MouseButton::Right);
        assert!(!slider.is_pressed());
        slider.on_pointer_down(center, MouseButton::Left);
        slider.on_pointer_up(center, MouseButton::Middle);
        assert!(slider.is_pressed());
        assert!(verified.borrow().is_empty());
    }

    #[test]
    fn test_release_without_press_is_ignored() {
        let (mut slider, verified) = recorded_slider();
        slider.on_pointer_up(handle_center(&slider), MouseButton::Left);
        assert!(verified.borrow().is_empty());
        assert!(!slider.is_animating());
    }

    #[test]
    fn test_one_report_per_cycle() {
        let (mut slider, verified) = recorded_slider();
        for target in [0.25, 0.75] {
            let center = handle_center(&slider);
            slider.on_pointer_down(center, MouseButton::Left);
            let x = slider.geometry().handle_center_x(target).unwrap();
            slider.on_pointer_move(Point::new(x, center.y));
            slider.on_pointer_up(Point::new(x, center.y), MouseButton::Left);
            slider.on_pointer_up(Point::new(x, center.y), MouseButton::Left);
            while slider.is_animating() {
                slider.advance(Duration::from_millis(100));
            }
        }
        assert_eq!(*verified.borrow(), vec![25, 75]);
    }

    #[test]
    fn test_press_stops_reset() {
        let (mut slider, _) = recorded_slider();
        slider.set_value(100);
        slider.on_pointer_down(Point::new(20.0, 20.0), MouseButton::Left);
        slider.on_pointer_up(Point::new(20.0, 20.0), MouseButton::Left);
        slider.advance(Duration::from_millis(50));
        let mid = slider.value();
        assert!(mid > 0);

        slider.on_pointer_down(handle_center(&slider), MouseButton::Left);
        assert!(!slider.scheduler().is_running(AnimationChannel::Reset));
        slider.advance(Duration::from_millis(500));
        assert_eq!(slider.value(), mid);
    }

    #[test]
    fn test_label_only_when_not_pressed() {
        let (mut slider, _) = recorded_slider();
        let mut surface = RecordingSurface::default();
        slider.render(&mut surface);
        assert!(surface.has_label());
        assert!(surface.calls.contains(&DrawCall::Text {
            text: "drag slider to fill puzzle".to_string()
        }));

        slider.on_pointer_down(handle_center(&slider), MouseButton::Left);
        let mut surface = RecordingSurface::default();
        slider.render(&mut surface);
        assert!(!surface.has_label());

        slider.on_pointer_up(handle_center(&slider), MouseButton::Left);
        let mut surface = RecordingSurface::default();
        slider.render(&mut surface);
        assert!(surface.has_label());
    }

    #[test]
    fn test_pressed_handle_uses_accent() {
        let (mut slider, _) = recorded_slider();
        slider.on_pointer_down(handle_center(&slider), MouseButton::Left);
        let mut surface = RecordingSurface::default();
        slider.render(&mut surface);
        let handle = slider.geometry().handle_rect(0.0).unwrap();
        let fill = surface.calls.iter().find_map(|call| match call {
            DrawCall::Rect { rect, fill } if *rect == handle => Some(*fill),
            _ => None,
        });
        assert_eq!(fill.map(rgb), Some(rgb(ACCENT)));
    }

    #[test]
    fn test_zero_size_renders_nothing_and_never_hovers() {
        let (mut slider, _) = recorded_slider();
        slider.set_size(Size::ZERO);
        slider.on_pointer_move(Point::ZERO);
        assert!(!slider.is_hovering());
        let mut surface = RecordingSurface::default();
        slider.render(&mut surface);
        assert!(surface.calls.is_empty());
    }

    #[test]
    fn test_position_fraction() {
        let mut slider = VerificationSlider::new();
        slider.set_position_fraction(0.42);
        assert_eq!(slider.value(), 42);
        assert!((slider.position_fraction() - 0.42).abs() < 1e-9);
        slider.set_position_fraction(3.0);
        assert_eq!(slider.value(), 100);
    }

    #[test]
    fn test_color_tick_interpolates_handle_only() {
        let mut slider = VerificationSlider::new();
        let before = *slider.appearance();
        slider.on_color_transition_tick(NEUTRAL_WHITE, ACCENT, 0.0);
        assert_eq!(rgb(slider.appearance().handle_fill), (255, 255, 255));
        slider.on_color_transition_tick(NEUTRAL_WHITE, ACCENT, 1.0);
        assert_eq!(rgb(slider.appearance().handle_fill), rgb(ACCENT));
        assert_eq!(slider.appearance().track_fill, before.track_fill);
        assert_eq!(slider.appearance().pressed_fill, before.pressed_fill);
    }

    #[test]
    fn test_from_config_validates() {
        let config = SliderConfig {
            minimum: 10,
            maximum: 5,
            ..Default::default()
        };
        assert!(VerificationSlider::from_config(config).is_err());

        let config = SliderConfig {
            maximum: 200,
            ..Default::default()
        };
        let slider = VerificationSlider::from_config(config).unwrap();
        assert_eq!(slider.maximum(), 200);
    }
}
