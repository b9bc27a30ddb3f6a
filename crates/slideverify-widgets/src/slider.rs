//! The slide-to-verify egui widget.

use std::time::Duration;

use egui::{vec2, CursorIcon, Event, FontFamily, PointerButton, Response, Sense, Ui};
use slideverify_core::{MouseButton, PointerEvent, VerificationSlider};

use crate::convert::to_local_point;
use crate::surface::EguiSurface;

/// Translate one egui input event into a widget-local pointer event.
///
/// Presses only count inside `rect`; releases and moves are forwarded from
/// anywhere so a drag can finish outside the widget.
pub fn translate_event(event: &Event, rect: egui::Rect) -> Option<PointerEvent> {
    match event {
        Event::PointerMoved(pos) => Some(PointerEvent::Move {
            position: to_local_point(*pos, rect.min),
        }),
        Event::PointerButton {
            pos,
            button,
            pressed,
            ..
        } => {
            let button = match button {
                PointerButton::Primary => MouseButton::Left,
                PointerButton::Secondary => MouseButton::Right,
                PointerButton::Middle => MouseButton::Middle,
                _ => return None,
            };
            let position = to_local_point(*pos, rect.min);
            if *pressed {
                rect.contains(*pos)
                    .then_some(PointerEvent::Down { position, button })
            } else {
                Some(PointerEvent::Up { position, button })
            }
        }
        Event::PointerGone => Some(PointerEvent::Leave),
        _ => None,
    }
}

/// Shows a [`VerificationSlider`] inside an egui layout.
///
/// Each frame the widget advances running animations by the frame time,
/// feeds this frame's pointer events to the slider, then paints it. It keeps
/// requesting repaints while an animation runs.
pub struct SlideVerify<'a> {
    slider: &'a mut VerificationSlider,
    font_family: FontFamily,
}

impl<'a> SlideVerify<'a> {
    pub fn new(slider: &'a mut VerificationSlider) -> Self {
        Self {
            slider,
            font_family: FontFamily::Proportional,
        }
    }

    /// Set the egui font family used for the label.
    pub fn font_family(mut self, family: FontFamily) -> Self {
        self.font_family = family;
        self
    }

    /// Show the slider and return its response.
    pub fn show(self, ui: &mut Ui) -> Response {
        let size = self.slider.size();
        let (rect, response) =
            ui.allocate_exact_size(vec2(size.width as f32, size.height as f32), Sense::click_and_drag());

        let (dt, events) = ui.input(|i| (i.stable_dt, i.events.clone()));
        self.slider.advance(Duration::from_secs_f32(dt.max(0.0)));

        for event in &events {
            if let Some(event) = translate_event(event, rect) {
                self.slider.handle_pointer_event(event);
            }
        }

        if ui.is_rect_visible(rect) {
            let painter = ui.painter_at(rect.expand(1.0));
            let mut surface = EguiSurface::new(&painter, rect.min).with_font_family(self.font_family);
            self.slider.render(&mut surface);
        }

        if self.slider.is_animating() {
            ui.ctx().request_repaint();
        }

        if self.slider.is_pressed() {
            response.on_hover_cursor(CursorIcon::Grabbing)
        } else if self.slider.is_hovering() {
            response.on_hover_cursor(CursorIcon::Grab)
        } else {
            response
        }
    }
}

impl egui::Widget for SlideVerify<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        self.show(ui)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use egui::{pos2, Modifiers, RawInput};

    use super::*;

    fn widget_rect() -> egui::Rect {
        egui::Rect::from_min_size(pos2(100.0, 50.0), vec2(300.0, 40.0))
    }

    fn button(pos: egui::Pos2, pressed: bool) -> Event {
        Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::default(),
        }
    }

    #[test]
    fn test_press_outside_is_dropped() {
        assert_eq!(translate_event(&button(pos2(10.0, 10.0), true), widget_rect()), None);
    }

    #[test]
    fn test_press_inside_is_local() {
        let event = translate_event(&button(pos2(122.5, 70.0), true), widget_rect());
        assert_eq!(
            event,
            Some(PointerEvent::Down {
                position: kurbo::Point::new(22.5, 20.0),
                button: MouseButton::Left,
            })
        );
    }

    #[test]
    fn test_release_anywhere_is_forwarded() {
        let event = translate_event(&button(pos2(900.0, 10.0), false), widget_rect());
        assert!(matches!(event, Some(PointerEvent::Up { .. })));
    }

    #[test]
    fn test_pointer_gone_is_leave() {
        assert_eq!(
            translate_event(&Event::PointerGone, widget_rect()),
            Some(PointerEvent::Leave)
        );
        assert_eq!(translate_event(&Event::Copy, widget_rect()), None);
    }

    #[test]
    fn test_drag_through_egui_frames() {
        let ctx = egui::Context::default();
        let verified = Rc::new(RefCell::new(Vec::new()));
        let sink = verified.clone();
        let mut slider =
            VerificationSlider::new().with_on_verified(move |value| sink.borrow_mut().push(value));
        let mut rect = egui::Rect::NOTHING;

        let frame = |events: Vec<Event>, slider: &mut VerificationSlider, rect: &mut egui::Rect| {
            let input = RawInput {
                events,
                ..Default::default()
            };
            let _ = ctx.run(input, |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    *rect = SlideVerify::new(&mut *slider).show(ui).rect;
                });
            });
        };

        frame(Vec::new(), &mut slider, &mut rect);
        let grab = rect.min + vec2(22.5, 20.0);
        let end = rect.min + vec2(277.5, 20.0);

        frame(
            vec![Event::PointerMoved(grab), button(grab, true)],
            &mut slider,
            &mut rect,
        );
        assert!(slider.is_pressed());

        frame(
            vec![Event::PointerMoved(end), button(end, false)],
            &mut slider,
            &mut rect,
        );
        assert_eq!(*verified.borrow(), vec![100]);
        assert!(!slider.is_pressed());
        assert!(slider.is_animating());
    }
}
