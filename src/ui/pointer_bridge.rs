//! Forwards egui pointer input into the resize core's pointer hub.
//!
//! egui delivers input once per frame. At the start of each frame every
//! primary-button and move event is replayed, in order, into
//! [`PointerEvents`], which is what lets a gesture follow the pointer
//! anywhere in the window.

use colresize::{PointerEvent, PointerEvents};
use eframe::egui;

/// Converts one egui input event into a pointer notification.
pub fn translate_event(event: &egui::Event) -> Option<PointerEvent> {
    match event {
        egui::Event::PointerMoved(pos) => Some(PointerEvent::Move { x: pos.x }),
        egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            ..
        } => Some(if *pressed {
            PointerEvent::Down { x: pos.x }
        } else {
            PointerEvent::Up { x: pos.x }
        }),
        _ => None,
    }
}

/// Dispatches this frame's pointer input. Call before any table rendering.
pub fn dispatch_frame_events(ctx: &egui::Context, pointer: &PointerEvents) {
    let events: Vec<PointerEvent> = ctx.input(|i| i.events.iter().filter_map(translate_event).collect());
    for event in events {
        pointer.dispatch(event);
    }
}

/// Ends a gesture whose button release arrived before it started listening.
///
/// egui reports a drag start during rendering, after this frame's events
/// were already dispatched, so a quick click on a handle can release the
/// button before the gesture subscribes.
pub fn release_stale_gesture(ctx: &egui::Context, pointer: &PointerEvents, resizing: bool) {
    if !resizing {
        return;
    }

    let (button_down, latest_pos) = ctx.input(|i| (i.pointer.primary_down(), i.pointer.latest_pos()));
    if !button_down {
        let x = latest_pos.map_or(0.0, |pos| pos.x);
        pointer.dispatch(PointerEvent::Up { x });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button(button: egui::PointerButton, pressed: bool) -> egui::Event {
        egui::Event::PointerButton {
            pos: egui::pos2(12.0, 3.0),
            button,
            pressed,
            modifiers: egui::Modifiers::default(),
        }
    }

    #[test]
    fn test_translate_move() {
        let event = egui::Event::PointerMoved(egui::pos2(42.0, 7.0));
        assert_eq!(translate_event(&event), Some(PointerEvent::Move { x: 42.0 }));
    }

    #[test]
    fn test_translate_primary_button() {
        assert_eq!(
            translate_event(&button(egui::PointerButton::Primary, true)),
            Some(PointerEvent::Down { x: 12.0 })
        );
        assert_eq!(
            translate_event(&button(egui::PointerButton::Primary, false)),
            Some(PointerEvent::Up { x: 12.0 })
        );
    }

    #[test]
    fn test_other_events_ignored() {
        assert_eq!(translate_event(&button(egui::PointerButton::Secondary, false)), None);
        assert_eq!(translate_event(&egui::Event::PointerGone), None);
    }
}
