// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native pointer, keyboard and window events are translated into gallery
//! messages here. The gallery component never sees raw `iced::Event`s.

use super::Message;
use crate::ui::gallery::{self, PointerEvent};
use iced::{event, keyboard, mouse, time, touch, window, Event, Subscription};
use std::time::Duration;

/// Routes window events to the gallery.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(route_event)
}

/// Ticks while notifications are on screen or queued, so they can expire.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Maps one native event to a gallery message.
///
/// Left presses already captured by a widget (the selection checkbox, the
/// delete button, the scrollbar) are dropped so they never arm a drag.
/// Releases always pass: a drag must end even when the button comes up over
/// a widget. Touch presses pass regardless of capture because each tile
/// claims finger presses on its drag handle to keep the scrollable from
/// touch-scrolling; the gallery's own hit test keeps checkbox touches out of
/// the drag handle.
pub(crate) fn route_event(
    event: Event,
    status: event::Status,
    _window: window::Id,
) -> Option<Message> {
    let pointer = match event {
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            PointerEvent::CursorMoved(position)
        }
        Event::Mouse(mouse::Event::CursorLeft) => PointerEvent::CursorLeft,
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => match status {
            event::Status::Ignored => PointerEvent::MousePressed,
            event::Status::Captured => return None,
        },
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            PointerEvent::MouseReleased
        }
        Event::Touch(touch::Event::FingerPressed { id, position }) => {
            PointerEvent::FingerPressed { id: id.0, position }
        }
        Event::Touch(touch::Event::FingerMoved { id, position }) => {
            PointerEvent::FingerMoved { id: id.0, position }
        }
        Event::Touch(touch::Event::FingerLifted { id, position }) => {
            PointerEvent::FingerLifted { id: id.0, position }
        }
        Event::Touch(touch::Event::FingerLost { id, .. }) => PointerEvent::FingerLost(id.0),
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(keyboard::key::Named::Escape),
            ..
        })
        | Event::Window(window::Event::Unfocused) => PointerEvent::Cancel,
        Event::Window(window::Event::Resized(size) | window::Event::Opened { size, .. }) => {
            return Some(Message::Gallery(gallery::Message::WindowResized(size)));
        }
        _ => return None,
    };

    Some(Message::Gallery(gallery::Message::Pointer(pointer)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::{Point, Size};

    fn route(event: Event, status: event::Status) -> Option<PointerEvent> {
        match route_event(event, status, window::Id::unique()) {
            Some(Message::Gallery(gallery::Message::Pointer(pointer))) => Some(pointer),
            _ => None,
        }
    }

    #[test]
    fn captured_left_press_is_not_routed() {
        let press = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));
        assert_eq!(route(press.clone(), event::Status::Ignored), Some(PointerEvent::MousePressed));
        assert_eq!(route(press, event::Status::Captured), None);
    }

    #[test]
    fn release_is_routed_even_when_captured() {
        let release = Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left));
        assert_eq!(
            route(release, event::Status::Captured),
            Some(PointerEvent::MouseReleased)
        );
    }

    #[test]
    fn right_button_is_ignored() {
        let press = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Right));
        assert_eq!(route(press, event::Status::Ignored), None);
    }

    #[test]
    fn touch_press_passes_scrollable_capture() {
        let press = Event::Touch(touch::Event::FingerPressed {
            id: touch::Finger(4),
            position: Point::new(10.0, 20.0),
        });
        assert_eq!(
            route(press, event::Status::Captured),
            Some(PointerEvent::FingerPressed {
                id: 4,
                position: Point::new(10.0, 20.0)
            })
        );
    }

    #[test]
    fn focus_loss_cancels() {
        let unfocused = Event::Window(window::Event::Unfocused);
        assert_eq!(route(unfocused, event::Status::Ignored), Some(PointerEvent::Cancel));
    }

    #[test]
    fn resize_becomes_gallery_message() {
        let resized = Event::Window(window::Event::Resized(Size::new(900.0, 700.0)));
        let message = route_event(resized, event::Status::Ignored, window::Id::unique());
        assert!(matches!(
            message,
            Some(Message::Gallery(gallery::Message::WindowResized(size))) if size.width == 900.0
        ));
    }
}
