// Converts DOM touch/mouse events into board samples.
use web_sys::{Element, MouseEvent, TouchEvent};

use crate::model::{PointerId, TouchSample};

/// Every touch that changed in this event.
pub fn changed_samples(e: &TouchEvent) -> Vec<TouchSample> {
    let list = e.changed_touches();
    (0..list.length())
        .filter_map(|i| list.item(i))
        .map(|t| TouchSample {
            id: PointerId(t.identifier()),
            client_x: t.client_x() as f64,
            client_y: t.client_y() as f64,
        })
        .collect()
}

pub fn mouse_sample(e: &MouseEvent) -> TouchSample {
    TouchSample {
        id: PointerId::MOUSE,
        client_x: e.client_x() as f64,
        client_y: e.client_y() as f64,
    }
}

/// Top-left corner of the surface in client coordinates.
pub fn surface_origin(el: &Element) -> (f64, f64) {
    let rect = el.get_bounding_client_rect();
    (rect.left(), rect.top())
}
