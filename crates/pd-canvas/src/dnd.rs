//! Palette drag/drop bridge.
//!
//! The palette and the canvas may live in different execution contexts
//! in some host runtimes, so the drag payload crosses the boundary as an
//! opaque string: serialized at drag start, validated and decoded at the
//! drop. The format is a same-session contract — it is not required to
//! be stable across versions or processes.

use pd_core::catalog::PaletteItem;
use pd_core::device::DeviceClass;
use pd_core::model::{ComponentKind, Placement, Point};

/// Encode a palette item for a drag-start event.
pub fn serialize_item(item: &PaletteItem) -> String {
    // PaletteItem is plain string fields; serialization cannot fail.
    serde_json::to_string(item).unwrap_or_default()
}

/// Decode a drop payload into a new placement.
///
/// `drop_point` is in viewport coordinates, `origin` is the canvas's
/// top-left in the same space; the placement's position is the
/// difference, i.e. canvas-local. Size comes from the device profile's
/// default; the style bag starts empty.
///
/// A malformed or empty payload returns `None` — drops from outside the
/// palette are legitimate and must degrade silently, never error.
pub fn deserialize_drop(
    payload: &str,
    drop_point: Point,
    origin: Point,
    device: DeviceClass,
) -> Option<Placement> {
    let item: PaletteItem = match serde_json::from_str(payload) {
        Ok(item) => item,
        Err(err) => {
            log::debug!("ignoring drop with malformed payload: {err}");
            return None;
        }
    };

    let position = Point::new(drop_point.x - origin.x, drop_point.y - origin.y);
    let size = device.profile().default_component;

    Some(Placement::new(
        ComponentKind::from_label(&item.kind),
        position,
        size,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pd_core::model::Size;

    fn button_item() -> PaletteItem {
        PaletteItem {
            id: "button".into(),
            kind: "BUTTON".into(),
            label: "Button".into(),
        }
    }

    #[test]
    fn payload_roundtrip_produces_a_placement() {
        let payload = serialize_item(&button_item());
        let placement = deserialize_drop(
            &payload,
            Point::new(150.0, 120.0),
            Point::new(100.0, 70.0),
            DeviceClass::Web,
        )
        .unwrap();

        assert_eq!(placement.kind, ComponentKind::Button);
        assert_eq!(placement.position, Point::new(50.0, 50.0));
        assert_eq!(placement.size, Size::new(150.0, 75.0));
        assert!(placement.style.is_empty());
    }

    #[test]
    fn drop_size_follows_the_device_profile() {
        let payload = serialize_item(&button_item());
        let placement = deserialize_drop(
            &payload,
            Point::new(50.0, 50.0),
            Point::new(0.0, 0.0),
            DeviceClass::Mobile,
        )
        .unwrap();
        assert_eq!(placement.size, Size::new(100.0, 50.0));
    }

    #[test]
    fn malformed_payload_is_a_silent_none() {
        for payload in ["", "not json", r#"{"id": "x"}"#] {
            assert!(
                deserialize_drop(
                    payload,
                    Point::new(0.0, 0.0),
                    Point::new(0.0, 0.0),
                    DeviceClass::Web,
                )
                .is_none(),
                "payload {payload:?} should be rejected"
            );
        }
    }

    #[test]
    fn unknown_palette_kind_still_drops_as_custom() {
        let payload = serialize_item(&PaletteItem {
            id: "widget".into(),
            kind: "WIDGET".into(),
            label: "Widget".into(),
        });
        let placement = deserialize_drop(
            &payload,
            Point::new(10.0, 10.0),
            Point::new(0.0, 0.0),
            DeviceClass::Web,
        )
        .unwrap();
        assert_eq!(placement.kind, ComponentKind::Custom("WIDGET".into()));
    }
}
