//! Integration tests: template selection, device switching, and palette
//! drops against the live canvas.

use pd_canvas::canvas::Canvas;
use pd_canvas::dnd::serialize_item;
use pd_canvas::input::PointerEvent;
use pd_core::catalog::{business_templates, palette_items};
use pd_core::device::DeviceClass;
use pd_core::hydrate::scale_factor;
use pd_core::model::{Point, Size};
use pretty_assertions::assert_eq;

fn template(id: &str) -> pd_core::template::Template {
    business_templates()
        .into_iter()
        .find(|t| t.id == id)
        .expect("built-in template")
}

// ─── Template switching ─────────────────────────────────────────────────

#[test]
fn selecting_a_template_hydrates_the_collection() {
    let mut canvas = Canvas::new();
    canvas.sync_template(Some(&template("cart-template")), DeviceClass::Web);

    assert_eq!(canvas.len(), 2);
    let kinds: Vec<&str> = canvas.placements().iter().map(|p| p.kind.label()).collect();
    assert_eq!(kinds, vec!["CART_LIST", "PAYMENT_SUMMARY"]);
}

#[test]
fn switching_templates_fully_replaces_the_collection() {
    let mut canvas = Canvas::new();
    canvas.sync_template(Some(&template("cart-template")), DeviceClass::Web);
    let old_ids: Vec<_> = canvas.placements().iter().map(|p| p.id).collect();

    canvas.sync_template(Some(&template("login-template")), DeviceClass::Web);

    assert_eq!(canvas.len(), 1);
    for p in canvas.placements() {
        assert!(
            !old_ids.contains(&p.id),
            "placement {} survived a template switch",
            p.id
        );
    }
}

#[test]
fn device_switch_discards_interactive_edits() {
    let mut canvas = Canvas::new();
    let login = template("login-template");
    canvas.sync_template(Some(&login), DeviceClass::Web);

    // Drag the form somewhere else.
    canvas.handle_pointer(PointerEvent::Down { x: 300.0, y: 200.0 });
    canvas.handle_pointer(PointerEvent::Move { x: 400.0, y: 300.0 });
    canvas.handle_pointer(PointerEvent::Up { x: 400.0, y: 300.0 });
    assert_eq!(canvas.placements()[0].position, Point::new(350.0, 200.0));

    // Switching to mobile re-hydrates from the template, not the edit.
    canvas.sync_template(Some(&login), DeviceClass::Mobile);
    let scale = scale_factor(DeviceClass::Mobile);
    assert_eq!(
        canvas.placements()[0].position,
        Point::new(250.0 * scale, 100.0 * scale)
    );
}

#[test]
fn no_template_means_an_empty_canvas() {
    let mut canvas = Canvas::new();
    canvas.sync_template(Some(&template("landing-template")), DeviceClass::Web);
    canvas.sync_template(None, DeviceClass::Web);
    assert!(canvas.is_empty());
}

// ─── Palette drops ──────────────────────────────────────────────────────

#[test]
fn web_drop_places_at_canvas_relative_point_with_web_default_size() {
    let mut canvas = Canvas::new();
    let payload = serialize_item(&palette_items()[1]); // Button

    let id = canvas
        .drop_component(
            &payload,
            Point::new(250.0, 170.0),
            Point::new(200.0, 120.0),
            DeviceClass::Web,
        )
        .unwrap();

    let dropped = canvas.get(id).unwrap();
    assert_eq!(dropped.position, Point::new(50.0, 50.0));
    assert_eq!(dropped.size, Size::new(150.0, 75.0));
}

#[test]
fn mobile_drop_uses_the_mobile_default_size() {
    let mut canvas = Canvas::new();
    let payload = serialize_item(&palette_items()[1]);

    let id = canvas
        .drop_component(
            &payload,
            Point::new(50.0, 50.0),
            Point::new(0.0, 0.0),
            DeviceClass::Mobile,
        )
        .unwrap();

    assert_eq!(canvas.get(id).unwrap().size, Size::new(100.0, 50.0));
}

#[test]
fn drops_append_on_top_of_template_placements() {
    let mut canvas = Canvas::new();
    canvas.sync_template(Some(&template("login-template")), DeviceClass::Web);
    let payload = serialize_item(&palette_items()[0]);

    canvas
        .drop_component(
            &payload,
            Point::new(10.0, 10.0),
            Point::new(0.0, 0.0),
            DeviceClass::Web,
        )
        .unwrap();

    assert_eq!(canvas.len(), 2);
    assert_eq!(
        canvas.placements().last().unwrap().kind.label(),
        "NAVIGATION",
        "drops land at the end, rendering on top"
    );
}

#[test]
fn malformed_payload_leaves_the_collection_unchanged() {
    let mut canvas = Canvas::new();
    canvas.sync_template(Some(&template("login-template")), DeviceClass::Web);
    let len_before = canvas.len();

    let result = canvas.drop_component(
        "definitely not json",
        Point::new(50.0, 50.0),
        Point::new(0.0, 0.0),
        DeviceClass::Web,
    );

    assert!(result.is_none());
    assert_eq!(canvas.len(), len_before);
}
