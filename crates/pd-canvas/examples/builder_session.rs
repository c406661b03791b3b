//! Walks a complete builder session on stdout: pick a template, drag and
//! resize its components, drop a palette item, switch device, and report
//! lint diagnostics. Run with `RUST_LOG=debug` to watch the canvas log.

use pd_canvas::canvas::Canvas;
use pd_canvas::dnd::serialize_item;
use pd_canvas::input::PointerEvent;
use pd_core::catalog::{business_templates, palette_items};
use pd_core::device::DeviceClass;
use pd_core::lint::lint_canvas;
use pd_core::model::Point;

fn print_canvas(canvas: &Canvas, heading: &str) {
    println!("\n── {heading}");
    for p in canvas.placements() {
        println!(
            "  {:<40} {:>20} @ ({:>6.1}, {:>6.1})  {:.0}×{:.0}",
            p.id.to_string(),
            p.kind.label(),
            p.position.x,
            p.position.y,
            p.size.width,
            p.size.height,
        );
    }
}

fn main() {
    env_logger::init();

    let templates = business_templates();
    let cart = templates
        .iter()
        .find(|t| t.id == "cart-template")
        .expect("stock catalog includes the cart template");

    let mut canvas = Canvas::new();
    canvas.sync_template(Some(cart), DeviceClass::Web);
    print_canvas(&canvas, "cart template on web");

    // Drag the payment summary 40px down-right.
    canvas.handle_pointer(PointerEvent::Down { x: 700.0, y: 100.0 });
    canvas.handle_pointer(PointerEvent::Move { x: 720.0, y: 120.0 });
    canvas.handle_pointer(PointerEvent::Move { x: 740.0, y: 140.0 });
    canvas.handle_pointer(PointerEvent::Up { x: 740.0, y: 140.0 });

    // Grow the cart list by its corner handle at (600, 400).
    canvas.handle_pointer(PointerEvent::Down { x: 600.0, y: 400.0 });
    canvas.handle_pointer(PointerEvent::Move { x: 650.0, y: 450.0 });
    canvas.handle_pointer(PointerEvent::Up { x: 650.0, y: 450.0 });
    print_canvas(&canvas, "after drag + resize");

    // Drop a button from the palette near the bottom.
    let button = &palette_items()[1];
    let payload = serialize_item(button);
    canvas.drop_component(
        &payload,
        Point::new(420.0, 540.0),
        Point::new(0.0, 0.0),
        DeviceClass::Web,
    );
    print_canvas(&canvas, "after palette drop");

    // Device switch re-hydrates from the template: edits and the dropped
    // button are gone, geometry is scaled to the mobile width.
    canvas.sync_template(Some(cart), DeviceClass::Mobile);
    print_canvas(&canvas, "cart template on mobile");

    let diags = lint_canvas(canvas.placements(), DeviceClass::Mobile);
    println!("\n── lint ({} findings)", diags.len());
    for d in &diags {
        println!("  [{:?}] {} — {}", d.severity, d.rule, d.message);
    }
}
