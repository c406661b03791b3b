//! Template hydration: declarative template entries → live placements.
//!
//! Templates are authored at the canonical 900px web width. Hydrating for
//! another device applies one uniform scale factor to both position and
//! size on both axes — no per-axis aspect correction, so layouts keep
//! their proportions.
//!
//! Hydration is a full replace: the caller swaps its entire collection
//! for the returned one whenever the template or device changes, and any
//! interactive edits to the previous collection are discarded.

use crate::device::{CANONICAL_WIDTH, DeviceClass};
use crate::model::{ComponentKind, Placement};
use crate::template::Template;

/// The uniform factor applied to template geometry for a device.
/// `Web` is the canonical width, so its factor is exactly 1.
pub fn scale_factor(device: DeviceClass) -> f32 {
    device.profile().canvas.width / CANONICAL_WIDTH
}

/// Convert a template's component list into live placements for the given
/// device: scaled geometry, fresh unique ids, empty style bags.
///
/// Geometry is deterministic — hydrating the same template for the same
/// device always yields the same positions and sizes.
pub fn hydrate(template: &Template, device: DeviceClass) -> Vec<Placement> {
    let scale = scale_factor(device);
    log::debug!(
        "hydrating template \"{}\" for {device} (scale {scale})",
        template.id
    );

    template
        .components
        .iter()
        .map(|entry| {
            Placement::new(
                ComponentKind::from_label(&entry.kind),
                entry.position.scaled(scale),
                entry.size.scaled(scale),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Point, Size};
    use crate::template::TemplateComponent;
    use pretty_assertions::assert_eq;

    fn template_with(components: Vec<TemplateComponent>) -> Template {
        Template {
            id: "t".into(),
            kind: "T".into(),
            label: "t".into(),
            description: String::new(),
            requires_admin: false,
            admin_inputs: Default::default(),
            user_flow: None,
            components,
        }
    }

    fn login_template() -> Template {
        template_with(vec![TemplateComponent {
            kind: "LOGIN_FORM".into(),
            position: Point::new(250.0, 100.0),
            size: Size::new(400.0, 300.0),
        }])
    }

    #[test]
    fn web_hydration_is_identity_scale() {
        let placements = hydrate(&login_template(), DeviceClass::Web);
        assert_eq!(placements.len(), 1);
        assert_eq!(placements[0].position, Point::new(250.0, 100.0));
        assert_eq!(placements[0].size, Size::new(400.0, 300.0));
        assert_eq!(placements[0].kind, ComponentKind::LoginForm);
        assert!(placements[0].style.is_empty());
    }

    #[test]
    fn mobile_hydration_scales_uniformly() {
        let scale = 375.0 / 900.0;
        let placements = hydrate(&login_template(), DeviceClass::Mobile);
        assert_eq!(placements[0].position, Point::new(250.0 * scale, 100.0 * scale));
        assert_eq!(placements[0].size, Size::new(400.0 * scale, 300.0 * scale));
    }

    #[test]
    fn rehydration_is_deterministic_across_device_switches() {
        let template = login_template();
        let first = hydrate(&template, DeviceClass::Mobile);
        let _web = hydrate(&template, DeviceClass::Web);
        let second = hydrate(&template, DeviceClass::Mobile);

        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.position, b.position);
            assert_eq!(a.size, b.size);
        }
    }

    #[test]
    fn every_hydration_mints_fresh_ids() {
        let template = login_template();
        let first = hydrate(&template, DeviceClass::Web);
        let second = hydrate(&template, DeviceClass::Web);
        assert_ne!(first[0].id, second[0].id);
    }

    #[test]
    fn unknown_kind_labels_hydrate_as_custom() {
        let placements = hydrate(
            &template_with(vec![TemplateComponent {
                kind: "CAROUSEL".into(),
                position: Point::new(0.0, 0.0),
                size: Size::new(900.0, 200.0),
            }]),
            DeviceClass::Web,
        );
        assert_eq!(
            placements[0].kind,
            ComponentKind::Custom("CAROUSEL".into())
        );
    }
}
