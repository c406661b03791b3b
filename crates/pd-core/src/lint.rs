//! Lint diagnostics for a canvas collection.
//!
//! Reports layout issues without modifying any placement. The canvas
//! itself never clamps — positions may leave the visible area and
//! templates may author components below the interactive size floor —
//! so these diagnostics are how a host surfaces the permissive cases.

use crate::device::DeviceClass;
use crate::id::PlacementId;
use crate::model::{ComponentKind, MIN_COMPONENT_HEIGHT, MIN_COMPONENT_WIDTH, Placement};

// ─── Diagnostic types ────────────────────────────────────────────────────

/// Severity of a lint finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintSeverity {
    /// Should be looked at — likely a mistake.
    Warning,
    /// Informational — permitted state worth knowing about.
    Info,
}

/// A single lint diagnostic for a placement.
#[derive(Debug, Clone)]
pub struct LintDiagnostic {
    /// The placement this diagnostic refers to.
    pub placement: PlacementId,
    /// Human-readable message.
    pub message: String,
    /// Severity level.
    pub severity: LintSeverity,
    /// Short rule identifier (e.g. "offscreen-placement").
    pub rule: &'static str,
}

// ─── Public API ──────────────────────────────────────────────────────────

/// Run all lint rules over the live collection and return diagnostics.
#[must_use]
pub fn lint_canvas(placements: &[Placement], device: DeviceClass) -> Vec<LintDiagnostic> {
    let mut diags = Vec::new();
    lint_offscreen(placements, device, &mut diags);
    lint_undersized(placements, &mut diags);
    lint_unknown_kinds(placements, &mut diags);
    diags
}

// ─── Rules ───────────────────────────────────────────────────────────────

/// Note placements extending past the device canvas. Permitted by design,
/// so Info only.
fn lint_offscreen(
    placements: &[Placement],
    device: DeviceClass,
    diags: &mut Vec<LintDiagnostic>,
) {
    let canvas = device.profile().canvas;
    for p in placements {
        if p.overflows(canvas) {
            diags.push(LintDiagnostic {
                placement: p.id,
                message: format!(
                    "`{}` extends past the {} canvas ({}×{})",
                    p.id,
                    device,
                    canvas.width,
                    canvas.height
                ),
                severity: LintSeverity::Info,
                rule: "offscreen-placement",
            });
        }
    }
}

/// Warn on components below the interactive resize floor. Hydration and
/// drops can create them; the user can never shrink back below the floor
/// after growing one.
fn lint_undersized(placements: &[Placement], diags: &mut Vec<LintDiagnostic>) {
    for p in placements {
        if p.size.width < MIN_COMPONENT_WIDTH || p.size.height < MIN_COMPONENT_HEIGHT {
            diags.push(LintDiagnostic {
                placement: p.id,
                message: format!(
                    "`{}` is {}×{}, below the {}×{} interactive minimum",
                    p.id,
                    p.size.width,
                    p.size.height,
                    MIN_COMPONENT_WIDTH,
                    MIN_COMPONENT_HEIGHT
                ),
                severity: LintSeverity::Warning,
                rule: "undersized-component",
            });
        }
    }
}

/// Note kinds outside the known component set — they render as labeled
/// placeholder boxes.
fn lint_unknown_kinds(placements: &[Placement], diags: &mut Vec<LintDiagnostic>) {
    for p in placements {
        if let ComponentKind::Custom(label) = &p.kind {
            diags.push(LintDiagnostic {
                placement: p.id,
                message: format!(
                    "`{}` has unrecognized kind \"{label}\" and will render as a placeholder",
                    p.id
                ),
                severity: LintSeverity::Info,
                rule: "unknown-kind",
            });
        }
    }
}
