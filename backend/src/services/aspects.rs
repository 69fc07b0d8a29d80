//! Pairwise major-aspect detection.

use crate::models::{AspectRecord, AspectType, BodyPosition};
use crate::services::astro_math::minimal_angle_difference;

/// Orb tolerance when the Sun or Moon is part of the pair.
const LUMINARY_ORB_DEG: f64 = 8.0;
/// Orb tolerance for all other pairs.
const DEFAULT_ORB_DEG: f64 = 6.0;

/// Detect major aspects between every unordered pair of bodies.
///
/// Aspect types are tried in their fixed order (conjunction first,
/// opposition last); the first type whose tolerance covers the separation
/// wins, so each pair yields at most one record. The tie-break is the type
/// order, not the smallest orb. `applying` is always unset: angular
/// velocities are not modeled.
pub fn detect_aspects(positions: &[BodyPosition]) -> Vec<AspectRecord> {
    let mut aspects = Vec::new();

    for i in 0..positions.len() {
        for j in (i + 1)..positions.len() {
            let a = &positions[i];
            let b = &positions[j];

            let separation = minimal_angle_difference(a.longitude, b.longitude).abs();

            let allowed_orb = if a.body.is_luminary() || b.body.is_luminary() {
                LUMINARY_ORB_DEG
            } else {
                DEFAULT_ORB_DEG
            };

            for aspect in AspectType::ALL {
                let orb = (separation - aspect.exact_angle()).abs();
                if orb <= allowed_orb {
                    aspects.push(AspectRecord {
                        body_a: a.body,
                        body_b: b.body,
                        aspect,
                        exact_angle: aspect.exact_angle(),
                        orb,
                        applying: None,
                    });
                    break;
                }
            }
        }
    }

    aspects
}
