//! Shade index bounds over every face normal and many orientations.

use ascii_cube::core::{shade_index, EulerRotation, Vec3, FACE_PAIRS, LIGHT_DIR};
use ascii_cube::types::LUMINANCE_RAMP;

fn face_normals() -> Vec<Vec3> {
    let mut out = Vec::new();
    for axis in [Vec3::X, Vec3::Y, Vec3::Z] {
        out.push(axis);
        out.push(Vec3::new(-axis.x, -axis.y, -axis.z));
    }
    assert_eq!(out.len(), 2 * FACE_PAIRS.len());
    out
}

fn lights() -> Vec<Vec3> {
    let mut out = vec![LIGHT_DIR, Vec3::X, Vec3::new(0.0, -1.0, 0.0)];
    for i in 0..12 {
        let t = i as f32 * 0.5;
        let v = Vec3::new(t.cos(), t.sin() * 0.3, (t * 1.7).sin());
        let len = v.length();
        out.push(Vec3::new(v.x / len, v.y / len, v.z / len));
    }
    out
}

#[test]
fn shade_index_is_always_a_valid_ramp_index() {
    let n = LUMINANCE_RAMP.len();
    for light in lights() {
        for normal in face_normals() {
            for k in 0..400 {
                let r = EulerRotation::new(k as f32 * 0.0157);
                let idx = shade_index(r.apply(normal), light, n);
                assert!(idx < n, "normal={:?} light={:?} idx={}", normal, light, idx);
            }
        }
    }
}

#[test]
fn aligned_normal_hits_last_index_not_past_it() {
    for light in lights() {
        assert_eq!(shade_index(light, light, LUMINANCE_RAMP.len()), LUMINANCE_RAMP.len() - 1);
    }
}

#[test]
fn opposed_normal_is_clamped_to_zero() {
    for light in lights() {
        let away = Vec3::new(-light.x, -light.y, -light.z);
        assert_eq!(shade_index(away, light, LUMINANCE_RAMP.len()), 0);
    }
}
