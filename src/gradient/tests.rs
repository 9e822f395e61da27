use super::*;

fn two_stop() -> Gradient {
    Gradient::new(vec![
        ColorPoint::new([0, 0, 0], 0.0),
        ColorPoint::new([200, 100, 50], 1.0),
    ])
}

#[test]
fn endpoints_hit_stop_colors() {
    let g = two_stop();
    assert_eq!(g.color_at(0.0), [0, 0, 0]);
    assert_eq!(g.color_at(1.0), [200, 100, 50]);
}

#[test]
fn midpoint_interpolates() {
    assert_eq!(two_stop().color_at(0.5), [100, 50, 25]);
}

#[test]
fn out_of_range_is_black() {
    let g = two_stop();
    assert_eq!(g.color_at(-0.1), [0, 0, 0]);
    assert_eq!(g.color_at(1.5), [0, 0, 0]);
    assert_eq!(g.color_at(f32::NAN), [0, 0, 0]);
}

#[test]
fn empty_gradient_is_black() {
    assert_eq!(Gradient::new(Vec::new()).color_at(0.3), [0, 0, 0]);
}

#[test]
fn stops_are_sorted() {
    let g = Gradient::new(vec![
        ColorPoint::new([255, 255, 255], 1.0),
        ColorPoint::new([0, 0, 0], 0.0),
    ]);
    assert!((g.points()[0].position).abs() < f32::EPSILON);
    assert_eq!(g.color_at(0.0), [0, 0, 0]);
}

#[test]
fn single_stop_covers_whole_range() {
    let g = Gradient::new(vec![ColorPoint::new([9, 8, 7], 0.5)]);
    assert_eq!(g.color_at(0.2), [9, 8, 7]);
    assert_eq!(g.color_at(0.9), [9, 8, 7]);
}

#[test]
fn color_at_index_zero_max_is_black() {
    assert_eq!(two_stop().color_at_index(0, 0), [0, 0, 0]);
    assert_eq!(two_stop().color_at_index(2, 2), [200, 100, 50]);
}

#[test]
fn image_spans_gradient() {
    let img = two_stop().image(5);
    assert_eq!(img.len(), 15);
    assert_eq!(&img[..3], &[0, 0, 0]);
    assert_eq!(&img[12..], &[200, 100, 50]);
}

#[test]
fn single_pixel_image_uses_first_color() {
    assert_eq!(GradientPreset::Grayscale.gradient().image(1), vec![0, 0, 0]);
}

#[test]
fn presets_start_and_end_on_same_color() {
    for preset in GradientPreset::ALL {
        let g = preset.gradient();
        assert_eq!(g.color_at(0.0), g.color_at(1.0), "{preset:?}");
    }
}

#[test]
fn grayscale_peaks_in_the_middle() {
    assert_eq!(GradientPreset::Grayscale.gradient().color_at(0.5), [255, 255, 255]);
}

#[test]
fn preset_lookup_by_name() {
    assert_eq!(GradientPreset::find("Monokai"), Some(GradientPreset::Monokai));
    assert_eq!(GradientPreset::find("ULTRA_FRACTAL"), Some(GradientPreset::UltraFractal));
    assert_eq!(GradientPreset::find("rainbow"), None);
}
