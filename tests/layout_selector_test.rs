//! Tests for project image layout selection
//!
//! The plan decides how a project's images are arranged and which side of
//! the card they sit on. Every image that is displayed must appear exactly
//! once, and nothing outside the first five images is ever shown.

use folio::{select_layout, Alignment, LayoutVariant, PortfolioError};

fn images(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("img{}.png", (b'A' + i as u8) as char)).collect()
}

/// Test: One image at index 0 is a single, left-aligned layout
#[test]
fn test_single_image_first_project() {
    let images = vec!["A".to_string()];
    let plan = select_layout(&images, 0).unwrap();

    assert_eq!(plan.variant, LayoutVariant::Single);
    assert_eq!(plan.primary_image.map(String::as_str), Some("A"));
    assert!(plan.secondary_images.is_empty());
    assert_eq!(plan.alignment, Alignment::Left);
}

/// Test: Two images at index 1 are a right-aligned pair in source order
#[test]
fn test_pair_second_project() {
    let images = vec!["A".to_string(), "B".to_string()];
    let plan = select_layout(&images, 1).unwrap();

    assert_eq!(plan.variant, LayoutVariant::Pair);
    assert_eq!(plan.alignment, Alignment::Right);
    let shown: Vec<&str> = plan.displayed_images().map(String::as_str).collect();
    assert_eq!(shown, vec!["A", "B"]);
}

/// Test: Six images at index 2 show the first as primary plus four thumbnails
#[test]
fn test_gallery_third_project_drops_sixth_image() {
    let images: Vec<String> = ["A", "B", "C", "D", "E", "F"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let plan = select_layout(&images, 2).unwrap();

    assert_eq!(plan.variant, LayoutVariant::Gallery);
    assert_eq!(plan.primary_image.map(String::as_str), Some("A"));
    let thumbs: Vec<&str> = plan.secondary_images.iter().map(String::as_str).collect();
    assert_eq!(thumbs, vec!["B", "C", "D", "E"]);
    assert_eq!(plan.alignment, Alignment::Left);
    assert!(plan.displayed_images().all(|img| img != "F"));
}

/// Test: An empty image list is rejected, never defaulted
#[test]
fn test_empty_images_rejected() {
    let images: Vec<String> = Vec::new();
    for index in 0..4 {
        let err = select_layout(&images, index).unwrap_err();
        assert!(matches!(err, PortfolioError::InvalidInput(_)));
    }
}

/// Test: Alignment only depends on index parity
#[test]
fn test_alignment_alternates_for_any_image_count() {
    for count in 1..=8 {
        let images = images(count);
        for index in 0..6 {
            let plan = select_layout(&images, index).unwrap();
            let expected = if index % 2 == 1 {
                Alignment::Right
            } else {
                Alignment::Left
            };
            assert_eq!(plan.alignment, expected, "count={} index={}", count, index);
        }
    }
}

/// Test: Variant and displayed images follow the image count
#[test]
fn test_variant_and_capacity_by_count() {
    for count in 1..=9 {
        let images = images(count);
        let plan = select_layout(&images, 0).unwrap();
        let shown: Vec<&String> = plan.displayed_images().collect();

        match count {
            1 => assert_eq!(plan.variant, LayoutVariant::Single),
            2 => assert_eq!(plan.variant, LayoutVariant::Pair),
            _ => {
                assert_eq!(plan.variant, LayoutVariant::Gallery);
                assert_eq!(plan.primary_image, Some(&images[0]));
                assert_eq!(plan.secondary_images.len(), (count - 1).min(4));
            }
        }

        // Displayed images are a prefix of the input, each exactly once
        assert_eq!(shown.len(), count.min(5));
        for (shown, original) in shown.iter().zip(images.iter()) {
            assert_eq!(*shown, original);
        }
    }
}

/// Test: Selection is pure; the same input gives the same plan
#[test]
fn test_selection_is_deterministic() {
    let images = images(4);
    assert_eq!(select_layout(&images, 3).unwrap(), select_layout(&images, 3).unwrap());
}
