//! Tests for tile size validation and square stamp preparation

#[cfg(test)]
mod tests {
    use image::imageops::FilterType;
    use image::{Rgba, RgbaImage};
    use mosaic_maker::MosaicError;
    use mosaic_maker::compose::stamp::{MIN_TILE_SIZE, ResampleFilter, TileSize, prepare_stamp};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_image(width: u32, height: u32, seed: u64) -> RgbaImage {
        let mut rng = StdRng::seed_from_u64(seed);
        RgbaImage::from_fn(width, height, |_, _| {
            Rgba([rng.random(), rng.random(), rng.random(), 255])
        })
    }

    // Tests tile sizes below two are rejected
    // Verified by lowering the minimum to zero
    #[test]
    fn test_tile_size_rejects_zero_and_one() {
        for value in [0, 1] {
            match TileSize::new(value) {
                Err(MosaicError::InvalidTileSize { value: v, minimum }) => {
                    assert_eq!(v, value);
                    assert_eq!(minimum, MIN_TILE_SIZE);
                }
                other => unreachable!("Expected InvalidTileSize, got {other:?}"),
            }
        }
        assert_eq!(TileSize::new(2).map(TileSize::get).ok(), Some(2));
        assert_eq!(
            TileSize::new(20).map(|t| t.to_string()).ok(),
            Some("20".to_string())
        );
    }

    // Tests the smallest tile still has an interior edge
    // Verified by lowering the minimum to one
    #[test]
    fn test_min_tile_size() {
        assert_eq!(MIN_TILE_SIZE, 2);
        assert!(TileSize::new(MIN_TILE_SIZE).is_ok());
    }

    // Tests stamps are exactly square regardless of source aspect ratio
    // Verified by preserving aspect ratio in the resize
    #[test]
    fn test_stamp_is_square_for_non_square_source() {
        let source = random_image(7, 3, 1);
        let tile = TileSize::new(5).expect("valid tile size");

        for filter in [
            ResampleFilter::Nearest,
            ResampleFilter::Triangle,
            ResampleFilter::CatmullRom,
            ResampleFilter::Gaussian,
            ResampleFilter::Lanczos3,
        ] {
            let stamp = prepare_stamp(&source, tile, filter).expect("stamp");
            assert_eq!(stamp.dimensions(), (5, 5), "{filter:?}");
        }
    }

    // Tests preparing a stamp twice yields identical bytes
    // Verified by adding random jitter to the resize
    #[test]
    fn test_stamp_is_deterministic() {
        let source = random_image(31, 17, 2);
        let tile = TileSize::new(8).expect("valid tile size");

        let first = prepare_stamp(&source, tile, ResampleFilter::Triangle).expect("stamp");
        let second = prepare_stamp(&source, tile, ResampleFilter::Triangle).expect("stamp");

        assert_eq!(first.as_raw(), second.as_raw());
    }

    // Tests opaque sources keep full opacity in the stamp
    // Verified by halving alpha during the resize
    #[test]
    fn test_stamp_preserves_opacity() {
        let source = random_image(12, 9, 3);
        let tile = TileSize::new(4).expect("valid tile size");

        for filter in [ResampleFilter::Nearest, ResampleFilter::Triangle] {
            let stamp = prepare_stamp(&source, tile, filter).expect("stamp");
            assert!(
                stamp.pixels().all(|p| p.0[3] == 255),
                "{filter:?} stamp should stay opaque"
            );
        }
    }

    // Tests a uniform source yields a uniform stamp of the same color
    // Verified by sampling outside the source extent
    #[test]
    fn test_uniform_source_gives_uniform_stamp() {
        let source = RgbaImage::from_pixel(6, 4, Rgba([40, 80, 120, 255]));
        let tile = TileSize::new(3).expect("valid tile size");

        let stamp = prepare_stamp(&source, tile, ResampleFilter::Triangle).expect("stamp");

        assert!(stamp.pixels().all(|p| *p == Rgba([40, 80, 120, 255])));
    }

    // Tests upscaling works when the tile is larger than the source
    // Verified by clamping the target size to the source size
    #[test]
    fn test_stamp_can_upscale() {
        let source = RgbaImage::from_pixel(1, 1, Rgba([0, 0, 0, 255]));
        let tile = TileSize::new(16).expect("valid tile size");

        let stamp = prepare_stamp(&source, tile, ResampleFilter::Lanczos3).expect("stamp");

        assert_eq!(stamp.dimensions(), (16, 16));
        assert!(stamp.pixels().all(|p| *p == Rgba([0, 0, 0, 255])));
    }

    // Tests empty sources are rejected instead of producing garbage
    // Verified by removing the empty-source check
    #[test]
    fn test_empty_source_rejected() {
        let source = RgbaImage::new(0, 0);
        let tile = TileSize::new(4).expect("valid tile size");

        let result = prepare_stamp(&source, tile, ResampleFilter::Triangle);

        assert!(matches!(result, Err(MosaicError::InvalidParameter { .. })));
    }

    // Tests every filter maps to its image crate counterpart
    // Verified by swapping two mapping arms
    #[test]
    fn test_filter_mapping() {
        assert_eq!(FilterType::from(ResampleFilter::Nearest), FilterType::Nearest);
        assert_eq!(FilterType::from(ResampleFilter::Triangle), FilterType::Triangle);
        assert_eq!(
            FilterType::from(ResampleFilter::CatmullRom),
            FilterType::CatmullRom
        );
        assert_eq!(FilterType::from(ResampleFilter::Gaussian), FilterType::Gaussian);
        assert_eq!(FilterType::from(ResampleFilter::Lanczos3), FilterType::Lanczos3);
        assert_eq!(ResampleFilter::default(), ResampleFilter::Triangle);
    }
}
