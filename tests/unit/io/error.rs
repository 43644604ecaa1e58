//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use mosaic_maker::MosaicError;
    use mosaic_maker::io::error::{invalid_image, invalid_parameter};
    use std::error::Error;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = MosaicError::FileSystem {
            path: "/tmp/test.png".into(),
            operation: "read",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(error.to_string().contains("/tmp/test.png"));
    }

    // Tests tile size error names the value and the minimum
    // Verified by omitting the minimum from message
    #[test]
    fn test_invalid_tile_size_error() {
        let error = MosaicError::InvalidTileSize {
            value: 1,
            minimum: 2,
        };

        let message = error.to_string();
        assert!(message.contains("Invalid tile size 1"));
        assert!(message.contains("minimum 2"));
        assert!(error.source().is_none());
    }

    // Tests missing input reports the original wording
    // Verified by changing the message prefix
    #[test]
    fn test_input_not_found_error() {
        let error = MosaicError::InputNotFound {
            input: "./nowhere.jpg".to_string(),
        };

        let message = error.to_string();
        assert!(message.starts_with("File does not exist"));
        assert!(message.contains("./nowhere.jpg"));
    }

    // Tests allocation error reports the requested canvas size
    // Verified by omitting height from message
    #[test]
    fn test_allocation_too_large_error() {
        let error = MosaicError::AllocationTooLarge {
            width: 80_000,
            height: 60_000,
        };

        assert!(error.to_string().contains("80000x60000"));
    }

    // Tests index error reports position and buffer bounds
    // Verified by swapping position and dimensions
    #[test]
    fn test_index_out_of_range_error() {
        let error = MosaicError::IndexOutOfRange {
            buffer: "source",
            position: (5, 6),
            dimensions: (4, 4),
        };

        let message = error.to_string();
        assert!(message.contains("(5, 6)"));
        assert!(message.contains("source buffer (4x4)"));
    }

    // Tests HTTP status error includes the URL and code
    // Verified by omitting status from message
    #[test]
    fn test_http_status_error() {
        let error = MosaicError::HttpStatus {
            url: "https://example.com/a.png".to_string(),
            status: 404,
        };

        let message = error.to_string();
        assert!(message.contains("https://example.com/a.png"));
        assert!(message.contains("404"));
    }

    // Tests helper constructors fill every field
    // Verified by dropping the reason argument
    #[test]
    fn test_helper_constructors() {
        let parameter = invalid_parameter("opacity", &"2.0", &"must be at most 1.0");
        let message = parameter.to_string();
        assert!(message.contains("opacity"));
        assert!(message.contains("2.0"));
        assert!(message.contains("must be at most 1.0"));

        let image = invalid_image(&"input.bmp", &"unsupported format");
        let message = image.to_string();
        assert!(message.contains("input.bmp"));
        assert!(message.contains("unsupported format"));
    }

    // Tests ImageExport error with IO source
    // Verified by excluding source error from message
    #[test]
    fn test_image_export_error() {
        use std::path::PathBuf;

        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));

        let error = MosaicError::ImageExport {
            path: PathBuf::from("/restricted/output.png"),
            source: image_error,
        };

        let message = error.to_string();
        assert!(message.contains("/restricted/output.png"));
        assert!(error.source().is_some());
        assert!(
            message.contains("Permission denied")
                || message.contains("permission denied")
                || message.contains("access denied"),
            "Error message should include source error details: {message}"
        );
    }
}
