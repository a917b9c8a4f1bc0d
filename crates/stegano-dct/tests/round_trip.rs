use image::{ImageBuffer, Rgb, RgbImage};
use tempfile::TempDir;

use stegano_dct::media::{load_image, save_png};
use stegano_dct::*;

fn gray_image(width: u32, height: u32) -> RgbImage {
    ImageBuffer::from_pixel(width, height, Rgb([128, 128, 128]))
}

/// soft diagonal gradient with some color in it
fn gradient_image(width: u32, height: u32) -> RgbImage {
    ImageBuffer::from_fn(width, height, |x, y| {
        let v = (60 + (x + y) % 120) as u8;
        Rgb([v, v.saturating_add(30), v / 2 + 40])
    })
}

fn message_of_len(len: usize) -> String {
    "Steganography! ".chars().cycle().take(len).collect()
}

#[test]
fn should_round_trip_hi_in_256_gray() -> Result<()> {
    assert_eq!(max_message_length(256, 256), 108);

    let secret = embed(&gray_image(256, 256), "HI")?;
    assert_eq!(extract(&secret)?, "HI");

    Ok(())
}

#[test]
fn should_reject_hi_in_64_gray() {
    assert!(max_message_length(64, 64) < 0);
    assert!(matches!(
        embed(&gray_image(64, 64), "HI"),
        Err(SteganoError::MessageTooLarge { .. })
    ));
}

#[test]
fn should_round_trip_multi_byte_utf8() -> Result<()> {
    let message = "Grüße aus Köln, 東京 und 🦀!";
    let secret = embed(&gradient_image(200, 160), message)?;

    assert_eq!(extract(&secret)?, message);
    Ok(())
}

#[test]
fn should_accept_exactly_the_max_length_and_reject_one_more() -> Result<()> {
    for (width, height) in [(256, 256), (173, 101), (300, 97), (1000, 16)] {
        let max = max_message_length(width, height);
        assert!(max > 0, "{width}x{height} should take a message");
        let carrier = gradient_image(width, height);

        let message = message_of_len(max as usize);
        let secret = embed(&carrier, &message)?;
        assert_eq!(extract(&secret)?, message, "{width}x{height}");

        let result = embed(&carrier, &message_of_len(max as usize + 1));
        assert!(
            matches!(result, Err(SteganoError::MessageTooLarge { max_chars }) if max_chars == max),
            "{width}x{height} accepted a message that is too long"
        );
    }

    Ok(())
}

#[test]
fn should_fill_the_capacity_with_multi_byte_characters() -> Result<()> {
    let max = max_message_length(256, 256) as usize;
    let message: String = "ä".repeat(max / 2);
    assert_eq!(message.len(), max);

    let secret = embed(&gradient_image(256, 256), &message)?;
    assert_eq!(extract(&secret)?, message);

    let too_long = format!("{message}ä");
    assert!(matches!(
        embed(&gradient_image(256, 256), &too_long),
        Err(SteganoError::MessageTooLarge { max_chars: 108 })
    ));

    Ok(())
}

#[test]
fn smallest_block_image_cannot_take_any_message() {
    assert_eq!(capacity_for(8, 8), 1);
    assert!(matches!(
        embed(&gray_image(8, 8), "a"),
        Err(SteganoError::MessageTooLarge { max_chars: -20 })
    ));
    assert!(matches!(
        extract(&gray_image(8, 8)),
        Err(SteganoError::NoHiddenMessage { bits_read: 1 })
    ));
}

#[test]
fn should_keep_trailing_pixels_identical() -> Result<()> {
    let (width, height) = (173, 101);
    let carrier = gradient_image(width, height);
    let secret = embed(&carrier, &message_of_len(max_message_length(width, height) as usize))?;

    let covered_width = width / 8 * 8;
    let covered_height = height / 8 * 8;
    for (x, y, pixel) in carrier.enumerate_pixels() {
        if x >= covered_width || y >= covered_height {
            assert_eq!(pixel, secret.get_pixel(x, y), "pixel ({x}, {y}) changed");
        }
    }

    Ok(())
}

#[test]
fn should_survive_png_save_and_load() -> Result<()> {
    let out_dir = TempDir::new()?;
    let secret_file = out_dir.path().join("secret.png");
    let message = "Meet me at the old oak tree at noon.";

    save_png(&embed(&gradient_image(320, 200), message)?, &secret_file)?;
    assert_eq!(extract(&load_image(&secret_file)?)?, message);

    Ok(())
}

#[test]
fn should_find_no_message_in_plain_images() {
    for carrier in [gray_image(256, 256), gradient_image(320, 240)] {
        assert!(matches!(
            extract(&carrier),
            Err(SteganoError::NoHiddenMessage { .. })
        ));
    }
}

#[test]
fn messages_beyond_the_probe_bound_are_not_recoverable() -> Result<()> {
    let carrier = gray_image(1024, 1024);
    let extractable = MAX_PROBE_BITS / 8 - DELIMITER.len();

    let secret = embed(&carrier, &message_of_len(extractable))?;
    assert_eq!(extract(&secret)?.len(), extractable);

    let secret = embed(&carrier, &message_of_len(extractable + 1))?;
    assert!(matches!(
        extract(&secret),
        Err(SteganoError::NoHiddenMessage { bits_read }) if bits_read == MAX_PROBE_BITS
    ));

    Ok(())
}

#[test]
fn generate_sequence_should_be_stable() {
    let expected = vec![
        EmbedPosition {
            block_x: 0,
            block_y: 0,
            coeff_row: 2,
            coeff_col: 1,
        },
        EmbedPosition {
            block_x: 8,
            block_y: 0,
            coeff_row: 2,
            coeff_col: 1,
        },
        EmbedPosition {
            block_x: 16,
            block_y: 0,
            coeff_row: 2,
            coeff_col: 1,
        },
    ];

    assert_eq!(generate_sequence(24, 9, 3), expected);
    assert_eq!(generate_sequence(24, 9, 100), expected);
    assert_eq!(generate_sequence(24, 9, 2), &expected[..2]);
}
