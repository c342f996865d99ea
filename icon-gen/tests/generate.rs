use icon_gen::{GeneratorConfig, IconGenerator};
use image::{GenericImageView, ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use std::path::Path;
use tempfile::TempDir;

fn config_in(root: &Path) -> GeneratorConfig {
    GeneratorConfig {
        source: root.join("master.png"),
        output_dir: root.join("icons"),
        ..Default::default()
    }
}

/// A gradient so resampling has something to interpolate.
fn write_gradient_source(path: &Path, width: u32, height: u32) {
    RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x * 255 / width) as u8, (y * 255 / height) as u8, 128, 255])
    })
    .save_with_format(path, ImageFormat::Png)
    .unwrap();
}

fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn test_square_source_produces_five_icons() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_in(temp_dir.path());
    write_gradient_source(&config.source, 512, 512);
    assert!(!config.output_dir.exists());

    let icons = IconGenerator::new(config.clone())
        .run(&mut Vec::new())
        .unwrap();

    assert_eq!(icons.len(), 5);
    assert_eq!(
        file_names(&config.output_dir),
        vec![
            "icon-128.png",
            "icon-16.png",
            "icon-32.png",
            "icon-48.png",
            "icon-96.png"
        ]
    );
    for size in [16, 32, 48, 96, 128] {
        let path = icons.get_output(size).unwrap();
        assert_eq!(path, config.output_dir.join(format!("icon-{size}.png")));
        assert_eq!(image::open(path).unwrap().dimensions(), (size, size));
    }
}

#[test]
fn test_rectangular_source_produces_square_icons() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_in(temp_dir.path());
    write_gradient_source(&config.source, 640, 200);

    let icons = IconGenerator::new(config).run(&mut Vec::new()).unwrap();

    for icon in icons.iter() {
        assert_eq!(
            image::open(&icon.path).unwrap().dimensions(),
            (icon.size, icon.size)
        );
    }
}

#[test]
fn test_second_run_overwrites_with_identical_bytes() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_in(temp_dir.path());
    write_gradient_source(&config.source, 300, 300);
    let generator = IconGenerator::new(config.clone());

    let first = generator.run(&mut Vec::new()).unwrap();
    let first_bytes: Vec<Vec<u8>> = first
        .iter()
        .map(|icon| std::fs::read(&icon.path).unwrap())
        .collect();

    let second = generator.run(&mut Vec::new()).unwrap();
    let second_bytes: Vec<Vec<u8>> = second
        .iter()
        .map(|icon| std::fs::read(&icon.path).unwrap())
        .collect();

    assert_eq!(first_bytes, second_bytes);
    assert_eq!(file_names(&config.output_dir).len(), 5);
}

#[test]
fn test_existing_output_dir_keeps_unrelated_files() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_in(temp_dir.path());
    write_gradient_source(&config.source, 256, 256);
    std::fs::create_dir(&config.output_dir).unwrap();
    let unrelated = config.output_dir.join("notes.txt");
    std::fs::write(&unrelated, "hand written").unwrap();

    IconGenerator::new(config.clone())
        .run(&mut Vec::new())
        .unwrap();

    assert_eq!(std::fs::read_to_string(unrelated).unwrap(), "hand written");
    assert_eq!(file_names(&config.output_dir).len(), 6);
}

#[test]
fn test_stale_icon_is_replaced() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_in(temp_dir.path());
    write_gradient_source(&config.source, 256, 256);
    std::fs::create_dir(&config.output_dir).unwrap();
    let stale = config.output_dir.join("icon-16.png");
    std::fs::write(&stale, "stale").unwrap();

    IconGenerator::new(config).run(&mut Vec::new()).unwrap();

    assert_eq!(image::open(&stale).unwrap().dimensions(), (16, 16));
}

#[test]
fn test_jpeg_source_is_accepted() {
    let temp_dir = TempDir::new().unwrap();
    let config = GeneratorConfig {
        source: temp_dir.path().join("master.jpg"),
        ..config_in(temp_dir.path())
    };
    RgbImage::from_pixel(100, 100, Rgb([10, 200, 10]))
        .save_with_format(&config.source, ImageFormat::Jpeg)
        .unwrap();

    let icons = IconGenerator::new(config).run(&mut Vec::new()).unwrap();

    assert_eq!(icons.len(), 5);
}
