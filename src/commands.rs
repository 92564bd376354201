use crate::ico;
use crate::img::RasterImage;
use crate::png;
use clap::Subcommand;
use std::fs;
use std::path::PathBuf;

const DEFAULT_COLOR: &str = "100,150,200,255";

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Write a solid-color .png placeholder icon
    Png {
        #[arg(default_value = "icon.png")]
        output: PathBuf,
        #[arg(short, long, default_value_t = 512, help = "Square size in pixels")]
        size: u32,
        #[arg(short, long, default_value = DEFAULT_COLOR, value_parser = parse_color,
              help = "Fill color as R,G,B or R,G,B,A")]
        color: [u8; 4],
    },
    /// Write a multi-resolution .ico built from PNG-compressed images
    Ico {
        #[arg(default_value = "icon.ico")]
        output: PathBuf,
        #[arg(short, long, value_delimiter = ',', default_value = "16,32,48,64,128,256",
              help = "Comma-separated square sizes in pixels")]
        sizes: Vec<u32>,
        #[arg(short, long, default_value = DEFAULT_COLOR, value_parser = parse_color,
              help = "Fill color as R,G,B or R,G,B,A")]
        color: [u8; 4],
    },
}

impl Command {
    pub fn run(self) -> Result<(), String> {
        match self {
            Command::Png {
                output,
                size,
                color,
            } => write_png(&output, size, color),
            Command::Ico {
                output,
                sizes,
                color,
            } => write_ico(&output, &sizes, color),
        }
    }
}

fn write_png(output: &PathBuf, size: u32, color: [u8; 4]) -> Result<(), String> {
    let img = RasterImage::new(size, size, color).map_err(|e| e.to_string())?;
    let data = png::encode_img(img);
    fs::write(output, &data).map_err(|e| e.to_string())?;
    println!("Wrote {} ({}x{}, {} bytes)", output.display(), size, size, data.len());
    Ok(())
}

fn write_ico(output: &PathBuf, sizes: &[u32], color: [u8; 4]) -> Result<(), String> {
    if sizes.is_empty() {
        return Err("At least one icon size is required".into());
    }
    for &side in sizes {
        //Reject out-of-range sides before compressing anything
        ico::side_byte(side).map_err(|e| e.to_string())?;
    }

    let mut images = Vec::with_capacity(sizes.len());
    for &side in sizes {
        let img = RasterImage::new(side, side, color).map_err(|e| e.to_string())?;
        images.push((side, side, png::encode_img(img)));
    }

    let data = ico::assemble(&images).map_err(|e| e.to_string())?;
    fs::write(output, &data).map_err(|e| e.to_string())?;
    println!(
        "Wrote {} ({} images: {:?}, {} bytes)",
        output.display(),
        sizes.len(),
        sizes,
        data.len()
    );
    Ok(())
}

fn parse_color(s: &str) -> Result<[u8; 4], String> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 3 && parts.len() != 4 {
        return Err("Expected R,G,B or R,G,B,A".into());
    }

    let mut color = [0, 0, 0, 255];
    for (i, part) in parts.iter().enumerate() {
        color[i] = part
            .trim()
            .parse()
            .map_err(|_| format!("Invalid channel value: {}", part))?;
    }
    Ok(color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rgb_with_default_alpha() {
        assert_eq!(parse_color("255,0,0").unwrap(), [255, 0, 0, 255]);
    }

    #[test]
    fn parses_rgba() {
        assert_eq!(parse_color("100, 150, 200, 128").unwrap(), [100, 150, 200, 128]);
    }

    #[test]
    fn oversized_ico_size_rejected_without_output() {
        let path = std::env::temp_dir().join("icongen_oversized.ico");
        let result = write_ico(&path, &[16, 512], [0, 0, 0, 255]);
        assert!(result.is_err());
        assert!(!path.exists());
    }

    #[test]
    fn rejects_malformed_color() {
        assert!(parse_color("255,0").is_err());
        assert!(parse_color("1,2,3,4,5").is_err());
        assert!(parse_color("red,0,0").is_err());
        assert!(parse_color("256,0,0").is_err());
    }
}
