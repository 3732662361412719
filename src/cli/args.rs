//! CLI argument parsing with clap.

use clap::Parser;
use std::num::NonZeroU64;

use super::parse::{parse_byte_count, parse_size};
use crate::config::{ConfigError, ScopeConfig};

/// Visualizes STDIN by writing a 2D histogram of byte pairs to STDOUT
#[derive(Parser, Debug)]
#[command(name = "vscope")]
#[command(version, about = "Visualizes STDIN by writing a 2D histogram to STDOUT")]
#[command(long_about = "Visualizes STDIN by writing a 2D histogram to STDOUT. \
    Every pair of consecutive bytes is plotted with the first byte on the X axis \
    and the second on the Y axis. Useful for classifying unknown datasets: \
    encrypted or compressed data fills the map evenly, text and machine code \
    leave distinct patterns.")]
#[command(override_usage = "cat [FILE] | vscope [OPTIONS]")]
#[command(after_help = "EXAMPLES:
    # Heatmap sized to the terminal
    vscope -c < /bin/ls

    # Only look at the first 64 KiB, as a 64x64 map
    head -c 64K data.bin | vscope -s 64

    # Binarize: mark every cell that was hit more than 3 times
    vscope -t 3 < firmware.img

    # Write a 256x256 PGM image
    vscope -p -s 256 < archive.zip > pairs.pgm

    # Live view of a device, redrawn every 4096 byte pairs
    cat /dev/urandom | vscope -l -b 4K -g")]
pub struct Args {
    /// Size of the heatmap (default: fit the terminal window, at most 256)
    #[arg(short, long, value_name = "NUM", value_parser = parse_size)]
    pub size: Option<u16>,

    /// Only read NUM bytes from STDIN (per frame in live mode).
    /// Accepts k/m/g/t/p (powers of 1000) and K/M/G/T/P (powers of 1024)
    #[arg(short, long, value_name = "NUM", value_parser = parse_byte_count)]
    pub bytes: Option<NonZeroU64>,

    /// Redraw the heatmap in place until STDIN ends (default window: 1024 bytes)
    #[arg(short, long)]
    pub live: bool,

    /// Color the heatmap using ANSI truecolor escape codes
    #[arg(short, long)]
    pub color: bool,

    /// Gray-scale version of --color (cannot be combined with --color)
    #[arg(short, long)]
    pub gray: bool,

    /// Write PGM image data directly to STDOUT
    #[arg(short, long)]
    pub picture: bool,

    /// Output ff for cells above NUM and -- otherwise (NUM defaults to 0)
    #[arg(
        short = 't',
        long = "thold",
        visible_alias = "threshold",
        value_name = "NUM",
        num_args = 0..=1,
        default_missing_value = "0"
    )]
    pub threshold: Option<u32>,

    /// Log level for diagnostics written to STDERR
    #[arg(long, default_value = "warn", env = "RUST_LOG")]
    pub log_level: String,
}

impl Args {
    /// Build a validated configuration, using `default_size` when `--size`
    /// was not given.
    pub fn to_config(&self, default_size: u16) -> Result<ScopeConfig, ConfigError> {
        ScopeConfig::builder(self.size.unwrap_or(default_size))
            .byte_limit(self.bytes)
            .threshold(self.threshold)
            .heat(self.color)
            .grayscale(self.gray)
            .image(self.picture)
            .live(self.live)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ColorMode, OutputMode};

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["vscope"]);
        assert!(args.size.is_none());
        assert!(args.bytes.is_none());
        assert!(!args.live);
        assert!(!args.color);
        assert!(!args.gray);
        assert!(!args.picture);
        assert!(args.threshold.is_none());
    }

    #[test]
    fn test_args_size() {
        let args = Args::parse_from(["vscope", "-s", "32"]);
        assert_eq!(args.size, Some(32));

        let args = Args::parse_from(["vscope", "--size", "999"]);
        assert_eq!(args.size, Some(256));
    }

    #[test]
    fn test_args_size_zero_rejected() {
        assert!(Args::try_parse_from(["vscope", "--size", "0"]).is_err());
    }

    #[test]
    fn test_args_size_requires_value() {
        assert!(Args::try_parse_from(["vscope", "--size"]).is_err());
    }

    #[test]
    fn test_args_bytes_with_suffix() {
        let args = Args::parse_from(["vscope", "-b", "4K"]);
        assert_eq!(args.bytes.map(NonZeroU64::get), Some(4096));
    }

    #[test]
    fn test_args_bytes_zero_rejected() {
        assert!(Args::try_parse_from(["vscope", "--bytes", "0"]).is_err());
    }

    #[test]
    fn test_args_threshold_without_value() {
        let args = Args::parse_from(["vscope", "-t"]);
        assert_eq!(args.threshold, Some(0));

        let args = Args::parse_from(["vscope", "--thold", "-c"]);
        assert_eq!(args.threshold, Some(0));
        assert!(args.color);
    }

    #[test]
    fn test_args_threshold_with_value() {
        let args = Args::parse_from(["vscope", "-t", "12"]);
        assert_eq!(args.threshold, Some(12));

        let args = Args::parse_from(["vscope", "--threshold", "300"]);
        assert_eq!(args.threshold, Some(300));
    }

    #[test]
    fn test_args_flags() {
        let args = Args::parse_from(["vscope", "-l", "-g"]);
        assert!(args.live);
        assert!(args.gray);

        let args = Args::parse_from(["vscope", "--picture", "--color"]);
        assert!(args.picture);
        assert!(args.color);
    }

    #[test]
    fn test_args_unknown_flag_rejected() {
        assert!(Args::try_parse_from(["vscope", "--bogus"]).is_err());
    }

    #[test]
    fn test_to_config_uses_default_size() {
        let args = Args::parse_from(["vscope"]);
        let config = args.to_config(48).unwrap();
        assert_eq!(config.size, 48);

        let args = Args::parse_from(["vscope", "-s", "8"]);
        let config = args.to_config(48).unwrap();
        assert_eq!(config.size, 8);
    }

    #[test]
    fn test_to_config_modes() {
        let args = Args::parse_from(["vscope", "-g", "-t", "5", "-b", "1k"]);
        let config = args.to_config(16).unwrap();
        assert_eq!(config.color, ColorMode::Grayscale);
        assert_eq!(config.output, OutputMode::Text);
        assert_eq!(config.threshold, Some(5));
        assert_eq!(config.byte_limit.map(NonZeroU64::get), Some(1000));
    }

    #[test]
    fn test_to_config_conflicts() {
        let args = Args::parse_from(["vscope", "-c", "-g"]);
        assert_eq!(args.to_config(16), Err(ConfigError::ConflictingColors));

        let args = Args::parse_from(["vscope", "-p", "-l"]);
        assert_eq!(args.to_config(16), Err(ConfigError::LiveImage));
    }
}
