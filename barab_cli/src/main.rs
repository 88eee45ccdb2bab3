use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use image::{GrayImage, Luma};

use barab_core::{checksum, CodeSet, Module, ModuleSequence, Symbology};
use barab_encode::{Code128Encoder, Code39Encoder, Encoder, LinearEncoder, TextRenderer, UpcAEncoder};

/// Space modules drawn on both sides of a PNG symbol.
const QUIET_ZONE: u32 = 10;

#[derive(Parser)]
#[command(name = "barab_cli")]
#[command(version)]
#[command(propagate_version = true)]
#[command(about = "Generate, check or decode linear barcodes from the command line", long_about = None)]
struct Cli {
    #[arg(short, long, global = true, help = "Print the codewords and the decoded scanline runs")]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    #[command(flatten_help = true)]
    Encode {
        #[arg(short, long, help = "Symbology: code128, code39 or upca")]
        symbology: Symbology,
        #[arg(long, value_enum, help = "Code 128 code set, C if unspecified")]
        set: Option<SetArg>,
        #[arg(long, help = "Emit FNC1 after the Code 128 start character")]
        fnc1: bool,
        #[arg(long, help = "Append the Code 39 mod 43 check character")]
        check: bool,
        #[arg(
            short,
            long,
            help = "Output file, or the 1/0 module string on stdout if unspecified",
            long_help = "Output file, or the 1/0 module string on stdout if unspecified. The output format is \
            determined based on the extension. \
            Supported extensions are:\n\
            * text: .txt\n\
            * images: .png"
        )]
        output: Option<PathBuf>,
        #[arg(long, default_value_t = 2, help = "Width of a module in pixels, PNG only")]
        module_width: u32,
        #[arg(long, default_value_t = 80, help = "Height of the bars in pixels, PNG only")]
        height: u32,
        data: String,
    },
    Decode {
        #[arg(help = "PNG or JPEG image of a Code 39 barcode")]
        file: PathBuf,
    },
    Checksum {
        #[arg(short, long, help = "Symbology: code39 or upca")]
        symbology: Symbology,
        data: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SetArg {
    A,
    B,
    C,
}

impl From<SetArg> for CodeSet {
    fn from(value: SetArg) -> Self {
        match value {
            SetArg::A => CodeSet::A,
            SetArg::B => CodeSet::B,
            SetArg::C => CodeSet::C,
        }
    }
}

/// Where the encoded modules go.
enum Output {
    /// The `1`/`0` module string on stdout.
    Modules,
    /// Lines of text drawn by [TextRenderer].
    Text(PathBuf),
    Png(PathBuf),
}

impl Output {
    fn from_path(path: Option<PathBuf>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::Modules);
        };
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("txt") => Ok(Self::Text(path)),
            Some("png") => Ok(Self::Png(path)),
            Some(invalid) => Err(anyhow::Error::msg(format!(
                "unsupported output extension '{}', expected txt or png",
                invalid
            ))),
            None => Err(anyhow::Error::msg(format!(
                "output {} has no extension",
                path.display()
            ))),
        }
    }
}

/// Format `modules` the way they are printed without an output file.
fn module_string(modules: &ModuleSequence) -> String {
    modules.to_string()
}

/// Draw `modules` as black bars on white, `module_width` pixels per module.
fn rasterize(modules: &ModuleSequence, module_width: u32, height: u32) -> GrayImage {
    let width = (modules.len() as u32 + 2 * QUIET_ZONE) * module_width;
    GrayImage::from_fn(width, height, |x, _| {
        let module = (x / module_width)
            .checked_sub(QUIET_ZONE)
            .and_then(|index| modules.get(index as usize));
        match module {
            Some(Module::Bar) => Luma([0]),
            _ => Luma([255]),
        }
    })
}

fn write_png(path: &Path, modules: &ModuleSequence, module_width: u32, height: u32) -> Result<()> {
    if module_width == 0 || height == 0 {
        return Err(anyhow::Error::msg("module width and height must be positive"));
    }
    rasterize(modules, module_width, height).save(path)?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Encode {
            symbology,
            set,
            fnc1,
            check,
            output,
            module_width,
            height,
            data,
        } => {
            // Before doing anything, make sure the requested output is valid.
            let output = Output::from_path(output)?;
            let encoder = match symbology {
                Symbology::Code128 => {
                    let code_set = set.map(CodeSet::from).unwrap_or(CodeSet::C);
                    Encoder::from(Code128Encoder::new().with_code_set(code_set).with_fnc1(fnc1))
                }
                Symbology::Code39 => Encoder::from(Code39Encoder::new().with_check_character(check)),
                Symbology::UpcA => Encoder::from(UpcAEncoder::new()),
            };
            let barcode = encoder.barcode(&data)?;
            if cli.verbose {
                eprintln!("{} codewords: {:?}", barcode.symbology(), barcode.codewords());
            }
            match output {
                Output::Modules => println!("{}", module_string(barcode.modules())),
                Output::Text(path) => {
                    let mut writer = BufWriter::new(File::create(path)?);
                    TextRenderer::new().render(&mut writer, barcode.modules())?;
                }
                Output::Png(path) => {
                    write_png(&path, barcode.modules(), module_width, height)?;
                }
            }
        }
        Command::Decode { file } => {
            let scanline = barab_decode::load_scanline(&file)?;
            if cli.verbose {
                let runs = barab_decode::runs(&scanline);
                let lens: Vec<_> = runs.iter().map(|run| run.len).collect();
                eprintln!("{} runs: {:?}", runs.len(), lens);
            }
            let text = barab_decode::decode(Symbology::Code39, &scanline)?;
            println!("{}", text);
        }
        Command::Checksum { symbology, data } => match symbology {
            Symbology::Code39 => println!("{}", checksum::code39(&data)?),
            Symbology::UpcA => println!("{}", checksum::upca(&data)?),
            Symbology::Code128 => {
                return Err(anyhow::Error::msg(
                    "Code 128 check values depend on the code set, use encode --verbose instead",
                ))
            }
        },
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_output_kind() {
        assert!(matches!(Output::from_path(None), Ok(Output::Modules)));
        assert!(matches!(
            Output::from_path(Some("a.png".into())),
            Ok(Output::Png(_))
        ));
        assert!(matches!(
            Output::from_path(Some("a.txt".into())),
            Ok(Output::Text(_))
        ));
        assert!(Output::from_path(Some("a.gif".into())).is_err());
        assert!(Output::from_path(Some("a".into())).is_err());
    }

    #[test]
    fn test_stdout_is_module_string() {
        let modules = barab_encode::encode(Symbology::UpcA, "03600029145").unwrap();
        let printed = module_string(&modules);
        assert_eq!(printed, modules.to_string());
        assert_eq!(printed.len(), 95);
        assert!(printed.starts_with("1010001101"));
        assert!(printed.chars().all(|c| c == '0' || c == '1'));
    }

    #[test]
    fn test_rasterize_decodes_back() {
        let modules = barab_encode::encode(Symbology::Code39, "PNG-1").unwrap();
        let image = image::DynamicImage::ImageLuma8(rasterize(&modules, 3, 20));
        let scanline = barab_decode::sample::sample_middle(&image).unwrap();
        assert_eq!(
            barab_decode::decode(Symbology::Code39, &scanline).unwrap(),
            "PNG-1"
        );
    }

    #[test]
    fn test_cli_parses() {
        let cli = Cli::try_parse_from(["barab_cli", "encode", "-s", "code128", "--set", "b", "Hi"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Encode {
                symbology: Symbology::Code128,
                set: Some(SetArg::B),
                ..
            }
        ));
    }
}
