use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use log::{Level, info};

use netpbm::io::{
    Limits, ReadOptions, detect_format, read_image_header, read_image_with_options, write_image,
};
use netpbm::transform::{ResampleOptions, flip_lr, flip_tb, resample_with_options, rotate_orth};
use netpbm::{MagicNumber, Pix, Pixel, Point};

#[derive(Parser, Debug)]
#[command(name = "netpbm", version, about = "Inspect, convert and edit Netpbm images")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(flatten)]
    limits: LimitArgs,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the header of an image.
    Info(InfoArgs),
    /// Re-encode an image under another magic number.
    Convert(ConvertArgs),
    /// Apply value and orientation edits.
    Transform(TransformArgs),
    /// Resample to a new size.
    Resize(ResizeArgs),
    /// Render every drawing primitive onto a fresh pixmap.
    DrawDemo(DrawDemoArgs),
}

/// Decoder limits applied to every input.
#[derive(Args, Debug)]
struct LimitArgs {
    /// Reject inputs wider than this.
    #[arg(long, global = true)]
    max_width: Option<u32>,

    /// Reject inputs taller than this.
    #[arg(long, global = true)]
    max_height: Option<u32>,

    /// Reject inputs with more pixels than this.
    #[arg(long, global = true)]
    max_pixels: Option<u64>,
}

#[derive(Parser, Debug)]
struct InfoArgs {
    /// Input image.
    input: PathBuf,

    /// Decode the whole image instead of probing the header.
    #[arg(long, default_value_t = false)]
    decode: bool,
}

#[derive(Parser, Debug)]
struct ConvertArgs {
    /// Input image.
    input: PathBuf,

    /// Output image.
    output: PathBuf,

    /// Target magic number (P1..P6).
    #[arg(long, value_parser = parse_magic)]
    format: MagicNumber,
}

#[derive(Parser, Debug)]
struct TransformArgs {
    /// Input image.
    input: PathBuf,

    /// Output image.
    output: PathBuf,

    /// Invert every channel.
    #[arg(long, default_value_t = false)]
    invert: bool,

    /// Mirror left-right.
    #[arg(long, default_value_t = false)]
    flip_h: bool,

    /// Mirror top-bottom.
    #[arg(long, default_value_t = false)]
    flip_v: bool,

    /// Quarter turns clockwise.
    #[arg(long, default_value_t = 0)]
    rotate: u32,

    /// New declared maximum value (samples are not rescaled).
    #[arg(long)]
    max_value: Option<u16>,

    /// Output magic number (P1..P6); defaults to the input's.
    #[arg(long, value_parser = parse_magic)]
    format: Option<MagicNumber>,
}

#[derive(Parser, Debug)]
struct ResizeArgs {
    /// Input image.
    input: PathBuf,

    /// Output image.
    output: PathBuf,

    /// Target width.
    #[arg(long, allow_negative_numbers = true)]
    width: i32,

    /// Target height.
    #[arg(long, allow_negative_numbers = true)]
    height: i32,

    /// Averaging neighborhood size.
    #[arg(long, default_value_t = 1)]
    k: u32,
}

#[derive(Parser, Debug)]
struct DrawDemoArgs {
    /// Output image.
    output: PathBuf,

    /// Canvas width.
    #[arg(long, default_value_t = 320)]
    width: u32,

    /// Canvas height.
    #[arg(long, default_value_t = 240)]
    height: u32,

    /// Output magic number (P1..P6).
    #[arg(long, value_parser = parse_magic, default_value = "P6")]
    format: MagicNumber,
}

fn parse_magic(s: &str) -> Result<MagicNumber, String> {
    s.parse::<MagicNumber>().map_err(|e| e.to_string())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logger(cli.verbose)?;

    let options = ReadOptions::with_limits(cli.limits.to_limits());
    match cli.cmd {
        Command::Info(args) => cmd_info(args, &options),
        Command::Convert(args) => cmd_convert(args, &options),
        Command::Transform(args) => cmd_transform(args, &options),
        Command::Resize(args) => cmd_resize(args, &options),
        Command::DrawDemo(args) => cmd_draw_demo(args),
    }
}

/// Install the logger; warnings only unless `-v` is given.
fn setup_logger(verbose: u8) -> anyhow::Result<()> {
    let level = match verbose {
        0 => Level::Warn,
        1 => Level::Info,
        2 => Level::Debug,
        _ => Level::Trace,
    };
    simple_logger::init_with_level(level).context("initialize logger")?;
    info!("Log level: {}", level);
    Ok(())
}

impl LimitArgs {
    fn to_limits(&self) -> Limits {
        let mut limits = Limits::none();
        if let Some(w) = self.max_width {
            limits = limits.max_width(w);
        }
        if let Some(h) = self.max_height {
            limits = limits.max_height(h);
        }
        if let Some(n) = self.max_pixels {
            limits = limits.max_pixels(n);
        }
        limits
    }
}

fn load(path: &Path, options: &ReadOptions) -> anyhow::Result<Pix> {
    read_image_with_options(path, options).with_context(|| format!("read '{}'", path.display()))
}

fn save(pix: &Pix, path: &Path, magic: MagicNumber) -> anyhow::Result<()> {
    write_image(pix, path, magic).with_context(|| format!("write '{}'", path.display()))?;
    info!("wrote {}", path.display());
    Ok(())
}

/// Bring `pix` to the kind that `magic` encodes.
fn project(pix: Pix, magic: MagicNumber) -> anyhow::Result<Pix> {
    let mut pix = if pix.kind() == magic.kind() {
        pix
    } else {
        pix.convert_to_kind(magic.kind())
    };
    pix.set_magic_number(magic)?;
    Ok(pix)
}

fn cmd_info(args: InfoArgs, options: &ReadOptions) -> anyhow::Result<()> {
    let magic = detect_format(&args.input)
        .with_context(|| format!("detect format of '{}'", args.input.display()))?;
    info!("{}: {}", args.input.display(), magic);

    if args.decode {
        let pix = load(&args.input, options)?;
        let label = args.input.display().to_string();
        pix.print_info(&mut std::io::stdout().lock(), Some(&label))?;
        return Ok(());
    }

    let header = read_image_header(&args.input)
        .with_context(|| format!("read header of '{}'", args.input.display()))?;
    println!("{}", args.input.display());
    println!("  format:    {}", header.magic);
    println!("  kind:      {:?}", header.kind());
    println!("  size:      {}x{}", header.width, header.height);
    println!("  max value: {}", header.max_value);
    Ok(())
}

fn cmd_convert(args: ConvertArgs, options: &ReadOptions) -> anyhow::Result<()> {
    let pix = project(load(&args.input, options)?, args.format)?;
    save(&pix, &args.output, args.format)
}

fn cmd_transform(args: TransformArgs, options: &ReadOptions) -> anyhow::Result<()> {
    let mut pix = load(&args.input, options)?;
    if let Some(magic) = args.format {
        pix = project(pix, magic)?;
    }
    if let Some(max) = args.max_value {
        pix.set_max_value(max)
            .with_context(|| format!("set maximum value {max}"))?;
    }
    if args.invert {
        pix.invert();
    }
    if args.flip_h {
        flip_lr(&mut pix);
    }
    if args.flip_v {
        flip_tb(&mut pix);
    }
    rotate_orth(&mut pix, args.rotate);

    let magic = pix.magic_number();
    save(&pix, &args.output, magic)
}

fn cmd_resize(args: ResizeArgs, options: &ReadOptions) -> anyhow::Result<()> {
    let pix = load(&args.input, options)?;
    let resample = ResampleOptions::with_size(args.width, args.height).neighborhood(args.k);
    let out = resample_with_options(&pix, &resample)
        .with_context(|| format!("resize to {}x{}", args.width, args.height))?;
    save(&out, &args.output, out.magic_number())
}

fn cmd_draw_demo(args: DrawDemoArgs) -> anyhow::Result<()> {
    let mut pix = Pix::new_pixmap(args.width, args.height, 255)?;
    let (w, h) = (args.width as i32, args.height as i32);
    let (cx, cy) = (w / 2, h / 2);

    pix.render_filled_box(Point::new(0, 0), w, h, Pixel::rgb(16, 16, 32));
    pix.render_sierpinski(5, Point::new(w / 8, h - 1), w * 3 / 4, Pixel::rgb(40, 80, 40));
    pix.render_line(Point::new(0, 0), Point::new(w - 1, h - 1), Pixel::rgb(255, 255, 255));
    pix.render_box(Point::new(4, 4), w - 9, h - 9, Pixel::rgb(200, 200, 0));
    pix.render_filled_box(Point::new(8, 8), w / 6, h / 6, Pixel::rgb(0, 120, 255));
    pix.render_circle(Point::new(w - w / 6, h / 5), h / 10, Pixel::rgb(255, 128, 0));
    pix.render_filled_circle(Point::new(cx, cy), h / 6, Pixel::rgb(220, 20, 60));
    pix.render_triangle(
        Point::new(w / 10, h - h / 10),
        Point::new(w / 4, h / 2),
        Point::new(w / 3, h - h / 10),
        Pixel::rgb(0, 255, 0),
    );
    pix.render_filled_triangle(
        Point::new(w - w / 3, h - h / 10),
        Point::new(w - w / 4, h / 2),
        Point::new(w - w / 10, h - h / 10),
        Pixel::rgb(0, 200, 200),
    );
    let star = [
        Point::new(cx, cy - h / 3),
        Point::new(cx + w / 10, cy + h / 4),
        Point::new(cx - w / 7, cy - h / 12),
        Point::new(cx + w / 7, cy - h / 12),
        Point::new(cx - w / 10, cy + h / 4),
    ];
    pix.render_filled_polygon(&star, Pixel::rgb(255, 215, 0));
    pix.render_polygon(&star, Pixel::rgb(255, 255, 255));

    let pix = project(pix, args.format)?;
    save(&pix, &args.output, args.format)
}
