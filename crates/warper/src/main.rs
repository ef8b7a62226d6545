use argh::FromArgs;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use warpix::image::{Image, ImageDtype};
use warpix::imgproc::interpolation::InterpolationMode;
use warpix::imgproc::warp::{compose, warp, WarpOp};
use warpix::io::functional::{read_image_any_rgba8, write_image_any_rgba8};

fn parse_interpolation(value: &str) -> Result<InterpolationMode, String> {
    match value {
        "nearest" => Ok(InterpolationMode::Nearest),
        "bilinear" => Ok(InterpolationMode::Bilinear),
        other => Err(format!(
            "unknown interpolation '{other}', expected nearest or bilinear"
        )),
    }
}

#[derive(FromArgs)]
/// Warp an image with an interactively built sequence of transforms
struct Args {
    /// path to an input image
    #[argh(positional)]
    input: PathBuf,

    /// optional path to save the warped image to
    #[argh(positional)]
    output: Option<PathBuf>,

    /// interpolation mode: nearest or bilinear (default nearest)
    #[argh(
        option,
        from_str_fn(parse_interpolation),
        default = "InterpolationMode::Nearest"
    )]
    interpolation: InterpolationMode,
}

/// Prompt for a single numeric parameter. Returns `None` when the input does
/// not parse as a number.
fn prompt_f32(
    input: &mut impl BufRead,
    output: &mut impl Write,
    prompt: &str,
) -> std::io::Result<Option<f32>> {
    writeln!(output, "{prompt}")?;
    write!(output, "> ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(line.trim().parse::<f32>().ok())
}

/// Read an ordered list of warp commands interactively.
///
/// Single-letter commands select the primitive (r, s, t, h, f, p) and d ends
/// the session. Non-numeric parameters reject the whole command and re-prompt
/// without touching the accumulated list.
fn read_ops(input: &mut impl BufRead, output: &mut impl Write) -> std::io::Result<Vec<WarpOp>> {
    let mut ops = Vec::new();

    loop {
        writeln!(output, "enter a command (r, s, t, h, f, p, d)")?;
        write!(output, "> ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // end of input behaves like an explicit done
            break;
        }

        let op = match line.trim() {
            "r" => prompt_f32(input, output, "input theta in degrees")?.map(WarpOp::Rotate),
            "s" => {
                let sx = prompt_f32(input, output, "input x factor")?;
                let sy = prompt_f32(input, output, "input y factor")?;
                sx.zip(sy).map(|(sx, sy)| WarpOp::Scale(sx, sy))
            }
            "t" => {
                let dx = prompt_f32(input, output, "input delta x")?;
                let dy = prompt_f32(input, output, "input delta y")?;
                dx.zip(dy).map(|(dx, dy)| WarpOp::Translate(dx, dy))
            }
            "h" => {
                let hx = prompt_f32(input, output, "input x factor")?;
                let hy = prompt_f32(input, output, "input y factor")?;
                hx.zip(hy).map(|(hx, hy)| WarpOp::Shear(hx, hy))
            }
            "f" => {
                // nonzero triggers the flip on that axis
                let fx = prompt_f32(input, output, "input flip x")?;
                let fy = prompt_f32(input, output, "input flip y")?;
                fx.zip(fy)
                    .map(|(fx, fy)| WarpOp::Flip(fx != 0.0, fy != 0.0))
            }
            "p" => {
                let px = prompt_f32(input, output, "input x factor")?;
                let py = prompt_f32(input, output, "input y factor")?;
                px.zip(py).map(|(px, py)| WarpOp::PerspectiveSkew(px, py))
            }
            "d" => break,
            _ => {
                writeln!(output, "invalid command, enter r, s, t, h, f, p, d")?;
                continue;
            }
        };

        match op {
            Some(op) => ops.push(op),
            None => writeln!(output, "invalid parameter, command ignored")?,
        }
    }

    Ok(ops)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Args = argh::from_env();

    let image = read_image_any_rgba8(&args.input)?;
    log::info!(
        "read {} ({} x {})",
        args.input.display(),
        image.cols(),
        image.rows()
    );

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let ops = read_ops(&mut stdin.lock(), &mut stdout.lock())?;

    let m = compose(&ops);
    log::info!("accumulated matrix:\n{m}");

    let image_f32 = image.cast::<f32>()?;
    let (warped_f32, bounds) = warp(&image_f32, &m, args.interpolation)?;
    log::info!(
        "warped onto a {} x {} canvas, origin ({:.2}, {:.2})",
        bounds.width,
        bounds.height,
        bounds.x_min,
        bounds.y_min
    );

    if let Some(output) = &args.output {
        let warped = Image::<u8, 4>::new(
            warped_f32.size(),
            warped_f32
                .as_slice()
                .iter()
                .map(|&x| u8::from_f32(x))
                .collect(),
        )?;
        write_image_any_rgba8(output, &warped)?;
        log::info!("saved {}", output.display());
    }

    Ok(())
}
