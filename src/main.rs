use clap::Parser;
use icon_mill::{output, pipeline};
use std::path::PathBuf;
use std::process::ExitCode;

fn version_string() -> &'static str {
    let hash = env!("GIT_HASH");
    if hash.is_empty() {
        env!("CARGO_PKG_VERSION")
    } else {
        // Leaked once at startup — trivial, called exactly once
        Box::leak(format!("{} ({hash})", env!("CARGO_PKG_VERSION")).into_boxed_str())
    }
}

#[derive(Parser)]
#[command(name = "icon-mill")]
#[command(about = "Generate the Android/iOS launcher icon set from one image")]
#[command(long_about = "\
Generate the Android/iOS launcher icon set from one image

Takes a single source image and writes every launcher icon a mobile app
package needs: the five Android mipmap densities, the 512px Play Store
icon, and the iOS AppIcon sizes — 13 PNG files under the output directory:

  build_icons/
  ├── android/
  │   ├── mipmap-mdpi/ic_launcher.png      48px
  │   ├── ...                              72/96/144/192px
  │   └── playstore-icon.png               512px
  └── ios/
      ├── AppIcon-20.png ... AppIcon-1024.png

The input is looked up first at the path as given, then under the working
directory, then next to the installed binary. Non-square sources are
center-cropped to a square by default; pass --no-crop to skip the crop
(outputs are still square, so proportions will stretch).

Exits 0 when at least one icon was written, 1 otherwise.")]
#[command(version = version_string())]
struct Cli {
    /// Source image
    #[arg(short, long, default_value = "icon.png")]
    input: PathBuf,

    /// Output root directory
    #[arg(short, long, default_value = "build_icons")]
    output: PathBuf,

    /// Keep the source aspect ratio instead of center-cropping to a square
    #[arg(long)]
    no_crop: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let options = pipeline::RunOptions {
        input: cli.input,
        output_dir: cli.output.clone(),
        crop_square: !cli.no_crop,
    };

    let report = match pipeline::run(&options) {
        Ok(report) => report,
        Err(err) => {
            output::print_fatal(&err);
            println!("\n{}", output::EMPTY_WARNING);
            return ExitCode::FAILURE;
        }
    };

    output::print_report(&report);
    if report.generated() == 0 {
        println!("\n{}", output::EMPTY_WARNING);
        return ExitCode::FAILURE;
    }

    println!(
        "\n{}",
        output::format_summary(report.generated(), &cli.output)
    );
    ExitCode::SUCCESS
}
