use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use temphum_guide::{Lesson, Walkthrough};

const BANNER: &str = r#"
 _____                          _   _
|_   _|__ _ __ ___  _ __       | | | |_   _ _ __ ___
  | |/ _ \ '_ ` _ \| '_ \   _  | |_| | | | | '_ ` _ \
  | |  __/ | | | | | |_) | (_) |  _  | |_| | | | | | |
  |_|\___|_| |_| |_| .__/      |_| |_|\__,_|_| |_| |_|
                   |_|
"#;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Built-in lesson to run
    #[arg(short, long, value_enum, default_value = "mcu")]
    lesson: LessonArg,

    /// JSON file to load a custom lesson catalog from (overrides --lesson)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Pacing delay between printed characters, in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LessonArg {
    /// ESP-01 with an external 8-bit MCU
    Mcu,
    /// ESP-01 running MicroPython
    Micropython,
}

impl From<LessonArg> for Lesson {
    fn from(arg: LessonArg) -> Self {
        match arg {
            LessonArg::Mcu => Lesson::Mcu,
            LessonArg::Micropython => Lesson::MicroPython,
        }
    }
}

fn main() {
    let args = Args::parse();

    let mut walkthrough = match &args.catalog {
        Some(path) => Walkthrough::from_json(path).expect("Failed to load catalog"),
        None => Walkthrough::builtin(args.lesson.into()),
    };
    if let Some(ms) = args.delay_ms {
        walkthrough = walkthrough.delay(Duration::from_millis(ms));
    }
    walkthrough = walkthrough.colors(!args.no_color);

    println!("{BANNER}");
    if let Err(e) = walkthrough.run() {
        eprintln!("Error running walkthrough: {}", e);
        std::process::exit(1);
    }
}
