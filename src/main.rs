//! Intvec CLI - build, slice, map and print integer vectors

use clap::{Parser, Subcommand, ValueEnum};
use intvec::IntVec;
use std::fs;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "intvec")]
#[command(about = "Exercise a growable integer vector")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the standard construct/push/slice/map walkthrough
    Demo {
        /// Show capacity and length after each step
        #[arg(short = 'V', long)]
        verbose: bool,
    },

    /// Build a vector from VALUES and print it
    Render {
        /// Values to push, in order
        #[arg(value_name = "VALUES", allow_negative_numbers = true)]
        values: Vec<i32>,

        /// Initial capacity (raised to 1 if zero)
        #[arg(short, long, default_value_t = 0)]
        capacity: usize,

        /// Keep only the elements in LEFT..RIGHT
        #[arg(
            short,
            long,
            num_args = 2,
            value_names = ["LEFT", "RIGHT"],
            action = clap::ArgAction::Set
        )]
        slice: Option<Vec<usize>>,

        /// Transform applied to every element after slicing
        #[arg(short, long, value_enum)]
        map: Option<Transform>,

        /// Output file (default: stdout)
        #[arg(short, long, value_name = "OUTPUT")]
        output: Option<PathBuf>,

        /// Show capacity and length after each step
        #[arg(short = 'V', long)]
        verbose: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Transform {
    Double,
    Negate,
    Square,
    Increment,
}

impl Transform {
    fn apply(self, x: i32) -> i32 {
        match self {
            Transform::Double => x.wrapping_mul(2),
            Transform::Negate => x.wrapping_neg(),
            Transform::Square => x.wrapping_mul(x),
            Transform::Increment => x.wrapping_add(1),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Demo { verbose } => {
            if let Err(e) = run_demo(verbose) {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
        Commands::Render {
            values,
            capacity,
            slice,
            map,
            output,
            verbose,
        } => {
            let range = slice.map(|bounds| (bounds[0], bounds[1]));
            if let Err(e) = render_values(&values, capacity, range, map, output, verbose) {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
    }
}

fn report(stage: &str, v: &IntVec, verbose: bool) {
    if verbose {
        eprintln!("{}: length {}, capacity {}", stage, v.len(), v.capacity());
    }
}

fn run_demo(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let floor = IntVec::with_capacity(0)?;
    println!("new(0): capacity {}", floor.capacity());

    let mut v = IntVec::with_capacity(10)?;
    for i in 0..10 {
        v.push(i)?;
    }
    report("filled", &v, verbose);
    println!("filled: {} (capacity {})", v, v.capacity());

    v.push(11)?;
    println!("overflowed: {} (capacity {})", v, v.capacity());

    let slice = v.slice(0, 5)?;
    report("slice", &slice, verbose);
    println!("slice 0..5: {}", slice);

    let doubled = slice.map(|x| x * 2)?;
    report("map", &doubled, verbose);
    println!("doubled: {}", doubled);

    Ok(())
}

fn render_values(
    values: &[i32],
    capacity: usize,
    range: Option<(usize, usize)>,
    transform: Option<Transform>,
    output: Option<PathBuf>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut v = IntVec::with_capacity(capacity)?;
    report("new", &v, verbose);

    for &value in values {
        v.push(value)?;
    }
    report("pushed", &v, verbose);

    if let Some((left, right)) = range {
        v = v
            .slice(left, right)
            .map_err(|e| format!("Slice {}..{} failed: {}", left, right, e))?;
        report("slice", &v, verbose);
    }

    if let Some(transform) = transform {
        v = v.map(|x| transform.apply(x))?;
        report("map", &v, verbose);
    }

    let listing = format!("{}\n", v);

    // Output result
    match output {
        Some(path) => {
            fs::write(&path, listing)
                .map_err(|e| format!("Failed to write output file '{}': {}", path.display(), e))?;
            if verbose {
                eprintln!("Output written to: {}", path.display());
            }
        }
        None => {
            print!("{}", listing);
        }
    }

    Ok(())
}
