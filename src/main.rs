use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use lockstep::{any_of, equal_to, find, parse_sequence, transform, BackInserter, SliceCursor};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Arity is fixed per dispatch arm, so the CLI supports a bounded number.
const MAX_SECONDARIES: usize = 3;

#[derive(Parser, Debug)]
#[command(
    name = "lockstep",
    about = "Lock-step find / any / transform over integer sequences"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the first index where VALUE equals any of the aligned elements.
    Find {
        /// Value to look for.
        #[arg(long, allow_hyphen_values = true)]
        value: i64,
        /// Primary sequence (`1,2,3` or `0..10`); its length bounds the search.
        #[arg(allow_hyphen_values = true)]
        primary: String,
        /// Secondary sequences, each at least as long as the primary.
        #[arg(allow_hyphen_values = true)]
        secondaries: Vec<String>,
    },
    /// Print whether VALUE equals any of the aligned elements at some index.
    Any {
        /// Value to look for.
        #[arg(long, allow_hyphen_values = true)]
        value: i64,
        /// Primary sequence (`1,2,3` or `0..10`).
        #[arg(allow_hyphen_values = true)]
        primary: String,
        /// Secondary sequences, each at least as long as the primary.
        #[arg(allow_hyphen_values = true)]
        secondaries: Vec<String>,
    },
    /// Fold the aligned elements at every index and print the results.
    Transform {
        /// Fold applied across the aligned elements.
        #[arg(long, value_enum, default_value_t = Op::Plus)]
        op: Op,
        /// Primary sequence (`1,2,3` or `0..10`).
        #[arg(allow_hyphen_values = true)]
        primary: String,
        /// Secondary sequences, each at least as long as the primary.
        #[arg(allow_hyphen_values = true)]
        secondaries: Vec<String>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Op {
    /// Sum of the aligned elements.
    Plus,
    /// Product of the aligned elements.
    Multiply,
}

impl Op {
    fn apply<const N: usize>(self, values: [i64; N]) -> Option<i64> {
        match self {
            Op::Plus => values.into_iter().try_fold(0i64, i64::checked_add),
            Op::Multiply => values.into_iter().try_fold(1i64, i64::checked_mul),
        }
    }
}

/// Parsed primary sequence plus the secondaries traversed alongside it.
#[derive(Debug)]
struct Inputs {
    primary: Vec<i64>,
    secondaries: Vec<Vec<i64>>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Find {
            value,
            primary,
            secondaries,
        } => {
            let inputs = load_inputs(&primary, &secondaries)?;
            match run_find(value, &inputs)? {
                Some(index) => println!("match at index {index}"),
                None => println!("no match"),
            }
        }
        Commands::Any {
            value,
            primary,
            secondaries,
        } => {
            let inputs = load_inputs(&primary, &secondaries)?;
            println!("{}", run_any(value, &inputs)?);
        }
        Commands::Transform {
            op,
            primary,
            secondaries,
        } => {
            let inputs = load_inputs(&primary, &secondaries)?;
            let output = run_transform(op, &inputs)?;
            let rendered: Vec<String> = output.iter().map(i64::to_string).collect();
            println!("{}", rendered.join(","));
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Parse every sequence and enforce the length precondition the
/// algorithms themselves do not check.
fn load_inputs(primary: &str, secondaries: &[String]) -> Result<Inputs> {
    let primary = parse_sequence(primary)
        .with_context(|| format!("invalid primary sequence '{primary}'"))?;

    if secondaries.len() > MAX_SECONDARIES {
        bail!(
            "at most {MAX_SECONDARIES} secondary sequences are supported, got {}",
            secondaries.len()
        );
    }

    let mut parsed = Vec::with_capacity(secondaries.len());
    for (idx, text) in secondaries.iter().enumerate() {
        let seq = parse_sequence(text)
            .with_context(|| format!("invalid secondary sequence {} '{text}'", idx + 1))?;
        if seq.len() < primary.len() {
            bail!(
                "secondary sequence {} has {} elements, primary has {}",
                idx + 1,
                seq.len(),
                primary.len()
            );
        }
        parsed.push(seq);
    }

    debug!(
        primary_len = primary.len(),
        secondaries = parsed.len(),
        "inputs loaded"
    );
    Ok(Inputs {
        primary,
        secondaries: parsed,
    })
}

fn run_find(value: i64, inputs: &Inputs) -> Result<Option<usize>> {
    let (b, e) = SliceCursor::bounds(&inputs.primary);
    let hit = match inputs.secondaries.as_slice() {
        [] => find(|x: &i64| value == *x, b, e, ()).0,
        [s1] => {
            find(
                |x: &i64, y: &i64| equal_to!(value, *x, *y),
                b,
                e,
                (SliceCursor::begin(s1),),
            )
            .0
        }
        [s1, s2] => {
            find(
                |x: &i64, y: &i64, z: &i64| equal_to!(value, *x, *y, *z),
                b,
                e,
                (SliceCursor::begin(s1), SliceCursor::begin(s2)),
            )
            .0
        }
        [s1, s2, s3] => {
            find(
                |x: &i64, y: &i64, z: &i64, w: &i64| equal_to!(value, *x, *y, *z, *w),
                b,
                e,
                (
                    SliceCursor::begin(s1),
                    SliceCursor::begin(s2),
                    SliceCursor::begin(s3),
                ),
            )
            .0
        }
        more => bail!("unsupported number of secondary sequences: {}", more.len()),
    };

    let index = (hit != e).then(|| hit.position());
    info!(?index, "find completed");
    Ok(index)
}

fn run_any(value: i64, inputs: &Inputs) -> Result<bool> {
    let (b, e) = SliceCursor::bounds(&inputs.primary);
    let hit = match inputs.secondaries.as_slice() {
        [] => any_of(|x: &i64| value == *x, b, e, ()),
        [s1] => any_of(
            |x: &i64, y: &i64| equal_to!(value, *x, *y),
            b,
            e,
            (SliceCursor::begin(s1),),
        ),
        [s1, s2] => any_of(
            |x: &i64, y: &i64, z: &i64| equal_to!(value, *x, *y, *z),
            b,
            e,
            (SliceCursor::begin(s1), SliceCursor::begin(s2)),
        ),
        [s1, s2, s3] => any_of(
            |x: &i64, y: &i64, z: &i64, w: &i64| equal_to!(value, *x, *y, *z, *w),
            b,
            e,
            (
                SliceCursor::begin(s1),
                SliceCursor::begin(s2),
                SliceCursor::begin(s3),
            ),
        ),
        more => bail!("unsupported number of secondary sequences: {}", more.len()),
    };

    info!(hit, "any completed");
    Ok(hit)
}

fn run_transform(op: Op, inputs: &Inputs) -> Result<Vec<i64>> {
    let (b, e) = SliceCursor::bounds(&inputs.primary);
    let mut folded: Vec<Option<i64>> = Vec::with_capacity(inputs.primary.len());
    let out = BackInserter::new(&mut folded);

    match inputs.secondaries.as_slice() {
        [] => {
            transform(|x: &i64| op.apply([*x]), out, b, e, ());
        }
        [s1] => {
            transform(
                |x: &i64, y: &i64| op.apply([*x, *y]),
                out,
                b,
                e,
                (SliceCursor::begin(s1),),
            );
        }
        [s1, s2] => {
            transform(
                |x: &i64, y: &i64, z: &i64| op.apply([*x, *y, *z]),
                out,
                b,
                e,
                (SliceCursor::begin(s1), SliceCursor::begin(s2)),
            );
        }
        [s1, s2, s3] => {
            transform(
                |x: &i64, y: &i64, z: &i64, w: &i64| op.apply([*x, *y, *z, *w]),
                out,
                b,
                e,
                (
                    SliceCursor::begin(s1),
                    SliceCursor::begin(s2),
                    SliceCursor::begin(s3),
                ),
            );
        }
        more => bail!("unsupported number of secondary sequences: {}", more.len()),
    }

    let output = folded
        .into_iter()
        .collect::<Option<Vec<i64>>>()
        .with_context(|| format!("{op:?} overflowed i64"))?;
    info!(len = output.len(), ?op, "transform completed");
    Ok(output)
}
