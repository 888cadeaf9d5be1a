use std::error::Error;

mod args;
mod scene;

#[derive(Debug)]
struct Args {
    seed: Option<u64>,
    count: usize,
    colors: bool,
}

fn help_message(arg0: &str) {
    println!(
        "\
Usage: {arg0} [options]

Blits random windows of a checkerboard onto a 40x25 text screen and prints it.

Options:
    -h, --help       show this message
    -s, --seed=N     seed for the rectangle generator (default random)
    -n, --count=N    number of random rectangles (default 8)
    -c, --colors     also print the color plane

Set RUST_LOG=debug to trace every blit.
"
    );
}

fn parse_args(args: impl Iterator<Item = String>) -> Result<Option<Args>, Box<dyn Error>> {
    let mut parsed = Args {
        seed: None,
        count: 8,
        colors: false,
    };

    let res = args::parse_args(
        args,
        |flag, inline, args, arg0| -> Result<_, Box<dyn Error>> {
            match flag {
                "h" | "-help" => {
                    help_message(arg0);
                    return Ok(None);
                }
                "s" | "-seed" => parsed.seed = Some(args::parse_number("-seed", args, inline)?),
                "n" | "-count" => parsed.count = args::parse_number("-count", args, inline)?,
                "c" | "-colors" => parsed.colors = args::parse_flag_optional_bool(inline)?,
                c => return Err(args::ArgError::UnknownFlag(c.into()).into()),
            }
            Ok(Some(()))
        },
        |_, arg| Err(args::ArgError::UnexpectedArg(arg).into()),
    )?;

    Ok(res.map(|()| parsed))
}

fn main() {
    env_logger::init();

    let args = match parse_args(std::env::args()) {
        Ok(Some(args)) => args,
        Ok(None) => return,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let seed = args.seed.unwrap_or_else(rand::random);
    let screen = scene::render(seed, args.count);

    if let Err(e) = scene::write_screen(&screen, &mut std::io::stdout().lock(), args.colors) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
