use log::{info, warn};
use optpair::{cli::parse_args, OptionPair, Schedule};

fn main() {
    // Parsing cli args
    let cli_args = parse_args();

    // set up enviroment
    env_logger::Builder::from_default_env()
        .filter_level(cli_args.verbosity.log_level_filter())
        .init();
    configure_pool(cli_args.threads);

    let schedule = if cli_args.background {
        Schedule::Background
    } else {
        Schedule::Inline
    };

    let pair = OptionPair::of(cli_args.left, cli_args.right)
        .run_if_only_right_empty(|| info!("right slot is empty"))
        .run_if_only_left_empty(|| info!("left slot is empty"));
    println!("presence: {:?}", pair.presence());

    // joint filter empties the whole pair when it fails
    let pair = match cli_args.max_total {
        Some(max) => pair.filter(|l, r| total(*l, r) <= max),
        None => pair,
    };
    println!("filtered: {:?}", pair.get());
    println!("reduced: {:?}", pair.as_ref().reduce(|l, r| total(*l, r)));

    match pair.then_combine_on(schedule, |l, r| total(l, &r)).wait() {
        Ok(Some(sum)) => println!("combined: {sum}"),
        Ok(None) => println!("combined: nothing to combine"),
        Err(why) => eprintln!("Failed to combine: {}", why),
    }
}

/// Left value plus the length of the right value
fn total(left: i64, right: &str) -> i64 {
    left.saturating_add(right.len() as i64)
}

#[cfg(feature = "parallel")]
fn configure_pool(threads: Option<usize>) {
    if let Some(threads) = threads {
        if let Err(why) = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
        {
            warn!("Failed to configure worker pool: {}", why);
        }
    }
}

#[cfg(not(feature = "parallel"))]
fn configure_pool(threads: Option<usize>) {
    if threads.is_some() {
        warn!("--threads has no effect without the `parallel` feature");
    }
}
