//! Definition of command line arguments

use clap::Parser;

pub use clap_verbosity_flag::Verbosity;

/// Parses the commandline arguments into an [Arguments] struct
pub fn parse_args() -> Arguments {
    Arguments::parse()
}

/// Argument definitions for [clap::Parser]
#[derive(Parser, Debug)]
#[clap(version, about)]
pub struct Arguments {
    /// The value of the left slot, empty when omitted
    #[clap(short, long, allow_negative_numbers = true, value_name = "INT")]
    pub left: Option<i64>,

    /// The value of the right slot, empty when omitted
    #[clap(short, long, value_name = "TEXT")]
    pub right: Option<String>,

    /// Upper bound for the joint filter
    ///
    /// A pair holding both values is kept only if the left value plus the length of the right value
    /// is at most NUM, and is emptied entirely otherwise
    #[clap(
        short,
        long = "max-total",
        allow_negative_numbers = true,
        value_name = "NUM"
    )]
    pub max_total: Option<i64>,

    /// Combine the values on a background worker instead of the calling thread
    #[clap(short, long)]
    pub background: bool,

    /// number of background worker threads
    #[clap(
        short,
        long,
        value_parser = valid_count::<usize>,
        value_name = "NUM"
    )]
    pub threads: Option<usize>,

    #[clap(flatten)]
    pub verbosity: self::Verbosity,
}

/// Checks whether the given integer value is greater than 0
fn valid_count<T>(s: &str) -> Result<T, String>
where
    T: num_traits::PrimInt + std::str::FromStr,
    <T as std::str::FromStr>::Err: std::fmt::Display,
{
    match s.parse::<T>() {
        Ok(count) => {
            if count > T::zero() {
                Ok(count)
            } else {
                Err("count must be greater than 0".to_string())
            }
        }
        Err(e) => Err(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_cli() {
        use clap::CommandFactory;
        Arguments::command().debug_assert()
    }

    #[test]
    fn zero_threads_rejected() {
        use clap::CommandFactory;
        let res = Arguments::command().try_get_matches_from(["optpair", "--threads", "0"]);

        assert!(res.is_err(), "Expected an error during argument parsing");

        assert_eq!(
            res.as_ref().unwrap_err().kind(),
            clap::error::ErrorKind::ValueValidation,
            "Expected a count validation error"
        );
    }

    #[test]
    fn slots_are_optional() {
        let args = Arguments::try_parse_from(["optpair", "--left", "-3"]).unwrap();
        assert_eq!(args.left, Some(-3));
        assert_eq!(args.right, None);
        assert!(!args.background);

        let args = Arguments::try_parse_from(["optpair", "-r", "abc", "-b", "-m", "10"]).unwrap();
        assert_eq!(args.left, None);
        assert_eq!(args.right.as_deref(), Some("abc"));
        assert_eq!(args.max_total, Some(10));
        assert!(args.background);
    }

    #[test]
    fn max_total_accepts_zero_and_negative_bounds() {
        let args = Arguments::try_parse_from(["optpair", "--max-total", "0"]).unwrap();
        assert_eq!(args.max_total, Some(0));

        let args = Arguments::try_parse_from(["optpair", "-l", "-8", "-m", "-5"]).unwrap();
        assert_eq!(args.left, Some(-8));
        assert_eq!(args.max_total, Some(-5));
    }
}
